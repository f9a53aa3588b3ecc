use super::traits::ServiceManager;
use crate::{config::RunitConfig, exec};
use log::debug;
use std::{
    fs,
    os::unix::fs::{PermissionsExt, symlink},
    path::PathBuf,
};

const CMDLINE_CLIENT: &str = "sv";
/// A bare `sv` invocation prints usage and exits with this code.
const USAGE_EXIT_CODE: i32 = 100;
const OWNER_EXECUTE: u32 = 0o100;

/// Runit keeps no enablement flags; a service is enabled iff its definition
/// directory is linked into the runtime service tree and carries no `down`
/// marker. The tree locations come from the configuration since they differ
/// across distributions.
pub struct Manager {
    service_dir: PathBuf,
    sv_dir: PathBuf,
    stopit_path: PathBuf,
}

impl Manager {
    pub fn new(config: &RunitConfig) -> Self {
        Self {
            service_dir: config.service_dir.clone(),
            sv_dir: config.sv_dir.clone(),
            stopit_path: config.stopit_path.clone(),
        }
    }

    fn service_link(&self, name: &str) -> PathBuf {
        self.service_dir.join(name)
    }
}

impl ServiceManager for Manager {
    fn detect(&self) -> bool {
        exec::run_expecting(&[CMDLINE_CLIENT], &[USAGE_EXIT_CODE])
    }

    fn name(&self) -> &'static str {
        "runit"
    }

    fn enable(&self, name: &str) -> bool {
        if self.is_enabled(name) {
            return true;
        }

        match symlink(self.sv_dir.join(name), self.service_link(name)) {
            Ok(()) => true,
            Err(why) => {
                debug!(
                    "Failed to link {name} into {}: {why}",
                    self.service_dir.display()
                );
                false
            }
        }
    }

    fn disable(&self, name: &str) -> bool {
        if !self.is_enabled(name) {
            return true;
        }

        match fs::remove_file(self.service_link(name)) {
            Ok(()) => true,
            Err(why) => {
                debug!(
                    "Failed to unlink {name} from {}: {why}",
                    self.service_dir.display()
                );
                false
            }
        }
    }

    fn is_enabled(&self, name: &str) -> bool {
        let link = self.service_link(name);
        link.exists() && !link.join("down").exists()
    }

    fn restart(&self, name: &str) -> bool {
        exec::run(&[CMDLINE_CLIENT, "restart", name])
    }

    fn is_system_stopping(&self) -> bool {
        match fs::metadata(&self.stopit_path) {
            Ok(meta) => meta.permissions().mode() & OWNER_EXECUTE != 0,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Manager;
    use crate::{backend::traits::ServiceManager, config::RunitConfig};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn test_config(root: &TempDir) -> RunitConfig {
        let config = RunitConfig {
            service_dir: root.path().join("service"),
            sv_dir: root.path().join("sv"),
            stopit_path: root.path().join("stopit"),
        };
        fs::create_dir(&config.service_dir).unwrap();
        fs::create_dir(&config.sv_dir).unwrap();
        config
    }

    #[test]
    fn enable_then_disable_round_trip() {
        let root = TempDir::new().unwrap();
        let config = test_config(&root);
        fs::create_dir(config.sv_dir.join("sshd")).unwrap();
        let manager = Manager::new(&config);

        assert!(!manager.is_enabled("sshd"));
        assert!(manager.enable("sshd"));
        assert!(manager.is_enabled("sshd"));
        assert!(manager.disable("sshd"));
        assert!(!manager.is_enabled("sshd"));
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let root = TempDir::new().unwrap();
        let config = test_config(&root);
        fs::create_dir(config.sv_dir.join("crond")).unwrap();
        let manager = Manager::new(&config);

        assert!(manager.enable("crond"));
        assert!(manager.enable("crond"));
        assert!(manager.is_enabled("crond"));

        assert!(manager.disable("crond"));
        assert!(manager.disable("crond"));
        assert!(!manager.is_enabled("crond"));
    }

    #[test]
    fn down_marker_reports_disabled() {
        let root = TempDir::new().unwrap();
        let config = test_config(&root);
        fs::create_dir(config.sv_dir.join("ntpd")).unwrap();
        let manager = Manager::new(&config);

        assert!(manager.enable("ntpd"));
        fs::write(config.sv_dir.join("ntpd/down"), "").unwrap();
        assert!(!manager.is_enabled("ntpd"));

        // A downed service counts as already disabled; the link stays.
        assert!(manager.disable("ntpd"));
        assert!(
            config
                .service_dir
                .join("ntpd")
                .symlink_metadata()
                .is_ok()
        );
    }

    #[test]
    fn enable_does_not_check_the_definition() {
        let root = TempDir::new().unwrap();
        let config = test_config(&root);
        let manager = Manager::new(&config);

        // Linking a service with no definition directory leaves a dangling
        // link, which still reads back as not enabled.
        assert!(manager.enable("ghost"));
        assert!(!manager.is_enabled("ghost"));
    }

    #[test]
    fn missing_tree_reports_failure() {
        let root = TempDir::new().unwrap();
        let config = RunitConfig {
            service_dir: root.path().join("no-service"),
            sv_dir: root.path().join("no-sv"),
            stopit_path: root.path().join("no-stopit"),
        };
        let manager = Manager::new(&config);

        assert!(!manager.is_enabled("sshd"));
        assert!(!manager.enable("sshd"));
        assert!(manager.disable("sshd"));
    }

    #[test]
    fn stopit_execute_bit_signals_shutdown() {
        let root = TempDir::new().unwrap();
        let config = test_config(&root);
        let manager = Manager::new(&config);

        assert!(!manager.is_system_stopping());

        fs::write(&config.stopit_path, "").unwrap();
        fs::set_permissions(&config.stopit_path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!manager.is_system_stopping());

        fs::set_permissions(&config.stopit_path, fs::Permissions::from_mode(0o744)).unwrap();
        assert!(manager.is_system_stopping());
    }
}
