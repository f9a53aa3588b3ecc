use self::traits::ServiceManager;
use crate::{
    cli::ServiceCommand,
    config::{Config, RunitConfig},
};
use log::{debug, error, info, warn};
use std::{process::exit, sync::OnceLock};

pub mod noop;
pub mod runit;
pub mod systemd;
pub mod traits;

type BoxedManager = Box<dyn ServiceManager + Send + Sync>;

/// Probes the host for a supported service manager, first match wins.
/// Hosts without one fall back to the no-op manager.
pub fn detect_manager(runit: &RunitConfig) -> BoxedManager {
    if systemd::Manager.detect() {
        debug!("Using systemd service management");
        return Box::new(systemd::Manager);
    }

    let manager = runit::Manager::new(runit);
    if manager.detect() {
        debug!("Using runit service management");
        return Box::new(manager);
    }

    warn!("No supported service manager found, treating service operations as no-ops");
    Box::new(noop::Manager)
}

static SELECTOR: Selector = Selector::new();

/// Returns the service manager for this host, probing on first use. The
/// probe runs at most once per process; the first caller's configuration
/// wins and the host is never re-probed, even if the init system changes
/// while the process is alive.
pub fn services(runit: &RunitConfig) -> &'static (dyn ServiceManager + Send + Sync) {
    SELECTOR.resolve_with(|| detect_manager(runit))
}

struct Selector {
    cell: OnceLock<BoxedManager>,
}

impl Selector {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    fn resolve_with<F>(&self, probe: F) -> &(dyn ServiceManager + Send + Sync)
    where
        F: FnOnce() -> BoxedManager,
    {
        self.cell.get_or_init(probe).as_ref()
    }
}

pub fn main(cmd: ServiceCommand, config: &Config) {
    let manager = services(&config.runit);

    match cmd {
        ServiceCommand::Enable { service } => {
            perform(manager.enable(&service), "enable", "enabled", &service);
        }
        ServiceCommand::Disable { service } => {
            perform(manager.disable(&service), "disable", "disabled", &service);
        }
        ServiceCommand::Restart { service } => {
            perform(manager.restart(&service), "restart", "restarted", &service);
        }
        ServiceCommand::Status { service } => {
            if manager.is_enabled(&service) {
                info!("Service {service} is enabled");
            } else {
                info!("Service {service} is not enabled");
            }
        }
        ServiceCommand::Detect => {
            info!("Service management: {}", manager.name());

            if manager.is_system_stopping() {
                warn!("The system is shutting down");
            }
        }
    }
}

fn perform(succeeded: bool, action_name: &str, action_past: &str, service: &str) {
    if !succeeded {
        error!("Failed to {action_name} service {service}");
        exit(1);
    }

    info!("Service {service} {action_past} successfully");
}
