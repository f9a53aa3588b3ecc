use super::traits::ServiceManager;
use crate::exec;
use regex::Regex;

const CMDLINE_CLIENT: &str = "systemctl";
const SHUTDOWN_JOB: &str = r"\b(shutdown|reboot|halt|poweroff)\.target.*start";

pub struct Manager;

impl ServiceManager for Manager {
    fn detect(&self) -> bool {
        exec::run(&[CMDLINE_CLIENT, "status"])
    }

    fn name(&self) -> &'static str {
        "systemd"
    }

    fn enable(&self, name: &str) -> bool {
        exec::run(&[CMDLINE_CLIENT, "enable", name])
    }

    fn disable(&self, name: &str) -> bool {
        exec::run(&[CMDLINE_CLIENT, "disable", name])
    }

    fn is_enabled(&self, name: &str) -> bool {
        exec::run(&[CMDLINE_CLIENT, "is-enabled", name])
    }

    fn restart(&self, name: &str) -> bool {
        exec::run(&[CMDLINE_CLIENT, "restart", name, "-q"])
    }

    fn is_system_stopping(&self) -> bool {
        let Some((_, state)) = exec::execute(&[CMDLINE_CLIENT, "is-system-running"]) else {
            return false;
        };

        // TODO: confirm the intended polarity with the product owner. A
        // manager state of "stopping" currently reports as not stopping.
        if state.starts_with("stopping") {
            return false;
        }

        let Some((code, jobs)) = exec::execute(&[CMDLINE_CLIENT, "list-jobs"]) else {
            return false;
        };

        !Regex::new(SHUTDOWN_JOB).unwrap().is_match(&jobs) && code == 0
    }
}
