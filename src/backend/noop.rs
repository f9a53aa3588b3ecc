use super::traits::ServiceManager;

/// Fallback for hosts without a supported service manager. Every operation
/// trivially succeeds so callers are never blocked on such hosts.
pub struct Manager;

impl ServiceManager for Manager {
    fn detect(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "noop"
    }

    fn enable(&self, _name: &str) -> bool {
        true
    }

    fn disable(&self, _name: &str) -> bool {
        true
    }

    fn is_enabled(&self, _name: &str) -> bool {
        true
    }

    fn restart(&self, _name: &str) -> bool {
        true
    }

    fn is_system_stopping(&self) -> bool {
        false
    }
}
