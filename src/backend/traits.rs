/// This contains the operations every supported service manager exposes
/// through a uniform boolean interface. Faults never escape an operation;
/// they are absorbed into the returned boolean.
pub trait ServiceManager {
    /// Detect if the system uses this service manager.
    fn detect(&self) -> bool;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Configure the service to start automatically.
    fn enable(&self, name: &str) -> bool;

    /// Stop the service from starting automatically.
    fn disable(&self, name: &str) -> bool;

    /// Check if the service is configured to start automatically.
    fn is_enabled(&self, name: &str) -> bool;

    /// Restart the service.
    fn restart(&self, name: &str) -> bool;

    /// Check if the host is in the process of shutting down or rebooting.
    fn is_system_stopping(&self) -> bool;
}
