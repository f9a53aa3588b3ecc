#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to set up the logger.
    #[error("Failed to set global logger")]
    LogInit(#[from] log::SetLoggerError),
}
