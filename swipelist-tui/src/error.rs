use thiserror::Error;

/// Errors that end the terminal host.
///
/// Rejected gestures are not fatal and never reach this type.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
