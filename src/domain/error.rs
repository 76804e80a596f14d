use super::severity::ParseSeverityError;
use thiserror::Error;

/// Top-level error type for the joblog facade.
#[derive(Error, Debug)]
pub enum JoblogError {
    /// A logger was requested before any stream was attached to the context.
    #[error("logging stream is not initialized")]
    NotInitialized,

    #[error(transparent)]
    Severity(#[from] ParseSeverityError),
}
