//! Error taxonomy for a merge run.
//!
//! Every variant is terminal. The display text is the operator-facing message; the CLI prefixes
//! it with `Fatal:`.

use hostmerge_intake::ScanLoadError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DroneError {
    /// Missing or malformed environment, credentials, or arguments.
    #[error("{0}")]
    Configuration(String),

    /// The scanner report could not be read.
    #[error("{0}")]
    Io(String),

    /// Malformed scanner report or malformed server response.
    #[error("{0}")]
    Format(String),

    /// Export/import request failure or an error-status import reply.
    #[error("{0}")]
    Remote(String),
}

impl DroneError {
    pub fn kind(&self) -> &'static str {
        match self {
            DroneError::Configuration(_) => "configuration",
            DroneError::Io(_) => "io",
            DroneError::Format(_) => "format",
            DroneError::Remote(_) => "remote",
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<ScanLoadError> for DroneError {
    fn from(err: ScanLoadError) -> Self {
        match err {
            ScanLoadError::Io { message } => {
                DroneError::Io(format!("Could not open file. Error {message}"))
            }
            ScanLoadError::Json { message } => {
                DroneError::Format(format!("Could not parse JSON. Error {message}"))
            }
        }
    }
}

/// Result type alias using DroneError.
pub type DroneResult<T> = Result<T, DroneError>;
