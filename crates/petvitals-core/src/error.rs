//! Shared error type across petvitals crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Species outside the supported set.
    UnsupportedSpecies,
    /// Negative or non-finite weight/height.
    InvalidMeasurement,
    /// Malformed request or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecies => "UNSUPPORTED_SPECIES",
            ErrorCode::InvalidMeasurement => "INVALID_MEASUREMENT",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("unsupported species: {0:?}")]
    UnsupportedSpecies(String),
    #[error("invalid {field}: {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VitalsError {
    /// Map internal error to a stable client-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            VitalsError::UnsupportedSpecies(_) => ErrorCode::UnsupportedSpecies,
            VitalsError::InvalidMeasurement { .. } => ErrorCode::InvalidMeasurement,
            VitalsError::BadRequest(_) => ErrorCode::BadRequest,
            VitalsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            VitalsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
