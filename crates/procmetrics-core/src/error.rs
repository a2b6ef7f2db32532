//! Shared error type across procmetrics crates.

use thiserror::Error;

/// Stable error codes (used in logs and asserted by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config could not be parsed or failed validation.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Filesystem or socket failure.
    Io,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and the HTTP adapter.
///
/// Registry operations never produce one of these.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            MetricsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            MetricsError::Io(_) => ErrorCode::Io,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
