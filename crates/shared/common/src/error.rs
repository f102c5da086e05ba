//! Unified error handling for the command-line front end.
//!
//! Wraps domain and geo client errors so a single result type can flow
//! out of every command, with a stable machine-readable code per variant.

use std::path::PathBuf;

use domain::DomainError;
use geo_client::GeoError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => match e {
                DomainError::InvalidAmount(_) => "INVALID_AMOUNT",
                DomainError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
                DomainError::WithdrawalTimeRestriction { .. } => "WITHDRAWAL_TIME_RESTRICTION",
                DomainError::PolicyRejected(_) => "POLICY_REJECTED",
                DomainError::InvalidEmail(_) => "INVALID_EMAIL",
                DomainError::BalanceOverflow { .. } => "BALANCE_OVERFLOW",
                DomainError::DivisionByZero => "DIVISION_BY_ZERO",
            },
            AppError::Geo(e) => e.code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_keep_message() {
        let err = AppError::from(DomainError::DivisionByZero);
        assert_eq!(err.code(), "DIVISION_BY_ZERO");
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_geo_error_code() {
        let err = AppError::from(GeoError::InvalidAddress("nope".to_string()));
        assert_eq!(err.code(), "INVALID_ADDRESS");
    }

    #[test]
    fn test_io_error_message() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::io("/tmp/transaction.log", source);
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(err.to_string(), "Cannot open /tmp/transaction.log: denied");
    }
}
