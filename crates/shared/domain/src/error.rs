//! Domain-level errors.
//!
//! These errors represent rejected operations and invalid inputs for the
//! account, policy, user and calculator components. They carry no I/O
//! concerns; transport failures live in the geo client crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Non-positive amount passed to deposit or withdraw
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// Malformed construction parameters (e.g. policy hours)
    #[error("{0}")]
    InvalidConfiguration(String),

    /// Withdrawal attempted outside the allowed hour window
    #[error("Withdrawals are only allowed between {start_hour} and {end_hour} hours.")]
    WithdrawalTimeRestriction { start_hour: u32, end_hour: u32 },

    /// Rejection raised by a custom policy
    #[error("{0}")]
    PolicyRejected(String),

    /// Email failed format validation
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Balance would leave the representable range
    #[error("Cannot apply {amount}: balance would overflow")]
    BalanceOverflow { amount: Decimal },

    /// Zero divisor
    #[error("Division by zero")]
    DivisionByZero,
}

impl DomainError {
    /// Create a configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        DomainError::InvalidConfiguration(msg.into())
    }

    /// Create a policy rejection
    pub fn policy_rejected(msg: impl Into<String>) -> Self {
        DomainError::PolicyRejected(msg.into())
    }

    /// Create an email validation error
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        DomainError::InvalidEmail(msg.into())
    }

    /// Whether this error was raised by a policy rather than input checks.
    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::WithdrawalTimeRestriction { .. } | DomainError::PolicyRejected(_)
        )
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
