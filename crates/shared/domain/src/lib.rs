//! Domain layer - accounts, policies, users and arithmetic helpers.
//!
//! This crate contains pure domain logic with no network dependencies.
//! Transaction logging is an injected [`TransactionSink`]; nothing here
//! installs global logging state.

pub mod account;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod policy;
pub mod transaction_log;
pub mod user;

pub use account::{Account, BankAccount, TransactionKind};
pub use error::{DomainError, DomainResult};
pub use policy::{
    Clock, FixedClock, Policy, PolicyOperation, SystemClock, WithdrawalTimeRestrictionPolicy,
};
pub use transaction_log::{FileSink, MemorySink, TracingSink, TransactionSink};
pub use user::{EmailValidator, SyntaxEmailValidator, User};

/// Re-exported so callers can build amounts without a direct dependency.
pub use rust_decimal::Decimal;

#[cfg(any(test, feature = "test-utils"))]
pub use account::MockAccount;
#[cfg(any(test, feature = "test-utils"))]
pub use policy::MockClock;
#[cfg(any(test, feature = "test-utils"))]
pub use user::MockEmailValidator;
