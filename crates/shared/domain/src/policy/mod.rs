//! Pluggable rules evaluated before an account mutates its balance.
//!
//! An account asks each attached policy whether it [`supports`] the
//! pending operation and, if so, calls [`apply`]. Any error returned by
//! `apply` aborts the operation before the balance changes.
//!
//! [`supports`]: Policy::supports
//! [`apply`]: Policy::apply

mod clock;
mod operation;
mod withdrawal_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use operation::PolicyOperation;
pub use withdrawal_time::WithdrawalTimeRestrictionPolicy;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::MockClock;

use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::DomainResult;

/// A rule consulted before deposits and withdrawals.
///
/// Implementations must not change the account's balance; only the
/// account applies the amount once every policy has accepted it.
pub trait Policy: Send + Sync {
    /// Whether this policy wants to inspect `operation`.
    fn supports(&self, operation: PolicyOperation) -> bool;

    /// Accept (`Ok`) or reject (`Err`) the pending operation.
    fn apply(&self, account: &dyn Account, amount: Decimal) -> DomainResult<()>;
}
