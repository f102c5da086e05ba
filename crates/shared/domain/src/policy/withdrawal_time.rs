//! Restricts withdrawals to an inclusive window of wall-clock hours.

use rust_decimal::Decimal;

use super::{Clock, Policy, PolicyOperation, SystemClock};
use crate::account::Account;
use crate::constants::{is_valid_hour, INVALID_HOUR_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// Allows withdrawals only while the current hour lies in
/// `[start_hour, end_hour]`. Deposits are never inspected.
#[derive(Debug, Clone)]
pub struct WithdrawalTimeRestrictionPolicy<C = SystemClock> {
    start_hour: u32,
    end_hour: u32,
    clock: C,
}

impl WithdrawalTimeRestrictionPolicy<SystemClock> {
    /// Create a policy reading the host's local time.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if either hour is outside `0..=24`.
    pub fn new(start_hour: i32, end_hour: i32) -> DomainResult<Self> {
        Self::with_clock(start_hour, end_hour, SystemClock)
    }
}

impl<C: Clock> WithdrawalTimeRestrictionPolicy<C> {
    /// Create a policy with an explicit hour source.
    pub fn with_clock(start_hour: i32, end_hour: i32, clock: C) -> DomainResult<Self> {
        if !is_valid_hour(start_hour) || !is_valid_hour(end_hour) {
            return Err(DomainError::invalid_configuration(INVALID_HOUR_MESSAGE));
        }

        Ok(Self {
            start_hour: start_hour as u32,
            end_hour: end_hour as u32,
            clock,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn supported_operations(&self) -> PolicyOperation {
        PolicyOperation::WITHDRAW
    }
}

impl<C: Clock> Policy for WithdrawalTimeRestrictionPolicy<C> {
    fn supports(&self, operation: PolicyOperation) -> bool {
        self.supported_operations().intersects(operation)
    }

    fn apply(&self, _account: &dyn Account, _amount: Decimal) -> DomainResult<()> {
        let hour = self.clock.current_hour();

        if !(self.start_hour..=self.end_hour).contains(&hour) {
            tracing::debug!(
                hour,
                start_hour = self.start_hour,
                end_hour = self.end_hour,
                "Withdrawal outside allowed hours"
            );
            return Err(DomainError::WithdrawalTimeRestriction {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }

        Ok(())
    }
}
