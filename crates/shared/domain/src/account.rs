//! Bank account entity and the policy-aware account implementation.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};
use crate::policy::{Policy, PolicyOperation};
use crate::transaction_log::TransactionSink;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Anything holding a balance that can be deposited into and withdrawn from.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Account: Send + Sync {
    /// Deposit `amount` and return the new balance.
    fn deposit(&self, amount: Decimal) -> DomainResult<Decimal>;

    /// Withdraw `amount` and return the new balance.
    fn withdraw(&self, amount: Decimal) -> DomainResult<Decimal>;

    /// Current balance.
    fn balance(&self) -> Decimal;
}

/// Direction of a balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Policy tag consulted for this kind of transaction
    pub fn operation(self) -> PolicyOperation {
        match self {
            TransactionKind::Deposit => PolicyOperation::DEPOSIT,
            TransactionKind::Withdrawal => PolicyOperation::WITHDRAW,
        }
    }

    /// Verb used in transaction log lines
    pub fn past_tense(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposited",
            TransactionKind::Withdrawal => "Withdrew",
        }
    }
}

/// Account with ordered policies and an optional transaction sink.
///
/// The balance sits behind a per-account mutex so the same account can be
/// shared (e.g. through `Arc`) between a [`User`](crate::User) and other
/// holders. Overdrafts are permitted; only policies can refuse a withdrawal.
pub struct BankAccount {
    balance: Mutex<Decimal>,
    policies: Vec<Arc<dyn Policy>>,
    sink: Option<Arc<dyn TransactionSink>>,
}

impl BankAccount {
    /// Create an account with an opening balance and no policies.
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance: Mutex::new(balance),
            policies: Vec::new(),
            sink: None,
        }
    }

    /// Attach one more policy, evaluated after those already attached.
    pub fn with_policy(mut self, policy: Arc<dyn Policy>) -> Self {
        self.policies.push(policy);
        self
    }

    /// Attach policies in evaluation order.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Arc<dyn Policy>>) -> Self {
        self.policies.extend(policies);
        self
    }

    /// Send one line per successful transaction to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn TransactionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Attached policies in evaluation order.
    pub fn policies(&self) -> &[Arc<dyn Policy>] {
        &self.policies
    }

    fn transact(&self, kind: TransactionKind, amount: Decimal) -> DomainResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(amount));
        }

        self.check_policies(kind.operation(), amount)?;

        let new_balance = {
            let mut balance = self.lock_balance();
            let updated = match kind {
                TransactionKind::Deposit => balance.checked_add(amount),
                TransactionKind::Withdrawal => balance.checked_sub(amount),
            }
            .ok_or(DomainError::BalanceOverflow { amount })?;
            *balance = updated;
            updated
        };

        if let Some(sink) = &self.sink {
            sink.record(&format!(
                "{} {:.2}. New balance: {:.2}",
                kind.past_tense(),
                amount.round_dp(2),
                new_balance.round_dp(2)
            ));
        }

        Ok(new_balance)
    }

    /// First supporting policy that rejects stops evaluation.
    fn check_policies(&self, operation: PolicyOperation, amount: Decimal) -> DomainResult<()> {
        for policy in self.policies.iter().filter(|p| p.supports(operation)) {
            if let Err(e) = policy.apply(self, amount) {
                if e.is_policy_rejection() {
                    tracing::debug!(%operation, %amount, error = %e, "Policy rejected transaction");
                } else {
                    tracing::warn!(%operation, %amount, error = %e, "Policy failed");
                }
                return Err(e);
            }
        }
        Ok(())
    }

    // A panic while holding the guard cannot leave a half-written Decimal.
    fn lock_balance(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl Account for BankAccount {
    fn deposit(&self, amount: Decimal) -> DomainResult<Decimal> {
        self.transact(TransactionKind::Deposit, amount)
    }

    fn withdraw(&self, amount: Decimal) -> DomainResult<Decimal> {
        self.transact(TransactionKind::Withdrawal, amount)
    }

    fn balance(&self) -> Decimal {
        *self.lock_balance()
    }
}

impl fmt::Debug for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccount")
            .field("balance", &self.balance())
            .field("policies", &self.policies.len())
            .field("logging", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{FixedClock, WithdrawalTimeRestrictionPolicy};
    use crate::transaction_log::MemorySink;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_deposit() {
        let account = BankAccount::new(dec(1000));
        assert_eq!(account.deposit(dec(500)).unwrap(), dec(1500));
    }

    #[test]
    fn test_withdraw() {
        let account = BankAccount::new(dec(1000));
        assert_eq!(account.withdraw(dec(200)).unwrap(), dec(800));
    }

    #[test]
    fn test_balance_accessor() {
        let account = BankAccount::new(dec(1000));
        assert_eq!(account.balance(), dec(1000));
        account.withdraw(dec(500)).unwrap();
        assert_eq!(account.balance(), dec(500));
        account.deposit(dec(100)).unwrap();
        assert_eq!(account.balance(), dec(600));
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let account = BankAccount::new(dec(1000));

        for amount in [dec(0), dec(-100)] {
            assert_eq!(
                account.deposit(amount).unwrap_err(),
                DomainError::InvalidAmount(amount)
            );
            assert_eq!(
                account.withdraw(amount).unwrap_err(),
                DomainError::InvalidAmount(amount)
            );
        }
        assert_eq!(account.balance(), dec(1000));
    }

    #[test]
    fn test_overdraft_permitted() {
        let account = BankAccount::new(dec(10));
        assert_eq!(account.withdraw(dec(25)).unwrap(), dec(-15));
    }

    #[test]
    fn test_deposit_then_withdraw_restores_balance() {
        let account = BankAccount::new(Decimal::new(10_01, 2));
        let amount = Decimal::new(3, 1);

        account.deposit(amount).unwrap();
        account.withdraw(amount).unwrap();

        assert_eq!(account.balance(), Decimal::new(10_01, 2));
    }

    #[test]
    fn test_sink_receives_formatted_lines() {
        let sink = Arc::new(MemorySink::new());
        let account = BankAccount::new(dec(1000)).with_sink(sink.clone());

        account.deposit(dec(1000)).unwrap();
        account.withdraw(dec(50)).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Deposited 1000.00. New balance: 2000.00".to_string(),
                "Withdrew 50.00. New balance: 1950.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_sink_rounds_to_cents() {
        let sink = Arc::new(MemorySink::new());
        let account = BankAccount::default().with_sink(sink.clone());

        account.deposit(Decimal::new(1999, 3)).unwrap();
        account.deposit(Decimal::new(125, 3)).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Deposited 2.00. New balance: 2.00".to_string(),
                "Deposited 0.12. New balance: 2.12".to_string(),
            ]
        );
        assert_eq!(account.balance(), Decimal::new(2124, 3));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let sink = Arc::new(MemorySink::new());
        let account = BankAccount::new(Decimal::MAX).with_sink(sink.clone());

        assert_eq!(
            account.deposit(Decimal::ONE).unwrap_err(),
            DomainError::BalanceOverflow {
                amount: Decimal::ONE
            }
        );
        assert_eq!(account.balance(), Decimal::MAX);
        assert!(sink.lines().is_empty());

        let account = BankAccount::new(Decimal::MIN);
        assert!(matches!(
            account.withdraw(Decimal::ONE),
            Err(DomainError::BalanceOverflow { .. })
        ));
        assert_eq!(account.balance(), Decimal::MIN);
    }

    #[test]
    fn test_failed_operation_is_not_logged() {
        let sink = Arc::new(MemorySink::new());
        let account = BankAccount::new(dec(1000)).with_sink(sink.clone());

        assert!(account.deposit(dec(0)).is_err());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_time_policy_blocks_withdrawal_only() {
        let policy = WithdrawalTimeRestrictionPolicy::with_clock(8, 17, FixedClock(20)).unwrap();
        let account = BankAccount::new(dec(1000)).with_policy(Arc::new(policy));

        assert!(matches!(
            account.withdraw(dec(100)),
            Err(DomainError::WithdrawalTimeRestriction { .. })
        ));
        assert_eq!(account.deposit(dec(100)).unwrap(), dec(1100));
    }

    #[test]
    fn test_debug_output() {
        let account = BankAccount::new(dec(5));
        let debug = format!("{:?}", account);
        assert!(debug.contains("BankAccount"));
        assert!(debug.contains("policies: 0"));
    }
}
