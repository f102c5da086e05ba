//! Transact command - apply deposits and withdrawals to a fresh account.

use std::path::PathBuf;
use std::sync::Arc;

use common::{AppConfig, AppError, AppResult};
use domain::{
    Account, BankAccount, Decimal, FileSink, TracingSink, TransactionKind, TransactionSink,
    WithdrawalTimeRestrictionPolicy,
};

use crate::args::TransactArgs;

/// Execute the transact command
pub fn execute(args: TransactArgs, config: &AppConfig) -> AppResult<()> {
    let balance = run(args, config.transaction_log_file.clone())?;
    println!("Final balance: {:.2}", balance);
    Ok(())
}

/// Apply every operation in order; the first failure aborts the rest.
fn run(args: TransactArgs, default_log_file: Option<PathBuf>) -> AppResult<Decimal> {
    let sink: Arc<dyn TransactionSink> = match args.log_file.or(default_log_file) {
        Some(path) => {
            let sink = FileSink::open(&path).map_err(|e| AppError::io(&path, e))?;
            tracing::debug!("Writing transactions to {}", sink.path().display());
            Arc::new(sink)
        }
        None => Arc::new(TracingSink),
    };

    let mut account = BankAccount::new(args.initial).with_sink(sink);

    if let Some(window) = args.withdraw_window {
        let [start, end] = window[..] else {
            return Err(AppError::bad_request("--withdraw-window takes START and END"));
        };
        let policy = WithdrawalTimeRestrictionPolicy::new(start, end)?;
        account = account.with_policy(Arc::new(policy));
    }

    for operation in args.operations {
        match operation.kind {
            TransactionKind::Deposit => account.deposit(operation.amount)?,
            TransactionKind::Withdrawal => account.withdraw(operation.amount)?,
        };
    }

    Ok(account.balance())
}
