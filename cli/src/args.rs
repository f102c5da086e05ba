//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use domain::{Decimal, TransactionKind};

/// Accounts, arithmetic and IP geolocation from the command line
#[derive(Parser, Debug)]
#[command(name = "bankctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the location of an IP address
    Locate(LocateArgs),

    /// Evaluate a single arithmetic operation
    Calc(CalcArgs),

    /// Run deposits and withdrawals against a fresh account
    Transact(TransactArgs),
}

/// Arguments for the locate command
#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// IPv4 or IPv6 address
    #[arg(default_value = "8.8.8.8")]
    pub ip: String,

    /// Override the geolocation API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arithmetic operations
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    #[arg(value_enum)]
    pub op: CalcOp,

    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// Arguments for the transact command
#[derive(Parser, Debug)]
pub struct TransactArgs {
    /// Opening balance
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Append transaction lines to this file instead of the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Only allow withdrawals between these hours (inclusive)
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    pub withdraw_window: Option<Vec<i32>>,

    /// Operations in order, e.g. `deposit=100 withdraw=25.50`
    #[arg(required = true)]
    pub operations: Vec<Operation>,
}

/// One `deposit=<amount>` or `withdraw=<amount>` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <deposit|withdraw>=<amount>, got '{}'", s))?;

        let kind = match kind.trim().to_ascii_lowercase().as_str() {
            "deposit" => TransactionKind::Deposit,
            "withdraw" => TransactionKind::Withdrawal,
            other => return Err(format!("unknown operation '{}'", other)),
        };
        let amount = Decimal::from_str(amount.trim())
            .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;

        Ok(Self { kind, amount })
    }
}
