//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module.

pub mod calc;
pub mod locate;
pub mod transact;
