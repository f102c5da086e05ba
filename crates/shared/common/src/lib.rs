//! Common utilities shared by the binaries.
//!
//! This crate provides:
//! - Unified error handling over domain and geo client errors
//! - Configuration loaded from the environment
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, DEFAULT_LOG_FILTER};
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
