//! Basic arithmetic over `f64`.

use crate::error::{DomainError, DomainResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> DomainResult<f64> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}
