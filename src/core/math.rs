use crate::utils::error::{DemoError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails instead of producing `inf`/`NaN`.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(DemoError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}
