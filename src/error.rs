//! Error types for the simulator

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Degenerate simulation: no observer fell inside horizon {horizon} (lambda = {lambda})")]
    DegenerateSimulation { horizon: f64, lambda: f64 },

    #[error("Event timestamp is not a number: {0}")]
    InvalidTimestamp(f64),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    }
    else {
        Err(SimError::InvalidParameter(format!("{} must be finite and > 0, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(ensure_positive("rate", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for v in &[0., -1., std::f64::NAN, std::f64::INFINITY] {
            match ensure_positive("rate", *v) {
                Err(SimError::InvalidParameter(msg)) => assert!(msg.starts_with("rate")),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
