//! Error types for cycle calculations.

use hc_core::error::CoreError;
use hc_steam::SteamError;
use thiserror::Error;

/// Errors that can occur while evaluating the cycle.
///
/// Arithmetic never traps on `f64`, so a division by zero or a fractional
/// power of a negative base surfaces as `NonFinite`, naming the quantity that
/// went bad. Saturation lookup failures are passed through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Steam property lookup failed: {0}")]
    Steam(#[from] SteamError),
}

pub type CycleResult<T> = Result<T, CycleError>;

impl From<CoreError> for CycleError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => CycleError::NonFinite { what, value },
            CoreError::InvalidArg { what } => CycleError::InvalidArg { what },
        }
    }
}

/// Ensure a cycle quantity is finite.
pub(crate) fn finite(value: f64, what: &'static str) -> CycleResult<f64> {
    Ok(hc_core::numeric::ensure_finite(value, what)?)
}
