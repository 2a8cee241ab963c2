//! Steam property errors.

use hc_core::CoreError;
use thiserror::Error;

/// Result type for steam property lookups.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors that can occur during a saturation lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// Non-physical values (negative pressure, NaN, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the range covered by the backend.
    #[error("Value out of range for {what}: {value} (valid {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid argument (malformed table, etc.).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<CoreError> for SteamError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => SteamError::NonPhysical { what },
            CoreError::InvalidArg { what } => SteamError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SteamError::OutOfRange {
            what: "pressure [MPa]",
            value: 30.0,
            min: 0.000611213,
            max: 22.064,
        };
        let msg = err.to_string();
        assert!(msg.contains("pressure"));
        assert!(msg.contains("22.064"));

        let err = SteamError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn core_error_maps_to_non_physical() {
        let err: SteamError = CoreError::NonFinite {
            what: "saturation temperature",
            value: f64::NAN,
        }
        .into();
        assert_eq!(
            err,
            SteamError::NonPhysical {
                what: "saturation temperature"
            }
        );
    }
}
