//! Saturation model trait and validation helpers.

use crate::error::{SteamError, SteamResult};
use hc_core::units::{Pressure, Temperature};

/// A point on the saturation line.
///
/// `quality` is the vapor mass fraction: 0 pins the state to the
/// saturated-liquid boundary, 1 to saturated vapor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationState {
    pub p: Pressure,
    pub t: Temperature,
    pub quality: f64,
}

/// Trait for saturated-steam property models.
///
/// Implementations must be thread-safe (Send + Sync) so one engine can be
/// shared between callers.
pub trait SaturationModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation temperature of water at absolute pressure `p`.
    ///
    /// Pressures outside the model's supported range are an error, never a
    /// clamped or extrapolated value.
    fn saturation_temperature(&self, p: Pressure) -> SteamResult<Temperature>;

    /// Saturated-liquid state (quality 0) at absolute pressure `p`.
    fn saturated_liquid(&self, p: Pressure) -> SteamResult<SaturationState> {
        Ok(SaturationState {
            p,
            t: self.saturation_temperature(p)?,
            quality: 0.0,
        })
    }
}

impl<M: SaturationModel + ?Sized> SaturationModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn saturation_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        (**self).saturation_temperature(p)
    }

    fn saturated_liquid(&self, p: Pressure) -> SteamResult<SaturationState> {
        (**self).saturated_liquid(p)
    }
}

/// Validation helpers for lookups.
pub(crate) mod validation {
    use super::*;

    /// Ensure a value lies within `[min, max]`.
    pub fn validate_range(what: &'static str, value: f64, min: f64, max: f64) -> SteamResult<()> {
        if !value.is_finite() {
            return Err(SteamError::NonPhysical { what });
        }
        if value < min || value > max {
            return Err(SteamError::OutOfRange {
                what,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}
