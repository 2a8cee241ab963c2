//! Tabulated saturation data.

use crate::error::{SteamError, SteamResult};
use crate::model::{SaturationModel, validation};
use hc_core::numeric::lerp;
use hc_core::units::{Pressure, Temperature, k, to_mpa};

/// Saturation line given as `(pressure [MPa], temperature [K])` points.
///
/// Lookups interpolate linearly between neighbouring points. Pressures
/// outside the first/last point are rejected rather than extrapolated.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedSaturation {
    name: String,
    points: Vec<(f64, f64)>,
}

impl TabulatedSaturation {
    /// Build a table from points sorted by strictly increasing pressure.
    ///
    /// # Errors
    /// Returns error if fewer than two points are given, a value is not
    /// finite, or pressures are not strictly increasing.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> SteamResult<Self> {
        if points.len() < 2 {
            return Err(SteamError::InvalidArg {
                what: "saturation table needs at least two points",
            });
        }
        if points
            .iter()
            .any(|&(p, t)| !p.is_finite() || !t.is_finite())
        {
            return Err(SteamError::NonPhysical {
                what: "saturation table entries must be finite",
            });
        }
        if points.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(SteamError::InvalidArg {
                what: "saturation table pressures must be strictly increasing",
            });
        }

        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Pressure range `(min, max)` covered by the table [MPa].
    pub fn pressure_range_mpa(&self) -> (f64, f64) {
        // new() guarantees at least two points
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }

    /// Interpolated saturation temperature [K] at `p_mpa` [MPa].
    pub fn lookup_k(&self, p_mpa: f64) -> SteamResult<f64> {
        let (min, max) = self.pressure_range_mpa();
        validation::validate_range("saturation pressure [MPa]", p_mpa, min, max)?;

        let upper = self
            .points
            .partition_point(|&(p, _)| p < p_mpa)
            .clamp(1, self.points.len() - 1);
        Ok(lerp(p_mpa, self.points[upper - 1], self.points[upper])?)
    }
}

impl SaturationModel for TabulatedSaturation {
    fn name(&self) -> &str {
        &self.name
    }

    fn saturation_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        self.lookup_k(to_mpa(p)).map(k)
    }
}
