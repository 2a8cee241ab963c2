//! CoolProp-based saturation model.

use crate::error::{SteamError, SteamResult};
use crate::if97::{P_MAX_MPA, P_MIN_MPA};
use crate::model::{SaturationModel, validation};
use hc_core::units::{Pressure, Temperature, k, to_mpa};
use rfluids::prelude::*;
use uom::si::pressure::pascal;

/// CoolProp backend for the water saturation line.
///
/// Thread-safe: rfluids Fluid instances are created per lookup and never shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropSaturation;

impl CoolPropSaturation {
    /// Create a new CoolProp saturation model.
    pub fn new() -> Self {
        Self
    }

    /// Create a saturated-liquid water instance at `p_pa`.
    fn liquid_at_p(&self, p_pa: f64) -> SteamResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(FluidInput::pressure(p_pa), FluidInput::quality(0.0))
            .map_err(|e| SteamError::Backend {
                message: format!("rfluids error at P={} Pa, Q=0: {}", p_pa, e),
            })
    }
}

impl SaturationModel for CoolPropSaturation {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn saturation_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        validation::validate_range("saturation pressure [MPa]", to_mpa(p), P_MIN_MPA, P_MAX_MPA)?;

        let p_pa = p.get::<pascal>();
        let mut fluid = self.liquid_at_p(p_pa)?;
        let t_k = fluid.temperature().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting temperature: {}", e),
        })?;
        tracing::trace!(p_pa, t_k, "CoolProp saturation lookup");
        Ok(k(t_k))
    }
}
