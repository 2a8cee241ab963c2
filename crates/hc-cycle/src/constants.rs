//! Fixed fluid properties and plant assumptions.

use crate::error::{CycleError, CycleResult};
use hc_core::units::constants::KELVIN_OFFSET;
use serde::{Deserialize, Serialize};

/// Perfect-gas properties of compressor air and turbine combustion gas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// Specific heat of air [kJ/(kg·K)]
    pub cp_air: f64,
    /// Heat capacity ratio of air
    pub gamma_air: f64,
    /// Specific heat of exhaust gas [kJ/(kg·K)]
    pub cp_gas: f64,
    /// Heat capacity ratio of exhaust gas
    pub gamma_gas: f64,
}

impl Default for GasProperties {
    fn default() -> Self {
        Self {
            cp_air: 1.005,
            gamma_air: 1.4,
            cp_gas: 1.15,
            gamma_gas: 1.33,
        }
    }
}

impl GasProperties {
    /// Isentropic temperature exponent (γ−1)/γ for air.
    pub fn air_exponent(&self) -> f64 {
        (self.gamma_air - 1.0) / self.gamma_air
    }

    /// Isentropic temperature exponent (γ−1)/γ for exhaust gas.
    pub fn gas_exponent(&self) -> f64 {
        (self.gamma_gas - 1.0) / self.gamma_gas
    }

    pub(crate) fn validate(&self) -> CycleResult<()> {
        if !(self.cp_air > 0.0 && self.cp_gas > 0.0) {
            return Err(CycleError::InvalidArg {
                what: "specific heats must be positive",
            });
        }
        if !(self.gamma_air > 1.0 && self.gamma_gas > 1.0) {
            return Err(CycleError::InvalidArg {
                what: "heat capacity ratios must exceed 1",
            });
        }
        Ok(())
    }
}

/// Plant-level assumptions of the hybrid cycle.
///
/// Temperatures are stored in the unit the relations use: Kelvin for the
/// Brayton states, °C for the HTC and stack reference points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleConstants {
    /// Compressor inlet (ambient) temperature [K]
    pub t_ambient_k: f64,
    /// Compressor isentropic efficiency
    pub eta_compressor: f64,
    /// Turbine isentropic efficiency
    pub eta_turbine: f64,
    /// Biogas produced per unit biomass [kg/kg]
    pub biogas_yield: f64,
    /// Lower calorific value of biogas [kJ/kg] (approx. 60 % CH4)
    pub biogas_lcv: f64,
    /// Specific heat of the HTC slurry, taken as water [kJ/(kg·K)]
    pub cp_water: f64,
    /// Temperature the HTC feed is heated from [°C]
    pub htc_feed_temp_c: f64,
    /// HRSG stack temperature [°C]
    ///
    /// Sets the exhaust heat available to the HTC reactor and the steam
    /// cycle. The T-Ḣ chart does not follow it: its gas curve always ends
    /// at 120 °C.
    pub stack_temp_c: f64,
    /// Rankine bottoming-cycle efficiency
    pub eta_rankine: f64,
    /// CO2 reduction at zero biomass flow [%]
    pub co2_base_pct: f64,
    /// CO2 reduction per kg/s of biomass [%·s/kg]
    pub co2_per_biomass: f64,
}

impl Default for CycleConstants {
    fn default() -> Self {
        Self {
            t_ambient_k: 288.15,
            eta_compressor: 0.85,
            eta_turbine: 0.88,
            biogas_yield: 0.3,
            biogas_lcv: 22_000.0,
            cp_water: 4.18,
            htc_feed_temp_c: 20.0,
            stack_temp_c: 120.0,
            eta_rankine: 0.25,
            co2_base_pct: 15.0,
            co2_per_biomass: 0.8,
        }
    }
}

impl CycleConstants {
    /// Stack temperature [K].
    pub fn stack_temp_k(&self) -> f64 {
        self.stack_temp_c + KELVIN_OFFSET
    }

    pub(crate) fn validate(&self) -> CycleResult<()> {
        for (eta, what) in [
            (self.eta_compressor, "compressor efficiency must be in (0,1]"),
            (self.eta_turbine, "turbine efficiency must be in (0,1]"),
            (self.eta_rankine, "Rankine efficiency must be in (0,1]"),
        ] {
            if !(eta > 0.0 && eta <= 1.0) {
                return Err(CycleError::InvalidArg { what });
            }
        }
        if !(self.t_ambient_k > 0.0) {
            return Err(CycleError::InvalidArg {
                what: "ambient temperature must be positive",
            });
        }
        Ok(())
    }
}
