//! The cycle engine: runs the full pipeline for one operating point.

use crate::brayton::BraytonState;
use crate::charts::{ChartData, generate_hs_data, generate_th_data};
use crate::constants::{CycleConstants, GasProperties};
use crate::digester::DigesterState;
use crate::error::{CycleResult, finite};
use crate::htc::HtcState;
use crate::inputs::CycleInputs;
use crate::recovery::SteamCycleState;
use hc_core::units::constants::k_to_celsius;
use hc_steam::{If97Saturation, SaturationModel};
use serde::{Deserialize, Serialize};

/// Aggregate performance of the hybrid cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultMetrics {
    /// Fraction of the fuel heat input delivered as net power
    pub efficiency: f64,
    /// Net power, gas turbine plus steam turbine [MW]
    pub power: f64,
    /// Estimated CO2 reduction [%]
    pub co2: f64,
}

/// Result of [`CycleEngine::analyze`]: metrics and chart coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleAnalysis {
    pub metrics: ResultMetrics,
    pub charts: ChartData,
}

/// Every intermediate state of one evaluation, alongside the analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub inputs: CycleInputs,
    pub digester: DigesterState,
    pub brayton: BraytonState,
    pub htc: HtcState,
    pub steam: SteamCycleState,
    #[serde(flatten)]
    pub analysis: CycleAnalysis,
}

/// Stateless calculator for the hybrid AD–HTC–Brayton–Rankine cycle.
///
/// Holds immutable gas properties, plant constants and a saturation model.
/// Evaluations share nothing mutable, so one engine can serve any number of
/// callers.
#[derive(Clone, Debug)]
pub struct CycleEngine<M = If97Saturation> {
    gas: GasProperties,
    constants: CycleConstants,
    saturation: M,
}

impl CycleEngine<If97Saturation> {
    /// Engine with default constants and the IAPWS-IF97 saturation line.
    pub fn new() -> Self {
        Self::with_model(If97Saturation::new())
    }
}

impl Default for CycleEngine<If97Saturation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SaturationModel> CycleEngine<M> {
    /// Engine with default constants and a custom saturation model.
    pub fn with_model(saturation: M) -> Self {
        Self {
            gas: GasProperties::default(),
            constants: CycleConstants::default(),
            saturation,
        }
    }

    /// Engine with custom constants.
    ///
    /// # Errors
    /// Returns `InvalidArg` if an efficiency lies outside (0,1], a specific
    /// heat is not positive, or a heat capacity ratio is not above 1.
    pub fn with_constants(
        gas: GasProperties,
        constants: CycleConstants,
        saturation: M,
    ) -> CycleResult<Self> {
        gas.validate()?;
        constants.validate()?;
        Ok(Self {
            gas,
            constants,
            saturation,
        })
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn constants(&self) -> &CycleConstants {
        &self.constants
    }

    pub fn saturation_model(&self) -> &M {
        &self.saturation
    }

    /// Metrics and chart data for one operating point.
    ///
    /// Either the full record is returned or the call fails; no partial
    /// results. See [`CycleReport`] for the intermediate states.
    pub fn analyze(&self, inputs: &CycleInputs) -> CycleResult<CycleAnalysis> {
        self.report(inputs).map(|report| report.analysis)
    }

    /// Full evaluation of one operating point, keeping every stage's state.
    ///
    /// # Errors
    /// - `NonFinite` when an arithmetic step divides by zero or takes a
    ///   fractional power of a negative number. Zero biomass flow means zero
    ///   heat input and fails on the efficiency.
    /// - `Steam` when the HTC pressure is outside the saturation model's range.
    pub fn report(&self, inputs: &CycleInputs) -> CycleResult<CycleReport> {
        let c = &self.constants;

        let digester = DigesterState::size(inputs.biomass_flow_kgs, c);
        tracing::debug!(heat_input_kw = digester.heat_input_kw, "digester sized");

        let brayton = BraytonState::solve(
            inputs.gt_temp_c,
            inputs.comp_ratio,
            digester.heat_input_kw,
            &self.gas,
            c,
        )?;

        let htc = HtcState::duty(
            &self.saturation,
            inputs.htc_press_bar,
            inputs.biomass_flow_kgs,
            c,
        )?;

        let steam = SteamCycleState::recover(&brayton, &htc, &self.gas, c)?;

        let power = brayton.power_gt + steam.power_st;
        let efficiency = finite(power * 1000.0 / digester.heat_input_kw, "total efficiency")?;
        let co2 = c.co2_base_pct + inputs.biomass_flow_kgs * c.co2_per_biomass;
        let metrics = ResultMetrics {
            efficiency,
            power,
            co2,
        };

        let charts = ChartData {
            hs: generate_hs_data(inputs.htc_press_bar),
            th: generate_th_data(
                k_to_celsius(brayton.t4),
                inputs.gt_temp_c,
                htc.t_htc_c,
                steam.q_available_kw,
                htc.q_htc_kw,
            ),
        };

        tracing::debug!(efficiency, power, co2, "cycle analysed");

        Ok(CycleReport {
            inputs: *inputs,
            digester,
            brayton,
            htc,
            steam,
            analysis: CycleAnalysis { metrics, charts },
        })
    }
}
