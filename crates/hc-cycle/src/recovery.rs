//! Exhaust heat recovery and Rankine bottoming cycle.

use crate::brayton::BraytonState;
use crate::constants::{CycleConstants, GasProperties};
use crate::error::{CycleResult, finite};
use crate::htc::HtcState;
use serde::{Deserialize, Serialize};

/// Heat recovered from the turbine exhaust and what the steam cycle makes of it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteamCycleState {
    /// Exhaust heat available between T4 and the stack [kW]
    pub q_available_kw: f64,
    /// Heat left for the steam cycle after the HTC reactor is served [kW]
    pub q_for_steam_kw: f64,
    /// Steam turbine power [MW], never negative
    pub power_st: f64,
}

impl SteamCycleState {
    /// Recover exhaust heat down to the stack and run the bottoming cycle.
    ///
    /// ```text
    /// Q_avail = m_air * cp_gas * (T4 - T_stack)
    /// Q_steam = Q_avail - Q_htc
    /// P_st    = max(0, η_rankine * Q_steam / 1000)
    /// ```
    ///
    /// When the HTC duty exceeds the available exhaust heat there is nothing
    /// left for the steam cycle and `power_st` is exactly zero.
    pub fn recover(
        brayton: &BraytonState,
        htc: &HtcState,
        gas: &GasProperties,
        constants: &CycleConstants,
    ) -> CycleResult<Self> {
        let q_available_kw = finite(
            brayton.m_air * gas.cp_gas * (brayton.t4 - constants.stack_temp_k()),
            "available exhaust heat",
        )?;
        let q_for_steam_kw = q_available_kw - htc.q_htc_kw;

        let raw_power = finite(
            q_for_steam_kw * constants.eta_rankine / 1000.0,
            "steam turbine power",
        )?;
        let power_st = if raw_power > 0.0 {
            raw_power
        } else {
            if q_for_steam_kw < 0.0 {
                tracing::warn!(
                    q_available_kw,
                    q_htc_kw = htc.q_htc_kw,
                    "HTC duty exceeds recoverable exhaust heat; no steam power"
                );
            }
            0.0
        };

        Ok(Self {
            q_available_kw,
            q_for_steam_kw,
            power_st,
        })
    }
}
