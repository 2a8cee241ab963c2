//! Brayton gas turbine: compression, combustion, expansion.

use crate::constants::{CycleConstants, GasProperties};
use crate::error::{CycleResult, finite};
use hc_core::units::constants::celsius_to_k;
use serde::{Deserialize, Serialize};

/// Gas turbine state points and specific work.
///
/// ## Model
///
/// Compression from ambient with an isentropic efficiency:
/// ```text
/// T2s = T1 * r^((γ_air-1)/γ_air)
/// T2  = T1 + (T2s - T1) / η_c
/// w_c = cp_air * (T2 - T1)
/// ```
///
/// Expansion from the turbine inlet temperature:
/// ```text
/// T4s = T3 * (1/r)^((γ_gas-1)/γ_gas)
/// T4  = T3 - η_t * (T3 - T4s)
/// w_t = cp_gas * (T3 - T4)
/// ```
///
/// Air flow follows from the combustor energy balance
/// `Q_in = m_air * cp_air * (T3 - T2)`. If T3 < T2 the flow comes out
/// negative and is carried through as such.
///
/// Temperatures in K, specific work in kJ/kg, power in MW.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BraytonState {
    pub t1: f64,
    pub t2s: f64,
    pub t2: f64,
    pub t3: f64,
    pub t4s: f64,
    pub t4: f64,
    pub w_comp: f64,
    pub w_turb: f64,
    pub w_net: f64,
    /// Air mass flow [kg/s]
    pub m_air: f64,
    /// Net gas turbine power [MW]
    pub power_gt: f64,
}

impl BraytonState {
    /// Solve the gas turbine for a turbine inlet temperature [°C], pressure
    /// ratio and fuel heat input [kW].
    ///
    /// # Errors
    /// `NonFinite` when a fractional power or the air-flow division blows up
    /// (e.g. negative pressure ratio, or T3 == T2).
    pub fn solve(
        gt_temp_c: f64,
        comp_ratio: f64,
        heat_input_kw: f64,
        gas: &GasProperties,
        constants: &CycleConstants,
    ) -> CycleResult<Self> {
        // Compression
        let t1 = constants.t_ambient_k;
        let t2s = finite(
            t1 * comp_ratio.powf(gas.air_exponent()),
            "isentropic compressor outlet temperature",
        )?;
        let t2 = t1 + (t2s - t1) / constants.eta_compressor;
        let w_comp = gas.cp_air * (t2 - t1);

        // Combustion & expansion
        let t3 = celsius_to_k(gt_temp_c);
        let t4s = finite(
            t3 * (1.0 / comp_ratio).powf(gas.gas_exponent()),
            "isentropic turbine outlet temperature",
        )?;
        let t4 = t3 - constants.eta_turbine * (t3 - t4s);
        let w_turb = gas.cp_gas * (t3 - t4);

        let w_net = w_turb - w_comp;
        let m_air = finite(heat_input_kw / (gas.cp_air * (t3 - t2)), "air mass flow")?;
        let power_gt = finite(w_net * m_air / 1000.0, "gas turbine power")?;

        tracing::debug!(t2, t3, t4, w_net, m_air, power_gt, "Brayton cycle solved");

        Ok(Self {
            t1,
            t2s,
            t2,
            t3,
            t4s,
            t4,
            w_comp,
            w_turb,
            w_net,
            m_air,
            power_gt,
        })
    }
}
