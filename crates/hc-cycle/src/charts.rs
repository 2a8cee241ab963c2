//! Chart coordinates for the steam sub-cycle and the HRSG heat exchange.

use serde::{Deserialize, Serialize};

/// Entropy coordinates of the schematic Rankine loop [kJ/(kg·K)].
const HS_ENTROPY: [f64; 5] = [1.5, 1.5, 7.5, 7.5, 1.5];
/// Enthalpy coordinates of the schematic Rankine loop [kJ/kg].
const HS_ENTHALPY: [f64; 5] = [500.0, 520.0, 3200.0, 2200.0, 500.0];

/// Gas temperature at the end of the HRSG [°C].
const GAS_OUTLET_C: f64 = 120.0;
/// Water temperature entering the HRSG [°C].
const WATER_INLET_C: f64 = 30.0;
/// Steam temperature rise above the HTC temperature at the hot end [°C].
const SUPERHEAT_C: f64 = 50.0;

/// h-s polyline: paired entropy and enthalpy coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsData {
    pub s: Vec<f64>,
    pub h: Vec<f64>,
}

/// T-Ḣ diagram: exhaust gas cooling curve and water/steam heating curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThData {
    /// Cumulative heat along the gas path [kW]
    #[serde(rename = "gas_H")]
    pub gas_h: Vec<f64>,
    /// Gas temperature [°C]
    #[serde(rename = "gas_T")]
    pub gas_t: Vec<f64>,
    /// Cumulative heat along the water/steam path [kW]
    #[serde(rename = "steam_H")]
    pub steam_h: Vec<f64>,
    /// Water/steam temperature [°C]
    #[serde(rename = "steam_T")]
    pub steam_t: Vec<f64>,
}

/// Both chart datasets of one analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub hs: HsData,
    pub th: ThData,
}

/// Schematic h-s loop of the steam sub-cycle.
///
/// The loop is a fixed five-point outline (pump, boiler, turbine, condenser)
/// and does not depend on the HTC pressure passed in.
// TODO: derive the loop from the HTC pressure once the steam cycle has real
// high/low pressure levels; kept as a fixed outline until then.
pub fn generate_hs_data(_p_htc_bar: f64) -> HsData {
    HsData {
        s: HS_ENTROPY.to_vec(),
        h: HS_ENTHALPY.to_vec(),
    }
}

/// T-Ḣ curves of the heat recovery steam generator.
///
/// Gas cools from the turbine exhaust to the stack over the full available
/// heat. Water heats from 30 °C to the HTC temperature while the HTC duty is
/// delivered, then to 50 °C above it over the remainder.
///
/// `_t_combust_c` is accepted for call compatibility and not used.
pub fn generate_th_data(
    t_exhaust_c: f64,
    _t_combust_c: f64,
    t_htc_c: f64,
    q_available_kw: f64,
    q_htc_kw: f64,
) -> ThData {
    ThData {
        gas_h: vec![0.0, q_available_kw],
        gas_t: vec![t_exhaust_c, GAS_OUTLET_C],
        steam_h: vec![0.0, q_htc_kw, q_available_kw],
        steam_t: vec![WATER_INLET_C, t_htc_c, t_htc_c + SUPERHEAT_C],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hs_loop_is_fixed() {
        let hs = generate_hs_data(20.0);
        assert_eq!(hs.s, vec![1.5, 1.5, 7.5, 7.5, 1.5]);
        assert_eq!(hs.h, vec![500.0, 520.0, 3200.0, 2200.0, 500.0]);
        assert_eq!(hs.s.len(), hs.h.len());
    }

    #[test]
    fn th_curves() {
        let th = generate_th_data(565.7, 1200.0, 212.4, 42_658.0, 8_041.0);
        assert_eq!(th.gas_h, vec![0.0, 42_658.0]);
        assert_eq!(th.gas_t, vec![565.7, 120.0]);
        assert_eq!(th.steam_h, vec![0.0, 8_041.0, 42_658.0]);
        assert_eq!(th.steam_t, vec![30.0, 212.4, 212.4 + 50.0]);
    }

    #[test]
    fn combustion_temperature_is_ignored() {
        let a = generate_th_data(565.7, 1200.0, 212.4, 42_658.0, 8_041.0);
        let b = generate_th_data(565.7, -40.0, 212.4, 42_658.0, 8_041.0);
        assert_eq!(a, b);
    }

    #[test]
    fn th_serializes_with_axis_names() {
        let th = generate_th_data(500.0, 1000.0, 200.0, 100.0, 10.0);
        let json = serde_json::to_value(&th).unwrap();
        assert_eq!(json["gas_H"][1], 100.0);
        assert_eq!(json["steam_T"][0], 30.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hs_data_ignores_pressure(p1 in -1e3_f64..1e3, p2 in -1e3_f64..1e3) {
            prop_assert_eq!(generate_hs_data(p1), generate_hs_data(p2));
        }
    }
}
