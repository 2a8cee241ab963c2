//! Anaerobic digestion: biomass to biogas heat input.

use crate::constants::CycleConstants;
use serde::{Deserialize, Serialize};

/// Biogas output of the digester and the fuel heat it carries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigesterState {
    /// Biogas mass flow [kg/s]
    pub biogas_flow_kgs: f64,
    /// Fuel heat input to the combustor [kW]
    pub heat_input_kw: f64,
}

impl DigesterState {
    /// Size the digester for a biomass feed.
    ///
    /// ```text
    /// m_biogas = yield * m_biomass
    /// Q_in     = m_biogas * LCV
    /// ```
    pub fn size(biomass_flow_kgs: f64, constants: &CycleConstants) -> Self {
        let biogas_flow_kgs = biomass_flow_kgs * constants.biogas_yield;
        Self {
            biogas_flow_kgs,
            heat_input_kw: biogas_flow_kgs * constants.biogas_lcv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_kgs_of_biomass() {
        let ad = DigesterState::size(10.0, &CycleConstants::default());
        assert!((ad.biogas_flow_kgs - 3.0).abs() < 1e-12);
        assert!((ad.heat_input_kw - 66_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_biomass_gives_zero_heat() {
        let ad = DigesterState::size(0.0, &CycleConstants::default());
        assert_eq!(ad.heat_input_kw, 0.0);
    }
}
