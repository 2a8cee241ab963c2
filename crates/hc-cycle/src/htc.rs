//! Hydrothermal carbonization reactor heat duty.

use crate::constants::CycleConstants;
use crate::error::CycleResult;
use hc_core::units::constants::{BAR_PER_MPA, k_to_celsius};
use hc_core::units::{mpa, to_kelvin};
use hc_steam::SaturationModel;
use serde::{Deserialize, Serialize};

/// HTC reactor operating temperature and heat demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HtcState {
    /// Reactor temperature: saturation temperature at reactor pressure [°C]
    pub t_htc_c: f64,
    /// Heat needed to bring the feed up to reactor temperature [kW]
    pub q_htc_kw: f64,
}

impl HtcState {
    /// Reactor temperature and duty at `htc_press_bar` for a biomass feed.
    ///
    /// ```text
    /// T_htc = T_sat(p_htc) - 273.15
    /// Q_htc = m_biomass * cp_water * (T_htc - T_feed)
    /// ```
    ///
    /// # Errors
    /// Saturation lookup failures (e.g. pressure outside the model's range)
    /// are returned as-is.
    pub fn duty<M: SaturationModel>(
        saturation: &M,
        htc_press_bar: f64,
        biomass_flow_kgs: f64,
        constants: &CycleConstants,
    ) -> CycleResult<Self> {
        let t_sat = saturation.saturation_temperature(mpa(htc_press_bar / BAR_PER_MPA))?;
        let t_htc_c = k_to_celsius(to_kelvin(t_sat));
        let q_htc_kw = biomass_flow_kgs * constants.cp_water * (t_htc_c - constants.htc_feed_temp_c);

        tracing::debug!(
            model = saturation.name(),
            htc_press_bar,
            t_htc_c,
            q_htc_kw,
            "HTC duty computed"
        );

        Ok(Self { t_htc_c, q_htc_kw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CycleError;
    use hc_steam::{If97Saturation, SteamError, TabulatedSaturation};

    #[test]
    fn twenty_bar_reactor() {
        let htc =
            HtcState::duty(&If97Saturation::new(), 20.0, 10.0, &CycleConstants::default()).unwrap();
        assert!((htc.t_htc_c - 212.384_535).abs() < 1e-5);
        assert!((htc.q_htc_kw - 8_041.673_58).abs() < 1e-2);
    }

    #[test]
    fn stub_table_drives_reactor_temperature() {
        // Flat 200 °C saturation line
        let stub = TabulatedSaturation::new("stub", vec![(0.1, 473.15), (3.0, 473.15)]).unwrap();
        let htc = HtcState::duty(&stub, 20.0, 2.0, &CycleConstants::default()).unwrap();
        assert!((htc.t_htc_c - 200.0).abs() < 1e-9);
        assert!((htc.q_htc_kw - 2.0 * 4.18 * 180.0).abs() < 1e-6);
    }

    #[test]
    fn pressure_outside_lookup_range_propagates() {
        let err = HtcState::duty(&If97Saturation::new(), 300.0, 10.0, &CycleConstants::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CycleError::Steam(SteamError::OutOfRange { .. })
        ));
    }
}
