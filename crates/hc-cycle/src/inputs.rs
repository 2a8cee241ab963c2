//! Operating point of the hybrid cycle.

use serde::{Deserialize, Serialize};

/// The four scalar operating inputs.
///
/// No bounds are enforced; values flow straight into the cycle relations.
/// The short field names of the JSON request payload (`gt_temp`,
/// `htc_press`, `biomass_flow`) are accepted when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    /// Turbine inlet temperature [°C]
    #[serde(alias = "gt_temp")]
    pub gt_temp_c: f64,
    /// Compressor pressure ratio
    pub comp_ratio: f64,
    /// HTC reactor pressure [bar]
    #[serde(alias = "htc_press")]
    pub htc_press_bar: f64,
    /// Biomass feed [kg/s]
    #[serde(alias = "biomass_flow")]
    pub biomass_flow_kgs: f64,
}

impl Default for CycleInputs {
    /// Reference operating point.
    fn default() -> Self {
        Self {
            gt_temp_c: 1200.0,
            comp_ratio: 15.0,
            htc_press_bar: 20.0,
            biomass_flow_kgs: 10.0,
        }
    }
}
