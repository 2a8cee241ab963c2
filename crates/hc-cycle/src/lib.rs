//! hc-cycle: steady-state calculator for a hybrid AD–HTC–Brayton–Rankine cycle.
//!
//! Pipeline (all relations closed-form):
//! - Anaerobic digestion sizes the biogas heat input
//! - Brayton gas turbine: compression, combustion, expansion
//! - HTC reactor heat duty at the saturation temperature of its pressure
//! - Exhaust heat recovery into a Rankine bottoming cycle
//! - Aggregate metrics and chart coordinates
//!
//! Every stage is a deterministic function of the four `CycleInputs` and the
//! immutable constants held by `CycleEngine`. The only external dependency is
//! the saturation lookup, injected as an `hc_steam::SaturationModel`.
//!
//! # Example
//!
//! ```
//! use hc_cycle::{CycleEngine, CycleInputs};
//!
//! let engine = CycleEngine::new();
//! let inputs = CycleInputs {
//!     gt_temp_c: 1200.0,
//!     comp_ratio: 15.0,
//!     htc_press_bar: 20.0,
//!     biomass_flow_kgs: 10.0,
//! };
//!
//! let analysis = engine.analyze(&inputs).unwrap();
//! println!("Net power: {:.1} MW", analysis.metrics.power);
//! assert_eq!(analysis.charts.hs.s, vec![1.5, 1.5, 7.5, 7.5, 1.5]);
//! ```

pub mod brayton;
pub mod charts;
pub mod constants;
pub mod digester;
pub mod engine;
pub mod error;
pub mod htc;
pub mod inputs;
pub mod recovery;

// Re-exports
pub use brayton::BraytonState;
pub use charts::{ChartData, HsData, ThData, generate_hs_data, generate_th_data};
pub use constants::{CycleConstants, GasProperties};
pub use digester::DigesterState;
pub use engine::{CycleAnalysis, CycleEngine, CycleReport, ResultMetrics};
pub use error::{CycleError, CycleResult};
pub use htc::HtcState;
pub use inputs::CycleInputs;
pub use recovery::SteamCycleState;
