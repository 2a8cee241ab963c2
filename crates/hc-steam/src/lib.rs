//! hc-steam: saturated-steam property lookup for the hybrid cycle calculator.
//!
//! Provides:
//! - `SaturationModel` trait (pressure -> saturation temperature)
//! - IAPWS-IF97 Region 4 saturation line (default backend)
//! - Tabulated saturation data with linear interpolation
//! - CoolProp backend for real water properties (feature `coolprop`)
//!
//! # Architecture
//!
//! The cycle engine only ever asks one question of water: at what temperature
//! does it boil at a given pressure. This crate keeps that question behind the
//! `SaturationModel` trait so the engine can run against the closed-form
//! IF97 equations, a stub table in tests, or CoolProp when it is available.
//!
//! # Example
//!
//! ```
//! use hc_core::units::{bar, to_kelvin};
//! use hc_steam::{If97Saturation, SaturationModel};
//!
//! let model = If97Saturation::new();
//! let t_sat = model.saturation_temperature(bar(20.0)).unwrap();
//! assert!((to_kelvin(t_sat) - 485.53).abs() < 0.01);
//! ```

#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod if97;
pub mod model;
pub mod table;

// Re-exports for ergonomics
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropSaturation;
pub use error::{SteamError, SteamResult};
pub use if97::If97Saturation;
pub use model::{SaturationModel, SaturationState};
pub use table::TabulatedSaturation;
