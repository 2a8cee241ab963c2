//! Saturation line integration tests.
//!
//! These tests exercise the HTC operating window (1-25 bar absolute) through
//! the public `SaturationModel` interface.

use hc_core::units::{bar, to_kelvin};
use hc_steam::{If97Saturation, SaturationModel, SteamError, TabulatedSaturation};

#[test]
fn htc_window_is_covered() {
    let model = If97Saturation::new();
    for p_bar in [1.0, 5.0, 10.0, 15.0, 20.0, 25.0] {
        let t = model.saturation_temperature(bar(p_bar)).unwrap();
        let t_c = to_kelvin(t) - 273.15;
        // Water boils between ~99 °C (1 bar) and ~224 °C (25 bar)
        assert!(t_c > 99.0 && t_c < 225.0, "p = {} bar, T = {} °C", p_bar, t_c);
    }
}

#[test]
fn twenty_bar_boils_at_212c() {
    let model = If97Saturation::new();
    let t = model.saturation_temperature(bar(20.0)).unwrap();
    let t_c = to_kelvin(t) - 273.15;
    assert!((t_c - 212.385).abs() < 1e-3, "T = {} °C", t_c);
}

#[test]
fn saturated_liquid_is_pinned_to_quality_zero() {
    let model = If97Saturation::new();
    let state = model.saturated_liquid(bar(10.0)).unwrap();
    assert_eq!(state.quality, 0.0);
    assert!((to_kelvin(state.t) - 453.035_632).abs() < 1e-5);
}

#[test]
fn supercritical_pressure_is_out_of_range() {
    let model = If97Saturation::new();
    let err = model.saturation_temperature(bar(300.0)).unwrap_err();
    assert!(matches!(err, SteamError::OutOfRange { .. }), "{err}");
}

#[test]
fn table_built_from_if97_agrees_within_interpolation_error() {
    let if97 = If97Saturation::new();
    let points: Vec<(f64, f64)> = (1..=25)
        .map(|i| {
            let p_mpa = i as f64 / 10.0;
            let t = if97.saturation_temperature(bar(i as f64)).unwrap();
            (p_mpa, to_kelvin(t))
        })
        .collect();
    let table = TabulatedSaturation::new("IF97 1-25 bar", points).unwrap();

    for p_bar in [3.5, 7.25, 12.5, 19.9, 24.5] {
        let exact = to_kelvin(if97.saturation_temperature(bar(p_bar)).unwrap());
        let approx = to_kelvin(table.saturation_temperature(bar(p_bar)).unwrap());
        // Above 3 bar, 1 bar spacing keeps linear interpolation within half a kelvin
        assert!((exact - approx).abs() < 0.5, "p = {} bar", p_bar);
    }
}
