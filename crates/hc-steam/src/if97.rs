//! IAPWS-IF97 Region 4 (saturation line).
//!
//! Implements the saturation-pressure equation and its closed-form backward
//! counterpart from the IAPWS Industrial Formulation 1997:
//!
//! ```text
//! β = (p / 1 MPa)^(1/4)
//! E = β² + n3·β + n6
//! F = n1·β² + n4·β + n7
//! G = n2·β² + n5·β + n8
//! D = 2G / (−F − √(F² − 4EG))
//! T_sat = (n10 + D − √((n10 + D)² − 4(n9 + n10·D))) / 2   [K]
//! ```
//!
//! Both directions are explicit, so no iteration is involved.

use crate::error::SteamResult;
use crate::model::{SaturationModel, validation};
use hc_core::numeric::ensure_finite;
use hc_core::units::{Pressure, Temperature, k, mpa};
use uom::si::pressure::megapascal;
use uom::si::thermodynamic_temperature::kelvin;

/// Region 4 coefficients n1..n10 (index 0 is n1).
const N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Triple-point pressure [MPa].
pub const P_MIN_MPA: f64 = 611.213e-6;
/// Critical pressure [MPa].
pub const P_MAX_MPA: f64 = 22.064;
/// Lower bound of the saturation line [K].
pub const T_MIN_K: f64 = 273.15;
/// Critical temperature [K].
pub const T_MAX_K: f64 = 647.096;

/// Saturation temperature [K] at pressure `p_mpa` [MPa].
pub fn saturation_temperature_k(p_mpa: f64) -> SteamResult<f64> {
    validation::validate_range("saturation pressure [MPa]", p_mpa, P_MIN_MPA, P_MAX_MPA)?;

    let beta = p_mpa.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    let t = (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0;

    Ok(ensure_finite(t, "saturation temperature [K]")?)
}

/// Saturation pressure [MPa] at temperature `t_k` [K].
pub fn saturation_pressure_mpa(t_k: f64) -> SteamResult<f64> {
    validation::validate_range("saturation temperature [K]", t_k, T_MIN_K, T_MAX_K)?;

    let theta = t_k + N[8] / (t_k - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    let p = (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4);

    Ok(ensure_finite(p, "saturation pressure [MPa]")?)
}

/// IAPWS-IF97 saturation line as a [`SaturationModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Saturation;

impl If97Saturation {
    pub fn new() -> Self {
        Self
    }

    /// Saturation pressure at temperature `t`.
    pub fn saturation_pressure(&self, t: Temperature) -> SteamResult<Pressure> {
        saturation_pressure_mpa(t.get::<kelvin>()).map(mpa)
    }
}

impl SaturationModel for If97Saturation {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn saturation_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        let p_mpa = p.get::<megapascal>();
        let t_k = saturation_temperature_k(p_mpa)?;
        tracing::trace!(p_mpa, t_k, "IF97 saturation lookup");
        Ok(k(t_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SteamError;
    use hc_core::numeric::{Tolerances, nearly_equal};
    use hc_core::units::{to_kelvin, to_mpa};

    // Verification values from the IF97 release, Tables 35 and 36.
    const TOL: Tolerances = Tolerances {
        abs: 0.0,
        rel: 1e-8,
    };

    #[test]
    fn backward_equation_verification_points() {
        assert!(nearly_equal(
            saturation_temperature_k(0.1).unwrap(),
            0.372_755_919e3,
            TOL
        ));
        assert!(nearly_equal(
            saturation_temperature_k(1.0).unwrap(),
            0.453_035_632e3,
            TOL
        ));
        assert!(nearly_equal(
            saturation_temperature_k(10.0).unwrap(),
            0.584_149_488e3,
            TOL
        ));
    }

    #[test]
    fn forward_equation_verification_points() {
        assert!(nearly_equal(
            saturation_pressure_mpa(300.0).unwrap(),
            0.353_658_941e-2,
            TOL
        ));
        assert!(nearly_equal(
            saturation_pressure_mpa(500.0).unwrap(),
            0.263_889_776e1,
            TOL
        ));
        assert!(nearly_equal(
            saturation_pressure_mpa(600.0).unwrap(),
            0.123_443_146e2,
            TOL
        ));
    }

    #[test]
    fn rejects_pressure_above_critical() {
        let err = saturation_temperature_k(30.0).unwrap_err();
        assert!(matches!(err, SteamError::OutOfRange { value, .. } if value == 30.0));
    }

    #[test]
    fn rejects_zero_and_negative_pressure() {
        assert!(matches!(
            saturation_temperature_k(0.0),
            Err(SteamError::OutOfRange { .. })
        ));
        assert!(matches!(
            saturation_temperature_k(-1.0),
            Err(SteamError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_nan_pressure() {
        assert!(matches!(
            saturation_temperature_k(f64::NAN),
            Err(SteamError::NonPhysical { .. })
        ));
    }

    #[test]
    fn model_uses_uom_pressure() {
        let model = If97Saturation::new();
        assert_eq!(model.name(), "IAPWS-IF97");
        let t = model.saturation_temperature(mpa(2.0)).unwrap();
        assert!((to_kelvin(t) - 485.534_535).abs() < 1e-5);

        let p = model.saturation_pressure(t).unwrap();
        assert!((to_mpa(p) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn lookup_is_unit_agnostic() {
        use uom::si::pressure::kilopascal;
        use uom::si::thermodynamic_temperature::degree_celsius;

        let model = If97Saturation::new();
        let from_kpa = model
            .saturation_temperature(Pressure::new::<kilopascal>(2000.0))
            .unwrap();
        let from_mpa = model.saturation_temperature(mpa(2.0)).unwrap();
        assert!((from_kpa.get::<kelvin>() - from_mpa.get::<kelvin>()).abs() < 1e-9);

        let p = model
            .saturation_pressure(Temperature::new::<degree_celsius>(100.0))
            .unwrap();
        assert!((p.get::<kilopascal>() - 101.418).abs() < 1e-2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn saturation_temperature_increases_with_pressure(p in 0.001_f64..22.0, dp in 0.001_f64..0.05) {
            let t_lo = saturation_temperature_k(p).unwrap();
            let t_hi = saturation_temperature_k(p + dp).unwrap();
            prop_assert!(t_hi > t_lo);
            prop_assert!((T_MIN_K..=T_MAX_K).contains(&t_lo));
        }
    }
}
