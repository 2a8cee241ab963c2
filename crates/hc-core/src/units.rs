// hc-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure in MPa (the IAPWS-IF97 reference unit).
#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

/// Temperature in K.
#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Bar per MPa.
    pub const BAR_PER_MPA: f64 = 10.0;

    #[inline]
    pub fn celsius_to_k(t_c: f64) -> f64 {
        t_c + KELVIN_OFFSET
    }

    #[inline]
    pub fn k_to_celsius(t_k: f64) -> f64 {
        t_k - KELVIN_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
    }

    #[test]
    fn pressure_conversions_agree() {
        assert!((to_mpa(bar(20.0)) - 2.0).abs() < 1e-12);
        assert!((to_mpa(mpa(2.0)) - 20.0 / constants::BAR_PER_MPA).abs() < 1e-12);
        assert!((pa(2.0e6).value - mpa(2.0).value).abs() < 1e-6);
    }

    #[test]
    fn celsius_round_trip() {
        let t_k = constants::celsius_to_k(1200.0);
        assert_eq!(t_k, 1473.15);
        assert!((constants::k_to_celsius(t_k) - 1200.0).abs() < 1e-12);
        assert_eq!(to_kelvin(k(t_k)), t_k);
    }
}
