//! Degree-based trigonometry and range reduction for angles and clock hours.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces `value` into `[0, period)`.
///
/// `value - period * floor(value / period)` can land on either boundary through
/// rounding (tiny negative inputs round up to exactly `period`), so both ends are
/// folded back into the half-open range.
fn normalize(value: f64, period: f64) -> f64 {
    let reduced = value - period * floor(value / period);
    if reduced < 0.0 {
        reduced + period
    } else if reduced >= period {
        reduced - period
    } else {
        reduced
    }
}

/// Normalizes an angle in degrees to the range [0, 360).
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    normalize(degrees, 360.0)
}

/// Normalizes a clock time in hours to the range [0, 24).
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    normalize(hours, 24.0)
}

/// Forward circular distance in hours from `from` to `to`, in [0, 24).
#[inline]
pub fn hour_difference(from: f64, to: f64) -> f64 {
    normalize_hours(to - from)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees. NaN outside [-1, 1].
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Two-argument arctangent in degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Arccotangent in degrees, `atan(1 / x)`. Callers must not pass zero.
#[inline]
pub fn acot_deg(x: f64) -> f64 {
    atan_deg(1.0 / x)
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(90.0), 90.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert!((normalize_degrees(-719.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_hours() {
        assert_eq!(normalize_hours(0.0), 0.0);
        assert_eq!(normalize_hours(24.0), 0.0);
        assert_eq!(normalize_hours(25.5), 1.5);
        assert_eq!(normalize_hours(-1.5), 22.5);
        assert_eq!(normalize_hours(-48.0), 0.0);
        assert!(normalize_hours(f64::NAN).is_nan());
    }

    #[test]
    fn test_hour_difference_is_forward() {
        assert!((hour_difference(18.0, 6.0) - 12.0).abs() < EPSILON);
        assert!((hour_difference(6.0, 18.0) - 12.0).abs() < EPSILON);
        assert!((hour_difference(23.0, 1.0) - 2.0).abs() < EPSILON);
        assert_eq!(hour_difference(5.0, 5.0), 0.0);
    }

    #[test]
    fn test_degree_trig() {
        assert!(sin_deg(0.0).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((asin_deg(0.5) - 30.0).abs() < EPSILON);
        assert!((acos_deg(0.5) - 60.0).abs() < EPSILON);
        assert!((atan_deg(1.0) - 45.0).abs() < EPSILON);
        assert!((atan2_deg(1.0, -1.0) - 135.0).abs() < EPSILON);
        assert!((acot_deg(1.0) - 45.0).abs() < EPSILON);
        assert!((acot_deg(3.0_f64.sqrt()) - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_acos_outside_domain_is_nan() {
        assert!(acos_deg(1.000_001).is_nan());
        assert!(acos_deg(-1.5).is_nan());
    }

    proptest! {
        #[test]
        fn normalized_degrees_stay_in_range(a in -1.0e7_f64..1.0e7_f64) {
            let n = normalize_degrees(a);
            prop_assert!((0.0..360.0).contains(&n), "{a} -> {n}");
            prop_assert_eq!(normalize_degrees(n), n);
        }

        #[test]
        fn normalized_hours_stay_in_range(h in -1.0e6_f64..1.0e6_f64) {
            let n = normalize_hours(h);
            prop_assert!((0.0..24.0).contains(&n), "{h} -> {n}");
            prop_assert_eq!(normalize_hours(n), n);
        }
    }
}
