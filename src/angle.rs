//! Degree-based angle algebra.
//!
//! All position series and searches in this crate work in degrees, so the
//! trigonometric wrappers here convert to radians at the last possible
//! moment. Producers of angles normalize into `[0, 360)` with
//! [`calc_degrees`] unless documented otherwise.

use crate::constants::Degree;

/// Normalize an angle into the range `[0, 360)`.
pub fn calc_degrees(degrees: Degree) -> Degree {
    degrees.rem_euclid(360.0)
}

/// Force `x` into the range `[a, b)`.
///
/// When `a == b` the range is degenerate and `x` is returned unchanged.
pub fn mod3(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        x
    } else {
        a + (x - a).rem_euclid(b - a)
    }
}

/// Largest integer less than or equal to `x`.
pub fn floor(x: f64) -> i64 {
    x.floor() as i64
}

/// Round `x` to the nearest integer, halves up.
pub fn round(x: f64) -> i64 {
    floor(x + 0.5)
}

/// Sign of `x`: -1, 0 or 1.
pub fn signum(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Decimal degrees from degrees, arcminutes and arcseconds.
///
/// The sign of `degrees` carries the sign of the result.
pub fn angle(degrees: f64, minutes: f64, seconds: f64) -> Degree {
    let decimal = degrees.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if degrees < 0.0 {
        -decimal
    } else {
        decimal
    }
}

/// Sine of an angle given in degrees.
pub fn sin_degrees(theta: Degree) -> f64 {
    theta.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_degrees(theta: Degree) -> f64 {
    theta.to_radians().cos()
}

/// Tangent of an angle given in degrees.
pub fn tan_degrees(theta: Degree) -> f64 {
    theta.to_radians().tan()
}

/// Arc sine in degrees.
pub fn arcsin_degrees(x: f64) -> Degree {
    x.asin().to_degrees()
}

/// Arc cosine in degrees.
pub fn arccos_degrees(x: f64) -> Degree {
    x.acos().to_degrees()
}

/// Two-argument arc tangent, normalized into `[0, 360)`.
pub fn arctan_degrees(y: f64, x: f64) -> Degree {
    calc_degrees(y.atan2(x).to_degrees())
}

#[cfg(test)]
mod angle_test {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_calc_degrees() {
        assert_eq!(calc_degrees(0.0), 0.0);
        assert_eq!(calc_degrees(360.0), 0.0);
        assert_eq!(calc_degrees(-90.0), 270.0);
        assert_eq!(calc_degrees(720.5), 0.5);
        assert_eq!(calc_degrees(-720.25), 359.75);
    }

    #[test]
    fn test_mod3() {
        assert_eq!(mod3(10.0, -0.5, 0.5), 0.0);
        assert_eq!(mod3(0.75, -0.5, 0.5), -0.25);
        assert_eq!(mod3(190.0, -180.0, 180.0), -170.0);
        // Degenerate range passes the value through
        assert_eq!(mod3(42.0, 1.0, 1.0), 42.0);
    }

    #[test]
    fn test_floor_round() {
        assert_eq!(floor(1.99), 1);
        assert_eq!(floor(-0.01), -1);
        assert_eq!(round(0.5), 1);
        assert_eq!(round(-0.51), -1);
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(angle(23.0, 26.0, 21.448), 23.439_291_111_111_11, epsilon = 1e-12);
        assert_relative_eq!(angle(0.0, 0.0, 19.0), 19.0 / 3600.0, epsilon = 1e-15);
        assert_relative_eq!(angle(-5.0, 30.0, 0.0), -5.5, epsilon = 1e-15);
    }

    #[test]
    fn test_arctan_degrees_quadrants() {
        assert_relative_eq!(arctan_degrees(1.0, 1.0), 45.0, epsilon = 1e-12);
        assert_relative_eq!(arctan_degrees(1.0, -1.0), 135.0, epsilon = 1e-12);
        assert_relative_eq!(arctan_degrees(-1.0, -1.0), 225.0, epsilon = 1e-12);
        assert_relative_eq!(arctan_degrees(-1.0, 1.0), 315.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn calc_degrees_always_in_range(x in -1.0e9f64..1.0e9f64) {
            let d = calc_degrees(x);
            prop_assert!((0.0..360.0).contains(&d));
        }

        #[test]
        fn mod3_always_in_range(x in -1.0e6f64..1.0e6f64) {
            let v = mod3(x, -0.5, 0.5);
            prop_assert!((-0.5..0.5).contains(&v));
        }
    }
}
