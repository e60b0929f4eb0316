//! Time-scale algebra.
//!
//! Moves a moment between Universal, Dynamical, Local, Standard, Apparent
//! and Sidereal representations.
//!
//! Universal time tracks the Earth's (slowing) rotation; Dynamical time is
//! the uniform scale the position series are built on. The two are bridged
//! by [`ephemeris_correction`], an empirical piecewise polynomial in the
//! Gregorian year.

use crate::angle::{calc_degrees, cos_degrees, signum, sin_degrees, tan_degrees};
use crate::constants::{Degree, Moment, ZoneHours, J2000};
use crate::moment::{gregorian_date_difference, gregorian_year_from_days};
use crate::solar::obliquity;

/// Fractional-day correction from Universal to Dynamical time.
///
/// Looks up the Gregorian year containing `moment` and evaluates the
/// matching polynomial. The year ranges are contiguous and exhaustive:
/// 2051-2150, 2006-2050, 1987-2005, 1900-1986, 1800-1899, 1700-1799,
/// 1600-1699, 500-1599, -499-499, and a quadratic fallback for everything
/// else.
///
/// The 1800-1986 rules are scaled in centuries since 1900-01-01; the
/// remaining historical rules are scaled in offset years.
pub fn ephemeris_correction(moment: Moment) -> f64 {
    let year = gregorian_year_from_days(moment.floor() as i64);
    let c = gregorian_date_difference(1900, 1, 1, year, 7, 1) as f64 / 36_525.0;

    if (2051..=2150).contains(&year) {
        let y = (year as f64 - 1820.0) / 100.0;
        (-20.0 + 32.0 * y.powi(2) + 0.5628 * (2150.0 - year as f64)) / 86_400.0
    } else if (2006..=2050).contains(&year) {
        let y = year as f64 - 2000.0;
        (62.92 + 0.32217 * y + 0.005589 * y.powi(2)) / 86_400.0
    } else if (1987..=2005).contains(&year) {
        let y = year as f64 - 2000.0;
        (63.86 + 0.3345 * y - 0.060374 * y.powi(2)
            + 0.0017275 * y.powi(3)
            + 0.000651814 * y.powi(4)
            + 0.00002373599 * y.powi(5))
            / 86_400.0
    } else if (1900..=1986).contains(&year) {
        -0.00002 + 0.000297 * c + 0.025184 * c.powi(2) - 0.181133 * c.powi(3)
            + 0.553040 * c.powi(4)
            - 0.861938 * c.powi(5)
            + 0.677066 * c.powi(6)
            - 0.212591 * c.powi(7)
    } else if (1800..=1899).contains(&year) {
        -0.000009
            + 0.003844 * c
            + 0.083563 * c.powi(2)
            + 0.865736 * c.powi(3)
            + 4.867575 * c.powi(4)
            + 15.845535 * c.powi(5)
            + 31.332267 * c.powi(6)
            + 38.291999 * c.powi(7)
            + 28.316289 * c.powi(8)
            + 11.636204 * c.powi(9)
            + 2.043794 * c.powi(10)
    } else if (1700..=1799).contains(&year) {
        let y = year as f64 - 1700.0;
        (8.118780842 - 0.005092142 * y + 0.003336121 * y.powi(2) - 0.0000266484 * y.powi(3))
            / 86_400.0
    } else if (1600..=1699).contains(&year) {
        let y = year as f64 - 1600.0;
        (120.0 - 0.9808 * y - 0.01532 * y.powi(2) + 0.000140272128 * y.powi(3)) / 86_400.0
    } else if (500..=1599).contains(&year) {
        let y = (year as f64 - 1000.0) / 100.0;
        (1574.2 - 556.01 * y + 71.23472 * y.powi(2) + 0.319781 * y.powi(3)
            - 0.8503463 * y.powi(4)
            - 0.005050998 * y.powi(5)
            + 0.0083572073 * y.powi(6))
            / 86_400.0
    } else if (-499..=499).contains(&year) {
        let y = year as f64 / 100.0;
        (10583.6 - 1014.41 * y + 33.78311 * y.powi(2) - 5.952053 * y.powi(3)
            - 0.1798452 * y.powi(4)
            + 0.022174192 * y.powi(5)
            + 0.0090316521 * y.powi(6))
            / 86_400.0
    } else {
        let y = (year as f64 - 1820.0) / 100.0;
        (-20.0 + 32.0 * y.powi(2)) / 86_400.0
    }
}

/// Convert Universal Time to Dynamical.
pub fn dynamical_from_universal(universal: Moment) -> Moment {
    universal + ephemeris_correction(universal)
}

/// Convert Dynamical Time to Universal.
///
/// Subtracts the correction evaluated at the dynamical-side moment rather
/// than solving for the true inverse. The resulting asymmetry is far below
/// a second anywhere in the modeled era and the calendar layers are tuned
/// against it, so it stays.
pub fn universal_from_dynamical(dynamical: Moment) -> Moment {
    dynamical - ephemeris_correction(dynamical)
}

/// Julian centuries since J2000.0, in Dynamical time.
pub fn julian_centuries(moment: Moment) -> f64 {
    (dynamical_from_universal(moment) - J2000) / 36_525.0
}

/// Greenwich sidereal angle at a moment, degrees in `[0, 360)`.
pub fn sidereal_from_moment(moment: Moment) -> Degree {
    let c = (moment - J2000) / 36_525.0;
    calc_degrees(
        280.46061837 + 36_525.0 * 360.98564736629 * c + 0.000387933 * c.powi(2)
            - c.powi(3) / 38_710_000.0,
    )
}

/// Mean-time zone of a longitude, as a fraction of a day.
///
/// Local mean time shifts by one hour every 15 degrees.
pub fn zone_from_longitude(longitude: Degree) -> f64 {
    longitude / 360.0
}

/// Convert Universal Time to Local mean time.
pub fn local_from_universal(universal: Moment, longitude: Degree) -> Moment {
    universal + zone_from_longitude(longitude)
}

/// Convert Local mean time to Universal.
pub fn universal_from_local(local: Moment, longitude: Degree) -> Moment {
    local - zone_from_longitude(longitude)
}

/// Convert Universal Time to Standard (fixed-offset zone) time.
pub fn standard_from_universal(universal: Moment, zone: ZoneHours) -> Moment {
    universal + zone / 24.0
}

/// Convert Standard time to Universal.
pub fn universal_from_standard(standard: Moment, zone: ZoneHours) -> Moment {
    standard - zone / 24.0
}

/// Convert Local mean time to Standard time.
pub fn standard_from_local(local: Moment, zone: ZoneHours, longitude: Degree) -> Moment {
    standard_from_universal(universal_from_local(local, longitude), zone)
}

/// Equation of time at a Universal moment, as a fraction of a day.
///
/// Closed-form series in the solar mean longitude, mean anomaly, orbital
/// eccentricity and obliquity. The magnitude is clamped to half a day with
/// the sign preserved.
pub fn equation_of_time(moment: Moment) -> f64 {
    let c = julian_centuries(moment);
    let longitude = 280.46645 + 36_000.76983 * c + 0.0003032 * c.powi(2);
    let anomaly = 357.52910 + 35_999.05030 * c - 0.0001559 * c.powi(2) - 0.00000048 * c.powi(3);
    let eccentricity = 0.016708617 - 0.000042037 * c - 0.0000001236 * c.powi(2);
    let y = tan_degrees(obliquity(c) / 2.0).powi(2);
    let equation = 1.0 / (2.0 * std::f64::consts::PI)
        * (y * sin_degrees(longitude * 2.0) - 2.0 * eccentricity * sin_degrees(anomaly)
            + 4.0 * eccentricity * y * sin_degrees(anomaly) * cos_degrees(longitude * 2.0)
            - 0.5 * y.powi(2) * sin_degrees(longitude * 4.0)
            - 1.25 * eccentricity.powi(2) * sin_degrees(anomaly * 2.0));
    signum(equation) * equation.abs().min(0.5)
}

/// Convert Local mean time to Apparent (sundial) time.
pub fn apparent_from_local(local: Moment, longitude: Degree) -> Moment {
    local + equation_of_time(universal_from_local(local, longitude))
}

/// Convert Apparent time to Local mean time.
pub fn local_from_apparent(apparent: Moment, longitude: Degree) -> Moment {
    apparent - equation_of_time(universal_from_local(apparent, longitude))
}

/// Convert Apparent time to Universal.
pub fn universal_from_apparent(apparent: Moment, longitude: Degree) -> Moment {
    universal_from_local(local_from_apparent(apparent, longitude), longitude)
}

/// True middle of a solar day: the Universal moment of local apparent noon.
pub fn midday(date: Moment, longitude: Degree) -> Moment {
    universal_from_apparent(date + 0.5, longitude)
}
