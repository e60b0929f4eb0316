//! Moments, Rata Die dates and civil-clock serialization.
//!
//! A [`Moment`](crate::constants::Moment) is a plain `f64` day count since
//! the Rata Die epoch (day 1 = January 1, 1 CE Gregorian). This module
//! carries the Gregorian helpers the time-scale model needs and the
//! conversion between moments and [`chrono::NaiveDateTime`] values.
//!
//! Serialization goes through an integer millisecond count so that the
//! fractional day of a pre-epoch (negative) moment still lands in
//! `[0, 1)` after floor division.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::constants::{DayNumber, Moment, ONE_DAY, ONE_HOUR, ONE_MINUTE, ONE_SECOND};
use crate::errors::SyzygyError;

/// Rata Die day number of a Gregorian calendar date.
///
/// Arguments
/// ---------
/// * `year`: astronomical year numbering (1 BCE is year 0).
/// * `month`: 1-12.
/// * `day`: 1-31.
pub fn day_number(year: i64, month: i64, day: i64) -> DayNumber {
    let prior = year - 1;
    let leap = is_gregorian_leap_year(year);
    let correction = if month <= 2 {
        0
    } else if leap {
        -1
    } else {
        -2
    };
    365 * prior + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400)
        + (367 * month - 362).div_euclid(12)
        + correction
        + day
}

/// Gregorian leap-year rule.
pub fn is_gregorian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(400) != 100 && year.rem_euclid(400) != 200 && year.rem_euclid(400) != 300)
}

/// Gregorian year containing a Rata Die day number.
///
/// Total over all inputs: the calculation is pure 400/100/4/1-year cycle
/// arithmetic and never consults a calendar library.
pub fn gregorian_year_from_days(days: DayNumber) -> i64 {
    let d0 = days - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1.div_euclid(36_524);
    let d2 = d1.rem_euclid(36_524);
    let n4 = d2.div_euclid(1_461);
    let d3 = d2.rem_euclid(1_461);
    let n1 = d3.div_euclid(365);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        year
    } else {
        year + 1
    }
}

/// Days between two Gregorian dates, end minus start.
pub fn gregorian_date_difference(
    start_year: i64,
    start_month: i64,
    start_day: i64,
    end_year: i64,
    end_month: i64,
    end_day: i64,
) -> i64 {
    day_number(end_year, end_month, end_day) - day_number(start_year, start_month, start_day)
}

/// Serial millisecond count of a moment, rounded to the nearest
/// millisecond before the floor-division split into day and time of day.
pub fn moment_to_serial(moment: Moment) -> i64 {
    (moment * ONE_DAY as f64).round() as i64
}

/// Convert a civil date-time to a moment.
pub fn moment_from_civil(civil: &NaiveDateTime) -> Moment {
    let days = civil.date().num_days_from_ce() as f64;
    let seconds =
        civil.time().num_seconds_from_midnight() as f64 + civil.time().nanosecond() as f64 / 1e9;
    days + seconds / 86_400.0
}

/// Convert a moment to a civil date-time, millisecond resolution.
///
/// The serial count is split with floor division so that negative moments
/// resolve to the correct pre-epoch day with a non-negative time of day.
///
/// Returns [`SyzygyError::MomentOutOfRange`] for moments whose year falls
/// outside the representable civil range.
pub fn civil_from_moment(moment: Moment) -> Result<NaiveDateTime, SyzygyError> {
    let serial = moment_to_serial(moment);
    let days = serial.div_euclid(ONE_DAY);
    let mut time = serial.rem_euclid(ONE_DAY);

    let date = i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(SyzygyError::MomentOutOfRange(moment))?;

    let hour = time.div_euclid(ONE_HOUR);
    time -= hour * ONE_HOUR;
    let minute = time.div_euclid(ONE_MINUTE);
    time -= minute * ONE_MINUTE;
    let second = time.div_euclid(ONE_SECOND);
    let millisecond = time - second * ONE_SECOND;

    let time = NaiveTime::from_hms_milli_opt(
        hour as u32,
        minute as u32,
        second as u32,
        millisecond as u32,
    )
    .ok_or(SyzygyError::MomentOutOfRange(moment))?;
    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod moment_test {
    use super::*;

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(day_number(1, 1, 1), 1);
    }

    #[test]
    fn test_day_number_known_dates() {
        assert_eq!(day_number(2000, 1, 1), 730_120);
        assert_eq!(day_number(1945, 11, 12), 710_347);
        assert_eq!(day_number(1900, 1, 1), 693_596);
        assert_eq!(day_number(2000, 3, 1), 730_180);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2024));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2023));
    }

    #[test]
    fn test_gregorian_year_from_days() {
        assert_eq!(gregorian_year_from_days(1), 1);
        assert_eq!(gregorian_year_from_days(730_120), 2000);
        assert_eq!(gregorian_year_from_days(710_347), 1945);
        assert_eq!(gregorian_year_from_days(day_number(2000, 12, 31)), 2000);
        assert_eq!(gregorian_year_from_days(day_number(2001, 1, 1)), 2001);
        // Pre-epoch days resolve to non-positive astronomical years
        assert_eq!(gregorian_year_from_days(0), 0);
    }

    #[test]
    fn test_year_roundtrip_across_era() {
        for year in [-500, -1, 0, 1, 500, 1600, 1970, 2150] {
            assert_eq!(gregorian_year_from_days(day_number(year, 7, 1)), year);
        }
    }

    #[test]
    fn test_gregorian_date_difference() {
        assert_eq!(gregorian_date_difference(1900, 1, 1, 1900, 7, 1), 181);
        assert_eq!(gregorian_date_difference(2000, 1, 1, 1900, 1, 1), -36_524);
    }

    #[test]
    fn test_chrono_days_agree_with_day_number() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(date.num_days_from_ce() as i64, day_number(2000, 1, 1));
    }

    #[test]
    fn test_civil_roundtrip() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_milli_opt(13, 45, 30, 250)
            .unwrap();
        let m = moment_from_civil(&dt);
        assert_eq!(civil_from_moment(m).unwrap(), dt);
    }

    #[test]
    fn test_negative_moment_floors() {
        // -0.25 is 18:00 on the day before the pre-epoch boundary
        let civil = civil_from_moment(-0.25).unwrap();
        assert_eq!(civil.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(civil.date().num_days_from_ce(), -1);
        let back = moment_from_civil(&civil);
        assert!((back - (-0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_noon_moment() {
        let civil = civil_from_moment(730_120.5).unwrap();
        assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(civil.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_out_of_range_moment() {
        assert!(civil_from_moment(1.0e15).is_err());
    }
}
