//! # Constants and type definitions for Syzygy
//!
//! This module centralizes the **astronomical constants**, **epoch
//! definitions**, and **common type aliases** used throughout the `syzygy`
//! library.
//!
//! ## Overview
//!
//! - Epoch and day-count constants (Rata Die based)
//! - Mean motion constants for the Sun and Moon
//! - Event angles: seasons, lunar phases, twilight depressions
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the time-scale
//! conversions, the position series, and the event searches.

// -------------------------------------------------------------------------------------------------
// Time units
// -------------------------------------------------------------------------------------------------

/// Milliseconds in a day
pub const ONE_DAY: i64 = 86_400_000;

/// Milliseconds in an hour
pub const ONE_HOUR: i64 = 3_600_000;

/// Milliseconds in a minute
pub const ONE_MINUTE: i64 = 60_000;

/// Milliseconds in a second
pub const ONE_SECOND: i64 = 1_000;

// -------------------------------------------------------------------------------------------------
// Epochs and mean motions
// -------------------------------------------------------------------------------------------------

/// Moment of J2000.0: noon on January 1, 2000 (Rata Die day count)
pub const J2000: f64 = 730_120.5;

/// Mean time from new moon to new moon, in days
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;

/// Index of the reference new moon (January 11, 1 CE) in the running
/// new-moon count used by [`nth_new_moon`](crate::lunar::nth_new_moon).
pub const NEW_MOON_EPOCH_INDEX: i64 = 24_724;

/// Half diameter of the sun (16 arcminutes) plus 34.478885263888294
/// arcminutes of mean atmospheric refraction, in degrees.
///
/// This is the depression of the solar center below the geometric horizon
/// at the instant the upper limb appears to touch it.
pub const VISIBLE_HORIZON: f64 = 0.841_314_754_398_138_2;

// -------------------------------------------------------------------------------------------------
// Event angles
// -------------------------------------------------------------------------------------------------

/// Solar longitude of the March equinox
pub const SPRING: f64 = 0.0;
/// Solar longitude of the June solstice
pub const SUMMER: f64 = 90.0;
/// Solar longitude of the September equinox
pub const AUTUMN: f64 = 180.0;
/// Solar longitude of the December solstice
pub const WINTER: f64 = 270.0;

/// Lunar phase angle of a new moon
pub const NEW_MOON: f64 = 0.0;
/// Lunar phase angle of a first-quarter moon
pub const FIRST_QUARTER_MOON: f64 = 90.0;
/// Lunar phase angle of a full moon
pub const FULL_MOON: f64 = 180.0;
/// Lunar phase angle of a last-quarter moon
pub const LAST_QUARTER_MOON: f64 = 270.0;

/// Depression angle of geometric sunrise/sunset
pub const SUNRISE_SUNSET: f64 = 0.0;
/// Depression angle of civil twilight
pub const CIVIL_TWILIGHT: f64 = 6.0;
/// Depression angle of nautical twilight
pub const NAUTICAL_TWILIGHT: f64 = 12.0;
/// Depression angle of astronomical twilight
pub const ASTRONOMICAL_TWILIGHT: f64 = 18.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// A continuous count of days since the Rata Die epoch (day 1 is
/// January 1, 1 CE Gregorian); the fractional part is the time of day.
/// Moments before the epoch are negative.
pub type Moment = f64;

/// A whole-day Rata Die date
pub type DayNumber = i64;

/// Angle in degrees
pub type Degree = f64;

/// Distance in meters
pub type Meter = f64;

/// Time-zone offset in hours east of Greenwich
pub type ZoneHours = f64;
