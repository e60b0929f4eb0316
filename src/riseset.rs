//! Horizon events: dawn, dusk, sunrise, sunset, moonrise, moonset.
//!
//! Solar events have a closed-form first approximation (the sine-offset
//! formula), refined once when it moves by more than half a minute. An
//! event that cannot occur on the requested day — the polar day and polar
//! night cases — comes back as `None`, never as an error.
//!
//! Lunar events have no usable closed form because the parallax term
//! follows the varying Earth-Moon distance, so the search hour-steps
//! through the civil day watching the altitude sign, then bisects inside
//! the hour where it flips. Above roughly 61.5 degrees of latitude the
//! Moon can rise or set twice in one civil day; after a first crossing
//! the scan cools down for four hours before re-arming, and the full
//! ordered list of crossings (zero, one or two) is returned.

use log::trace;
use smallvec::SmallVec;

use crate::angle::{arcsin_degrees, cos_degrees, mod3, sin_degrees, tan_degrees};
use crate::constants::{DayNumber, Degree, Moment, ZoneHours, ONE_DAY, ONE_SECOND};
use crate::location::{solar_refraction, Location};
use crate::lunar::{geocentric_lunar_altitude, topocentric_lunar_altitude};
use crate::solar::{declination, solar_longitude};
use crate::time::{local_from_apparent, standard_from_local, universal_from_local, universal_from_standard};

/// One hour as a fraction of a day.
const HOUR: f64 = 1.0 / 24.0;

/// Bisection precision of the lunar crossing search: one second.
const CROSSING_PRECISION: f64 = ONE_SECOND as f64 / ONE_DAY as f64;

/// Refinement threshold of the depression solver: thirty seconds.
const DEPRESSION_PRECISION: f64 = 30.0 / 86_400.0;

/// Which half of the day a depression event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayHalf {
    Morning,
    Evening,
}

/// Whether the Moon's altitude is crossing upward or downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rising,
    Setting,
}

impl Crossing {
    fn detected(self, last: Degree, current: Degree) -> bool {
        match self {
            Crossing::Rising => last < 0.0 && current > 0.0,
            Crossing::Setting => last > 0.0 && current < 0.0,
        }
    }
}

/// Whether lunar altitudes are evaluated from the Earth's center or from
/// the observer's surface location (parallax- and refraction-corrected).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeMode {
    Geocentric,
    Topocentric,
}

fn lunar_altitude(moment: Moment, location: &Location, mode: AltitudeMode) -> Degree {
    match mode {
        AltitudeMode::Geocentric => geocentric_lunar_altitude(moment, location),
        AltitudeMode::Topocentric => topocentric_lunar_altitude(moment, location),
    }
}

/// Angle between where the sun is at `moment` and where it should be for
/// the event, as the sine of an hour-angle offset.
///
/// A magnitude above one means the sun never reaches the requested
/// depression on that day.
fn sine_offset(moment: Moment, location: &Location, depression: Degree) -> f64 {
    let universal = universal_from_local(moment, location.longitude());
    let delta = declination(universal, 0.0, solar_longitude(moment));
    tan_degrees(location.latitude()) * tan_degrees(delta)
        + sin_degrees(depression) / (cos_degrees(delta) * cos_degrees(location.latitude()))
}

/// Closed-form approximation of the moment the sun reaches `depression`
/// degrees below the horizon, or `None` when the event does not occur.
fn approx_moment_of_depression(
    moment: Moment,
    location: &Location,
    depression: Degree,
    half: DayHalf,
) -> Option<Moment> {
    let date = moment.floor();
    let attempt = sine_offset(moment, location, depression);

    // When the first probe overshoots, retry at the edge of the day the
    // event belongs to (midday for negative depressions).
    let alternate = if depression >= 0.0 {
        match half {
            DayHalf::Morning => date,
            DayHalf::Evening => date + 1.0,
        }
    } else {
        date + 0.5
    };
    let value = if attempt.abs() > 1.0 {
        sine_offset(alternate, location, depression)
    } else {
        attempt
    };

    if value.abs() <= 1.0 {
        let offset = mod3(arcsin_degrees(value) / 360.0, -0.5, 0.5);
        let adjusted = match half {
            DayHalf::Morning => 0.25 - offset,
            DayHalf::Evening => 0.75 + offset,
        };
        Some(local_from_apparent(date + adjusted, location.longitude()))
    } else {
        None
    }
}

/// Moment when the sun is at `depression` degrees below the horizon,
/// refined once if the first approximation moved by thirty seconds or
/// more.
fn moment_of_depression(
    approx: Moment,
    location: &Location,
    depression: Degree,
    half: DayHalf,
) -> Option<Moment> {
    let moment = approx_moment_of_depression(approx, location, depression, half)?;
    if (approx - moment).abs() >= DEPRESSION_PRECISION {
        approx_moment_of_depression(moment, location, depression, half)
    } else {
        Some(moment)
    }
}

/// Dawn at `depression` degrees, in standard time of `zone`.
///
/// Arguments
/// ---------
/// * `date`: Rata Die day number of the civil day.
/// * `zone`: fixed UTC offset of the standard clock, hours.
/// * `location`: observer location (its zone spec is not consulted here).
/// * `depression`: degrees below the geometric horizon; 6, 12 and 18 give
///   the civil, nautical and astronomical twilight boundaries.
///
/// Returns `None` during polar day or night.
pub fn dawn(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    depression: Degree,
) -> Option<Moment> {
    let event = moment_of_depression(
        date as Moment + 0.25,
        location,
        depression,
        DayHalf::Morning,
    )?;
    Some(standard_from_local(event, zone, location.longitude()))
}

/// Dusk at `depression` degrees, in standard time of `zone`.
pub fn dusk(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    depression: Degree,
) -> Option<Moment> {
    let event = moment_of_depression(
        date as Moment + 0.75,
        location,
        depression,
        DayHalf::Evening,
    )?;
    Some(standard_from_local(event, zone, location.longitude()))
}

/// Sunrise in standard time of `zone`: dawn with the visible-horizon
/// refraction for the location's elevation added to `depression`.
pub fn sunrise(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    depression: Degree,
) -> Option<Moment> {
    dawn(
        date,
        zone,
        location,
        depression + solar_refraction(location.elevation(), location.latitude()),
    )
}

/// Sunset in standard time of `zone`.
pub fn sunset(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    depression: Degree,
) -> Option<Moment> {
    dusk(
        date,
        zone,
        location,
        depression + solar_refraction(location.elevation(), location.latitude()),
    )
}

/// Bisect the crossing inside the hour ending at `hour_end`.
fn bisect_crossing(
    hour_end: Moment,
    location: &Location,
    mode: AltitudeMode,
    crossing: Crossing,
) -> Moment {
    let mut lower = hour_end - HOUR;
    let mut upper = hour_end;
    let mut below = lunar_altitude(lower, location, mode);
    while upper - lower > CROSSING_PRECISION {
        let middle = lower + (upper - lower) * 0.5;
        let altitude = lunar_altitude(middle, location, mode);
        if crossing.detected(below, altitude) {
            upper = middle;
        } else {
            lower = middle;
            below = altitude;
        }
    }
    lower + (upper - lower) * 0.5
}

/// Scan one civil day for lunar horizon crossings in the given direction.
///
/// Universal-time moments, in order; empty when the event does not occur
/// that day.
fn lunar_crossings(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    mode: AltitudeMode,
    crossing: Crossing,
) -> SmallVec<[Moment; 2]> {
    let day_start = universal_from_standard(date as Moment, zone);
    let day_end = day_start + 1.0;

    let mut events = SmallVec::new();
    let mut last_altitude = lunar_altitude(day_start, location, mode);
    let mut hour = day_start + HOUR;

    while hour <= day_end + CROSSING_PRECISION {
        let current = lunar_altitude(hour, location, mode);
        if crossing.detected(last_altitude, current) {
            let moment = bisect_crossing(hour, location, mode, crossing);
            if moment < day_start || moment >= day_end {
                break;
            }
            trace!("lunar {crossing:?} at {moment} (scan hour {hour})");
            events.push(moment);
            if events.len() == 2 {
                break;
            }
            // A second crossing is possible above ~61.5 degrees latitude;
            // cool down for four hours before re-arming detection.
            last_altitude = lunar_altitude(hour + 3.0 * HOUR, location, mode);
            hour += 4.0 * HOUR;
        } else {
            last_altitude = current;
            hour += HOUR;
        }
    }
    events
}

/// Moonrise moments within one civil day of `zone`, in Universal time.
///
/// The list is ordered and holds zero, one or, at high latitudes, two
/// crossings; callers must treat the empty list as a first-class outcome.
pub fn moonrise(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    mode: AltitudeMode,
) -> SmallVec<[Moment; 2]> {
    lunar_crossings(date, zone, location, mode, Crossing::Rising)
}

/// Moonset moments within one civil day of `zone`, in Universal time.
pub fn moonset(
    date: DayNumber,
    zone: ZoneHours,
    location: &Location,
    mode: AltitudeMode,
) -> SmallVec<[Moment; 2]> {
    lunar_crossings(date, zone, location, mode, Crossing::Setting)
}

#[cfg(test)]
mod riseset_test {
    use super::*;
    use crate::constants::{ASTRONOMICAL_TWILIGHT, SUNRISE_SUNSET};
    use crate::location::ZoneSpec;
    use crate::moment::day_number;

    fn equator() -> Location {
        Location::new(0.0, 0.0, 0.0, ZoneSpec::FixedHours(0.0)).unwrap()
    }

    fn los_angeles() -> Location {
        Location::new(33.942_496, -118.408_049, 38.95, ZoneSpec::FixedHours(-8.0)).unwrap()
    }

    fn arctic() -> Location {
        Location::new(70.0, 0.0, 0.0, ZoneSpec::FixedHours(0.0)).unwrap()
    }

    #[test]
    fn test_equator_sunrise_near_quarter_day() {
        let date = day_number(2000, 3, 20);
        let rise = sunrise(date, 0.0, &equator(), SUNRISE_SUNSET).unwrap();
        let set = sunset(date, 0.0, &equator(), SUNRISE_SUNSET).unwrap();
        assert!(
            (rise - (date as f64 + 0.25)).abs() < 0.015,
            "sunrise at {}",
            rise - date as f64
        );
        assert!(
            (set - (date as f64 + 0.75)).abs() < 0.015,
            "sunset at {}",
            set - date as f64
        );
    }

    #[test]
    fn test_equator_day_length_near_twelve_hours() {
        // Within the equation-of-time envelope all year round
        for &(y, m, d) in &[(2000, 3, 20), (2000, 6, 21), (2000, 12, 21)] {
            let date = day_number(y, m, d);
            let rise = sunrise(date, 0.0, &equator(), SUNRISE_SUNSET).unwrap();
            let set = sunset(date, 0.0, &equator(), SUNRISE_SUNSET).unwrap();
            let half_days = set - rise;
            assert!(
                (half_days - 0.5).abs() < 16.0 / (24.0 * 60.0),
                "{y}-{m}-{d}: day length {half_days}"
            );
        }
    }

    #[test]
    fn test_midnight_sun_has_no_sunset() {
        let date = day_number(2020, 6, 21);
        assert!(sunset(date, 0.0, &arctic(), SUNRISE_SUNSET).is_none());
        assert!(sunrise(date, 0.0, &arctic(), SUNRISE_SUNSET).is_none());
        // The sun does not even reach astronomical darkness
        assert!(dawn(date, 0.0, &arctic(), ASTRONOMICAL_TWILIGHT).is_none());
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        let date = day_number(2020, 12, 21);
        assert!(sunrise(date, 0.0, &arctic(), SUNRISE_SUNSET).is_none());
        // Civil twilight still happens at 70 N in December
        assert!(dawn(date, 0.0, &arctic(), crate::constants::CIVIL_TWILIGHT).is_some());
    }

    #[test]
    fn test_sunrise_before_sunset_midlatitude() {
        let date = day_number(2021, 5, 1);
        let rise = sunrise(date, -8.0, &los_angeles(), SUNRISE_SUNSET).unwrap();
        let set = sunset(date, -8.0, &los_angeles(), SUNRISE_SUNSET).unwrap();
        assert!(rise < set);
        // May day at 34 N runs long: 13 to 14.5 hours
        let length = set - rise;
        assert!((0.54..0.61).contains(&length), "day length {length}");
    }

    #[test]
    fn test_moonrise_roughly_daily() {
        // Moonrise skips at most one civil day per month
        let start = day_number(2021, 5, 1);
        let mut count = 0;
        for offset in 0..5 {
            let rises = moonrise(start + offset, -8.0, &los_angeles(), AltitudeMode::Topocentric);
            assert!(rises.len() <= 2);
            let day_start = universal_from_standard((start + offset) as f64, -8.0);
            for &rise in &rises {
                assert!(rise >= day_start && rise < day_start + 1.0);
            }
            if rises.len() == 2 {
                assert!(rises[0] < rises[1]);
            }
            count += rises.len();
        }
        assert!((4..=6).contains(&count), "{count} moonrises in 5 days");
    }

    #[test]
    fn test_moonset_roughly_daily() {
        let start = day_number(2021, 5, 1);
        let mut count = 0;
        for offset in 0..5 {
            count += moonset(start + offset, -8.0, &los_angeles(), AltitudeMode::Geocentric).len();
        }
        assert!((4..=6).contains(&count), "{count} moonsets in 5 days");
    }

    #[test]
    fn test_geocentric_topocentric_agree_to_minutes() {
        let date = day_number(2022, 9, 10);
        let geo = moonrise(date, -8.0, &los_angeles(), AltitudeMode::Geocentric);
        let topo = moonrise(date, -8.0, &los_angeles(), AltitudeMode::Topocentric);
        if let (Some(g), Some(t)) = (geo.first(), topo.first()) {
            // Parallax and refraction shift the crossing by minutes, not hours
            assert!((g - t).abs() < 1.5 / 24.0, "geo {g} vs topo {t}");
        }
    }
}
