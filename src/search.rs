//! Angle-target event searches.
//!
//! Both solar and lunar events reduce to the same shape: a periodic,
//! monotonically advancing angle must reach a target value. The searches
//! here estimate a bracket from the mean rate of change, widen it enough
//! to guarantee the target is crossed exactly once, then bisect.
//!
//! The bisection predicate compares the phase *relative to the target*
//! (`calc_degrees(f(mid) - target) < 180`), which is what makes the
//! 360-to-0 wraparound transparent: an angle just short of the target
//! sits a little below 360 relative degrees, one just past it a little
//! above 0.

use log::trace;

use crate::angle::calc_degrees;
use crate::constants::{DayNumber, Degree, Moment, MEAN_SYNODIC_MONTH};
use crate::lunar::{lunar_phase, MoonPhase};
use crate::moment::day_number;
use crate::solar::{mean_tropical_year, solar_longitude, Season};
use crate::time::julian_centuries;

/// Bracket width below which a bisection stops: one hundred-thousandth of
/// a day, about 0.9 seconds.
const BISECTION_PRECISION: f64 = 0.00001;

/// Days the solar bracket is widened beyond the rate-based estimate.
const SOLAR_BRACKET_SLACK: f64 = 5.0;

/// Days the lunar bracket is widened beyond the rate-based estimate.
const LUNAR_BRACKET_SLACK: f64 = 2.0;

/// Bisect `[start, end]` for the moment where `angle_at` reaches `target`.
///
/// Requires the bracket to contain exactly one crossing of the target.
fn bisect_target(
    mut start: Moment,
    mut end: Moment,
    target: Degree,
    angle_at: impl Fn(Moment) -> Degree,
) -> Moment {
    let mut iterations = 0u32;
    while end - start >= BISECTION_PRECISION {
        let middle = start + (end - start) * 0.5;
        if calc_degrees(angle_at(middle) - target) < 180.0 {
            end = middle;
        } else {
            start = middle;
        }
        iterations += 1;
    }
    trace!(
        "bisection converged after {iterations} steps, width {:e}",
        end - start
    );
    start + (end - start) * 0.5
}

/// First moment at or after `moment` when the solar longitude reaches
/// `target` degrees.
///
/// Typical targets are the equinox and solstice longitudes (0, 90, 180,
/// 270), but any solar-term boundary works.
///
/// The estimate jumps ahead by the mean tropical year scaled to the
/// longitude still to cover, then the bracket is widened by five days on
/// each side so the sun passes through exactly one multiple of the target.
pub fn solar_longitude_after(moment: Moment, target: Degree) -> Moment {
    let rate = mean_tropical_year(julian_centuries(moment)) / 360.0;
    let estimate = moment + rate * calc_degrees(target - solar_longitude(moment));
    let start = if moment > estimate - SOLAR_BRACKET_SLACK {
        estimate - SOLAR_BRACKET_SLACK
    } else {
        moment
    };
    let end = estimate + SOLAR_BRACKET_SLACK;
    bisect_target(start, end, target, solar_longitude)
}

/// Last moment at or before `moment` when the lunar phase reached
/// `target` degrees.
pub fn lunar_phase_at_or_before(moment: Moment, target: Degree) -> Moment {
    let estimate =
        moment - (MEAN_SYNODIC_MONTH / 360.0) * calc_degrees(lunar_phase(moment) - target);
    let start = estimate - LUNAR_BRACKET_SLACK;
    let end = if moment > estimate + LUNAR_BRACKET_SLACK {
        estimate + LUNAR_BRACKET_SLACK
    } else {
        moment
    };
    bisect_target(start, end, target, lunar_phase)
}

/// First moment at or after `moment` when the lunar phase reaches
/// `target` degrees.
pub fn lunar_phase_after(moment: Moment, target: Degree) -> Moment {
    let estimate =
        moment + (MEAN_SYNODIC_MONTH / 360.0) * calc_degrees(target - lunar_phase(moment));
    let start = if moment > estimate - LUNAR_BRACKET_SLACK {
        estimate - LUNAR_BRACKET_SLACK
    } else {
        moment
    };
    let end = estimate + LUNAR_BRACKET_SLACK;
    bisect_target(start, end, target, lunar_phase)
}

/// Moment of a lunar phase event falling within a day window, if any.
///
/// Scans backwards from the end of the window one synodic-month stride at
/// a time until the phase event lands inside `[from, to]`.
pub fn moon_phase_in_window(from: DayNumber, to: DayNumber, phase: MoonPhase) -> Option<Moment> {
    let mut end = to;
    loop {
        let moon = lunar_phase_at_or_before(end as Moment + 1.0, phase.angle());
        let day = moon.floor() as i64;
        if (from..=to).contains(&day) {
            return Some(moon);
        }
        if end - 28 < from {
            return None;
        }
        end -= 28;
    }
}

/// Universal moment of a seasonal event (equinox or solstice) in a
/// Gregorian year.
pub fn season_start(year: i64, season: Season) -> Moment {
    let seed = day_number(year, season.month(), 15) as Moment;
    solar_longitude_after(seed, season.longitude())
}
