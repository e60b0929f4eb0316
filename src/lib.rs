//! Solar and lunar ephemeris with event searches for calendar arithmetic.
//!
//! `syzygy` computes positions of the Sun and Moon from truncated
//! trigonometric series and locates astronomical events — equinoxes,
//! solstices, lunar phases, sunrise/sunset, moonrise/moonset and twilight
//! boundaries — to sub-minute precision. It is the shared engine beneath
//! solar, lunar and lunisolar calendar converters: every calendar layer
//! reduces its month and year boundaries to the angle-target and
//! horizon-crossing searches exposed here.
//!
//! Times are [`Moment`](constants::Moment) values: day counts since the
//! Rata Die epoch with the fraction carrying the time of day. Positions
//! are fairly precise within about two thousand years of the present;
//! outside that window the error grows with the distance from it.
//!
//! All computation is pure and synchronous. The single ambient dependency
//! — resolving an IANA zone name to a UTC offset — is isolated behind
//! [`location::ZoneResolver`].

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod lunar;
pub mod moment;
pub mod riseset;
pub mod search;
pub mod solar;
pub mod time;

pub use errors::SyzygyError;
pub use location::{Location, SystemZones, ZoneResolver, ZoneSpec};
pub use lunar::MoonPhase;
pub use riseset::AltitudeMode;
pub use solar::Season;
