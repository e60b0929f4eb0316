//! Observer locations and time-zone resolution.
//!
//! A [`Location`] bundles the geographic parameters every rise/set search
//! needs: latitude, longitude, elevation and a time-zone specification.
//! Calendar layers pass locations in as configuration; nothing in the
//! engine hard-codes a place.
//!
//! Resolving a symbolic zone name to a UTC offset is the only ambient
//! (wall-clock dependent) effect in the crate, so it lives behind the
//! [`ZoneResolver`] trait; everything else stays pure and independently
//! testable.

use chrono::{Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::angle::{angle, arccos_degrees};
use crate::constants::{Degree, Meter, ZoneHours, VISIBLE_HORIZON};
use crate::errors::SyzygyError;

/// Time-zone specification attached to a [`Location`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoneSpec {
    /// A fixed UTC offset in hours east of Greenwich.
    FixedHours(f64),
    /// An IANA zone name such as `"America/Los_Angeles"`, resolved to an
    /// offset at evaluation time.
    Named(String),
}

/// Resolve a [`ZoneSpec`] to a UTC offset in hours.
///
/// Named zones are resolved against the **current** instant; call sites
/// that need historical offsets must supply their own resolver.
pub trait ZoneResolver {
    fn resolve(&self, zone: &ZoneSpec) -> Result<ZoneHours, SyzygyError>;
}

/// System resolver backed by the IANA database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemZones;

impl ZoneResolver for SystemZones {
    fn resolve(&self, zone: &ZoneSpec) -> Result<ZoneHours, SyzygyError> {
        match zone {
            ZoneSpec::FixedHours(hours) => Ok(*hours),
            ZoneSpec::Named(name) => {
                let tz: chrono_tz::Tz = name
                    .parse()
                    .map_err(|_| SyzygyError::UnknownTimeZone(name.clone()))?;
                let now = Utc::now().naive_utc();
                let offset = tz.offset_from_utc_datetime(&now).fix();
                Ok(offset.local_minus_utc() as f64 / 3600.0)
            }
        }
    }
}

/// Geographic location of an observer.
///
/// Built through [`Location::new`], which validates the latitude, wraps the
/// longitude into `(-180, 180]` and clamps the elevation to sea level or
/// above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    latitude: Degree,
    longitude: Degree,
    elevation: Meter,
    zone: ZoneSpec,
}

impl Location {
    /// Create a validated location.
    ///
    /// Arguments
    /// ---------
    /// * `latitude`: degrees, positive north; must be within `[-90, 90]`.
    /// * `longitude`: degrees, positive east; any finite value is accepted
    ///   and wrapped into `(-180, 180]`.
    /// * `elevation`: meters above sea level; negative values are clamped
    ///   to zero.
    /// * `zone`: fixed offset or IANA zone name.
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        elevation: Meter,
        zone: ZoneSpec,
    ) -> Result<Location, SyzygyError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SyzygyError::InvalidLatitude(latitude));
        }
        let mut longitude = longitude.rem_euclid(360.0);
        if longitude > 180.0 {
            longitude -= 360.0;
        }
        Ok(Location {
            latitude,
            longitude,
            elevation: elevation.max(0.0),
            zone,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn elevation(&self) -> Meter {
        self.elevation
    }

    pub fn zone(&self) -> &ZoneSpec {
        &self.zone
    }

    /// UTC offset of this location's zone, in hours.
    pub fn zone_offset(&self, resolver: &dyn ZoneResolver) -> Result<ZoneHours, SyzygyError> {
        resolver.resolve(&self.zone)
    }
}

/// Earth radius at a given latitude, in meters.
///
/// Interpolates between the equatorial radius (6378136.6 m) and the polar
/// radius (6356752.314245 m). The latitude is folded into `[0, 90)` first,
/// so any input is safe.
pub fn earth_radius(latitude: Degree) -> Meter {
    const POLAR: f64 = 6_356_752.314_245;
    const EQUATORIAL: f64 = 6_378_136.6;

    let lat_sq = latitude.abs().rem_euclid(90.0).to_radians().powi(2);
    POLAR * (1.0 + lat_sq).sqrt() / ((POLAR.powi(2) / EQUATORIAL.powi(2)) + lat_sq).sqrt()
}

/// General atmospheric refraction of light at the horizon, adjusted for
/// the observer's elevation, in degrees.
///
/// Combines the visible-horizon constant (solar half diameter plus mean
/// refraction) with the horizon dip seen from `elevation` meters above
/// the surface.
pub fn solar_refraction(elevation: Meter, latitude: Degree) -> Degree {
    let radius = earth_radius(latitude);
    let (adjusted, sqrt_elevation) = if elevation > 0.0 {
        (elevation, elevation.sqrt())
    } else {
        (0.0, 0.0)
    };
    VISIBLE_HORIZON
        + arccos_degrees(radius / (radius + adjusted))
        + angle(0.0, 0.0, 19.0) * sqrt_elevation
}
