use thiserror::Error;

/// Errors raised at the boundaries of the engine.
///
/// Non-occurrence of an event (no sunrise at a pole in winter, no moonrise
/// on a given civil day) is **not** an error: it is signaled through
/// `Option`/empty result lists by the search routines themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyzygyError {
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),

    #[error("unknown IANA time zone: {0}")]
    UnknownTimeZone(String),

    #[error("moment {0} cannot be represented as a civil date-time")]
    MomentOutOfRange(f64),
}
