//! Fixed-scale conversions between nanosecond counts and larger units.
//!
//! Conversions to a unit are exact floating-point divisions. Conversions back
//! truncate toward zero, so a round trip may lose up to one nanosecond of the
//! source value.

pub const NANOS_PER_MICRO: i64 = 1_000;
pub const NANOS_PER_MILLI: i64 = 1_000_000;
pub const NANOS_PER_SEC: i64 = 1_000_000_000;
pub const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// Time unit with a fixed nanosecond scale.
///
/// The string form is the display suffix (`ns`, `μs`, `ms`, `s`, `min`, `h`);
/// a few ASCII and long-form aliases are accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Unit {
    #[strum(to_string = "ns", serialize = "nanos", serialize = "nanoseconds")]
    Nanos,

    #[strum(
        to_string = "μs",
        serialize = "us",
        serialize = "micros",
        serialize = "microseconds"
    )]
    Micros,

    #[strum(to_string = "ms", serialize = "millis", serialize = "milliseconds")]
    Millis,

    #[strum(to_string = "s", serialize = "sec", serialize = "seconds")]
    Seconds,

    #[strum(to_string = "min", serialize = "mins", serialize = "minutes")]
    Minutes,

    #[strum(to_string = "h", serialize = "hr", serialize = "hours")]
    Hours,
}

impl Unit {
    /// Number of nanoseconds in one of this unit.
    #[must_use]
    pub const fn nanos(self) -> i64 {
        match self {
            Self::Nanos => 1,
            Self::Micros => NANOS_PER_MICRO,
            Self::Millis => NANOS_PER_MILLI,
            Self::Seconds => NANOS_PER_SEC,
            Self::Minutes => NANOS_PER_MIN,
            Self::Hours => NANOS_PER_HOUR,
        }
    }

    /// The next larger unit, if any.
    #[must_use]
    pub const fn next(self) -> Option<Unit> {
        match self {
            Self::Nanos => Some(Self::Micros),
            Self::Micros => Some(Self::Millis),
            Self::Millis => Some(Self::Seconds),
            Self::Seconds => Some(Self::Minutes),
            Self::Minutes => Some(Self::Hours),
            Self::Hours => None,
        }
    }
}

/// Converts a nanosecond count into `unit` without rounding.
#[must_use]
pub fn to_unit(nanos: i64, unit: Unit) -> f64 {
    nanos as f64 / unit.nanos() as f64
}

/// Converts a value in `unit` into nanoseconds, truncating toward zero.
///
/// Products outside the `i64` range saturate and NaN maps to zero.
#[must_use]
pub fn from_unit(value: f64, unit: Unit) -> i64 {
    (value * unit.nanos() as f64) as i64
}

/// Number of whole `unit`s in `nanos`, rounded toward negative infinity.
#[must_use]
pub fn count_unit(nanos: i64, unit: Unit) -> i64 {
    if unit == Unit::Nanos {
        return nanos;
    }
    to_unit(nanos, unit).floor() as i64
}
