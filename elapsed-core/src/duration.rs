use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::format_nanos;
use crate::units::{self, Unit};

/// An elapsed span of time stored as a signed nanosecond count.
///
/// Values are expected to be non-negative, but nothing enforces it; negative
/// values convert and format with their sign.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0 };

    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Builds a duration from a value in `unit`, truncating toward zero.
    #[must_use]
    pub fn from_unit(value: f64, unit: Unit) -> Self {
        Self::from_nanos(units::from_unit(value, unit))
    }

    #[must_use]
    pub fn from_micros(value: f64) -> Self {
        Self::from_unit(value, Unit::Micros)
    }

    #[must_use]
    pub fn from_millis(value: f64) -> Self {
        Self::from_unit(value, Unit::Millis)
    }

    #[must_use]
    pub fn from_seconds(value: f64) -> Self {
        Self::from_unit(value, Unit::Seconds)
    }

    #[must_use]
    pub fn from_minutes(value: f64) -> Self {
        Self::from_unit(value, Unit::Minutes)
    }

    #[must_use]
    pub fn from_hours(value: f64) -> Self {
        Self::from_unit(value, Unit::Hours)
    }

    #[must_use]
    pub const fn nanoseconds(self) -> i64 {
        self.nanos
    }

    #[must_use]
    pub fn to_unit(self, unit: Unit) -> f64 {
        units::to_unit(self.nanos, unit)
    }

    #[must_use]
    pub fn to_micros(self) -> f64 {
        self.to_unit(Unit::Micros)
    }

    #[must_use]
    pub fn to_millis(self) -> f64 {
        self.to_unit(Unit::Millis)
    }

    #[must_use]
    pub fn to_seconds(self) -> f64 {
        self.to_unit(Unit::Seconds)
    }

    #[must_use]
    pub fn to_minutes(self) -> f64 {
        self.to_unit(Unit::Minutes)
    }

    #[must_use]
    pub fn to_hours(self) -> f64 {
        self.to_unit(Unit::Hours)
    }

    /// Whole `unit`s contained in this duration, floored.
    #[must_use]
    pub fn whole(self, unit: Unit) -> i64 {
        units::count_unit(self.nanos, unit)
    }

    #[must_use]
    pub fn whole_micros(self) -> i64 {
        self.whole(Unit::Micros)
    }

    #[must_use]
    pub fn whole_millis(self) -> i64 {
        self.whole(Unit::Millis)
    }

    #[must_use]
    pub fn whole_seconds(self) -> i64 {
        self.whole(Unit::Seconds)
    }

    #[must_use]
    pub fn whole_minutes(self) -> i64 {
        self.whole(Unit::Minutes)
    }

    #[must_use]
    pub fn whole_hours(self) -> i64 {
        self.whole(Unit::Hours)
    }

    #[must_use]
    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        self.nanos.checked_add(other.nanos).map(Self::from_nanos)
    }

    /// Accumulates `other` into `self`.
    ///
    /// On overflow `self` is left unchanged and [`Error::Overflow`] is returned.
    pub fn add(&mut self, other: Duration) -> Result<()> {
        match self.checked_add(other) {
            Some(sum) => {
                *self = sum;
                Ok(())
            }
            None => {
                tracing::debug!(lhs = self.nanos, rhs = other.nanos, "duration add overflowed");
                Err(Error::Overflow {
                    lhs: self.nanos,
                    rhs: other.nanos,
                })
            }
        }
    }

    /// Short approximate rendering, e.g. `1.5ms` or `1h 12min`.
    #[must_use]
    pub fn format(self) -> String {
        format_nanos(self.nanos)
    }
}

impl From<i64> for Duration {
    fn from(nanos: i64) -> Self {
        Self::from_nanos(nanos)
    }
}

impl From<Duration> for i64 {
    fn from(d: Duration) -> Self {
        d.nanos
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = Error;

    fn try_from(d: std::time::Duration) -> Result<Self> {
        let nanos = d.as_nanos();
        i64::try_from(nanos)
            .map(Self::from_nanos)
            .map_err(|_| Error::OutOfRange(nanos))
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<Self> {
        u64::try_from(d.nanos)
            .map(std::time::Duration::from_nanos)
            .map_err(|_| Error::Negative(d.nanos))
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}
