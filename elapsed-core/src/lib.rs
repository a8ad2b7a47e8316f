pub mod duration;
pub mod error;
pub mod format;
pub mod round;
pub mod units;

pub use duration::Duration;
pub use error::{Error, Result};
pub use format::format_nanos;
pub use units::{
    NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MIN, NANOS_PER_SEC, Unit,
};
