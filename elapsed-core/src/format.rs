//! Approximate human-readable rendering of nanosecond counts.
//!
//! The output uses the largest unit whose value exceeds its tier threshold,
//! with precision dropping as magnitude grows:
//!
//! | magnitude           | output                         |
//! |---------------------|--------------------------------|
//! | hours > 1           | `2h`, `1h 12min`               |
//! | minutes > 1         | `3min`, `1min 12s`             |
//! | seconds > 10        | `42s`                          |
//! | seconds > 1         | `1.5s`                         |
//! | milliseconds > 10   | `15ms`                         |
//! | milliseconds > 1    | `1.5ms`                        |
//! | microseconds > 10   | `15μs`                         |
//! | microseconds > 1    | `1.5μs`                        |
//! | otherwise           | `500ns`                        |
//!
//! Whenever rounding reaches the boundary of the next unit the value is
//! promoted, so `59.6s` renders as `1min` and never as `60s`.

use crate::round::{round_to_decimal, round_to_int};
use crate::units::{NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MIN, Unit};

/// Formats a signed nanosecond count.
///
/// Negative values render as `-` followed by their magnitude.
#[must_use]
pub fn format_nanos(nanos: i64) -> String {
    let body = format_magnitude(nanos.unsigned_abs());
    if nanos < 0 { format!("-{body}") } else { body }
}

fn in_unit(nanos: u64, unit: Unit) -> f64 {
    nanos as f64 / unit.nanos() as f64
}

fn carried(nanos: u64, from: Unit, out: String) -> String {
    tracing::trace!(nanos, from = %from, to = out.as_str(), "rounding carried into the next unit");
    out
}

fn format_magnitude(nanos: u64) -> String {
    if in_unit(nanos, Unit::Hours) > 1.0 {
        return hours_and_minutes(nanos);
    }
    if in_unit(nanos, Unit::Minutes) > 1.0 {
        return minutes_and_seconds(nanos);
    }

    let seconds = in_unit(nanos, Unit::Seconds);
    if seconds > 10.0 {
        let whole = round_to_int(seconds);
        if whole == 60 {
            return carried(nanos, Unit::Seconds, "1min".to_string());
        }
        return format!("{whole}s");
    }
    if seconds > 1.0 {
        return format!("{:.1}s", round_to_decimal(seconds, 1));
    }

    let millis = in_unit(nanos, Unit::Millis);
    if millis > 10.0 {
        let whole = round_to_int(millis);
        if whole == 1000 {
            return carried(nanos, Unit::Millis, "1s".to_string());
        }
        return format!("{whole}ms");
    }
    if millis > 1.0 {
        return format!("{:.1}ms", round_to_decimal(millis, 1));
    }

    let micros = in_unit(nanos, Unit::Micros);
    if micros > 10.0 {
        let whole = round_to_int(micros);
        if whole == 1000 {
            return carried(nanos, Unit::Micros, "1ms".to_string());
        }
        return format!("{whole}μs");
    }
    if micros > 1.0 {
        return format!("{:.1}μs", round_to_decimal(micros, 1));
    }

    // Exactly one microsecond fails the `> 1` test above.
    if nanos == NANOS_PER_MICRO as u64 {
        return carried(nanos, Unit::Nanos, "1μs".to_string());
    }
    format!("{nanos}ns")
}

fn hours_and_minutes(nanos: u64) -> String {
    let hours = nanos / NANOS_PER_HOUR as u64;
    let rest = nanos % NANOS_PER_HOUR as u64;
    match round_to_int(in_unit(rest, Unit::Minutes)) {
        60 => carried(nanos, Unit::Minutes, format!("{}h", hours + 1)),
        0 => format!("{hours}h"),
        minutes => format!("{hours}h {minutes}min"),
    }
}

fn minutes_and_seconds(nanos: u64) -> String {
    let mut minutes = nanos / NANOS_PER_MIN as u64;
    let mut seconds = round_to_int(in_unit(nanos % NANOS_PER_MIN as u64, Unit::Seconds));
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    // An exact hour fails the `hours > 1` test and lands here as 60min.
    if minutes == 60 {
        return carried(nanos, Unit::Minutes, "1h".to_string());
    }
    if seconds == 0 {
        format!("{minutes}min")
    } else {
        format!("{minutes}min {seconds}s")
    }
}
