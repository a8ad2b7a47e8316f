use std::str::FromStr;

use elapsed_core::{Duration, NANOS_PER_HOUR, Unit, format_nanos, round::round_to_decimal};
use proptest::prelude::*;
use strum::IntoEnumIterator;

/// Reads a formatted value back as an approximate nanosecond count.
fn approx_nanos(formatted: &str) -> f64 {
    let (sign, body) = match formatted.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, formatted),
    };

    let total: f64 = body
        .split(' ')
        .map(|part| {
            let split = part
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(part.len());
            let (number, suffix) = part.split_at(split);
            let value = f64::from_str(number).unwrap_or(f64::NAN);
            let unit = Unit::from_str(suffix).unwrap_or(Unit::Nanos);
            value * unit.nanos() as f64
        })
        .sum();

    sign * total
}

const DAY: i64 = 24 * NANOS_PER_HOUR;

#[test]
fn documented_scenarios() {
    let cases = [
        (Duration::from_nanos(500), "500ns"),
        (Duration::from_nanos(1_500), "1.5μs"),
        (Duration::from_nanos(15_000), "15μs"),
        (Duration::from_nanos(1_500_000), "1.5ms"),
        (Duration::from_nanos(15_000_000), "15ms"),
        (Duration::from_nanos(1_500_000_000), "1.5s"),
        (Duration::from_minutes(1.2), "1min 12s"),
        (Duration::from_hours(1.2), "1h 12min"),
        (Duration::from_seconds(59.6), "1min"),
        (Duration::from_millis(999.6), "1s"),
        (Duration::from_micros(999.6), "1ms"),
    ];

    for (d, want) in cases {
        assert_eq!(d.format(), want, "nanos={}", d.nanoseconds());
        assert_eq!(d.to_string(), want);
    }
}

#[test]
fn never_renders_a_full_unit_as_a_remainder() {
    let mut n = 0i64;
    while n < 3 * NANOS_PER_HOUR {
        let out = format_nanos(n);
        assert!(!out.contains(" 60"), "{n} -> {out}");
        assert!(!out.contains("60s"), "{n} -> {out}");
        assert!(!out.contains("1000"), "{n} -> {out}");
        n += 99_999_937;
    }
}

proptest! {
    #[test]
    fn output_is_close_to_input(n in 0i64..(30 * DAY)) {
        let out = format_nanos(n);
        let approx = approx_nanos(&out);
        let tolerance = n as f64 * 0.05 + 1.0;
        prop_assert!((approx - n as f64).abs() <= tolerance, "{n} -> {out} ({approx})");
    }

    #[test]
    fn output_is_monotonic(a in 0i64..(3 * DAY), delta in 0i64..(2 * NANOS_PER_HOUR)) {
        let b = a + delta;
        let (lo, hi) = (approx_nanos(&format_nanos(a)), approx_nanos(&format_nanos(b)));
        prop_assert!(lo <= hi * (1.0 + 1e-12), "{a} -> {lo}, {b} -> {hi}");
    }

    #[test]
    fn negative_output_mirrors_positive(n in 1i64..i64::MAX) {
        prop_assert_eq!(format_nanos(-n), format!("-{}", format_nanos(n)));
    }

    #[test]
    fn unit_round_trip_loses_at_most_one_unit(n in 0i64..(1i64 << 52)) {
        for unit in Unit::iter() {
            let back = Duration::from_unit(Duration::from_nanos(n).to_unit(unit), unit);
            prop_assert!(
                (back.nanoseconds() - n).abs() <= unit.nanos(),
                "{unit}: {n} -> {}", back.nanoseconds()
            );
        }
    }

    #[test]
    fn round_to_decimal_is_idempotent(x in -1e6f64..1e6, digits in 0i32..4) {
        let once = round_to_decimal(x, digits);
        prop_assert_eq!(round_to_decimal(once, digits), once);
    }
}
