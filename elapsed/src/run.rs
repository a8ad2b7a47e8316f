use anyhow::Context as _;
use std::io::Write;

use elapsed_core::Duration;

use crate::cli::AmountArgs;
use crate::output;
use crate::run_error::RunError;

/// Converts the amounts to durations, rejecting any that do not fit in `i64` nanoseconds.
fn durations(args: &AmountArgs) -> Result<Vec<Duration>, RunError> {
    let limit = i64::MAX as f64;
    args.amounts
        .iter()
        .map(|&amount| {
            let nanos = amount * args.unit.nanos() as f64;
            if nanos >= limit || nanos < -limit {
                return Err(RunError::InvalidInput(anyhow::anyhow!(
                    "amount {amount}{} is out of range",
                    args.unit
                )));
            }
            Ok(Duration::from_unit(amount, args.unit))
        })
        .collect()
}

/// Writes every amount, formatted, in the requested output format.
pub fn format(args: &AmountArgs, out: &mut dyn Write) -> Result<(), RunError> {
    let fmt = output::formatter(args.output);
    for duration in durations(args)? {
        tracing::debug!(nanos = duration.nanoseconds(), "formatting duration");
        fmt.write_duration(out, duration)
            .map_err(RunError::RuntimeError)?;
    }
    Ok(())
}

/// Adds every amount and writes the formatted total.
pub fn sum(args: &AmountArgs, out: &mut dyn Write) -> Result<(), RunError> {
    let mut total = Duration::ZERO;
    for (amount, duration) in args.amounts.iter().zip(durations(args)?) {
        total
            .add(duration)
            .with_context(|| format!("adding {amount}{}", args.unit))
            .map_err(RunError::RuntimeError)?;
    }
    tracing::debug!(nanos = total.nanoseconds(), count = args.amounts.len(), "summed durations");

    output::formatter(args.output)
        .write_duration(out, total)
        .map_err(RunError::RuntimeError)
}
