use clap::{Args, Parser, Subcommand};
use elapsed_core::Unit;

fn parse_unit(input: &str) -> Result<Unit, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("invalid unit '{input}' (expected one of ns, us, ms, s, min, h)"))
}

fn parse_amount(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("invalid amount '{input}' (expected a number, e.g. 1500 or 1.5)"))?;
    if !value.is_finite() {
        return Err(format!("amount '{input}' must be finite"));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Short approximate rendering, one per line.
    HumanReadable,
    /// Emit JSON lines (NDJSON) with the raw nanosecond count.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "elapsed",
    author,
    version,
    about = "Render durations the way a person would say them",
    after_help = "Examples:\n  elapsed format 1500\n  elapsed format 1.2 --unit min\n  elapsed format 250 999.6 --unit ms --output json\n  elapsed sum 1.5 0.25 --unit s"
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format each amount on its own line
    Format(AmountArgs),

    /// Add all amounts and format the total
    Sum(AmountArgs),
}

#[derive(Debug, Args)]
pub struct AmountArgs {
    /// Amounts expressed in --unit (fractions are truncated to whole nanoseconds)
    #[arg(required = true, allow_negative_numbers = true, value_parser = parse_amount)]
    pub amounts: Vec<f64>,

    /// Unit of the given amounts
    #[arg(
        short,
        long,
        env = "ELAPSED_UNIT",
        default_value = "ns",
        value_parser = parse_unit
    )]
    pub unit: Unit,

    /// Output format
    #[arg(
        short,
        long,
        env = "ELAPSED_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::HumanReadable
    )]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unit_accepts_suffixes_and_aliases() {
        assert_eq!(parse_unit("ns"), Ok(Unit::Nanos));
        assert_eq!(parse_unit("us"), Ok(Unit::Micros));
        assert_eq!(parse_unit(" min "), Ok(Unit::Minutes));
        assert_eq!(parse_unit("hours"), Ok(Unit::Hours));
        assert!(parse_unit("weeks").is_err());
    }

    #[test]
    fn parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("1.5"), Ok(1.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn cli_parses_format_with_unit_and_output() {
        let parsed = Cli::try_parse_from([
            "elapsed", "format", "1.2", "-1.5", "--unit", "min", "--output", "json",
        ]);

        let cli = match parsed {
            Ok(v) => v,
            Err(err) => panic!("failed to parse args: {err}"),
        };

        assert!(!cli.verbose);
        match cli.command {
            Command::Format(args) => {
                assert_eq!(args.amounts, vec![1.2, -1.5]);
                assert_eq!(args.unit, Unit::Minutes);
                assert_eq!(args.output, OutputFormat::Json);
            }
            Command::Sum(_) => panic!("expected format command"),
        }
    }

    #[test]
    fn cli_requires_at_least_one_amount() {
        assert!(Cli::try_parse_from(["elapsed", "sum"]).is_err());
    }
}
