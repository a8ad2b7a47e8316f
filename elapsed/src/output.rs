use std::io::Write;

use elapsed_core::Duration;

use crate::cli::OutputFormat;

mod human;
mod json;

pub(crate) trait OutputFormatter {
    fn write_duration(&self, out: &mut dyn Write, duration: Duration) -> anyhow::Result<()>;
}

pub(crate) fn formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::HumanReadable => Box::new(human::HumanReadableOutput),
        OutputFormat::Json => Box::new(json::JsonOutput),
    }
}
