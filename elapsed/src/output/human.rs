use std::io::Write;

use elapsed_core::Duration;

use super::OutputFormatter;

pub(crate) struct HumanReadableOutput;

impl OutputFormatter for HumanReadableOutput {
    fn write_duration(&self, out: &mut dyn Write, duration: Duration) -> anyhow::Result<()> {
        writeln!(out, "{duration}")?;
        Ok(())
    }
}
