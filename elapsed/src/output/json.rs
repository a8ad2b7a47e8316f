use serde::Serialize;
use std::io::Write;

use elapsed_core::Duration;

use super::OutputFormatter;

pub(crate) struct JsonOutput;

#[derive(Debug, Serialize)]
pub(crate) struct JsonDurationLine {
    pub nanos: Duration,
    pub formatted: String,
}

impl OutputFormatter for JsonOutput {
    fn write_duration(&self, out: &mut dyn Write, duration: Duration) -> anyhow::Result<()> {
        let line = JsonDurationLine {
            nanos: duration,
            formatted: duration.format(),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
        Ok(())
    }
}
