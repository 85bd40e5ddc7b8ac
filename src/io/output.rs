//! Rendering of reduction outcomes to a writer.

use std::io::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Envelope, ExitCode};
use crate::reducer::{ReduceResult, Reduction};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain line: the value or the error message
    #[default]
    Text,
    /// One pretty-printed [`Envelope`]
    Json,
}

/// Writes exactly one report per invocation.
pub struct OutputManager<W: Write> {
    format: OutputFormat,
    writer: W,
}

impl OutputManager<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, std::io::stdout())
    }
}

impl<W: Write> OutputManager<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self { format, writer }
    }

    /// Report the outcome of `operation` and return the exit code it maps to.
    ///
    /// Failures are written to the same channel as results. `consumed` is the
    /// number of input tokens read, recorded in the envelope's `meta.count`.
    pub fn report(
        &mut self,
        operation: &str,
        result: &ReduceResult<Reduction>,
        consumed: usize,
        elapsed: Duration,
    ) -> std::io::Result<ExitCode> {
        let exit_code = match result {
            Ok(_) => ExitCode::Success,
            Err(e) => e.exit_code(),
        };

        match self.format {
            OutputFormat::Text => match result {
                Ok(reduction) => writeln!(self.writer, "{reduction}")?,
                Err(e) => writeln!(self.writer, "{e}")?,
            },
            OutputFormat::Json => {
                let envelope = match result {
                    Ok(reduction) => Envelope::success(reduction),
                    Err(e) => Envelope::error(e.result_code(), exit_code, e.to_string()),
                }
                .with_operation(operation)
                .with_count(consumed)
                .with_duration_ms(elapsed.as_millis() as u64);

                let json = envelope.to_json().map_err(std::io::Error::other)?;
                writeln!(self.writer, "{json}")?;
            }
        }
        self.writer.flush()?;

        Ok(exit_code)
    }
}
