//! Reduction commands: sum, factorial, reverse.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::config::Settings;
use crate::io::{ExitCode, OutputFormat, OutputManager};
use crate::reducer::{Operation, SequenceReader, SequenceReducer};

/// Run one reduction over stdin and report it on stdout.
pub fn run(operation: Operation, settings: &Settings, format: OutputFormat) -> ExitCode {
    let stdin = std::io::stdin();
    execute(
        operation,
        settings,
        stdin.lock(),
        &mut OutputManager::stdout(format),
    )
}

/// Same as [`run`] over arbitrary streams.
pub fn execute<R: BufRead, W: Write>(
    operation: Operation,
    settings: &Settings,
    input: R,
    output: &mut OutputManager<W>,
) -> ExitCode {
    let reducer = SequenceReducer::new(settings.reducer.clone());
    let mut reader = SequenceReader::new(input);

    let started = Instant::now();
    let result = reducer.run(operation, &mut reader);
    let elapsed = started.elapsed();

    match &result {
        Ok(_) => tracing::info!(
            target: "cli",
            operation = operation.name(),
            tokens = reader.position(),
            elapsed_us = elapsed.as_micros() as u64,
            "reduction completed"
        ),
        Err(e) => tracing::debug!(target: "cli", operation = operation.name(), "reduction failed: {e}"),
    }

    match output.report(operation.name(), &result, reader.position(), elapsed) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            ExitCode::IoError
        }
    }
}
