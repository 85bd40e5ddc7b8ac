//! Validated reductions over integer sequences.
//!
//! One invocation reads a fixed input shape from a stream, validates it and
//! produces a single [`Reduction`]:
//!
//! | Operation | Input shape | Result |
//! |-----------|-------------|--------|
//! | `Sum { fixed: None }` | count N, then N integers | sum |
//! | `Sum { fixed: Some(k) }` | exactly k integers | sum |
//! | `Factorial` | one integer n | n! |
//! | `Reverse { length }` | exactly `length` integers | reversed sequence |
//!
//! Every invocation walks [`Phase::AwaitingInput`] through
//! [`Phase::Reporting`]; a failure at any phase ends it with a [`ReduceError`].

pub mod error;
pub mod ops;
pub mod reader;
pub mod sequence;

pub use error::{ErrorKind, ReduceError, ReduceResult};
pub use ops::{MAX_FACTORIAL_INPUT, check_length, factorial, reverse, sum};
pub use reader::SequenceReader;
pub use sequence::{InputSequence, Reduction};

use std::fmt;
use std::io::BufRead;

use crate::config::ReducerConfig;
use crate::debug_event;

/// Which reduction an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sum a counted sequence, or exactly `fixed` values when set.
    Sum { fixed: Option<usize> },
    Factorial,
    /// Reverse exactly `length` values.
    Reverse { length: usize },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum { .. } => "sum",
            Self::Factorial => "factorial",
            Self::Reverse { .. } => "reverse",
        }
    }
}

/// Invocation phases, always visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Validating,
    Computing,
    Reporting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingInput => "awaiting-input",
            Self::Validating => "validating",
            Self::Computing => "computing",
            Self::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

/// Raw operands gathered during [`Phase::AwaitingInput`].
enum Operands {
    Factorial(i64),
    Sum(InputSequence, Option<usize>),
    Reverse(InputSequence, usize),
}

/// Runs one reduction per call against a configured input policy.
#[derive(Debug, Clone)]
pub struct SequenceReducer {
    config: ReducerConfig,
}

impl SequenceReducer {
    pub fn new(config: ReducerConfig) -> Self {
        Self { config }
    }

    /// Read, validate and reduce one input stream.
    ///
    /// Stops at the first failure; no partial result is produced. The
    /// [`Phase::Reporting`] event is emitted for both outcomes, and
    /// `reader.position()` afterwards is the number of tokens consumed.
    pub fn run<R: BufRead>(
        &self,
        operation: Operation,
        reader: &mut SequenceReader<R>,
    ) -> ReduceResult<Reduction> {
        let result = self.execute(operation, reader);
        match &result {
            Ok(reduction) => {
                debug_event!("reducer", Phase::Reporting, "{}", reduction.operation_name())
            }
            Err(e) => debug_event!("reducer", Phase::Reporting, "failed: {e}"),
        }
        result
    }

    fn execute<R: BufRead>(
        &self,
        operation: Operation,
        reader: &mut SequenceReader<R>,
    ) -> ReduceResult<Reduction> {
        debug_event!("reducer", Phase::AwaitingInput, "{}", operation.name());
        let operands = match operation {
            Operation::Factorial => Operands::Factorial(reader.read_value()?),
            Operation::Sum { fixed: None } => {
                let count = reader.read_count(self.config.max_count)?;
                Operands::Sum(reader.read_sequence(count)?, None)
            }
            Operation::Sum { fixed: Some(k) } => {
                Operands::Sum(self.read_exactly(reader, k)?, Some(k))
            }
            Operation::Reverse { length } => {
                Operands::Reverse(self.read_exactly(reader, length)?, length)
            }
        };
        tracing::debug!(target: "reducer", tokens = reader.position(), "input read");

        debug_event!("reducer", Phase::Validating);
        if let Operands::Sum(seq, Some(k)) = &operands {
            check_length(seq, *k)?;
        }

        debug_event!("reducer", Phase::Computing);
        match operands {
            Operands::Factorial(n) => factorial(n),
            Operands::Sum(seq, _) => Ok(sum(&seq)),
            Operands::Reverse(seq, length) => reverse(&seq, length),
        }
    }

    /// Read to end of input for an operation expecting exactly `k` values.
    ///
    /// Reading stops at value `k + 1`, which is reported as a length mismatch.
    fn read_exactly<R: BufRead>(
        &self,
        reader: &mut SequenceReader<R>,
        k: usize,
    ) -> ReduceResult<InputSequence> {
        let limit = k.min(self.config.max_count);
        match reader.read_to_end(limit) {
            Err(ReduceError::TooManyValues { .. }) if limit == k => Err(ReduceError::WrongLength {
                expected: k,
                actual: k + 1,
            }),
            other => other,
        }
    }
}

impl Default for SequenceReducer {
    fn default() -> Self {
        Self::new(ReducerConfig::default())
    }
}
