//! Error types for sequence reduction.

use thiserror::Error;

use crate::io::{ExitCode, ResultCode};

/// Errors from reading, validating or reducing an input sequence.
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("Invalid input: expected an integer at position {position}, found '{token}'")]
    InvalidToken { token: String, position: usize },

    #[error("Invalid input: input ended after {read} of {expected} integers")]
    UnexpectedEnd { expected: usize, read: usize },

    #[error("Input must contain exactly {expected} integers")]
    WrongLength { expected: usize, actual: usize },

    #[error("Count {count} is out of range (expected 0..={max})")]
    CountOutOfRange { count: i64, max: usize },

    #[error("Input contains more than {limit} integers")]
    TooManyValues { limit: usize },

    #[error("Factorial is not defined for negative numbers.")]
    NegativeFactorial { n: i64 },

    #[error("Factorial of {n} does not fit in a 128-bit integer")]
    FactorialOverflow { n: i64 },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`ReduceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token could not be read as an integer.
    Parse,
    /// The input has the wrong shape for the operation.
    Validation,
    /// A mathematical precondition does not hold.
    Domain,
    /// The input stream itself failed.
    Io,
}

impl ReduceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } | Self::UnexpectedEnd { .. } => ErrorKind::Parse,
            Self::WrongLength { .. } | Self::CountOutOfRange { .. } | Self::TooManyValues { .. } => {
                ErrorKind::Validation
            }
            Self::NegativeFactorial { .. } | Self::FactorialOverflow { .. } => ErrorKind::Domain,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Io => ExitCode::IoError,
            _ => ExitCode::InvalidInput,
        }
    }

    /// Machine-readable code used in the JSON envelope.
    pub fn result_code(&self) -> ResultCode {
        match self.kind() {
            ErrorKind::Parse => ResultCode::ParseError,
            ErrorKind::Validation => ResultCode::ValidationError,
            ErrorKind::Domain => ResultCode::DomainError,
            ErrorKind::Io => ResultCode::IoError,
        }
    }
}

pub type ReduceResult<T> = Result<T, ReduceError>;
