//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Output formatting (text, JSON envelope)
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod output;

pub use envelope::{Envelope, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use output::{OutputFormat, OutputManager};
