//! Process exit codes.

/// Exit status reported by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Unparseable token, wrong length or count, or a domain violation
    InvalidInput = 1,
    /// stdin could not be read
    IoError = 2,
    /// Settings file could not be written
    ConfigError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
