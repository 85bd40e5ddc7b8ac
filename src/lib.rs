pub mod cli;
pub mod config;
pub mod io;
pub mod logging;
pub mod reducer;

pub use config::Settings;
pub use io::{ExitCode, OutputFormat};
pub use reducer::{InputSequence, Operation, ReduceError, Reduction, SequenceReducer};
