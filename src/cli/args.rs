//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::config::Settings;
use crate::reducer::Operation;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Validated reductions over integers read from stdin
#[derive(Parser)]
#[command(
    name = "seqreduce",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum, factorial or reverse integers read from stdin",
    long_about = "Reads whitespace-separated integers from stdin, validates them and prints one result line.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  echo 5 | seqreduce factorial\n  echo '4 1 2 3 4' | seqreduce sum\n  echo '3 4' | seqreduce sum --fixed 2\n  echo '7 2 9' | seqreduce reverse\n  echo '7 2 9' | seqreduce --json reverse"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON envelope instead of a plain line (overrides output.format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Show detailed loading information
    #[arg(long, global = true)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sum integers
    #[command(
        about = "Sum a count N followed by N integers",
        after_help = "Without --fixed the first integer is the count of values that follow.\nWith --fixed K there is no count; input must hold exactly K integers."
    )]
    Sum {
        /// Expect exactly this many integers and no leading count
        #[arg(long, value_name = "K")]
        fixed: Option<usize>,
    },

    /// Factorial of one integer
    #[command(about = "Print n! for a single non-negative integer n")]
    Factorial,

    /// Reverse a fixed number of integers
    #[command(about = "Print exactly K integers in reverse order")]
    Reverse {
        /// Number of integers expected (overrides reducer.reversal_length)
        #[arg(short, long, value_name = "K")]
        length: Option<usize>,
    },

    /// Initialize project
    #[command(about = "Set up .seqreduce directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Commands {
    /// The reduction this command runs, with CLI overrides applied over `settings`.
    pub fn operation(&self, settings: &Settings) -> Option<Operation> {
        match self {
            Commands::Sum { fixed } => Some(Operation::Sum { fixed: *fixed }),
            Commands::Factorial => Some(Operation::Factorial),
            Commands::Reverse { length } => Some(Operation::Reverse {
                length: length.unwrap_or(settings.reducer.reversal_length),
            }),
            Commands::Init { .. } | Commands::Config => None,
        }
    }
}
