use clap::Parser;
use seqreduce::cli::commands;
use seqreduce::cli::{Cli, Commands};
use seqreduce::io::{ExitCode, OutputFormat};
use seqreduce::{Settings, logging};

fn load_settings(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => {
            if !path.exists() {
                eprintln!("Warning: config file {} not found", path.display());
            }
            Settings::load_from(path)
        }
        None => Settings::load(),
    };

    loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration.");
        Settings::default()
    })
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = load_settings(&cli);
    logging::init_with_config(&settings.logging, settings.debug);

    if cli.info {
        let source = cli
            .config
            .clone()
            .or_else(|| {
                std::env::current_dir()
                    .ok()
                    .and_then(|dir| Settings::find_workspace_config(&dir))
            })
            .filter(|path| path.exists());
        match source {
            Some(path) => eprintln!("Loaded configuration from {}", path.display()),
            None => eprintln!("No configuration file found, using defaults"),
        }
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        settings.output.format
    };

    let code = match cli.command.operation(&settings) {
        Some(operation) => commands::reduce::run(operation, &settings, format),
        None => match cli.command {
            Commands::Init { force } => match std::env::current_dir() {
                Ok(root) => commands::init::run_init(&root, force),
                Err(e) => {
                    eprintln!("Error: cannot resolve current directory: {e}");
                    ExitCode::ConfigError
                }
            },
            _ => commands::init::run_config(&settings),
        },
    };

    code.into()
}
