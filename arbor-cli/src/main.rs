use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arbor_config::domains::logging::{LogFormat, LoggingConfig};
use arbor_config::{ArborConfig, ConfigLoader};
use arbor_registry::TaskRegistry;

mod cli;
use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Categories => {
            let registry = scanned_registry(&cli)?;
            for category in registry.categories() {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Tasks { category } => {
            let registry = scanned_registry(&cli)?;
            for task in registry.tasks_in_category(category) {
                println!("{}", task);
            }
            Ok(())
        }
        Commands::Catalog => {
            let registry = scanned_registry(&cli)?;
            for category in registry.categories() {
                println!("{}:", category);
                for task in registry.tasks_in_category(&category) {
                    println!("  {}", task);
                }
            }
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Generate => {
                print!("{}", ArborConfig::generate_sample());
                Ok(())
            }
            ConfigCommands::Validate => {
                load_config(&cli)?;
                println!("Configuration is valid");
                Ok(())
            }
        },
    }
}

/// Load configuration, set up logging, and run a scan.
fn scanned_registry(cli: &Cli) -> Result<TaskRegistry> {
    let config = load_config(cli)?;
    init_logging(cli.log_level.as_deref(), &config.logging);

    info!(
        "Scanning {} configured task directories",
        config.registry.task_directories.len()
    );
    let mut registry = TaskRegistry::new(config.registry);
    registry.scan();
    Ok(registry)
}

fn load_config(cli: &Cli) -> Result<ArborConfig> {
    ConfigLoader::new()
        .load(cli.config.as_ref())
        .context("Failed to load configuration")
}

/// Logging setup: an explicit --log-level wins, then the ARBOR_LOG
/// environment filter, then the configured level.
fn init_logging(cli_level: Option<&str>, config: &LoggingConfig) {
    let env_filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', defaulting to info", level);
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_env("ARBOR_LOG")
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str())),
    };

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match config.format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
}
