use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wheelpick_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "wheelpick")]
#[command(author, version, about = "Pick one entry from a list with a terminal wheel picker")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Entries to pick from, as `label` or `label=value`
    items: Vec<String>,

    /// Read entries from a file, one per line (`-` for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Index to start on (overrides the config file)
    #[arg(short, long)]
    initial: Option<usize>,

    /// Use this config file instead of ~/.config/wheelpick/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore pointer drags; only the wheel and keys move the picker
    #[arg(long)]
    wheel_only: bool,

    /// Print the selected index instead of its value
    #[arg(long)]
    print_index: bool,

    /// Print every settled selection change while picking (stdout must be redirected)
    #[arg(long)]
    stream: bool,

    /// Title shown on the picker border
    #[arg(short, long)]
    title: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    // Handle commands
    match cli.command {
        Some(Commands::Config { action }) => {
            init_logging("warn", cli.log_file.as_deref(), false)?;
            match action {
                ConfigAction::Path => commands::config::path(&config_path),
                ConfigAction::Show => commands::config::show(&config_path),
                ConfigAction::Init { force } => commands::config::init(&config_path, force),
            }?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let config = match &cli.config {
                Some(path) => AppConfig::load_from(path),
                None => AppConfig::load(),
            }
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
            init_logging(&config.general.log_level, cli.log_file.as_deref(), true)?;

            let entries = commands::run::collect_entries(cli.items, cli.file.as_deref())?;
            let items = wheelpick_core::parse_items(entries)?;

            let options = commands::run::RunOptions {
                initial: cli.initial,
                wheel_only: cli.wheel_only,
                print_index: cli.print_index,
                stream: cli.stream,
                title: cli.title,
            };

            if commands::run::run(&config, items, options).await? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `level`. The interactive picker owns the terminal, so
/// without a log file it runs with logging disabled.
fn init_logging(level: &str, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !interactive {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
