use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use unix_groups::config::{Config, OutputFormat};
use unix_groups::{host, logging, render, Collector, UserGroupsCollector};

#[derive(Parser)]
#[command(name = "unix-groups")]
#[command(about = "Collects group and group member information from /etc/group")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./unix-groups.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the collector and print both tables (default)
    Collect,
    /// Print the table schemas registered by the collector
    Tables,
    /// Print collector metadata
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let guard = logging::init_logging(&config.logging);
    debug!(?config, "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let collector = UserGroupsCollector::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut failed = false;
    match cli.command.unwrap_or(Commands::Collect) {
        Commands::Collect => {
            let messages = host::run_collector(&collector);
            render::write_messages(&mut out, &messages, format)
                .context("Failed to write collected tables")?;
            failed = messages.iter().any(host::Message::is_error);
        }
        Commands::Tables => {
            render::write_schemas(&mut out, collector.tables(), format)
                .context("Failed to write table schemas")?;
        }
        Commands::Info => {
            render::write_info(&mut out, &host::describe(&collector), format)
                .context("Failed to write collector info")?;
        }
    }
    out.flush()?;

    // Flush file logs before a non-zero exit skips destructors
    drop(guard);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
