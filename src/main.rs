// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use locator_harvest::utils::logging::{format_error, format_success, init_logger};
use locator_harvest::{Config, Harvester};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "locator_harvest")]
#[command(version = "0.1.0")]
#[command(about = "Locator extraction pipeline for Gauge-style .cpt test specifications", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest locators from every candidate file beneath a root directory
    Scan {
        /// Root of the test-specification project; prompted for when omitted
        root: Option<PathBuf>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    info!("Locator Harvest");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Scan { root, output } => {
            cmd_scan(config, root, output, cli.color)?;
        }
    }

    Ok(())
}

fn cmd_scan(
    mut config: Config,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    color: bool,
) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => prompt_for_root()?,
    };

    if let Some(output_dir) = output {
        config.report.output_dir = output_dir;
    }

    let harvester = Harvester::with_color(config, color);
    let stats = match harvester.run(&root) {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("{}", format_error(&format!("Locator extraction failed: {err}")));
            std::process::exit(1);
        }
    };

    println!(
        "{}",
        format_success(&format!(
            "Extracted {} unique locators from {} candidate files",
            stats.unique_locators, stats.files_matched
        ))
    );

    Ok(())
}

fn prompt_for_root() -> Result<PathBuf> {
    print!("Enter the root path of the test-specification project: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read root path from stdin")?;

    Ok(PathBuf::from(line.trim()))
}
