use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finbrief::cli::{
    handle_config_command, handle_init_command, handle_preview_command, handle_send_command,
    OutputFormat,
};
use finbrief::config::{paths::BriefPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "finbrief",
    version,
    about = "Emailed financial recaps from a SimpleFIN feed",
    long_about = "finbrief fetches account and transaction data from a SimpleFIN \
                  bridge, groups balances into configurable categories, computes \
                  net worth, and emails the result as a daily or weekly recap."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report and email it
    Send {
        /// Lookback window in days
        #[arg(short, long, default_value_t = 1)]
        days: u32,

        /// Build the report but do not send it
        #[arg(long)]
        dry_run: bool,
    },

    /// Build a report and print it without sending
    Preview {
        /// Lookback window in days
        #[arg(short, long, default_value_t = 1)]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BriefPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_env_overrides();

    match cli.command {
        Some(Commands::Send { days, dry_run }) => {
            handle_send_command(&settings, days, dry_run)?;
        }
        Some(Commands::Preview {
            days,
            format,
            output,
        }) => {
            handle_preview_command(&settings, days, format, output)?;
        }
        Some(Commands::Init) => {
            handle_init_command(&paths)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            println!("finbrief - emailed financial recaps");
            println!();
            println!("Run 'finbrief --help' for usage information.");
            println!("Run 'finbrief init' to create a settings file.");
        }
    }

    Ok(())
}
