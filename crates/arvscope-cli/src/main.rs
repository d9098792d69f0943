use std::path::PathBuf;

use arvscope_cli::commands;
use arvscope_cli::config::{self, LogFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arvscope")]
#[command(version, about = "HIV drug-resistance scoring and treatment recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment request and print the full report
    Evaluate {
        /// Request JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Summarize an assessment history array
    Trend {
        /// History JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Split a list of patient risk scores into high and low risk
    Cohort {
        /// JSON array of scores (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = config::load_config()?;

    // Logs go to stderr; stdout carries only the JSON result.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    let rendered = match cli.command {
        Commands::Evaluate { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::render(commands::evaluate(&input)?, config.pretty_output)?
        }
        Commands::Trend { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::render(commands::trend(&input)?, config.pretty_output)?
        }
        Commands::Cohort { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::render(commands::cohort(&input)?, config.pretty_output)?
        }
    };

    println!("{rendered}");
    Ok(())
}
