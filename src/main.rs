//! vidcheck - batch existence check for video identifiers
//!
//! Reads identifiers from the command line and/or stdin and prints one JSON
//! result per distinct identifier.

use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::{debug, error};
use vidcheck::utils::logging::init_logging;
use vidcheck::{BatchValidator, CheckError, Config, Result};

/// Check which video identifiers exist, spending as little quota as possible
#[derive(Debug, Parser)]
#[command(name = "vidcheck", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override it
    #[arg(short, long, env = "VIDCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Also read whitespace-separated identifiers from stdin
    #[arg(long)]
    stdin: bool,

    /// Print the batch report alongside the results
    #[arg(long)]
    report: bool,

    /// Identifiers to check
    ids: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).await?;
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: {}", e);
    }
    debug!("Configuration: {:?}", config);

    let mut ids = cli.ids;
    if cli.stdin {
        ids.extend(read_stdin_ids().await?);
    }

    let validator = BatchValidator::from_config(&config).await?;
    let (results, report) = validator.validate_with_report(ids).await?;

    let output = if cli.report {
        serde_json::to_string_pretty(&json!({ "results": results, "report": report }))?
    } else {
        serde_json::to_string_pretty(&results)?
    };
    println!("{}", output);
    Ok(())
}

async fn read_stdin_ids() -> Result<Vec<String>> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(CheckError::Io)?;
    Ok(input.split_whitespace().map(str::to_string).collect())
}
