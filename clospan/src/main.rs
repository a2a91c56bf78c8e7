use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clospan::cli::{Cli, OutputFormat};
use clospan::{ingest, mine, report, MiningError};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; `--debug` forces trace level
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return Ok(ingest::read_input_file(path)?);
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli)?;
    let database = ingest::load_database(&text, cli.itemsets)?;
    let config = cli.miner_config()?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| mine(&database, &config)))
        .map_err(|_| anyhow!("mining aborted"))?;
    tracing::debug!(stats = ?outcome.stats, "run statistics");

    let records = outcome.patterns.sorted_for_display(&database);
    let summary = report::summary_message(records.len(), config.min_support);
    match cli.format {
        OutputFormat::Table => {
            if !records.is_empty() {
                print!("{}", report::render_table(&records));
            }
            println!("{}", summary);
        }
        OutputFormat::Json => {
            println!("{}", report::render_json(&records)?);
            eprintln!("{}", summary);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<MiningError>() {
            Some(warning) if warning.is_user_warning() => {
                eprintln!("warning: {}", warning);
                ExitCode::from(2)
            }
            _ => {
                eprintln!("error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
