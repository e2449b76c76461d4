mod cli;
mod error;
mod specfile;
mod style;

use std::process::ExitCode;

use clap::Parser;
use log::debug;
use protocol_graph::{config::ConfigOverrides, protocols};

use crate::{cli::Cli, error::CliError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<String, CliError> {
    if cli.list {
        return Ok(protocols::names().collect::<Vec<_>>().join("\n"));
    }

    let mut inputs = cli.protocols.clone();
    for path in &cli.files {
        inputs.extend(specfile::read_specs(path)?);
    }
    if inputs.is_empty() {
        return Err(CliError::MissingProtocol);
    }

    let overrides = match &cli.config {
        Some(path) => style::load(path)?,
        None => ConfigOverrides::default(),
    }
    .merged_with(&cli.overrides()?);
    debug!("command-line overrides: {:?}", overrides);

    render_all(&inputs, &overrides)
}

/// Renders every input in order, separated by a blank line. Stops at the first error.
fn render_all(inputs: &[String], overrides: &ConfigOverrides) -> Result<String, CliError> {
    let diagrams = inputs
        .iter()
        .map(|input| Ok(protocols::resolve(input, overrides)?.to_text()?))
        .collect::<Result<Vec<String>, CliError>>()?;

    Ok(diagrams.join("\n\n"))
}
