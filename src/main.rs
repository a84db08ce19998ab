// src/main.rs
use std::fs;
use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use ecg_triage::cli::Cli;
use ecg_triage::inference::LoadedModels;
use ecg_triage::{Analyzer, AnalyzerConfig};
fn run(cli: Cli) -> Result<bool> {
    let base = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_path(path)?,
        None => AnalyzerConfig::default(),
    };
    let config = cli.apply(base);
    let delimiter = config.delimiter_byte()?;
    // models are loaded once and only borrowed by the analyzer
    let analyzer = Analyzer::from_models(LoadedModels::load(&config)).with_delimiter(delimiter);
    let response = analyzer.analyze_to_response(&cli.input);
    let payload = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    match &cli.output {
        Some(path) => {
            fs::write(path, payload)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote analysis to {}", path.display());
        }
        None => println!("{payload}"),
    }
    Ok(response.is_success())
}
fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
