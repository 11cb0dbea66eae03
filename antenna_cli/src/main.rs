//! # Antenna Calc CLI
//!
//! Terminal front-end for the antenna design engine. Prints cutting lists
//! as tables, or as JSON for scripting.
//!
//! ```text
//! antenna_cli yagi --band 2m --elements 9 --preset metal-bonded
//! antenna_cli moxon --freq 50.15 --wire-diameter 2.5 --units imperial
//! antenna_cli --json batch designs.json
//! ```

mod config;
mod error;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use antenna_core::calculations::parse_requests;
use antenna_core::{
    design_moxon, design_yagi, AmateurBand, ConstructionPreset, DesignError, DesignOutput,
    DesignRequest, ElementStyle, MoxonInput, YagiInput,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, UnitSystem};
use crate::error::CliError;
use crate::output::{BandTable, MoxonTable, YagiTable};

/// Yagi-Uda and Moxon rectangle antenna calculator
#[derive(Parser, Debug)]
#[command(name = "antenna_cli", version)]
#[command(about = "Design DL6WU Yagis and Moxon rectangles from the command line")]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Length units for tables
    #[arg(long, value_enum, global = true)]
    units: Option<UnitSystem>,

    /// TOML file with default options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design a DL6WU long-boom Yagi
    Yagi {
        #[command(flatten)]
        frequency: FrequencyArgs,

        /// Total element count (3-30)
        #[arg(long, short = 'n')]
        elements: Option<u32>,

        /// Boom construction: metal-bonded, metal-insulated, pvc-boom
        #[arg(long, value_parser = parse_preset)]
        preset: Option<ConstructionPreset>,

        /// Driven element: folded or straight
        #[arg(long, value_parser = parse_style)]
        driven: Option<ElementStyle>,
    },
    /// Design a Moxon rectangle
    Moxon {
        #[command(flatten)]
        frequency: FrequencyArgs,

        /// Wire diameter in mm
        #[arg(long, short = 'd')]
        wire_diameter: Option<f64>,
    },
    /// Run a JSON array of design requests
    Batch {
        /// Path to the request file
        file: PathBuf,
    },
    /// List band presets
    Bands,
}

#[derive(Args, Debug)]
struct FrequencyArgs {
    /// Design frequency in MHz
    #[arg(long, short = 'f', conflicts_with = "band")]
    freq: Option<f64>,

    /// Band preset, e.g. 2m, 70cm, 6m
    #[arg(long, short = 'b')]
    band: Option<String>,
}

impl FrequencyArgs {
    fn resolve(&self) -> Result<f64, CliError> {
        match (self.freq, &self.band) {
            (Some(freq), _) => Ok(freq),
            (None, Some(band)) => Ok(AmateurBand::from_str_flexible(band)?.design_frequency_mhz()),
            (None, None) => Err(CliError::MissingFrequency),
        }
    }
}

fn parse_preset(s: &str) -> Result<ConstructionPreset, String> {
    ConstructionPreset::from_str_flexible(s).map_err(|e| {
        let codes: Vec<&str> = ConstructionPreset::ALL.iter().map(|p| p.code()).collect();
        format!("{} (expected one of: {})", e, codes.join(", "))
    })
}

fn parse_style(s: &str) -> Result<ElementStyle, String> {
    ElementStyle::from_str_flexible(s).map_err(|e| {
        let codes: Vec<&str> = ElementStyle::ALL.iter().map(|style| style.code()).collect();
        format!("{} (expected one of: {})", e, codes.join(", "))
    })
}

/// One entry of batch JSON output
#[derive(Serialize)]
struct BatchEntry {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<DesignOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<DesignError>,
}

/// One row of `bands --json`
#[derive(Serialize)]
struct BandEntry {
    band: AmateurBand,
    design_frequency_mhz: f64,
}

fn band_entries() -> Vec<BandEntry> {
    AmateurBand::ALL
        .iter()
        .map(|&band| BandEntry {
            band,
            design_frequency_mhz: band.design_frequency_mhz(),
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let default_filter = if cli.verbose {
        "antenna_cli=debug"
    } else {
        "antenna_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let units = config.units_or(cli.units);

    match &cli.command {
        Command::Yagi {
            frequency,
            elements,
            preset,
            driven,
        } => {
            let input = YagiInput {
                frequency_mhz: frequency.resolve()?,
                element_count: config.elements_or(*elements),
                construction_preset: config.preset_or(*preset),
                driven_element: config.driven_or(*driven),
            };
            tracing::debug!(?input, "designing yagi");
            let yagi = design_yagi(&input)?;
            if cli.json {
                print_json(&yagi);
            } else {
                print!("{}", YagiTable { yagi: &yagi, units });
            }
        }
        Command::Moxon {
            frequency,
            wire_diameter,
        } => {
            let input = MoxonInput {
                frequency_mhz: frequency.resolve()?,
                wire_diameter_mm: config.wire_diameter_or(*wire_diameter),
            };
            tracing::debug!(?input, "designing moxon");
            let moxon = design_moxon(&input)?;
            if cli.json {
                print_json(&moxon);
            } else {
                print!("{}", MoxonTable { moxon: &moxon, units });
            }
        }
        Command::Batch { file } => run_batch(file, cli.json, units)?,
        Command::Bands => {
            if cli.json {
                print_json(&band_entries());
            } else {
                print!("{}", BandTable);
            }
        }
    }
    Ok(())
}

fn run_batch(file: &Path, json: bool, units: UnitSystem) -> Result<(), CliError> {
    let text = fs::read_to_string(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let requests = parse_requests(&text)?;
    tracing::info!(count = requests.len(), file = %file.display(), "running batch");

    let entries = design_batch(&requests);

    if json {
        print_json(&entries);
        return Ok(());
    }

    for (entry, request) in entries.iter().zip(&requests) {
        match (&entry.result, &entry.error) {
            (Some(DesignOutput::Yagi(yagi)), _) => print!("{}", YagiTable { yagi, units }),
            (Some(DesignOutput::Moxon(moxon)), _) => print!("{}", MoxonTable { moxon, units }),
            (None, Some(err)) => {
                println!("[{}] {} request failed: {}", entry.index, request.kind(), err)
            }
            (None, None) => {}
        }
        println!();
    }
    Ok(())
}

/// Run every request; a rejected request becomes an error entry, the rest still run.
fn design_batch(requests: &[DesignRequest]) -> Vec<BatchEntry> {
    requests
        .iter()
        .enumerate()
        .map(|(index, request)| match request.run() {
            Ok(result) => BatchEntry {
                index,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                tracing::warn!(index, kind = request.kind(), error = %err, "request rejected");
                BatchEntry {
                    index,
                    result: None,
                    error: Some(err),
                }
            }
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => tracing::error!(error = %err, "failed to serialize output"),
    }
}

fn report_error(err: &CliError, json: bool) {
    eprintln!("Error: {}", err);
    if !json {
        return;
    }
    if let Some(design_err) = err.design_error() {
        if let Ok(text) = serde_json::to_string_pretty(design_err) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", text);
        }
    }
}
