//! CLI error type. Engine errors pass through untouched so they can be
//! reported as structured JSON.

use std::path::PathBuf;

use antenna_core::DesignError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Design(#[from] DesignError),

    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No frequency given: pass --freq <MHz> or --band <name>")]
    MissingFrequency,
}

impl CliError {
    /// The engine error, if this came from the engine
    pub fn design_error(&self) -> Option<&DesignError> {
        match self {
            CliError::Design(err) => Some(err),
            _ => None,
        }
    }
}
