//! Config file loading
//!
//! Every key is optional. Values given on the command line override the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{CliError, Result};

/// Contents of a `--config` TOML file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Solver settings
    #[serde(default)]
    pub run: RunConfig,

    /// Coefficient sequence
    #[serde(default)]
    pub coefficients: CoefficientsConfig,

    /// Report and table output
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[run]` section
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub eps: Option<f64>,
    pub max_iters: Option<usize>,
    pub parallel: Option<bool>,
}

/// `[coefficients]` section
///
/// Either `start`/`step`/`count` for a generated sequence or `values`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CoefficientsConfig {
    pub start: Option<f64>,
    pub step: Option<f64>,
    pub count: Option<i64>,
    pub values: Option<Vec<f64>>,
}

/// `[report]` section
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub path: Option<PathBuf>,
    pub decimal_separator: Option<char>,
    pub field_separator: Option<char>,
    pub precision: Option<usize>,
    pub show_bracket: Option<bool>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    ///
    /// The file was requested explicitly, so a missing file is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
