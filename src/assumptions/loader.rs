//! File-based scenario loading
//!
//! Scenario configs are JSON documents; growth tables may also be kept as
//! CSV with one row per fiscal year.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{ScenarioConfig, SessionRateOverrides, YearGrowthRate};

/// Errors raised while reading scenario inputs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid growth CSV: {0}")]
    Csv(#[from] csv::Error),
}

fn open(path: &Path) -> Result<File, ConfigError> {
    File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Raw CSV row: `year,fall,spring,summer` plus optional half-semester overrides
#[derive(Debug, Deserialize)]
struct GrowthCsvRow {
    year: usize,
    fall: f64,
    spring: f64,
    summer: f64,
    #[serde(default)]
    fall_a: Option<f64>,
    #[serde(default)]
    fall_b: Option<f64>,
    #[serde(default)]
    spring_a: Option<f64>,
    #[serde(default)]
    spring_b: Option<f64>,
    #[serde(default)]
    summer_a: Option<f64>,
    #[serde(default)]
    summer_b: Option<f64>,
}

impl GrowthCsvRow {
    fn into_rate(self) -> (usize, YearGrowthRate) {
        let rate = YearGrowthRate {
            fall: self.fall,
            spring: self.spring,
            summer: self.summer,
            overrides: SessionRateOverrides {
                fall_a: self.fall_a,
                fall_b: self.fall_b,
                spring_a: self.spring_a,
                spring_b: self.spring_b,
                summer_a: self.summer_a,
                summer_b: self.summer_b,
            },
        };
        (self.year, rate)
    }
}

/// Load growth rows from any reader, ordered by the `year` column
pub fn load_growth_rates_from_reader<R: Read>(reader: R) -> Result<Vec<YearGrowthRate>, ConfigError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: GrowthCsvRow = result?;
        rows.push(row.into_rate());
    }

    rows.sort_by_key(|(year, _)| *year);
    Ok(rows.into_iter().map(|(_, rate)| rate).collect())
}

/// Load growth rows from a CSV file
pub fn load_growth_rates<P: AsRef<Path>>(path: P) -> Result<Vec<YearGrowthRate>, ConfigError> {
    let file = open(path.as_ref())?;
    load_growth_rates_from_reader(file)
}

impl ScenarioConfig {
    /// Parse a scenario from JSON; omitted fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = open(path.as_ref())?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Replace the growth table with rows read from a CSV file
    pub fn with_growth_csv<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        self.growth.yearly = load_growth_rates(path)?;
        Ok(self)
    }
}
