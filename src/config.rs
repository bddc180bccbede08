use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::Error;
use crate::experiment::{ReportFormat, DEFAULT_PARTITION_COUNTS};
use crate::interval::Domain;

/// Run configuration. Every field may be omitted from the TOML file.
///
/// ```toml
/// partition_counts = [6, 10, 20, 100, 500, 1000]
/// format = "plain"
/// log_level = "warn"
///
/// [domain]
/// lower = 0.0
/// upper = 3.141592653589793
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub partition_counts: Vec<usize>,
    pub domain: Domain,
    pub format: ReportFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            partition_counts: DEFAULT_PARTITION_COUNTS.to_vec(),
            domain: Domain::default(),
            format: ReportFormat::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.partition_counts.is_empty() {
            return Err(Error::NoPartitionCounts);
        }
        if self.partition_counts.contains(&0) {
            return Err(Error::ZeroPartitions);
        }
        self.domain.validate()?;
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        match self.log_level.as_str() {
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            "off" => Ok(LevelFilter::Off),
            other => Err(Error::LogLevel(other.to_string())),
        }
    }
}
