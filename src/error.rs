use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Left border of the interval must be greater than or equal to {lower}, got {left}")]
    LeftBelowDomain { left: f64, lower: f64 },

    #[error("Right border of the interval must be less than or equal to {upper}, got {right}")]
    RightAboveDomain { right: f64, upper: f64 },

    #[error("Right border of the interval must be greater than left ({left} > {right})")]
    InvertedInterval { left: f64, right: f64 },

    #[error("Partition count must be positive")]
    ZeroPartitions,

    #[error("At least one partition count is required")]
    NoPartitionCounts,

    #[error("Domain bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteDomain { lower: f64, upper: f64 },

    #[error("Domain lower bound {lower} exceeds upper bound {upper}")]
    InvertedDomain { lower: f64, upper: f64 },

    #[error("Cannot write to stdout")]
    Prompt(#[source] io::Error),

    #[error("Cannot read interval's {border} border")]
    Read {
        border: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read interval's {border} border: unexpected end of input")]
    EndOfInput { border: &'static str },

    #[error("Cannot read interval's {border} border: {token:?} is not a number")]
    Parse { border: &'static str, token: String },

    #[error("Cannot read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown log level {0:?}, expected debug, info, warn, error or off")]
    LogLevel(String),

    #[error("Cannot write integral approximation report")]
    Output(#[from] io::Error),

    #[error("Cannot write integral approximation report as csv")]
    Csv(#[from] csv::Error),
}
