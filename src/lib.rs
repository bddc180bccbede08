use std::io::{BufRead, Write};

use log::info;

pub mod config;
pub mod error;
pub mod experiment;
pub mod input;
pub mod integral;
pub mod interval;
pub mod logger;

#[cfg(test)]
mod scenarios;

pub use config::Config;
pub use error::Error;

use experiment::{run_experiment, write_report};
use input::BorderReader;

/// Reads an interval from `input`, integrates sine over it for every configured
/// partition count and writes the report to `output`. Prompts go to `output` too.
pub fn run<R, W>(config: &Config, input: R, mut output: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    config.validate()?;

    let interval = {
        let mut borders = BorderReader::new(input, &mut output);
        borders.read_interval(&config.domain)?
    };
    info!(
        "exact integral over [{}, {}] is {}",
        interval.left(),
        interval.right(),
        interval.exact_sine_integral()
    );

    let records = run_experiment(f64::sin, &interval, &config.partition_counts)?;
    write_report(&records, config.format, output)
}
