use std::fmt;
use std::io::Write;

use log::{debug, info};
use serde::Deserialize;

use crate::error::Error;
use crate::integral::Rule;
use crate::interval::Interval;

pub const DEFAULT_PARTITION_COUNTS: [usize; 6] = [6, 10, 20, 100, 500, 1000];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximationRecord {
    pub partitions: usize,
    pub rectangle: f64,
    pub simpson: f64,
}

impl ApproximationRecord {
    pub fn get(&self, rule: Rule) -> f64 {
        match rule {
            Rule::Rectangle => self.rectangle,
            Rule::Simpson => self.simpson,
        }
    }
}

impl fmt::Display for ApproximationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.5} {:.5}", self.partitions, self.rectangle, self.simpson)
    }
}

/// Runs both composite rules over `interval` for every partition count, keeping
/// the order of `counts`. Zero counts are rejected before anything is computed.
pub fn run_experiment<F>(
    f: F,
    interval: &Interval,
    counts: &[usize],
) -> Result<Vec<ApproximationRecord>, Error>
where
    F: Fn(f64) -> f64,
{
    if counts.contains(&0) {
        return Err(Error::ZeroPartitions);
    }

    info!(
        "integrating over [{}, {}] with {} partition counts",
        interval.left(),
        interval.right(),
        counts.len()
    );

    counts
        .iter()
        .map(|&partitions| -> Result<ApproximationRecord, Error> {
            let record = ApproximationRecord {
                partitions,
                rectangle: Rule::Rectangle.composite(&f, interval.support(), partitions)?,
                simpson: Rule::Simpson.composite(&f, interval.support(), partitions)?,
            };
            debug!("{record}");
            Ok(record)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Csv,
}

pub fn write_report<W>(
    records: &[ApproximationRecord],
    format: ReportFormat,
    mut writer: W,
) -> Result<(), Error>
where
    W: Write,
{
    match format {
        ReportFormat::Plain => {
            for record in records {
                writeln!(writer, "{record}")?;
            }
            writer.flush()?;
        }
        ReportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            let mut header = vec!["partitions".to_string()];
            header.extend(Rule::ALL.iter().map(Rule::to_string));
            csv_writer.write_record(&header)?;
            for record in records {
                let mut row = vec![record.partitions.to_string()];
                row.extend(Rule::ALL.iter().map(|&rule| format!("{:.5}", record.get(rule))));
                csv_writer.write_record(&row)?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}
