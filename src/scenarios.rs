use std::io::Cursor;

use crate::experiment::ReportFormat;
use crate::interval::Domain;
use crate::{run, Config, Error};

fn session(config: &Config, input: &str) -> (Result<(), Error>, String) {
    let mut output = Vec::new();
    let result = run(config, Cursor::new(input.as_bytes()), &mut output);
    (result, String::from_utf8(output).unwrap())
}

fn report_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| !line.starts_with("Enter interval's"))
        .collect()
}

fn parse_line(line: &str) -> (usize, f64, f64) {
    let mut fields = line.split(' ');
    let n = fields.next().unwrap().parse().unwrap();
    let rectangle = fields.next().unwrap().parse().unwrap();
    let simpson = fields.next().unwrap().parse().unwrap();
    assert!(fields.next().is_none());
    (n, rectangle, simpson)
}

#[test]
fn test_half_period_default_batch() {
    let (result, output) = session(&Config::default(), "0\n3.141592653589793\n");
    result.unwrap();

    assert_eq!(
        report_lines(&output),
        vec![
            "6 2.02303 2.00005",
            "10 2.00825 2.00001",
            "20 2.00206 2.00000",
            "100 2.00008 2.00000",
            "500 2.00000 2.00000",
            "1000 2.00000 2.00000",
        ]
    );
}

#[test]
fn test_coarse_partition_deviates_more() {
    let (result, output) = session(&Config::default(), "0 3.141592653589793");
    result.unwrap();

    let lines = report_lines(&output);
    let (_, rectangle_6, simpson_6) = parse_line(lines[0]);
    let (_, rectangle_1000, simpson_1000) = parse_line(lines[5]);

    assert!((rectangle_6 - 2.).abs() > (rectangle_1000 - 2.).abs());
    assert!((simpson_6 - 2.).abs() > (simpson_1000 - 2.).abs());
    assert!((simpson_6 - 2.).abs() < (rectangle_6 - 2.).abs());
}

#[test]
fn test_degenerate_interval() {
    let (result, output) = session(&Config::default(), "0\n0\n");
    result.unwrap();

    let lines = report_lines(&output);
    assert_eq!(lines.len(), 6);
    for line in lines {
        let (_, rectangle, simpson) = parse_line(line);
        assert_eq!(rectangle, 0.);
        assert_eq!(simpson, 0.);
        assert!(line.ends_with(" 0.00000 0.00000"));
    }
}

#[test]
fn test_negative_left_border_aborts() {
    let (result, output) = session(&Config::default(), "-0.1\n1\n");

    assert!(matches!(result, Err(Error::LeftBelowDomain { .. })));
    assert!(report_lines(&output).is_empty());
}

#[test]
fn test_right_border_past_pi_aborts() {
    let (result, output) = session(&Config::default(), "0\n3.2\n");

    assert!(matches!(result, Err(Error::RightAboveDomain { .. })));
    assert!(report_lines(&output).is_empty());
}

#[test]
fn test_custom_batch_and_domain() {
    let config = Config {
        partition_counts: vec![1, 3],
        domain: Domain::new(0., 10.).unwrap(),
        ..Config::default()
    };
    let (result, output) = session(&config, "4 5");
    result.unwrap();

    let lines = report_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(parse_line(lines[0]).0, 1);
    assert_eq!(parse_line(lines[1]).0, 3);
}

#[test]
fn test_csv_batch() {
    let config = Config {
        partition_counts: vec![1000],
        format: ReportFormat::Csv,
        ..Config::default()
    };
    let (result, output) = session(&config, "0 3.141592653589793");
    result.unwrap();

    assert_eq!(
        report_lines(&output),
        vec!["partitions,rectangle,simpson", "1000,2.00000,2.00000"]
    );
}

#[test]
fn test_invalid_config_reads_nothing() {
    let config = Config {
        partition_counts: vec![],
        ..Config::default()
    };
    let (result, output) = session(&config, "0 1");

    assert!(matches!(result, Err(Error::NoPartitionCounts)));
    assert!(output.is_empty());
}

#[test]
fn test_infinite_domain_aborts_before_prompting() {
    let config = Config {
        domain: Domain {
            lower: 0.,
            upper: f64::INFINITY,
        },
        ..Config::default()
    };
    let (result, output) = session(&config, "0 inf");

    assert!(matches!(result, Err(Error::NonFiniteDomain { .. })));
    assert!(output.is_empty());
}
