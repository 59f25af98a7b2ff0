use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use gtars_signal::{
    count_above, count_crests, cross_correlation, intensity_percentile_from_path,
    read_signal_file,
};

/// A metric value; coordinate counts stay integral in the JSON output.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
enum MetricValue {
    Count(i64),
    Real(f64),
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Count(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Real(value)
    }
}

#[derive(Serialize)]
struct SignalMetricOutput<'a> {
    metric: &'a str,
    value: MetricValue,
}

fn write_output(matches: &ArgMatches, metric: &str, value: impl Into<MetricValue>) -> Result<()> {
    let value = value.into();
    let output = SignalMetricOutput { metric, value };

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            serde_json::to_writer_pretty(file, &output)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn load_signal(matches: &ArgMatches, name: &str) -> Result<Vec<f64>> {
    let path = matches
        .get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))?;

    read_signal_file(path).with_context(|| format!("Failed to read signal file: {}", path))
}

pub fn run_crests(matches: &ArgMatches) -> Result<()> {
    let region = load_signal(matches, "input")?;
    let threshold = *matches
        .get_one::<f64>("threshold")
        .expect("--threshold is required");

    let crests = count_crests(&region, threshold)?;
    write_output(matches, "crests", crests)
}

pub fn run_percentile(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("--input is required");
    let percentile = *matches
        .get_one::<f64>("percentile")
        .expect("--percentile is required");

    let value = intensity_percentile_from_path(percentile, input)
        .with_context(|| format!("Failed to compute percentile over: {}", input))?;
    write_output(matches, "percentile", value)
}

pub fn run_xcorr(matches: &ArgMatches) -> Result<()> {
    let first = load_signal(matches, "first")?;
    let second = load_signal(matches, "second")?;

    // all of these carry defaults
    let delay = *matches.get_one::<i64>("delay").unwrap();
    let threshold = *matches.get_one::<f64>("threshold").unwrap();
    let max_cutoff = *matches.get_one::<f64>("max-cutoff").unwrap();
    let minimum = *matches.get_one::<f64>("minimum").unwrap();
    let use_max_cutoff = matches.get_flag("use-max-cutoff");
    let two_way = matches.get_flag("two-way");

    let value = cross_correlation(
        &first,
        &second,
        delay,
        threshold,
        max_cutoff,
        use_max_cutoff,
        two_way,
        minimum,
    )?;
    write_output(matches, "cross_correlation", value)
}

pub fn run_above(matches: &ArgMatches) -> Result<()> {
    let signal = load_signal(matches, "input")?;
    let threshold = *matches
        .get_one::<f64>("threshold")
        .expect("--threshold is required");

    // no annotation means no range restriction
    let annotation = matches
        .get_one::<String>("annotation")
        .map(String::as_str)
        .unwrap_or("");
    let start = *matches.get_one::<i64>("start").unwrap();
    let end = *matches.get_one::<i64>("end").unwrap();
    let start_anno = *matches.get_one::<i64>("start-anno").unwrap();
    let end_anno = *matches.get_one::<i64>("end-anno").unwrap();
    let bin_size = *matches.get_one::<i64>("bin-size").unwrap();

    if bin_size <= 0 {
        anyhow::bail!("--bin-size must be a positive integer, got {}", bin_size);
    }

    let count = count_above(
        threshold, annotation, &signal, start, end, start_anno, end_anno, bin_size,
    );
    write_output(matches, "count_above", count)
}
