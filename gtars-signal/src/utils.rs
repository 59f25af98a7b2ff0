use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{INTENSITY_FIELD_INDEX, RECORD_FIELD_COUNT};
use crate::errors::{Result, SignalError};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Pull the intensity out of a single four-column record.
///
/// Returns `Ok(None)` for lines that don't split into exactly four
/// whitespace-separated fields; those are skipped by every caller.
///
/// # Arguments
///
/// - line: the raw line
/// - line_number: 1-based line number, used for error reporting
///
pub fn parse_intensity(line: &str, line_number: u64) -> Result<Option<f64>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != RECORD_FIELD_COUNT {
        return Ok(None);
    }

    let field = fields[INTENSITY_FIELD_INDEX];
    field
        .parse::<f64>()
        .map(Some)
        .map_err(|_| SignalError::InvalidIntensity {
            line: line_number,
            field: field.to_string(),
        })
}

///
/// Read the intensity column of every four-column record in a reader.
///
/// Lines with a different number of fields (track lines, headers, blank
/// lines) are skipped.
///
pub fn read_signal_values<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(value) = parse_intensity(&line, idx as u64 + 1)? {
            values.push(value);
        }
    }
    Ok(values)
}

///
/// Read the intensity column of a (optionally gzip'd) four-column file.
///
pub fn read_signal_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    read_signal_values(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("chr1\t0\t25\t1.5", Some(1.5))]
    #[case("chr1 0 25    2", Some(2.0))]
    #[case("track type=bedGraph", None)]
    #[case("chr1\t0\t25", None)]
    #[case("chr1\t0\t25\t1\textra", None)]
    #[case("", None)]
    fn test_parse_intensity(#[case] line: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_intensity(line, 1).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_intensity_rejects_non_numeric() {
        let err = parse_intensity("chr1\t0\t25\tNA", 7).unwrap_err();
        match err {
            SignalError::InvalidIntensity { line, field } => {
                assert_eq!(line, 7);
                assert_eq!(field, "NA");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_read_signal_values_skips_other_lines() {
        let data = "track type=bedGraph\nchr1 0 10 1\nchr1 10 20 3.25\n\nchr1 20 30 0\n";
        let values = read_signal_values(Cursor::new(data)).unwrap();
        assert_eq!(values, vec![1.0, 3.25, 0.0]);
    }

    #[rstest]
    fn test_read_signal_file_gzipped() {
        let file = NamedTempFile::with_suffix(".bedGraph.gz").unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        writeln!(encoder, "chr2\t0\t50\t4").unwrap();
        writeln!(encoder, "chr2\t50\t100\t8").unwrap();
        encoder.finish().unwrap();

        let values = read_signal_file(file.path()).unwrap();
        assert_eq!(values, vec![4.0, 8.0]);
    }
}
