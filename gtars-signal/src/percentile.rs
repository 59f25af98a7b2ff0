//! Intensity percentiles over large, streamed four-column signal files.
//!
//! Records are binned into a fixed-size histogram as they are read, so memory
//! use does not depend on the length of the stream. Only the fourth column of
//! a record is interpreted; lines that don't split into exactly four
//! whitespace-separated fields are skipped.

use std::io::{BufRead, Seek, SeekFrom};
use std::path::Path;

use log::{debug, info};

use crate::consts::{FINE_BIN_COUNT, HISTOGRAM_SIZE, LOG_EVERY_N_RECORDS};
use crate::errors::{Result, SignalError};
use crate::utils::{get_dynamic_reader, parse_intensity};

/// Histogram of intensities at a resolution of `1 / FINE_BIN_COUNT`.
///
/// The histogram is a dense buffer of [`HISTOGRAM_SIZE`] counters covering
/// intensities up to [`MAX_INTENSITY`](crate::consts::MAX_INTENSITY). This
/// costs a fixed ~32 MB per histogram regardless of how many records are
/// inserted, but keeps the percentile walk a single linear scan.
pub struct IntensityHistogram {
    counts: Vec<u64>,
    total: u64,
}

impl Default for IntensityHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl IntensityHistogram {
    pub fn new() -> Self {
        IntensityHistogram {
            counts: vec![0; HISTOGRAM_SIZE],
            total: 0,
        }
    }

    ///
    /// Map an intensity onto its bin: the value is scaled by
    /// [`FINE_BIN_COUNT`] and rounded up.
    ///
    /// # Errors
    ///
    /// [`SignalError::OutOfRange`] if the bin falls outside the histogram,
    /// which covers negative, non-finite and too-large intensities.
    ///
    pub fn bin_index(value: f64) -> Result<usize> {
        let index = (value * FINE_BIN_COUNT as f64).ceil();
        if !index.is_finite() || index < 0.0 || index >= HISTOGRAM_SIZE as f64 {
            return Err(SignalError::OutOfRange { value, index });
        }
        Ok(index as usize)
    }

    pub fn insert(&mut self, value: f64) -> Result<()> {
        let bin = Self::bin_index(value)?;
        self.counts[bin] += 1;
        self.total += 1;
        Ok(())
    }

    /// Number of intensities inserted so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    ///
    /// Get the intensity at the given percentile.
    ///
    /// The target count is `floor(percentile * total)`. Bins are walked in
    /// ascending order and the first one whose cumulative count reaches the
    /// target is returned, converted back to intensity units. An empty
    /// histogram yields `0`.
    ///
    pub fn percentile(&self, percentile: f64) -> f64 {
        let target_count = (percentile * self.total as f64).floor() as u64;

        let mut running_sum: u64 = 0;
        for (bin, count) in self.counts.iter().enumerate() {
            running_sum += count;
            if running_sum >= target_count {
                return bin as f64 / FINE_BIN_COUNT as f64;
            }
        }

        0.0
    }
}

fn validate_percentile(percentile: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&percentile) {
        return Err(SignalError::InvalidArgument(format!(
            "percentile must be within [0, 1], got {}",
            percentile
        )));
    }
    Ok(())
}

///
/// Get the intensity at `percentile` over every record of a seekable stream.
///
/// On return the stream is repositioned to where it was when the function
/// was called (the start, for a freshly opened file), so the same stream can
/// be handed to a subsequent pass. The stream is repositioned on error too.
///
/// # Arguments
///
/// - percentile: fraction in `[0, 1]`
/// - stream: a buffered, seekable four-column text stream
///
pub fn intensity_percentile<R: BufRead + Seek>(percentile: f64, stream: &mut R) -> Result<f64> {
    let origin = stream.stream_position()?;
    let result = intensity_percentile_from_reader(percentile, &mut *stream);
    stream.seek(SeekFrom::Start(origin))?;
    result
}

///
/// Get the intensity at `percentile` over every record of a reader.
///
/// Unlike [`intensity_percentile`] the reader is consumed and not
/// repositioned, which makes this usable with pipes and decompressors.
///
pub fn intensity_percentile_from_reader<R: BufRead>(percentile: f64, reader: R) -> Result<f64> {
    validate_percentile(percentile)?;

    let mut histogram = IntensityHistogram::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(value) = parse_intensity(&line, idx as u64 + 1)? else {
            continue;
        };

        histogram.insert(value)?;
        if histogram.total() % LOG_EVERY_N_RECORDS == 0 {
            debug!("binned {} records", histogram.total());
        }
    }

    let result = histogram.percentile(percentile);
    info!(
        "intensity percentile {} over {} records: {}",
        percentile,
        histogram.total(),
        result
    );

    Ok(result)
}

///
/// Get the intensity at `percentile` over a (optionally gzip'd) file.
///
pub fn intensity_percentile_from_path<P: AsRef<Path>>(percentile: f64, path: P) -> Result<f64> {
    let reader = get_dynamic_reader(path.as_ref())?;
    intensity_percentile_from_reader(percentile, reader)
}
