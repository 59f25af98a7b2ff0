//! Convenience trait for computing signal metrics directly on slices.

use num_traits::AsPrimitive;

use crate::crests::count_crests;
use crate::errors::{Result, SignalError};
use crate::threshold::count_above;

/// Trait for computing descriptive metrics of a signal region.
pub trait SignalStatistics {
    /// Global maximum of the region.
    ///
    /// Fails with [`SignalError::EmptyInput`] when the region has no samples and
    /// with [`SignalError::InvalidArgument`] when a sample is NaN or infinite.
    fn max_signal(&self) -> Result<f64>;

    /// Number of completed trough-crest-trough cycles, see [`count_crests`].
    fn crest_count(&self, threshold: f64) -> Result<f64>;

    /// Coverage (in coordinate units) of samples strictly above `threshold`,
    /// without any annotation restriction. See [`count_above`].
    fn coverage_above(&self, threshold: f64, start: i64, bin_size: i64) -> i64;
}

impl<T: AsPrimitive<f64>> SignalStatistics for [T] {
    fn max_signal(&self) -> Result<f64> {
        let mut max: Option<f64> = None;
        for (idx, sample) in self.iter().map(|v| v.as_()).enumerate() {
            if !sample.is_finite() {
                return Err(SignalError::InvalidArgument(format!(
                    "non-finite sample {} at index {}",
                    sample, idx
                )));
            }
            max = Some(max.map_or(sample, |m| m.max(sample)));
        }

        max.ok_or(SignalError::EmptyInput)
    }

    fn crest_count(&self, threshold: f64) -> Result<f64> {
        count_crests(self, threshold)
    }

    fn coverage_above(&self, threshold: f64, start: i64, bin_size: i64) -> i64 {
        count_above(threshold, "", self, start, start, 0, 0, bin_size)
    }
}
