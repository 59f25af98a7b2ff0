//! Crest estimation for a single signal region.

use num_traits::AsPrimitive;

use crate::errors::Result;
use crate::statistics::SignalStatistics;

///
/// Estimate the number of crests in a region.
///
/// A crest is counted once the signal rises to (or above) `threshold` and then
/// falls back strictly below it, i.e. for every completed trough-crest-trough
/// triple. Entering a crest is inclusive (`sig >= threshold`), leaving it is
/// strict (`sig < threshold`).
///
/// When no full cycle is observed the result is `min(1, max(region) / threshold)`,
/// a fraction describing how close the region came to a crest. Callers must
/// therefore not assume an integral result.
///
/// # Arguments
///
/// - region: the signal samples, in genomic order
/// - threshold: crest threshold
///
/// # Errors
///
/// [`SignalError::EmptyInput`](crate::SignalError::EmptyInput) if `region` is empty,
/// [`SignalError::InvalidArgument`](crate::SignalError::InvalidArgument) if it holds
/// a NaN or infinite sample.
///
pub fn count_crests<T: AsPrimitive<f64>>(region: &[T], threshold: f64) -> Result<f64> {
    let max = region.max_signal()?;

    let mut is_below = true;
    let mut crossing_count: u64 = 0;

    for sig in region.iter().map(|v| v.as_()) {
        // trough -> crest
        if is_below && sig >= threshold {
            is_below = false;
        }

        // crest -> trough completes a cycle
        if !is_below && sig < threshold {
            is_below = true;
            crossing_count += 1;
        }
    }

    if crossing_count == 0 {
        return Ok(f64::min(1.0, max / threshold));
    }

    Ok(crossing_count as f64)
}
