//! Cross-correlation between two signal clusters under a time delay.

use log::debug;
use num_traits::AsPrimitive;

use crate::errors::{Result, SignalError};
use crate::statistics::SignalStatistics;

///
/// Align two clusters for the given delay, returning the overlapping parts.
///
/// In two-way mode both clusters are shifted against each other:
/// a negative delay drops the last `|delay|` samples of `cluster1` and the
/// first `|delay|` samples of `cluster2`; a non-negative delay does the
/// opposite. Otherwise the longer cluster is windowed to the length of the
/// shorter one starting at `delay`, and the shorter cluster is used whole.
///
/// Shifts and windows are clamped to the cluster bounds, so the returned
/// slices may be empty or of different lengths.
///
/// # Errors
///
/// [`SignalError::InvalidArgument`] for a negative delay outside two-way mode.
///
pub fn align_clusters<'a, T>(
    cluster1: &'a [T],
    cluster2: &'a [T],
    delay: i64,
    two_way: bool,
) -> Result<(&'a [T], &'a [T])> {
    let shift = delay.unsigned_abs() as usize;

    if two_way {
        if delay < 0 {
            let sub1 = &cluster1[..cluster1.len().saturating_sub(shift)];
            let sub2 = &cluster2[shift.min(cluster2.len())..];
            return Ok((sub1, sub2));
        }

        let sub1 = &cluster1[shift.min(cluster1.len())..];
        let sub2 = &cluster2[..cluster2.len().saturating_sub(shift)];
        return Ok((sub1, sub2));
    }

    if delay < 0 {
        return Err(SignalError::InvalidArgument(
            "negative delay requires two-way mode".to_string(),
        ));
    }

    fn window<T>(longer: &[T], len: usize, offset: usize) -> &[T] {
        let start = offset.min(longer.len());
        let end = offset.saturating_add(len).min(longer.len());
        &longer[start..end]
    }

    if cluster1.len() > cluster2.len() {
        Ok((window(cluster1, cluster2.len(), shift), cluster2))
    } else {
        Ok((cluster1, window(cluster2, cluster1.len(), shift)))
    }
}

fn contains_peak<T: AsPrimitive<f64>>(sub: &[T], peak: f64) -> bool {
    sub.iter().any(|v| v.as_() == peak)
}

///
/// Get the cross-correlation metric between two clusters.
///
/// The clusters are first aligned with [`align_clusters`]. Then:
///
/// 1. if `use_max_cutoff` is set and the larger of the two cluster maxima is
///    below `max_cutoff`, both signals are considered insignificant and `1`
///    is returned;
/// 2. otherwise both aligned parts must still contain their cluster's maximum,
///    and the ratio of the smaller maximum to the larger one must exceed
///    `threshold` (unless the larger maximum equals `minimum`).
///
/// The correlation itself is
///
/// ```text
/// numerator   = Σ(s1·s2) - Σs1·Σs2 / n2
/// denominator = sqrt((Σs1² - (Σs1)² / n1) · (Σs2² - (Σs2)² / n2))
/// ```
///
/// Note the cross term is normalized by the length of the second part only.
/// If either variance term is not positive (a flat signal) the result is `0`.
///
/// # Arguments
///
/// - cluster1: first signal cluster
/// - cluster2: second signal cluster
/// - delay: shift applied before comparison
/// - threshold: minimum ratio between the two cluster maxima
/// - max_cutoff: significance floor for the cluster maxima
/// - use_max_cutoff: enable the significance floor
/// - two_way: shift both clusters instead of windowing the longer one
/// - minimum: a larger maximum equal to this value bypasses the ratio check
///
/// # Errors
///
/// - [`SignalError::EmptyInput`] if either cluster is empty
/// - [`SignalError::InvalidArgument`] if either cluster holds a NaN or infinite
///   sample, for a negative delay outside two-way mode, or when the aligned
///   parts differ in length
/// - [`SignalError::PeakNotAligned`] when the peak or ratio check fails
///
#[allow(clippy::too_many_arguments)]
pub fn cross_correlation<T: AsPrimitive<f64>>(
    cluster1: &[T],
    cluster2: &[T],
    delay: i64,
    threshold: f64,
    max_cutoff: f64,
    use_max_cutoff: bool,
    two_way: bool,
    minimum: f64,
) -> Result<f64> {
    let max1 = cluster1.max_signal()?;
    let max2 = cluster2.max_signal()?;

    let (sub1, sub2) = align_clusters(cluster1, cluster2, delay, two_way)?;

    let max_of_two = max1.max(max2);
    let min_of_two = max1.min(max2);

    if use_max_cutoff && max_of_two < max_cutoff {
        debug!(
            "cluster maxima below cutoff ({} < {}), skipping correlation",
            max_of_two, max_cutoff
        );
        return Ok(1.0);
    }

    let both_contain_max = contains_peak(sub1, max1) && contains_peak(sub2, max2);
    let maxes_within_threshold = min_of_two / max_of_two > threshold || max_of_two == minimum;
    if !(both_contain_max && maxes_within_threshold) {
        return Err(SignalError::PeakNotAligned);
    }

    if sub1.len() != sub2.len() {
        return Err(SignalError::InvalidArgument(format!(
            "aligned clusters differ in length ({} vs {}) at delay {}",
            sub1.len(),
            sub2.len(),
            delay
        )));
    }

    let n1 = sub1.len() as f64;
    let n2 = sub2.len() as f64;

    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum_sq1 = 0.0;
    let mut sum_sq2 = 0.0;
    let mut sum_prod = 0.0;
    for (a, b) in sub1.iter().zip(sub2) {
        let (a, b): (f64, f64) = (a.as_(), b.as_());
        sum1 += a;
        sum2 += b;
        sum_sq1 += a * a;
        sum_sq2 += b * b;
        sum_prod += a * b;
    }

    let mut numerator = sum_prod - sum1 * sum2 / n2;
    let denominator_1 = sum_sq1 - sum1 * sum1 / n1;
    let denominator_2 = sum_sq2 - sum2 * sum2 / n2;

    let mut denominator = 1.0;
    if denominator_1 > 0.0 && denominator_2 > 0.0 {
        denominator = (denominator_1 * denominator_2).sqrt();
    } else {
        numerator = 0.0;
    }

    Ok(numerator / denominator)
}
