//! Thresholded signal coverage, optionally restricted to an annotated range.

use num_traits::AsPrimitive;

///
/// Count the coverage of samples that lie strictly above a threshold.
///
/// Each sample stands for `bin_size` coordinate units, the first one starting
/// at `start`. For every sample above `threshold`, `bin_size` is added to the
/// total provided the annotation is empty or the sample's position falls in
/// `[start_anno, end_anno]` (inclusive on both ends).
///
/// `end` is accepted for interface compatibility only: iteration is bounded
/// by the length of `signal`, not by `end`.
///
/// # Arguments
///
/// - threshold: samples must be strictly greater than this
/// - annotation: annotation label, an empty label disables the range restriction
/// - signal: the signal samples, one per bin
/// - start: coordinate of the first sample
/// - end: unused
/// - start_anno: first coordinate of the annotated range
/// - end_anno: last coordinate of the annotated range
/// - bin_size: coordinate width of one sample
///
#[allow(clippy::too_many_arguments)]
pub fn count_above<T: AsPrimitive<f64>>(
    threshold: f64,
    annotation: &str,
    signal: &[T],
    start: i64,
    _end: i64,
    start_anno: i64,
    end_anno: i64,
    bin_size: i64,
) -> i64 {
    let unrestricted = annotation.is_empty();

    let mut count = 0;
    let mut position = start;
    for (idx, sig) in signal.iter().map(|v| v.as_()).enumerate() {
        // only step once another sample needs a position
        if idx > 0 {
            position += bin_size;
        }

        let in_annotation = start_anno <= position && position <= end_anno;
        if sig > threshold && (unrestricted || in_annotation) {
            count += bin_size;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn signal() -> Vec<f64> {
        vec![1.0, 10.0, 3.0, 8.0]
    }

    #[rstest]
    fn test_count_above_unrestricted(signal: Vec<f64>) {
        assert_eq!(count_above(5.0, "", &signal, 0, 100, 0, 0, 1), 2);
    }

    #[rstest]
    fn test_count_above_scales_by_bin_size(signal: Vec<f64>) {
        assert_eq!(count_above(5.0, "", &signal, 0, 100, 0, 0, 25), 50);
    }

    #[rstest]
    fn test_count_above_is_strict(signal: Vec<f64>) {
        assert_eq!(count_above(8.0, "", &signal, 0, 100, 0, 0, 1), 1);
    }

    #[rstest]
    // positions are 100, 125, 150, 175; qualifying samples sit at 125 and 175
    #[case(125, 125, 25)]
    #[case(100, 175, 50)]
    #[case(150, 174, 0)]
    #[case(176, 500, 0)]
    #[case(0, 99, 0)]
    fn test_count_above_annotated(
        signal: Vec<f64>,
        #[case] start_anno: i64,
        #[case] end_anno: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(
            count_above(5.0, "promoter", &signal, 100, 200, start_anno, end_anno, 25),
            expected
        );
    }

    #[rstest]
    fn test_count_above_ignores_end(signal: Vec<f64>) {
        // end lies before start, iteration still covers the whole signal
        assert_eq!(count_above(0.0, "", &signal, 1000, 0, 0, 0, 10), 40);
    }

    #[rstest]
    fn test_count_above_last_sample_at_coordinate_limit() {
        let signal = [10.0f64, 10.0];
        assert_eq!(count_above(5.0, "", &signal, i64::MAX - 1, 0, 0, 0, 1), 2);
        assert_eq!(
            count_above(5.0, "repeat", &signal, i64::MAX - 1, 0, i64::MAX, i64::MAX, 1),
            1
        );
    }

    #[rstest]
    fn test_count_above_empty_signal() {
        let signal: Vec<f32> = vec![];
        assert_eq!(count_above(0.0, "", &signal, 0, 0, 0, 0, 1), 0);
    }
}
