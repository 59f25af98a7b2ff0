use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use gtars_signal::{
    SignalError, SignalStatistics, count_above, count_crests, cross_correlation,
    intensity_percentile, intensity_percentile_from_path, read_signal_file,
};

use pretty_assertions::assert_eq;
use rstest::*;

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/signal")
        .join(file_name)
}

#[fixture]
fn peaks_a() -> Vec<f64> {
    read_signal_file(get_test_path("peaks_a.bedGraph")).unwrap()
}

#[fixture]
fn peaks_b() -> Vec<f64> {
    read_signal_file(get_test_path("peaks_b.bedGraph")).unwrap()
}

#[rstest]
fn test_read_track(peaks_a: Vec<f64>) {
    // the track line is skipped
    assert_eq!(peaks_a.len(), 10);
    assert_eq!(peaks_a.max_signal().unwrap(), 6.0);
}

#[rstest]
fn test_crests_on_track(peaks_a: Vec<f64>) {
    assert_eq!(count_crests(&peaks_a, 1.5).unwrap(), 2.0);
    assert_eq!(count_crests(&peaks_a, 12.0).unwrap(), 0.5);
}

#[rstest]
#[case(0.5, 1.0)]
#[case(0.9, 4.0)]
#[case(1.0, 6.0)]
fn test_percentile_on_track(#[case] percentile: f64, #[case] expected: f64) {
    let file = File::open(get_test_path("peaks_a.bedGraph")).unwrap();
    let mut stream = BufReader::new(file);

    assert_eq!(intensity_percentile(percentile, &mut stream).unwrap(), expected);
    // a second pass over the same stream sees every record again
    assert_eq!(intensity_percentile(percentile, &mut stream).unwrap(), expected);
}

#[rstest]
fn test_percentile_on_gzipped_track() {
    let result = intensity_percentile_from_path(0.5, get_test_path("peaks_a.bedGraph.gz")).unwrap();
    assert_eq!(result, 1.0);
}

#[rstest]
fn test_cross_correlation_between_tracks(peaks_a: Vec<f64>, peaks_b: Vec<f64>) {
    let aligned = cross_correlation(&peaks_a, &peaks_b, -1, 0.5, 0.0, false, true, 0.0).unwrap();
    assert!((aligned - 1.0).abs() < 1e-12);

    let unaligned = cross_correlation(&peaks_a, &peaks_b, 0, 0.5, 0.0, false, true, 0.0).unwrap();
    assert!(unaligned < aligned);

    // a large shift crops both peaks
    let err = cross_correlation(&peaks_a, &peaks_b, 6, 0.5, 0.0, false, true, 0.0).unwrap_err();
    assert!(matches!(err, SignalError::PeakNotAligned));
}

#[rstest]
fn test_count_above_on_track(peaks_a: Vec<f64>) {
    assert_eq!(count_above(1.0, "", &peaks_a, 0, 500, 0, 0, 50), 250);
    assert_eq!(count_above(1.0, "enhancer", &peaks_a, 0, 500, 100, 200, 50), 150);
    assert_eq!(count_above(1.0, "enhancer", &peaks_a, 0, 500, 250, 300, 50), 0);
}
