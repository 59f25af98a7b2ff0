//! Descriptive metrics over genomic signal tracks.
//!
//! This crate provides small, independent analytical primitives for intensity
//! data (typically RPKM values binned along a chromosome):
//!
//! - [`count_crests`]: number of trough-crest-trough cycles in a region
//! - [`intensity_percentile`]: intensity at a percentile over a streamed four-column file
//! - [`cross_correlation`]: normalized similarity of two clusters under a delay
//! - [`count_above`]: coverage of samples above a threshold, optionally within an annotation
//!
//! Regions and clusters are plain slices of any primitive numeric type.
//!
//! # Example
//!
//! ```rust
//! use gtars_signal::{SignalStatistics, count_above, count_crests, cross_correlation};
//!
//! let region = vec![0.0, 3.0, 0.5, 4.0, 0.0];
//! assert_eq!(count_crests(&region, 2.0).unwrap(), 2.0);
//! assert_eq!(region.max_signal().unwrap(), 4.0);
//!
//! // two samples above 1.0, each covering 50bp
//! assert_eq!(count_above(1.0, "", &region, 0, 250, 0, 0, 50), 100);
//!
//! let r = cross_correlation(&region, &region, 0, 0.5, 0.0, false, true, 0.0).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use gtars_signal::intensity_percentile;
//!
//! let mut stream = BufReader::new(File::open("signal.bedGraph").unwrap());
//! let p95 = intensity_percentile(0.95, &mut stream).unwrap();
//!
//! // the stream is back at its start and can be read again
//! let p50 = intensity_percentile(0.5, &mut stream).unwrap();
//! ```
pub mod consts;
pub mod crests;
pub mod errors;
pub mod percentile;
pub mod statistics;
pub mod threshold;
pub mod utils;
pub mod xcorr;

// re-exports
pub use crests::count_crests;
pub use errors::{Result, SignalError};
pub use percentile::{
    IntensityHistogram, intensity_percentile, intensity_percentile_from_path,
    intensity_percentile_from_reader,
};
pub use statistics::SignalStatistics;
pub use threshold::count_above;
pub use utils::{read_signal_file, read_signal_values};
pub use xcorr::{align_clusters, cross_correlation};
