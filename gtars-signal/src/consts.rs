/// Highest RPKM intensity an input track is expected to carry.
pub const MAX_INTENSITY: usize = 1_000_000;

/// Number of histogram bins per unit of intensity.
pub const FINE_BIN_COUNT: usize = 4;

/// Total number of bins in an [`IntensityHistogram`](crate::IntensityHistogram).
pub const HISTOGRAM_SIZE: usize = MAX_INTENSITY * FINE_BIN_COUNT;

/// Records are only considered when they split into exactly this many fields.
pub const RECORD_FIELD_COUNT: usize = 4;
pub const INTENSITY_FIELD_INDEX: usize = 3;

/// How often (in counted records) the percentile pass reports progress to the log.
pub const LOG_EVERY_N_RECORDS: u64 = 10_000;
