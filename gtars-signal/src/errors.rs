use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Empty signal region: a maximum intensity is required")]
    EmptyInput,

    #[error("Intensity {value} is outside the histogram domain (bin {index})")]
    OutOfRange { value: f64, index: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Maximum signal intensity not contained in region")]
    PeakNotAligned,

    #[error("Can't parse intensity '{field}' on line {line}")]
    InvalidIntensity { line: u64, field: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for gtars-signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;
