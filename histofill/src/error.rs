use thiserror::Error;

use crate::codec::ParseError;

/// Errors from constructing, slicing or combining histograms.
///
/// Values outside a binning's range are never an error while filling: they
/// land in the underflow and overflow cells.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    /// Binning parameters that cannot describe any bins.
    #[error("invalid binning: {0}")]
    InvalidBins(String),

    /// Content length does not match the binning's bin count.
    #[error("expected {expected} bins, found {actual}")]
    ShapeMismatch {
        /// Bin count the binning requires
        expected: usize,
        /// Bin count that was supplied
        actual: usize,
    },

    /// Two histograms were combined elementwise but their binnings differ.
    #[error("histograms do not share a binning")]
    BinningMismatch,

    /// A bin index or slice bound outside `[0, len)`.
    #[error("index {index} out of bounds for {len} bins")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of bins available
        len: usize,
    },

    /// A value bound does not fall inside the binning's range.
    #[error("value is outside the binning range")]
    ValueOutOfRange,

    /// Textual decoding failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result alias for histogram operations
pub type Result<T> = std::result::Result<T, HistogramError>;

pub(crate) fn invalid_bins(message: impl Into<String>) -> HistogramError {
    HistogramError::InvalidBins(message.into())
}
