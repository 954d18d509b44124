//! Binning strategies: pure mappings between domain values and bin indices.
//!
//! Every strategy fixes its bin count at construction. Indices are signed so
//! that values below the range map to a negative index and values above it
//! map to `n_bins()` or more; fill code routes those to the underflow and
//! overflow cells.

mod equal_width;
mod indexable;
mod int;
mod log_width;
mod product;
mod stepped;

pub use equal_width::EqualWidthBins;
pub use indexable::{IndexBins, Indexable};
pub use int::IntBins;
pub use log_width::LogWidthBins;
pub use product::{Axis, Bins2D};
pub use stepped::SteppedIntBins;

use crate::error::Result;

/// Maps values to bin indices and back.
pub trait Bin {
    /// The domain being binned
    type Value;

    /// Number of bins. Fixed for the lifetime of the binning.
    fn n_bins(&self) -> usize;

    /// Index of the bin holding `value`. Negative below the range, at least
    /// `n_bins()` above it.
    fn to_index(&self, value: &Self::Value) -> i64;

    /// Representative value of bin `index`: the exact value for integer
    /// binnings, the bin centre for float binnings.
    fn from_index(&self, index: usize) -> Self::Value;

    /// Whether `value` lands in one of the bins.
    fn in_range(&self, value: &Self::Value) -> bool {
        let index = self.to_index(value);
        0 <= index && (index as u64) < self.n_bins() as u64
    }
}

/// Binnings whose bins cover an interval of the domain.
pub trait IntervalBin: Bin {
    /// Lower and upper edge of bin `index`. Integer binnings return the
    /// inclusive first and last value; float binnings the half-open edges.
    fn bin_interval(&self, index: usize) -> (Self::Value, Self::Value);

    /// Every bin's interval in index order
    fn bins_list(&self) -> Vec<(Self::Value, Self::Value)> {
        (0..self.n_bins()).map(|i| self.bin_interval(i)).collect()
    }
}

/// One dimensional binnings with an overall range.
pub trait Bin1D: IntervalBin {
    /// Lowest value covered by the binning
    fn lower_limit(&self) -> Self::Value;
    /// Highest value covered by the binning
    fn upper_limit(&self) -> Self::Value;
}

/// Binnings that can be restricted to a contiguous run of their bins.
pub trait SliceableBin: Bin + Sized {
    /// A binning covering bins `first..=last` of this one, with the same
    /// width or ratio. Bin `first` becomes bin 0.
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self>;
}

/// Binnings that can report the size of each bin.
pub trait VariableBin: Bin {
    /// Width of bin `index` in the value domain
    fn bin_size(&self, index: usize) -> Self::Value;
}

/// Binnings where every bin has the same width.
pub trait UniformBin: VariableBin {
    /// Width shared by every bin
    fn bin_width(&self) -> Self::Value;
}

/// Validates an inclusive slice range against a bin count.
pub(crate) fn check_slice(first: usize, last: usize, n_bins: usize) -> Result<()> {
    if n_bins <= last {
        return Err(crate::HistogramError::IndexOutOfBounds {
            index: last,
            len: n_bins,
        });
    }
    if last < first {
        return Err(crate::HistogramError::IndexOutOfBounds {
            index: first,
            len: last + 1,
        });
    }
    Ok(())
}

/// Floor of a float index, saturating at the ends and sending NaN past the
/// last bin.
pub(crate) fn float_index(position: f64, n_bins: usize) -> i64 {
    if position.is_nan() {
        n_bins as i64
    } else {
        position.floor() as i64
    }
}
