use crate::{
    binning::SliceableBin,
    error::{HistogramError, Result},
};

use super::Histogram;

impl<B: SliceableBin, T> Histogram<B, T> {
    /// Bins `first..=last` as their own histogram, sharing this one's
    /// storage. Outliers are dropped: the sliced binning has a different
    /// range, so the old counts no longer describe it.
    ///
    /// ```
    /// # use histofill::{binning::IntBins, histogram::Histogram};
    /// let histogram = Histogram::with_outliers(IntBins::new(0, 4)?, (1, 1), vec![1, 2, 3, 4, 5])?;
    /// let middle = histogram.slice_by_index(1, 3)?;
    /// assert_eq!(&[2, 3, 4], middle.contents());
    /// assert_eq!(None, middle.outliers());
    /// # Ok::<(), histofill::HistogramError>(())
    /// ```
    pub fn slice_by_index(&self, first: usize, last: usize) -> Result<Histogram<B, T>> {
        let bin = self.bin.slice_bin(first, last)?;
        Ok(Histogram::from_checked_parts(
            bin,
            None,
            self.contents.window(first..last + 1),
        ))
    }

    /// The bins holding `lo` through `hi`. Both must be inside the binning.
    pub fn slice_by_value(&self, lo: &B::Value, hi: &B::Value) -> Result<Histogram<B, T>> {
        let first = self.checked_index(lo)?;
        let last = self.checked_index(hi)?;
        self.slice_by_index(first, last)
    }

    fn checked_index(&self, value: &B::Value) -> Result<usize> {
        if !self.bin.in_range(value) {
            return Err(HistogramError::ValueOutOfRange);
        }
        Ok(self.bin.to_index(value) as usize)
    }
}
