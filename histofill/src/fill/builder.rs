use std::ops::AddAssign;

use num_traits::One;

use crate::{binning::Bin, histogram::Histogram};

use super::Monoid;

/// A histogram under construction.
///
/// The builder owns its cells exclusively. [`HistogramBuilder::freeze`]
/// consumes it, so a builder can only ever be frozen once; use
/// [`HistogramBuilder::snapshot`] to look at the contents mid-fill.
///
/// ```
/// # use histofill::{binning::EqualWidthBins, fill::HistogramBuilder};
/// let mut builder = HistogramBuilder::new(EqualWidthBins::new(0.0, 4, 2.0)?, 0_u32);
/// for value in [0.1, 0.2, 1.9, 2.0] {
///     builder.fill_one(&value);
/// }
/// let histogram = builder.freeze();
/// assert_eq!(&[2, 0, 0, 1], histogram.contents());
/// assert_eq!(Some((&0, &1)), histogram.outliers());
/// # Ok::<(), histofill::HistogramError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistogramBuilder<B, T> {
    bin: B,
    underflows: T,
    overflows: T,
    contents: Vec<T>,
}

impl<B: Bin, T> HistogramBuilder<B, T> {
    /// Every cell, outliers included, starts as a copy of `zero`.
    pub fn new(bin: B, zero: T) -> Self
    where
        T: Clone,
    {
        log::trace!("new histogram builder with {} bins", bin.n_bins());
        let contents = vec![zero.clone(); bin.n_bins()];
        Self {
            bin,
            underflows: zero.clone(),
            overflows: zero,
            contents,
        }
    }

    /// Every cell, outliers included, starts as a fresh `make()`.
    pub fn with_cells(bin: B, mut make: impl FnMut() -> T) -> Self {
        log::trace!("new histogram builder with {} bins", bin.n_bins());
        let contents = (0..bin.n_bins()).map(|_| make()).collect();
        Self {
            bin,
            underflows: make(),
            overflows: make(),
            contents,
        }
    }

    /// The binning being filled
    pub fn bin(&self) -> &B {
        &self.bin
    }

    /// Cell for values below the range
    pub fn underflows(&self) -> &T {
        &self.underflows
    }

    /// Cell for values above the range, and for NaN
    pub fn overflows(&self) -> &T {
        &self.overflows
    }

    /// The in-range cells so far
    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    /// Count one observation of `value`.
    #[inline]
    pub fn fill_one(&mut self, value: &B::Value)
    where
        T: AddAssign + One,
    {
        *self.cell(value) += T::one();
    }

    /// Add `weight` to the cell holding `value`.
    #[inline]
    pub fn fill_weighted<W>(&mut self, value: &B::Value, weight: W)
    where
        T: AddAssign<W>,
    {
        *self.cell(value) += weight;
    }

    /// Combine `item` onto the end of the cell holding `value`.
    pub fn fill_monoid(&mut self, value: &B::Value, item: T)
    where
        T: Monoid,
    {
        let cell = self.cell(value);
        let current = std::mem::replace(cell, T::empty());
        *cell = current.combine(item);
    }

    /// Update the cell holding `value` in place.
    pub fn fill_with(&mut self, value: &B::Value, update: impl FnOnce(&mut T)) {
        update(self.cell(value))
    }

    /// Update the cell holding `value` with a fallible combine. The error
    /// is returned as is; the cell holds whatever `update` left in it.
    pub fn try_fill_with<E>(
        &mut self,
        value: &B::Value,
        update: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Result<(), E> {
        update(self.cell(value))
    }

    /// A copy of the current state. The builder keeps filling.
    pub fn snapshot(&self) -> Histogram<B, T>
    where
        B: Clone,
        T: Clone,
    {
        Histogram::from_checked_parts(
            self.bin.clone(),
            Some((self.underflows.clone(), self.overflows.clone())),
            self.contents.as_slice().into(),
        )
    }

    /// Finish filling. The histogram always carries outliers.
    pub fn freeze(self) -> Histogram<B, T> {
        log::trace!("freezing histogram with {} bins", self.contents.len());
        Histogram::from_checked_parts(
            self.bin,
            Some((self.underflows, self.overflows)),
            self.contents.into(),
        )
    }

    #[inline]
    fn cell(&mut self, value: &B::Value) -> &mut T {
        let index = self.bin.to_index(value);
        if index < 0 {
            &mut self.underflows
        } else {
            match self.contents.get_mut(index as usize) {
                Some(cell) => cell,
                None => &mut self.overflows,
            }
        }
    }
}
