//! Immutable histograms: a binning, its contents and optional outlier counts.

mod contents;
mod slice;
mod two_d;

use std::ops::Index;

pub use contents::Contents;

use crate::{
    binning::Bin,
    error::{HistogramError, Result},
};

/// A binning paired with one content value per bin.
///
/// Histograms never change once built. Every transformation returns a new
/// histogram; clones and index slices share their content storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<B, T> {
    bin: B,
    outliers: Option<(T, T)>,
    contents: Contents<T>,
}

impl<B: Bin, T> Histogram<B, T> {
    /// A histogram without underflow and overflow information.
    ///
    /// ```
    /// # use histofill::{binning::IntBins, histogram::Histogram};
    /// let histogram = Histogram::new(IntBins::new(1, 3)?, vec![5, 0, 2])?;
    /// assert_eq!(Some(&2), histogram.at_value(&3));
    /// # Ok::<(), histofill::HistogramError>(())
    /// ```
    pub fn new(bin: B, contents: impl Into<Contents<T>>) -> Result<Self> {
        Self::from_parts(bin, None, contents)
    }

    /// A histogram with `(underflows, overflows)`.
    pub fn with_outliers(
        bin: B,
        outliers: (T, T),
        contents: impl Into<Contents<T>>,
    ) -> Result<Self> {
        Self::from_parts(bin, Some(outliers), contents)
    }

    /// Fails with [`HistogramError::ShapeMismatch`] unless there is exactly
    /// one content value per bin.
    pub fn from_parts(
        bin: B,
        outliers: Option<(T, T)>,
        contents: impl Into<Contents<T>>,
    ) -> Result<Self> {
        let contents = contents.into();
        if contents.len() != bin.n_bins() {
            return Err(HistogramError::ShapeMismatch {
                expected: bin.n_bins(),
                actual: contents.len(),
            });
        }
        Ok(Self {
            bin,
            outliers,
            contents,
        })
    }

    /// Builds without the length check; callers guarantee it.
    pub(crate) fn from_checked_parts(
        bin: B,
        outliers: Option<(T, T)>,
        contents: Contents<T>,
    ) -> Self {
        debug_assert_eq!(bin.n_bins(), contents.len());
        Self {
            bin,
            outliers,
            contents,
        }
    }

    /// The binning
    pub fn bin(&self) -> &B {
        &self.bin
    }

    /// One content per bin, in index order
    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    /// The shared content storage behind this histogram
    pub fn raw_contents(&self) -> &Contents<T> {
        &self.contents
    }

    /// Split into binning, outliers and contents
    pub fn into_parts(self) -> (B, Option<(T, T)>, Contents<T>) {
        (self.bin, self.outliers, self.contents)
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// `(underflows, overflows)`, if this histogram tracks them
    pub fn outliers(&self) -> Option<(&T, &T)> {
        self.outliers
            .as_ref()
            .map(|(underflows, overflows)| (underflows, overflows))
    }

    /// Content of values below the binning's range
    pub fn underflows(&self) -> Option<&T> {
        self.outliers.as_ref().map(|(underflows, _)| underflows)
    }

    /// Content of values above the binning's range
    pub fn overflows(&self) -> Option<&T> {
        self.outliers.as_ref().map(|(_, overflows)| overflows)
    }

    /// Content of bin `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.contents
            .get(index)
            .ok_or(HistogramError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Content of the bin holding `value`, if it is in range.
    pub fn at_value(&self, value: &B::Value) -> Option<&T> {
        let index = self.bin.to_index(value);
        if index < 0 {
            return None;
        }
        self.contents.get(index as usize)
    }

    /// `(bin value, content)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (B::Value, &T)> + '_ {
        self.contents
            .iter()
            .enumerate()
            .map(|(index, content)| (self.bin.from_index(index), content))
    }

    /// Apply `f` to every bin and, separately, to the outliers.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Histogram<B, U>
    where
        B: Clone,
    {
        let outliers = self
            .outliers
            .as_ref()
            .map(|(underflows, overflows)| (f(underflows), f(overflows)));
        Histogram {
            bin: self.bin.clone(),
            outliers,
            contents: self.contents.iter().map(f).collect(),
        }
    }

    /// Replace the binning. The new binning must have as many bins as the
    /// old one.
    pub fn map_bin<B2: Bin>(self, f: impl FnOnce(B) -> B2) -> Result<Histogram<B2, T>> {
        let expected = self.bin.n_bins();
        let bin = f(self.bin);
        if bin.n_bins() != expected {
            return Err(HistogramError::ShapeMismatch {
                expected,
                actual: bin.n_bins(),
            });
        }
        Ok(Histogram {
            bin,
            outliers: self.outliers,
            contents: self.contents,
        })
    }

    /// Re-express the histogram over an equivalent binning.
    pub fn convert_bin<B2>(self) -> Result<Histogram<B2, T>>
    where
        B2: Bin + From<B>,
    {
        self.map_bin(B2::from)
    }

    /// Combine two histograms bin by bin. Their binnings must be equal.
    /// Outliers survive only if both histograms track them.
    pub fn zip<U, V>(
        &self,
        other: &Histogram<B, U>,
        f: impl FnMut(&T, &U) -> V,
    ) -> Result<Histogram<B, V>>
    where
        B: PartialEq + Clone,
    {
        self.zip_safe(other, f).ok_or(HistogramError::BinningMismatch)
    }

    /// [`Histogram::zip`], returning `None` when the binnings differ.
    pub fn zip_safe<U, V>(
        &self,
        other: &Histogram<B, U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Option<Histogram<B, V>>
    where
        B: PartialEq + Clone,
    {
        if self.bin != other.bin {
            return None;
        }
        let outliers = match (&self.outliers, &other.outliers) {
            (Some((u1, o1)), Some((u2, o2))) => Some((f(u1, u2), f(o1, o2))),
            _ => None,
        };
        let contents = self
            .contents
            .iter()
            .zip(other.contents.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Some(Histogram {
            bin: self.bin.clone(),
            outliers,
            contents,
        })
    }

    /// Left fold over the contents in index order. Outliers are not visited.
    pub fn fold<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        self.contents.iter().fold(init, f)
    }

    /// [`Histogram::fold`] with each bin's index.
    pub fn indexed_fold<A>(&self, init: A, mut f: impl FnMut(A, usize, &T) -> A) -> A {
        self.contents
            .iter()
            .enumerate()
            .fold(init, |accumulator, (index, content)| {
                f(accumulator, index, content)
            })
    }

    /// Index of the first smallest bin
    pub fn min_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        self.extreme_index(|candidate, best| candidate < best)
    }

    /// Index of the first largest bin
    pub fn max_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        self.extreme_index(|candidate, best| candidate > best)
    }

    /// Bin value of the first smallest bin
    pub fn min_bin(&self) -> Option<B::Value>
    where
        T: PartialOrd,
    {
        self.min_index().map(|index| self.bin.from_index(index))
    }

    /// Bin value of the first largest bin
    pub fn max_bin(&self) -> Option<B::Value>
    where
        T: PartialOrd,
    {
        self.max_index().map(|index| self.bin.from_index(index))
    }

    fn extreme_index(&self, better: impl Fn(&T, &T) -> bool) -> Option<usize> {
        self.indexed_fold(None, |best: Option<usize>, index, content| match best {
            Some(best) if !better(content, &self.contents[best]) => Some(best),
            _ => Some(index),
        })
    }
}

/// Panics when `index` is out of bounds, like slice indexing.
impl<B: Bin, T> Index<usize> for Histogram<B, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.contents[index]
    }
}

#[cfg(test)]
mod test {
    use super::Histogram;
    use crate::{
        binning::{EqualWidthBins, IntBins, SteppedIntBins},
        HistogramError,
    };

    fn ints(lo: i64, hi: i64) -> IntBins {
        IntBins::new(lo, hi).expect("valid bins")
    }

    #[test]
    fn construction_checks_length() {
        assert!(Histogram::new(ints(0, 2), vec![1, 2, 3]).is_ok());
        assert_eq!(
            Err(HistogramError::ShapeMismatch {
                expected: 3,
                actual: 2
            }),
            Histogram::new(ints(0, 2), vec![1, 2])
        );
    }

    #[test]
    fn queries() {
        let histogram =
            Histogram::with_outliers(ints(5, 8), (2_u32, 3), vec![1, 0, 4, 4]).expect("valid");
        assert_eq!(4, histogram.len());
        assert_eq!(Ok(&4), histogram.get(2));
        assert_eq!(
            Err(HistogramError::IndexOutOfBounds { index: 4, len: 4 }),
            histogram.get(4)
        );
        assert_eq!(0, histogram[1]);
        assert_eq!(Some(&1), histogram.at_value(&5));
        assert_eq!(None, histogram.at_value(&4));
        assert_eq!(None, histogram.at_value(&9));
        assert_eq!(Some((&2, &3)), histogram.outliers());
        assert_eq!(Some(&2), histogram.underflows());
        assert_eq!(Some(&3), histogram.overflows());
        assert_eq!(
            vec![(5, &1), (6, &0), (7, &4), (8, &4)],
            histogram.iter().collect::<Vec<_>>()
        );
        assert_eq!(Some(1), histogram.min_index());
        assert_eq!(Some(2), histogram.max_index());
        assert_eq!(Some(6), histogram.min_bin());
        assert_eq!(Some(7), histogram.max_bin());
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_end_panics() {
        let histogram = Histogram::new(ints(0, 1), vec![1, 2]).expect("valid");
        let _ = histogram[2];
    }

    #[test]
    fn map_touches_outliers() {
        let histogram =
            Histogram::with_outliers(ints(0, 2), (1_u32, 2), vec![3, 4, 5]).expect("valid");
        let doubled = histogram.map(|x| x * 2);
        assert_eq!(&[6, 8, 10], doubled.contents());
        assert_eq!(Some((&2, &4)), doubled.outliers());
        assert_eq!(histogram, histogram.map(|x| *x));
    }

    #[test]
    fn map_bin_preserves_bin_count() {
        let histogram = Histogram::new(ints(0, 2), vec![3, 4, 5]).expect("valid");
        assert_eq!(Ok(histogram.clone()), histogram.clone().map_bin(|b| b));

        let shifted = histogram
            .clone()
            .map_bin(|_| ints(10, 12))
            .expect("same bin count");
        assert_eq!(Some(&4), shifted.at_value(&11));

        assert_eq!(
            Err(HistogramError::ShapeMismatch {
                expected: 3,
                actual: 4
            }),
            histogram.map_bin(|_| ints(0, 3))
        );
    }

    #[test]
    fn convert_bin() {
        let histogram = Histogram::new(ints(-1, 1), vec![7, 8, 9]).expect("valid");
        let stepped: Histogram<SteppedIntBins, i32> =
            histogram.clone().convert_bin().expect("same bin count");
        assert_eq!(Some(&9), stepped.at_value(&1));
        let floats: Histogram<EqualWidthBins, i32> =
            histogram.convert_bin().expect("same bin count");
        assert_eq!(Some(&8), floats.at_value(&0.2));
        assert_eq!(Some(&7), floats.at_value(&-1.4));
    }

    #[test]
    fn zip() {
        let a = Histogram::with_outliers(ints(0, 2), (1, 1), vec![1, 2, 3]).expect("valid");
        let b = Histogram::with_outliers(ints(0, 2), (2, 0), vec![10, 20, 30]).expect("valid");
        let sum = a.zip(&b, |x, y| x + y).expect("same binning");
        assert_eq!(&[11, 22, 33], sum.contents());
        assert_eq!(Some((&3, &1)), sum.outliers());

        let no_outliers = Histogram::new(ints(0, 2), vec![0, 0, 0]).expect("valid");
        assert_eq!(None, a.zip(&no_outliers, |x, y| x + y).expect("same").outliers());

        let other = Histogram::new(ints(1, 3), vec![0, 0, 0]).expect("valid");
        assert_eq!(
            Err(HistogramError::BinningMismatch),
            a.zip(&other, |x, y| x + y)
        );
        assert_eq!(None, a.zip_safe(&other, |x, y| x + y));
    }

    #[test]
    fn folds_ignore_outliers() {
        let histogram =
            Histogram::with_outliers(ints(0, 3), (100, 100), vec![1, 2, 3, 4]).expect("valid");
        assert_eq!(10, histogram.fold(0, |sum, x| sum + x));
        assert_eq!(
            vec![(0, 1), (1, 2), (2, 3), (3, 4)],
            histogram.indexed_fold(Vec::new(), |mut pairs, index, x| {
                pairs.push((index, *x));
                pairs
            })
        );
    }
}
