use std::ops::AddAssign;

use num_traits::One;

use crate::{binning::Bin, histogram::Histogram};

use super::{Accumulator, Fill, HistogramBuilder, Monoid};

/// Counts each value once. Input is the binning's value type.
#[derive(Debug, Clone)]
pub struct Counting<B, T>(HistogramBuilder<B, T>);

/// Adds a weight per value. Input is `(value, weight)`.
#[derive(Debug, Clone)]
pub struct Weighted<B, T>(HistogramBuilder<B, T>);

/// Combines an element into the cell of each value. Input is
/// `(value, element)`.
#[derive(Debug, Clone)]
pub struct Monoidal<B, T>(HistogramBuilder<B, T>);

/// Arbitrary running state updated by `f` for every value.
#[derive(Debug, Clone)]
pub struct Fold<S, F> {
    state: S,
    f: F,
}

/// A histogram counting how many values land in each bin.
pub fn counting<B: Bin, T: Clone>(bin: B, zero: T) -> Counting<B, T> {
    Counting(HistogramBuilder::new(bin, zero))
}

/// A histogram summing the weight given with each value.
pub fn weighted<B: Bin, T: Clone>(bin: B, zero: T) -> Weighted<B, T> {
    Weighted(HistogramBuilder::new(bin, zero))
}

/// A histogram combining the element given with each value. Every cell
/// starts empty.
///
/// ```
/// # use histofill::{binning::IntBins, fill::{monoidal, run_fill}};
/// let bins = IntBins::new(1, 2)?;
/// let words = [(1_i64, "one".to_string()), (2, "two".to_string()), (1, "uno".to_string())];
/// let histogram = run_fill(|| monoidal(bins), &words);
/// assert_eq!("oneuno", histogram.contents()[0]);
/// # Ok::<(), histofill::HistogramError>(())
/// ```
pub fn monoidal<B: Bin, T: Monoid>(bin: B) -> Monoidal<B, T> {
    Monoidal(HistogramBuilder::with_cells(bin, T::empty))
}

/// Running state starting at `init`, updated in place by `f`.
pub fn fold<S, F>(init: S, f: F) -> Fold<S, F> {
    Fold { state: init, f }
}

macro_rules! builder_access {
    ($($mode:ident),*) => {
        $(
            impl<B, T> $mode<B, T> {
                /// The builder being filled
                pub fn builder(&self) -> &HistogramBuilder<B, T> {
                    &self.0
                }

                /// Stop at the builder instead of freezing it
                pub fn into_builder(self) -> HistogramBuilder<B, T> {
                    self.0
                }
            }
        )*
    };
}

builder_access!(Counting, Weighted, Monoidal);

impl<S, F> Fold<S, F> {
    /// The state so far
    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<B, T> Fill<B::Value> for Counting<B, T>
where
    B: Bin,
    T: AddAssign + One,
{
    #[inline]
    fn put_one(&mut self, input: &B::Value) {
        self.0.fill_one(input)
    }
}

impl<B, T> Accumulator<B::Value> for Counting<B, T>
where
    B: Bin,
    T: AddAssign + One,
{
    type Output = Histogram<B, T>;

    fn extract(self) -> Self::Output {
        self.0.freeze()
    }
}

impl<B, T, W> Fill<(B::Value, W)> for Weighted<B, T>
where
    B: Bin,
    T: AddAssign<W>,
    W: Clone,
{
    #[inline]
    fn put_one(&mut self, (value, weight): &(B::Value, W)) {
        self.0.fill_weighted(value, weight.clone())
    }
}

impl<B, T, W> Accumulator<(B::Value, W)> for Weighted<B, T>
where
    B: Bin,
    T: AddAssign<W>,
    W: Clone,
{
    type Output = Histogram<B, T>;

    fn extract(self) -> Self::Output {
        self.0.freeze()
    }
}

impl<B, T> Fill<(B::Value, T)> for Monoidal<B, T>
where
    B: Bin,
    T: Monoid + Clone,
{
    fn put_one(&mut self, (value, element): &(B::Value, T)) {
        self.0.fill_monoid(value, element.clone())
    }
}

impl<B, T> Accumulator<(B::Value, T)> for Monoidal<B, T>
where
    B: Bin,
    T: Monoid + Clone,
{
    type Output = Histogram<B, T>;

    fn extract(self) -> Self::Output {
        self.0.freeze()
    }
}

impl<I, S, F> Fill<I> for Fold<S, F>
where
    I: ?Sized,
    F: FnMut(&mut S, &I),
{
    fn put_one(&mut self, input: &I) {
        (self.f)(&mut self.state, input)
    }
}

impl<I, S, F> Accumulator<I> for Fold<S, F>
where
    I: ?Sized,
    F: FnMut(&mut S, &I),
{
    type Output = S;

    fn extract(self) -> S {
        self.state
    }
}
