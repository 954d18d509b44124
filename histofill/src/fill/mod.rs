//! Filling histograms from streams of values.
//!
//! A [`HistogramBuilder`] holds the mutable cells of one histogram. The
//! [`Accumulator`] contract lets builders, folds and arbitrary user state
//! be driven together by a single pass over the input with [`run_fill`].
//! Composite accumulators come from tuples, `Vec`s, [`Fanout`], the
//! [`AccumulatorExt`] adapters and `#[derive(Fill)]`.

mod adapters;
mod builder;
mod compose;
mod fanout;
mod modes;
mod monoid;

pub use adapters::{AccumulatorExt, EachInput, FilterInput, MapInput, MapOutput};
pub use builder::HistogramBuilder;
pub use fanout::Fanout;
pub use modes::{counting, fold, monoidal, weighted, Counting, Fold, Monoidal, Weighted};
pub use monoid::Monoid;

/// Something that takes values one at a time.
pub trait Fill<I: ?Sized> {
    /// Ingest one value
    fn put_one(&mut self, input: &I);
}

/// A [`Fill`] target that produces a result once the input is exhausted.
pub trait Accumulator<I: ?Sized>: Fill<I> {
    /// What the accumulator produces
    type Output;

    /// Finish accumulating
    fn extract(self) -> Self::Output;
}

impl<I: ?Sized, F: Fill<I> + ?Sized> Fill<I> for &mut F {
    fn put_one(&mut self, input: &I) {
        (**self).put_one(input)
    }
}

impl<I: ?Sized, F: Fill<I> + ?Sized> Fill<I> for Box<F> {
    fn put_one(&mut self, input: &I) {
        (**self).put_one(input)
    }
}

/// Build an accumulator with `factory`, feed it every value of `input` in
/// order, then extract its result.
///
/// ```
/// # use histofill::{binning::IntBins, fill::{counting, run_fill}};
/// let bins = IntBins::new(1, 3)?;
/// let (histogram, other) = run_fill(
///     || (counting(bins, 0_u32), counting(bins, 0_u64)),
///     &[1_i64, 1, 3, 9],
/// );
/// assert_eq!(&[2, 0, 1], histogram.contents());
/// assert_eq!(Some((&0, &1)), other.outliers());
/// # Ok::<(), histofill::HistogramError>(())
/// ```
pub fn run_fill<'a, I, A>(
    factory: impl FnOnce() -> A,
    input: impl IntoIterator<Item = &'a I>,
) -> A::Output
where
    I: 'a + ?Sized,
    A: Accumulator<I>,
{
    let mut accumulator = factory();
    let count = fill_all(&mut accumulator, input);
    log::debug!("filled {count} values");
    accumulator.extract()
}

/// Feed every value of `input` to `target` in order. Returns how many
/// values were fed.
pub fn fill_all<'a, I, F>(target: &mut F, input: impl IntoIterator<Item = &'a I>) -> usize
where
    I: 'a + ?Sized,
    F: Fill<I> + ?Sized,
{
    let mut count = 0;
    for value in input {
        target.put_one(value);
        count += 1;
    }
    count
}

#[cfg(test)]
mod test {
    use super::{
        counting, fill_all, fold, run_fill, Accumulator, AccumulatorExt, Fanout, Fill,
    };
    use crate::{
        binning::{EqualWidthBins, IntBins},
        histogram::Histogram,
    };

    #[test_log::test]
    fn run_fill_counts_into_one_histogram() {
        let histogram = run_fill(
            || counting(EqualWidthBins::new(0.0, 10, 10.0).expect("valid"), 0_i32),
            &[0.5, 1.5, 9.9, -1.0, 10.5],
        );
        assert_eq!(&[1, 1, 0, 0, 0, 0, 0, 0, 0, 1], histogram.contents());
        assert_eq!(Some((&1, &1)), histogram.outliers());
    }

    #[test_log::test]
    fn one_pass_matches_separate_passes() {
        let input = [1_i64, 2, 3];
        let small = IntBins::new(0, 2).expect("valid");
        let large = IntBins::new(2, 5).expect("valid");

        let (together_small, together_large) = run_fill(
            || (counting(small, 0_u32), counting(large, 0_u32)),
            &input,
        );
        let alone_small = run_fill(|| counting(small, 0_u32), &input);
        let alone_large = run_fill(|| counting(large, 0_u32), &input);
        assert_eq!(alone_small, together_small);
        assert_eq!(alone_large, together_large);

        let singleton = |h: Histogram<IntBins, u32>| vec![h];
        let fanned = run_fill(
            || {
                Fanout::monoid()
                    .with(counting(small, 0_u32).map_output(singleton))
                    .with(counting(large, 0_u32).map_output(singleton))
            },
            &input,
        );
        assert_eq!(vec![alone_small, alone_large], fanned);
    }

    #[test]
    fn fill_all_drives_plain_fill_targets() {
        struct Last(Option<char>);
        impl Fill<char> for Last {
            fn put_one(&mut self, input: &char) {
                self.0 = Some(*input);
            }
        }
        let mut last = Last(None);
        assert_eq!(3, fill_all(&mut last, &['a', 'b', 'c']));
        assert_eq!(Some('c'), last.0);
    }

    #[test]
    fn borrowed_accumulators_keep_their_state() {
        let mut histogram = counting(IntBins::new(0, 1).expect("valid"), 0_u8);
        let mut sum = fold(0_i64, |sum: &mut i64, value: &i64| *sum += value);
        fill_all(&mut (&mut histogram, &mut sum), &[0_i64, 1, 1, 5]);
        assert_eq!(&7, sum.state());

        let histogram = histogram.extract();
        assert_eq!(&[1, 2], histogram.contents());
        assert_eq!(Some((&0, &1)), histogram.outliers());
    }
}
