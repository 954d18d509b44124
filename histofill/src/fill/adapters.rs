use std::marker::PhantomData;

use super::{Accumulator, Fill};

/// Adapters for reshaping what an accumulator takes and gives back.
pub trait AccumulatorExt<I: ?Sized>: Fill<I> + Sized {
    /// Take `J` values, converting each with `f` first.
    fn map_input<J, F>(self, f: F) -> MapInput<Self, F, I>
    where
        J: ?Sized,
        I: Sized,
        F: FnMut(&J) -> I,
    {
        MapInput {
            inner: self,
            f,
            _input: PhantomData,
        }
    }

    /// Only pass on values that `predicate` accepts.
    fn filter_input<P>(self, predicate: P) -> FilterInput<Self, P>
    where
        P: FnMut(&I) -> bool,
    {
        FilterInput {
            inner: self,
            predicate,
        }
    }

    /// Take containers of `I`, passing on every element in iteration order.
    fn each_input(self) -> EachInput<Self, I> {
        EachInput {
            inner: self,
            _input: PhantomData,
        }
    }

    /// Convert the extracted output with `f`.
    fn map_output<U, F>(self, f: F) -> MapOutput<Self, F, U>
    where
        Self: Accumulator<I>,
        F: FnOnce(<Self as Accumulator<I>>::Output) -> U,
    {
        MapOutput {
            inner: self,
            f,
            _output: PhantomData,
        }
    }
}

impl<I: ?Sized, A: Fill<I>> AccumulatorExt<I> for A {}

/// See [`AccumulatorExt::map_input`].
#[derive(Debug, Clone)]
pub struct MapInput<A, F, I> {
    inner: A,
    f: F,
    _input: PhantomData<fn() -> I>,
}

/// See [`AccumulatorExt::filter_input`].
#[derive(Debug, Clone)]
pub struct FilterInput<A, P> {
    inner: A,
    predicate: P,
}

/// See [`AccumulatorExt::each_input`].
#[derive(Debug, Clone)]
pub struct EachInput<A, I: ?Sized> {
    inner: A,
    _input: PhantomData<fn(&I)>,
}

/// See [`AccumulatorExt::map_output`].
#[derive(Debug, Clone)]
pub struct MapOutput<A, F, U> {
    inner: A,
    f: F,
    _output: PhantomData<fn() -> U>,
}

impl<A, F, I, J> Fill<J> for MapInput<A, F, I>
where
    A: Fill<I>,
    F: FnMut(&J) -> I,
    J: ?Sized,
{
    #[inline]
    fn put_one(&mut self, input: &J) {
        let converted = (self.f)(input);
        self.inner.put_one(&converted)
    }
}

impl<A, F, I, J> Accumulator<J> for MapInput<A, F, I>
where
    A: Accumulator<I>,
    F: FnMut(&J) -> I,
    J: ?Sized,
{
    type Output = A::Output;

    fn extract(self) -> A::Output {
        self.inner.extract()
    }
}

impl<A, P, I> Fill<I> for FilterInput<A, P>
where
    A: Fill<I>,
    P: FnMut(&I) -> bool,
    I: ?Sized,
{
    #[inline]
    fn put_one(&mut self, input: &I) {
        if (self.predicate)(input) {
            self.inner.put_one(input)
        }
    }
}

impl<A, P, I> Accumulator<I> for FilterInput<A, P>
where
    A: Accumulator<I>,
    P: FnMut(&I) -> bool,
    I: ?Sized,
{
    type Output = A::Output;

    fn extract(self) -> A::Output {
        self.inner.extract()
    }
}

impl<A, I, C> Fill<C> for EachInput<A, I>
where
    A: Fill<I>,
    I: ?Sized,
    C: ?Sized,
    for<'c> &'c C: IntoIterator<Item = &'c I>,
{
    fn put_one(&mut self, input: &C) {
        for element in input {
            self.inner.put_one(element);
        }
    }
}

impl<A, I, C> Accumulator<C> for EachInput<A, I>
where
    A: Accumulator<I>,
    I: ?Sized,
    C: ?Sized,
    for<'c> &'c C: IntoIterator<Item = &'c I>,
{
    type Output = A::Output;

    fn extract(self) -> A::Output {
        self.inner.extract()
    }
}

impl<A, F, U, I> Fill<I> for MapOutput<A, F, U>
where
    A: Fill<I>,
    I: ?Sized,
{
    #[inline]
    fn put_one(&mut self, input: &I) {
        self.inner.put_one(input)
    }
}

impl<A, F, U, I> Accumulator<I> for MapOutput<A, F, U>
where
    A: Accumulator<I>,
    F: FnOnce(A::Output) -> U,
    I: ?Sized,
{
    type Output = U;

    fn extract(self) -> U {
        (self.f)(self.inner.extract())
    }
}

#[cfg(test)]
mod test {
    use super::AccumulatorExt;
    use crate::{
        binning::{EqualWidthBins, IntBins},
        fill::{counting, run_fill, weighted},
        histogram::Histogram,
    };

    struct Reading {
        sensor: &'static str,
        celsius: f64,
    }

    fn readings() -> Vec<Reading> {
        [("a", 21.5), ("b", -3.0), ("a", 22.1), ("a", 40.0)]
            .into_iter()
            .map(|(sensor, celsius)| Reading { sensor, celsius })
            .collect()
    }

    #[test_log::test]
    fn map_and_filter_record_fields() {
        let bins = EqualWidthBins::new(20.0, 4, 24.0).expect("valid");
        let histogram = run_fill(
            || {
                counting(bins, 0_u32)
                    .map_input(|reading: &Reading| reading.celsius)
                    .filter_input(|reading: &Reading| reading.sensor == "a")
            },
            &readings(),
        );
        assert_eq!(&[0, 1, 1, 0], histogram.contents());
        assert_eq!(Some((&0, &1)), histogram.outliers());
    }

    #[test]
    fn each_input_feeds_every_element() {
        let batches: Vec<Vec<i64>> = vec![vec![0, 1], vec![], vec![1, 1, 5]];
        let histogram = run_fill(
            || counting(IntBins::new(0, 1).expect("valid"), 0_u8).each_input(),
            &batches,
        );
        assert_eq!(&[1, 3], histogram.contents());
        assert_eq!(Some(&1), histogram.overflows());
    }

    #[test]
    fn map_output_after_weighting() {
        let bins = IntBins::new(1, 3).expect("valid");
        let total = run_fill(
            || {
                weighted(bins, 0.0_f64)
                    .map_input(|(value, weight): &(i64, f32)| (*value, f64::from(*weight)))
                    .map_output(|histogram: Histogram<IntBins, f64>| {
                        histogram.fold(0.0, |sum, x| sum + x)
                    })
            },
            &[(1_i64, 0.5_f32), (3, 1.5), (4, 10.0)],
        );
        assert_eq!(2.0, total);
    }
}
