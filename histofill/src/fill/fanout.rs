use super::{Accumulator, Fill, Monoid};

/// Object-safe view of an accumulator producing `O`.
trait ErasedAccumulator<I: ?Sized, O> {
    fn put_erased(&mut self, input: &I);

    fn extract_erased(self: Box<Self>) -> O;
}

impl<I, A> ErasedAccumulator<I, A::Output> for A
where
    I: ?Sized,
    A: Accumulator<I>,
{
    fn put_erased(&mut self, input: &I) {
        Fill::put_one(self, input)
    }

    fn extract_erased(self: Box<Self>) -> A::Output {
        (*self).extract()
    }
}

/// Any number of accumulators of different types, fed together.
///
/// Children must agree on their output type. Their outputs are combined in
/// the order they were added, starting from the identity given at
/// construction.
///
/// ```
/// # use histofill::{
/// #     binning::IntBins,
/// #     fill::{counting, fold, run_fill, AccumulatorExt, Fanout},
/// #     Histogram,
/// # };
/// let bins = IntBins::new(0, 9)?;
/// let in_range_plus_seen = run_fill(
///     || {
///         Fanout::new(0_u32, |a, b| a + b)
///             .with(
///                 counting(bins, 0_u32)
///                     .map_output(|h: Histogram<IntBins, u32>| h.fold(0, |sum, x| sum + x)),
///             )
///             .with(fold(0_u32, |seen: &mut u32, _: &i64| *seen += 1))
///     },
///     &[1_i64, 5, 12],
/// );
/// assert_eq!(5, in_range_plus_seen);
/// # Ok::<(), histofill::HistogramError>(())
/// ```
pub struct Fanout<'a, I: ?Sized, O> {
    children: Vec<Box<dyn ErasedAccumulator<I, O> + 'a>>,
    identity: O,
    combine: Box<dyn Fn(O, O) -> O + 'a>,
}

impl<'a, I: ?Sized, O> Fanout<'a, I, O> {
    /// No children yet. `combine` must be associative with `identity` as
    /// its identity.
    pub fn new(identity: O, combine: impl Fn(O, O) -> O + 'a) -> Self {
        Self {
            children: Vec::new(),
            identity,
            combine: Box::new(combine),
        }
    }

    /// No children yet, combining with the output's [`Monoid`].
    pub fn monoid() -> Self
    where
        O: Monoid + 'a,
    {
        Self::new(O::empty(), O::combine)
    }

    /// Add a child.
    pub fn push(&mut self, child: impl Accumulator<I, Output = O> + 'a) {
        self.children.push(Box::new(child));
    }

    /// Add a child, builder style.
    pub fn with(mut self, child: impl Accumulator<I, Output = O> + 'a) -> Self {
        self.push(child);
        self
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no child has been added yet
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<I: ?Sized, O> Fill<I> for Fanout<'_, I, O> {
    fn put_one(&mut self, input: &I) {
        for child in self.children.iter_mut() {
            child.put_erased(input);
        }
    }
}

impl<I: ?Sized, O> Accumulator<I> for Fanout<'_, I, O> {
    type Output = O;

    fn extract(self) -> O {
        log::debug!("combining {} fanout children", self.children.len());
        let combine = self.combine;
        self.children
            .into_iter()
            .fold(self.identity, |combined, child| {
                combine(combined, child.extract_erased())
            })
    }
}
