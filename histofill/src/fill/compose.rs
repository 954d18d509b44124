use super::{Accumulator, Fill};

macro_rules! tuple_accumulator {
    ($($name:ident $index:tt),+) => {
        /// Every element sees each value, in element order.
        impl<I: ?Sized, $($name: Fill<I>),+> Fill<I> for ($($name,)+) {
            #[inline]
            fn put_one(&mut self, input: &I) {
                $(self.$index.put_one(input);)+
            }
        }

        impl<I: ?Sized, $($name: Accumulator<I>),+> Accumulator<I> for ($($name,)+) {
            type Output = ($($name::Output,)+);

            fn extract(self) -> Self::Output {
                ($(self.$index.extract(),)+)
            }
        }
    };
}

tuple_accumulator!(A 0, B 1);
tuple_accumulator!(A 0, B 1, C 2);
tuple_accumulator!(A 0, B 1, C 2, D 3);

/// Every element sees each value, in element order.
impl<I: ?Sized, A: Fill<I>> Fill<I> for Vec<A> {
    fn put_one(&mut self, input: &I) {
        for accumulator in self.iter_mut() {
            accumulator.put_one(input);
        }
    }
}

impl<I: ?Sized, A: Accumulator<I>> Accumulator<I> for Vec<A> {
    type Output = Vec<A::Output>;

    fn extract(self) -> Self::Output {
        self.into_iter().map(Accumulator::extract).collect()
    }
}
