/// An associative combine with an identity.
///
/// `a.combine(Self::empty())` and `Self::empty().combine(a)` are both `a`,
/// and `combine` is associative. Commutativity is not assumed: fan-out and
/// monoidal filling always combine in input order.
pub trait Monoid: Sized {
    /// The identity element
    fn empty() -> Self;

    /// Combine `self` followed by `other`
    fn combine(self, other: Self) -> Self;
}

macro_rules! additive_monoid {
    ($($t:ty: $zero:expr),* $(,)?) => {
        $(
            impl Monoid for $t {
                #[inline]
                fn empty() -> Self {
                    $zero
                }

                #[inline]
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

additive_monoid!(
    i8: 0, i16: 0, i32: 0, i64: 0, i128: 0, isize: 0,
    u8: 0, u16: 0, u32: 0, u64: 0, u128: 0, usize: 0,
    f32: 0.0, f64: 0.0,
);

impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, _other: Self) -> Self {}
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is the identity; two `Some`s combine their contents.
impl<T: Monoid> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }

    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

macro_rules! tuple_monoid {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Monoid),+> Monoid for ($($name,)+) {
            fn empty() -> Self {
                ($($name::empty(),)+)
            }

            fn combine(self, other: Self) -> Self {
                ($(self.$index.combine(other.$index),)+)
            }
        }
    };
}

tuple_monoid!(A 0, B 1);
tuple_monoid!(A 0, B 1, C 2);
tuple_monoid!(A 0, B 1, C 2, D 3);
