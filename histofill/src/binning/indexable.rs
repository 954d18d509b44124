use std::{fmt, str::FromStr};

use crate::{
    codec::{BinCodec, HeaderReader, ParseError},
    error::{invalid_bins, Result},
};

use super::{check_slice, Bin, Bin1D, IntervalBin, SliceableBin};

/// A type with an injective projection onto the integers.
///
/// `deindex(x.index()) == x` must hold for every `x`, and `deindex` must
/// produce a value for every index between two projected values.
pub trait Indexable {
    /// Position of this value on the integer line
    fn index(&self) -> i64;
    /// Value at an integer position
    fn deindex(index: i64) -> Self;
}

macro_rules! indexable_integer {
    ($($t:ty),*) => {
        $(
            impl Indexable for $t {
                #[inline]
                fn index(&self) -> i64 {
                    *self as i64
                }

                #[inline]
                fn deindex(index: i64) -> Self {
                    index as $t
                }
            }
        )*
    };
}

indexable_integer!(i8, i16, i32, i64, u8, u16, u32);

impl Indexable for bool {
    fn index(&self) -> i64 {
        *self as i64
    }

    fn deindex(index: i64) -> Self {
        index != 0
    }
}

/// One bin per value between `lo` and `hi` inclusive, for any
/// [`Indexable`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBins<T> {
    lo: T,
    hi: T,
}

impl<T: Indexable> IndexBins<T> {
    /// Bins for every value from `lo` to `hi`, both included.
    pub fn new(lo: T, hi: T) -> Result<Self> {
        if hi.index() < lo.index() {
            return Err(invalid_bins(format!(
                "upper index {} is below lower index {}",
                hi.index(),
                lo.index()
            )));
        }
        if hi.index().checked_sub(lo.index()).and_then(|span| span.checked_add(1)).is_none() {
            return Err(invalid_bins("index range is too wide"));
        }
        Ok(Self { lo, hi })
    }

    /// First binned value
    pub fn lo(&self) -> &T {
        &self.lo
    }

    /// Last binned value
    pub fn hi(&self) -> &T {
        &self.hi
    }
}

impl<T: Indexable> Bin for IndexBins<T> {
    type Value = T;

    fn n_bins(&self) -> usize {
        (self.hi.index() - self.lo.index() + 1) as usize
    }

    #[inline]
    fn to_index(&self, value: &T) -> i64 {
        value.index().saturating_sub(self.lo.index())
    }

    #[inline]
    fn from_index(&self, index: usize) -> T {
        T::deindex(self.lo.index() + index as i64)
    }
}

impl<T: Indexable> IntervalBin for IndexBins<T> {
    fn bin_interval(&self, index: usize) -> (T, T) {
        (self.from_index(index), self.from_index(index))
    }
}

impl<T: Indexable> Bin1D for IndexBins<T> {
    fn lower_limit(&self) -> T {
        T::deindex(self.lo.index())
    }

    fn upper_limit(&self) -> T {
        T::deindex(self.hi.index())
    }
}

impl<T: Indexable> SliceableBin for IndexBins<T> {
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self> {
        check_slice(first, last, self.n_bins())?;
        Ok(Self {
            lo: self.from_index(first),
            hi: self.from_index(last),
        })
    }
}

impl<T> BinCodec for IndexBins<T>
where
    T: Indexable + fmt::Display + FromStr,
{
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# IndexBins")?;
        writeln!(out, "# Low  = {}", self.lo)?;
        writeln!(out, "# High = {}", self.hi)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> std::result::Result<Self, ParseError> {
        reader.expect_keyword("IndexBins")?;
        let lo = reader.parse_field("Low")?;
        let hi = reader.parse_field("High")?;
        Self::new(lo, hi).map_err(|e| reader.invalid_bins(e))
    }

    fn write_value<W: fmt::Write>(&self, value: &T, out: &mut W) -> fmt::Result {
        write!(out, "{value}")
    }
}

impl<T> fmt::Display for IndexBins<T>
where
    T: Indexable + fmt::Display + FromStr,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}
