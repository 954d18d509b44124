use std::fmt;

use crate::{
    codec::{BinCodec, HeaderReader, ParseError},
    error::{invalid_bins, Result},
};

use super::{check_slice, Bin, Bin1D, IntervalBin, SliceableBin, UniformBin, VariableBin};

/// One bin per integer in the inclusive range `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntBins {
    lo: i64,
    hi: i64,
}

impl IntBins {
    /// Bins for every integer from `lo` to `hi`, both included.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if hi < lo {
            return Err(invalid_bins(format!(
                "upper bound {hi} is below lower bound {lo}"
            )));
        }
        if hi.checked_sub(lo).and_then(|span| span.checked_add(1)).is_none() {
            return Err(invalid_bins("integer range is too wide"));
        }
        Ok(Self { lo, hi })
    }

    /// Lowest binned integer
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Highest binned integer
    pub fn hi(&self) -> i64 {
        self.hi
    }
}

impl Bin for IntBins {
    type Value = i64;

    fn n_bins(&self) -> usize {
        (self.hi - self.lo + 1) as usize
    }

    #[inline]
    fn to_index(&self, value: &i64) -> i64 {
        value.saturating_sub(self.lo)
    }

    #[inline]
    fn from_index(&self, index: usize) -> i64 {
        self.lo + index as i64
    }
}

impl IntervalBin for IntBins {
    fn bin_interval(&self, index: usize) -> (i64, i64) {
        let value = self.from_index(index);
        (value, value)
    }
}

impl Bin1D for IntBins {
    fn lower_limit(&self) -> i64 {
        self.lo
    }

    fn upper_limit(&self) -> i64 {
        self.hi
    }
}

impl SliceableBin for IntBins {
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self> {
        check_slice(first, last, self.n_bins())?;
        Ok(Self {
            lo: self.from_index(first),
            hi: self.from_index(last),
        })
    }
}

impl VariableBin for IntBins {
    fn bin_size(&self, _index: usize) -> i64 {
        1
    }
}

impl UniformBin for IntBins {
    fn bin_width(&self) -> i64 {
        1
    }
}

impl BinCodec for IntBins {
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# IntBins")?;
        writeln!(out, "# Low  = {}", self.lo)?;
        writeln!(out, "# High = {}", self.hi)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> std::result::Result<Self, ParseError> {
        reader.expect_keyword("IntBins")?;
        let lo = reader.parse_field("Low")?;
        let hi = reader.parse_field("High")?;
        Self::new(lo, hi).map_err(|e| reader.invalid_bins(e))
    }

    fn write_value<W: fmt::Write>(&self, value: &i64, out: &mut W) -> fmt::Result {
        write!(out, "{value}")
    }
}

impl fmt::Display for IntBins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}

#[cfg(test)]
mod test {
    use super::IntBins;
    use crate::{
        binning::{Bin, Bin1D, IntervalBin, SliceableBin},
        HistogramError,
    };

    #[test]
    fn indices() {
        let bins = IntBins::new(-2, 3).expect("valid");
        assert_eq!(6, bins.n_bins());
        assert_eq!(0, bins.to_index(&-2));
        assert_eq!(5, bins.to_index(&3));
        assert_eq!(-1, bins.to_index(&-3));
        assert_eq!(6, bins.to_index(&4));
        assert!(!bins.in_range(&4));
        assert!(bins.in_range(&0));
        assert_eq!(-2, bins.from_index(0));
        assert_eq!((1, 1), bins.bin_interval(3));
        assert_eq!((-2, 3), (bins.lower_limit(), bins.upper_limit()));
    }

    #[test]
    fn exact_round_trip() {
        let bins = IntBins::new(-50, 50).expect("valid");
        for value in -50..=50 {
            assert_eq!(value, bins.from_index(bins.to_index(&value) as usize));
        }
        for index in 0..bins.n_bins() {
            assert_eq!(index as i64, bins.to_index(&bins.from_index(index)));
        }
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let bins = IntBins::new(0, 9).expect("valid");
        assert!(!bins.in_range(&i64::MIN));
        assert!(!bins.in_range(&i64::MAX));
        assert!(bins.to_index(&i64::MIN) < 0);
    }

    #[test]
    fn construction() {
        assert!(IntBins::new(4, 4).is_ok());
        assert!(matches!(
            IntBins::new(4, 3),
            Err(HistogramError::InvalidBins(_))
        ));
        assert!(IntBins::new(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn slicing() {
        let bins = IntBins::new(10, 19).expect("valid");
        let sliced = bins.slice_bin(2, 4).expect("in range");
        assert_eq!(IntBins::new(12, 14).expect("valid"), sliced);
        assert_eq!(3, sliced.n_bins());
        assert!(bins.slice_bin(2, 10).is_err());
        assert!(bins.slice_bin(5, 4).is_err());
    }
}
