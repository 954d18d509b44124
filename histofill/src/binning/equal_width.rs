use std::fmt;

use crate::{
    codec::{BinCodec, HeaderReader, ParseError},
    error::{invalid_bins, Result},
};

use super::{
    check_slice, float_index, Bin, Bin1D, IntBins, IntervalBin, SliceableBin, UniformBin,
    VariableBin,
};

/// `n` equal-width bins covering `[lo, lo + n * width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWidthBins {
    lo: f64,
    width: f64,
    n: usize,
}

impl EqualWidthBins {
    /// `n` bins splitting `[lo, hi)` evenly.
    pub fn new(lo: f64, n: usize, hi: f64) -> Result<Self> {
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(invalid_bins(format!("bounds {lo} and {hi} must be finite")));
        }
        if hi <= lo {
            return Err(invalid_bins(format!(
                "upper bound {hi} must be above lower bound {lo}"
            )));
        }
        if n == 0 {
            return Err(invalid_bins("at least one bin is required"));
        }
        Self::with_width(lo, (hi - lo) / n as f64, n)
    }

    /// `n` bins of `width` starting at `lo`.
    pub fn with_width(lo: f64, width: f64, n: usize) -> Result<Self> {
        if !(lo.is_finite() && width.is_finite()) {
            return Err(invalid_bins(format!(
                "lower bound {lo} and width {width} must be finite"
            )));
        }
        if width <= 0.0 {
            return Err(invalid_bins(format!("width {width} must be positive")));
        }
        if n == 0 {
            return Err(invalid_bins("at least one bin is required"));
        }
        Ok(Self { lo, width, n })
    }

    /// Lower edge of bin 0
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper edge of the last bin
    pub fn hi(&self) -> f64 {
        self.edge(self.n)
    }

    #[inline]
    fn edge(&self, index: usize) -> f64 {
        self.lo + index as f64 * self.width
    }
}

impl Bin for EqualWidthBins {
    type Value = f64;

    fn n_bins(&self) -> usize {
        self.n
    }

    #[inline]
    fn to_index(&self, value: &f64) -> i64 {
        float_index((value - self.lo) / self.width, self.n)
    }

    #[inline]
    fn from_index(&self, index: usize) -> f64 {
        self.lo + (index as f64 + 0.5) * self.width
    }
}

impl IntervalBin for EqualWidthBins {
    fn bin_interval(&self, index: usize) -> (f64, f64) {
        (self.edge(index), self.edge(index + 1))
    }
}

impl Bin1D for EqualWidthBins {
    fn lower_limit(&self) -> f64 {
        self.lo
    }

    fn upper_limit(&self) -> f64 {
        self.hi()
    }
}

impl SliceableBin for EqualWidthBins {
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self> {
        check_slice(first, last, self.n)?;
        Ok(Self {
            lo: self.edge(first),
            width: self.width,
            n: last - first + 1,
        })
    }
}

impl VariableBin for EqualWidthBins {
    fn bin_size(&self, _index: usize) -> f64 {
        self.width
    }
}

impl UniformBin for EqualWidthBins {
    fn bin_width(&self) -> f64 {
        self.width
    }
}

/// Unit-width bins centred on each integer.
impl From<IntBins> for EqualWidthBins {
    fn from(bins: IntBins) -> Self {
        Self {
            lo: bins.lo() as f64 - 0.5,
            width: 1.0,
            n: bins.n_bins(),
        }
    }
}

impl BinCodec for EqualWidthBins {
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# EqualWidthBins")?;
        writeln!(out, "# Base  = {}", self.lo)?;
        writeln!(out, "# Width = {}", self.width)?;
        writeln!(out, "# Bins  = {}", self.n)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> std::result::Result<Self, ParseError> {
        reader.expect_keyword("EqualWidthBins")?;
        let lo = reader.parse_field("Base")?;
        let width = reader.parse_field("Width")?;
        let n = reader.parse_field("Bins")?;
        Self::with_width(lo, width, n).map_err(|e| reader.invalid_bins(e))
    }

    fn write_value<W: fmt::Write>(&self, value: &f64, out: &mut W) -> fmt::Result {
        write!(out, "{value}")
    }
}

impl fmt::Display for EqualWidthBins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}
