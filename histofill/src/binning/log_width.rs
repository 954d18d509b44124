use std::fmt;

use crate::{
    codec::{BinCodec, HeaderReader, ParseError},
    error::{invalid_bins, Result},
};

use super::{check_slice, float_index, Bin, Bin1D, IntervalBin, SliceableBin, VariableBin};

/// `n` bins whose edges grow geometrically: bin `i` covers
/// `[lo * ratio^i, lo * ratio^(i + 1))`.
///
/// The covered interval never contains zero. Negative intervals work too;
/// their ratio is below 1 so that edges still increase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogWidthBins {
    lo: f64,
    ratio: f64,
    n: usize,
}

impl LogWidthBins {
    /// `n` bins between `lo` and `hi`, which must share a sign.
    pub fn new(lo: f64, n: usize, hi: f64) -> Result<Self> {
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(invalid_bins(format!("bounds {lo} and {hi} must be finite")));
        }
        if lo * hi <= 0.0 {
            return Err(invalid_bins(format!(
                "log bins between {lo} and {hi} would include zero"
            )));
        }
        if hi <= lo {
            return Err(invalid_bins(format!(
                "upper bound {hi} must be above lower bound {lo}"
            )));
        }
        if n == 0 {
            return Err(invalid_bins("at least one bin is required"));
        }
        Self::with_ratio(lo, (hi / lo).powf(1.0 / n as f64), n)
    }

    /// `n` bins starting at `lo`, each edge `ratio` times the previous one.
    pub fn with_ratio(lo: f64, ratio: f64, n: usize) -> Result<Self> {
        if !(lo.is_finite() && ratio.is_finite()) || lo == 0.0 {
            return Err(invalid_bins(format!(
                "lower bound {lo} must be finite and non-zero, ratio {ratio} finite"
            )));
        }
        let increasing = if lo > 0.0 { 1.0 < ratio } else { 0.0 < ratio && ratio < 1.0 };
        if !increasing {
            return Err(invalid_bins(format!(
                "ratio {ratio} does not produce increasing edges from {lo}"
            )));
        }
        if n == 0 {
            return Err(invalid_bins("at least one bin is required"));
        }
        Ok(Self { lo, ratio, n })
    }

    /// Lower edge of bin 0
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper edge of the last bin
    pub fn hi(&self) -> f64 {
        self.edge(self.n)
    }

    /// Ratio between successive edges
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    fn edge(&self, index: usize) -> f64 {
        self.lo * self.ratio.powf(index as f64)
    }
}

impl Bin for LogWidthBins {
    type Value = f64;

    fn n_bins(&self) -> usize {
        self.n
    }

    #[inline]
    fn to_index(&self, value: &f64) -> i64 {
        let quotient = value / self.lo;
        if 0.0 < quotient {
            float_index(quotient.ln() / self.ratio.ln(), self.n)
        } else if *value < self.lo {
            -1
        } else {
            // Other side of zero above the range, or NaN.
            self.n as i64
        }
    }

    #[inline]
    fn from_index(&self, index: usize) -> f64 {
        self.lo * self.ratio.powf(index as f64 + 0.5)
    }
}

impl IntervalBin for LogWidthBins {
    fn bin_interval(&self, index: usize) -> (f64, f64) {
        (self.edge(index), self.edge(index + 1))
    }
}

impl Bin1D for LogWidthBins {
    fn lower_limit(&self) -> f64 {
        self.lo
    }

    fn upper_limit(&self) -> f64 {
        self.hi()
    }
}

impl SliceableBin for LogWidthBins {
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self> {
        check_slice(first, last, self.n)?;
        Ok(Self {
            lo: self.edge(first),
            ratio: self.ratio,
            n: last - first + 1,
        })
    }
}

impl VariableBin for LogWidthBins {
    fn bin_size(&self, index: usize) -> f64 {
        let (lower, upper) = self.bin_interval(index);
        upper - lower
    }
}

impl BinCodec for LogWidthBins {
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# LogWidthBins")?;
        writeln!(out, "# Base  = {}", self.lo)?;
        writeln!(out, "# Ratio = {}", self.ratio)?;
        writeln!(out, "# Bins  = {}", self.n)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> std::result::Result<Self, ParseError> {
        reader.expect_keyword("LogWidthBins")?;
        let lo = reader.parse_field("Base")?;
        let ratio = reader.parse_field("Ratio")?;
        let n = reader.parse_field("Bins")?;
        Self::with_ratio(lo, ratio, n).map_err(|e| reader.invalid_bins(e))
    }

    fn write_value<W: fmt::Write>(&self, value: &f64, out: &mut W) -> fmt::Result {
        write!(out, "{value}")
    }
}

impl fmt::Display for LogWidthBins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}
