use std::fmt;

use crate::{
    codec::{BinCodec, HeaderReader, ParseError},
    error::{invalid_bins, Result},
};

use super::{
    check_slice, Bin, Bin1D, IntBins, IntervalBin, SliceableBin, UniformBin, VariableBin,
};

/// Integer bins `step` values wide, starting at `base`.
///
/// Bin `i` holds `base + i * step ..= base + (i + 1) * step - 1`, and its
/// representative value is its first integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteppedIntBins {
    base: i64,
    step: i64,
    n: usize,
}

impl SteppedIntBins {
    /// Bins of width `step` from `base` up to and including the bin that
    /// holds `max`.
    pub fn new(base: i64, step: i64, max: i64) -> Result<Self> {
        if step <= 0 {
            return Err(invalid_bins(format!("step {step} must be positive")));
        }
        if max < base {
            return Err(invalid_bins(format!(
                "maximum {max} is below base {base}"
            )));
        }
        let span = max
            .checked_sub(base)
            .ok_or_else(|| invalid_bins("integer range is too wide"))?;
        Self::with_bins(base, step, (span / step) as usize + 1)
    }

    /// `n` bins of width `step` starting at `base`.
    pub fn with_bins(base: i64, step: i64, n: usize) -> Result<Self> {
        if step <= 0 {
            return Err(invalid_bins(format!("step {step} must be positive")));
        }
        if n == 0 {
            return Err(invalid_bins("at least one bin is required"));
        }
        let last = i64::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(step))
            .and_then(|span| span.checked_add(base));
        if last.is_none() {
            return Err(invalid_bins("integer range is too wide"));
        }
        Ok(Self { base, step, n })
    }

    /// First value of bin 0
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Width of each bin
    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Bin for SteppedIntBins {
    type Value = i64;

    fn n_bins(&self) -> usize {
        self.n
    }

    #[inline]
    fn to_index(&self, value: &i64) -> i64 {
        value.saturating_sub(self.base).div_euclid(self.step)
    }

    #[inline]
    fn from_index(&self, index: usize) -> i64 {
        self.base + index as i64 * self.step
    }
}

impl IntervalBin for SteppedIntBins {
    fn bin_interval(&self, index: usize) -> (i64, i64) {
        let lower = self.from_index(index);
        (lower, lower + self.step - 1)
    }
}

impl Bin1D for SteppedIntBins {
    fn lower_limit(&self) -> i64 {
        self.base
    }

    fn upper_limit(&self) -> i64 {
        self.base + self.n as i64 * self.step - 1
    }
}

impl SliceableBin for SteppedIntBins {
    fn slice_bin(&self, first: usize, last: usize) -> Result<Self> {
        check_slice(first, last, self.n)?;
        Ok(Self {
            base: self.from_index(first),
            step: self.step,
            n: last - first + 1,
        })
    }
}

impl VariableBin for SteppedIntBins {
    fn bin_size(&self, _index: usize) -> i64 {
        self.step
    }
}

impl UniformBin for SteppedIntBins {
    fn bin_width(&self) -> i64 {
        self.step
    }
}

impl From<IntBins> for SteppedIntBins {
    fn from(bins: IntBins) -> Self {
        Self {
            base: bins.lo(),
            step: 1,
            n: bins.n_bins(),
        }
    }
}

impl BinCodec for SteppedIntBins {
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# SteppedIntBins")?;
        writeln!(out, "# Base = {}", self.base)?;
        writeln!(out, "# Step = {}", self.step)?;
        writeln!(out, "# Bins = {}", self.n)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> std::result::Result<Self, ParseError> {
        reader.expect_keyword("SteppedIntBins")?;
        let base = reader.parse_field("Base")?;
        let step = reader.parse_field("Step")?;
        let n = reader.parse_field("Bins")?;
        Self::with_bins(base, step, n).map_err(|e| reader.invalid_bins(e))
    }

    fn write_value<W: fmt::Write>(&self, value: &i64, out: &mut W) -> fmt::Result {
        write!(out, "{value}")
    }
}

impl fmt::Display for SteppedIntBins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}
