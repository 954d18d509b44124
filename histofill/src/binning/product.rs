use std::fmt;

use crate::codec::{BinCodec, HeaderReader, ParseError};

use super::Bin;

/// One of the two axes of a [`Bins2D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first axis; varies fastest in the linear index
    X,
    /// The second axis
    Y,
}

/// Product of two binnings. Cell `(ix, iy)` has linear index
/// `ix + iy * n_bins_x`, so X varies fastest.
///
/// A value outside either axis is outside the product: it maps to `-1` if
/// either component is below its axis and to `n_bins()` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bins2D<X, Y> {
    x: X,
    y: Y,
}

impl<X: Bin, Y: Bin> Bins2D<X, Y> {
    /// Combine two binnings
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// Binning of the X axis
    pub fn x(&self) -> &X {
        &self.x
    }

    /// Binning of the Y axis
    pub fn y(&self) -> &Y {
        &self.y
    }

    /// Split into the two axis binnings
    pub fn into_axes(self) -> (X, Y) {
        (self.x, self.y)
    }

    /// Number of bins along X
    pub fn n_bins_x(&self) -> usize {
        self.x.n_bins()
    }

    /// Number of bins along Y
    pub fn n_bins_y(&self) -> usize {
        self.y.n_bins()
    }

    /// Number of bins along `axis`
    pub fn n_bins_along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.n_bins_x(),
            Axis::Y => self.n_bins_y(),
        }
    }

    /// Per-axis indices of a value, each possibly out of range.
    pub fn to_index_2d(&self, value: &(X::Value, Y::Value)) -> (i64, i64) {
        (self.x.to_index(&value.0), self.y.to_index(&value.1))
    }

    /// Linear index of cell `(ix, iy)`
    #[inline]
    pub fn linear_index(&self, ix: usize, iy: usize) -> usize {
        ix + iy * self.n_bins_x()
    }

    /// Cell `(ix, iy)` of a linear index
    #[inline]
    pub fn split_index(&self, index: usize) -> (usize, usize) {
        let nx = self.n_bins_x();
        (index % nx, index / nx)
    }
}

impl<X: Bin, Y: Bin> Bin for Bins2D<X, Y> {
    type Value = (X::Value, Y::Value);

    fn n_bins(&self) -> usize {
        self.x.n_bins() * self.y.n_bins()
    }

    fn to_index(&self, value: &Self::Value) -> i64 {
        let (ix, iy) = self.to_index_2d(value);
        if ix < 0 || iy < 0 {
            return -1;
        }
        let (nx, ny) = (self.n_bins_x() as u64, self.n_bins_y() as u64);
        if nx <= ix as u64 || ny <= iy as u64 {
            return self.n_bins() as i64;
        }
        self.linear_index(ix as usize, iy as usize) as i64
    }

    fn from_index(&self, index: usize) -> Self::Value {
        let (ix, iy) = self.split_index(index);
        (self.x.from_index(ix), self.y.from_index(iy))
    }
}

impl<X: BinCodec, Y: BinCodec> BinCodec for Bins2D<X, Y> {
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# Bins2D")?;
        writeln!(out, "# X")?;
        self.x.write_header(out)?;
        writeln!(out, "# Y")?;
        self.y.write_header(out)
    }

    fn read_header(reader: &mut HeaderReader<'_>) -> Result<Self, ParseError> {
        reader.expect_keyword("Bins2D")?;
        reader.expect_keyword("X")?;
        let x = X::read_header(reader)?;
        reader.expect_keyword("Y")?;
        let y = Y::read_header(reader)?;
        Ok(Self::new(x, y))
    }

    fn write_value<W: fmt::Write>(&self, value: &Self::Value, out: &mut W) -> fmt::Result {
        self.x.write_value(&value.0, out)?;
        out.write_char('\t')?;
        self.y.write_value(&value.1, out)
    }
}

impl<X: BinCodec, Y: BinCodec> fmt::Display for Bins2D<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)
    }
}
