use crate::{
    binning::{Bin, Bins2D},
    error::{HistogramError, Result},
};

use super::{Contents, Histogram};

/// Axis views of a two dimensional histogram. Outliers never carry over:
/// a 2D outlier count cannot be split between the cells of one axis.
impl<X, Y, T> Histogram<Bins2D<X, Y>, T>
where
    X: Bin + Clone,
    Y: Bin + Clone,
{
    /// The row at Y index `iy`, as a histogram over X. Rows are contiguous,
    /// so the result shares this histogram's storage.
    pub fn slice_along_x(&self, iy: usize) -> Result<Histogram<X, T>> {
        let ny = self.bin.n_bins_y();
        if ny <= iy {
            return Err(HistogramError::IndexOutOfBounds { index: iy, len: ny });
        }
        Ok(self.row(iy))
    }

    /// The column at X index `ix`, as a histogram over Y. Columns are
    /// strided, so their `n_bins_y` cells are copied out.
    pub fn slice_along_y(&self, ix: usize) -> Result<Histogram<Y, T>>
    where
        T: Clone,
    {
        let nx = self.bin.n_bins_x();
        if nx <= ix {
            return Err(HistogramError::IndexOutOfBounds { index: ix, len: nx });
        }
        Ok(self.column(ix))
    }

    /// Every row in Y order, paired with its Y value.
    pub fn slices_along_x(&self) -> Vec<(Y::Value, Histogram<X, T>)> {
        let y = self.bin.y();
        (0..y.n_bins())
            .map(|iy| (y.from_index(iy), self.row(iy)))
            .collect()
    }

    /// Every column in X order, paired with its X value.
    pub fn slices_along_y(&self) -> Vec<(X::Value, Histogram<Y, T>)>
    where
        T: Clone,
    {
        let x = self.bin.x();
        (0..x.n_bins())
            .map(|ix| (x.from_index(ix), self.column(ix)))
            .collect()
    }

    /// Collapse the X axis: `f` reduces each row to one cell of a histogram
    /// over Y.
    pub fn reduce_along_x<U>(&self, mut f: impl FnMut(&Histogram<X, T>) -> U) -> Histogram<Y, U> {
        let contents: Contents<U> = (0..self.bin.n_bins_y())
            .map(|iy| f(&self.row(iy)))
            .collect();
        Histogram::from_checked_parts(self.bin.y().clone(), None, contents)
    }

    /// Collapse the Y axis: `f` reduces each column to one cell of a
    /// histogram over X.
    pub fn reduce_along_y<U>(&self, mut f: impl FnMut(&Histogram<Y, T>) -> U) -> Histogram<X, U>
    where
        T: Clone,
    {
        let contents: Contents<U> = (0..self.bin.n_bins_x())
            .map(|ix| f(&self.column(ix)))
            .collect();
        Histogram::from_checked_parts(self.bin.x().clone(), None, contents)
    }

    fn row(&self, iy: usize) -> Histogram<X, T> {
        let nx = self.bin.n_bins_x();
        let start = self.bin.linear_index(0, iy);
        Histogram::from_checked_parts(
            self.bin.x().clone(),
            None,
            self.contents.window(start..start + nx),
        )
    }

    fn column(&self, ix: usize) -> Histogram<Y, T>
    where
        T: Clone,
    {
        let contents: Contents<T> = (0..self.bin.n_bins_y())
            .map(|iy| self.contents[self.bin.linear_index(ix, iy)].clone())
            .collect();
        Histogram::from_checked_parts(self.bin.y().clone(), None, contents)
    }
}
