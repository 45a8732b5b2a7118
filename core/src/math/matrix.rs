use crate::prelude::{BenchError, BenchResult};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

/// Dense, row-major, heap-backed square matrix.
pub type SquareMatrix = Array2<i32>;

/// Owns the three same-shaped matrices of a benchmark run.
///
/// Entries are `i32`. The reference fill at N = 300 peaks around 2.2e7, far
/// below `i32::MAX`, but nothing stops larger dimensions from overflowing
/// during accumulation, and overflow is not detected. Debug builds panic
/// with "attempt to multiply with overflow" (or add); release builds wrap
/// silently. The driver only cross-checks the reported cell against
/// [`expected_cell`](crate::math::closed_form::expected_cell).
#[derive(Debug, Clone)]
pub struct MatrixStore {
    dimension: usize,
    left: SquareMatrix,
    right: SquareMatrix,
    result: SquareMatrix,
}

impl MatrixStore {
    /// Allocates three zeroed `dimension x dimension` matrices.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            left: Array2::zeros((dimension, dimension)),
            right: Array2::zeros((dimension, dimension)),
            result: Array2::zeros((dimension, dimension)),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn left(&self) -> ArrayView2<'_, i32> {
        self.left.view()
    }

    pub fn right(&self) -> ArrayView2<'_, i32> {
        self.right.view()
    }

    pub fn result(&self) -> ArrayView2<'_, i32> {
        self.result.view()
    }

    /// Reads `result[row][col]`, or `None` outside the matrix.
    pub fn cell(&self, row: usize, col: usize) -> Option<i32> {
        self.result.get((row, col)).copied()
    }

    /// Read-only operands alongside the writable product.
    pub fn operands_mut(
        &mut self,
    ) -> (ArrayView2<'_, i32>, ArrayView2<'_, i32>, ArrayViewMut2<'_, i32>) {
        (self.left.view(), self.right.view(), self.result.view_mut())
    }

    pub(crate) fn matrices_mut(
        &mut self,
    ) -> (&mut SquareMatrix, &mut SquareMatrix, &mut SquareMatrix) {
        (&mut self.left, &mut self.right, &mut self.result)
    }
}

pub struct MatrixHelper;

impl MatrixHelper {
    /// Textbook `i, j, k` multiply accumulating `lhs * rhs` into `out`.
    ///
    /// All three views must be square and of the same dimension. `out` is
    /// added to, not overwritten. Arithmetic is plain `i32`: it panics on
    /// overflow in debug builds and wraps in release builds.
    pub fn multiply_naive(
        lhs: ArrayView2<i32>,
        rhs: ArrayView2<i32>,
        mut out: ArrayViewMut2<i32>,
    ) -> BenchResult<()> {
        let n = lhs.nrows();
        for (rows, cols) in [lhs.dim(), rhs.dim(), out.dim()] {
            if rows != n || cols != n {
                return Err(BenchError::DimensionMismatch {
                    expected: n,
                    actual: if rows != n { rows } else { cols },
                });
            }
        }

        for i in 0..n {
            for j in 0..n {
                let mut acc = out[[i, j]];
                for k in 0..n {
                    acc += lhs[[i, k]] * rhs[[k, j]];
                }
                out[[i, j]] = acc;
            }
        }
        Ok(())
    }
}
