use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::error::{check_index, Result};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that compare or take magnitudes
/// (`min`, `max`, `det`, `norm`, approximate equality).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access shared by every matrix variant.
///
/// Structural zeros (the empty triangle of a triangular matrix, the
/// off-diagonal of a diagonal matrix) are returned by value, so elements are
/// copied out rather than borrowed.
pub trait MatrixRef<T> {
    /// `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range. Use [`MatrixRef::at`] for a
    /// checked read.
    fn get(&self, row: usize, col: usize) -> T;

    #[inline]
    fn nrows(&self) -> usize {
        self.dims().0
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.dims().1
    }

    /// Whether the matrix is square.
    #[inline]
    fn is_square(&self) -> bool {
        let (r, c) = self.dims();
        r == c
    }

    /// Whether the matrix holds no elements (only empty receivers do).
    #[inline]
    fn is_empty(&self) -> bool {
        let (r, c) = self.dims();
        r == 0 || c == 0
    }

    /// Checked element read.
    ///
    /// ```
    /// use numat::{DenseMatrix, MatrixRef};
    /// let m = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
    /// assert_eq!(MatrixRef::at(&m, 1, 0).unwrap(), 3.0);
    /// assert!(MatrixRef::at(&m, 0, 2).is_err());
    /// ```
    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<T> {
        check_index(self.dims(), row, col)?;
        Ok(self.get(row, col))
    }
}

/// Checked element writes.
///
/// Each variant enforces its own structure: symmetric matrices mirror the
/// write, diagonal and triangular matrices refuse structural zeros.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;
}
