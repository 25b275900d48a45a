use alloc::vec;
use core::fmt;

use crate::dense::DenseMatrix;
use crate::error::{check_index, check_nonzero, MatError, Result};
use crate::storage::Storage;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Square `n x n` matrix that stores only its diagonal.
///
/// Off-diagonal reads return zero and can never be written. A diagonal
/// matrix may also be a view onto the diagonal of another matrix (see
/// [`DenseMatrix::diag_view`]), in which case [`set_diag`](Self::set_diag)
/// writes through to the origin.
///
/// # Examples
///
/// ```
/// use numat::{DiagonalMatrix, MatrixRef};
///
/// let mut d = DiagonalMatrix::new(3, Some(&[1.0, 2.0, 3.0])).unwrap();
/// d.set_diag(1, 100.0).unwrap();
/// assert_eq!(d.get(1, 1), 100.0);
/// assert_eq!(d.get(0, 1), 0.0);
/// ```
pub struct DiagonalMatrix<T> {
    data: Storage<T>,
}

impl<T: Scalar> DiagonalMatrix<T> {
    /// Create an `n x n` diagonal matrix.
    ///
    /// When present, `data` must hold at least `n` values; the first `n`
    /// become the diagonal and any remainder is ignored. `None` gives a zero
    /// diagonal.
    ///
    /// ```
    /// use numat::DiagonalMatrix;
    /// let d = DiagonalMatrix::new(10, Some(&[1.0; 100])).unwrap();
    /// assert_eq!(d.diag(), 10);
    /// assert!(DiagonalMatrix::new(3, Some(&[1.0, 2.0])).is_err());
    /// ```
    pub fn new(n: usize, data: Option<&[T]>) -> Result<Self> {
        check_nonzero(n, n)?;
        let values = match data {
            Some(values) if values.len() < n => {
                return Err(MatError::InitializerLength {
                    expected: n,
                    got: values.len(),
                })
            }
            Some(values) => values[..n].to_vec(),
            None => vec![T::zero(); n],
        };
        Ok(Self::from_storage(Storage::from_vec(values)))
    }

    /// Copy into a dense matrix.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_matrix(self)
    }
}

impl<T: Copy> DiagonalMatrix<T> {
    pub(crate) fn from_storage(data: Storage<T>) -> Self {
        Self { data }
    }

    /// Length of the diagonal.
    #[inline]
    pub fn diag(&self) -> usize {
        self.data.len()
    }

    fn check(&self, i: usize) -> Result<()> {
        check_index((self.diag(), self.diag()), i, i)
    }

    /// The `i`-th diagonal entry.
    pub fn at_diag(&self, i: usize) -> Result<T> {
        self.check(i)?;
        Ok(self.data.get(i))
    }

    /// Set the `i`-th diagonal entry.
    pub fn set_diag(&mut self, i: usize, value: T) -> Result<()> {
        self.check(i)?;
        self.data.set(i, value);
        Ok(())
    }

    /// A diagonal matrix equals its transpose; returns a copy.
    pub fn transpose(&self) -> Self {
        self.clone()
    }

    /// View sharing storage with `self`.
    pub fn diag_view(&self) -> Self {
        Self::from_storage(self.data.window(0, self.diag(), 1))
    }

    /// Diagonal entries in order.
    pub fn to_vec(&self) -> alloc::vec::Vec<T> {
        self.data.to_vec()
    }
}

impl<T: Scalar> MatrixRef<T> for DiagonalMatrix<T> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.diag(), self.diag())
    }

    fn get(&self, row: usize, col: usize) -> T {
        let n = self.diag();
        assert!(
            row < n && col < n,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            n,
            n
        );
        if row == col {
            self.data.get(row)
        } else {
            T::zero()
        }
    }
}

impl<T: Scalar> MatrixMut<T> for DiagonalMatrix<T> {
    /// Only diagonal positions are writable.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(self.dims(), row, col)?;
        if row != col {
            return Err(MatError::StructuralZero {
                structure: "diagonal",
                row,
                col,
            });
        }
        self.set_diag(row, value)
    }
}

impl<T: Copy> Clone for DiagonalMatrix<T> {
    fn clone(&self) -> Self {
        Self::from_storage(self.data.clone())
    }
}

impl<T: Copy + PartialEq> PartialEq for DiagonalMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.to_vec() == other.data.to_vec()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for DiagonalMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiagonalMatrix").field(&self.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn first_n_values_used() {
        let init: alloc::vec::Vec<f64> = (1..=9).map(|x| x as f64).collect();
        let d = DiagonalMatrix::new(3, Some(init.as_slice())).unwrap();
        assert_eq!(d.to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(d.dims(), (3, 3));
    }

    #[test]
    fn short_initializer() {
        assert_eq!(
            DiagonalMatrix::new(4, Some(&[1.0, 2.0])).unwrap_err(),
            MatError::InitializerLength {
                expected: 4,
                got: 2
            }
        );
        assert_eq!(
            DiagonalMatrix::<f64>::new(0, None).unwrap_err().kind(),
            ErrorKind::Dimension
        );
    }

    #[test]
    fn off_diagonal_reads_zero() {
        let d = DiagonalMatrix::new(10, Some(&[1.0; 100])).unwrap();
        assert_eq!(d.diag(), 10);
        for i in 0..10 {
            for j in 0..10 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(d.get(i, j), expected);
            }
        }
    }

    #[test]
    fn set_diag_bounds() {
        let mut d = DiagonalMatrix::<f64>::new(10, None).unwrap();
        d.set_diag(1, 100.0).unwrap();
        assert_eq!(d.at(1, 1).unwrap(), 100.0);
        assert_eq!(d.set_diag(10, 1.0).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn structural_write_rejected() {
        let mut d = DiagonalMatrix::<f64>::new(3, None).unwrap();
        assert_eq!(
            d.set(0, 1, 5.0).unwrap_err(),
            MatError::StructuralZero {
                structure: "diagonal",
                row: 0,
                col: 1
            }
        );
        assert_eq!(d.set(3, 3, 5.0).unwrap_err().kind(), ErrorKind::Index);
        d.set(2, 2, 5.0).unwrap();
        assert_eq!(d.at_diag(2).unwrap(), 5.0);
    }

    #[test]
    fn transpose_copies_view_shares() {
        let d = DiagonalMatrix::new(2, Some(&[1.0, 2.0])).unwrap();
        let mut t = d.transpose();
        assert_eq!(t, d);
        t.set_diag(0, 9.0).unwrap();
        assert_eq!(d.at_diag(0).unwrap(), 1.0);

        let mut v = d.diag_view();
        v.set_diag(1, 7.0).unwrap();
        assert_eq!(d.at_diag(1).unwrap(), 7.0);
    }

    #[test]
    fn to_dense() {
        let d = DiagonalMatrix::new(2, Some(&[3.0, 4.0])).unwrap();
        assert_eq!(d.to_dense().to_vec(), vec![3.0, 0.0, 0.0, 4.0]);
    }
}
