use alloc::vec::Vec;

use crate::error::{check_same, MatError, Result};
use crate::storage::Storage;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

use super::DenseMatrix;

// ── Rows and columns ────────────────────────────────────────────────

impl<T: Copy> DenseMatrix<T> {
    fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.nrows() {
            return Err(MatError::IndexOutOfRange {
                row: i,
                col: 0,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<()> {
        if j >= self.ncols() {
            return Err(MatError::IndexOutOfRange {
                row: 0,
                col: j,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Copy of row `i`.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
    /// assert_eq!(m.row(0).unwrap(), vec![1.0, 2.0, 3.0]);
    /// assert!(m.row(3).is_err());
    /// ```
    pub fn row(&self, i: usize) -> Result<Vec<T>> {
        self.check_row(i)?;
        Ok(self.row_storage(i).to_vec())
    }

    /// Copy of column `j`.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
    /// assert_eq!(m.col(1).unwrap(), vec![2.0, 5.0, 8.0]);
    /// ```
    pub fn col(&self, j: usize) -> Result<Vec<T>> {
        self.check_col(j)?;
        Ok(self.col_storage(j).to_vec())
    }

    /// Overwrite row `i` from `values`, which must hold `ncols` elements.
    pub fn set_row(&mut self, i: usize, values: &[T]) -> Result<()> {
        self.check_row(i)?;
        check_same("set_row", (self.ncols(), 1), (values.len(), 1))?;
        self.row_storage(i).write_all(values);
        Ok(())
    }

    /// Overwrite column `j` from `values`, which must hold `nrows` elements.
    pub fn set_col(&mut self, j: usize, values: &[T]) -> Result<()> {
        self.check_col(j)?;
        check_same("set_col", (self.nrows(), 1), (values.len(), 1))?;
        self.col_storage(j).write_all(values);
        Ok(())
    }

    /// Row `i` as a vector view sharing storage with the matrix.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::<f64>::zeros(2, 3).unwrap();
    /// let mut r = m.row_view(1).unwrap();
    /// r.set_vec(2, 4.0).unwrap();
    /// assert_eq!(m.at(1, 2).unwrap(), 4.0);
    /// ```
    pub fn row_view(&self, i: usize) -> Result<Vector<T>> {
        self.check_row(i)?;
        log::debug!("row view {} of {}x{} matrix", i, self.nrows(), self.ncols());
        Ok(Vector::from_storage(self.row_storage(i)))
    }

    /// Column `j` as a vector view sharing storage with the matrix.
    pub fn col_view(&self, j: usize) -> Result<Vector<T>> {
        self.check_col(j)?;
        log::debug!("column view {} of {}x{} matrix", j, self.nrows(), self.ncols());
        Ok(Vector::from_storage(self.col_storage(j)))
    }

    fn row_storage(&self, i: usize) -> Storage<T> {
        self.storage().window(i * self.ncols(), self.ncols(), 1)
    }

    fn col_storage(&self, j: usize) -> Storage<T> {
        self.storage().window(j, self.nrows(), self.ncols())
    }

    /// Apply `f` to every element, producing a new matrix.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::new(1, 3, Some(&[1.0, -2.0, 3.0])).unwrap();
    /// let a = m.map(|x: f64| x.abs());
    /// assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> DenseMatrix<U> {
        let data = self.to_vec().into_iter().map(f).collect();
        DenseMatrix::from_parts(self.nrows(), self.ncols(), Storage::from_vec(data))
    }
}

// ── Reductions ──────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
    /// assert_eq!(m.sum().unwrap(), 45.0);
    /// ```
    pub fn sum(&self) -> Result<T> {
        crate::reduce::sum(self)
    }
}

impl<T: FloatScalar> DenseMatrix<T> {
    /// Smallest element.
    pub fn min(&self) -> Result<T> {
        crate::reduce::min(self)
    }

    /// Largest element.
    pub fn max(&self) -> Result<T> {
        crate::reduce::max(self)
    }

    /// Frobenius norm.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::new(2, 2, Some(&[1.0_f64, 2.0, 3.0, 4.0])).unwrap();
    /// assert!((m.norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        crate::reduce::norm(self)
    }
}
