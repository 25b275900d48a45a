mod ops;
mod square;
mod util;

pub(crate) use ops::matmul;
pub(crate) use square::{det_in_place, require_square};

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{check_index, check_same, check_size, MatError, Result};
use crate::storage::Storage;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// General `rows x cols` matrix.
///
/// Row-major storage; every element is stored explicitly and may be set to
/// any value. Algebra operations take operands by reference (any
/// [`MatrixRef`]) and write into `self`, the receiver.
///
/// # Examples
///
/// ```
/// use numat::DenseMatrix;
///
/// let a = DenseMatrix::new(2, 3, Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
/// assert_eq!(a.at(0, 2).unwrap(), 3.0);
/// assert_eq!(a.dims(), (2, 3));
///
/// let mut c = DenseMatrix::empty();
/// c.mul(&a, &a.transpose()).unwrap();
/// assert_eq!(c.at(0, 0).unwrap(), 14.0);
/// ```
pub struct DenseMatrix<T> {
    data: Storage<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Create a `rows x cols` matrix from row-major values, or zeros when
    /// `data` is `None`.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let zero = DenseMatrix::<f64>::new(5, 6, None).unwrap();
    /// assert_eq!(zero.at(4, 5).unwrap(), 0.0);
    ///
    /// let m = DenseMatrix::new(3, 4, Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0,
    ///                                       7.0, 8.0, 9.0, 10.0, 11.0, 12.0])).unwrap();
    /// assert_eq!(m.at(1, 0).unwrap(), 5.0);
    ///
    /// assert!(DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0])).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Option<&[T]>) -> Result<Self> {
        match data {
            Some(values) => Self::from_vec(rows, cols, values.to_vec()),
            None => Self::zeros(rows, cols),
        }
    }

    /// Create a zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let size = check_size(rows, cols)?;
        Ok(Self::from_parts(
            rows,
            cols,
            Storage::from_vec(vec![T::zero(); size]),
        ))
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let size = check_size(rows, cols)?;
        if data.len() != size {
            return Err(MatError::InitializerLength {
                expected: size,
                got: data.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, Storage::from_vec(data)))
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let id = DenseMatrix::<f64>::eye(3).unwrap();
    /// assert_eq!(id.at(1, 1).unwrap(), 1.0);
    /// assert_eq!(id.at(0, 1).unwrap(), 0.0);
    /// ```
    pub fn eye(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// assert_eq!(m.at(2, 1).unwrap(), 7.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        let size = check_size(rows, cols)?;
        let mut data = Vec::with_capacity(size);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self::from_parts(rows, cols, Storage::from_vec(data)))
    }

    /// Copy any matrix variant into a dense matrix.
    pub fn from_matrix<M: MatrixRef<T> + ?Sized>(m: &M) -> Self {
        let (rows, cols) = m.dims();
        Self::from_parts(rows, cols, Storage::from_vec(row_major(m)))
    }
}

impl<T: Copy> DenseMatrix<T> {
    /// An empty (0x0) receiver.
    ///
    /// Only useful as the destination of an algebra operation: it adopts the
    /// shape of the first result written into it.
    pub fn empty() -> Self {
        Self::from_parts(0, 0, Storage::from_vec(Vec::new()))
    }

    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Storage<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    pub(crate) fn storage(&self) -> &Storage<T> {
        &self.data
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether this is an empty receiver.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Checked element read.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        check_index(self.dims(), row, col)?;
        Ok(self.data.get(row * self.ncols + col))
    }

    /// Checked element write.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let mut big = DenseMatrix::<f64>::zeros(100, 100).unwrap();
    /// for i in 0..100 {
    ///     big.set(i, i, 1.0).unwrap();
    /// }
    /// assert_eq!(big.at(42, 42).unwrap(), 1.0);
    /// assert!(big.set(100, 0, 1.0).is_err());
    /// ```
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(self.dims(), row, col)?;
        self.data.set(row * self.ncols + col, value);
        Ok(())
    }

    /// Copy the elements out in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Turn the matrix back into an empty receiver.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Check that the receiver can hold a result of `shape`.
    pub(crate) fn check_receiver(&self, op: &'static str, shape: (usize, usize)) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        check_same(op, shape, self.dims())
    }

    /// Write a row-major result into the receiver, adopting `shape` when the
    /// receiver is empty. Call [`check_receiver`](Self::check_receiver) first.
    pub(crate) fn assign(&mut self, op: &'static str, shape: (usize, usize), data: Vec<T>) {
        debug_assert_eq!(data.len(), shape.0 * shape.1);
        if self.is_empty() {
            log::debug!("{}: empty receiver takes shape {}x{}", op, shape.0, shape.1);
            *self = Self::from_parts(shape.0, shape.1, Storage::from_vec(data));
        } else {
            debug_assert_eq!(shape, self.dims());
            if self.data.is_shared() {
                log::trace!("{}: writing through shared storage", op);
            }
            self.data.write_all(&data);
        }
    }
}

/// Materialize any matrix in row-major order.
pub(crate) fn row_major<T, M: MatrixRef<T> + ?Sized>(m: &M) -> Vec<T> {
    let (rows, cols) = m.dims();
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            data.push(m.get(i, j));
        }
    }
    data
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: Copy> MatrixRef<T> for DenseMatrix<T> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        self.data.get(row * self.ncols + col)
    }
}

impl<T: Copy> MatrixMut<T> for DenseMatrix<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        DenseMatrix::set(self, row, col, value)
    }
}

// ── Clone / PartialEq / Debug ───────────────────────────────────────

impl<T: Copy> Clone for DenseMatrix<T> {
    /// Deep copy; the clone never aliases `self`.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for DenseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.data.to_vec() == other.data.to_vec()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseMatrix")
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zeros() {
        let m = DenseMatrix::<f64>::zeros(3, 4).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m.at(i, j).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn new_row_major() {
        let init: Vec<f64> = (1..=12).map(|x| x as f64).collect();
        let m = DenseMatrix::new(3, 4, Some(init.as_slice())).unwrap();
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m.at(i, j).unwrap(), init[i * 4 + j]);
            }
        }
    }

    #[test]
    fn new_wrong_length() {
        let err = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0])).unwrap_err();
        assert_eq!(err, MatError::InitializerLength { expected: 4, got: 3 });
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            DenseMatrix::<f64>::zeros(0, 3).unwrap_err(),
            MatError::ZeroDimension { rows: 0, cols: 3 }
        );
        assert!(DenseMatrix::<f64>::new(3, 0, None).is_err());
    }

    #[test]
    fn oversized_shape_rejected() {
        let rows = usize::MAX / 2 + 1;
        let err = DenseMatrix::<f64>::zeros(rows, 2).unwrap_err();
        assert_eq!(err, MatError::SizeOverflow { rows, cols: 2 });
        assert_eq!(err.kind(), ErrorKind::Dimension);
        assert!(DenseMatrix::from_vec(rows, 2, vec![1.0]).is_err());
        assert!(DenseMatrix::from_fn(2, rows, |_, _| 0.0).is_err());
    }

    #[test]
    fn eye() {
        let m = DenseMatrix::<f64>::eye(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.at(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn set_and_bounds() {
        let mut m = DenseMatrix::<f64>::zeros(2, 2).unwrap();
        m.set(0, 1, 5.0).unwrap();
        assert_eq!(m.at(0, 1).unwrap(), 5.0);
        assert_eq!(m.set(2, 0, 1.0).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(m.at(0, 2).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn matrix_ref_trait() {
        let m = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + m.get(i, i);
            }
            sum
        }
        assert_eq!(trace(&m), 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let m = DenseMatrix::<f64>::zeros(2, 2).unwrap();
        let _ = MatrixRef::get(&m, 0, 2);
    }

    #[test]
    fn clone_is_independent() {
        let a = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(0, 0, 9.0).unwrap();
        assert_eq!(a.at(0, 0).unwrap(), 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_receiver() {
        let mut m = DenseMatrix::<f64>::empty();
        assert!(m.is_empty());
        assert_eq!(m.dims(), (0, 0));
        assert!(m.check_receiver("test", (3, 3)).is_ok());
        m.assign("test", (1, 2), vec![1.0, 2.0]);
        assert_eq!(m.dims(), (1, 2));
        assert!(m.check_receiver("test", (3, 3)).is_err());
        m.reset();
        assert!(m.is_empty());
    }
}
