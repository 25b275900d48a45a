use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::dense::DenseMatrix;
use crate::diagonal::DiagonalMatrix;
use crate::error::{check_index, check_same, check_size, MatError, Result};
use crate::storage::Storage;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Square matrix with `M[i][j] == M[j][i]` for all `i, j`.
///
/// The upper triangle (diagonal included) is authoritative: initializer
/// values below the diagonal are discarded and replaced by their mirrors.
/// Every write through [`set_sym`](Self::set_sym) updates both halves.
///
/// # Examples
///
/// ```
/// use numat::{MatrixRef, SymmetricMatrix};
///
/// let mut s = SymmetricMatrix::new(3, Some(&[1.0, 2.0, 3.0,
///                                            4.0, 5.0, 6.0,
///                                            7.0, 8.0, 9.0])).unwrap();
/// assert_eq!(s.get(1, 0), 2.0);
///
/// s.set_sym(1, 0, -100.0).unwrap();
/// assert_eq!(s.get(0, 1), -100.0);
/// ```
pub struct SymmetricMatrix<T> {
    data: Storage<T>,
    n: usize,
}

impl<T: Scalar> SymmetricMatrix<T> {
    /// Create an `n x n` symmetric matrix from `n * n` row-major values, or
    /// zeros when `data` is `None`.
    pub fn new(n: usize, data: Option<&[T]>) -> Result<Self> {
        let size = check_size(n, n)?;
        let mut values = match data {
            Some(values) if values.len() != size => {
                return Err(MatError::InitializerLength {
                    expected: size,
                    got: values.len(),
                })
            }
            Some(values) => values.to_vec(),
            None => vec![T::zero(); size],
        };
        for i in 1..n {
            for j in 0..i {
                values[i * n + j] = values[j * n + i];
            }
        }
        Ok(Self::from_parts(n, values))
    }

    /// Copy into a dense matrix.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_matrix(self)
    }

    /// Element-wise sum `self = a + b`; the sum of symmetric matrices is
    /// symmetric.
    ///
    /// ```
    /// use numat::{MatrixRef, SymmetricMatrix};
    /// let a = SymmetricMatrix::new(2, Some(&[1.0, 2.0, 0.0, 3.0])).unwrap();
    /// let mut c = SymmetricMatrix::empty();
    /// c.add_sym(&a, &a).unwrap();
    /// assert_eq!(c.get(1, 0), 4.0);
    /// ```
    pub fn add_sym(&mut self, a: &SymmetricMatrix<T>, b: &SymmetricMatrix<T>) -> Result<()> {
        check_same("add_sym", a.dims(), b.dims())?;
        self.check_receiver("add_sym", a.n)?;
        let data = a
            .data
            .to_vec()
            .into_iter()
            .zip(b.data.to_vec())
            .map(|(x, y)| x + y)
            .collect();
        self.assign("add_sym", a.n, data);
        Ok(())
    }

    /// Scalar multiple `self = alpha * a`.
    pub fn scale_sym(&mut self, alpha: T, a: &SymmetricMatrix<T>) -> Result<()> {
        self.check_receiver("scale_sym", a.n)?;
        let data = a.data.to_vec().into_iter().map(|x| alpha * x).collect();
        self.assign("scale_sym", a.n, data);
        Ok(())
    }
}

impl<T: Copy> SymmetricMatrix<T> {
    fn from_parts(n: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), n * n);
        Self {
            data: Storage::from_vec(values),
            n,
        }
    }

    /// An empty receiver for [`add_sym`](Self::add_sym) and
    /// [`scale_sym`](Self::scale_sym).
    pub fn empty() -> Self {
        Self::from_parts(0, Vec::new())
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Set `(row, col)` and its mirror `(col, row)`.
    pub fn set_sym(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index((self.n, self.n), row, col)?;
        self.data.set(row * self.n + col, value);
        self.data.set(col * self.n + row, value);
        Ok(())
    }

    /// A symmetric matrix equals its transpose; returns a copy.
    pub fn transpose(&self) -> Self {
        self.clone()
    }

    /// Diagonal as a view sharing storage with `self`.
    pub fn diag_view(&self) -> DiagonalMatrix<T> {
        DiagonalMatrix::from_storage(self.data.window(0, self.n, self.n + 1))
    }

    fn check_receiver(&self, op: &'static str, n: usize) -> Result<()> {
        if self.n == 0 {
            return Ok(());
        }
        check_same(op, (n, n), (self.n, self.n))
    }

    fn assign(&mut self, op: &'static str, n: usize, data: Vec<T>) {
        if self.n == 0 {
            log::debug!("{}: empty receiver takes shape {}x{}", op, n, n);
            *self = Self::from_parts(n, data);
        } else {
            self.data.write_all(&data);
        }
    }
}

impl<T: Copy> MatrixRef<T> for SymmetricMatrix<T> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        let (i, j) = if row <= col { (row, col) } else { (col, row) };
        self.data.get(i * self.n + j)
    }
}

impl<T: Copy> MatrixMut<T> for SymmetricMatrix<T> {
    /// Writes mirror across the diagonal.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.set_sym(row, col, value)
    }
}

impl<T: Copy> Clone for SymmetricMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            n: self.n,
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for SymmetricMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.data.to_vec() == other.data.to_vec()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SymmetricMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricMatrix")
            .field("n", &self.n)
            .field("data", &self.data)
            .finish()
    }
}
