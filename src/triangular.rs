use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::dense::DenseMatrix;
use crate::diagonal::DiagonalMatrix;
use crate::error::{check_index, check_size, MatError, Result};
use crate::storage::Storage;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Which triangle of a [`TriangularMatrix`] is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriKind {
    /// Positions with `row <= col`.
    Upper,
    /// Positions with `row >= col`.
    Lower,
}

impl TriKind {
    /// Whether `(row, col)` lies in this triangle (diagonal included).
    #[inline]
    pub fn contains(self, row: usize, col: usize) -> bool {
        match self {
            TriKind::Upper => row <= col,
            TriKind::Lower => row >= col,
        }
    }

    /// The opposite triangle.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            TriKind::Upper => TriKind::Lower,
            TriKind::Lower => TriKind::Upper,
        }
    }
}

/// Square matrix that is zero on one side of the diagonal.
///
/// Positions outside the [`TriKind`] triangle always read as zero and
/// reject writes with [`MatError::StructuralZero`].
///
/// # Examples
///
/// ```
/// use numat::{ErrorKind, MatrixRef, TriKind, TriangularMatrix};
///
/// let mut t = TriangularMatrix::new(3, TriKind::Upper, Some(&[1.0, 2.0, 3.0,
///                                                             4.0, 5.0, 6.0,
///                                                             7.0, 8.0, 9.0])).unwrap();
/// assert_eq!(t.get(1, 0), 0.0);
///
/// assert_eq!(t.set_tri(2, 0, 100.0).unwrap_err().kind(), ErrorKind::StructuralWrite);
/// t.set_tri(0, 2, 100.0).unwrap();
/// assert_eq!(t.get(0, 2), 100.0);
///
/// let l = t.transpose();
/// assert_eq!(l.kind(), TriKind::Lower);
/// assert_eq!(l.get(2, 0), 100.0);
/// ```
pub struct TriangularMatrix<T> {
    data: Storage<T>,
    n: usize,
    kind: TriKind,
}

impl<T: Scalar> TriangularMatrix<T> {
    /// Create an `n x n` triangular matrix from `n * n` row-major values, or
    /// zeros when `data` is `None`. Values outside the `kind` triangle are
    /// discarded.
    pub fn new(n: usize, kind: TriKind, data: Option<&[T]>) -> Result<Self> {
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
        for i in 0..n {
            for j in 0..n {
                if !kind.contains(i, j) {
                    values[i * n + j] = T::zero();
                }
            }
        }
        Ok(Self {
            data: Storage::from_vec(values),
            n,
            kind,
        })
    }

    /// Mirror across the diagonal; an upper matrix becomes lower and vice
    /// versa. The source is left untouched.
    pub fn transpose(&self) -> Self {
        let n = self.n;
        let src = self.data.to_vec();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(src[j * n + i]);
            }
        }
        Self {
            data: Storage::from_vec(data),
            n,
            kind: self.kind.flip(),
        }
    }

    /// Copy into a dense matrix.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_matrix(self)
    }
}

impl<T: Copy> TriangularMatrix<T> {
    /// Which triangle is stored.
    #[inline]
    pub fn kind(&self) -> TriKind {
        self.kind
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Set `(row, col)` inside the stored triangle.
    ///
    /// Fails with an Index error outside `n x n` and a StructuralWrite error
    /// in the zero triangle.
    pub fn set_tri(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index((self.n, self.n), row, col)?;
        if !self.kind.contains(row, col) {
            return Err(MatError::StructuralZero {
                structure: "triangular",
                row,
                col,
            });
        }
        self.data.set(row * self.n + col, value);
        Ok(())
    }

    /// Diagonal as a view sharing storage with `self`.
    pub fn diag_view(&self) -> DiagonalMatrix<T> {
        DiagonalMatrix::from_storage(self.data.window(0, self.n, self.n + 1))
    }
}

impl<T: Scalar> MatrixRef<T> for TriangularMatrix<T> {
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
        if self.kind.contains(row, col) {
            self.data.get(row * self.n + col)
        } else {
            T::zero()
        }
    }
}

impl<T: Scalar> MatrixMut<T> for TriangularMatrix<T> {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.set_tri(row, col, value)
    }
}

impl<T: Copy> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            n: self.n,
            kind: self.kind,
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for TriangularMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.kind == other.kind && self.data.to_vec() == other.data.to_vec()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriangularMatrix")
            .field("n", &self.n)
            .field("kind", &self.kind)
            .field("data", &self.data)
            .finish()
    }
}
