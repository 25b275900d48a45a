//! Reductions and comparisons over any matrix variant.
//!
//! Every function takes its operand through [`MatrixRef`], so dense
//! matrices, vectors, structured matrices and views are handled alike.
//! Structural zeros count as elements: the minimum of an upper-triangular
//! matrix with positive entries is `0`.

use alloc::vec::Vec;

use crate::dense::{det_in_place, require_square, row_major};
use crate::error::{check_index, check_same, MatError, Result};
use crate::traits::{FloatScalar, MatrixRef, Scalar};
use crate::vector::Vector;

fn non_empty<T, M: MatrixRef<T> + ?Sized>(op: &'static str, m: &M) -> Result<()> {
    if m.is_empty() {
        return Err(MatError::EmptyMatrix { op });
    }
    Ok(())
}

fn fold<T, M, F>(op: &'static str, m: &M, f: F) -> Result<T>
where
    T: Copy,
    M: MatrixRef<T> + ?Sized,
    F: Fn(T, T) -> T,
{
    non_empty(op, m)?;
    let (rows, cols) = m.dims();
    let mut acc = m.get(0, 0);
    for i in 0..rows {
        for j in 0..cols {
            if i == 0 && j == 0 {
                continue;
            }
            acc = f(acc, m.get(i, j));
        }
    }
    Ok(acc)
}

/// Sum of all elements.
///
/// ```
/// use numat::{reduce, DenseMatrix};
/// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
/// assert_eq!(reduce::sum(&m).unwrap(), 45.0);
/// ```
pub fn sum<T: Scalar, M: MatrixRef<T> + ?Sized>(m: &M) -> Result<T> {
    fold("sum", m, |a, b| a + b)
}

/// Smallest element. NaN elements are skipped unless every element is NaN.
pub fn min<T: FloatScalar, M: MatrixRef<T> + ?Sized>(m: &M) -> Result<T> {
    fold("min", m, |a, b| a.min(b))
}

/// Largest element. NaN elements are skipped unless every element is NaN.
pub fn max<T: FloatScalar, M: MatrixRef<T> + ?Sized>(m: &M) -> Result<T> {
    fold("max", m, |a, b| a.max(b))
}

/// Sum of the leading diagonal, `min(rows, cols)` entries.
pub fn trace<T: Scalar, M: MatrixRef<T> + ?Sized>(m: &M) -> T {
    let n = m.nrows().min(m.ncols());
    let mut sum = T::zero();
    for i in 0..n {
        sum = sum + m.get(i, i);
    }
    sum
}

/// Frobenius norm (Euclidean norm for vectors). Zero for an empty receiver.
pub fn norm<T: FloatScalar, M: MatrixRef<T> + ?Sized>(m: &M) -> T {
    let (rows, cols) = m.dims();
    let mut sum = T::zero();
    for i in 0..rows {
        for j in 0..cols {
            let x = m.get(i, j);
            sum = sum + x * x;
        }
    }
    sum.sqrt()
}

/// Determinant of a square matrix.
///
/// ```
/// use numat::{reduce, TriKind, TriangularMatrix};
/// let t = TriangularMatrix::new(2, TriKind::Lower, Some(&[2.0_f64, 0.0, 1.0, 3.0])).unwrap();
/// assert!((reduce::det(&t).unwrap() - 6.0).abs() < 1e-12);
/// ```
pub fn det<T: FloatScalar, M: MatrixRef<T> + ?Sized>(m: &M) -> Result<T> {
    let n = require_square("det", m.dims())?;
    non_empty("det", m)?;
    let mut a = row_major(m);
    Ok(det_in_place(&mut a, n))
}

/// Copy of column `j`.
pub fn col<T, M: MatrixRef<T> + ?Sized>(m: &M, j: usize) -> Result<Vec<T>> {
    let (rows, _) = m.dims();
    check_index(m.dims(), 0, j)?;
    Ok((0..rows).map(|i| m.get(i, j)).collect())
}

/// Copy of row `i`.
pub fn row<T, M: MatrixRef<T> + ?Sized>(m: &M, i: usize) -> Result<Vec<T>> {
    let (_, cols) = m.dims();
    check_index(m.dims(), i, 0)?;
    Ok((0..cols).map(|j| m.get(i, j)).collect())
}

/// Same shape and exactly equal elements, across variants.
///
/// ```
/// use numat::{reduce, DenseMatrix, SymmetricMatrix};
/// let s = SymmetricMatrix::new(2, Some(&[1.0, 2.0, 0.0, 3.0])).unwrap();
/// let d = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 2.0, 3.0])).unwrap();
/// assert!(reduce::equal(&s, &d));
/// ```
pub fn equal<T, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq,
    A: MatrixRef<T> + ?Sized,
    B: MatrixRef<T> + ?Sized,
{
    if a.dims() != b.dims() {
        return false;
    }
    let (rows, cols) = a.dims();
    (0..rows).all(|i| (0..cols).all(|j| a.get(i, j) == b.get(i, j)))
}

/// Same shape and every element pair within `tol`, either absolutely or
/// relative to the larger magnitude.
pub fn equal_approx<T, A, B>(a: &A, b: &B, tol: T) -> bool
where
    T: FloatScalar,
    A: MatrixRef<T> + ?Sized,
    B: MatrixRef<T> + ?Sized,
{
    if a.dims() != b.dims() {
        return false;
    }
    let (rows, cols) = a.dims();
    (0..rows).all(|i| {
        (0..cols).all(|j| {
            let (x, y) = (a.get(i, j), b.get(i, j));
            let diff = (x - y).abs();
            diff <= tol || diff <= tol * x.abs().max(y.abs())
        })
    })
}

/// Dot product of two equal-length vectors.
///
/// ```
/// use numat::{reduce, Vector};
/// let v = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();
/// assert_eq!(reduce::dot(&v, &v).unwrap(), 14.0);
/// ```
pub fn dot<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    check_same("dot", a.dims(), b.dims())?;
    Ok(a
        .to_vec()
        .into_iter()
        .zip(b.to_vec())
        .fold(T::zero(), |acc, (x, y)| acc + x * y))
}
