//! Column vectors with aliasing slice views.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::dense::{row_major, DenseMatrix};
use crate::error::{check_index, check_nonzero, check_same, MatError, Result};
use crate::storage::Storage;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};

/// Column vector: a dense matrix with exactly one column.
///
/// A vector either owns its elements or is a *view* returned by
/// [`slice_vec`](Vector::slice_vec), [`DenseMatrix::row_view`] or
/// [`DenseMatrix::col_view`]. Views share storage with their origin, so a
/// write through either side is visible through the other. [`Clone`] always
/// produces an independent copy.
///
/// # Examples
///
/// ```
/// use numat::Vector;
///
/// let mut v = Vector::from_vec((1..=10).map(|x| x as f64).collect()).unwrap();
/// let w = v.slice_vec(0, 9).unwrap();
/// v.set_vec(5, 100.0).unwrap();
/// assert_eq!(w.at_vec(5).unwrap(), 100.0);
/// ```
pub struct Vector<T> {
    data: Storage<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a vector of `len` elements from `data`, or zeros when `data`
    /// is `None`.
    ///
    /// ```
    /// use numat::Vector;
    /// let v = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();
    /// assert_eq!(v.len(), 5);
    /// assert!(Vector::new(3, Some(&[1.0, 2.0])).is_err());
    /// ```
    pub fn new(len: usize, data: Option<&[T]>) -> Result<Self> {
        match data {
            Some(values) => {
                if values.len() != len {
                    check_nonzero(len, 1)?;
                    return Err(MatError::InitializerLength {
                        expected: len,
                        got: values.len(),
                    });
                }
                Self::from_vec(values.to_vec())
            }
            None => Self::zeros(len),
        }
    }

    /// Zero vector of length `len`.
    pub fn zeros(len: usize) -> Result<Self> {
        check_nonzero(len, 1)?;
        Ok(Self::from_storage(Storage::from_vec(vec![T::zero(); len])))
    }

    /// Take ownership of `data`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        check_nonzero(data.len(), 1)?;
        Ok(Self::from_storage(Storage::from_vec(data)))
    }
}

impl<T: Copy> Vector<T> {
    /// An empty (length 0) receiver; adopts the length of the first result
    /// written into it.
    pub fn empty() -> Self {
        Self::from_storage(Storage::from_vec(Vec::new()))
    }

    pub(crate) fn from_storage(data: Storage<T>) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Elements reachable from the start of this vector in its backing
    /// buffer. Equal to `len()` for owned vectors; larger for a slice that
    /// does not reach the end of its origin.
    #[inline]
    pub fn cap(&self) -> usize {
        self.data.capacity()
    }

    /// `(len, 1)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    /// Whether the vector has no elements.
    ///
    /// Only an owned empty vector (see [`Vector::empty`]) adopts the length
    /// of a result written into it; a zero-length view stays bound to its
    /// origin and rejects results of any other length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_empty_receiver(&self) -> bool {
        self.is_empty() && !self.data.is_view()
    }

    /// Checked element read.
    #[inline]
    pub fn at_vec(&self, i: usize) -> Result<T> {
        self.check(i)?;
        Ok(self.data.get(i))
    }

    /// Checked element write. Visible through every view of the same
    /// storage.
    #[inline]
    pub fn set_vec(&mut self, i: usize, value: T) -> Result<()> {
        self.check(i)?;
        self.data.set(i, value);
        Ok(())
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.len() {
            return Err(MatError::VectorIndex {
                index: i,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// View of elements `[start, end)` sharing storage with `self`.
    ///
    /// Bounds must satisfy `0 <= start <= end <= len`. Any integer type is
    /// accepted; a negative bound is rejected with
    /// [`MatError::NegativeIndex`] rather than counting from the end, and a
    /// bound past `usize::MAX` with [`MatError::SliceOutOfRange`].
    ///
    /// ```
    /// use numat::{MatError, Vector};
    /// let v = Vector::from_vec((1..=10).map(|x| x as f64).collect()).unwrap();
    /// let s = v.slice_vec(4, 6).unwrap();
    /// assert_eq!(s.to_vec(), vec![5.0, 6.0]);
    ///
    /// assert_eq!(v.slice_vec(0, -1).unwrap_err(), MatError::NegativeIndex);
    /// assert!(v.slice_vec(3, 11).is_err());
    /// ```
    pub fn slice_vec<I>(&self, start: I, end: I) -> Result<Vector<T>>
    where
        I: TryInto<usize> + PartialOrd + Default,
    {
        let start = slice_bound(start)?;
        let end = slice_bound(end)?;
        if start > end || end > self.len() {
            return Err(MatError::SliceOutOfRange {
                start,
                end,
                len: self.len(),
            });
        }
        log::debug!("slice [{}, {}) of vector of length {}", start, end, self.len());
        Ok(Self::from_storage(self.data.window(start, end - start, 1)))
    }

    /// Copy the elements out.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Row vector (`1 x len`) holding a copy of the elements.
    ///
    /// An empty receiver transposes to an empty matrix.
    pub fn transpose(&self) -> DenseMatrix<T> {
        if self.is_empty() {
            return DenseMatrix::empty();
        }
        DenseMatrix::from_parts(1, self.len(), Storage::from_vec(self.to_vec()))
    }

    fn check_receiver(&self, op: &'static str, len: usize) -> Result<()> {
        if self.is_empty_receiver() {
            return Ok(());
        }
        check_same(op, (len, 1), self.dims())
    }

    fn assign(&mut self, op: &'static str, data: Vec<T>) {
        if self.is_empty_receiver() {
            log::debug!("{}: empty receiver takes length {}", op, data.len());
            self.data = Storage::from_vec(data);
        } else {
            self.data.write_all(&data);
        }
    }
}

/// Convert a slice bound to `usize`. Bounds too large for `usize` saturate
/// so the range check reports them.
fn slice_bound<I: TryInto<usize> + PartialOrd + Default>(i: I) -> Result<usize> {
    if i < I::default() {
        return Err(MatError::NegativeIndex);
    }
    Ok(i.try_into().unwrap_or(usize::MAX))
}

// ── Receiver algebra ────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    fn elementwise(
        &mut self,
        op: &'static str,
        a: &Vector<T>,
        b: &Vector<T>,
        f: impl Fn(T, T) -> T,
    ) -> Result<()> {
        check_same(op, a.dims(), b.dims())?;
        self.check_receiver(op, a.len())?;
        let data = a
            .to_vec()
            .into_iter()
            .zip(b.to_vec())
            .map(|(x, y)| f(x, y))
            .collect();
        self.assign(op, data);
        Ok(())
    }

    /// `self = a + b`.
    ///
    /// ```
    /// use numat::Vector;
    /// let v1 = Vector::<f64>::zeros(5).unwrap();
    /// let v2 = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();
    /// let mut v3 = Vector::empty();
    /// v3.add_vec(&v1, &v2).unwrap();
    /// assert_eq!(v3.to_vec(), v2.to_vec());
    /// ```
    pub fn add_vec(&mut self, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
        self.elementwise("add_vec", a, b, |x, y| x + y)
    }

    /// `self = a - b`.
    pub fn sub_vec(&mut self, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
        self.elementwise("sub_vec", a, b, |x, y| x - y)
    }

    /// `self[i] = a[i] * b[i]`.
    pub fn mul_elem_vec(&mut self, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
        self.elementwise("mul_elem_vec", a, b, |x, y| x * y)
    }

    /// `self[i] = a[i] / b[i]`.
    pub fn div_elem_vec(&mut self, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
        self.elementwise("div_elem_vec", a, b, |x, y| x / y)
    }

    /// `self = a + alpha * b`.
    pub fn add_scaled_vec(&mut self, a: &Vector<T>, alpha: T, b: &Vector<T>) -> Result<()> {
        self.elementwise("add_scaled_vec", a, b, |x, y| x + alpha * y)
    }

    /// `self = alpha * a`.
    ///
    /// ```
    /// use numat::Vector;
    /// let v = Vector::new(3, Some(&[1.0, 0.0, 2.0])).unwrap();
    /// let mut s = Vector::empty();
    /// s.scale_vec(10.0, &v).unwrap();
    /// assert_eq!(s.to_vec(), vec![10.0, 0.0, 20.0]);
    /// ```
    pub fn scale_vec(&mut self, alpha: T, a: &Vector<T>) -> Result<()> {
        self.check_receiver("scale_vec", a.len())?;
        let data = a.to_vec().into_iter().map(|x| alpha * x).collect();
        self.assign("scale_vec", data);
        Ok(())
    }

    /// Copy the values of `a` into the receiver.
    pub fn copy_vec(&mut self, a: &Vector<T>) -> Result<()> {
        self.check_receiver("copy_vec", a.len())?;
        self.assign("copy_vec", a.to_vec());
        Ok(())
    }

    /// Matrix-vector product `self = a * b`.
    ///
    /// Requires `a.ncols() == b.len()`; the receiver length becomes
    /// `a.nrows()`. `a` may be any matrix variant.
    ///
    /// ```
    /// use numat::{DenseMatrix, Vector};
    /// let rot = DenseMatrix::new(3, 3, Some(&[0.0, -1.0, 0.0,
    ///                                         1.0, 0.0, 0.0,
    ///                                         0.0, 0.0, 1.0])).unwrap();
    /// let v = Vector::new(3, Some(&[2.0, 3.0, 4.0])).unwrap();
    /// let mut r = Vector::empty();
    /// r.mul_vec(&rot, &v).unwrap();
    /// assert_eq!(r.to_vec(), vec![-3.0, 2.0, 4.0]);
    /// ```
    pub fn mul_vec<M: MatrixRef<T> + ?Sized>(&mut self, a: &M, b: &Vector<T>) -> Result<()> {
        let (m, n) = a.dims();
        if n != b.len() {
            return Err(MatError::DimensionMismatch {
                op: "mul_vec",
                expected: (n, 1),
                got: b.dims(),
            });
        }
        self.check_receiver("mul_vec", m)?;
        let data = crate::dense::matmul(&row_major(a), &b.to_vec(), m, n, 1);
        self.assign("mul_vec", data);
        Ok(())
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        crate::reduce::dot(self, other)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean norm.
    pub fn norm(&self) -> T {
        crate::reduce::norm(self)
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: Copy> MatrixRef<T> for Vector<T> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.len() && col == 0,
            "index ({}, {}) out of range for {}x1 vector",
            row,
            col,
            self.len(),
        );
        self.data.get(row)
    }
}

impl<T: Copy> MatrixMut<T> for Vector<T> {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(self.dims(), row, col)?;
        self.data.set(row, value);
        Ok(())
    }
}

// ── Clone / PartialEq / Debug ───────────────────────────────────────

impl<T: Copy> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn v10() -> Vector<f64> {
        Vector::from_vec((1..=10).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn construct() {
        let v = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();
        assert_eq!(v.dims(), (5, 1));
        assert_eq!(v.cap(), 5);
        assert_eq!(v.at_vec(2).unwrap(), 2.0);
        assert_eq!(MatrixRef::at(&v, 4, 0).unwrap(), 3.0);

        assert_eq!(
            Vector::new(3, Some(&[1.0, 2.0])).unwrap_err(),
            MatError::InitializerLength {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            Vector::<f64>::zeros(0).unwrap_err().kind(),
            ErrorKind::Dimension
        );
    }

    #[test]
    fn index_errors() {
        let mut v = v10();
        assert_eq!(
            v.at_vec(10).unwrap_err(),
            MatError::VectorIndex { index: 10, len: 10 }
        );
        assert_eq!(v.set_vec(11, 0.0).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(MatrixRef::at(&v, 0, 1).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn slice_is_view() {
        let mut v = v10();
        let s = v.slice_vec(4, 6).unwrap();
        assert_eq!(s.to_vec(), vec![5.0, 6.0]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.cap(), 6);

        let mut w = v.slice_vec(0, 9).unwrap();
        v.set_vec(5, 100.0).unwrap();
        assert_eq!(w.at_vec(5).unwrap(), 100.0);
        assert_eq!(s.at_vec(1).unwrap(), 100.0);

        w.set_vec(0, -1.0).unwrap();
        assert_eq!(v.at_vec(0).unwrap(), -1.0);
    }

    #[test]
    fn slice_of_slice() {
        let v = v10();
        let s = v.slice_vec(2, 8).unwrap();
        let t = s.slice_vec(1, 3).unwrap();
        assert_eq!(t.to_vec(), vec![4.0, 5.0]);
    }

    #[test]
    fn slice_bounds() {
        let v = v10();
        assert_eq!(v.slice_vec(0, -1).unwrap_err(), MatError::NegativeIndex);
        assert_eq!(v.slice_vec(-2, 3).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(
            v.slice_vec(5, 4).unwrap_err(),
            MatError::SliceOutOfRange {
                start: 5,
                end: 4,
                len: 10
            }
        );
        assert!(v.slice_vec(0usize, 11).is_err());
        assert!(v.slice_vec(10, 10).unwrap().is_empty());
    }

    #[test]
    fn slice_bound_past_usize() {
        let v = v10();
        let err = v.slice_vec(0u128, u128::MAX).unwrap_err();
        assert_eq!(
            err,
            MatError::SliceOutOfRange {
                start: 0,
                end: usize::MAX,
                len: 10
            }
        );
        assert_eq!(
            v.slice_vec(i128::MAX, i128::MAX).unwrap_err().kind(),
            ErrorKind::Index
        );
        assert_eq!(v.slice_vec(2u64, 4u64).unwrap().to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn vector_algebra() {
        let v1 = Vector::<f64>::zeros(5).unwrap();
        let v2 = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();

        let mut v3 = Vector::empty();
        v3.add_vec(&v1, &v2).unwrap();
        assert_eq!(v3.to_vec(), vec![1.0, 0.0, 2.0, 0.0, 3.0]);

        v3.sub_vec(&v1, &v2).unwrap();
        assert_eq!(v3.to_vec(), vec![-1.0, 0.0, -2.0, 0.0, -3.0]);

        v3.scale_vec(10.0, &v2).unwrap();
        assert_eq!(v3.to_vec(), vec![10.0, 0.0, 20.0, 0.0, 30.0]);

        v3.mul_elem_vec(&v2, &v2).unwrap();
        assert_eq!(v3.to_vec(), vec![1.0, 0.0, 4.0, 0.0, 9.0]);

        v3.add_scaled_vec(&v2, 2.0, &v2).unwrap();
        assert_eq!(v3.to_vec(), vec![3.0, 0.0, 6.0, 0.0, 9.0]);

        let ones = Vector::new(5, Some(&[1.0; 5])).unwrap();
        v3.div_elem_vec(&v2, &ones).unwrap();
        assert_eq!(v3, v2);

        // operands untouched
        assert_eq!(v1.to_vec(), vec![0.0; 5]);
    }

    #[test]
    fn receiver_length_enforced() {
        let a = Vector::<f64>::zeros(3).unwrap();
        let b = Vector::<f64>::zeros(4).unwrap();
        let mut r = Vector::empty();
        assert_eq!(r.add_vec(&a, &b).unwrap_err().kind(), ErrorKind::Dimension);
        assert!(r.is_empty());

        let mut r = Vector::<f64>::zeros(2).unwrap();
        assert_eq!(
            r.copy_vec(&a).unwrap_err(),
            MatError::DimensionMismatch {
                op: "copy_vec",
                expected: (3, 1),
                got: (2, 1)
            }
        );
    }

    #[test]
    fn write_through_view_receiver() {
        let v = v10();
        let mut head = v.slice_vec(0, 3).unwrap();
        let src = Vector::new(3, Some(&[7.0, 8.0, 9.0])).unwrap();
        head.copy_vec(&src).unwrap();
        assert_eq!(&v.to_vec()[..4], &[7.0, 8.0, 9.0, 4.0]);
    }

    #[test]
    fn zero_length_view_keeps_its_length() {
        let v = Vector::new(3, Some(&[1.0, 2.0, 3.0])).unwrap();
        let mut gap = v.slice_vec(1, 1).unwrap();
        let one = Vector::new(1, Some(&[9.0])).unwrap();
        assert_eq!(
            gap.copy_vec(&one).unwrap_err(),
            MatError::DimensionMismatch {
                op: "copy_vec",
                expected: (1, 1),
                got: (0, 1)
            }
        );
        assert_eq!(gap.scale_vec(2.0, &one).unwrap_err().kind(), ErrorKind::Dimension);
        assert!(gap.is_empty());
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

        // a detached copy is an ordinary empty receiver again
        let mut owned = gap.clone();
        owned.copy_vec(&one).unwrap();
        assert_eq!(owned.to_vec(), vec![9.0]);
    }

    #[test]
    fn receiver_aliasing_operand() {
        let mut v = Vector::new(3, Some(&[1.0, 2.0, 3.0])).unwrap();
        let alias = v.slice_vec(0, 3).unwrap();
        v.add_vec(&alias, &alias).unwrap();
        assert_eq!(v.to_vec(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn mul_vec() {
        let id = DenseMatrix::<f64>::eye(3).unwrap();
        let v = Vector::new(3, Some(&[2.0, 3.0, 4.0])).unwrap();
        let mut r = Vector::empty();
        r.mul_vec(&id, &v).unwrap();
        assert_eq!(r.to_vec(), vec![2.0, 3.0, 4.0]);

        let rot = DenseMatrix::new(3, 3, Some(&[0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]))
            .unwrap();
        r.mul_vec(&rot, &v).unwrap();
        assert_eq!(r.to_vec(), vec![-3.0, 2.0, 4.0]);

        let rect = DenseMatrix::<f64>::zeros(2, 4).unwrap();
        assert_eq!(
            r.mul_vec(&rect, &v).unwrap_err().kind(),
            ErrorKind::Dimension
        );
    }

    #[test]
    fn dot_and_norm() {
        let v1 = Vector::<f64>::zeros(5).unwrap();
        let v2 = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0])).unwrap();
        assert_eq!(v1.dot(&v2).unwrap(), 0.0);
        assert_eq!(v2.dot(&v2).unwrap(), 14.0);
        assert!((v2.norm() - 14.0_f64.sqrt()).abs() < 1e-12);

        let short = Vector::<f64>::zeros(4).unwrap();
        assert_eq!(v2.dot(&short).unwrap_err().kind(), ErrorKind::Dimension);
    }

    #[test]
    fn transpose_is_row() {
        let v = v10();
        let t = v.transpose();
        assert_eq!(t.dims(), (1, 10));
        assert_eq!(t.at(0, 9).unwrap(), 10.0);
        assert!(Vector::<f64>::empty().transpose().is_empty());
    }

    #[test]
    fn clone_detaches() {
        let v = v10();
        let mut c = v.clone();
        c.set_vec(0, 0.0).unwrap();
        assert_eq!(v.at_vec(0).unwrap(), 1.0);
    }
}
