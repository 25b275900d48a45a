use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{check_same, MatError, Result};
use crate::storage::Storage;
use crate::traits::{MatrixRef, Scalar};

use super::{row_major, DenseMatrix};

/// Combine two same-shaped operands element by element, row-major.
fn zip_with<T, A, B>(a: &A, b: &B, f: impl Fn(T, T) -> T) -> Vec<T>
where
    T: Copy,
    A: MatrixRef<T> + ?Sized,
    B: MatrixRef<T> + ?Sized,
{
    let (rows, cols) = a.dims();
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            data.push(f(a.get(i, j), b.get(i, j)));
        }
    }
    data
}

/// Row-major product of an `m x n` and an `n x p` buffer.
pub(crate) fn matmul<T: Scalar>(a: &[T], b: &[T], m: usize, n: usize, p: usize) -> Vec<T> {
    debug_assert_eq!(a.len(), m * n);
    debug_assert_eq!(b.len(), n * p);
    let mut c = vec![T::zero(); m * p];
    for i in 0..m {
        for k in 0..n {
            let a_ik = a[i * n + k];
            for j in 0..p {
                c[i * p + j] = c[i * p + j] + a_ik * b[k * p + j];
            }
        }
    }
    c
}

// ── Receiver algebra ────────────────────────────────────────────────
//
// `add`, `sub` and `mul` share their names with the operator traits, which
// are implemented for `&DenseMatrix`. With `core::ops::Add` (or `Sub`,
// `Mul`) in scope, method-call syntax `c.add(&a, &b)` resolves to the
// operator; call the receiver form by path instead:
// `DenseMatrix::add(&mut c, &a, &b)`.

impl<T: Scalar> DenseMatrix<T> {
    fn elementwise<A, B>(&mut self, op: &'static str, a: &A, b: &B, f: impl Fn(T, T) -> T) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        let shape = a.dims();
        check_same(op, shape, b.dims())?;
        self.check_receiver(op, shape)?;
        let data = zip_with(a, b, f);
        self.assign(op, shape, data);
        Ok(())
    }

    /// Element-wise sum `self = a + b`.
    ///
    /// Operands may be any matrix variant. An empty receiver adopts the
    /// operand shape; any other receiver must already have it.
    ///
    /// When [`core::ops::Add`] is imported, `c.add(&a, &b)` picks the
    /// operator impl on `&DenseMatrix`; write `DenseMatrix::add(&mut c, ..)`
    /// there. The same holds for [`sub`](Self::sub) and [`mul`](Self::mul).
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
    /// let mut c = DenseMatrix::empty();
    /// c.add(&m, &m).unwrap();
    /// assert_eq!(c.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    ///
    /// {
    ///     use core::ops::Add;
    ///     let mut d = DenseMatrix::empty();
    ///     DenseMatrix::add(&mut d, &m, &m).unwrap();
    ///     assert_eq!(d, (&m).add(&m));
    /// }
    /// ```
    pub fn add<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        self.elementwise("add", a, b, |x, y| x + y)
    }

    /// Element-wise difference `self = a - b`.
    pub fn sub<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        self.elementwise("sub", a, b, |x, y| x - y)
    }

    /// Element-wise (Hadamard) product `self[i][j] = a[i][j] * b[i][j]`.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let a = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
    /// let mut e = DenseMatrix::empty();
    /// e.mul_elem(&a, &a).unwrap();
    /// assert_eq!(e.to_vec(), vec![1.0, 4.0, 9.0, 16.0]);
    /// ```
    pub fn mul_elem<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        self.elementwise("mul_elem", a, b, |x, y| x * y)
    }

    /// Element-wise division `self[i][j] = a[i][j] / b[i][j]`.
    pub fn div_elem<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        self.elementwise("div_elem", a, b, |x, y| x / y)
    }

    /// Matrix product `self = a * b`: `(m x n) * (n x p) -> (m x p)`.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let a = DenseMatrix::new(2, 3, Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
    /// let b = DenseMatrix::new(3, 2, Some(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0])).unwrap();
    /// let mut c = DenseMatrix::empty();
    /// c.mul(&a, &b).unwrap();
    /// assert_eq!(c.to_vec(), vec![58.0, 64.0, 139.0, 154.0]);
    ///
    /// // Inner dimensions must agree.
    /// assert!(c.mul(&a, &a).is_err());
    /// ```
    pub fn mul<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
    {
        let (m, n) = a.dims();
        let (bn, p) = b.dims();
        if n != bn {
            return Err(MatError::DimensionMismatch {
                op: "mul",
                expected: (n, p),
                got: (bn, p),
            });
        }
        self.check_receiver("mul", (m, p))?;
        let data = matmul(&row_major(a), &row_major(b), m, n, p);
        self.assign("mul", (m, p), data);
        Ok(())
    }

    /// Scalar multiple `self = alpha * a`.
    pub fn scale<A: MatrixRef<T> + ?Sized>(&mut self, alpha: T, a: &A) -> Result<()> {
        let shape = a.dims();
        self.check_receiver("scale", shape)?;
        let data = row_major(a).into_iter().map(|x| alpha * x).collect();
        self.assign("scale", shape, data);
        Ok(())
    }

    /// Copy the values of `a` into the receiver.
    pub fn copy_from<A: MatrixRef<T> + ?Sized>(&mut self, a: &A) -> Result<()> {
        let shape = a.dims();
        self.check_receiver("copy", shape)?;
        self.assign("copy", shape, row_major(a));
        Ok(())
    }

    /// Transpose: `(m x n) -> (n x m)`. The source is left untouched.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let a = DenseMatrix::new(2, 3, Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.dims(), (3, 2));
    /// assert_eq!(t.at(1, 0).unwrap(), 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let (m, n) = self.dims();
        let src = self.to_vec();
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(src[i * n + j]);
            }
        }
        DenseMatrix::from_parts(n, m, Storage::from_vec(data))
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Allocating wrappers over the receiver methods. Like the slice-indexing
// operators of the standard library they panic on misuse.

fn or_panic<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl<T: Scalar> Add<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    /// # Panics
    ///
    /// Panics with "dimension mismatch" if the shapes differ.
    fn add(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        let mut c = DenseMatrix::empty();
        or_panic(DenseMatrix::add(&mut c, self, rhs));
        c
    }
}

impl<T: Scalar> Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        let mut c = DenseMatrix::empty();
        or_panic(DenseMatrix::sub(&mut c, self, rhs));
        c
    }
}

impl<T: Scalar> Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    /// # Panics
    ///
    /// Panics with "dimension mismatch" unless `self.ncols() == rhs.nrows()`.
    fn mul(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        let mut c = DenseMatrix::empty();
        or_panic(DenseMatrix::mul(&mut c, self, rhs));
        c
    }
}

impl<T: Scalar> Mul<T> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: T) -> DenseMatrix<T> {
        let mut c = DenseMatrix::empty();
        or_panic(DenseMatrix::scale(&mut c, rhs, self));
        c
    }
}

impl<T: Scalar> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> DenseMatrix<T> {
        let data = self.to_vec().into_iter().map(|x| T::zero() - x).collect();
        DenseMatrix::from_parts(self.nrows(), self.ncols(), Storage::from_vec(data))
    }
}

impl<T: Scalar> AddAssign<&DenseMatrix<T>> for DenseMatrix<T> {
    fn add_assign(&mut self, rhs: &DenseMatrix<T>) {
        let lhs = self.clone();
        or_panic(DenseMatrix::add(self, &lhs, rhs));
    }
}

impl<T: Scalar> SubAssign<&DenseMatrix<T>> for DenseMatrix<T> {
    fn sub_assign(&mut self, rhs: &DenseMatrix<T>) {
        let lhs = self.clone();
        or_panic(DenseMatrix::sub(self, &lhs, rhs));
    }
}

impl<T: Scalar> MulAssign<T> for DenseMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        let lhs = self.clone();
        or_panic(DenseMatrix::scale(self, rhs, &lhs));
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_dense {
    ($($t:ty),*) => {
        $(
            impl Mul<&DenseMatrix<$t>> for $t {
                type Output = DenseMatrix<$t>;
                fn mul(self, rhs: &DenseMatrix<$t>) -> DenseMatrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_dense!(f32, f64, i32, i64);
