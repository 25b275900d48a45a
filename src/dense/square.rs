use crate::diagonal::DiagonalMatrix;
use crate::error::{MatError, Result};
use crate::traits::{FloatScalar, MatrixRef, Scalar};

use super::DenseMatrix;

impl<T: Scalar> DenseMatrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        crate::reduce::trace(self)
    }

    /// Diagonal of the matrix as a [`DiagonalMatrix`] view.
    ///
    /// The view shares storage with `self`: writes through
    /// [`DiagonalMatrix::set_diag`] land on the matrix diagonal. For a
    /// non-square matrix the view covers the leading `min(rows, cols)`
    /// diagonal entries.
    ///
    /// ```
    /// use numat::{DenseMatrix, MatrixRef};
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
    /// let d = m.diag_view();
    /// assert_eq!(d.dims(), (3, 3));
    /// assert_eq!(d.get(1, 1), 5.0);
    /// assert_eq!(d.get(0, 1), 0.0);
    /// ```
    pub fn diag_view(&self) -> DiagonalMatrix<T> {
        let n = self.nrows().min(self.ncols());
        log::debug!("diagonal view of {}x{} matrix", self.nrows(), self.ncols());
        DiagonalMatrix::from_storage(self.storage().window(0, n, self.ncols() + 1))
    }

    /// Check if the matrix is symmetric (`A == A^T`).
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let sym = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 2.0, 3.0])).unwrap();
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar> DenseMatrix<T> {
    /// Determinant via Gaussian elimination with partial pivoting.
    ///
    /// ```
    /// use numat::DenseMatrix;
    /// let m = DenseMatrix::new(2, 2, Some(&[3.0_f64, 8.0, 4.0, 6.0])).unwrap();
    /// assert!((m.det().unwrap() - (-14.0)).abs() < 1e-12);
    ///
    /// let rect = DenseMatrix::<f64>::zeros(2, 3).unwrap();
    /// assert!(rect.det().is_err());
    /// ```
    pub fn det(&self) -> Result<T> {
        crate::reduce::det(self)
    }
}

/// Determinant of a row-major `n x n` buffer, consumed as scratch space.
///
/// Returns zero once the best remaining pivot is at most
/// `n * epsilon * max|a_ij|`, so the cutoff follows the magnitude of the
/// input rather than a fixed threshold.
pub(crate) fn det_in_place<T: FloatScalar>(a: &mut [T], n: usize) -> T {
    debug_assert_eq!(a.len(), n * n);
    let scale = a.iter().fold(T::zero(), |m, x| m.max(x.abs()));
    let order = num_traits::cast::<usize, T>(n).unwrap_or_else(T::max_value);
    let tol = order * T::epsilon() * scale;

    let mut det = T::one();
    for k in 0..n {
        let (p, best) = (k..n)
            .map(|r| (r, a[r * n + k].abs()))
            .fold((k, T::zero()), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
        if best <= tol {
            log::trace!("det: pivot {:?} in column {} within tolerance {:?}", best, k, tol);
            return T::zero();
        }
        if p != k {
            for j in k..n {
                a.swap(k * n + j, p * n + j);
            }
            det = -det;
        }

        let pivot = a[k * n + k];
        det = det * pivot;
        for r in (k + 1)..n {
            let f = a[r * n + k] / pivot;
            if f == T::zero() {
                continue;
            }
            for j in (k + 1)..n {
                a[r * n + j] = a[r * n + j] - f * a[k * n + j];
            }
        }
    }
    det
}

pub(crate) fn require_square(op: &'static str, dims: (usize, usize)) -> Result<usize> {
    if dims.0 != dims.1 {
        return Err(MatError::NotSquare {
            op,
            rows: dims.0,
            cols: dims.1,
        });
    }
    Ok(dims.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn trace() {
        let m = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(m.trace(), 5.0);

        let id = DenseMatrix::<f64>::eye(3).unwrap();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn diag_view_values() {
        let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
        let d = m.diag_view();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { m.get(i, i) } else { 0.0 };
                assert_eq!(d.get(i, j), expected);
            }
        }
    }

    #[test]
    fn diag_view_aliases() {
        let m = DenseMatrix::<f64>::zeros(3, 3).unwrap();
        let mut d = m.diag_view();
        d.set_diag(2, 7.0).unwrap();
        assert_eq!(m.at(2, 2).unwrap(), 7.0);
        assert_eq!(m.to_vec().iter().filter(|&&x| x != 0.0).count(), 1);
    }

    #[test]
    fn diag_view_rectangular() {
        let m = DenseMatrix::from_fn(2, 4, |i, j| (i * 4 + j) as f64).unwrap();
        let d = m.diag_view();
        assert_eq!(d.diag(), 2);
        assert_eq!(d.at_diag(0).unwrap(), 0.0);
        assert_eq!(d.at_diag(1).unwrap(), 5.0);
    }

    #[test]
    fn is_symmetric() {
        let sym = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 2.0, 3.0])).unwrap();
        assert!(sym.is_symmetric());

        let asym = DenseMatrix::new(2, 2, Some(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert!(!asym.is_symmetric());

        let rect = DenseMatrix::new(2, 3, Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
        assert!(!rect.is_symmetric());
    }

    #[test]
    fn det_with_row_exchange() {
        let m = DenseMatrix::new(
            3,
            3,
            Some(&[0.0_f64, 2.0, 1.0, 1.0, 1.0, 0.0, 3.0, 0.0, 4.0]),
        )
        .unwrap();
        assert!((m.det().unwrap() - (-11.0)).abs() < 1e-12);

        let swap = DenseMatrix::new(2, 2, Some(&[0.0_f64, 1.0, 1.0, 0.0])).unwrap();
        assert_eq!(swap.det().unwrap(), -1.0);
    }

    #[test]
    fn det_tiny_entries() {
        let m = DenseMatrix::new(2, 2, Some(&[1e-20_f64, 0.0, 0.0, 1e-20])).unwrap();
        let d = m.det().unwrap();
        assert!(d != 0.0);
        assert!(((d - 1e-40) / 1e-40).abs() < 1e-12);

        let big = DenseMatrix::new(2, 2, Some(&[1e20_f64, 0.0, 0.0, 3e20])).unwrap();
        assert!(((big.det().unwrap() - 3e40) / 3e40).abs() < 1e-12);
    }

    #[test]
    fn det_rank_deficient() {
        let m = DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
        assert_eq!(m.det().unwrap(), 0.0);

        let scaled = m.map(|x| x * 1e-20);
        assert_eq!(scaled.det().unwrap(), 0.0);

        let zero = DenseMatrix::<f64>::zeros(4, 4).unwrap();
        assert_eq!(zero.det().unwrap(), 0.0);
    }

    #[test]
    fn det_eye_and_scaled_eye() {
        assert_eq!(DenseMatrix::<f64>::eye(5).unwrap().det().unwrap(), 1.0);
        let two = DenseMatrix::<f64>::eye(3).unwrap().map(|x| 2.0 * x);
        assert!((two.det().unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn det_not_square() {
        let m = DenseMatrix::<f64>::zeros(3, 4).unwrap();
        let err = m.det().unwrap_err();
        assert_eq!(
            err,
            MatError::NotSquare {
                op: "det",
                rows: 3,
                cols: 4
            }
        );
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }
}
