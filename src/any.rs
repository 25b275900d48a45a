use crate::dense::DenseMatrix;
use crate::diagonal::DiagonalMatrix;
use crate::error::Result;
use crate::symmetric::SymmetricMatrix;
use crate::traits::{MatrixMut, MatrixRef, Scalar};
use crate::triangular::TriangularMatrix;
use crate::vector::Vector;

/// Any matrix variant behind one type.
///
/// Useful for heterogeneous collections; every variant keeps its own
/// structural write rules.
///
/// ```
/// use numat::{AnyMatrix, DenseMatrix, DiagonalMatrix, MatrixRef};
///
/// let ms: Vec<AnyMatrix<f64>> = vec![
///     DenseMatrix::eye(2).unwrap().into(),
///     DiagonalMatrix::new(2, Some(&[1.0, 1.0])).unwrap().into(),
/// ];
/// assert!(ms.iter().all(|m| m.get(1, 1) == 1.0 && m.get(0, 1) == 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix<T: Copy> {
    Dense(DenseMatrix<T>),
    Vector(Vector<T>),
    Symmetric(SymmetricMatrix<T>),
    Diagonal(DiagonalMatrix<T>),
    Triangular(TriangularMatrix<T>),
}

impl<T: Scalar> AnyMatrix<T> {
    /// Variant name, for diagnostics.
    pub fn variant(&self) -> &'static str {
        match self {
            AnyMatrix::Dense(_) => "dense",
            AnyMatrix::Vector(_) => "vector",
            AnyMatrix::Symmetric(_) => "symmetric",
            AnyMatrix::Diagonal(_) => "diagonal",
            AnyMatrix::Triangular(_) => "triangular",
        }
    }

    /// Transpose, keeping the variant where the structure allows it.
    ///
    /// A vector transposes to a `1 x n` dense matrix.
    pub fn transpose(&self) -> Self {
        match self {
            AnyMatrix::Dense(m) => AnyMatrix::Dense(m.transpose()),
            AnyMatrix::Vector(v) => AnyMatrix::Dense(v.transpose()),
            AnyMatrix::Symmetric(m) => AnyMatrix::Symmetric(m.transpose()),
            AnyMatrix::Diagonal(m) => AnyMatrix::Diagonal(m.transpose()),
            AnyMatrix::Triangular(m) => AnyMatrix::Triangular(m.transpose()),
        }
    }

    /// Copy into a dense matrix.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_matrix(self)
    }
}

impl<T: Scalar> MatrixRef<T> for AnyMatrix<T> {
    fn dims(&self) -> (usize, usize) {
        match self {
            AnyMatrix::Dense(m) => m.dims(),
            AnyMatrix::Vector(v) => v.dims(),
            AnyMatrix::Symmetric(m) => MatrixRef::dims(m),
            AnyMatrix::Diagonal(m) => m.dims(),
            AnyMatrix::Triangular(m) => m.dims(),
        }
    }

    fn get(&self, row: usize, col: usize) -> T {
        match self {
            AnyMatrix::Dense(m) => m.get(row, col),
            AnyMatrix::Vector(v) => v.get(row, col),
            AnyMatrix::Symmetric(m) => m.get(row, col),
            AnyMatrix::Diagonal(m) => m.get(row, col),
            AnyMatrix::Triangular(m) => m.get(row, col),
        }
    }
}

impl<T: Scalar> MatrixMut<T> for AnyMatrix<T> {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        match self {
            AnyMatrix::Dense(m) => m.set(row, col, value),
            AnyMatrix::Vector(v) => MatrixMut::set(v, row, col, value),
            AnyMatrix::Symmetric(m) => m.set(row, col, value),
            AnyMatrix::Diagonal(m) => m.set(row, col, value),
            AnyMatrix::Triangular(m) => m.set(row, col, value),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ident),*) => {
        $(
            impl<T: Copy> From<$ty<T>> for AnyMatrix<T> {
                fn from(m: $ty<T>) -> Self {
                    AnyMatrix::$variant(m)
                }
            }
        )*
    };
}

impl_from_variant!(
    Dense => DenseMatrix,
    Vector => Vector,
    Symmetric => SymmetricMatrix,
    Diagonal => DiagonalMatrix,
    Triangular => TriangularMatrix
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::triangular::TriKind;
    use alloc::vec;
    use alloc::vec::Vec;

    fn all() -> Vec<AnyMatrix<f64>> {
        let init: Vec<f64> = (1..=9).map(|x| x as f64).collect();
        vec![
            DenseMatrix::new(3, 3, Some(init.as_slice())).unwrap().into(),
            Vector::new(3, Some(&init[..3])).unwrap().into(),
            SymmetricMatrix::new(3, Some(init.as_slice())).unwrap().into(),
            DiagonalMatrix::new(3, Some(init.as_slice())).unwrap().into(),
            TriangularMatrix::new(3, TriKind::Upper, Some(init.as_slice()))
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn shared_capability() {
        for m in all() {
            assert_eq!(m.nrows(), 3);
            assert_eq!(m.get(0, 0), 1.0);
            assert_eq!(m.to_dense().dims(), m.dims());
        }
    }

    #[test]
    fn transpose_round_trip() {
        for m in all() {
            if let AnyMatrix::Vector(_) = m {
                assert_eq!(m.transpose().dims(), (1, 3));
                continue;
            }
            assert_eq!(m.transpose().transpose(), m, "{}", m.variant());
        }
    }

    #[test]
    fn structural_rules_survive() {
        let mut ms = all();
        assert!(ms[0].set(1, 0, 0.5).is_ok());
        assert!(ms[2].set(1, 0, 0.5).is_ok());
        assert_eq!(ms[2].get(0, 1), 0.5);
        assert_eq!(ms[3].set(1, 0, 0.5).unwrap_err().kind(), ErrorKind::StructuralWrite);
        assert_eq!(ms[4].set(1, 0, 0.5).unwrap_err().kind(), ErrorKind::StructuralWrite);
        assert_eq!(ms[1].set(0, 1, 0.5).unwrap_err().kind(), ErrorKind::Index);
    }
}
