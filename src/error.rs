use thiserror::Error;

/// Coarse classification of a [`MatError`].
///
/// ```
/// use numat::{DenseMatrix, ErrorKind};
///
/// let m = DenseMatrix::<f64>::zeros(2, 2).unwrap();
/// assert_eq!(m.at(2, 0).unwrap_err().kind(), ErrorKind::Index);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operand shapes are incompatible with the requested operation.
    Dimension,
    /// Element or slice access outside valid bounds.
    Index,
    /// Write to a structurally zero position.
    StructuralWrite,
}

/// Errors from matrix and vector operations.
///
/// Every fallible operation in the crate reports through this type. Nothing
/// is clamped or recovered internally; the failing call leaves its receiver
/// untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatError {
    /// A constructor was asked for a matrix with a zero dimension.
    #[error("zero dimension: {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    /// Element count `rows * cols` does not fit in `usize`.
    #[error("size overflow: {rows}x{cols} elements do not fit in memory")]
    SizeOverflow { rows: usize, cols: usize },

    /// Initializer slice does not hold the required number of values.
    #[error("initializer length {got} does not match required {expected}")]
    InitializerLength { expected: usize, got: usize },

    /// Operand or receiver shape does not fit the operation.
    #[error("dimension mismatch in {op}: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Operation requires a square matrix.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Reduction over a matrix with no elements.
    #[error("{op} of an empty matrix")]
    EmptyMatrix { op: &'static str },

    /// Element access outside `[0, rows) x [0, cols)`.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Vector element access outside `[0, len)`.
    #[error("index {index} out of range for vector of length {len}")]
    VectorIndex { index: usize, len: usize },

    /// Slice bounds violate `start <= end <= len`.
    #[error("slice [{start}, {end}) out of range for vector of length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },

    /// Negative slice bound.
    #[error("negative index")]
    NegativeIndex,

    /// Write to a position that is zero by construction.
    #[error("{structure} set out of bounds at ({row}, {col})")]
    StructuralZero {
        structure: &'static str,
        row: usize,
        col: usize,
    },
}

impl MatError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatError::ZeroDimension { .. }
            | MatError::SizeOverflow { .. }
            | MatError::InitializerLength { .. }
            | MatError::DimensionMismatch { .. }
            | MatError::NotSquare { .. }
            | MatError::EmptyMatrix { .. } => ErrorKind::Dimension,
            MatError::IndexOutOfRange { .. }
            | MatError::VectorIndex { .. }
            | MatError::SliceOutOfRange { .. }
            | MatError::NegativeIndex => ErrorKind::Index,
            MatError::StructuralZero { .. } => ErrorKind::StructuralWrite,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MatError>;

/// Reject zero dimensions.
pub(crate) fn check_nonzero(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatError::ZeroDimension { rows, cols });
    }
    Ok(())
}

/// Reject zero dimensions and return the element count `rows * cols`.
pub(crate) fn check_size(rows: usize, cols: usize) -> Result<usize> {
    check_nonzero(rows, cols)?;
    rows.checked_mul(cols).ok_or(MatError::SizeOverflow { rows, cols })
}

/// Bounds check for a `(row, col)` access.
#[inline]
pub(crate) fn check_index(dims: (usize, usize), row: usize, col: usize) -> Result<()> {
    if row >= dims.0 || col >= dims.1 {
        return Err(MatError::IndexOutOfRange {
            row,
            col,
            rows: dims.0,
            cols: dims.1,
        });
    }
    Ok(())
}

/// Require two shapes to agree.
#[inline]
pub(crate) fn check_same(op: &'static str, a: (usize, usize), b: (usize, usize)) -> Result<()> {
    if a != b {
        return Err(MatError::DimensionMismatch {
            op,
            expected: a,
            got: b,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        assert_eq!(
            MatError::ZeroDimension { rows: 0, cols: 1 }.kind(),
            ErrorKind::Dimension
        );
        assert_eq!(MatError::NegativeIndex.kind(), ErrorKind::Index);
        assert_eq!(
            MatError::StructuralZero {
                structure: "triangular",
                row: 2,
                col: 0
            }
            .kind(),
            ErrorKind::StructuralWrite
        );
    }

    #[test]
    fn display() {
        let e = MatError::StructuralZero {
            structure: "triangular",
            row: 2,
            col: 0,
        };
        assert_eq!(e.to_string(), "triangular set out of bounds at (2, 0)");

        let e = MatError::DimensionMismatch {
            op: "mul",
            expected: (3, 4),
            got: (3, 3),
        };
        assert_eq!(e.to_string(), "dimension mismatch in mul: expected 3x4, got 3x3");
    }

    #[test]
    fn size_check() {
        assert_eq!(check_size(3, 4).unwrap(), 12);
        assert_eq!(
            check_size(0, 4).unwrap_err(),
            MatError::ZeroDimension { rows: 0, cols: 4 }
        );
        let err = check_size(usize::MAX / 2 + 1, 2).unwrap_err();
        assert_eq!(
            err,
            MatError::SizeOverflow {
                rows: usize::MAX / 2 + 1,
                cols: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn index_check() {
        assert!(check_index((2, 3), 1, 2).is_ok());
        assert_eq!(
            check_index((2, 3), 2, 0).unwrap_err(),
            MatError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
        );
    }
}
