//! Type aliases for the common floating-point element types.

use crate::{DenseMatrix, DiagonalMatrix, SymmetricMatrix, TriangularMatrix, Vector};

// ── Dense ───────────────────────────────────────────────────────────

/// Dense matrix with `f32` elements.
pub type DenseMatrixf32 = DenseMatrix<f32>;
/// Dense matrix with `f64` elements.
pub type DenseMatrixf64 = DenseMatrix<f64>;

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;

// ── Structured ──────────────────────────────────────────────────────

/// Symmetric matrix with `f32` elements.
pub type SymmetricMatrixf32 = SymmetricMatrix<f32>;
/// Symmetric matrix with `f64` elements.
pub type SymmetricMatrixf64 = SymmetricMatrix<f64>;

/// Diagonal matrix with `f32` elements.
pub type DiagonalMatrixf32 = DiagonalMatrix<f32>;
/// Diagonal matrix with `f64` elements.
pub type DiagonalMatrixf64 = DiagonalMatrix<f64>;

/// Triangular matrix with `f32` elements.
pub type TriangularMatrixf32 = TriangularMatrix<f32>;
/// Triangular matrix with `f64` elements.
pub type TriangularMatrixf64 = TriangularMatrix<f64>;
