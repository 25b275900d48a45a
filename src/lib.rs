//! # numat
//!
//! Small dense linear-algebra library: general matrices, column vectors with
//! slice views, and symmetric, diagonal and triangular matrices that share one
//! access contract. `no_std` compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use numat::{formatted, DenseMatrix, Vector};
//!
//! let a = DenseMatrix::new(3, 4, Some(&[1.0, 2.0, 3.0, 4.0,
//!                                       5.0, 6.0, 7.0, 8.0,
//!                                       9.0, 10.0, 11.0, 12.0])).unwrap();
//!
//! // Algebra writes into a receiver; an empty one adopts the result shape.
//! let mut c = DenseMatrix::empty();
//! c.mul(&a, &a.transpose()).unwrap();
//! assert_eq!(c.at(2, 2).unwrap(), 446.0);
//!
//! // Slices are views onto the same storage.
//! let mut v = Vector::from_vec((1..=10).map(|x| x as f64).collect()).unwrap();
//! let w = v.slice_vec(0, 9).unwrap();
//! v.set_vec(5, 100.0).unwrap();
//! assert_eq!(w.at_vec(5).unwrap(), 100.0);
//!
//! println!("{}", formatted(&c).prefix("  "));
//! ```
//!
//! ## Modules
//!
//! - [`DenseMatrix`]: general `rows x cols` matrix, row-major. Receiver
//!   algebra (`add`, `sub`, `mul`, `mul_elem`, `scale`, ...), transpose,
//!   row/column access and views, determinant, diagonal view. Operators on
//!   references (`&a * &b`) allocate a fresh result. With `core::ops::Add`,
//!   `Sub` or `Mul` imported, call the receiver methods by path
//!   (`DenseMatrix::mul(&mut c, &a, &b)`) since `c.mul(..)` then resolves to
//!   the operator.
//!
//! - [`Vector`]: column vector. [`Vector::slice_vec`] returns a view that
//!   aliases its origin; `Clone` always copies.
//!
//! - [`SymmetricMatrix`], [`DiagonalMatrix`], [`TriangularMatrix`]: square
//!   structured matrices. Writes that would break the structure fail with
//!   [`ErrorKind::StructuralWrite`].
//!
//! - [`AnyMatrix`]: all variants behind one enum.
//!
//! - [`reduce`]: `min`, `max`, `sum`, `trace`, `norm`, `det`, `row`, `col`,
//!   `equal`, `equal_approx`, `dot` over any [`MatrixRef`].
//!
//! - [`format`]: aligned grid rendering with prefix, excerpt and squeeze
//!   options. Every variant implements `Display` through it.
//!
//! - [`traits`]: [`Scalar`] / [`FloatScalar`] element traits and the
//!   [`MatrixRef`] / [`MatrixMut`] access contract.
//!
//! ## Threading
//!
//! Storage is reference counted so that views can alias their origin. The
//! types are therefore neither `Send` nor `Sync`.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via the system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("numat requires either the `std` or the `libm` feature");

extern crate alloc;

pub mod aliases;
mod any;
mod dense;
mod diagonal;
pub mod error;
pub mod format;
pub mod reduce;
mod storage;
mod symmetric;
pub mod traits;
mod triangular;
mod vector;

pub use aliases::{
    DenseMatrixf32, DenseMatrixf64, DiagonalMatrixf32, DiagonalMatrixf64, SymmetricMatrixf32,
    SymmetricMatrixf64, TriangularMatrixf32, TriangularMatrixf64, Vectorf32, Vectorf64,
};
pub use any::AnyMatrix;
pub use dense::DenseMatrix;
pub use diagonal::DiagonalMatrix;
pub use error::{ErrorKind, MatError, Result};
pub use format::{formatted, FormatOptions, Formatted};
pub use symmetric::SymmetricMatrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use triangular::{TriKind, TriangularMatrix};
pub use vector::Vector;
