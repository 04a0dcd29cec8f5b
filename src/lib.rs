//! A pure-Rust library of dense two-dimensional matrices of `f64`, with
//! slices that alias the matrix they came from, and a small set of
//! elimination-based linear algebra routines.
//!
//! [`Matrix`] owns its elements, which are stored row-major in a [`Storage`].
//! Slicing a `Matrix` selects some of its rows and gives a [`Section`] (or a
//! [`SectionMut`] for writing); slicing that once more selects some of its
//! columns. A slice never owns anything: reading it reads the matrix, and
//! writing it writes the matrix. The borrow checker ensures the matrix
//! outlives its slices. Slices can be sliced at most twice in total, because
//! two levels are enough to pick out any rectangle.
//!
//! ```
//! use densemat::{matrix, ViewMut, END};
//! let mut m = densemat::zeros(4, 4);
//! m.slice_mut(END).unwrap().slice(0).unwrap().fill(1.0);
//! m.slice_mut(END).unwrap().slice(-1).unwrap().fill(1.0);
//! m.slice_mut(0).unwrap().fill(1.0);
//! m.slice_mut(-1).unwrap().fill(1.0);
//! assert_eq!(m, matrix![
//!     [1, 1, 1, 1],
//!     [1, 0, 0, 1],
//!     [1, 0, 0, 1],
//!     [1, 1, 1, 1],
//! ]);
//! ```
//!
//! Trait [`View`] is the common interface of matrices and slices. It offers
//! element access, iteration in row-major order, pointwise arithmetic and
//! promotion into an independent `Matrix` with [`View::to_matrix()`]. The
//! operators `+`, `-`, `*` and `/` are implemented for references to views;
//! with a scalar on the right they return a `Matrix`, and with another view on
//! the right they return a [`Result`], because the shapes might not match.
//!
//! Fallible operations return [`Error`], which is either an
//! [`ArithmeticError`] or an [`IteratorRangeError`]. Errors are not logged
//! unless asked to be, using [`Report`] and a [`Config`].
//!
//! ```
//! use densemat::{matrix, concatenate, identity, invert, multiply, rref, View, END};
//! let a_b = matrix![[1, 2, 2, 1], [3, 4, 6, 5], [3, 6, 8, 6]];
//! let a = a_b.slice(END).unwrap().slice((0, 3)).unwrap();
//! let b = a_b.slice(END).unwrap().slice(3).unwrap();
//! let x = multiply(&invert(&a).unwrap(), &b).unwrap();
//! approx::assert_abs_diff_eq!(multiply(&a, &x).unwrap(), b.to_matrix(), epsilon = 1e-9);
//!
//! let reduced = rref(&concatenate(&a, &identity(3), 1).unwrap());
//! let r = reduced.slice(END).unwrap().slice((0, 3)).unwrap();
//! approx::assert_abs_diff_eq!(r.to_matrix(), identity(3), epsilon = 1e-9);
//! ```

mod error;
pub use error::{Result, Error, ArithmeticError, IteratorRangeError};

mod config;
pub use config::{Config, Report, SHOW_ERROR_DETAILS_VAR};

mod slice;
pub use slice::{END, Bound, Selector, Span};

mod storage;
pub use storage::{Storage};

mod view;
pub use view::{Level, Window, View, ViewMut, Section, SectionMut};

mod cursor;
pub use cursor::{Cursor, Iter, IterMut};

pub mod ops;
pub use ops::{Binary};

mod matrix;
pub use matrix::{Matrix};

mod linalg;
pub use linalg::{
    SINGULARITY_TOLERANCE,
    multiply, multiply_scalar, sum, sum_scalar, transpose, minor,
    determinant, adjugate, invert, concatenate,
    ero_swap, ero_multiply, ero_sum, upper_triangular, rref,
};

mod factory;
pub use factory::{zeros, ones, identity, random, random_with, show};
