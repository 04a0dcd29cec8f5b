//! The two kinds of failure this crate reports.

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure reported by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("illegal arithmetic: {0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("iterator out of range: {0}")]
    IteratorRange(#[from] IteratorRangeError),
}

impl Error {
    pub fn is_arithmetic(&self) -> bool { matches!(self, Error::Arithmetic(_)) }

    pub fn is_iterator_range(&self) -> bool { matches!(self, Error::IteratorRange(_)) }
}

/// An operation was asked to combine or reshape values it cannot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
    #[error("not a square matrix: rows={rows}, cols={cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("slice {start}..{end} is out of bounds for length {len}")]
    SliceOutOfBounds { start: isize, end: isize, len: usize },
    #[error("inner dimensions differ: {left:?} x {right:?}")]
    InnerDimensionMismatch { left: (usize, usize), right: (usize, usize) },
    #[error("axis is either 0 or 1, got {0}")]
    InvalidAxis(usize),
    #[error("cannot concatenate {left:?} and {right:?} along axis {axis}")]
    ConcatenationMismatch { axis: usize, left: (usize, usize), right: (usize, usize) },
    #[error("only 1 by 1 values convert to a number, got {rows}x{cols}")]
    NotScalar { rows: usize, cols: usize },
    #[error("cannot slice a matrix more than two times")]
    TooManySlices,
    #[error("matrix is singular (determinant {0})")]
    Singular(f64),
}

/// A [`Cursor`] was moved outside its window.
///
/// [`Cursor`]: super::Cursor
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IteratorRangeError {
    #[error("cannot advance past the end")]
    PastEnd,
    #[error("cannot retreat before the beginning")]
    BeforeBegin,
}
