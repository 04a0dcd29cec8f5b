//! Resolution of signed, sentinel-aware index requests.
//!
//! A [`Selector`] is what the user asks for: a single index or a half-open
//! range, either of which may count backwards from the end of the axis, or may
//! use the sentinel [`END`]. [`Selector::resolve()`] turns it into a [`Span`],
//! which is always within bounds.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use super::{ArithmeticError, Result};

/// The sentinel index. As a range end it means "through the end of the axis".
/// As a single index it means "the whole axis".
///
/// ```
/// use densemat::{Selector, Span, END};
/// assert_eq!(Selector::from(END).resolve(4), Ok(Span::new(0, 4)));
/// assert_eq!(Selector::from((1, END)).resolve(4), Ok(Span::new(1, 4)));
/// ```
pub const END: i32 = i32::MAX;

/// One end of a [`Selector`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Bound {
    /// An index. Negative values count from the end of the axis, so `-1` is
    /// the last element.
    At(isize),
    /// The sentinel [`END`].
    End,
}

impl Bound {
    /// The absolute offset of `self` in an axis of length `len`. The result is
    /// not checked.
    fn offset(self, len: usize) -> isize {
        match self {
            Bound::At(i) if i < 0 => len as isize + i,
            Bound::At(i) => i,
            Bound::End => len as isize,
        }
    }
}

impl From<i32> for Bound {
    fn from(i: i32) -> Self {
        if i == END { Bound::End } else { Bound::At(i as isize) }
    }
}

impl From<isize> for Bound {
    fn from(i: isize) -> Self { Bound::At(i) }
}

impl From<usize> for Bound {
    /// Indices too large for an `isize` are past the end of any axis, so they
    /// saturate rather than wrap to negative.
    fn from(i: usize) -> Self { Bound::At(isize::try_from(i).unwrap_or(isize::MAX)) }
}

// ----------------------------------------------------------------------------

/// A request for part of an axis.
///
/// Anything that converts into a `Selector` can be used to slice a
/// [`Matrix`] or a [`Section`]:
///
/// | Expression       | Meaning                          |
/// |------------------|----------------------------------|
/// | `2`              | the element at index 2           |
/// | `-1`             | the last element                 |
/// | `END`            | the whole axis                   |
/// | `(1, 3)`, `1..3` | elements 1 and 2                 |
/// | `(1, END)`, `1..`| everything from element 1 on     |
/// | `(0, -1)`, `..-1`| everything except the last       |
/// | `..`             | the whole axis                   |
///
/// [`Matrix`]: super::Matrix
/// [`Section`]: super::Section
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Selector {
    Index(Bound),
    Range(Bound, Bound),
}

impl Selector {
    pub fn index(i: isize) -> Self { Selector::Index(Bound::At(i)) }

    pub fn range(start: isize, end: isize) -> Self {
        Selector::Range(Bound::At(start), Bound::At(end))
    }

    /// Selects the whole axis.
    pub fn all() -> Self { Selector::Index(Bound::End) }

    /// Compute the absolute half-open range selected in an axis of length
    /// `len`.
    ///
    /// ```
    /// use densemat::{Selector, Span};
    /// assert_eq!(Selector::index(-1).resolve(5), Ok(Span::new(4, 5)));
    /// assert_eq!(Selector::range(-3, -1).resolve(5), Ok(Span::new(2, 4)));
    /// assert!(Selector::index(5).resolve(5).is_err());
    /// ```
    pub fn resolve(self, len: usize) -> Result<Span> {
        let (start, end) = match self {
            Selector::Index(Bound::End) => (0, len as isize),
            Selector::Index(i) => {
                let i = i.offset(len);
                (i, i.saturating_add(1))
            },
            Selector::Range(start, end) => (start.offset(len), end.offset(len)),
        };
        if 0 <= start && start <= end && end <= len as isize {
            Ok(Span::new(start as usize, end as usize))
        } else {
            Err(ArithmeticError::SliceOutOfBounds {start, end, len}.into())
        }
    }
}

macro_rules! impl_from_for_selector {
    ($($t:ty),*) => {$(
        impl From<$t> for Selector {
            fn from(i: $t) -> Self { Selector::Index(i.into()) }
        }

        impl From<($t, $t)> for Selector {
            fn from((start, end): ($t, $t)) -> Self { Selector::Range(start.into(), end.into()) }
        }

        impl From<Range<$t>> for Selector {
            fn from(r: Range<$t>) -> Self { Selector::Range(r.start.into(), r.end.into()) }
        }

        impl From<RangeFrom<$t>> for Selector {
            fn from(r: RangeFrom<$t>) -> Self { Selector::Range(r.start.into(), Bound::End) }
        }

        impl From<RangeTo<$t>> for Selector {
            fn from(r: RangeTo<$t>) -> Self { Selector::Range(Bound::At(0), r.end.into()) }
        }
    )*};
}

impl_from_for_selector!(i32, isize, usize);

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self { Selector::all() }
}

// ----------------------------------------------------------------------------

/// An absolute half-open range `start..end` of an axis.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "Span {}..{} is reversed", start, end);
        Self {start, end}
    }

    /// The whole of an axis of length `len`.
    pub fn full(len: usize) -> Self { Self::new(0, len) }

    pub fn len(self) -> usize { self.end - self.start }

    pub fn is_empty(self) -> bool { self.start == self.end }

    pub fn contains(self, i: usize) -> bool { self.start <= i && i < self.end }

    /// Resolve `selector` relative to `self`, giving a sub-range of `self` in
    /// the same coordinates as `self`.
    pub fn narrow(self, selector: impl Into<Selector>) -> Result<Span> {
        let inner = selector.into().resolve(self.len())?;
        Ok(Span::new(self.start + inner.start, self.start + inner.end))
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self { span.start..span.end }
}

// ----------------------------------------------------------------------------
