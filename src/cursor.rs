//! Row-major traversal of a [`Window`].
//!
//! A [`Cursor`] is a position in a window that can step forwards and
//! backwards, like a C++ bidirectional iterator. It never leaves the window:
//! after the last element of a row comes the first element of the next row of
//! the *window*, not of the storage. [`Iter`] and [`IterMut`] are the usual
//! Rust iterators built on the same traversal order.

use std::iter::{FusedIterator};

use super::{IteratorRangeError, Result, Span, Storage, Window};

/// A position in a [`Window`] of a [`Storage`].
///
/// ```
/// use densemat::{matrix, View, END};
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// let s = m.slice(END).unwrap().slice((1, END)).unwrap();
/// let mut c = s.begin();
/// assert_eq!(c.get(), Some(2.0));
/// c.advance().unwrap();
/// c.advance().unwrap();
/// assert_eq!(c.get(), Some(5.0));
/// c.retreat().unwrap();
/// assert_eq!(c.get(), Some(3.0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Cursor<'a> {
    storage: &'a Storage,
    window: Window,
    row: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the first element of `window`. If the window is empty this
    /// is the same as [`Cursor::end()`].
    pub fn begin(storage: &'a Storage, window: Window) -> Self {
        if window.is_empty() {
            Self::end(storage, window)
        } else {
            Self {storage, window, row: window.rows.start, col: window.cols.start}
        }
    }

    /// A cursor one step past the last element of `window`.
    pub fn end(storage: &'a Storage, window: Window) -> Self {
        Self {storage, window, row: window.rows.end, col: window.cols.start}
    }

    pub fn window(&self) -> Window { self.window }

    /// The current `(row, col)`, in storage coordinates.
    pub fn position(&self) -> (usize, usize) { (self.row, self.col) }

    pub fn is_begin(&self) -> bool { self.window.is_empty() || self.index() == 0 }

    pub fn is_end(&self) -> bool { self.row == self.window.rows.end }

    /// How many steps `self` is from the beginning of its window.
    pub fn index(&self) -> usize {
        let Window {rows, cols, ..} = self.window;
        (self.row - rows.start) * cols.len() + (self.col - cols.start)
    }

    /// The element under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<f64> {
        if self.is_end() { None } else { Some(self.storage.at(self.row, self.col)) }
    }

    /// Step forwards, wrapping from the right edge of the window to the left
    /// edge of the next row.
    pub fn advance(&mut self) -> Result<()> {
        if self.is_end() { return Err(IteratorRangeError::PastEnd.into()); }
        let Span {start, end} = self.window.cols;
        if self.col + 1 == end {
            self.row += 1;
            self.col = start;
        } else {
            self.col += 1;
        }
        Ok(())
    }

    /// Step backwards, wrapping from the left edge of the window to the right
    /// edge of the previous row.
    pub fn retreat(&mut self) -> Result<()> {
        if self.is_begin() { return Err(IteratorRangeError::BeforeBegin.into()); }
        let Span {start, end} = self.window.cols;
        if self.col == start {
            self.row -= 1;
            self.col = end - 1;
        } else {
            self.col -= 1;
        }
        Ok(())
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.storage, other.storage)
            && self.window == other.window
            && self.position() == other.position()
    }
}

impl<'a> Eq for Cursor<'a> {}

// ----------------------------------------------------------------------------

/// The return type of [`View::iter()`].
///
/// [`View::iter()`]: super::View::iter()
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
}

impl<'a> Iter<'a> {
    /// Iterate from `front` (inclusive) to `back` (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if the cursors are over different windows, or `back` is before
    /// `front`.
    pub fn new(front: Cursor<'a>, back: Cursor<'a>) -> Self {
        assert!(std::ptr::eq(front.storage, back.storage) && front.window == back.window);
        assert!(front.index() <= back.index());
        Self {front, back}
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front == self.back { return None; }
        let x = self.front.get()?;
        self.front.advance().ok()?;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.index() - self.front.index();
        (n, Some(n))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front == self.back { return None; }
        self.back.retreat().ok()?;
        self.back.get()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

// ----------------------------------------------------------------------------

/// The return type of [`ViewMut::iter_mut()`].
///
/// [`ViewMut::iter_mut()`]: super::ViewMut::iter_mut()
#[derive(Debug)]
pub struct IterMut<'a> {
    rows: std::iter::Take<std::iter::Skip<std::slice::ChunksMut<'a, f64>>>,
    cols: Span,
    current: std::slice::IterMut<'a, f64>,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(storage: &'a mut Storage, window: Window) -> Self {
        let width = storage.cols().max(1);
        let items: &'a mut [f64] = storage.as_mut();
        let items = if window.is_empty() { &mut items[..0] } else { items };
        let rows = items.chunks_mut(width).skip(window.rows.start).take(window.rows.len());
        Self {rows, cols: window.cols, current: Default::default()}
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut f64;

    fn next(&mut self) -> Option<&'a mut f64> {
        loop {
            if let Some(x) = self.current.next() { return Some(x); }
            let row = self.rows.next()?;
            self.current = row[self.cols.start..self.cols.end].iter_mut();
        }
    }
}

impl<'a> FusedIterator for IterMut<'a> {}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix, Error, Matrix, View, ViewMut, END};

    fn m3() -> Matrix { matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]] }

    #[test]
    fn corner() {
        let m = m3();
        let s = m.slice((0, 2)).unwrap().slice((0, 2)).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), [1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn whole_matrix() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(m.iter().collect::<Vec<_>>(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.iter().rev().collect::<Vec<_>>(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(m.iter().len(), 4);
    }

    #[test]
    fn last_row_stays_inside_window() {
        // A column-restricted window must not run on to the right of its last
        // row.
        let m = m3();
        let s = m.slice(END).unwrap().slice((0, 2)).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), [1.0, 2.0, 4.0, 5.0, 7.0, 8.0]);
        let s = m.slice(END).unwrap().slice(1).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), [2.0, 5.0, 8.0]);
        assert_eq!(s.iter().rev().collect::<Vec<_>>(), [8.0, 5.0, 2.0]);
    }

    #[test]
    fn end_position() {
        let m = m3();
        let s = m.slice((0, 2)).unwrap().slice((1, 3)).unwrap();
        let mut c = s.begin();
        assert_eq!(c.position(), (0, 1));
        for _ in 0..4 { c.advance().unwrap(); }
        assert_eq!(c, s.end());
        assert_eq!(c.position(), (2, 1));
        assert!(c.is_end());
        assert_eq!(c.get(), None);
    }

    #[test]
    fn out_of_range() {
        let m = matrix![[1, 2], [3, 4]];
        let mut c = m.end();
        assert_eq!(c.advance(), Err(Error::IteratorRange(IteratorRangeError::PastEnd)));
        c.retreat().unwrap();
        assert_eq!(c.get(), Some(4.0));
        let mut c = m.begin();
        assert_eq!(c.retreat(), Err(Error::IteratorRange(IteratorRangeError::BeforeBegin)));
        assert_eq!(c.get(), Some(1.0));
    }

    #[test]
    fn walk_back_and_forth() {
        let m = m3();
        let s = m.slice((1, 3)).unwrap().slice((1, 3)).unwrap();
        let mut c = s.end();
        let mut seen = Vec::new();
        while !c.is_begin() {
            c.retreat().unwrap();
            seen.push(c.get().unwrap());
        }
        assert_eq!(seen, [9.0, 8.0, 6.0, 5.0]);
        assert!(c.retreat().is_err());
    }

    #[test]
    fn empty_window() {
        let m = m3();
        let s = m.slice((1, 1)).unwrap();
        let mut c = s.begin();
        assert_eq!(c, s.end());
        assert!(c.advance().is_err());
        assert!(c.retreat().is_err());
        assert_eq!(s.iter().next(), None);
    }

    #[test]
    fn double_ended_meets_in_middle() {
        let m = m3();
        let mut it = m.iter();
        assert_eq!(it.next(), Some(1.0));
        assert_eq!(it.next_back(), Some(9.0));
        assert_eq!(it.len(), 7);
        let rest: Vec<f64> = it.collect();
        assert_eq!(rest, [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn cursors_of_different_matrices_differ() {
        let a = m3();
        let b = m3();
        assert!(a.begin() != b.begin());
        assert!(a.begin() == a.begin());
    }

    #[test]
    fn iter_mut_window() {
        let mut m = m3();
        {
            let mut s = m.slice_mut((1, 3)).unwrap().slice((0, 2)).unwrap();
            for x in s.iter_mut() { *x *= -1.0; }
        }
        assert_eq!(m, matrix![[1, 2, 3], [-4, -5, 6], [-7, -8, 9]]);
        assert_eq!(m.iter_mut().count(), 9);
    }
}
