/// A dense, rectangular block of `f64`s stored in row-major order.
///
/// Every row has the same length. `Storage` is the representation behind every
/// [`Matrix`]; views never own one, they borrow their origin's.
///
/// [`Matrix`]: super::Matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    shape: (usize, usize),
    items: Box<[f64]>,
}

impl Storage {
    fn new_inner(shape: (usize, usize), items: Box<[f64]>) -> Self {
        assert_eq!(shape.0 * shape.1, items.len());
        Self {shape, items}
    }

    /// Constructs a `Storage` of shape `(rows, cols)` given its elements in
    /// row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `items` has the wrong length.
    ///
    /// ```
    /// use densemat::Storage;
    /// let s = Storage::new((2, 3), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(s.at(1, 0), 4.0);
    /// assert_eq!(s.row(0), [1.0, 2.0, 3.0]);
    /// ```
    pub fn new(shape: (usize, usize), items: impl Into<Box<[f64]>>) -> Self {
        Self::new_inner(shape, items.into())
    }

    /// Constructs a `Storage` of shape `shape` from a function of `(row, col)`.
    pub fn from_fn(shape: (usize, usize), mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut items = Vec::with_capacity(shape.0 * shape.1);
        for r in 0..shape.0 {
            for c in 0..shape.1 {
                items.push(f(r, c));
            }
        }
        Self::new_inner(shape, items.into())
    }

    pub fn shape(&self) -> (usize, usize) { self.shape }

    pub fn rows(&self) -> usize { self.shape.0 }

    pub fn cols(&self) -> usize { self.shape.1 }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.shape.0 && col < self.shape.1,
            "Index {:?} is out of bounds for shape {:?}", (row, col), self.shape,
        );
        row * self.shape.1 + col
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 { self.items[self.offset(row, col)] }

    #[inline(always)]
    pub fn at_ref(&self, row: usize, col: usize) -> &f64 { &self.items[self.offset(row, col)] }

    #[inline(always)]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let offset = self.offset(row, col);
        &mut self.items[offset]
    }

    /// Borrow row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.shape.1;
        &self.items[row * n..(row + 1) * n]
    }

    /// Mutably borrow row `row` as a slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let n = self.shape.1;
        &mut self.items[row * n..(row + 1) * n]
    }

    /// Exchange two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b { return; }
        let n = self.shape.1;
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.items.split_at_mut(high * n);
        head[low * n..(low + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Returns the raw elements in row-major order.
    pub fn to_raw(self) -> Box<[f64]> { self.items }
}

impl std::convert::AsRef<[f64]> for Storage {
    fn as_ref(&self) -> &[f64] { &self.items }
}

impl std::convert::AsMut<[f64]> for Storage {
    fn as_mut(&mut self) -> &mut [f64] { &mut self.items }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn() {
        let s = Storage::from_fn((2, 2), |r, c| (10 * r + c) as f64);
        assert_eq!(s.as_ref(), [0.0, 1.0, 10.0, 11.0]);
        assert_eq!(s.shape(), (2, 2));
    }

    #[test]
    fn swap_rows() {
        let mut s = Storage::new((3, 2), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        s.swap_rows(2, 0);
        assert_eq!(s.as_ref(), [5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
        s.swap_rows(1, 1);
        assert_eq!(s.row(1), [3.0, 4.0]);
    }

    #[test]
    fn at_mut() {
        let mut s = Storage::new((1, 2), [1.0, 2.0]);
        *s.at_mut(0, 1) = 7.0;
        s.row_mut(0)[0] = 8.0;
        assert_eq!(&*s.to_raw(), [8.0, 7.0]);
    }

    #[test]
    #[should_panic]
    fn wrong_length() {
        Storage::new((2, 2), [1.0]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        Storage::new((1, 1), [1.0]).at(0, 1);
    }
}
