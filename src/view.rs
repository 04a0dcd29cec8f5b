use super::{
    ArithmeticError, Binary, Cursor, Iter, IterMut, Matrix, Result, Selector, Span, Storage,
};

/// Which axes of a [`Window`] have been narrowed.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Level {
    /// The whole of a [`Matrix`].
    Unset,
    /// Narrowed along the row axis only.
    RowWindow,
    /// Narrowed along the column axis only, e.g. by [`View::column()`].
    ColumnWindow,
    /// Narrowed along both axes. Cannot be narrowed any further.
    Windowed,
}

impl Level {
    /// The level after narrowing the row axis.
    pub fn with_rows(self) -> Self {
        match self {
            Level::Unset | Level::RowWindow => Level::RowWindow,
            Level::ColumnWindow | Level::Windowed => Level::Windowed,
        }
    }

    /// The level after narrowing the column axis.
    pub fn with_columns(self) -> Self {
        match self {
            Level::Unset | Level::ColumnWindow => Level::ColumnWindow,
            Level::RowWindow | Level::Windowed => Level::Windowed,
        }
    }
}

/// A rectangle of a [`Storage`], in the storage's own coordinates.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Window {
    pub level: Level,
    pub rows: Span,
    pub cols: Span,
}

impl Window {
    /// The whole of a storage of shape `shape`.
    pub fn full(shape: (usize, usize)) -> Self {
        Self {level: Level::Unset, rows: Span::full(shape.0), cols: Span::full(shape.1)}
    }

    pub fn shape(&self) -> (usize, usize) { (self.rows.len(), self.cols.len()) }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() || self.cols.is_empty() }

    /// Apply one level of slicing.
    ///
    /// An [`Unset`] or [`ColumnWindow`] window is narrowed along its rows, a
    /// [`RowWindow`] along its columns. In each case `selector` is resolved
    /// against the window's own length along that axis. A [`Windowed`] window
    /// cannot be narrowed.
    ///
    /// [`Unset`]: Level::Unset
    /// [`RowWindow`]: Level::RowWindow
    /// [`ColumnWindow`]: Level::ColumnWindow
    /// [`Windowed`]: Level::Windowed
    pub fn narrow(self, selector: impl Into<Selector>) -> Result<Self> {
        match self.level {
            Level::Unset | Level::ColumnWindow => self.narrow_rows(selector),
            Level::RowWindow => self.narrow_columns(selector),
            Level::Windowed => Err(ArithmeticError::TooManySlices.into()),
        }
    }

    /// Narrow the row axis, whatever the level.
    pub fn narrow_rows(self, selector: impl Into<Selector>) -> Result<Self> {
        Ok(Self {level: self.level.with_rows(), rows: self.rows.narrow(selector)?, ..self})
    }

    /// Narrow the column axis, whatever the level.
    pub fn narrow_columns(self, selector: impl Into<Selector>) -> Result<Self> {
        Ok(Self {level: self.level.with_columns(), cols: self.cols.narrow(selector)?, ..self})
    }

    /// Map `(row, col)` relative to this window into storage coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the window.
    #[inline(always)]
    pub fn to_origin(&self, row: usize, col: usize) -> (usize, usize) {
        let shape = self.shape();
        assert!(
            row < shape.0 && col < shape.1,
            "Index {:?} is out of bounds for shape {:?}", (row, col), shape,
        );
        (self.rows.start + row, self.cols.start + col)
    }
}

// ----------------------------------------------------------------------------

/// Implemented by types that present a rectangle of a [`Storage`] as a
/// matrix: [`Matrix`] itself, and the [`Section`]s and [`SectionMut`]s
/// obtained by slicing one.
///
/// All coordinates passed to `View` methods are relative to the view's own
/// top-left corner.
///
/// ### Arithmetic
///
/// Every method that computes a new value returns an independent [`Matrix`].
/// Pointwise operations between two views require their shapes to be equal;
/// there is no broadcasting apart from combining with a scalar.
///
/// ```
/// use densemat::{matrix, View, ops::Add};
/// let a = matrix![[1, 2], [3, 4]];
/// let b = a.slice(-1).unwrap();
/// assert_eq!(b.to_matrix(), matrix![[3, 4]]);
/// assert_eq!(b.scalar::<Add>(1.0), matrix![[4, 5]]);
/// assert!(a.binary::<Add, _>(&b).is_err());
/// ```
pub trait View {
    /// The storage this view reads from.
    fn storage(&self) -> &Storage;

    /// The rectangle of [`Self::storage()`] this view covers.
    fn window(&self) -> Window;

    /// `(rows, columns)`.
    fn shape(&self) -> (usize, usize) { self.window().shape() }

    /// The number of elements.
    fn len(&self) -> usize {
        let (m, n) = self.shape();
        m * n
    }

    fn is_empty(&self) -> bool { self.window().is_empty() }

    /// The element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    fn at(&self, row: usize, col: usize) -> f64 {
        let (r, c) = self.window().to_origin(row, col);
        self.storage().at(r, c)
    }

    /// The element at `(row, col)`, or `None` if it is out of bounds.
    fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (m, n) = self.shape();
        if row < m && col < n { Some(self.at(row, col)) } else { None }
    }

    /// A [`Section`] covering the same rectangle as `self`.
    fn section(&self) -> Section<'_> { Section::new(self.storage(), self.window()) }

    /// A cursor at the first element, in row-major order.
    fn begin(&self) -> Cursor<'_> { Cursor::begin(self.storage(), self.window()) }

    /// A cursor one step past the last element.
    fn end(&self) -> Cursor<'_> { Cursor::end(self.storage(), self.window()) }

    /// Iterate over the elements in row-major order.
    ///
    /// ```
    /// use densemat::{matrix, View};
    /// let m = matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    /// let corner: Vec<f64> = m.slice((0, 2)).unwrap().slice((0, 2)).unwrap().iter().collect();
    /// assert_eq!(corner, [1.0, 2.0, 4.0, 5.0]);
    /// ```
    fn iter(&self) -> Iter<'_> { Iter::new(self.begin(), self.end()) }

    /// Copy the elements into a new [`Matrix`], severing any aliasing.
    fn to_matrix(&self) -> Matrix {
        Matrix::from_storage(Storage::new(self.shape(), self.iter().collect::<Vec<_>>()))
    }

    /// Copy the elements into nested `Vec`s, one per row.
    fn to_rows(&self) -> Vec<Vec<f64>> {
        let (m, n) = self.shape();
        (0..m).map(|r| (0..n).map(|c| self.at(r, c)).collect()).collect()
    }

    /// The sole element of a `1x1` view.
    ///
    /// ```
    /// use densemat::{matrix, View};
    /// let m = matrix![[1, 2], [3, 4]];
    /// assert_eq!(m.slice(1).unwrap().slice(0).unwrap().num(), Ok(3.0));
    /// assert!(m.num().is_err());
    /// ```
    fn num(&self) -> Result<f64> {
        match self.shape() {
            (1, 1) => Ok(self.at(0, 0)),
            (rows, cols) => Err(ArithmeticError::NotScalar {rows, cols}.into()),
        }
    }

    /// Apply `f` to every element.
    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix::from_storage(Storage::new(self.shape(), self.iter().map(f).collect::<Vec<_>>()))
    }

    /// Combine every element with `c` using operator `B`.
    fn scalar<B: Binary>(&self, c: f64) -> Matrix { self.map(|x| B::call(x, c)) }

    /// Combine `self` and `other` pointwise using operator `B`.
    ///
    /// Fails if the shapes differ.
    fn binary<B: Binary, V: View + ?Sized>(&self, other: &V) -> Result<Matrix> {
        check_same_shape(self.shape(), other.shape())?;
        let items: Vec<f64> = self.iter().zip(other.iter()).map(|(x, y)| B::call(x, y)).collect();
        Ok(Matrix::from_storage(Storage::new(self.shape(), items)))
    }

    /// A new [`Matrix`] with the axes swapped.
    fn transpose(&self) -> Matrix {
        let (m, n) = self.shape();
        Matrix::from_fn((n, m), |r, c| self.at(c, r))
    }

    /// A single row, as a view.
    ///
    /// `i` may be negative, or [`END`] for all rows.
    ///
    /// [`END`]: super::END
    fn row(&self, i: impl Into<Selector>) -> Result<Section<'_>> {
        Ok(Section::new(self.storage(), self.window().narrow_rows(i)?))
    }

    /// A single column, as a view.
    ///
    /// `j` may be negative, or [`END`] for all columns.
    ///
    /// [`END`]: super::END
    fn column(&self, j: impl Into<Selector>) -> Result<Section<'_>> {
        Ok(Section::new(self.storage(), self.window().narrow_columns(j)?))
    }

    /// Every row, in order.
    fn rows(&self) -> Vec<Section<'_>> {
        (0..self.shape().0).filter_map(|i| self.row(i).ok()).collect()
    }

    /// Every column, in order.
    fn columns(&self) -> Vec<Section<'_>> {
        (0..self.shape().1).filter_map(|j| self.column(j).ok()).collect()
    }
}

pub(crate) fn check_same_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(ArithmeticError::ShapeMismatch {left, right}.into())
    }
}

// ----------------------------------------------------------------------------

/// A [`View`] whose elements can be written.
///
/// Writes go straight to the underlying [`Storage`], so writing through a
/// [`SectionMut`] modifies the [`Matrix`] it was sliced from.
///
/// ```
/// use densemat::{matrix, ViewMut, END};
/// let mut m = matrix![[1, 2], [3, 4]];
/// m.slice_mut(0).unwrap().fill(9.0);
/// assert_eq!(m, matrix![[9, 9], [3, 4]]);
/// m.slice_mut(END).unwrap().slice(-1).unwrap().fill(0.0);
/// assert_eq!(m, matrix![[9, 0], [3, 0]]);
/// ```
pub trait ViewMut: View {
    /// The storage this view writes to.
    fn storage_mut(&mut self) -> &mut Storage;

    /// Mutably borrow the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let (r, c) = self.window().to_origin(row, col);
        self.storage_mut().at_mut(r, c)
    }

    fn set(&mut self, row: usize, col: usize, value: f64) { *self.at_mut(row, col) = value; }

    /// A [`SectionMut`] covering the same rectangle as `self`.
    fn section_mut(&mut self) -> SectionMut<'_> {
        let window = self.window();
        SectionMut::new(self.storage_mut(), window)
    }

    /// Iterate mutably over the elements in row-major order.
    fn iter_mut(&mut self) -> IterMut<'_> {
        let window = self.window();
        IterMut::new(self.storage_mut(), window)
    }

    /// Overwrite every element with `value`.
    fn fill(&mut self, value: f64) {
        for x in self.iter_mut() { *x = value; }
    }

    /// Overwrite the elements with those of `other`, which must have the same
    /// shape.
    ///
    /// `other` cannot borrow the same [`Matrix`] as `self`. To copy part of a
    /// matrix into another part of it, promote the source first with
    /// [`View::to_matrix()`].
    fn assign<V: View + ?Sized>(&mut self, other: &V) -> Result<()> {
        check_same_shape(self.shape(), other.shape())?;
        for (x, y) in self.iter_mut().zip(other.iter()) { *x = y; }
        Ok(())
    }

    /// Combine every element with `c` using operator `B`, in place.
    fn scalar_assign<B: Binary>(&mut self, c: f64) {
        for x in self.iter_mut() { *x = B::call(*x, c); }
    }

    /// Combine `self` and `other` pointwise using operator `B`, in place.
    ///
    /// Fails if the shapes differ, in which case `self` is unchanged.
    fn binary_assign<B: Binary, V: View + ?Sized>(&mut self, other: &V) -> Result<()> {
        check_same_shape(self.shape(), other.shape())?;
        for (x, y) in self.iter_mut().zip(other.iter()) { *x = B::call(*x, y); }
        Ok(())
    }

    /// A single row, as a writable view.
    fn row_mut(&mut self, i: impl Into<Selector>) -> Result<SectionMut<'_>> {
        let window = self.window().narrow_rows(i)?;
        Ok(SectionMut::new(self.storage_mut(), window))
    }

    /// A single column, as a writable view.
    fn column_mut(&mut self, j: impl Into<Selector>) -> Result<SectionMut<'_>> {
        let window = self.window().narrow_columns(j)?;
        Ok(SectionMut::new(self.storage_mut(), window))
    }
}

// ----------------------------------------------------------------------------

/// A read-only rectangle of a [`Matrix`].
///
/// A `Section` borrows the matrix it was sliced from, so the matrix cannot be
/// modified or dropped while the `Section` exists. Use [`View::to_matrix()`]
/// or [`Matrix::from()`] to obtain an independent copy.
#[derive(Debug, Copy, Clone)]
pub struct Section<'a> {
    storage: &'a Storage,
    window: Window,
}

impl<'a> Section<'a> {
    pub(crate) fn new(storage: &'a Storage, window: Window) -> Self {
        debug_assert!(window.rows.end <= storage.rows() && window.cols.end <= storage.cols());
        Self {storage, window}
    }

    pub fn level(&self) -> Level { self.window.level }

    /// Narrow this `Section` by one more level. See [`Window::narrow()`].
    ///
    /// ```
    /// use densemat::{matrix, View};
    /// let m = matrix![[1, 2, 3], [4, 5, 6]];
    /// let s = m.slice(1).unwrap().slice((1, -1)).unwrap();
    /// assert_eq!(s.to_matrix(), matrix![[5]]);
    /// assert!(s.slice(0).is_err());
    /// ```
    pub fn slice(self, selector: impl Into<Selector>) -> Result<Section<'a>> {
        Ok(Self::new(self.storage, self.window.narrow(selector)?))
    }
}

impl<'a> View for Section<'a> {
    #[inline(always)]
    fn storage(&self) -> &Storage { self.storage }
    #[inline(always)]
    fn window(&self) -> Window { self.window }
}

impl<'a> std::fmt::Display for Section<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::matrix::fmt_view(self, f)
    }
}

// ----------------------------------------------------------------------------

/// A writable rectangle of a [`Matrix`].
///
/// A `SectionMut` exclusively borrows the matrix it was sliced from. Writes
/// through it are visible in the matrix once the borrow ends.
#[derive(Debug)]
pub struct SectionMut<'a> {
    storage: &'a mut Storage,
    window: Window,
}

impl<'a> SectionMut<'a> {
    pub(crate) fn new(storage: &'a mut Storage, window: Window) -> Self {
        debug_assert!(window.rows.end <= storage.rows() && window.cols.end <= storage.cols());
        Self {storage, window}
    }

    pub fn level(&self) -> Level { self.window.level }

    /// Narrow this `SectionMut` by one more level. See [`Window::narrow()`].
    pub fn slice(self, selector: impl Into<Selector>) -> Result<SectionMut<'a>> {
        let window = self.window.narrow(selector)?;
        Ok(Self::new(self.storage, window))
    }

    /// Borrow `self` for a shorter time, e.g. to slice it without giving it
    /// up.
    pub fn reborrow(&mut self) -> SectionMut<'_> { SectionMut::new(&mut *self.storage, self.window) }
}

impl<'a> View for SectionMut<'a> {
    #[inline(always)]
    fn storage(&self) -> &Storage { &*self.storage }
    #[inline(always)]
    fn window(&self) -> Window { self.window }
}

impl<'a> ViewMut for SectionMut<'a> {
    #[inline(always)]
    fn storage_mut(&mut self) -> &mut Storage { &mut *self.storage }
}

impl<'a> std::fmt::Display for SectionMut<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::matrix::fmt_view(self, f)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix, Error, END};
    use crate::ops::{Add, Mul};

    fn m3() -> Matrix { matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]] }

    #[test]
    fn levels() {
        let m = m3();
        assert_eq!(m.window().level, Level::Unset);
        let s = m.slice(0).unwrap();
        assert_eq!(s.level(), Level::RowWindow);
        assert_eq!(s.window().cols, Span::full(3));
        let s = s.slice(1).unwrap();
        assert_eq!(s.level(), Level::Windowed);
        assert_eq!(s.window().rows, Span::new(0, 1));
        assert_eq!(s.window().cols, Span::new(1, 2));
    }

    #[test]
    fn third_slice_fails() {
        let m = m3();
        let s = m.slice((0, 2)).unwrap().slice((0, 2)).unwrap();
        assert_eq!(s.slice(0).unwrap_err(), Error::Arithmetic(ArithmeticError::TooManySlices));
        let mut m = m3();
        let s = m.slice_mut(END).unwrap().slice(0).unwrap();
        assert!(s.slice(0).is_err());
    }

    #[test]
    fn second_level_resolves_against_own_width() {
        let m = m3();
        let s = m.slice(-1).unwrap().slice(-1).unwrap();
        assert_eq!(s.num(), Ok(9.0));
        let s = m.slice((1, END)).unwrap().slice((1, END)).unwrap();
        assert_eq!(s.to_matrix(), matrix![[5, 6], [8, 9]]);
    }

    #[test]
    fn negative_index_matches_positive() {
        let m = m3();
        assert_eq!(m.slice(-1).unwrap().to_matrix(), m.slice(2).unwrap().to_matrix());
        assert_eq!(
            m.slice(END).unwrap().slice(-1).unwrap().to_matrix(),
            m.slice(END).unwrap().slice(2).unwrap().to_matrix(),
        );
    }

    #[test]
    fn write_through() {
        let mut m = matrix![[1, 2], [3, 4]];
        m.slice_mut(0).unwrap().fill(9.0);
        assert_eq!(m.at(0, 0), 9.0);
        assert_eq!(m.at(0, 1), 9.0);
        assert_eq!(m.at(1, 0), 3.0);
    }

    #[test]
    fn border() {
        let mut m = Matrix::filled(4, 4, 0.0);
        m.slice_mut(END).unwrap().slice(0).unwrap().fill(1.0);
        m.slice_mut(END).unwrap().slice(-1).unwrap().fill(1.0);
        m.slice_mut(0).unwrap().slice(END).unwrap().fill(1.0);
        m.slice_mut(-1).unwrap().slice(END).unwrap().fill(1.0);
        assert_eq!(m, matrix![
            [1, 1, 1, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 1, 1, 1],
        ]);
    }

    #[test]
    fn assign() {
        let mut m = m3();
        let source = matrix![[10, 20], [30, 40]];
        m.slice_mut((1, END)).unwrap().slice((0, 2)).unwrap().assign(&source).unwrap();
        assert_eq!(m, matrix![[1, 2, 3], [10, 20, 6], [30, 40, 9]]);
        let e = m.slice_mut(0).unwrap().assign(&source).unwrap_err();
        assert_eq!(e, Error::Arithmetic(ArithmeticError::ShapeMismatch {left: (1, 3), right: (2, 2)}));
        assert_eq!(m.at(0, 0), 1.0);
    }

    #[test]
    fn assign_from_same_matrix_via_copy() {
        let mut m = m3();
        let last = m.row(-1).unwrap().to_matrix();
        m.row_mut(0).unwrap().assign(&last).unwrap();
        assert_eq!(m.row(0).unwrap().to_matrix(), matrix![[7, 8, 9]]);
    }

    #[test]
    fn compound_through_view() {
        let mut m = m3();
        m.column_mut(1).unwrap().scalar_assign::<Mul>(10.0);
        assert_eq!(m, matrix![[1, 20, 3], [4, 50, 6], [7, 80, 9]]);
        let ones = Matrix::filled(1, 3, 1.0);
        m.row_mut(-1).unwrap().binary_assign::<Add, _>(&ones).unwrap();
        assert_eq!(m.row(2).unwrap().to_matrix(), matrix![[8, 81, 10]]);
        assert!(m.row_mut(0).unwrap().binary_assign::<Add, _>(&m3()).is_err());
    }

    #[test]
    fn rows_and_columns() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let rows: Vec<Matrix> = m.rows().iter().map(View::to_matrix).collect();
        assert_eq!(rows, [matrix![[1, 2, 3]], matrix![[4, 5, 6]]]);
        let cols: Vec<Matrix> = m.columns().iter().map(View::to_matrix).collect();
        assert_eq!(cols, [matrix![[1], [4]], matrix![[2], [5]], matrix![[3], [6]]]);
        assert_eq!(m.column(-1).unwrap().to_matrix(), matrix![[3], [6]]);
        assert!(m.row(2).is_err());
        assert!(m.column(-4).is_err());
    }

    #[test]
    fn row_of_a_row_window_can_still_be_narrowed() {
        let m = m3();
        let r = m.row(1).unwrap();
        assert_eq!(r.level(), Level::RowWindow);
        assert_eq!(r.slice((1, END)).unwrap().to_matrix(), matrix![[5, 6]]);
        assert_eq!(m.column(0).unwrap().level(), Level::ColumnWindow);
        assert_eq!(r.row(0).unwrap().level(), Level::RowWindow);
        assert_eq!(r.column(0).unwrap().level(), Level::Windowed);
    }

    #[test]
    fn column_can_still_be_narrowed() {
        let m = matrix![[1, 2], [3, 4]];
        let c = m.column(1).unwrap();
        assert_eq!(c.slice(1).unwrap().num(), Ok(4.0));
        assert_eq!(c.slice(-2).unwrap().num(), Ok(2.0));
        assert_eq!(c.slice(1).unwrap().level(), Level::Windowed);
        assert!(c.slice(1).unwrap().slice(0).is_err());
        let columns = m.columns();
        assert_eq!(columns[0].slice(1).unwrap().num(), Ok(3.0));
        assert_eq!(m.column(0).unwrap().to_matrix(), m.row(END).unwrap().slice(0).unwrap().to_matrix());
    }

    #[test]
    fn column_mut_can_still_be_narrowed() {
        let mut m = m3();
        m.column_mut(-1).unwrap().slice((0, 2)).unwrap().fill(0.0);
        assert_eq!(m, matrix![[1, 2, 0], [4, 5, 0], [7, 8, 9]]);
    }

    #[test]
    fn reborrow() {
        let mut m = m3();
        let mut s = m.slice_mut((0, 2)).unwrap();
        s.reborrow().slice(0).unwrap().fill(0.0);
        s.reborrow().slice(-1).unwrap().fill(-1.0);
        assert_eq!(s.to_matrix(), matrix![[0, 2, -1], [0, 5, -1]]);
        assert_eq!(m.at(2, 2), 9.0);
    }

    #[test]
    fn get_and_num() {
        let m = m3();
        let s = m.slice(1).unwrap();
        assert_eq!(s.get(0, 2), Some(6.0));
        assert_eq!(s.get(1, 0), None);
        assert_eq!(
            s.num(),
            Err(Error::Arithmetic(ArithmeticError::NotScalar {rows: 1, cols: 3})),
        );
    }

    #[test]
    fn empty_section() {
        let m = m3();
        let s = m.slice((1, 1)).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
        assert_eq!(s.to_matrix().shape(), (0, 3));
    }

    #[test]
    #[should_panic]
    fn at_outside_window() {
        let m = m3();
        m.slice(0).unwrap().at(1, 0);
    }
}
