use approx::{AbsDiffEq, RelativeEq};

use super::{
    impl_assign_ops_for_view_mut, impl_ops_for_view, Iter, Result, Section, SectionMut, Selector,
    Storage, View, ViewMut, Window,
};

/// A dense matrix of `f64`s that owns its elements.
///
/// Slicing a `Matrix` with [`Matrix::slice()`] or [`Matrix::slice_mut()`]
/// gives a view that borrows it. Arithmetic between matrices and views always
/// produces a fresh `Matrix`.
///
/// ```
/// use densemat::{matrix, View};
/// let m = matrix![[1, 2], [3, 4]];
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.at(1, 0), 3.0);
/// assert_eq!(m[(0, 1)], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    storage: Storage,
}

impl Matrix {
    /// Constructs a `Matrix` from its rows.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, if the rows are empty, or if they differ
    /// in length.
    pub fn new(rows: Vec<Vec<f64>>) -> Self { Self::from_rows(&rows) }

    /// Constructs a `Matrix` by copying `rows`.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, if the rows are empty, or if they differ
    /// in length.
    ///
    /// ```
    /// use densemat::{Matrix, View};
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "A Matrix needs at least one row");
        let n = rows[0].as_ref().len();
        assert!(n > 0, "A Matrix needs at least one column");
        let mut items = Vec::with_capacity(rows.len() * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), n, "Row {} has length {} but row 0 has length {}", i, row.len(), n);
            items.extend_from_slice(row);
        }
        Self::from_storage(Storage::new((rows.len(), n), items))
    }

    /// An `m`-by-`n` `Matrix` with every element equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `m` or `n` is zero. An empty `Matrix` can still be had by
    /// promoting an empty [`Section`], e.g. `m.slice((1, 1))`.
    pub fn filled(m: usize, n: usize, value: f64) -> Self {
        assert!(m > 0 && n > 0, "A Matrix needs at least one row and one column, not {}x{}", m, n);
        Self::from_storage(Storage::new((m, n), vec![value; m * n]))
    }

    /// Construct a `Matrix` of shape `shape` from a function of `(row, col)`.
    ///
    /// ```
    /// use densemat::{matrix, Matrix};
    /// let m = Matrix::from_fn((2, 3), |r, c| (r * 3 + c) as f64);
    /// assert_eq!(m, matrix![[0, 1, 2], [3, 4, 5]]);
    /// ```
    pub fn from_fn(shape: (usize, usize), f: impl FnMut(usize, usize) -> f64) -> Self {
        Self::from_storage(Storage::from_fn(shape, f))
    }

    pub fn from_storage(storage: Storage) -> Self { Self {storage} }

    pub fn into_storage(self) -> Storage { self.storage }

    /// Select some rows. The result can be sliced once more to select some
    /// columns. See [`Selector`] for what can be passed.
    ///
    /// ```
    /// use densemat::{matrix, View, END};
    /// let a_b = matrix![[1, 2, 2, 1], [3, 4, 6, 5], [3, 6, 8, 6]];
    /// let a = a_b.slice(END).unwrap().slice((0, 3)).unwrap();
    /// let b = a_b.slice(END).unwrap().slice(3).unwrap();
    /// assert_eq!(a.shape(), (3, 3));
    /// assert_eq!(b.to_matrix(), matrix![[1], [5], [6]]);
    /// ```
    pub fn slice(&self, selector: impl Into<Selector>) -> Result<Section<'_>> {
        self.section().slice(selector)
    }

    /// Select some rows for writing.
    ///
    /// ```
    /// use densemat::{matrix, ViewMut};
    /// let mut m = matrix![[1, 2], [3, 4]];
    /// m.slice_mut(-1).unwrap().fill(0.0);
    /// assert_eq!(m, matrix![[1, 2], [0, 0]]);
    /// ```
    pub fn slice_mut(&mut self, selector: impl Into<Selector>) -> Result<SectionMut<'_>> {
        self.section_mut().slice(selector)
    }

    /// Unary `+`. Returns a copy.
    pub fn pos(&self) -> Matrix { self.clone() }
}

impl View for Matrix {
    #[inline(always)]
    fn storage(&self) -> &Storage { &self.storage }
    #[inline(always)]
    fn window(&self) -> Window { Window::full(self.storage.shape()) }
}

impl ViewMut for Matrix {
    #[inline(always)]
    fn storage_mut(&mut self) -> &mut Storage { &mut self.storage }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        self.storage.at_ref(row, col)
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 { self.storage.at_mut(row, col) }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = f64;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a> From<Section<'a>> for Matrix {
    fn from(s: Section<'a>) -> Self { s.to_matrix() }
}

impl<'a> From<SectionMut<'a>> for Matrix {
    fn from(s: SectionMut<'a>) -> Self { s.to_matrix() }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self { Self::new(rows) }
}

impl<'s, 'a> IntoIterator for &'s Section<'a> {
    type Item = f64;
    type IntoIter = Iter<'s>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl_ops_for_view!(<> Matrix);
impl_ops_for_view!(<'a> Section<'a>);
impl_ops_for_view!(<'a> SectionMut<'a>);
impl_assign_ops_for_view_mut!(<> Matrix);
impl_assign_ops_for_view_mut!(<'a> SectionMut<'a>);

macro_rules! impl_by_value_scalar_op {
    ($($op:ident { $method:ident }),*) => {$(
        impl std::ops::$op<f64> for Matrix {
            type Output = Matrix;
            fn $method(mut self, c: f64) -> Matrix {
                self.scalar_assign::<super::ops::$op>(c);
                self
            }
        }
    )*};
}

impl_by_value_scalar_op!(Add { add }, Sub { sub }, Mul { mul }, Div { div });

impl std::ops::Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix { self * -1.0 }
}

// ----------------------------------------------------------------------------

/// Writes `v` as `Matrix([`, one tab-indented row per line, then `])`.
pub(crate) fn fmt_view<V: View + ?Sized>(v: &V, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "Matrix([")?;
    for row in v.rows() {
        write!(f, "\t[")?;
        for (j, x) in row.iter().enumerate() {
            if j > 0 { write!(f, ", ")?; }
            write!(f, "{}", x)?;
        }
        writeln!(f, "]")?;
    }
    write!(f, "])")
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { fmt_view(self, f) }
}

// ----------------------------------------------------------------------------

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { <f64 as AbsDiffEq>::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self.iter().zip(other.iter()).all(|(x, y)| x.abs_diff_eq(&y, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 { <f64 as RelativeEq>::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self.iter().zip(other.iter()).all(|(x, y)| x.relative_eq(&y, epsilon, max_relative))
    }
}

// ----------------------------------------------------------------------------

/// Constructs a [`Matrix`] from a nested literal of rows. Each element is
/// converted with `as f64`.
///
/// ```
/// use densemat::{matrix, View};
/// let m = matrix![
///     [1, 2, 2, 1],
///     [3, 4, 6, 5],
///     [3, 6, 8, 6],
/// ];
/// assert_eq!(m.shape(), (3, 4));
/// assert_eq!(m.at(2, 3), 6.0);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::new(vec![$(vec![$(($x) as f64),*]),+])
    };
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArithmeticError, Error, END};
    use approx::{assert_abs_diff_eq, assert_relative_ne};

    #[test]
    fn construct() {
        let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m, matrix![[1, 2], [3, 4]]);
        assert_eq!(Matrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), m);
        assert_eq!(Matrix::filled(2, 3, 7.0).to_rows(), vec![vec![7.0; 3]; 2]);
        assert_eq!(m.storage().as_ref(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.clone().into_storage().shape(), (2, 2));
    }

    #[test]
    #[should_panic]
    fn ragged() {
        matrix![[1, 2], [3]];
    }

    #[test]
    #[should_panic]
    fn no_columns() {
        Matrix::new(vec![vec![]]);
    }

    #[test]
    #[should_panic]
    fn filled_without_rows() {
        Matrix::filled(0, 2, 1.0);
    }

    #[test]
    fn empty_section_still_promotes() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(m.slice((1, 1)).unwrap().to_matrix().shape(), (0, 2));
    }

    #[test]
    fn index() {
        let mut m = matrix![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m[(1, 2)], 6.0);
        m[(0, 1)] = -2.0;
        assert_eq!(m.at(0, 1), -2.0);
        m.set(1, 0, 40.0);
        assert_eq!(m[(1, 0)], 40.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let _ = m[(0, 3)];
    }

    #[test]
    fn promote() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let copy = Matrix::from(m.slice(END).unwrap().slice((1, END)).unwrap());
        assert_eq!(copy, matrix![[2, 3], [5, 6]]);
        let mut m = m;
        let copy = Matrix::from(m.slice_mut(0).unwrap());
        m.fill(0.0);
        assert_eq!(copy, matrix![[1, 2, 3]]);
    }

    #[test]
    fn transpose() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.transpose(), matrix![[1, 4], [2, 5], [3, 6]]);
        let s = matrix![[1, 2], [3, 4]];
        assert_eq!(s.transpose().transpose(), s);
    }

    #[test]
    fn by_value_ops() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(m.clone() * 2.0 + 1.0, matrix![[3, 5], [7, 9]]);
        assert_eq!(-m.clone(), matrix![[-1, -2], [-3, -4]]);
        assert_eq!((m.clone() - 1.0) / 2.0, matrix![[0, 0.5], [1, 1.5]]);
    }

    #[test]
    fn iterate() {
        let m = matrix![[1, 2], [3, 4]];
        let mut total = 0.0;
        for x in &m { total += x; }
        assert_eq!(total, 10.0);
        let corner = m.slice(0).unwrap();
        assert_eq!((&corner).into_iter().collect::<Vec<_>>(), [1.0, 2.0]);
    }

    #[test]
    fn display() {
        let m = matrix![[1, 2.5], [-3, 4]];
        assert_eq!(m.to_string(), "Matrix([\n\t[1, 2.5]\n\t[-3, 4]\n])");
        let s = m.slice(END).unwrap().slice(0).unwrap();
        assert_eq!(s.to_string(), "Matrix([\n\t[1]\n\t[-3]\n])");
    }

    #[test]
    fn approx_eq() {
        let a = matrix![[1, 2], [3, 4]];
        let b = &a + 1e-13;
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        assert_relative_ne!(a, matrix![[1, 2, 3]]);
        assert_relative_ne!(a, &a + 1e-3);
    }

    #[test]
    fn num() {
        assert_eq!(matrix![[2.5]].num(), Ok(2.5));
        assert_eq!(
            matrix![[1, 2]].num(),
            Err(Error::Arithmetic(ArithmeticError::NotScalar {rows: 1, cols: 2})),
        );
    }
}
