//! Linear algebra on anything that implements [`View`].
//!
//! Every function here leaves its arguments untouched and returns a new
//! [`Matrix`]. The elimination kernels use the first nonzero entry of each
//! column as its pivot and perform no other pivoting.

use super::{ArithmeticError, Matrix, Result, Storage, View, ViewMut};

/// [`invert()`] treats a determinant as zero if its magnitude is at most this
/// fraction of the Hadamard bound.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

fn check_square<V: View + ?Sized>(a: &V) -> Result<usize> {
    match a.shape() {
        (rows, cols) if rows == cols => Ok(rows),
        (rows, cols) => Err(ArithmeticError::NotSquare {rows, cols}.into()),
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len { Ok(()) } else { Err(ArithmeticError::IndexOutOfBounds {index, len}.into()) }
}

/// Adds `scale` times row `from` into row `to`.
fn add_scaled_row(storage: &mut Storage, from: usize, scale: f64, to: usize) {
    for j in 0..storage.cols() {
        let x = storage.at(from, j);
        *storage.at_mut(to, j) += scale * x;
    }
}

// ----------------------------------------------------------------------------

/// Multiply every element of `a` by `c`.
pub fn multiply_scalar<V: View + ?Sized>(a: &V, c: f64) -> Matrix {
    a.scalar::<super::ops::Mul>(c)
}

/// The matrix product `a b`.
///
/// ```
/// use densemat::{matrix, multiply};
/// let a = matrix![[1, 2], [3, 4]];
/// let b = matrix![[5], [6]];
/// assert_eq!(multiply(&a, &b), Ok(matrix![[17], [39]]));
/// assert!(multiply(&b, &a).is_err());
/// ```
pub fn multiply<A: View + ?Sized, B: View + ?Sized>(a: &A, b: &B) -> Result<Matrix> {
    let (left, right) = (a.shape(), b.shape());
    if left.1 != right.0 {
        return Err(ArithmeticError::InnerDimensionMismatch {left, right}.into());
    }
    let inner = left.1;
    Ok(Matrix::from_fn((left.0, right.1), |i, j| {
        (0..inner).map(|k| a.at(i, k) * b.at(k, j)).sum()
    }))
}

/// Add `c` to every element of `a`.
pub fn sum_scalar<V: View + ?Sized>(a: &V, c: f64) -> Matrix {
    a.scalar::<super::ops::Add>(c)
}

/// The pointwise sum of `a` and `b`, which must have the same shape.
pub fn sum<A: View + ?Sized, B: View + ?Sized>(a: &A, b: &B) -> Result<Matrix> {
    a.binary::<super::ops::Add, B>(b)
}

pub fn transpose<V: View + ?Sized>(a: &V) -> Matrix { a.transpose() }

/// `a` with row `i` and column `j` removed.
///
/// ```
/// use densemat::{matrix, minor};
/// let a = matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
/// assert_eq!(minor(&a, 1, 0), Ok(matrix![[2, 3], [8, 9]]));
/// assert!(minor(&a, 3, 0).is_err());
/// ```
pub fn minor<V: View + ?Sized>(a: &V, i: usize, j: usize) -> Result<Matrix> {
    let n = check_square(a)?;
    check_index(i, n)?;
    check_index(j, n)?;
    Ok(Matrix::from_fn((n - 1, n - 1), |r, c| {
        a.at(r + (r >= i) as usize, c + (c >= j) as usize)
    }))
}

/// Bring `m` into row echelon form in place, returning the number of row
/// swaps performed.
///
/// Columns are processed left to right. Within each column the first nonzero
/// entry at or below the current pivot count is the pivot. Every other nonzero
/// entry below it is eliminated, then the pivot row is swapped into place.
/// Columns with no candidate are skipped.
fn eliminate(m: &mut Matrix) -> usize {
    let (rows, cols) = m.shape();
    let storage = m.storage_mut();
    let mut p = 0;
    let mut swaps = 0;
    for c in 0..cols {
        if p == rows { break; }
        let pivot_row = match (p..rows).find(|&r| storage.at(r, c) != 0.0) {
            Some(r) => r,
            None => {
                log::trace!("column {} has no pivot", c);
                continue;
            },
        };
        let pivot = storage.at(pivot_row, c);
        log::trace!("column {}: pivot {} in row {}", c, pivot, pivot_row);
        for r in p..rows {
            let x = storage.at(r, c);
            if r != pivot_row && x != 0.0 {
                add_scaled_row(storage, pivot_row, -(x / pivot), r);
                *storage.at_mut(r, c) = 0.0;
            }
        }
        if pivot_row != p {
            log::trace!("swap rows {} and {}", pivot_row, p);
            storage.swap_rows(pivot_row, p);
            swaps += 1;
        }
        p += 1;
    }
    swaps
}

/// The row echelon form of `a`.
///
/// ```
/// use densemat::{matrix, upper_triangular};
/// let a = matrix![[0, 2], [1, 1], [2, 2]];
/// assert_eq!(upper_triangular(&a), matrix![[1, 1], [0, 2], [0, 0]]);
/// ```
pub fn upper_triangular<V: View + ?Sized>(a: &V) -> Matrix {
    let mut m = a.to_matrix();
    eliminate(&mut m);
    m
}

/// The reduced row echelon form of `a`.
///
/// Every pivot is scaled to `1` and every other entry in a pivot's column is
/// `0`.
///
/// ```
/// use densemat::{matrix, rref};
/// let a = matrix![[1, 2, 3], [2, 5, 7]];
/// assert_eq!(rref(&a), matrix![[1, 0, 1], [0, 1, 1]]);
/// ```
pub fn rref<V: View + ?Sized>(a: &V) -> Matrix {
    let mut m = a.to_matrix();
    eliminate(&mut m);
    let (rows, cols) = m.shape();
    let storage = m.storage_mut();
    for r in 0..rows {
        let c = match (0..cols).find(|&c| storage.at(r, c) != 0.0) {
            Some(c) => c,
            None => continue,
        };
        let pivot = storage.at(r, c);
        if pivot != 1.0 {
            for x in storage.row_mut(r) { *x /= pivot; }
            *storage.at_mut(r, c) = 1.0;
        }
        for other in 0..rows {
            let x = storage.at(other, c);
            if other != r && x != 0.0 {
                add_scaled_row(storage, r, -x, other);
                *storage.at_mut(other, c) = 0.0;
            }
        }
    }
    m
}

/// The determinant of a square `a`.
///
/// Matrices larger than 2×2 are reduced with [`upper_triangular()`], and the
/// sign of the diagonal product is flipped once per row swap. The result is
/// therefore the true determinant even when a pivot had to be found below the
/// diagonal, where the bare product of the reduced diagonal would have the
/// wrong sign.
///
/// ```
/// use densemat::{matrix, determinant};
/// assert_eq!(determinant(&matrix![[1, 2], [3, 4]]), Ok(-2.0));
/// assert_eq!(determinant(&matrix![[0, 1, 0], [1, 0, 0], [0, 0, 1]]), Ok(-1.0));
/// assert!(determinant(&matrix![[1, 2, 3]]).is_err());
/// ```
pub fn determinant<V: View + ?Sized>(a: &V) -> Result<f64> {
    let n = check_square(a)?;
    log::debug!("determinant of a {}x{} matrix", n, n);
    Ok(match n {
        1 => a.at(0, 0),
        2 => a.at(0, 0) * a.at(1, 1) - a.at(0, 1) * a.at(1, 0),
        _ => {
            let mut m = a.to_matrix();
            let swaps = eliminate(&mut m);
            let product: f64 = (0..n).map(|i| m.at(i, i)).product();
            if swaps % 2 == 0 { product } else { -product }
        },
    })
}

/// The transpose of the matrix of cofactors of a square `a`.
///
/// ```
/// use densemat::{matrix, adjugate};
/// assert_eq!(adjugate(&matrix![[1, 2], [3, 4]]), Ok(matrix![[4, -2], [-3, 1]]));
/// ```
pub fn adjugate<V: View + ?Sized>(a: &V) -> Result<Matrix> {
    let n = check_square(a)?;
    if n == 1 { return Ok(Matrix::filled(1, 1, 1.0)); }
    let mut items = Vec::with_capacity(n * n);
    // Row `i` of the adjugate is column `i` of the cofactor matrix.
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            items.push(sign * determinant(&minor(a, j, i)?)?);
        }
    }
    Ok(Matrix::from_storage(Storage::new((n, n), items)))
}

/// The inverse of a square `a`.
///
/// Fails with [`ArithmeticError::Singular`] if the determinant is zero, or so
/// small compared to the magnitude of the rows (their Hadamard bound) that the
/// result would be meaningless.
///
/// ```
/// use densemat::{matrix, invert, ArithmeticError, Error};
/// assert_eq!(invert(&matrix![[2, 0], [0, 4]]), Ok(matrix![[0.5, 0], [0, 0.25]]));
/// assert_eq!(
///     invert(&matrix![[1, 2], [2, 4]]),
///     Err(Error::Arithmetic(ArithmeticError::Singular(0.0))),
/// );
/// ```
pub fn invert<V: View + ?Sized>(a: &V) -> Result<Matrix> {
    check_square(a)?;
    let det = determinant(a)?;
    let bound: f64 = a.rows().iter()
        .map(|row| row.iter().map(|x| x * x).sum::<f64>().sqrt())
        .product();
    if det == 0.0 || det.abs() <= SINGULARITY_TOLERANCE * bound {
        log::debug!("singular: determinant {} against bound {}", det, bound);
        return Err(ArithmeticError::Singular(det).into());
    }
    Ok(&adjugate(a)? / det)
}

/// Join `a` and `b` along `axis`: `0` stacks `b` below `a`, `1` places `b`
/// to the right of `a`.
///
/// ```
/// use densemat::{matrix, concatenate, View};
/// let a = matrix![[1, 2], [3, 4]];
/// let b = matrix![[5, 6]];
/// assert_eq!(concatenate(&a, &b, 0), Ok(matrix![[1, 2], [3, 4], [5, 6]]));
/// assert!(concatenate(&a, &b, 1).is_err());
/// assert_eq!(concatenate(&a, &b.transpose(), 1), Ok(matrix![[1, 2, 5], [3, 4, 6]]));
/// ```
pub fn concatenate<A: View + ?Sized, B: View + ?Sized>(a: &A, b: &B, axis: usize) -> Result<Matrix> {
    let (left, right) = (a.shape(), b.shape());
    let mismatch = ArithmeticError::ConcatenationMismatch {axis, left, right};
    match axis {
        0 => {
            if left.1 != right.1 { return Err(mismatch.into()); }
            Ok(Matrix::from_fn((left.0 + right.0, left.1), |r, c| {
                if r < left.0 { a.at(r, c) } else { b.at(r - left.0, c) }
            }))
        },
        1 => {
            if left.0 != right.0 { return Err(mismatch.into()); }
            Ok(Matrix::from_fn((left.0, left.1 + right.1), |r, c| {
                if c < left.1 { a.at(r, c) } else { b.at(r, c - left.1) }
            }))
        },
        _ => Err(ArithmeticError::InvalidAxis(axis).into()),
    }
}

// ----------------------------------------------------------------------------

/// A copy of `a` with rows `r1` and `r2` exchanged.
pub fn ero_swap<V: View + ?Sized>(a: &V, r1: usize, r2: usize) -> Result<Matrix> {
    let rows = a.shape().0;
    check_index(r1, rows)?;
    check_index(r2, rows)?;
    let mut m = a.to_matrix();
    m.storage_mut().swap_rows(r1, r2);
    Ok(m)
}

/// A copy of `a` with row `r` multiplied by `c`.
pub fn ero_multiply<V: View + ?Sized>(a: &V, r: usize, c: f64) -> Result<Matrix> {
    check_index(r, a.shape().0)?;
    let mut m = a.to_matrix();
    for x in m.storage_mut().row_mut(r) { *x *= c; }
    Ok(m)
}

/// A copy of `a` with `c` times row `r1` added into row `r2`.
///
/// ```
/// use densemat::{matrix, ero_sum};
/// let a = matrix![[1, 2], [3, 4]];
/// assert_eq!(ero_sum(&a, 0, -3.0, 1), Ok(matrix![[1, 2], [0, -2]]));
/// ```
pub fn ero_sum<V: View + ?Sized>(a: &V, r1: usize, c: f64, r2: usize) -> Result<Matrix> {
    let rows = a.shape().0;
    check_index(r1, rows)?;
    check_index(r2, rows)?;
    let mut m = a.to_matrix();
    add_scaled_row(m.storage_mut(), r1, c, r2);
    Ok(m)
}

// ----------------------------------------------------------------------------
