//! Ready-made matrices.

use rand::Rng;

use super::{Matrix};

/// An `m`-by-`n` matrix of zeros.
///
/// # Panics
///
/// Panics if `m` or `n` is zero, like [`Matrix::filled()`].
pub fn zeros(m: usize, n: usize) -> Matrix { Matrix::filled(m, n, 0.0) }

/// An `m`-by-`n` matrix of ones.
pub fn ones(m: usize, n: usize) -> Matrix { Matrix::filled(m, n, 1.0) }

/// The `n`-by-`n` identity matrix.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// ```
/// use densemat::{identity, matrix};
/// assert_eq!(identity(2), matrix![[1, 0], [0, 1]]);
/// ```
pub fn identity(n: usize) -> Matrix {
    assert!(n > 0, "The identity matrix needs at least one row");
    Matrix::from_fn((n, n), |r, c| if r == c { 1.0 } else { 0.0 })
}

/// An `m`-by-`n` matrix of whole numbers drawn uniformly from `min..=max`,
/// using the thread-local generator.
///
/// # Panics
///
/// Panics if `min > max`, or if `m` or `n` is zero.
pub fn random(m: usize, n: usize, min: i32, max: i32) -> Matrix {
    random_with(&mut rand::thread_rng(), m, n, min, max)
}

/// Like [`random()`], but draws from `rng`.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use densemat::{random_with, View};
/// let m = random_with(&mut StdRng::seed_from_u64(7), 3, 3, 0, 5);
/// assert!(m.iter().all(|x| x.fract() == 0.0 && (0.0..=5.0).contains(&x)));
/// ```
pub fn random_with<R: Rng>(rng: &mut R, m: usize, n: usize, min: i32, max: i32) -> Matrix {
    assert!(min <= max, "Empty range {}..={}", min, max);
    assert!(m > 0 && n > 0, "A Matrix needs at least one row and one column, not {}x{}", m, n);
    Matrix::from_fn((m, n), |_, _| rng.gen_range(min..=max) as f64)
}

/// Print `matrix` to standard output.
pub fn show(matrix: &Matrix) { println!("{}", matrix); }

// ----------------------------------------------------------------------------
