//! Generic programming over binary arithmetic operators.
//!
//! For each arithmetic operator in [`std::ops`] this module contains a type of
//! the same name that cannot be instantiated and that implements [`Binary`].
//! For example, [`Add`] corresponds to [`std::ops::Add`]. This can be passed as
//! a type parameter to generic code, e.g. [`View::binary()`].
//!
//! [`View::binary()`]: super::View::binary()

/// A function that combines two elements.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary {
    fn call(x: f64, y: f64) -> f64;
}

// ----------------------------------------------------------------------------

pub enum Add {}

impl Binary for Add {
    #[inline(always)]
    fn call(x: f64, y: f64) -> f64 { x + y }
}

// ----------------------------------------------------------------------------

pub enum Sub {}

impl Binary for Sub {
    #[inline(always)]
    fn call(x: f64, y: f64) -> f64 { x - y }
}

// ----------------------------------------------------------------------------

pub enum Mul {}

impl Binary for Mul {
    #[inline(always)]
    fn call(x: f64, y: f64) -> f64 { x * y }
}

// ----------------------------------------------------------------------------

pub enum Div {}

impl Binary for Div {
    #[inline(always)]
    fn call(x: f64, y: f64) -> f64 { x / y }
}

// ----------------------------------------------------------------------------

/// Implement one of the [`std::ops`] traits for references to a type that
/// implements [`View`].
///
/// Combining with an `f64` applies the operator to every element and returns
/// a [`Matrix`]. Combining with another `View` is pointwise and returns a
/// [`Result`], because the shapes might differ.
///
/// You perhaps want to use [`impl_ops_for_view`] instead, which calls this.
///
/// [`View`]: super::View
/// [`Matrix`]: super::Matrix
/// [`Result`]: super::Result
/// [`impl_ops_for_view`]: crate::impl_ops_for_view
#[macro_export]
macro_rules! impl_op_for_view {
    ($op:ident for <$($a:lifetime),*> $v:ty { $method:ident }) => {
        impl<$($a),*> std::ops::$op<f64> for &$v {
            type Output = $crate::Matrix;
            fn $method(self, c: f64) -> Self::Output {
                $crate::View::scalar::<$crate::ops::$op>(self, c)
            }
        }

        impl<'rhs, $($a,)* RHS: $crate::View + ?Sized> std::ops::$op<&'rhs RHS> for &$v {
            type Output = $crate::Result<$crate::Matrix>;
            fn $method(self, other: &'rhs RHS) -> Self::Output {
                $crate::View::binary::<$crate::ops::$op, RHS>(self, other)
            }
        }
    };
}

/// Implement `+`, `-`, `*`, `/` and unary `-` for references to a type that
/// implements [`View`]. See [`impl_op_for_view`].
///
/// [`View`]: super::View
/// [`impl_op_for_view`]: crate::impl_op_for_view
#[macro_export]
macro_rules! impl_ops_for_view {
    (<$($a:lifetime),*> $v:ty) => {
        $crate::impl_op_for_view! { Add for <$($a),*> $v { add } }
        $crate::impl_op_for_view! { Sub for <$($a),*> $v { sub } }
        $crate::impl_op_for_view! { Mul for <$($a),*> $v { mul } }
        $crate::impl_op_for_view! { Div for <$($a),*> $v { div } }

        impl<$($a),*> std::ops::Neg for &$v {
            type Output = $crate::Matrix;
            fn neg(self) -> Self::Output { $crate::View::scalar::<$crate::ops::Mul>(self, -1.0) }
        }
    };
}

/// Implement the compound assignment operators `+=`, `-=`, `*=`, `/=` with an
/// `f64` right-hand side for a type that implements [`ViewMut`].
///
/// [`ViewMut`]: super::ViewMut
#[macro_export]
macro_rules! impl_assign_ops_for_view_mut {
    (<$($a:lifetime),*> $v:ty) => {
        $crate::impl_assign_ops_for_view_mut! { @op AddAssign for <$($a),*> $v { add_assign, Add } }
        $crate::impl_assign_ops_for_view_mut! { @op SubAssign for <$($a),*> $v { sub_assign, Sub } }
        $crate::impl_assign_ops_for_view_mut! { @op MulAssign for <$($a),*> $v { mul_assign, Mul } }
        $crate::impl_assign_ops_for_view_mut! { @op DivAssign for <$($a),*> $v { div_assign, Div } }
    };
    (@op $op:ident for <$($a:lifetime),*> $v:ty { $method:ident, $binary:ident }) => {
        impl<$($a),*> std::ops::$op<f64> for $v {
            fn $method(&mut self, c: f64) {
                $crate::ViewMut::scalar_assign::<$crate::ops::$binary>(self, c)
            }
        }
    };
}

// ----------------------------------------------------------------------------
