/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for single-precision data.
//!
//! Everything in gfxmat is `f32`, so tolerances are `f32` too. Fixed-size
//! arrays (nested or not) implement [`CheckClose`], which means a matrix can
//! be compared by converting it with `into_array()` first.

use failure::Fail;
use std::fmt;

/// Relative tolerance used when the caller does not give one.
///
/// `f32` has about 7 significant digits; anything much tighter than this
/// turns ordinary rounding into test failures.
pub const DEFAULT_NONZERO_TOL: f32 = 1e-5;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {$crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}};
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs: f32;
            let mut rel: f32;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f32, b: f32, Tolerances { abs, rel }: Tolerances) -> bool {
    // Same rules as Python's math.isclose.
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // infinities of the same sign
    if a == b { return true; }

    // infinities of opposite sign would otherwise get an infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN falls through to here and compares false.
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone)]
pub struct Tolerances<T = f32> {
    pub abs: T,
    pub rel: T,
}

#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f32, f32),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ref left, ref right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f32 {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        match __is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

// Matrices and vectors of this workspace never exceed four components per axis.
macro_rules! gen_array_impls {
    ($($n:tt)*) => {
        $(
        impl<T: CheckClose> CheckClose for [T; $n] {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            { self[..].check_close(&other[..], tol) }
        }
        )*
    };
}

gen_array_impls! { 1 2 3 4 }
