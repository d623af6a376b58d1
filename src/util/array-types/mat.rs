/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Constructors and element-wise operations on square matrices.
//!
//! Matrices use a row-based formalism; a matrix is a container of row vectors.
//! Transform matrices are nonetheless authored for column vectors on the
//! right (`M * v`), which is why translations live in the last column.

use num_traits::{Zero, One};

use crate::types::*;
use crate::conv::IntoMatrix;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
///
/// The shape of the matrix will be inferred solely from how it is used.
/// There is also a static method form of this for easily supplying a type
/// hint. (e.g. `M33::from_fn`)
#[inline(always)]
pub fn from_fn<M: FromFn<F>, F>(f: F) -> M
where F: FnMut(usize, usize) -> f32,
{ FromFn::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
///
/// Type inference works in the forward direction, deciding the matrix
/// shape from the input array.
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Construct an identity matrix (using type inference).
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// Construct a zero matrix (using type inference).
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

macro_rules! impl_square_inherent {
    ($Mnn:ident $Vn:ident $n:tt) => {
        impl $Mnn {
            /// Construct the identity matrix.
            #[inline(always)]
            pub fn eye() -> Self
            { One::one() }

            /// Construct the zero matrix.
            ///
            /// Transform generators start from this and only fill in the
            /// entries they need.
            #[inline(always)]
            pub fn zero() -> Self
            { Zero::zero() }

            /// Construct a matrix from a function on indices `(row, col)`.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> f32,
            { FromFn::from_fn(f) }

            /// Construct a diagonal matrix.
            #[inline]
            pub fn from_diag(diag: $Vn) -> Self
            { Self::from_fn(|r, c| if r == c { diag[r] } else { 0.0 }) }

            /// Matrix transpose.
            ///
            /// Only permutes entries, so `m.t().t() == m` holds bit for bit.
            #[inline]
            pub fn t(&self) -> Self
            { Self::from_fn(|r, c| self[c][r]) }

            /// Get a column as a vector.
            #[inline]
            pub fn col(&self, c: usize) -> $Vn
            { $Vn::from_fn(|r| self[r][c]) }

            /// Map each scalar element of a matrix.
            #[inline]
            pub fn map<F>(self, mut f: F) -> Self
            where F: FnMut(f32) -> f32,
            { Self::from_fn(|r, c| f(self[r][c])) }
        }

        impl IsMatrix for $Mnn { }

        impl<F> FromFn<F> for $Mnn
        where F: FnMut(usize, usize) -> f32,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                let mut out = [$Vn::default(); $n];
                for (r, row) in out.iter_mut().enumerate() {
                    *row = $Vn::from_fn(|c| f(r, c));
                }
                $Mnn(out)
            }
        }

        impl Zero for $Mnn {
            #[inline]
            fn zero() -> Self
            { $Mnn([$Vn::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|row| row.iter().all(|&x| x == 0.0)) }
        }

        impl One for $Mnn {
            #[inline]
            fn one() -> Self
            { Self::from_fn(|r, c| if r == c { 1.0 } else { 0.0 }) }
        }
    };
}

each_square!(impl_square_inherent!);

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

/// Implementation detail of the free functions `eye` and `zero`.
///
/// Its purpose is to prevent those functions from producing non-matrix types.
pub trait IsMatrix: Sized { }

/// Implementation detail of the free function `mat::from_fn`.
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}
