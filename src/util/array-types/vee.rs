/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Constructors and accessors for `V2`, `V3` and `V4`.
//!
//! Vectors here are parameter bundles (positions, sizes, angles) for the
//! transform generators. Beyond component-wise arithmetic they have no
//! algebra of their own.

use crate::types::*;

/// Construct a fixed-size vector from a function on indices.
#[inline(always)]
pub fn from_fn<V: FromFn<F>, F>(f: F) -> V
where F: FnMut(usize) -> f32,
{ FromFn::from_fn(f) }

macro_rules! impl_vector_inherent {
    ($Vn:ident $n:tt) => {
        impl $Vn {
            /// Construct the zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            { $Vn([0.0; $n]) }

            /// Construct a vector with every component equal to `x`.
            #[inline(always)]
            pub fn splat(x: f32) -> Self
            { $Vn([x; $n]) }

            /// Construct a fixed-size vector from a function on indices.
            #[inline]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> f32,
            { FromFn::from_fn(f) }

            /// Map each component.
            #[inline]
            pub fn map<F>(self, mut f: F) -> Self
            where F: FnMut(f32) -> f32,
            { Self::from_fn(|k| f(self[k])) }

            /// Component-wise product.
            #[inline]
            pub fn mul_diag(&self, other: &Self) -> Self
            { Self::from_fn(|k| self[k] * other[k]) }

            /// Product of all components.
            #[inline]
            pub fn product(&self) -> f32
            { self.iter().product() }
        }

        impl<F> FromFn<F> for $Vn
        where F: FnMut(usize) -> f32,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                let mut out = [0.0; $n];
                for (k, x) in out.iter_mut().enumerate() {
                    *x = f(k);
                }
                $Vn(out)
            }
        }
    };
}

each_vector!(impl_vector_inherent!);

impl V2 {
    #[inline(always)] pub fn x(&self) -> f32 { self[0] }
    #[inline(always)] pub fn y(&self) -> f32 { self[1] }
}

impl V3 {
    #[inline(always)] pub fn x(&self) -> f32 { self[0] }
    #[inline(always)] pub fn y(&self) -> f32 { self[1] }
    #[inline(always)] pub fn z(&self) -> f32 { self[2] }

    /// Drop the last component.
    #[inline(always)]
    pub fn xy(&self) -> V2
    { V2([self[0], self[1]]) }

    /// Append a fourth component.
    #[inline(always)]
    pub fn extend(&self, w: f32) -> V4
    { V4([self[0], self[1], self[2], w]) }
}

impl V4 {
    #[inline(always)] pub fn x(&self) -> f32 { self[0] }
    #[inline(always)] pub fn y(&self) -> f32 { self[1] }
    #[inline(always)] pub fn z(&self) -> f32 { self[2] }
    #[inline(always)] pub fn w(&self) -> f32 { self[3] }

    /// Drop the last component.
    #[inline(always)]
    pub fn xyz(&self) -> V3
    { V3([self[0], self[1], self[2]]) }
}

/// Implementation detail of the free function `vee::from_fn`.
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}
