/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

// ---------------------------------------------------------------------------

/// A 2-dimensional vector, e.g. the size of a near plane.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V2(pub [f32; 2]);

/// A 3-dimensional vector, e.g. a position, a scale or a set of Euler angles.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V3(pub [f32; 3]);

/// A 4-dimensional vector; the row type of `M44`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V4(pub [f32; 4]);

// ---------------------------------------------------------------------------

/// A square dense 2x2 matrix, stored as 2 rows.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct M22(pub [V2; 2]);

/// A square dense 3x3 matrix, stored as 3 rows.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct M33(pub [V3; 3]);

/// A square dense 4x4 matrix, stored as 4 rows.
///
/// This is the type produced by every transform generator.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct M44(pub [V4; 4]);

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

macro_rules! impl_array_like {
    ($Cn:ident $T:ty, $n:tt) => {
        impl Deref for $Cn {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl DerefMut for $Cn {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Many methods take `I: IntoIterator`, which Deref does not help with.
        impl<'a> IntoIterator for &'a $Cn {
            type Item = &'a $T;
            type IntoIter = Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a> IntoIterator for &'a mut $Cn {
            type Item = &'a mut $T;
            type IntoIter = IterMut<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // Debug output is the bare nested array, without a surrounding "M44(...)",
        // so that it can be pasted straight back into a test.
        impl fmt::Debug for $Cn {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    };
}

impl_array_like!{V2 f32, 2}
impl_array_like!{V3 f32, 3}
impl_array_like!{V4 f32, 4}
impl_array_like!{M22 V2, 2}
impl_array_like!{M33 V3, 3}
impl_array_like!{M44 V4, 4}
