/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between the `Vn`/`Mnn` types and plain arrays.

use crate::types::*;

/// Implementation detail of the free function `mat::from_array`.
///
/// Lets the matrix type be inferred from the shape of the array.
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

macro_rules! impl_vector_conv {
    ($Vn:ident $n:tt) => {
        impl From<[f32; $n]> for $Vn {
            #[inline(always)]
            fn from(arr: [f32; $n]) -> Self
            { $Vn(arr) }
        }

        impl From<$Vn> for [f32; $n] {
            #[inline(always)]
            fn from(v: $Vn) -> Self
            { v.0 }
        }

        impl $Vn {
            /// Cast into a plain `[f32; n]`.
            #[inline(always)]
            pub fn into_array(self) -> [f32; $n]
            { self.0 }
        }
    };
}

each_vector!(impl_vector_conv!);

macro_rules! impl_matrix_conv {
    ($Mnn:ident $Vn:ident $n:tt) => {
        impl IntoMatrix for [[f32; $n]; $n] {
            type Matrix = $Mnn;

            #[inline]
            fn into_matrix(self) -> $Mnn {
                let mut rows = [$Vn::default(); $n];
                for (row, arr) in rows.iter_mut().zip(self.iter()) {
                    *row = $Vn(*arr);
                }
                $Mnn(rows)
            }
        }

        impl From<[[f32; $n]; $n]> for $Mnn {
            #[inline(always)]
            fn from(arr: [[f32; $n]; $n]) -> Self
            { arr.into_matrix() }
        }

        impl From<$Mnn> for [[f32; $n]; $n] {
            #[inline(always)]
            fn from(m: $Mnn) -> Self
            { m.into_array() }
        }

        impl $Mnn {
            /// Cast into a plain `[[f32; n]; n]` (an array of rows).
            #[inline]
            pub fn into_array(self) -> [[f32; $n]; $n] {
                let mut out = [[0.0; $n]; $n];
                for (arr, row) in out.iter_mut().zip(self.iter()) {
                    *arr = row.0;
                }
                out
            }
        }
    };
}

each_square!(impl_matrix_conv!);

impl From<(f32, f32)> for V2 {
    #[inline(always)]
    fn from((x, y): (f32, f32)) -> Self
    { V2([x, y]) }
}

impl From<(f32, f32, f32)> for V3 {
    #[inline(always)]
    fn from((x, y, z): (f32, f32, f32)) -> Self
    { V3([x, y, z]) }
}

impl From<(f32, f32, f32, f32)> for V4 {
    #[inline(always)]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self
    { V4([x, y, z, w]) }
}
