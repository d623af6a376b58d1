/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Determinants by cofactor expansion along the first row.
//!
//! Plain `f32` arithmetic throughout, with no tolerance anywhere: a nearly
//! singular matrix gets a tiny (or exactly zero) determinant, and it is up to
//! the caller to decide what that means.

use crate::types::*;
use crate::minor::Minor;

/// Matrix determinant.
#[inline(always)]
pub fn det<M: Det>(m: &M) -> f32
{ Det::det(m) }

/// Implementation detail of the free function `det` and the inherent
/// `{M22,M33,M44}::det`.
pub trait Det {
    fn det(&self) -> f32;
}

impl Det for M22 {
    #[inline]
    fn det(&self) -> f32 {
        self[0][0] * self[1][1] - self[0][1] * self[1][0]
    }
}

// Expand along row 0; the signs alternate `+ - + -`.
macro_rules! impl_det_by_expansion {
    ($Mnn:ident $Vn:ident $n:tt $Mmm:ident) => {
        impl Det for $Mnn {
            fn det(&self) -> f32 {
                (0..$n).fold(0.0, |acc, c| {
                    let term = self[0][c] * self.minor(0, c).det();
                    match c % 2 {
                        0 => acc + term,
                        _ => acc - term,
                    }
                })
            }
        }
    };
}

each_square_with_minor!(impl_det_by_expansion!);

macro_rules! impl_det_inherent {
    ($Mnn:ident $Vn:ident $n:tt) => {
        impl $Mnn {
            /// Matrix determinant.
            #[inline(always)]
            pub fn det(&self) -> f32
            { Det::det(self) }
        }
    };
}

each_square!(impl_det_inherent!);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn det_2() {
        assert_eq!(mat::from_array([[3.0, 0.5], [4.0, 2.0]]).det(), 4.0);
        assert_eq!(mat::from_array([[1.0, 2.0], [2.0, 4.0]]).det(), 0.0);
    }

    #[test]
    fn det_3() {
        let m = mat::from_array([
            [2.0, 0.5, 4.0],
            [5.0, 2.0, 2.0],
            [6.0, 3.0, 3.0],
        ]);
        // 2*(6-6) - 0.5*(15-12) + 4*(15-12)
        assert_eq!(m.det(), 10.5);

        let m = mat::from_array([
            [1.0, 2.0, 4.0],
            [5.0, 2.0, 1.0],
            [3.0, 6.0, 3.0],
        ]);
        assert_eq!(det(&m), 72.0);
    }

    #[test]
    fn det_4() {
        let m = mat::from_array([
            [3.0, 2.0, 4.0, 1.0],
            [9.0, 8.0, 3.0, 2.0],
            [3.0, 5.0, 6.0, 4.0],
            [5.0, 2.0, 3.0, 5.0],
        ]);
        assert_eq!(m.det(), 509.0);

        let m = mat::from_array([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 3.0, 4.0, 1.0],
            [3.0, 4.0, 1.0, 2.0],
            [4.0, 1.0, 2.0, 3.0],
        ]);
        assert_eq!(m.det(), 160.0);
    }

    #[test]
    fn special_matrices() {
        assert_eq!(M22::eye().det(), 1.0);
        assert_eq!(M33::eye().det(), 1.0);
        assert_eq!(M44::eye().det(), 1.0);
        assert_eq!(M22::zero().det(), 0.0);
        assert_eq!(M33::zero().det(), 0.0);
        assert_eq!(M44::zero().det(), 0.0);

        let diag = M44::from_diag(V4([2.0, 3.0, 4.0, 1.0]));
        assert_eq!(diag.det(), 24.0);
    }

    #[test]
    fn swapping_rows_flips_the_sign() {
        let m = mat::from_array([
            [3.0, 2.0, 4.0, 1.0],
            [9.0, 8.0, 3.0, 2.0],
            [3.0, 5.0, 6.0, 4.0],
            [5.0, 2.0, 3.0, 5.0],
        ]);
        let mut swapped = m;
        swapped.swap(0, 2);
        assert_eq!(swapped.det(), -m.det());
        assert_eq!(m.t().det(), m.det());
    }

    #[test]
    fn nan_propagates() {
        let mut m = M33::eye();
        m[0][0] = std::f32::NAN;
        assert!(m.det().is_nan());
    }
}
