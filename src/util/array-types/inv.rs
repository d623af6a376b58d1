/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Cofactors, adjugate and inverse.
//!
//! The inverse is `adjugate(m) * (1 / det(m))`; nothing is divided until that
//! last scalar multiply.
//!
//! Singular input is handled two ways:
//!
//! * [`inv`] does not check. A zero determinant turns into `1 / 0 = inf`,
//!   and the result is full of `inf` and `NaN`. This is the cheap path for
//!   callers that already know their matrix is invertible (e.g. a model
//!   matrix built from nonzero scales).
//! * [`try_inv`] returns a [`SingularMatrixError`] when the determinant is
//!   exactly zero. Nearly singular matrices still go through.

use failure::Fail;

use crate::types::*;
use crate::minor::Minor;
use crate::det::Det;

/// Matrix inverse, with IEEE-754 `inf`/`NaN` for singular input.
#[inline(always)]
pub fn inv<M: Inv>(m: &M) -> M
{ Inv::inv(m) }

/// Matrix inverse, failing if the determinant is exactly zero.
#[inline(always)]
pub fn try_inv<M: Inv>(m: &M) -> Result<M, SingularMatrixError>
{ Inv::try_inv(m) }

/// Transpose of the cofactor matrix.
#[inline(always)]
pub fn adjugate<M: Inv>(m: &M) -> M
{ Inv::adjugate(m) }

/// Matrix of cofactors, `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
#[inline(always)]
pub fn cofactors<M: Inv>(m: &M) -> M
{ Inv::cofactors(m) }

#[derive(Debug, Fail)]
#[fail(display = "matrix is singular (determinant is {})", det)]
pub struct SingularMatrixError {
    pub det: f32,
}

/// Implementation detail of the free functions `inv`, `try_inv`,
/// `adjugate` and `cofactors`.
pub trait Inv: Det + Sized {
    fn cofactors(&self) -> Self;

    fn adjugate(&self) -> Self;

    fn scale_by(&self, factor: f32) -> Self;

    fn inv(&self) -> Self {
        let rdet = 1.0 / self.det();
        self.adjugate().scale_by(rdet)
    }

    fn try_inv(&self) -> Result<Self, SingularMatrixError> {
        let det = self.det();
        if det == 0.0 {
            return Err(SingularMatrixError { det });
        }
        Ok(self.adjugate().scale_by(1.0 / det))
    }
}

#[inline(always)]
fn checkerboard(r: usize, c: usize) -> f32 {
    match (r + c) % 2 {
        0 => 1.0,
        _ => -1.0,
    }
}

impl Inv for M22 {
    #[inline]
    fn cofactors(&self) -> Self
    { M22::from_fn(|r, c| checkerboard(r, c) * self.minor(r, c)) }

    #[inline]
    fn adjugate(&self) -> Self
    { self.cofactors().t() }

    #[inline(always)]
    fn scale_by(&self, factor: f32) -> Self
    { self * factor }
}

macro_rules! impl_inv_by_minors {
    ($Mnn:ident $Vn:ident $n:tt $Mmm:ident) => {
        impl Inv for $Mnn {
            fn cofactors(&self) -> Self
            { $Mnn::from_fn(|r, c| checkerboard(r, c) * self.minor(r, c).det()) }

            #[inline]
            fn adjugate(&self) -> Self
            { self.cofactors().t() }

            #[inline(always)]
            fn scale_by(&self, factor: f32) -> Self
            { self * factor }
        }
    };
}

each_square_with_minor!(impl_inv_by_minors!);

macro_rules! impl_inv_inherent {
    ($Mnn:ident $Vn:ident $n:tt) => {
        impl $Mnn {
            /// Matrix inverse. Singular input gives `inf`/`NaN` entries.
            ///
            /// This is also available as the free function `inv`.
            #[inline(always)]
            pub fn inv(&self) -> Self
            { Inv::inv(self) }

            /// Matrix inverse, or an error if the determinant is exactly zero.
            #[inline(always)]
            pub fn try_inv(&self) -> Result<Self, SingularMatrixError>
            { Inv::try_inv(self) }

            /// Transpose of the cofactor matrix.
            #[inline(always)]
            pub fn adjugate(&self) -> Self
            { Inv::adjugate(self) }
        }
    };
}

each_square!(impl_inv_inherent!);

#[cfg(test)]
mod tests {
    use crate::*;

    fn sample_44() -> M44 {
        mat::from_array([
            [3.0, 2.0, 4.0, 1.0],
            [9.0, 8.0, 3.0, 2.0],
            [3.0, 5.0, 6.0, 4.0],
            [5.0, 2.0, 3.0, 5.0],
        ])
    }

    #[test]
    fn adjugate_44() {
        // integer input, so the adjugate is exact
        assert_eq!(adjugate(&sample_44()).into_array(), [
            [  99.0,  29.0, -108.0,  55.0],
            [-135.0,  53.0,  101.0, -75.0],
            [ 155.0, -42.0,   16.0, -27.0],
            [-138.0, -25.0,   58.0,  93.0],
        ]);
        assert_eq!(cofactors(&sample_44()).t(), sample_44().adjugate());
    }

    #[test]
    fn adjugate_times_matrix_is_det_times_eye() {
        let m = sample_44();
        assert_eq!(m.adjugate() * m, M44::eye() * 509.0);
        assert_eq!(m * m.adjugate(), M44::eye() * 509.0);
    }

    #[test]
    fn inverse_2() {
        let actual = inv(&mat::from_array([[7.0, 2.0], [-11.0, 4.0]]));
        let expected = mat::from_array([
            [ 2.0 / 25.0, -1.0 / 25.0],
            [11.0 / 50.0,  7.0 / 50.0],
        ]);

        assert_close!(abs=1e-6, expected.into_array(), actual.into_array());
    }

    #[test]
    fn inverse_3() {
        let actual = inv(&mat::from_array([
            [1.0, 2.0, 4.0],
            [5.0, 2.0, 1.0],
            [3.0, 6.0, 3.0],
        ]));

        let expected = mat::from_array([
            [ 0.0 / 1.0,  1.0 / 4.0, -1.0 / 12.0],
            [-1.0 / 6.0, -1.0 / 8.0, 19.0 / 72.0],
            [ 1.0 / 3.0,  0.0 / 1.0, -1.0 / 9.0 ],
        ]);

        assert_close!(abs=1e-6, expected.into_array(), actual.into_array());
    }

    #[test]
    fn inverse_4() {
        let m = sample_44();
        let actual = m.inv();
        assert_close!(abs=1e-6, actual.into_array()[0], [99.0 / 509.0, 29.0 / 509.0, -108.0 / 509.0, 55.0 / 509.0]);
        assert_close!(abs=1e-5, (actual * m).into_array(), M44::eye().into_array());
        assert_close!(abs=1e-5, (m * actual).into_array(), M44::eye().into_array());
    }

    #[test]
    fn singular_propagates_silently() {
        let m = mat::from_array([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 5.0],
        ]);
        assert_eq!(m.det(), 0.0);
        let bad = m.inv();
        assert!(bad.iter().flat_map(|row| row.iter()).all(|x| !x.is_finite()));
    }

    #[test]
    fn singular_is_detected_by_try_inv() {
        let err = M44::zero().try_inv().unwrap_err();
        assert_eq!(err.det, 0.0);
        assert_eq!(err.to_string(), "matrix is singular (determinant is 0)");

        let m = sample_44();
        assert_eq!(try_inv(&m).unwrap(), m.inv());
    }
}
