/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Neg, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};

use crate::types::*;

// ---------------------------------------------------------------------------
// The by-reference impls do the work; the by-value impls forward to them.

macro_rules! forward_binop_by_value {
    (impl $Op:ident<$Rhs:ty>, $op:ident for $Lhs:ty => $Out:ty) => {
        impl $Op<$Rhs> for $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, rhs: $Rhs) -> $Out
            { $Op::$op(&self, &rhs) }
        }

        impl<'b> $Op<&'b $Rhs> for $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, rhs: &'b $Rhs) -> $Out
            { $Op::$op(&self, rhs) }
        }

        impl<'a> $Op<$Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, rhs: $Rhs) -> $Out
            { $Op::$op(self, &rhs) }
        }
    };
}

// ---------------------------------------------------------------------------
// vector ops

macro_rules! impl_vector_ops {
    ($Vn:ident $n:tt) => {
        // vector + vector
        impl<'a, 'b> Add<&'b $Vn> for &'a $Vn {
            type Output = $Vn;

            #[inline]
            fn add(self, other: &'b $Vn) -> $Vn
            { $Vn::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<'a, 'b> Sub<&'b $Vn> for &'a $Vn {
            type Output = $Vn;

            #[inline]
            fn sub(self, other: &'b $Vn) -> $Vn
            { $Vn::from_fn(|k| self[k] - other[k]) }
        }

        forward_binop_by_value!{impl Add<$Vn>, add for $Vn => $Vn}
        forward_binop_by_value!{impl Sub<$Vn>, sub for $Vn => $Vn}

        // -vector
        impl<'a> Neg for &'a $Vn {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> $Vn
            { $Vn::from_fn(|k| -self[k]) }
        }

        impl Neg for $Vn {
            type Output = $Vn;

            #[inline(always)]
            fn neg(self) -> $Vn
            { -&self }
        }

        // vector * scalar
        impl<'a> Mul<f32> for &'a $Vn {
            type Output = $Vn;

            #[inline]
            fn mul(self, scalar: f32) -> $Vn
            { $Vn::from_fn(|k| self[k] * scalar) }
        }

        impl Mul<f32> for $Vn {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, scalar: f32) -> $Vn
            { &self * scalar }
        }

        // scalar * vector
        impl<'a> Mul<&'a $Vn> for f32 {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, vector: &'a $Vn) -> $Vn
            { vector * self }
        }

        impl Mul<$Vn> for f32 {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, vector: $Vn) -> $Vn
            { &vector * self }
        }

        // vector / scalar
        impl<'a> Div<f32> for &'a $Vn {
            type Output = $Vn;

            #[inline]
            fn div(self, scalar: f32) -> $Vn
            { $Vn::from_fn(|k| self[k] / scalar) }
        }

        impl Div<f32> for $Vn {
            type Output = $Vn;

            #[inline(always)]
            fn div(self, scalar: f32) -> $Vn
            { &self / scalar }
        }

        impl<B> AddAssign<B> for $Vn where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        impl<B> SubAssign<B> for $Vn where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        impl<B> MulAssign<B> for $Vn where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        impl<B> DivAssign<B> for $Vn where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    };
}

each_vector!(impl_vector_ops!);

// ---------------------------------------------------------------------------
// matrix ops

macro_rules! impl_matrix_ops {
    ($Mnn:ident $Vn:ident $n:tt) => {
        // matrix * matrix
        //
        // The ordinary product: `C[i][j] = sum_k A[i][k] * B[k][j]`.
        // With column vectors on the right, `a * b` applies `b` first.
        impl<'a, 'b> Mul<&'b $Mnn> for &'a $Mnn {
            type Output = $Mnn;

            #[inline]
            fn mul(self, other: &'b $Mnn) -> $Mnn {
                $Mnn::from_fn(|r, c| {
                    (0..$n).map(|k| self[r][k] * other[k][c]).sum()
                })
            }
        }

        forward_binop_by_value!{impl Mul<$Mnn>, mul for $Mnn => $Mnn}

        // matrix * column vector
        impl<'a, 'b> Mul<&'b $Vn> for &'a $Mnn {
            type Output = $Vn;

            #[inline]
            fn mul(self, v: &'b $Vn) -> $Vn
            { $Vn::from_fn(|r| (0..$n).map(|k| self[r][k] * v[k]).sum()) }
        }

        forward_binop_by_value!{impl Mul<$Vn>, mul for $Mnn => $Vn}

        // matrix + matrix
        impl<'a, 'b> Add<&'b $Mnn> for &'a $Mnn {
            type Output = $Mnn;

            #[inline]
            fn add(self, other: &'b $Mnn) -> $Mnn
            { $Mnn::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        forward_binop_by_value!{impl Add<$Mnn>, add for $Mnn => $Mnn}

        // matrix - matrix
        impl<'a, 'b> Sub<&'b $Mnn> for &'a $Mnn {
            type Output = $Mnn;

            #[inline]
            fn sub(self, other: &'b $Mnn) -> $Mnn
            { $Mnn::from_fn(|r, c| self[r][c] - other[r][c]) }
        }

        forward_binop_by_value!{impl Sub<$Mnn>, sub for $Mnn => $Mnn}

        // -matrix
        impl<'a> Neg for &'a $Mnn {
            type Output = $Mnn;

            #[inline]
            fn neg(self) -> $Mnn
            { $Mnn::from_fn(|r, c| -self[r][c]) }
        }

        impl Neg for $Mnn {
            type Output = $Mnn;

            #[inline(always)]
            fn neg(self) -> $Mnn
            { -&self }
        }

        // matrix * scalar
        impl<'a> Mul<f32> for &'a $Mnn {
            type Output = $Mnn;

            #[inline]
            fn mul(self, scalar: f32) -> $Mnn
            { $Mnn::from_fn(|r, c| self[r][c] * scalar) }
        }

        impl Mul<f32> for $Mnn {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, scalar: f32) -> $Mnn
            { &self * scalar }
        }

        // scalar * matrix
        impl<'a> Mul<&'a $Mnn> for f32 {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, matrix: &'a $Mnn) -> $Mnn
            { matrix * self }
        }

        impl Mul<$Mnn> for f32 {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, matrix: $Mnn) -> $Mnn
            { &matrix * self }
        }

        // matrix += matrix;
        impl<B> AddAssign<B> for $Mnn where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // matrix -= matrix;
        impl<B> SubAssign<B> for $Mnn where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // matrix *= scalar;
        // matrix *= matrix;   (right-multiplies)
        impl<B> MulAssign<B> for $Mnn where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }
    };
}

each_square!(impl_matrix_ops!);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn matrix_matrix() {
        let a = mat::from_array([
            [3.0, 2.0, 4.0, 1.0],
            [9.0, 8.0, 3.0, 2.0],
            [3.0, 5.0, 6.0, 4.0],
            [5.0, 2.0, 3.0, 5.0],
        ]);
        let b = mat::from_array([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 3.0, 4.0, 1.0],
            [3.0, 4.0, 1.0, 2.0],
            [4.0, 1.0, 2.0, 3.0],
        ]);
        let expected = mat::from_array([
            [23.0, 29.0, 23.0, 25.0],
            [42.0, 56.0, 66.0, 56.0],
            [47.0, 49.0, 43.0, 41.0],
            [38.0, 33.0, 36.0, 43.0],
        ]);
        assert_eq!(&a * &b, expected);
        assert_eq!(a * b, expected);
        assert_ne!(b * a, expected);

        let mut c = a;
        c *= b;
        assert_eq!(c, expected);
    }

    #[test]
    fn matrix_2_and_3() {
        let a = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = mat::from_array([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(a * b, mat::from_array([[2.0, 1.0], [4.0, 3.0]]));

        let a = mat::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = mat::from_array([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
        assert_eq!((a * b).into_array(), [
            [ 30.0,  24.0, 18.0],
            [ 84.0,  69.0, 54.0],
            [138.0, 114.0, 90.0],
        ]);
    }

    #[test]
    fn scalar() {
        let a = mat::from_array([[1.0, -2.0], [3.0, 4.0]]);
        assert_eq!(&a * 2.0, mat::from_array([[2.0, -4.0], [6.0, 8.0]]));
        assert_eq!(0.5 * a, mat::from_array([[0.5, -1.0], [1.5, 2.0]]));

        let mut b = a;
        b *= -1.0;
        assert_eq!(b, -a);
        assert_eq!(a + b, M22::zero());
        assert_eq!(a - b, &a * 2.0);
    }

    #[test]
    fn matrix_vector() {
        let m = mat::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m * V3([1.0, 1.0, 1.0]), V3([6.0, 15.0, 24.0]));
        assert_eq!(&m * &V3([1.0, 0.0, 0.0]), m.col(0));
    }

    #[test]
    fn vector() {
        let a = V3([1.0, 2.0, 3.0]);
        let b = V3([0.5, 0.5, 0.5]);
        assert_eq!(a + b, V3([1.5, 2.5, 3.5]));
        assert_eq!(a - b, V3([0.5, 1.5, 2.5]));
        assert_eq!(-a, V3([-1.0, -2.0, -3.0]));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, V3([0.5, 1.0, 1.5]));

        let mut c = a;
        c += b;
        c -= &b;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, a);
    }
}
