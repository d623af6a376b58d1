#[macro_use] extern crate gfxmat_assert_close;

use gfxmat::{M22, M33, M44, V2, V3, V4, Layout, Rotation, RotationDirection};

fn m44_509() -> M44 {
    M44::from([
        [3.0, 2.0, 4.0, 1.0],
        [9.0, 8.0, 3.0, 2.0],
        [3.0, 5.0, 6.0, 4.0],
        [5.0, 2.0, 3.0, 5.0],
    ])
}

fn m44_160() -> M44 {
    M44::from([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 3.0, 4.0, 1.0],
        [3.0, 4.0, 1.0, 2.0],
        [4.0, 1.0, 2.0, 3.0],
    ])
}

fn m33() -> M33 {
    M33::from([
        [2.0, -1.0, 0.0],
        [1.0,  3.0, 2.0],
        [0.0,  1.0, 4.0],
    ])
}

fn m22() -> M22 {
    M22::from([[4.0, 7.0], [2.0, 6.0]])
}

#[test]
fn determinants() {
    assert_eq!(m44_509().det(), 509.0);
    assert_eq!(m44_160().det(), 160.0);
    assert_eq!(m33().det(), 24.0);
    assert_eq!(m22().det(), 10.0);

    assert_eq!(gfxmat::det(&M22::eye()), 1.0);
    assert_eq!(gfxmat::det(&M33::eye()), 1.0);
    assert_eq!(gfxmat::det(&M44::eye()), 1.0);
    assert_eq!(gfxmat::det(&M22::zero()), 0.0);
    assert_eq!(gfxmat::det(&M33::zero()), 0.0);
    assert_eq!(gfxmat::det(&M44::zero()), 0.0);
}

#[test]
fn inverse_times_matrix_is_identity() {
    for m in vec![m44_509(), m44_160()] {
        assert_close!(abs=1e-4, (m.inv() * m).into_array(), M44::eye().into_array());
        assert_close!(abs=1e-4, (m * m.inv()).into_array(), M44::eye().into_array());
    }
    assert_close!(abs=1e-4, (m33().inv() * m33()).into_array(), M33::eye().into_array());
    assert_close!(abs=1e-4, (m22().inv() * m22()).into_array(), M22::eye().into_array());
}

#[test]
fn adjugate_scales_to_the_determinant() {
    let m = m44_160();
    assert_eq!(m * m.adjugate(), M44::eye() * m.det());
    assert_eq!(m.adjugate() * m, M44::eye() * m.det());

    let m = m33();
    assert_eq!(m * gfxmat::adjugate(&m), M33::eye() * 24.0);
}

#[test]
fn singular_matrices() {
    let mut m = m44_509();
    m[3] = m[0] * 2.0;
    assert_eq!(m.det(), 0.0);

    let err = m.try_inv().unwrap_err();
    assert_eq!(err.det, 0.0);

    // the unchecked inverse does not panic
    let inv = m.inv();
    assert!(inv.iter().flat_map(|row| row.iter()).any(|x| !x.is_finite()));
}

#[test]
fn transpose() {
    let m = m44_509();
    assert_eq!(m.t().t(), m);
    assert_eq!(m.t().det(), m.det());
    assert_eq!(m.t()[0], m.col(0));

    let a = m44_160();
    assert_eq!((a * m).t(), m.t() * a.t());
}

#[test]
fn identity_is_neutral() {
    let m = m44_509();
    assert_eq!(M44::eye() * m, m);
    assert_eq!(m * M44::eye(), m);
    assert_eq!(gfxmat::mat::eye::<M33>() * m33(), m33());
}

#[test]
fn product_order() {
    assert_eq!((m44_160() * m44_509()).into_array(), [
        [50.0, 41.0, 40.0, 37.0],
        [50.0, 50.0, 44.0, 29.0],
        [58.0, 47.0, 36.0, 25.0],
        [42.0, 32.0, 40.0, 29.0],
    ]);

    let (a, b, c) = (m44_160(), m44_509(), m44_160().t());
    assert_eq!((a * b) * c, a * (b * c));
}

#[test]
fn scalar_multiplication() {
    let mut m = m33();
    let doubled = m * 2.0;
    assert_eq!(doubled, 2.0 * m);
    assert_eq!(doubled.det(), 8.0 * m.det());

    m *= 0.5;
    assert_eq!(m[1], V3([0.5, 1.5, 1.0]));
}

#[test]
fn scale_inverse() {
    let m = gfxmat::scale(V3([2.0, 3.0, 4.0]), Layout::ColumnMajor);
    let expected = gfxmat::scale(V3([0.5, 1.0 / 3.0, 0.25]), Layout::ColumnMajor);
    assert_close!(abs=1e-6, m.inv().into_array(), expected.into_array());
}

#[test]
fn degenerate_frustum_is_zero() {
    let m = gfxmat::perspective_from_frustum(
        V3([0.0, 0.0, 2.0]),
        V2([1.0, 1.0]),
        V3([0.0, 0.0, 2.0]),
        Layout::ColumnMajor,
    );
    assert_eq!(m, M44::zero());
}

#[test]
fn centered_cube_orthographic_is_identity() {
    for &layout in &[Layout::ColumnMajor, Layout::RowMajor] {
        let m = gfxmat::orthographic(V3([-1.0; 3]), V3([2.0; 3]), layout);
        assert_eq!(m, M44::eye());
    }
}

#[test]
fn frustum_corners() {
    let m = gfxmat::perspective_from_frustum(
        V3([0.0, 0.0, 1.0]),
        V2([2.0, 2.0]),
        V3([0.0, 0.0, 10.0]),
        Layout::ColumnMajor,
    );
    let project = |p: [f32; 3]| {
        let q = m * V4([p[0], p[1], p[2], 1.0]);
        [q[0] / q[3], q[1] / q[3], q[2] / q[3]]
    };

    assert_close!(abs=1e-6, project([1.0, 1.0, 1.0]), [1.0, 1.0, -1.0]);
    assert_close!(abs=1e-6, project([-1.0, -1.0, 1.0]), [-1.0, -1.0, -1.0]);
    assert_close!(abs=1e-6, project([0.0, 0.0, 10.0])[2], 1.0);
    assert_close!(abs=1e-6, project([-10.0, 10.0, 10.0]), [-1.0, 1.0, 1.0]);
}

#[test]
fn row_major_is_the_transpose() {
    let (col, row) = (Layout::ColumnMajor, Layout::RowMajor);
    let v = V3([0.5, -2.0, 3.0]);

    assert_eq!(gfxmat::translate(v, row), gfxmat::translate(v, col).t());
    assert_eq!(gfxmat::scale(v, row), gfxmat::scale(v, col).t());
    assert_eq!(
        gfxmat::rotation(v, Rotation::new(RotationDirection::Clockwise, row)),
        gfxmat::rotation(v, Rotation::new(RotationDirection::Clockwise, col)).t(),
    );
    assert_eq!(
        gfxmat::orthographic(v, V3([1.0, 2.0, 3.0]), row),
        gfxmat::orthographic(v, V3([1.0, 2.0, 3.0]), col).t(),
    );
    assert_eq!(
        gfxmat::perspective_from_frustum(V3([0.0, 1.0, 1.0]), V2([1.0, 1.0]), V3([0.0; 3]), row),
        gfxmat::perspective_from_frustum(V3([0.0, 1.0, 1.0]), V2([1.0, 1.0]), V3([0.0; 3]), col).t(),
    );

    let eye = |layout| gfxmat::perspective_from_eye(
        V3([0.0, 0.0, -3.0]), V3([0.0, 0.0, 3.0]), V2([1.0, 1.0]), V2([1.0, 1.0]), layout,
    ).unwrap();
    assert_eq!(eye(row), eye(col).t());
}

#[cfg(feature = "serde-support")]
#[test]
fn matrices_serialize_as_nested_arrays() {
    let json = serde_json::to_string(&M22::eye()).unwrap();
    assert_eq!(json, "[[1.0,0.0],[0.0,1.0]]");
    assert_eq!(serde_json::to_string(&Layout::RowMajor).unwrap(), "\"row-major\"");
}
