/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Orthographic and perspective projections.
//!
//! Clip space is the cube `[-1, 1]^3`. Depth increases along `+z`, so the near
//! plane lands on `z = -1` and the far plane on `z = +1`.

use gfxmat_array_types::{M44, V2, V3};

use crate::{Layout, TransformError};
use crate::affine::{scale_matrix, translation_matrix};

/// Map the axis-aligned box with minimum corner `position` and extent `size`
/// onto the clip cube.
///
/// This is `scale(2 / size) * translate(-(2 * position + size) / 2)`: the box
/// is first centered on the origin and then stretched to a side length of 2.
pub fn orthographic(position: V3, size: V3, layout: Layout) -> M44 {
    layout.apply(ortho_matrix(position, size))
}

/// The matrix which squeezes the frustum between depths `near` and `far` into
/// a box, so that an orthographic projection can finish the job.
///
/// After the perspective divide, points on the near plane are unchanged, and
/// points on the far plane keep their depth while x and y shrink by `near / far`.
pub fn perspective_to_orthographic(near: f32, far: f32, layout: Layout) -> M44 {
    layout.apply(squeeze_matrix(near, far))
}

/// Perspective projection for the frustum whose near plane is the rectangle of
/// `near_size` centered at `near_center`, and whose far plane is at depth
/// `far_center.z`.
///
/// Only the depth of `far_center` matters; the far plane's extent follows from
/// the near plane and the apex at the origin.
pub fn try_perspective_from_frustum(
    near_center: V3,
    near_size: V2,
    far_center: V3,
    layout: Layout,
) -> Result<M44, TransformError> {
    let near = near_center.z();
    let far = far_center.z();
    if near == far {
        return Err(TransformError::DegenerateFrustum { depth: near });
    }

    let corner = near_center.xy() - near_size / 2.0;
    let ortho = ortho_matrix(
        V3([corner.x(), corner.y(), near]),
        V3([near_size.x(), near_size.y(), far - near]),
    );
    Ok(layout.apply(ortho * squeeze_matrix(near, far)))
}

/// Like [`try_perspective_from_frustum`], but a degenerate frustum is logged
/// and produces the zero matrix.
pub fn perspective_from_frustum(near_center: V3, near_size: V2, far_center: V3, layout: Layout) -> M44 {
    match try_perspective_from_frustum(near_center, near_size, far_center, layout) {
        Ok(m) => m,
        Err(e) => {
            error!("{}", e);
            M44::zero()
        },
    }
}

/// Perspective projection for a camera at `eye` looking at `center`, with the
/// given field of view (radians, horizontal then vertical).
///
/// The far plane passes through `center`. Its size follows from the distance
/// and the field of view, and the near plane of `near_size` is placed at the
/// depth where it exactly fills the same view. The view axis is assumed to run
/// along `+z`; rotate the scene first if it does not.
///
/// The returned matrix includes the translation taking `eye` to the origin, so
/// it applies directly to world coordinates.
///
/// # Errors
///
/// * `NearPlaneNotSmaller` if either side of `near_size` is not strictly
///   between zero and the corresponding side of the far plane.
/// * `ViewAxisWithoutDepth` if `center - eye` has no z component
///   (e.g. looking along x).
pub fn perspective_from_eye(
    eye: V3,
    center: V3,
    near_size: V2,
    fov: V2,
    layout: Layout,
) -> Result<M44, TransformError> {
    let axis = center - eye;
    // eye == center is left to the near plane check
    if axis.z() == 0.0 && (axis.x() != 0.0 || axis.y() != 0.0) {
        return Err(TransformError::ViewAxisWithoutDepth { axis });
    }
    let distance = axis.iter().map(|x| x * x).sum::<f32>().sqrt();
    let far_size = fov.map(|angle| 2.0 * distance * (angle / 2.0).tan());

    // written to also reject NaN
    let fits = |near: f32, far: f32| 0.0 < near && near < far;
    if !(fits(near_size.x(), far_size.x()) && fits(near_size.y(), far_size.y())) {
        return Err(TransformError::NearPlaneNotSmaller { near_size, far_size });
    }

    let near_distance = distance * near_size.x() / far_size.x();
    let near_center = eye + axis * (near_distance / distance);
    trace!("eye-space near plane at {} (distance {})", near_center - eye, near_distance);

    let projection = try_perspective_from_frustum(near_center - eye, near_size, axis, Layout::ColumnMajor)?;
    Ok(layout.apply(projection * translation_matrix(-eye)))
}

fn ortho_matrix(position: V3, size: V3) -> M44 {
    let stretch = scale_matrix(size.map(|s| 2.0 / s));
    let center = translation_matrix(-(position * 2.0 + size) / 2.0);
    stretch * center
}

fn squeeze_matrix(near: f32, far: f32) -> M44 {
    let mut m = M44::zero();
    m[0][0] = near;
    m[1][1] = near;
    m[2][2] = near + far;
    m[2][3] = -near * far;
    m[3][2] = 1.0;
    m
}
