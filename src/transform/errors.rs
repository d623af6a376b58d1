/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Fail;
use gfxmat_array_types::{V2, V3};

/// Geometric preconditions violated by a projection request.
#[derive(Debug, Fail)]
pub enum TransformError {
    /// The near and far planes of a frustum are at the same depth.
    #[fail(display = "degenerate frustum: near and far planes are both at z = {}", depth)]
    DegenerateFrustum { depth: f32 },

    /// The near plane must be nonempty and fit strictly inside the far plane.
    #[fail(display = "near plane {} must be positive and strictly smaller than the far plane {} in both dimensions", near_size, far_size)]
    NearPlaneNotSmaller { near_size: V2, far_size: V2 },

    /// Eye-space projections look along `+z`; this view axis has no depth.
    #[fail(display = "view axis {} has no z component (eye-space projections look along +z)", axis)]
    ViewAxisWithoutDepth { axis: V3 },
}
