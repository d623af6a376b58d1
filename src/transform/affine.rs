/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use gfxmat_array_types::{M44, V3};

use crate::Layout;

/// Translation by `offset`.
///
/// In `ColumnMajor` form the offset is the last column; in `RowMajor` form it
/// is the last row.
pub fn translate(offset: V3, layout: Layout) -> M44 {
    layout.apply(translation_matrix(offset))
}

/// Scaling along each axis, i.e. the diagonal matrix `(x, y, z, 1)`.
///
/// A zero factor collapses an axis, which is almost never intended, so it is
/// logged as a warning. The degenerate matrix is still returned.
pub fn scale(factors: V3, layout: Layout) -> M44 {
    if factors.product() == 0.0 {
        warn!("One of the scaling factors is zero: {}", factors);
    }
    layout.apply(scale_matrix(factors))
}

// Column-major builders shared with the projections, which compose them
// before applying a layout. They start from the zero matrix and only write
// the entries that are not zero.

pub(crate) fn translation_matrix(offset: V3) -> M44 {
    let mut m = M44::zero();
    for k in 0..4 {
        m[k][k] = 1.0;
    }
    for k in 0..3 {
        m[k][3] = offset[k];
    }
    m
}

pub(crate) fn scale_matrix(factors: V3) -> M44 {
    let mut m = M44::zero();
    for k in 0..3 {
        m[k][k] = factors[k];
    }
    m[3][3] = 1.0;
    m
}
