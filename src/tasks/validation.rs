/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks that cannot be expressed in the shape of the config types.

use gfxmat_transform::Layout;

use crate::FailResult;
use crate::config::*;

/// The one projection chosen in a `ProjectionSettings`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionKind {
    Orthographic(Orthographic),
    Frustum(Frustum),
    Eye(Eye),
}

impl ProjectionSettings {
    pub fn kind(&self) -> FailResult<ProjectionKind> {
        Ok(match (&self.orthographic, &self.frustum, &self.eye) {
            (Some(x), None, None) => ProjectionKind::Orthographic(x.clone()),
            (None, Some(x), None) => ProjectionKind::Frustum(x.clone()),
            (None, None, Some(x)) => ProjectionKind::Eye(x.clone()),
            (None, None, None) => bail!("projection: expected one of 'orthographic', 'frustum' or 'eye'"),
            _ => bail!("projection: 'orthographic', 'frustum' and 'eye' are mutually exclusive"),
        })
    }
}

impl Settings {
    /// The layout to print in, letting the `--row-major` flag override the file.
    pub fn layout_with_override(&self, row_major: bool) -> Layout {
        match row_major {
            true => Layout::RowMajor,
            false => self.layout,
        }
    }
}
