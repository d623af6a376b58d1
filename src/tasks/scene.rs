/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use gfxmat_array_types::{M44, V2, V3};
use gfxmat_transform::{self as transform, Layout, Rotation};

use crate::FailResult;
use crate::config::{Settings, ModelSettings, ProjectionSettings};
use crate::validation::ProjectionKind;

/// The matrices described by a `Settings`.
///
/// Everything is composed in column-major form; the layout is only applied
/// on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    layout: Layout,
    model: M44,
    projection: M44,
}

impl Scene {
    pub fn from_settings(settings: &Settings, layout: Layout) -> FailResult<Scene> {
        let model = model_matrix(&settings.model);
        let projection = match &settings.projection {
            Some(projection) => projection_matrix(projection)?,
            None => M44::eye(),
        };
        Ok(Scene { layout, model, projection })
    }

    pub fn layout(&self) -> Layout { self.layout }

    pub fn model(&self) -> M44 { self.layout.apply(self.model) }

    pub fn projection(&self) -> M44 { self.layout.apply(self.projection) }

    /// `projection * model`, taking model coordinates to clip space.
    pub fn combined(&self) -> M44 { self.layout.apply(self.projection * self.model) }
}

fn model_matrix(model: &ModelSettings) -> M44 {
    let authored = Layout::ColumnMajor;
    let rotation = Rotation::new(model.rotation_direction, authored);

    transform::translate(V3(model.translate), authored)
        * transform::rotation(V3(model.rotate), rotation)
        * transform::scale(V3(model.scale), authored)
}

fn projection_matrix(projection: &ProjectionSettings) -> FailResult<M44> {
    let authored = Layout::ColumnMajor;

    Ok(match projection.kind()? {
        ProjectionKind::Orthographic(p) => {
            transform::orthographic(V3(p.position), V3(p.size), authored)
        },
        ProjectionKind::Frustum(p) => {
            transform::try_perspective_from_frustum(
                V3(p.near_center), V2(p.near_size), V3(p.far_center), authored,
            )?
        },
        ProjectionKind::Eye(p) => {
            transform::perspective_from_eye(
                V3(p.eye), V3(p.center), V2(p.near_size), V2(p.fov), authored,
            )?
        },
    })
}
