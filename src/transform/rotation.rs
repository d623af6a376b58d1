/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use gfxmat_array_types::{M44, V3};

use crate::Layout;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Sense of a positive angle, looking down the axis towards the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RotationDirection {
    /// Right-handed rotation.
    CounterClockwise,
    /// Every angle is negated before building the matrix.
    Clockwise,
}

impl Default for RotationDirection {
    fn default() -> Self { RotationDirection::CounterClockwise }
}

impl RotationDirection {
    fn signed(self, angle: f32) -> f32 {
        match self {
            RotationDirection::CounterClockwise => angle,
            RotationDirection::Clockwise => -angle,
        }
    }
}

/// Options for the rotation generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rotation {
    pub direction: RotationDirection,
    pub layout: Layout,
}

impl Rotation {
    pub fn new(direction: RotationDirection, layout: Layout) -> Self
    { Rotation { direction, layout } }
}

impl From<Layout> for Rotation {
    fn from(layout: Layout) -> Self
    { Rotation { layout, ..Default::default() } }
}

/// Rotation by Euler angles (radians) about the x, y and z axes.
///
/// The x rotation is applied first and the z rotation last,
/// i.e. `R = Rz * Ry * Rx` for column vectors.
pub fn rotation(angles: V3, options: Rotation) -> M44 {
    let Rotation { direction, layout } = options;
    let rx = x_matrix(direction.signed(angles[0]));
    let ry = y_matrix(direction.signed(angles[1]));
    let rz = z_matrix(direction.signed(angles[2]));
    layout.apply(rz * ry * rx)
}

pub fn rotation_x(angle: f32, options: Rotation) -> M44
{ options.layout.apply(x_matrix(options.direction.signed(angle))) }

pub fn rotation_y(angle: f32, options: Rotation) -> M44
{ options.layout.apply(y_matrix(options.direction.signed(angle))) }

pub fn rotation_z(angle: f32, options: Rotation) -> M44
{ options.layout.apply(z_matrix(options.direction.signed(angle))) }

// Each builder embeds a 3x3 rotation in the upper left of a 4x4 identity.
// `(a, b)` is the pair of axes rotated into each other, in right-handed order.
fn axis_rotation(a: usize, b: usize, angle: f32) -> M44 {
    let (s, c) = angle.sin_cos();
    let mut m = M44::eye();
    m[a][a] = c;
    m[a][b] = -s;
    m[b][a] = s;
    m[b][b] = c;
    m
}

fn x_matrix(angle: f32) -> M44 { axis_rotation(1, 2, angle) }
fn y_matrix(angle: f32) -> M44 { axis_rotation(2, 0, angle) }
fn z_matrix(angle: f32) -> M44 { axis_rotation(0, 1, angle) }
