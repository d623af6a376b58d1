/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Generators for the usual 4x4 graphics transforms.
//!
//! Every generator is a pure function returning a fresh `M44`. Internally each
//! one is authored for column vectors on the right (`M * v`), so translations
//! sit in the last column and `a * b` applies `b` first. The [`Layout`] argument
//! is applied exactly once, to the finished matrix:
//!
//! * [`Layout::ColumnMajor`] returns the matrix as authored.
//! * [`Layout::RowMajor`] returns its transpose (the form used with row vectors
//!   on the left, `v * M`).
//!
//! So a matrix generated with `RowMajor` is always exactly the transpose of the
//! same call with `ColumnMajor`, including the composite projections.

#[cfg(test)]
#[macro_use]
extern crate gfxmat_assert_close;

#[macro_use]
extern crate log;

mod errors;
mod layout;
mod affine;
mod rotation;
mod projection;

pub use crate::errors::TransformError;
pub use crate::layout::Layout;
pub use crate::affine::{translate, scale};
pub use crate::rotation::{rotation, rotation_x, rotation_y, rotation_z, Rotation, RotationDirection};
pub use crate::projection::{
    orthographic,
    perspective_to_orthographic,
    perspective_from_frustum,
    try_perspective_from_frustum,
    perspective_from_eye,
};
