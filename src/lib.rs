/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size `f32` matrices and vectors for graphics pipelines.
//!
//! ```
//! use gfxmat::{M44, V3, Layout};
//!
//! let model = gfxmat::translate(V3([0.0, 0.0, -5.0]), Layout::ColumnMajor);
//! let projection = gfxmat::orthographic(V3([-1.0; 3]), V3([2.0; 3]), Layout::ColumnMajor);
//! let mvp: M44 = projection * model;
//! assert_eq!(mvp.det(), 1.0);
//! assert_eq!(mvp.inv() * mvp, M44::eye());
//! ```
//!
//! The pieces live in separate crates, which are re-exported here:
//!
//! * `gfxmat-array-types`: the `V2`..`V4` and `M22`..`M44` types, with
//!   determinants, adjugates and inverses.
//! * `gfxmat-transform`: the transform generators and [`Layout`].

pub use gfxmat_array_types::*;
pub use gfxmat_transform::*;
