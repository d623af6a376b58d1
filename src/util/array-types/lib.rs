/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size `f32` vectors and square matrices.
//!
//! Matrices are containers of row vectors: `m[r][c]` is row `r`, column `c`.
//! Nothing in a matrix records whether it is meant to be read as row-major or
//! column-major; that is decided by whoever hands it to a graphics API.
//! (see the `gfxmat-transform` crate for the generators that care)

#[cfg(test)]
#[macro_use]
extern crate gfxmat_assert_close;

#[macro_use]
mod macros;

mod types;
mod conv;
mod ops;
mod display;
mod minor;
mod det;
mod inv;

pub mod mat;
pub mod vee;

pub use crate::types::*;
pub use crate::conv::IntoMatrix;
pub use crate::det::{Det, det};
pub use crate::inv::{Inv, SingularMatrixError, inv, try_inv, adjugate, cofactors};
pub use crate::minor::{Indices, Minor, MinorT};
