/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The part of gfxmat that talks to the outside world.
//!
//! Reading config files, setting up the global logger, and the `main`
//! functions of the binaries all live here, so that the library crates
//! stay free of I/O.

#[cfg(test)]
#[macro_use]
extern crate gfxmat_assert_close;

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;

pub type FailResult<T> = Result<T, failure::Error>;

mod config;
mod validation;
mod logging;
mod scene;
mod util;
pub mod entry_points;

pub use crate::config::{
    YamlRead,
    Settings,
    ModelSettings,
    ProjectionSettings,
    Orthographic,
    Frustum,
    Eye,
};
pub use crate::validation::ProjectionKind;
pub use crate::logging::{GlobalLogger, ColorizedLevel};
pub use crate::scene::Scene;
