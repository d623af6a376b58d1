/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

pub(crate) trait ArgMatchesExt {
    /// For values that ought to exist because the arg was `required(true)`.
    fn required_value_of(&self, name: &str) -> FailResult<&str>;
}

impl<'a> ArgMatchesExt for clap::ArgMatches<'a> {
    fn required_value_of(&self, name: &str) -> FailResult<&str> {
        self.value_of(name)
            .ok_or_else(|| format_err!("BUG! ({} was required)", name))
    }
}
