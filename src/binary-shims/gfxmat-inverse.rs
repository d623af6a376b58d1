/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

fn main() { gfxmat_tasks::entry_points::gfxmat_inverse() }
