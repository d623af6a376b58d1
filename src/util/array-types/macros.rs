/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Most impls in this crate are identical up to the size of the type.
// These invoke a locally defined macro once per size.
//
// Usage:
//
//     macro_rules! impl_thing {
//         ($Mnn:ident $Vn:ident $n:tt) => { impl Thing for $Mnn { ... } };
//     }
//     each_square!(impl_thing!);

/// Calls `$mac!{Mnn Vn n}` for each square matrix type.
macro_rules! each_square {
    ($mac:ident!) => {
        $mac!{M22 V2 2}
        $mac!{M33 V3 3}
        $mac!{M44 V4 4}
    };
}

/// Calls `$mac!{Vn n}` for each vector type.
macro_rules! each_vector {
    ($mac:ident!) => {
        $mac!{V2 2}
        $mac!{V3 3}
        $mac!{V4 4}
    };
}

/// Calls `$mac!{Mnn Vn n Mmm}` for each matrix type that has a minor,
/// where `Mmm` is the type of the minor.
macro_rules! each_square_with_minor {
    ($mac:ident!) => {
        $mac!{M33 V3 3 M22}
        $mac!{M44 V4 4 M33}
    };
}
