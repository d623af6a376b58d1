/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Human-readable dumps.
//
// A vector prints as one bracketed row of 4-decimal fixed-point numbers;
// a matrix prints one such row per line, with no trailing newline.
//
//     [1.0000, 0.0000, 0.0000, 2.5000]
//     [0.0000, 1.0000, 0.0000, 0.0000]
//     ...
//
// The precision can be overridden with the usual `{:.N}` syntax.

use std::fmt;

use crate::types::*;

const DEFAULT_PRECISION: usize = 4;

fn write_row(f: &mut fmt::Formatter<'_>, row: &[f32]) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    write!(f, "[")?;
    for (i, x) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:.*}", precision, x)?;
    }
    write!(f, "]")
}

macro_rules! impl_vector_display {
    ($Vn:ident $n:tt) => {
        impl fmt::Display for $Vn {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { write_row(f, &self.0) }
        }
    };
}

each_vector!(impl_vector_display!);

macro_rules! impl_matrix_display {
    ($Mnn:ident $Vn:ident $n:tt) => {
        impl fmt::Display for $Mnn {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (r, row) in self.iter().enumerate() {
                    if r > 0 {
                        writeln!(f)?;
                    }
                    write_row(f, &row.0)?;
                }
                Ok(())
            }
        }
    };
}

each_square!(impl_matrix_display!);
