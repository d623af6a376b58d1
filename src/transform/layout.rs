/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use gfxmat_array_types::M44;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Which way a generated matrix should face when it leaves the library.
///
/// Matrices carry no layout of their own; this only decides whether the
/// generator transposes its result. Pick the one matching how the matrix
/// will be uploaded (e.g. the `transpose` argument of `glUniformMatrix4fv`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Layout {
    /// The matrix as authored: column vectors on the right, translation in
    /// the last column.
    ColumnMajor,
    /// The transpose: row vectors on the left, translation in the last row.
    RowMajor,
}

impl Default for Layout {
    fn default() -> Self { Layout::ColumnMajor }
}

impl Layout {
    /// Convert from the `row_major: bool` flag used by many C-style APIs.
    pub fn from_row_major_flag(row_major: bool) -> Self {
        match row_major {
            true => Layout::RowMajor,
            false => Layout::ColumnMajor,
        }
    }

    pub fn is_row_major(self) -> bool { self == Layout::RowMajor }

    /// Bring a matrix authored in column-major form into this layout.
    #[inline]
    pub fn apply(self, authored: M44) -> M44 {
        match self {
            Layout::ColumnMajor => authored,
            Layout::RowMajor => authored.t(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfxmat_array_types::mat;

    #[test]
    fn apply() {
        let m = M44::from_fn(|r, c| (4 * r + c) as f32);
        assert_eq!(Layout::ColumnMajor.apply(m), m);
        assert_eq!(Layout::RowMajor.apply(m), m.t());
        assert_eq!(Layout::RowMajor.apply(Layout::RowMajor.apply(m)), m);
        assert_eq!(Layout::default().apply(mat::eye()), M44::eye());
    }

    #[test]
    fn flag() {
        assert_eq!(Layout::from_row_major_flag(true), Layout::RowMajor);
        assert!(!Layout::from_row_major_flag(false).is_row_major());
    }
}
