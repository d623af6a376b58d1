/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Minors: the submatrix left after deleting one row and one column.

use crate::types::*;

/// The largest matrix order in this crate.
const MAX_ORDER: usize = 4;

/// An ordered list of distinct row (or column) indices, stored inline.
///
/// Used to pick out the rows and columns of a minor. Deleting an index keeps
/// the others in their original order, which is what places each surviving
/// entry in the right cell of the minor.
#[derive(Debug, Copy, Clone)]
pub struct Indices {
    buf: [usize; MAX_ORDER],
    len: usize,
}

impl Indices {
    /// The indices `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the largest supported matrix order (4).
    pub fn range(n: usize) -> Self {
        assert!(n <= MAX_ORDER, "matrix order {} is not supported", n);
        let mut buf = [0; MAX_ORDER];
        for (i, x) in buf.iter_mut().enumerate() {
            *x = i;
        }
        Indices { buf, len: n }
    }

    /// A copy of this list with `index` removed.
    ///
    /// Leaves the list unchanged if `index` is not present.
    pub fn without(&self, index: usize) -> Self {
        let mut out = Indices { buf: [0; MAX_ORDER], len: 0 };
        for &x in self.as_slice().iter().filter(|&&x| x != index) {
            out.buf[out.len] = x;
            out.len += 1;
        }
        out
    }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn as_slice(&self) -> &[usize] { &self.buf[..self.len] }
}

// (slots past `len` are unused)
impl PartialEq for Indices {
    fn eq(&self, other: &Self) -> bool
    { self.as_slice() == other.as_slice() }
}

impl Eq for Indices { }

impl std::ops::Index<usize> for Indices {
    type Output = usize;

    #[inline]
    fn index(&self, i: usize) -> &usize
    { &self.as_slice()[i] }
}

/// Output of `minor`. A square matrix one order smaller.
pub type MinorT<M> = <M as Minor>::Output;

/// Matrices that have an (N-1)x(N-1) minor.
pub trait Minor {
    type Output;

    /// The submatrix obtained by deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    fn minor(&self, row: usize, col: usize) -> Self::Output;
}

// The 2x2 case is special: its minor is a single entry, which is all the
// cofactor expansion needs.
impl Minor for M22 {
    type Output = f32;

    #[inline]
    fn minor(&self, row: usize, col: usize) -> f32 {
        assert!(row < 2 && col < 2, "index ({}, {}) out of bounds for M22", row, col);
        self[1 - row][1 - col]
    }
}

macro_rules! impl_minor {
    ($Mnn:ident $Vn:ident $n:tt $Mmm:ident) => {
        impl Minor for $Mnn {
            type Output = $Mmm;

            #[inline]
            fn minor(&self, row: usize, col: usize) -> $Mmm {
                assert!(row < $n && col < $n, "index ({}, {}) out of bounds for {}", row, col, stringify!($Mnn));
                let rows = Indices::range($n).without(row);
                let cols = Indices::range($n).without(col);
                $Mmm::from_fn(|r, c| self[rows[r]][cols[c]])
            }
        }
    };
}

each_square_with_minor!(impl_minor!);
