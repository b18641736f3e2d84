// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::queen::Queen;
use num_traits::{FromPrimitive, PrimInt, Signed};

/// The board configuration for a solve: an `n × n` chessboard holding up to
/// `n` queens, one per column.
///
/// `Board` carries no queen state of its own; the working state lives in a
/// [`Placement`](crate::placement::Placement) owned by the running search.
/// The only parameter is the dimension `n` (default 8), fixed for all entry
/// points of a given run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board<T> {
    n: T,
}

impl<T> Board<T>
where
    T: PrimInt + Signed,
{
    /// The classic board dimension used when no size is configured.
    pub const DEFAULT_SIZE: usize = 8;

    /// Creates a board of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    #[inline]
    pub fn new(n: T) -> Self {
        assert!(
            n >= T::zero(),
            "called `Board::new` with a negative board dimension"
        );
        Self { n }
    }

    /// Returns the board dimension in the coordinate type.
    #[inline]
    pub fn n(&self) -> T {
        self.n
    }

    /// Returns the board dimension as a `usize` (the number of columns to
    /// fill, and the length of a full placement).
    #[inline]
    pub fn size(&self) -> usize {
        // Non-negative by construction, so the cast cannot fail for any
        // primitive coordinate type.
        self.n
            .to_usize()
            .expect("called `Board::size` on a board whose dimension does not fit in usize")
    }

    /// Renders the given queens on this board as an ASCII grid.
    ///
    /// Occupied squares print `Q`, empty squares `.`. Queens outside the
    /// board bounds are ignored. Intended for demonstration and observer
    /// output; the search itself never renders.
    pub fn render(&self, queens: &[Queen<T>]) -> String {
        let n = self.size();
        let mut grid = vec![false; n * n];
        for q in queens {
            if let (Some(row), Some(col)) = (q.row().to_usize(), q.col().to_usize()) {
                if row < n && col < n {
                    grid[row * n + col] = true;
                }
            }
        }

        let mut out = String::with_capacity(n * (2 * n + 1));
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    out.push(' ');
                }
                out.push(if grid[row * n + col] { 'Q' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl<T> Default for Board<T>
where
    T: PrimInt + Signed + FromPrimitive,
{
    fn default() -> Self {
        let n = T::from_usize(Self::DEFAULT_SIZE)
            .expect("called `Board::default` with a coordinate type too narrow for the default dimension");
        Self::new(n)
    }
}

impl<T> std::fmt::Display for Board<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(n: {})", self.n)
    }
}
