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

use num_traits::{PrimInt, Signed};

/// A queen on the board, identified by its column and row.
///
/// The column is fixed at creation: searches fill the board column by column,
/// so a queen's column is its identity within a placement. The row is the
/// mutable search coordinate and only ever advances (see [`Queen::advance_row`]).
///
/// `Queen` is a plain value type; copying one produces a fully independent
/// coordinate pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Queen<T> {
    col: T,
    row: T,
}

impl<T> Queen<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new queen at the given column and row.
    #[inline]
    pub fn new(col: T, row: T) -> Self {
        Self { col, row }
    }

    /// Creates a new queen at the top of the given column (row 0).
    #[inline]
    pub fn at_column_start(col: T) -> Self {
        Self {
            col,
            row: T::zero(),
        }
    }

    /// Returns the queen's column.
    #[inline]
    pub fn col(&self) -> T {
        self.col
    }

    /// Returns the queen's row.
    #[inline]
    pub fn row(&self) -> T {
        self.row
    }

    /// Advances the queen's row by one.
    ///
    /// Used while iterating through candidate placements for a column. The
    /// column never changes; callers are responsible for bounds handling
    /// (an out-of-bounds row is simply never safe).
    #[inline]
    pub fn advance_row(&mut self) {
        self.row = self.row + T::one();
    }

    /// Returns `true` if this queen occupies the same column as `other`.
    #[inline]
    pub fn same_column(&self, other: &Queen<T>) -> bool {
        self.col == other.col
    }
}

impl<T> std::fmt::Display for Queen<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i32;

    #[test]
    fn test_new_and_accessors() {
        let q = Queen::<IntegerType>::new(3, 5);
        assert_eq!(q.col(), 3);
        assert_eq!(q.row(), 5);
    }

    #[test]
    fn test_at_column_start_begins_at_row_zero() {
        let q = Queen::<IntegerType>::at_column_start(4);
        assert_eq!(q.col(), 4);
        assert_eq!(q.row(), 0);
    }

    #[test]
    fn test_advance_row_increments_and_keeps_column() {
        let mut q = Queen::<IntegerType>::at_column_start(2);
        q.advance_row();
        q.advance_row();
        assert_eq!(q.row(), 2);
        assert_eq!(q.col(), 2);
    }

    #[test]
    fn test_copy_is_value_independent() {
        let mut original = Queen::<IntegerType>::new(1, 1);
        let copy = original;
        original.advance_row();
        assert_eq!(original.row(), 2);
        assert_eq!(copy.row(), 1);
    }

    #[test]
    fn test_equality_is_field_equality() {
        assert_eq!(
            Queen::<IntegerType>::new(2, 7),
            Queen::<IntegerType>::new(2, 7)
        );
        assert_ne!(
            Queen::<IntegerType>::new(2, 7),
            Queen::<IntegerType>::new(7, 2)
        );
    }

    #[test]
    fn test_same_column() {
        let a = Queen::<IntegerType>::new(3, 0);
        let b = Queen::<IntegerType>::new(3, 6);
        let c = Queen::<IntegerType>::new(4, 0);
        assert!(a.same_column(&b));
        assert!(!a.same_column(&c));
    }

    #[test]
    fn test_display_formats_col_then_row() {
        let q = Queen::<IntegerType>::new(0, 3);
        assert_eq!(format!("{}", q), "(0, 3)");
    }
}
