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

use crate::{queen::Queen, solution::Solution};
use num_traits::{FromPrimitive, PrimInt, Signed};
use smallvec::SmallVec;

/// Inline capacity of the working stack. Matches the default board, so the
/// common case never touches the heap.
const INLINE_QUEENS: usize = 8;

/// The mutable working stack of a search: the queens committed so far, in
/// column order.
///
/// The queen at position `i` always occupies column `i`; push operations
/// uphold this invariant, so the stack depth doubles as the next column to
/// fill. A running search owns its placement exclusively and mutates it in
/// place: push a new column, advance the last queen's row, or pop to
/// backtrack. Committing the current state to a result is an explicit deep
/// copy ([`Placement::to_solution`]), after which the working stack may keep
/// mutating freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement<T> {
    queens: SmallVec<[Queen<T>; INLINE_QUEENS]>,
}

impl<T> Placement<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new, empty placement.
    #[inline]
    pub fn new() -> Self {
        Self {
            queens: SmallVec::new(),
        }
    }

    /// Creates an empty placement with capacity for `n` queens.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            queens: SmallVec::with_capacity(n),
        }
    }

    /// Builds a placement from one row per column: queen `i` is placed at
    /// column `i`, row `rows[i]`.
    pub fn from_rows(rows: &[T]) -> Self
    where
        T: FromPrimitive,
    {
        let mut placement = Self::with_capacity(rows.len());
        for (col, &row) in rows.iter().enumerate() {
            let col = T::from_usize(col)
                .expect("called `Placement::from_rows` with more columns than the coordinate type can index");
            placement.queens.push(Queen::new(col, row));
        }
        placement
    }

    /// Returns the number of queens placed.
    #[inline]
    pub fn len(&self) -> usize {
        self.queens.len()
    }

    /// Returns `true` if no queens are placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    /// Returns the placed queens as a slice, in column order.
    #[inline]
    pub fn queens(&self) -> &[Queen<T>] {
        &self.queens
    }

    /// Returns the most recently placed queen.
    #[inline]
    pub fn last(&self) -> Option<&Queen<T>> {
        self.queens.last()
    }

    /// Splits off the most recently placed queen from the rest.
    ///
    /// The last queen is the search's current candidate; the rest are the
    /// queens it must be checked against.
    #[inline]
    pub fn split_last(&self) -> Option<(&Queen<T>, &[Queen<T>])> {
        self.queens.split_last()
    }

    /// Splits off the most recently placed queen mutably, leaving the rest
    /// readable. This is the access pattern of the advance-or-exhaust
    /// primitive: mutate the candidate's row while testing it against the
    /// other queens.
    #[inline]
    pub fn split_last_mut(&mut self) -> Option<(&mut Queen<T>, &[Queen<T>])> {
        let (last, rest) = self.queens.split_last_mut()?;
        Some((last, &*rest))
    }

    /// Appends a queen at the top of the next column (row 0).
    ///
    /// # Panics
    ///
    /// Panics if the next column index does not fit the coordinate type.
    #[inline]
    pub fn push_next_column(&mut self)
    where
        T: FromPrimitive,
    {
        let col = T::from_usize(self.queens.len())
            .expect("called `Placement::push_next_column` with a column index that does not fit the coordinate type");
        self.queens.push(Queen::at_column_start(col));
    }

    /// Advances the last queen's row by one.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the placement is empty.
    #[inline]
    pub fn advance_last(&mut self) {
        debug_assert!(
            !self.queens.is_empty(),
            "called `Placement::advance_last` on an empty placement"
        );
        if let Some(q) = self.queens.last_mut() {
            q.advance_row();
        }
    }

    /// Removes and returns the most recently placed queen (backtrack one
    /// column).
    #[inline]
    pub fn pop(&mut self) -> Option<Queen<T>> {
        self.queens.pop()
    }

    /// Removes all queens, keeping allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.queens.clear();
    }

    /// Commits the current state as an immutable [`Solution`].
    ///
    /// This is a deep value copy: the returned solution is unaffected by any
    /// later mutation of this placement.
    #[inline]
    pub fn to_solution(&self) -> Solution<T> {
        Solution::new(self.queens.to_vec())
    }

    /// Returns an iterator over the placed queens in column order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Queen<T>> {
        self.queens.iter()
    }
}

impl<T> Default for Placement<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for Placement<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placement(queens: {})", self.queens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i32;

    #[test]
    fn test_new_is_empty() {
        let p = Placement::<IntegerType>::new();
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        assert!(p.last().is_none());
        assert_eq!(p.queens(), &[]);
    }

    #[test]
    fn test_push_next_column_assigns_sequential_columns() {
        let mut p = Placement::<IntegerType>::new();
        p.push_next_column();
        p.push_next_column();
        p.push_next_column();

        assert_eq!(p.len(), 3);
        for (i, q) in p.iter().enumerate() {
            assert_eq!(q.col(), i as IntegerType);
            assert_eq!(q.row(), 0);
        }
    }

    #[test]
    fn test_advance_last_only_touches_the_last_queen() {
        let mut p = Placement::<IntegerType>::new();
        p.push_next_column();
        p.push_next_column();
        p.advance_last();
        p.advance_last();

        assert_eq!(p.queens()[0].row(), 0);
        assert_eq!(p.queens()[1].row(), 2);
    }

    #[test]
    fn test_pop_backtracks_one_column() {
        let mut p = Placement::<IntegerType>::new();
        p.push_next_column();
        p.push_next_column();

        let popped = p.pop().unwrap();
        assert_eq!(popped.col(), 1);
        assert_eq!(p.len(), 1);

        // The next push reuses the freed column.
        p.push_next_column();
        assert_eq!(p.last().unwrap().col(), 1);
    }

    #[test]
    fn test_split_last_mut_keeps_rest_readable() {
        let mut p = Placement::<IntegerType>::from_rows(&[1, 3, 0]);
        let (last, rest) = p.split_last_mut().unwrap();
        assert_eq!(last.col(), 2);
        assert_eq!(rest.len(), 2);
        last.advance_row();
        assert_eq!(p.queens()[2].row(), 1);
    }

    #[test]
    fn test_from_rows_builds_column_order() {
        let p = Placement::<IntegerType>::from_rows(&[3, 1, 7, 5, 0, 2, 4, 6]);
        assert_eq!(p.len(), 8);
        assert_eq!(p.queens()[0].row(), 3);
        assert_eq!(p.queens()[4].col(), 4);
        assert_eq!(p.queens()[4].row(), 0);
    }

    #[test]
    fn test_to_solution_is_a_deep_copy() {
        let mut p = Placement::<IntegerType>::from_rows(&[1, 3, 0, 2]);
        let solution = p.to_solution();

        p.advance_last();
        p.pop();

        assert_eq!(solution.len(), 4);
        assert_eq!(solution.rows(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_display_includes_count() {
        let mut p = Placement::<IntegerType>::new();
        assert_eq!(format!("{}", p), "Placement(queens: 0)");
        p.push_next_column();
        assert_eq!(format!("{}", p), "Placement(queens: 1)");
    }
}
