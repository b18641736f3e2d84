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
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// A committed full placement: one queen per column, in column order.
///
/// Solutions are immutable deep copies handed to the caller; the working
/// placement that produced one keeps mutating without affecting it. Whether
/// the queens are actually mutually non-attacking is the search's concern —
/// `Solution` only enforces the column-order shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution<T> {
    queens: Vec<Queen<T>>,
}

impl<T> Solution<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a solution from queens in column order.
    ///
    /// # Panics
    ///
    /// Panics if the queen at position `i` does not occupy column `i`.
    pub fn new(queens: Vec<Queen<T>>) -> Self {
        for (i, q) in queens.iter().enumerate() {
            assert!(
                q.col().to_usize() == Some(i),
                "called `Solution::new` with a queen out of column order: position {} holds column {:?}",
                i,
                q.col().to_usize()
            );
        }
        Self { queens }
    }

    /// Returns the queens in column order.
    #[inline]
    pub fn queens(&self) -> &[Queen<T>] {
        &self.queens
    }

    /// Returns the number of queens (the board dimension this solution
    /// was found on).
    #[inline]
    pub fn len(&self) -> usize {
        self.queens.len()
    }

    /// Returns `true` if this is the empty placement (the vacuous solution
    /// of the zero-sized board).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    /// Returns the row of the queen in the given column.
    #[inline]
    pub fn row_in_column(&self, col: usize) -> Option<T> {
        self.queens.get(col).map(|q| q.row())
    }

    /// Returns one row per column, in column order.
    #[inline]
    pub fn rows(&self) -> Vec<T> {
        self.queens.iter().map(|q| q.row()).collect()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.queens.is_empty() {
            return writeln!(f, "(empty board)");
        }

        let n = self.queens.len();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let occupied = self.queens[col].row().to_usize() == Some(row);
                write!(f, "{}", if occupied { 'Q' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The solutions found during a full enumeration.
///
/// Insertion order is discovery order (kept for reproducibility); membership
/// is tracked in an `FxHashSet` so no two stored solutions are ever
/// identical. Equality between sets is order-insensitive, which is exactly
/// the contract under which the two engines' enumerations must agree.
#[derive(Clone, Debug)]
pub struct SolutionSet<T> {
    solutions: Vec<Solution<T>>,
    seen: FxHashSet<Solution<T>>,
}

impl<T> SolutionSet<T>
where
    T: PrimInt + Signed + Hash,
{
    /// Creates a new, empty solution set.
    #[inline]
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Inserts a solution, keeping discovery order.
    ///
    /// Returns `true` if the solution was new, `false` if an identical one
    /// was already recorded.
    pub fn insert(&mut self, solution: Solution<T>) -> bool {
        if self.seen.insert(solution.clone()) {
            self.solutions.push(solution);
            true
        } else {
            false
        }
    }

    /// Returns `true` if an identical solution was already recorded.
    #[inline]
    pub fn contains(&self, solution: &Solution<T>) -> bool {
        self.seen.contains(solution)
    }

    /// Returns the number of distinct solutions.
    #[inline]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if no solutions were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns the solutions in discovery order.
    #[inline]
    pub fn as_slice(&self) -> &[Solution<T>] {
        &self.solutions
    }

    /// Returns an iterator over the solutions in discovery order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Solution<T>> {
        self.solutions.iter()
    }

    /// Consumes the set, returning the solutions in discovery order.
    #[inline]
    pub fn into_vec(self) -> Vec<Solution<T>> {
        self.solutions
    }
}

impl<T> Default for SolutionSet<T>
where
    T: PrimInt + Signed + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SolutionSet<T>
where
    T: PrimInt + Signed + Hash,
{
    /// Order-insensitive set equality.
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl<T> Eq for SolutionSet<T> where T: PrimInt + Signed + Hash {}

impl<T> FromIterator<Solution<T>> for SolutionSet<T>
where
    T: PrimInt + Signed + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Solution<T>>,
    {
        let mut set = Self::new();
        for solution in iter {
            set.insert(solution);
        }
        set
    }
}

impl<T> std::fmt::Display for SolutionSet<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolutionSet(solutions: {})", self.solutions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Placement;

    type IntegerType = i32;

    fn solution(rows: &[IntegerType]) -> Solution<IntegerType> {
        Placement::from_rows(rows).to_solution()
    }

    #[test]
    fn test_new_and_accessors() {
        let s = solution(&[1, 3, 0, 2]);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(s.rows(), vec![1, 3, 0, 2]);
        assert_eq!(s.row_in_column(1), Some(3));
        assert_eq!(s.row_in_column(4), None);
    }

    #[test]
    #[should_panic(expected = "called `Solution::new` with a queen out of column order")]
    fn test_new_panics_on_column_disorder() {
        let queens = vec![
            Queen::<IntegerType>::new(1, 0),
            Queen::<IntegerType>::new(0, 2),
        ];
        let _ = Solution::new(queens);
    }

    #[test]
    fn test_empty_solution_is_valid() {
        let s = Solution::<IntegerType>::new(Vec::new());
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(format!("{}", s), "(empty board)\n");
    }

    #[test]
    fn test_display_renders_the_grid() {
        let s = solution(&[1, 3, 0, 2]);
        let expected = ". . Q .\nQ . . .\n. . . Q\n. Q . .\n";
        assert_eq!(format!("{}", s), expected);
    }

    #[test]
    fn test_set_insert_deduplicates() {
        let mut set = SolutionSet::<IntegerType>::new();
        assert!(set.insert(solution(&[1, 3, 0, 2])));
        assert!(set.insert(solution(&[2, 0, 3, 1])));
        assert!(!set.insert(solution(&[1, 3, 0, 2])));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&solution(&[2, 0, 3, 1])));
        assert!(!set.contains(&solution(&[0, 1, 2, 3])));
    }

    #[test]
    fn test_set_preserves_discovery_order() {
        let mut set = SolutionSet::<IntegerType>::new();
        set.insert(solution(&[1, 3, 0, 2]));
        set.insert(solution(&[2, 0, 3, 1]));

        let rows: Vec<Vec<IntegerType>> = set.iter().map(|s| s.rows()).collect();
        assert_eq!(rows, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a: SolutionSet<IntegerType> =
            [solution(&[1, 3, 0, 2]), solution(&[2, 0, 3, 1])]
                .into_iter()
                .collect();
        let b: SolutionSet<IntegerType> =
            [solution(&[2, 0, 3, 1]), solution(&[1, 3, 0, 2])]
                .into_iter()
                .collect();

        assert_eq!(a, b);

        let c: SolutionSet<IntegerType> = [solution(&[1, 3, 0, 2])].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_includes_count() {
        let mut set = SolutionSet::<IntegerType>::new();
        assert_eq!(format!("{}", set), "SolutionSet(solutions: 0)");
        set.insert(solution(&[0]));
        assert_eq!(format!("{}", set), "SolutionSet(solutions: 1)");
    }
}
