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

//! # Solver Facade
//!
//! Ties a board configuration to a choice of search engine. The four entry
//! points of the system — recursive or iterative, first-only or
//! enumerate-all — sit behind two methods taking a [`SearchStrategy`]. Every
//! call works on a fresh placement owned by the engine for the duration of
//! the call; nothing persists on the solver between calls.

use crate::{iterative, recursive};
use gambit_model::board::Board;
use gambit_search::{
    monitor::{no_op::NoOperationMonitor, search_monitor::SearchMonitor},
    num::SolverNumeric,
    result::{EnumerationOutcome, SearchOutcome},
};

/// Which engine to run a search with.
///
/// Both engines implement the same column-by-column backtracking algorithm
/// over the same safety rules; their enumerations produce identical solution
/// sets. The choice only affects how backtracking state is kept (call stack
/// vs. the placement itself).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchStrategy {
    /// Single-loop state machine, no recursion.
    Iterative,
    /// Depth-first recursion keyed by column depth.
    Recursive,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Iterative => write!(f, "Iterative"),
            SearchStrategy::Recursive => write!(f, "Recursive"),
        }
    }
}

/// The N-Queens solver: a board dimension plus the four search entry points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solver<T> {
    board: Board<T>,
}

impl<T> Solver<T>
where
    T: SolverNumeric,
{
    /// Creates a solver for the given board.
    #[inline]
    pub fn new(board: Board<T>) -> Self {
        Self { board }
    }

    /// Creates a solver for an `n × n` board.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    #[inline]
    pub fn with_dimension(n: T) -> Self {
        Self::new(Board::new(n))
    }

    /// Returns the board this solver searches on.
    #[inline]
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// Finds the first solution with the given engine, reporting progress to
    /// `monitor`.
    #[inline]
    pub fn find_one_with_monitor<M>(
        &self,
        strategy: SearchStrategy,
        monitor: &mut M,
    ) -> SearchOutcome<T>
    where
        M: SearchMonitor<T>,
    {
        match strategy {
            SearchStrategy::Iterative => iterative::find_one(&self.board, monitor),
            SearchStrategy::Recursive => recursive::find_one(&self.board, monitor),
        }
    }

    /// Finds the first solution with the given engine, unobserved.
    #[inline]
    pub fn find_one(&self, strategy: SearchStrategy) -> SearchOutcome<T> {
        self.find_one_with_monitor(strategy, &mut NoOperationMonitor::new())
    }

    /// Enumerates every solution with the given engine, reporting progress
    /// to `monitor`.
    #[inline]
    pub fn find_all_with_monitor<M>(
        &self,
        strategy: SearchStrategy,
        monitor: &mut M,
    ) -> EnumerationOutcome<T>
    where
        M: SearchMonitor<T>,
    {
        match strategy {
            SearchStrategy::Iterative => iterative::find_all(&self.board, monitor),
            SearchStrategy::Recursive => recursive::find_all(&self.board, monitor),
        }
    }

    /// Enumerates every solution with the given engine, unobserved.
    #[inline]
    pub fn find_all(&self, strategy: SearchStrategy) -> EnumerationOutcome<T> {
        self.find_all_with_monitor(strategy, &mut NoOperationMonitor::new())
    }
}

impl<T> Default for Solver<T>
where
    T: SolverNumeric,
{
    /// A solver for the classic 8×8 board.
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl<T> std::fmt::Display for Solver<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Solver({})", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_model::queen::Queen;
    use gambit_search::safety::is_correct;

    type IntegerType = i32;

    /// Records the event stream for assertions.
    #[derive(Default)]
    struct RecordingMonitor {
        enters: u32,
        exits: u32,
        moves: u64,
        solutions: Vec<Vec<IntegerType>>,
    }

    impl SearchMonitor<IntegerType> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&mut self, _board: &Board<IntegerType>) {
            self.enters += 1;
        }

        fn on_exit_search(&mut self) {
            self.exits += 1;
        }

        fn on_move(&mut self, _queens: &[Queen<IntegerType>]) {
            self.moves += 1;
        }

        fn on_solution_found(&mut self, queens: &[Queen<IntegerType>]) {
            self.solutions.push(queens.iter().map(|q| q.row()).collect());
        }
    }

    #[test]
    fn test_default_solver_uses_the_classic_board() {
        let solver = Solver::<IntegerType>::default();
        assert_eq!(solver.board().size(), 8);
    }

    #[test]
    fn test_both_strategies_solve_the_default_board() {
        let solver = Solver::<IntegerType>::default();
        for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
            let outcome = solver.find_one(strategy);
            let solution = outcome.solution().expect("8x8 board is solvable");
            assert!(is_correct(solution.queens(), solver.board().n()));
        }
    }

    #[test]
    fn test_engines_agree_on_first_solutions() {
        for n in 1..=9 {
            let solver = Solver::<IntegerType>::with_dimension(n);
            let iterative = solver.find_one(SearchStrategy::Iterative);
            let recursive = solver.find_one(SearchStrategy::Recursive);
            assert_eq!(
                iterative.solution(),
                recursive.solution(),
                "engines disagree for n = {}",
                n
            );

            // Every board except 2x2 and 3x3 is solvable.
            let solvable = n != 2 && n != 3;
            assert_eq!(iterative.has_solution(), solvable, "wrong verdict for n = {}", n);
            if let Some(solution) = iterative.solution() {
                assert_eq!(solution.len(), n as usize);
            }
        }
    }

    #[test]
    fn test_engines_enumerate_identical_solution_sets() {
        for n in 0..=7 {
            let solver = Solver::<IntegerType>::with_dimension(n);
            let iterative = solver.find_all(SearchStrategy::Iterative);
            let recursive = solver.find_all(SearchStrategy::Recursive);
            // SolutionSet equality is order-insensitive.
            assert_eq!(
                iterative.solutions(),
                recursive.solutions(),
                "engines disagree for n = {}",
                n
            );
        }
    }

    #[test]
    fn test_every_enumerated_solution_uses_each_row_and_column_once() {
        let solver = Solver::<IntegerType>::with_dimension(6);
        let outcome = solver.find_all(SearchStrategy::Recursive);

        for solution in outcome.solutions().iter() {
            let mut rows: Vec<IntegerType> = solution.rows();
            rows.sort_unstable();
            assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
            for (col, q) in solution.queens().iter().enumerate() {
                assert_eq!(q.col(), col as IntegerType);
            }
        }
    }

    #[test]
    fn test_monitor_sees_the_whole_lifecycle() {
        let solver = Solver::<IntegerType>::with_dimension(4);
        let mut monitor = RecordingMonitor::default();
        let outcome =
            solver.find_all_with_monitor(SearchStrategy::Iterative, &mut monitor);

        assert_eq!(monitor.enters, 1);
        assert_eq!(monitor.exits, 1);
        assert!(monitor.moves > 0);
        assert_eq!(monitor.solutions.len(), outcome.num_solutions());
        assert_eq!(
            monitor.solutions,
            vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]
        );
    }

    #[test]
    fn test_monitor_solution_snapshots_are_full_boards() {
        let solver = Solver::<IntegerType>::with_dimension(5);
        let mut monitor = RecordingMonitor::default();
        solver.find_all_with_monitor(SearchStrategy::Recursive, &mut monitor);

        assert_eq!(monitor.solutions.len(), 10);
        for rows in &monitor.solutions {
            assert_eq!(rows.len(), 5);
        }
    }

    #[test]
    fn test_exhausted_boards_report_through_both_strategies() {
        for n in [2, 3] {
            let solver = Solver::<IntegerType>::with_dimension(n);
            for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
                assert!(!solver.find_one(strategy).has_solution());
                assert_eq!(solver.find_all(strategy).num_solutions(), 0);
            }
        }
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(format!("{}", SearchStrategy::Iterative), "Iterative");
        assert_eq!(format!("{}", SearchStrategy::Recursive), "Recursive");
    }

    #[test]
    fn test_solver_display_includes_the_board() {
        let solver = Solver::<IntegerType>::with_dimension(8);
        assert_eq!(format!("{}", solver), "Solver(Board(n: 8))");
    }
}
