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

//! # Recursive Engine
//!
//! Depth-first backtracking keyed by column depth = placement length. Each
//! frame appends a queen at the next column, explores every safe row for it
//! (recursing at each), and removes the queen before returning — sibling
//! columns always start from a clean placement. The first-only variant
//! propagates a found solution straight up the call tree; enumeration
//! threads an explicit accumulator through the recursion instead of holding
//! results in solver state.

use gambit_model::{
    board::Board,
    placement::Placement,
    solution::{Solution, SolutionSet},
};
use gambit_search::{
    monitor::search_monitor::SearchMonitor,
    num::SolverNumeric,
    result::{EnumerationOutcome, SearchOutcome},
    safety::{is_correct, is_safe, move_to_safe_spot},
    stats::SearchStatistics,
};
use std::time::Instant;

/// Finds the first solution on `board` by depth-first recursion.
///
/// Returns an exhausted outcome when no solution exists (the 2×2 and 3×3
/// boards). The zero-sized board yields the vacuous empty solution.
pub fn find_one<T, M>(board: &Board<T>, monitor: &mut M) -> SearchOutcome<T>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new();
    monitor.on_enter_search(board);

    let mut placement = Placement::with_capacity(board.size());
    let solution = search_one(board, &mut placement, monitor, &mut statistics);

    statistics.solve_duration = start_time.elapsed();
    monitor.on_exit_search();
    match solution {
        Some(solution) => SearchOutcome::solved(solution, statistics),
        None => SearchOutcome::exhausted(statistics),
    }
}

/// Enumerates every solution on `board` by depth-first recursion.
pub fn find_all<T, M>(board: &Board<T>, monitor: &mut M) -> EnumerationOutcome<T>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new();
    let mut solutions = SolutionSet::new();
    monitor.on_enter_search(board);

    let mut placement = Placement::with_capacity(board.size());
    enumerate(board, &mut placement, &mut solutions, monitor, &mut statistics);

    statistics.solve_duration = start_time.elapsed();
    monitor.on_exit_search();
    EnumerationOutcome::new(solutions, statistics)
}

/// One depth-first frame of the first-only search. On success the found
/// solution is propagated up unchanged; on failure the frame's queen has
/// been removed and the caller's placement is exactly as it was.
fn search_one<T, M>(
    board: &Board<T>,
    placement: &mut Placement<T>,
    monitor: &mut M,
    statistics: &mut SearchStatistics,
) -> Option<Solution<T>>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    let n = board.n();
    if placement.len() == board.size() {
        if is_correct(placement.queens(), n) {
            let solution = placement.to_solution();
            statistics.solutions_found += 1;
            monitor.on_solution_found(solution.queens());
            return Some(solution);
        }
        return None;
    }

    placement.push_next_column();
    statistics.placements_tried += 1;
    monitor.on_move(placement.queens());

    loop {
        let (in_bounds, safe) = match placement.split_last() {
            Some((candidate, rest)) => (candidate.row() < n, is_safe(candidate, rest, n)),
            None => (false, false),
        };
        if !in_bounds {
            break;
        }

        if safe {
            if let Some(solution) = search_one(board, placement, monitor, statistics) {
                return Some(solution);
            }
        }

        let advanced = match placement.split_last_mut() {
            Some((candidate, rest)) => move_to_safe_spot(candidate, rest, n),
            None => false,
        };
        if !advanced {
            break;
        }
        statistics.placements_tried += 1;
        monitor.on_move(placement.queens());
    }

    placement.pop();
    statistics.backtracks += 1;
    monitor.on_move(placement.queens());
    None
}

/// One depth-first frame of the enumeration. Every full correct placement
/// is committed to the accumulator as a deep copy; the frame's queen is
/// always removed before returning, whether or not anything was found
/// beneath it.
fn enumerate<T, M>(
    board: &Board<T>,
    placement: &mut Placement<T>,
    solutions: &mut SolutionSet<T>,
    monitor: &mut M,
    statistics: &mut SearchStatistics,
) where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    let n = board.n();
    if placement.len() == board.size() {
        if is_correct(placement.queens(), n) {
            let solution = placement.to_solution();
            monitor.on_solution_found(solution.queens());
            if solutions.insert(solution) {
                statistics.solutions_found += 1;
            }
        }
        return;
    }

    placement.push_next_column();
    statistics.placements_tried += 1;
    monitor.on_move(placement.queens());

    loop {
        let (in_bounds, safe) = match placement.split_last() {
            Some((candidate, rest)) => (candidate.row() < n, is_safe(candidate, rest, n)),
            None => (false, false),
        };
        if !in_bounds {
            break;
        }

        if safe {
            enumerate(board, placement, solutions, monitor, statistics);
        }

        let advanced = match placement.split_last_mut() {
            Some((candidate, rest)) => move_to_safe_spot(candidate, rest, n),
            None => false,
        };
        if !advanced {
            break;
        }
        statistics.placements_tried += 1;
        monitor.on_move(placement.queens());
    }

    placement.pop();
    statistics.backtracks += 1;
    monitor.on_move(placement.queens());
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_search::monitor::no_op::NoOperationMonitor;
    use gambit_search::safety::is_correct;

    type IntegerType = i32;

    fn no_op() -> NoOperationMonitor<IntegerType> {
        NoOperationMonitor::new()
    }

    #[test]
    fn test_find_one_on_four_finds_the_known_first_solution() {
        let board = Board::<IntegerType>::new(4);
        let outcome = find_one(&board, &mut no_op());

        let solution = outcome.solution().expect("4x4 board is solvable");
        assert_eq!(solution.rows(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_find_one_solves_the_default_board() {
        let board = Board::<IntegerType>::default();
        let outcome = find_one(&board, &mut no_op());

        let solution = outcome.solution().expect("8x8 board is solvable");
        assert_eq!(solution.len(), 8);
        assert!(is_correct(solution.queens(), board.n()));
    }

    #[test]
    fn test_find_one_is_exhausted_on_unsolvable_boards() {
        for n in [2, 3] {
            let board = Board::<IntegerType>::new(n);
            let outcome = find_one(&board, &mut no_op());
            assert!(!outcome.has_solution(), "n = {} must be unsolvable", n);
        }
    }

    #[test]
    fn test_find_one_on_trivial_boards() {
        let one = find_one(&Board::<IntegerType>::new(1), &mut no_op());
        assert_eq!(one.solution().unwrap().rows(), vec![0]);

        let zero = find_one(&Board::<IntegerType>::new(0), &mut no_op());
        assert!(zero.solution().unwrap().is_empty());
    }

    #[test]
    fn test_find_all_counts_match_the_known_sequence() {
        // Number of distinct solutions for n = 0..=6.
        let expected = [1usize, 1, 0, 0, 2, 10, 4];
        for (n, &count) in expected.iter().enumerate() {
            let board = Board::<IntegerType>::new(n as IntegerType);
            let outcome = find_all(&board, &mut no_op());
            assert_eq!(outcome.num_solutions(), count, "wrong count for n = {}", n);
        }
    }

    #[test]
    fn test_find_all_on_the_default_board_finds_ninety_two() {
        let board = Board::<IntegerType>::default();
        let outcome = find_all(&board, &mut no_op());
        assert_eq!(outcome.num_solutions(), 92);
    }

    #[test]
    fn test_find_all_solutions_are_all_correct() {
        let board = Board::<IntegerType>::new(6);
        let outcome = find_all(&board, &mut no_op());
        for solution in outcome.solutions().iter() {
            assert!(is_correct(solution.queens(), board.n()));
        }
    }

    #[test]
    fn test_find_all_discovery_order_on_four() {
        let board = Board::<IntegerType>::new(4);
        let outcome = find_all(&board, &mut no_op());
        let rows: Vec<Vec<IntegerType>> =
            outcome.solutions().iter().map(|s| s.rows()).collect();
        assert_eq!(rows, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_enumeration_restores_the_placement() {
        // The top-level frame must leave the caller's placement exactly as
        // it received it.
        let board = Board::<IntegerType>::new(5);
        let mut placement = Placement::with_capacity(board.size());
        let mut solutions = SolutionSet::new();
        let mut statistics = SearchStatistics::new();

        enumerate(
            &board,
            &mut placement,
            &mut solutions,
            &mut no_op(),
            &mut statistics,
        );

        assert!(placement.is_empty());
        assert_eq!(solutions.len(), 10);
    }
}
