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

//! # Iterative Engine
//!
//! The non-recursive backtracking search. A single loop drives one working
//! placement: while columns remain, append a queen at the next column's top
//! row; once the board is full, advance the last queen instead — its current
//! row encodes where the search left off in that column, which is how the
//! engine revisits alternatives without a call stack. An unsafe queen is
//! repaired by advancing it to the next safe row, popping a column per
//! failure; an empty stack means the search space is exhausted.
//!
//! After recording a full solution, enumeration simply continues: the next
//! iteration hits the board-is-full branch and advances the last queen,
//! which is the implicit pop-and-retry.

use gambit_model::{board::Board, placement::Placement, solution::SolutionSet};
use gambit_search::{
    monitor::search_monitor::SearchMonitor,
    num::SolverNumeric,
    result::{EnumerationOutcome, SearchOutcome},
    safety::{is_correct, is_safe, move_to_safe_spot},
    stats::SearchStatistics,
};
use std::time::Instant;

/// What the repair loop did to an unsafe placement.
enum Repair {
    /// The last queen now sits on a safe row.
    Advanced,
    /// Every column was exhausted; the placement is empty.
    Exhausted,
}

#[inline]
fn last_is_safe<T>(placement: &Placement<T>, n: T) -> bool
where
    T: SolverNumeric,
{
    match placement.split_last() {
        Some((candidate, rest)) => is_safe(candidate, rest, n),
        None => false,
    }
}

/// Advances the last queen to a safe row, backtracking as many columns as it
/// takes. On `Exhausted` the placement has been emptied: no further
/// alternative exists anywhere in the search space.
fn repair<T, M>(
    placement: &mut Placement<T>,
    n: T,
    monitor: &mut M,
    statistics: &mut SearchStatistics,
) -> Repair
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    loop {
        let advanced = match placement.split_last_mut() {
            Some((candidate, rest)) => move_to_safe_spot(candidate, rest, n),
            None => return Repair::Exhausted,
        };

        if advanced {
            statistics.placements_tried += 1;
            monitor.on_move(placement.queens());
            return Repair::Advanced;
        }

        placement.pop();
        statistics.backtracks += 1;
        monitor.on_move(placement.queens());
        if placement.is_empty() {
            return Repair::Exhausted;
        }
    }
}

/// Finds the first solution on `board` without recursion.
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

    let n = board.n();
    let size = board.size();

    if size == 0 {
        let solution = Placement::<T>::new().to_solution();
        statistics.solutions_found = 1;
        statistics.solve_duration = start_time.elapsed();
        monitor.on_solution_found(solution.queens());
        monitor.on_exit_search();
        return SearchOutcome::solved(solution, statistics);
    }

    let mut placement = Placement::with_capacity(size);
    loop {
        if placement.len() < size {
            placement.push_next_column();
        } else {
            placement.advance_last();
        }
        statistics.placements_tried += 1;
        monitor.on_move(placement.queens());

        if !last_is_safe(&placement, n) {
            if let Repair::Exhausted = repair(&mut placement, n, monitor, &mut statistics) {
                statistics.solve_duration = start_time.elapsed();
                monitor.on_exit_search();
                return SearchOutcome::exhausted(statistics);
            }
        }

        if is_correct(placement.queens(), n) {
            let solution = placement.to_solution();
            statistics.solutions_found += 1;
            statistics.solve_duration = start_time.elapsed();
            monitor.on_solution_found(solution.queens());
            monitor.on_exit_search();
            return SearchOutcome::solved(solution, statistics);
        }
    }
}

/// Enumerates every solution on `board` without recursion.
pub fn find_all<T, M>(board: &Board<T>, monitor: &mut M) -> EnumerationOutcome<T>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new();
    let mut solutions = SolutionSet::new();
    monitor.on_enter_search(board);

    let n = board.n();
    let size = board.size();

    if size == 0 {
        let solution = Placement::<T>::new().to_solution();
        monitor.on_solution_found(solution.queens());
        solutions.insert(solution);
        statistics.solutions_found = 1;
        statistics.solve_duration = start_time.elapsed();
        monitor.on_exit_search();
        return EnumerationOutcome::new(solutions, statistics);
    }

    let mut placement = Placement::with_capacity(size);
    loop {
        if placement.len() < size {
            placement.push_next_column();
        } else {
            placement.advance_last();
        }
        statistics.placements_tried += 1;
        monitor.on_move(placement.queens());

        if !last_is_safe(&placement, n) {
            if let Repair::Exhausted = repair(&mut placement, n, monitor, &mut statistics) {
                break;
            }
        }

        if is_correct(placement.queens(), n) {
            let solution = placement.to_solution();
            monitor.on_solution_found(solution.queens());
            if solutions.insert(solution) {
                statistics.solutions_found += 1;
            }
        }
    }

    statistics.solve_duration = start_time.elapsed();
    monitor.on_exit_search();
    EnumerationOutcome::new(solutions, statistics)
}
