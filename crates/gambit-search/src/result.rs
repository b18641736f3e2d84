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

use crate::stats::SearchStatistics;
use gambit_model::solution::{Solution, SolutionSet};
use num_traits::{PrimInt, Signed};

/// Result of a single-solution search.
///
/// Exhaustion is a domain-expected outcome, not an error: the 2×2 and 3×3
/// boards have no solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<T> {
    /// A full non-attacking placement was found.
    Solved(Solution<T>),
    /// The search space was exhausted without finding a solution.
    Exhausted,
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Solved(solution) => {
                write!(f, "Solved(queens={})", solution.len())
            }
            SearchResult::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Outcome of a single-solution search: the result plus the statistics
/// collected while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T> {
    /// Constructs a solved outcome.
    #[inline]
    pub fn solved(solution: Solution<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Solved(solution),
            statistics,
        }
    }

    /// Constructs an exhausted outcome.
    #[inline]
    pub fn exhausted(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Exhausted,
            statistics,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Returns the collected statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `true` if a solution was found.
    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(self.result, SearchResult::Solved(_))
    }

    /// Returns the solution, if one was found.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        match &self.result {
            SearchResult::Solved(solution) => Some(solution),
            SearchResult::Exhausted => None,
        }
    }

    /// Consumes the outcome, returning the solution if one was found.
    #[inline]
    pub fn into_solution(self) -> Option<Solution<T>> {
        match self.result {
            SearchResult::Solved(solution) => Some(solution),
            SearchResult::Exhausted => None,
        }
    }
}

/// Outcome of a full enumeration: every distinct solution in discovery
/// order, plus the statistics collected along the way.
#[derive(Debug, Clone)]
pub struct EnumerationOutcome<T> {
    solutions: SolutionSet<T>,
    statistics: SearchStatistics,
}

impl<T> EnumerationOutcome<T> {
    /// Constructs an enumeration outcome.
    #[inline]
    pub fn new(solutions: SolutionSet<T>, statistics: SearchStatistics) -> Self {
        Self {
            solutions,
            statistics,
        }
    }

    /// Returns the solutions found.
    #[inline]
    pub fn solutions(&self) -> &SolutionSet<T> {
        &self.solutions
    }

    /// Returns the number of distinct solutions found.
    #[inline]
    pub fn num_solutions(&self) -> usize
    where
        T: PrimInt + Signed + std::hash::Hash,
    {
        self.solutions.len()
    }

    /// Returns the collected statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Consumes the outcome, returning the solution set.
    #[inline]
    pub fn into_solutions(self) -> SolutionSet<T> {
        self.solutions
    }
}
