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

/// Statistics collected during a search.
///
/// The engines increment the counters directly while running and stamp the
/// duration on exit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Number of placement attempts (queens appended or row-advanced).
    pub placements_tried: u64,
    /// Number of columns removed after exhausting their rows.
    pub backtracks: u64,
    /// Number of full solutions encountered.
    pub solutions_found: u64,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Placements Tried: {}", self.placements_tried)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    placements_tried: u64,
    backtracks: u64,
    solutions_found: u64,
    solve_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            placements_tried: 0,
            backtracks: 0,
            solutions_found: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of placement attempts.
    #[inline]
    pub fn placements_tried(mut self, placements_tried: u64) -> Self {
        self.placements_tried = placements_tried;
        self
    }

    /// Sets the number of backtracks.
    #[inline]
    pub fn backtracks(mut self, backtracks: u64) -> Self {
        self.backtracks = backtracks;
        self
    }

    /// Sets the number of solutions found.
    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.solutions_found = solutions_found;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            placements_tried: self.placements_tried,
            backtracks: self.backtracks,
            solutions_found: self.solutions_found,
            solve_duration: self.solve_duration,
        }
    }
}
