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

use crate::monitor::search_monitor::SearchMonitor;
use gambit_model::{board::Board, queen::Queen};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};

/// A monitor that prints a progress table to stdout while a search runs.
///
/// Move events are throttled: the clock is only consulted every
/// `clock_check_mask + 1` moves, and a line is printed at most once per
/// `log_interval`. Solutions always print.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    moves: u64,
    solutions: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `LogMonitor` with the given line interval and clock
    /// check mask.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            moves: 0,
            solutions: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<7} | {:<10}",
            "Elapsed", "Moves", "Depth", "Solutions"
        );
        println!("{}", "-".repeat(49));
    }

    #[inline(always)]
    fn log_line(&mut self, depth: usize) {
        let now = Instant::now();
        let elapsed_field = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());

        println!(
            "{:<9} | {:<14} | {:<7} | {:<10}",
            elapsed_field, self.moves, depth, self.solutions
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _board: &Board<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.moves = 0;
        self.solutions = 0;
        self.print_header();
    }

    fn on_move(&mut self, queens: &[Queen<T>]) {
        self.moves = self.moves.wrapping_add(1);
        if (self.moves & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(queens.len());
        }
    }

    fn on_solution_found(&mut self, queens: &[Queen<T>]) {
        self.solutions += 1;
        self.log_line(queens.len());
    }

    fn on_exit_search(&mut self) {
        println!("{}", "-".repeat(49));
        println!(
            "Search finished: {} moves, {} solutions.",
            self.moves, self.solutions
        );
    }
}
