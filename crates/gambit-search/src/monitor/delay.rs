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

//! # Delay Monitor
//!
//! Paces a search for human-observable animation: a short pause after each
//! move and a longer hold on each full solution, so an attached renderer has
//! time to show the board. The pauses are a pure presentation concern — they
//! slow the search down but cannot change what it finds.
//!
//! A shared `AtomicBool` skip flag turns the pacing off; setting it is how
//! an interruption is expressed, and it means "proceed immediately", never
//! "stop searching".

use crate::monitor::search_monitor::SearchMonitor;
use gambit_model::{board::Board, queen::Queen};
use num_traits::{PrimInt, Signed};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How much longer a full solution is held on screen than an ordinary move.
const SOLUTION_HOLD_FACTOR: u32 = 10;

/// A monitor that sleeps after each event to pace an attached renderer.
#[derive(Debug)]
pub struct DelayMonitor<'a, T> {
    move_delay: Duration,
    solution_delay: Duration,
    skip_flag: Option<&'a AtomicBool>,
    _phantom: std::marker::PhantomData<T>,
}

impl<'a, T> DelayMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// The reference pacing: 10 ms per move, 100 ms per solution.
    pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(10);

    /// Creates a monitor with the given per-move delay; solutions are held
    /// `SOLUTION_HOLD_FACTOR` times longer.
    #[inline]
    pub fn new(move_delay: Duration) -> Self {
        Self {
            move_delay,
            solution_delay: move_delay * SOLUTION_HOLD_FACTOR,
            skip_flag: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a monitor with explicit move and solution delays.
    #[inline]
    pub fn with_delays(move_delay: Duration, solution_delay: Duration) -> Self {
        Self {
            move_delay,
            solution_delay,
            skip_flag: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Attaches a skip flag. While the flag is `true`, all pacing is
    /// skipped and the search proceeds at full speed.
    #[inline]
    pub fn with_skip_flag(mut self, skip_flag: &'a AtomicBool) -> Self {
        self.skip_flag = Some(skip_flag);
        self
    }

    /// Returns the per-move delay.
    #[inline]
    pub fn move_delay(&self) -> Duration {
        self.move_delay
    }

    /// Returns the per-solution delay.
    #[inline]
    pub fn solution_delay(&self) -> Duration {
        self.solution_delay
    }

    #[inline]
    fn skipped(&self) -> bool {
        self.skip_flag
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    #[inline]
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() && !self.skipped() {
            std::thread::sleep(delay);
        }
    }
}

impl<T> Default for DelayMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Self::DEFAULT_MOVE_DELAY)
    }
}

impl<T> std::fmt::Display for DelayMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DelayMonitor(move: {}ms, solution: {}ms)",
            self.move_delay.as_millis(),
            self.solution_delay.as_millis()
        )
    }
}

impl<T> SearchMonitor<T> for DelayMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "DelayMonitor"
    }

    fn on_enter_search(&mut self, _board: &Board<T>) {}

    fn on_exit_search(&mut self) {}

    fn on_move(&mut self, _queens: &[Queen<T>]) {
        self.pause(self.move_delay);
    }

    fn on_solution_found(&mut self, _queens: &[Queen<T>]) {
        self.pause(self.solution_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    type IntegerType = i32;

    #[test]
    fn test_default_delays() {
        let monitor = DelayMonitor::<IntegerType>::default();
        assert_eq!(monitor.move_delay(), Duration::from_millis(10));
        assert_eq!(monitor.solution_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_delay_does_not_sleep() {
        let mut monitor = DelayMonitor::<IntegerType>::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..1000 {
            monitor.on_move(&[]);
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_set_skip_flag_proceeds_immediately() {
        let skip = AtomicBool::new(true);
        let mut monitor =
            DelayMonitor::<IntegerType>::new(Duration::from_secs(5)).with_skip_flag(&skip);

        let start = Instant::now();
        monitor.on_move(&[]);
        monitor.on_solution_found(&[]);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_move_delay_paces_the_stream() {
        let mut monitor = DelayMonitor::<IntegerType>::new(Duration::from_millis(5));
        let start = Instant::now();
        monitor.on_move(&[]);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_display_includes_delays() {
        let monitor = DelayMonitor::<IntegerType>::with_delays(
            Duration::from_millis(2),
            Duration::from_millis(30),
        );
        assert_eq!(format!("{}", monitor), "DelayMonitor(move: 2ms, solution: 30ms)");
    }
}
