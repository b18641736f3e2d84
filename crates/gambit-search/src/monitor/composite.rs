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

/// A composite monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<T> std::fmt::Debug for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<T> std::fmt::Display for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<T> Default for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline]
    pub fn from_vec(monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>) -> CompositeMonitor<'a, T> {
        CompositeMonitor { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        let monitors: Vec<Box<dyn SearchMonitor<T> + 'a>> = iter.into_iter().collect();
        CompositeMonitor { monitors }
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, board: &Board<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(board);
        }
    }

    fn on_exit_search(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search();
        }
    }

    fn on_move(&mut self, queens: &[Queen<T>]) {
        for monitor in &mut self.monitors {
            monitor.on_move(queens);
        }
    }

    fn on_solution_found(&mut self, queens: &[Queen<T>]) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(queens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i32;

    /// Counts the events it receives.
    #[derive(Default)]
    struct CountingMonitor {
        enters: u32,
        exits: u32,
        moves: u32,
        solutions: u32,
    }

    impl SearchMonitor<IntegerType> for &mut CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
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

        fn on_solution_found(&mut self, _queens: &[Queen<IntegerType>]) {
            self.solutions += 1;
        }
    }

    #[test]
    fn test_empty_composite_accepts_events() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);

        composite.on_enter_search(&Board::new(4));
        composite.on_move(&[]);
        composite.on_solution_found(&[]);
        composite.on_exit_search();
    }

    #[test]
    fn test_events_are_forwarded_to_all_monitors() {
        let mut a = CountingMonitor::default();
        let mut b = CountingMonitor::default();

        {
            let mut composite = CompositeMonitor::<IntegerType>::new();
            composite.add_monitor(&mut a);
            composite.add_monitor(&mut b);
            assert_eq!(composite.len(), 2);

            let board = Board::new(4);
            composite.on_enter_search(&board);
            composite.on_move(&[Queen::new(0, 0)]);
            composite.on_move(&[Queen::new(0, 1)]);
            composite.on_solution_found(&[Queen::new(0, 1)]);
            composite.on_exit_search();
        }

        for counts in [&a, &b] {
            assert_eq!(counts.enters, 1);
            assert_eq!(counts.moves, 2);
            assert_eq!(counts.solutions, 1);
            assert_eq!(counts.exits, 1);
        }
    }

    #[test]
    fn test_debug_and_display_list_monitor_names() {
        let mut a = CountingMonitor::default();
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(&mut a);

        assert!(format!("{:?}", composite).contains("CountingMonitor"));
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([CountingMonitor])"
        );
    }
}
