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

//! # Search Monitors
//!
//! Pluggable observers for the search lifecycle. The engines notify a
//! monitor after every structural change to the working placement (append,
//! row-advance repair, remove) and on every verified full solution; what the
//! monitor does with that — rendering, pacing, logging, nothing — is its own
//! business and never influences the search result.
//!
//! ## Submodules
//!
//! - `search_monitor`: Core trait (`SearchMonitor<T>`) defining the
//!   lifecycle hooks.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `no_op`: The inert default observer.
//! - `delay`: Bounded per-move animation pacing with a skip flag.
//! - `log`: Progress table on stdout.
//!
//! Monitors must return promptly and cannot abort the search; the search
//! space is finite, so no termination command exists.

pub mod composite;
pub mod delay;
pub mod log;
pub mod no_op;
pub mod search_monitor;
