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

//! # Gambit Search
//!
//! Shared infrastructure for the N-Queens search engines: the safety rules
//! every engine variant consults, the monitor (observer) subsystem, and the
//! statistics and outcome types the engines report through.
//!
//! ## Submodules
//!
//! - `num`: The `SolverNumeric` trait alias bundling the integer bounds the
//!   engines require.
//! - `safety`: The single safety predicate (`is_safe`, `is_correct`) and the
//!   advance-or-exhaust primitive (`move_to_safe_spot`) shared by all four
//!   search variants. Factored as free functions so the recursive and
//!   iterative engines cannot drift apart behaviorally.
//! - `monitor`: Pluggable observers notified after every structural change
//!   to the working placement. Rendering, animation delays, and progress
//!   logging all live here, outside the search logic.
//! - `stats`: Counters collected during a solve.
//! - `result`: Outcome types for single-solution and enumeration searches.

pub mod monitor;
pub mod num;
pub mod result;
pub mod safety;
pub mod stats;
