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

//! # Gambit Solver
//!
//! The N-Queens search engines. Two implementations of the same
//! column-by-column backtracking algorithm — one recursive, one an explicit
//! single-loop state machine — each able to return the first solution found
//! or enumerate every solution. Both engines consult the shared safety rules
//! in `gambit_search::safety`, so they cannot drift apart behaviorally; the
//! enumeration modes provably produce the same solution set.
//!
//! - `iterative`: The non-recursive engine. Backtracking state lives
//!   entirely in the working placement: the last queen's row encodes where
//!   the search left off in the current column.
//! - `recursive`: The depth-first engine, keyed by column depth = placement
//!   length. Enumeration threads an explicit accumulator through the call
//!   tree.
//! - `solver`: The `Solver` facade tying a board to a strategy choice.

pub mod iterative;
pub mod recursive;
pub mod solver;
