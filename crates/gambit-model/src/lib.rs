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

//! # Gambit Model
//!
//! **The Core Domain Model for the Gambit N-Queens Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **N-Queens placement puzzle**. It serves as the data interchange layer
//! between problem configuration (board size) and the solving engines
//! (`gambit-solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between the **mutable
//! working state** of a search and its **immutable results**:
//!
//! * **`queen`**: The `Queen` value type, a `(col, row)` pair whose row
//!   advances during search while its column stays fixed.
//! * **`board`**: The `Board` configuration (dimension `n`, default 8) and
//!   an ASCII rendering of arbitrary queen sets for demonstration purposes.
//! * **`placement`**: The `Placement` working stack — the explicit,
//!   exclusively-owned sequence of queens a search mutates in place.
//! * **`solution`**: The `Solution` (a committed, deep-copied full placement)
//!   and the `SolutionSet` (insertion-ordered, duplicate-free enumeration
//!   results).
//!
//! ## Design Philosophy
//!
//! 1.  **Value Semantics**: Queens are `Copy`; committing a placement to a
//!     solution is an explicit deep copy, so later mutation of the working
//!     stack can never corrupt a returned result.
//! 2.  **Column Order**: A placement's queen at position `i` always occupies
//!     column `i`. Constructors and push operations uphold this invariant so
//!     the engines never have to re-derive it.
//! 3.  **Fail-Fast**: Constructors validate eagerly; the engines never see an
//!     inconsistent board or solution.

pub mod board;
pub mod placement;
pub mod queen;
pub mod solution;
