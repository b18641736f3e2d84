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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the search and solver components.
//! `SolverNumeric` collects the integer capabilities the engines require
//! into a single alias, simplifying generic signatures.
//!
//! Board coordinates must be signed: the diagonal checks compare
//! `col - row` differences, which go negative on the upper-left half of the
//! board. These are usually the signed integer types `i8`, `i16`, `i32`,
//! `i64` and `isize`. Note that `i8` caps the board dimension at 127, which
//! is far beyond anything a straightforward backtracking enumeration can
//! finish anyway.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types usable as board coordinates.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::SolverNumeric;

    fn assert_solver_numeric<T: SolverNumeric>() {}

    #[test]
    fn test_signed_primitives_satisfy_the_alias() {
        assert_solver_numeric::<i8>();
        assert_solver_numeric::<i16>();
        assert_solver_numeric::<i32>();
        assert_solver_numeric::<i64>();
        assert_solver_numeric::<isize>();
    }
}
