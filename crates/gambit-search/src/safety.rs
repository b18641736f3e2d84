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

//! # Safety Rules
//!
//! The single source of truth for queen conflicts. All four search variants
//! (recursive and iterative, first-only and enumerate-all) consult these
//! three free functions; none of them re-derives the rules, so the engines
//! cannot drift apart behaviorally.
//!
//! Two queens attack each other when they share a row, a column, or a
//! diagonal. Column conflicts never arise in practice (the engines place one
//! queen per column), and a candidate is therefore compared only against
//! queens in *other* columns — which also makes the predicate safe to apply
//! to a slice that still contains the candidate itself.

use gambit_model::queen::Queen;
use num_traits::{PrimInt, Signed};

/// Returns `true` if `candidate` is within the `n × n` board and no queen in
/// `others` occupying a different column shares its row or either diagonal.
///
/// Queens in the candidate's own column are ignored, so `others` may be the
/// full placement including the candidate itself. Out-of-bounds candidates
/// are simply unsafe, never an error — this is how a column's exploration
/// naturally ends.
#[inline]
pub fn is_safe<T>(candidate: &Queen<T>, others: &[Queen<T>], n: T) -> bool
where
    T: PrimInt + Signed,
{
    if candidate.col() < T::zero()
        || candidate.row() < T::zero()
        || candidate.col() >= n
        || candidate.row() >= n
    {
        return false;
    }

    for other in others {
        if other.col() == candidate.col() {
            continue;
        }
        if other.row() == candidate.row() {
            return false;
        }
        if other.col() - other.row() == candidate.col() - candidate.row() {
            return false;
        }
        if other.col() + other.row() == candidate.col() + candidate.row() {
            return false;
        }
    }
    true
}

/// Returns `true` if `queens` is a full solution on an `n × n` board:
/// exactly `n` queens, each safe with respect to the whole slice.
///
/// The zero-sized board has exactly one correct placement, the empty one.
pub fn is_correct<T>(queens: &[Queen<T>], n: T) -> bool
where
    T: PrimInt + Signed,
{
    if n.to_usize() != Some(queens.len()) {
        return false;
    }
    queens.iter().all(|q| is_safe(q, queens, n))
}

/// Advances `candidate` to the next safe row in its column, or exhausts it.
///
/// The row is advanced at least once (the caller is asking for the *next*
/// alternative, whether or not the current row is safe) and then kept
/// advancing while unsafe, stopping at the last row `n - 1`. Returns `true`
/// if the final row is safe. On `false` the candidate sits on the last row
/// and the column is exhausted; the caller backtracks by removing it and
/// retrying the previous column.
///
/// The row never decreases, never passes `n - 1`, and at most `n - 1`
/// increments occur. A candidate already on (or beyond) the last row is
/// reported exhausted without moving.
pub fn move_to_safe_spot<T>(candidate: &mut Queen<T>, others: &[Queen<T>], n: T) -> bool
where
    T: PrimInt + Signed,
{
    let last_row = n - T::one();
    if candidate.row() >= last_row {
        return false;
    }

    candidate.advance_row();
    while !is_safe(candidate, others, n) && candidate.row() < last_row {
        candidate.advance_row();
    }
    is_safe(candidate, others, n)
}
