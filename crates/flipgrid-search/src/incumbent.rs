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

//! # Shared Best-Solution Register
//!
//! A concurrent cell holding the best `Solution` proposed so far. Many
//! workers offer improvements; exactly one final value survives.
//!
//! ## Motivation
//!
//! The atomic-update and fork-join strategies need a best-so-far that
//! every worker can read cheaply and improve without blocking. A mutex
//! would serialize exactly the moments when many workers find candidates
//! at once; instead the whole `(score, mask)` pair is packed into a
//! single `AtomicU64` word and updated with an optimistic
//! compare-and-update loop.
//!
//! ## Protocol
//!
//! `offer` reads the current word, applies the pure comparison rule from
//! [`Solution::improves_on`], and commits with compare-and-swap only if
//! the candidate still improves on what it just read. A lost race retries
//! against the fresh value and gives up as soon as the current best no
//! longer needs replacing. A failed commit always means another writer
//! committed, so the register is lock-free: some worker makes progress no
//! matter how the threads are scheduled.
//!
//! Exact `(score, flip-count)` ties are rejected, so under a tie the
//! first committed write wins and which writer that is depends on
//! scheduling. Callers must not expect "first found" order from parallel
//! enumeration.
//!
//! The 32-bit mask is what makes this packing possible: score in the high
//! word, mask in the low word, compared and swapped as one unit.

use flipgrid_model::solution::{FlipMask, Solution};
use std::sync::atomic::{AtomicU64, Ordering};

#[inline(always)]
fn pack(solution: Solution) -> u64 {
    (u64::from(solution.score()) << 32) | u64::from(solution.flips().bits())
}

#[inline(always)]
fn unpack(word: u64) -> Solution {
    Solution::new((word >> 32) as u32, FlipMask::new(word as u32))
}

/// A lock-free register holding the best solution offered so far.
///
/// Seeded with a concrete baseline at construction, so readers never
/// observe an absent value.
#[derive(Debug)]
pub struct SharedBest {
    cell: AtomicU64,
}

impl SharedBest {
    /// Creates a register seeded with `baseline`.
    #[inline]
    pub fn new(baseline: Solution) -> Self {
        Self {
            cell: AtomicU64::new(pack(baseline)),
        }
    }

    /// Returns the current best solution.
    #[inline]
    pub fn best(&self) -> Solution {
        unpack(self.cell.load(Ordering::Acquire))
    }

    /// Offers a candidate, committing it only while it strictly improves
    /// on the current best. Returns `true` if the candidate was
    /// installed.
    #[inline]
    pub fn offer(&self, candidate: Solution) -> bool {
        self.cell
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if candidate.improves_on(&unpack(current)) {
                    Some(pack(candidate))
                } else {
                    None
                }
            })
            .is_ok()
    }
}

impl std::fmt::Display for SharedBest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedBest({})", self.best())
    }
}
