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

//! # Flipgrid Search
//!
//! The combinatorial search over candidate flip masks, implemented three
//! ways over one shared scorer and one shared comparison rule, plus a
//! sequential exhaustive reference:
//!
//! - [`solve_immutable`]: parallel map/filter/reduce with no shared
//!   mutable state and a scheduling-independent result.
//! - [`solve_atomic`]: parallel enumeration racing to improve one
//!   lock-free shared best-solution register.
//! - [`solve_forkjoin`]: recursive divide-and-conquer over the candidate
//!   range, bottoming out into the atomic-update protocol on a private
//!   register below a sequential threshold.
//! - [`solve_exhaustive`]: a deterministic sequential scan, the parity
//!   oracle for the parallel strategies.
//!
//! All four validate the grid first, short-circuit when the unflipped
//! grid already scores every row, and agree on the winning score for
//! every valid grid. Winning masks may differ only where two candidates
//! tie exactly on score and flip count.

pub mod incumbent;
pub mod score;
pub mod strategy;

pub use strategy::{
    SearchStrategy, atomic::solve_atomic, exhaustive::solve_exhaustive, forkjoin::solve_forkjoin,
    immutable::solve_immutable,
};
