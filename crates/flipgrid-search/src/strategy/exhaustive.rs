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

//! # Exhaustive Sequential Strategy
//!
//! A single-threaded scan over the full candidate range, folding with the
//! shared comparison rule. Fully deterministic, which makes it the parity
//! oracle the parallel strategies are tested against, and a useful
//! baseline when benchmarking what the parallelism actually buys.

use crate::score::uniform_rows;
use crate::strategy::{SearchStrategy, Setup, prepare};
use flipgrid_model::{
    grid::{Grid, GridError},
    solution::{FlipMask, Solution},
};

/// The sequential reference strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveScan;

impl SearchStrategy for ExhaustiveScan {
    fn solve(&self, grid: &Grid) -> Result<Solution, GridError> {
        solve_exhaustive(grid)
    }

    fn name(&self) -> &str {
        "exhaustive"
    }
}

/// Solves the grid by a deterministic sequential scan over all candidate
/// masks.
///
/// Fails with [`GridError::InvalidShape`] on non-rectangular input and
/// [`GridError::TooManyColumns`] past the supported mask width.
pub fn solve_exhaustive(grid: &Grid) -> Result<Solution, GridError> {
    let (limit, baseline) = match prepare(grid)? {
        Setup::Solved(solution) => return Ok(solution),
        Setup::Search { limit, baseline } => (limit, baseline),
    };

    let mut best = baseline;
    for bits in 0..limit {
        let flips = FlipMask::new(bits as u32);
        let score = uniform_rows(grid, flips);
        if score > baseline.score() {
            best = Solution::better(best, Solution::new(score, flips));
        }
    }

    Ok(best)
}
