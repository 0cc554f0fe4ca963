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

//! # Search Strategies
//!
//! One module per strategy, all sharing the [`prepare`] step: validate
//! the grid, score the unflipped baseline, and either short-circuit a
//! grid that is already fully uniform or hand the strategy its
//! enumeration limit and pruning threshold.
//!
//! The short-circuit and the baseline are computed identically
//! everywhere, which is what makes the strategies' results comparable:
//! each one searches the same half-open candidate range `[0, limit)`
//! against the same threshold.

pub mod atomic;
pub mod exhaustive;
pub mod forkjoin;
pub mod immutable;

use crate::score::uniform_rows;
use flipgrid_model::{
    grid::{Grid, GridError},
    solution::{FlipMask, Solution},
};

/// A search strategy over candidate flip masks.
///
/// Implementations must return solutions of equal score for the same
/// grid; the winning mask may differ only where candidates tie exactly on
/// score and flip count.
pub trait SearchStrategy: Send + Sync {
    /// Solves the grid, failing only on validation.
    fn solve(&self, grid: &Grid) -> Result<Solution, GridError>;

    /// A short human-readable name for reports.
    fn name(&self) -> &str;
}

/// The outcome of the shared validation and zero-flip check.
pub(crate) enum Setup {
    /// The unflipped grid already scores every row; no enumeration runs.
    Solved(Solution),
    /// The search parameters for a grid that needs enumeration.
    Search {
        /// Half-open upper bound of the candidate range, `2^columns - 1`.
        limit: u64,
        /// The zero-flip solution; its score is the pruning threshold.
        baseline: Solution,
    },
}

/// Validates the grid and performs the zero-flip short-circuit common to
/// every strategy.
pub(crate) fn prepare(grid: &Grid) -> Result<Setup, GridError> {
    grid.validate()?;

    let baseline = Solution::new(uniform_rows(grid, FlipMask::EMPTY), FlipMask::EMPTY);
    if baseline.score() as usize == grid.num_rows() {
        return Ok(Setup::Solved(baseline));
    }

    Ok(Setup::Search {
        limit: grid.candidate_limit(),
        baseline,
    })
}
