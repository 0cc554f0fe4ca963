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

//! # Strategy Orchestrator
//!
//! Runs a configured set of search strategies over one grid, one after
//! another, timing each run. Strategies are independent searches over the
//! same immutable grid; the orchestrator's job is comparison, not
//! coordination, so there is no shared state between them.
//!
//! ## Parity enforcement
//!
//! Every strategy must return the same winning score for the same grid.
//! The orchestrator checks this after running and reports a
//! `ScoreDisagreement` error naming the dissenting strategy if the
//! contract is broken — a strategy bug, never an input property. Winning
//! masks are allowed to differ, since exact score/flip-count ties resolve
//! nondeterministically under parallel execution.
//!
//! ## Usage
//!
//! ```rust
//! use flipgrid_model::grid::Grid;
//! use flipgrid_solver::SolverBuilder;
//!
//! let grid = Grid::from_rows(vec![vec![0u8, 0, 1], vec![0, 1, 1]]);
//!
//! // No strategies added: the builder defaults to all four.
//! let solver = SolverBuilder::new().build();
//! let outcome = solver.solve(&grid).unwrap();
//! println!("{}", outcome);
//! ```

use crate::result::{SolveError, SolveOutcome, StrategyReport};
use crate::stats::SolverStatisticsBuilder;
use flipgrid_model::grid::Grid;
use flipgrid_search::SearchStrategy;
use flipgrid_search::strategy::{
    atomic::AtomicUpdate, exhaustive::ExhaustiveScan, forkjoin::ForkJoinSearch,
    immutable::ImmutableReduction,
};

/// Orchestrates a set of search strategies over one grid.
pub struct Solver {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl Solver {
    /// Returns the number of configured strategies.
    #[inline]
    pub fn num_strategies(&self) -> usize {
        self.strategies.len()
    }

    /// Runs every configured strategy over `grid` and returns the best
    /// solution with per-strategy reports and statistics.
    ///
    /// Fails with [`SolveError::Grid`] when the grid is invalid and with
    /// [`SolveError::ScoreDisagreement`] when the strategies break the
    /// score-parity contract.
    pub fn solve(&self, grid: &Grid) -> Result<SolveOutcome, SolveError> {
        assert!(
            !self.strategies.is_empty(),
            "called `Solver::solve` with no strategies configured"
        );

        let start = std::time::Instant::now();

        // Validate once up front so a bad grid reports the grid error
        // rather than a per-strategy failure mid-run.
        grid.validate()?;

        let mut reports = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            let run_start = std::time::Instant::now();
            let solution = strategy.solve(grid)?;
            reports.push(StrategyReport::new(
                strategy.name().to_string(),
                solution,
                run_start.elapsed(),
            ));
        }

        let first = &reports[0];
        for report in &reports[1..] {
            if report.solution().score() != first.solution().score() {
                return Err(SolveError::ScoreDisagreement {
                    expected: first.solution().score(),
                    strategy: report.name().to_string(),
                    actual: report.solution().score(),
                });
            }
        }

        // All scores agree; the best is whichever run used fewer flips.
        let best = reports
            .iter()
            .map(StrategyReport::solution)
            .reduce(flipgrid_model::solution::Solution::better)
            .expect("at least one strategy ran");

        // A fully uniform grid short-circuits before enumerating.
        let candidates = if best.score() as usize == grid.num_rows() && best.flips().is_empty() {
            0
        } else {
            grid.candidate_limit()
        };

        let statistics = SolverStatisticsBuilder::new()
            .strategies_run(reports.len())
            .candidates_enumerated(candidates)
            .solve_duration(start.elapsed())
            .build();

        Ok(SolveOutcome::new(best, reports, statistics))
    }
}

/// Builder for [`Solver`].
///
/// Strategies run in insertion order. Building without adding any
/// configures all four: exhaustive, immutable reduction, atomic update,
/// and fork-join.
pub struct SolverBuilder {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    /// Creates a new builder with no strategies configured.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Adds a strategy to the run set.
    #[inline]
    pub fn add_strategy<S>(mut self, strategy: S) -> Self
    where
        S: SearchStrategy + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Builds the solver, defaulting to all four strategies when none
    /// were added.
    #[inline]
    pub fn build(self) -> Solver {
        let strategies = if self.strategies.is_empty() {
            vec![
                Box::new(ExhaustiveScan) as Box<dyn SearchStrategy>,
                Box::new(ImmutableReduction),
                Box::new(AtomicUpdate),
                Box::new(ForkJoinSearch),
            ]
        } else {
            self.strategies
        };

        Solver { strategies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipgrid_model::grid::GridError;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn documentation_grid() -> Grid {
        Grid::from_rows(vec![
            vec![0u8, 0, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 1, 1, 1],
            vec![0, 1, 1, 1, 0],
        ])
    }

    fn random_grid(rows: usize, columns: usize, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        Grid::from_rows(
            (0..rows)
                .map(|_| (0..columns).map(|_| rng.gen_range(0..=1u8)).collect())
                .collect::<Vec<Vec<u8>>>(),
        )
    }

    #[test]
    fn test_default_solver_runs_all_four_strategies() {
        let solver = SolverBuilder::new().build();
        assert_eq!(solver.num_strategies(), 4);

        let outcome = solver.solve(&documentation_grid()).unwrap();
        assert_eq!(outcome.reports().len(), 4);
        assert_eq!(outcome.best().score(), 2);
        assert!(outcome.best().flips().is_empty());
        assert_eq!(outcome.statistics().strategies_run, 4);
        assert_eq!(outcome.statistics().candidates_enumerated, 31);
    }

    #[test]
    fn test_explicit_strategy_selection() {
        let solver = SolverBuilder::new()
            .add_strategy(ExhaustiveScan)
            .add_strategy(ForkJoinSearch)
            .build();
        assert_eq!(solver.num_strategies(), 2);

        let outcome = solver.solve(&documentation_grid()).unwrap();
        assert_eq!(outcome.reports().len(), 2);
        assert_eq!(outcome.reports()[0].name(), "exhaustive");
        assert_eq!(outcome.reports()[1].name(), "fork-join");
    }

    #[test]
    fn test_uniform_grid_reports_no_enumeration() {
        let grid = Grid::from_rows(vec![vec![1u8; 5]; 4]);
        let outcome = SolverBuilder::new().build().solve(&grid).unwrap();
        assert_eq!(outcome.best().score(), 4);
        assert!(outcome.best().flips().is_empty());
        assert_eq!(outcome.statistics().candidates_enumerated, 0);
    }

    #[test]
    fn test_grid_errors_are_reported_once() {
        let jagged = Grid::from_rows(vec![vec![0u8, 1], vec![0, 1, 1]]);
        let result = SolverBuilder::new().build().solve(&jagged);
        assert!(matches!(
            result,
            Err(SolveError::Grid(GridError::InvalidShape { row: 1, .. }))
        ));
    }

    #[test]
    fn test_score_parity_on_random_grids() {
        for seed in 0..12 {
            let grid = random_grid(5, 9, seed);
            let outcome = SolverBuilder::new().build().solve(&grid).unwrap();

            // All four strategies agreed (solve would have failed
            // otherwise); the winner must match the sequential oracle on
            // both score and flip count.
            let oracle = outcome.reports()[0].solution();
            assert_eq!(outcome.best().score(), oracle.score());
            assert_eq!(
                outcome.best().flips().flip_count(),
                oracle.flips().flip_count(),
                "flip-count mismatch on seed {}",
                seed
            );
            assert!(outcome.best().score() as usize <= grid.num_rows());
        }
    }

    #[test]
    fn test_solving_twice_yields_the_same_score() {
        let grid = random_grid(4, 10, 99);
        let solver = SolverBuilder::new().build();
        let first = solver.solve(&grid).unwrap();
        let second = solver.solve(&grid).unwrap();
        assert_eq!(first.best().score(), second.best().score());
    }
}
