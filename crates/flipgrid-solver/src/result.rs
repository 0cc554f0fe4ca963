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

use crate::stats::SolverStatistics;
use flipgrid_model::{grid::GridError, solution::Solution};

/// The error type for an orchestrated solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The grid failed validation; every strategy would report the same
    /// underlying error.
    Grid(GridError),
    /// Two strategies returned different scores for the same grid. This
    /// indicates a bug in a strategy, never a property of the input.
    ScoreDisagreement {
        /// The score returned by the first strategy run.
        expected: u32,
        /// Name of the strategy that disagreed.
        strategy: String,
        /// The score that strategy returned.
        actual: u32,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "Grid error: {}", e),
            Self::ScoreDisagreement {
                expected,
                strategy,
                actual,
            } => write!(
                f,
                "Strategy '{}' returned score {}, expected {}",
                strategy, actual, expected
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::ScoreDisagreement { .. } => None,
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// One strategy's run: its name, the solution it returned, and how long
/// it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    name: String,
    solution: Solution,
    duration: std::time::Duration,
}

impl StrategyReport {
    /// Creates a new report.
    #[inline]
    pub fn new(name: String, solution: Solution, duration: std::time::Duration) -> Self {
        Self {
            name,
            solution,
            duration,
        }
    }

    /// Returns the strategy name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the solution the strategy found.
    #[inline]
    pub fn solution(&self) -> Solution {
        self.solution
    }

    /// Returns the wall-clock duration of the run.
    #[inline]
    pub fn duration(&self) -> std::time::Duration {
        self.duration
    }
}

impl std::fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({:.3}s)",
            self.name,
            self.solution,
            self.duration.as_secs_f64()
        )
    }
}

/// The result of an orchestrated solve: the best solution, one report per
/// strategy, and run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    best: Solution,
    reports: Vec<StrategyReport>,
    statistics: SolverStatistics,
}

impl SolveOutcome {
    /// Creates a new outcome.
    #[inline]
    pub fn new(best: Solution, reports: Vec<StrategyReport>, statistics: SolverStatistics) -> Self {
        Self {
            best,
            reports,
            statistics,
        }
    }

    /// Returns the best solution across all strategies.
    #[inline]
    pub fn best(&self) -> Solution {
        self.best
    }

    /// Returns one report per strategy, in run order.
    #[inline]
    pub fn reports(&self) -> &[StrategyReport] {
        &self.reports
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Winner: {}", self.best)?;
        writeln!(f)?;
        writeln!(
            f,
            "   {:<20} | {:<7} | {:<7} | {:<10}",
            "Strategy", "Score", "Flips", "Time"
        )?;
        writeln!(f, "   {:-<20}-+-{:-<7}-+-{:-<7}-+-{:-<10}", "", "", "", "")?;
        for report in &self.reports {
            writeln!(
                f,
                "   {:<20} | {:<7} | {:<7} | {:<10}",
                report.name(),
                report.solution().score(),
                report.solution().flips().flip_count(),
                format!("{:.3}s", report.duration().as_secs_f64())
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SolverStatisticsBuilder;
    use flipgrid_model::solution::FlipMask;
    use std::time::Duration;

    fn solution(score: u32, bits: u32) -> Solution {
        Solution::new(score, FlipMask::new(bits))
    }

    #[test]
    fn test_solve_error_display_and_source() {
        let grid_error = SolveError::from(GridError::TooManyColumns {
            columns: 40,
            max: 31,
        });
        assert!(grid_error.to_string().contains("Grid error"));
        assert!(std::error::Error::source(&grid_error).is_some());

        let disagreement = SolveError::ScoreDisagreement {
            expected: 3,
            strategy: "fork-join".to_string(),
            actual: 2,
        };
        assert_eq!(
            disagreement.to_string(),
            "Strategy 'fork-join' returned score 2, expected 3"
        );
        assert!(std::error::Error::source(&disagreement).is_none());
    }

    #[test]
    fn test_outcome_accessors() {
        let best = solution(2, 0b100);
        let reports = vec![StrategyReport::new(
            "exhaustive".to_string(),
            best,
            Duration::from_millis(5),
        )];
        let stats = SolverStatisticsBuilder::new()
            .strategies_run(1)
            .candidates_enumerated(31)
            .build();

        let outcome = SolveOutcome::new(best, reports, stats);
        assert_eq!(outcome.best(), best);
        assert_eq!(outcome.reports().len(), 1);
        assert_eq!(outcome.reports()[0].name(), "exhaustive");
        assert_eq!(outcome.statistics().candidates_enumerated, 31);
    }

    #[test]
    fn test_outcome_display_lists_each_strategy() {
        let best = solution(3, 0b10);
        let reports = vec![
            StrategyReport::new("immutable-reduction".to_string(), best, Duration::ZERO),
            StrategyReport::new("atomic-update".to_string(), best, Duration::ZERO),
        ];
        let stats = SolverStatisticsBuilder::new().strategies_run(2).build();

        let rendered = format!("{}", SolveOutcome::new(best, reports, stats));
        assert!(rendered.contains("Winner: score: 3"));
        assert!(rendered.contains("immutable-reduction"));
        assert!(rendered.contains("atomic-update"));
        assert!(rendered.contains("Strategies Run: 2"));
    }
}
