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

/// Statistics collected while orchestrating a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Number of strategies that were run.
    pub strategies_run: usize,
    /// Number of candidate masks each strategy enumerated; zero when the
    /// zero-flip short-circuit resolved the grid.
    pub candidates_enumerated: u64,
    /// Total wall-clock duration across all strategy runs.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Strategies Run: {}", self.strategies_run)?;
        writeln!(
            f,
            "  Candidates Enumerated: {}",
            self.candidates_enumerated
        )?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    strategies_run: usize,
    candidates_enumerated: u64,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new builder with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies_run: 0,
            candidates_enumerated: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of strategies run.
    #[inline]
    pub fn strategies_run(mut self, strategies_run: usize) -> Self {
        self.strategies_run = strategies_run;
        self
    }

    /// Sets the number of candidate masks enumerated.
    #[inline]
    pub fn candidates_enumerated(mut self, candidates_enumerated: u64) -> Self {
        self.candidates_enumerated = candidates_enumerated;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            strategies_run: self.strategies_run,
            candidates_enumerated: self.candidates_enumerated,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .strategies_run(4)
            .candidates_enumerated(4095)
            .solve_duration(Duration::from_millis(250))
            .build();

        assert_eq!(stats.strategies_run, 4);
        assert_eq!(stats.candidates_enumerated, 4095);
        assert_eq!(stats.solve_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            strategies_run: 3,
            candidates_enumerated: 127,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Strategies Run: 3"));
        assert!(rendered.contains("Candidates Enumerated: 127"));
        assert!(rendered.contains("Solve Duration (secs): 1.234"));
    }
}
