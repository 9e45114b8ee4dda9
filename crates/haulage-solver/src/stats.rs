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

/// Statistics collected during the solving process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Number of optimization iterations entered.
    pub iterations: u64,
    /// Number of flow reallocations performed (loops shifted).
    pub reallocations: u64,
    /// Total number of degeneracy placeholders introduced.
    pub placeholders_added: u64,
    /// Total duration of the solving process.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Reallocations: {}", self.reallocations)?;
        writeln!(f, "  Placeholders Added: {}", self.placeholders_added)?;
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
    iterations: u64,
    reallocations: u64,
    placeholders_added: u64,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new `SolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            iterations: 0,
            reallocations: 0,
            placeholders_added: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of iterations entered.
    #[inline]
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of reallocations performed.
    #[inline]
    pub fn reallocations(mut self, reallocations: u64) -> Self {
        self.reallocations = reallocations;
        self
    }

    /// Sets the number of placeholders introduced.
    #[inline]
    pub fn placeholders_added(mut self, placeholders_added: u64) -> Self {
        self.placeholders_added = placeholders_added;
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
            iterations: self.iterations,
            reallocations: self.reallocations,
            placeholders_added: self.placeholders_added,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolverStatistics;
    use super::SolverStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .iterations(3)
            .reallocations(2)
            .placeholders_added(1)
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.reallocations, 2);
        assert_eq!(stats.placeholders_added, 1);
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            iterations: 3,
            reallocations: 2,
            placeholders_added: 1,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        // Header line
        assert!(rendered.contains("Solver Statistics:"), "missing header");

        // Fields
        assert!(rendered.contains("Iterations: 3"), "missing iterations");
        assert!(
            rendered.contains("Reallocations: 2"),
            "missing reallocations"
        );
        assert!(
            rendered.contains("Placeholders Added: 1"),
            "missing placeholders_added"
        );

        // Duration line should be formatted to three decimals
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }

    #[test]
    fn test_display_handles_zero_values() {
        let stats = SolverStatistics {
            iterations: 0,
            reallocations: 0,
            placeholders_added: 0,
            solve_duration: Duration::ZERO,
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Iterations: 0"));
        assert!(rendered.contains("Reallocations: 0"));
        assert!(rendered.contains("Placeholders Added: 0"));
        assert!(rendered.contains("Solve Duration (secs): 0.000"));
    }
}
