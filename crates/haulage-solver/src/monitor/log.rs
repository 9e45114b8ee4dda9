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

use crate::{
    monitor::solve_monitor::SolveMonitor, num::SolverNumeric, stats::SolverStatistics,
    tableau::TableauCell,
};
use haulage_model::model::Model;
use std::time::Instant;

/// A monitor that prints a progress table to stdout, one line per
/// iteration. Intended for interactive runs; library consumers read the
/// structured event log instead.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
}

impl LogMonitor {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<10} | {:<14}",
            "Elapsed", "Iteration", "Current Cost"
        );
        println!("{}", "-".repeat(40));
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor")
    }
}

impl<T> SolveMonitor<T> for LogMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_solve_start(&mut self, model: &Model<T>) {
        self.start_time = Instant::now();
        println!(
            "Solving a {}x{} transportation instance...",
            model.num_sources(),
            model.num_destinations()
        );
        self.print_header();
    }

    fn on_iteration(&mut self, iteration: usize, current_cost: T) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);
        println!(
            "{:<9} | {:<10} | {:<14}",
            elapsed_field, iteration, current_cost
        );
    }

    fn on_reallocation(&mut self, _iteration: usize, entering: TableauCell, theta: T) {
        println!("  shifted {} units through {}", theta, entering);
    }

    fn on_solve_end(&mut self, statistics: &SolverStatistics) {
        println!("{}", "-".repeat(40));
        print!("{}", statistics);
    }
}
