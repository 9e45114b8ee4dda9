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

//! # Transportation Solver Engine
//!
//! The iteration driver for the NWCM + MODI pipeline. A solve owns one
//! tableau exclusively and runs the phases in strict sequence: the
//! North-West corner construction once, then per iteration degeneracy
//! repair, dual potential computation, entering-cell selection, loop
//! discovery, and flow reallocation, until optimality is proven, a fatal
//! structural condition is detected, or the iteration cap is reached.
//!
//! ## Termination
//!
//! Well-formed balanced instances converge in at most `rows * cols`
//! pivots in practice, but no convergence proof is enforced; the cap
//! (default `rows * cols * 4`, configurable) bounds the damage of a
//! malformed instance and yields a distinct `Feasible` outcome carrying
//! the best plan reached.
//!
//! ## Observability
//!
//! Every run appends structured `SolverEvent` records to the outcome and
//! drives the optional `SolveMonitor` callbacks. Both are observational;
//! neither can steer the iteration loop.

use crate::{
    degeneracy::repair_degeneracy,
    event::SolverEvent,
    monitor::{no_op::NoOperationMonitor, solve_monitor::SolveMonitor},
    northwest::northwest_corner,
    num::SolverNumeric,
    pivot::{find_closed_loop, select_entering, shift_flow},
    potentials::compute_potentials,
    result::{SolveFailure, SolveOutcome},
    stats::SolverStatisticsBuilder,
};
use haulage_model::model::Model;

/// Multiplier for the default iteration cap, `rows * cols * 4`. The
/// margin keeps the cap out of the way of well-formed instances while
/// still bounding runtime on malformed ones.
const DEFAULT_LIMIT_FACTOR: usize = 4;

/// The balanced transportation solver.
///
/// Stateless between runs; one instance can solve any number of models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TransportSolver {
    iteration_limit: Option<usize>,
}

impl TransportSolver {
    /// Creates a solver with the default iteration cap.
    #[inline]
    pub fn new() -> Self {
        Self {
            iteration_limit: None,
        }
    }

    /// Creates a solver with an explicit iteration cap.
    #[inline]
    pub fn with_iteration_limit(limit: usize) -> Self {
        Self {
            iteration_limit: Some(limit),
        }
    }

    /// Returns the configured iteration cap, if any.
    #[inline]
    pub fn iteration_limit(&self) -> Option<usize> {
        self.iteration_limit
    }

    #[inline]
    fn effective_iteration_limit<T>(&self, model: &Model<T>) -> usize
    where
        T: SolverNumeric,
    {
        self.iteration_limit
            .unwrap_or(model.num_sources() * model.num_destinations() * DEFAULT_LIMIT_FACTOR)
    }

    /// Solves the given model to optimality (or a reported failure).
    pub fn solve<T>(&self, model: &Model<T>) -> SolveOutcome<T>
    where
        T: SolverNumeric,
    {
        let mut monitor = NoOperationMonitor::new();
        self.solve_with_monitor(model, &mut monitor)
    }

    /// Solves the given model, driving the monitor's lifecycle hooks.
    pub fn solve_with_monitor<T, M>(&self, model: &Model<T>, monitor: &mut M) -> SolveOutcome<T>
    where
        T: SolverNumeric,
        M: SolveMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let limit = self.effective_iteration_limit(model);

        let mut events: Vec<SolverEvent<T>> = Vec::new();
        monitor.on_solve_start(model);

        let mut tableau = northwest_corner(model);
        events.push(SolverEvent::InitialBasis {
            cost: tableau.total_cost(model),
        });

        let mut iterations: u64 = 0;
        let mut reallocations: u64 = 0;
        let mut placeholders_added: u64 = 0;

        let build_statistics = |iterations: u64, reallocations: u64, placeholders_added: u64| {
            SolverStatisticsBuilder::new()
                .iterations(iterations)
                .reallocations(reallocations)
                .placeholders_added(placeholders_added)
                .solve_duration(start_time.elapsed())
                .build()
        };

        let mut iteration = 1;
        let outcome = loop {
            if iteration > limit {
                let cost = tableau.total_cost(model);
                events.push(SolverEvent::IterationLimitReached { limit, cost });
                let statistics =
                    build_statistics(iterations, reallocations, placeholders_added);
                break SolveOutcome::feasible(tableau.to_plan(model), limit, events, statistics);
            }

            iterations += 1;
            events.push(SolverEvent::IterationStarted { iteration });

            let added = repair_degeneracy(&mut tableau);
            if added > 0 {
                placeholders_added += added as u64;
                events.push(SolverEvent::DegeneracyRepaired {
                    iteration,
                    placeholders_added: added,
                });
            }
            debug_assert_eq!(
                tableau.basic_count(),
                tableau.required_basis_size(),
                "basis size invariant violated entering the potential phase"
            );

            let potentials = match compute_potentials(model, &tableau) {
                Some(potentials) => potentials,
                None => {
                    events.push(SolverEvent::PotentialsUnderdetermined { iteration });
                    let statistics =
                        build_statistics(iterations, reallocations, placeholders_added);
                    break SolveOutcome::failed(
                        SolveFailure::DisconnectedPotentials,
                        events,
                        statistics,
                    );
                }
            };

            match select_entering(model, &tableau, &potentials) {
                None => {
                    let cost = tableau.total_cost(model);
                    events.push(SolverEvent::Optimal { iteration, cost });
                    monitor.on_iteration(iteration, cost);
                    let statistics =
                        build_statistics(iterations, reallocations, placeholders_added);
                    break SolveOutcome::optimal(tableau.to_plan(model), events, statistics);
                }
                Some((entering, reduced_cost)) => {
                    events.push(SolverEvent::EnteringCell {
                        iteration,
                        cell: entering,
                        reduced_cost,
                    });

                    let closed_loop = match find_closed_loop(&tableau, entering) {
                        Some(closed_loop) => closed_loop,
                        None => {
                            events.push(SolverEvent::LoopNotFound {
                                iteration,
                                cell: entering,
                            });
                            let statistics =
                                build_statistics(iterations, reallocations, placeholders_added);
                            break SolveOutcome::failed(
                                SolveFailure::LoopNotFound,
                                events,
                                statistics,
                            );
                        }
                    };

                    let theta = shift_flow(&mut tableau, &closed_loop);
                    reallocations += 1;
                    events.push(SolverEvent::FlowShifted { iteration, theta });
                    monitor.on_reallocation(iteration, entering, theta);
                    monitor.on_iteration(iteration, tableau.total_cost(model));
                }
            }

            iteration += 1;
        };

        monitor.on_solve_end(outcome.statistics());
        outcome
    }
}
