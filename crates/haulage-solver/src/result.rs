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

use crate::{event::SolverEvent, num::SolverNumeric, stats::SolverStatistics};
use haulage_model::plan::ShipmentPlan;

/// The structural failure modes of a solve.
///
/// Both are fatal and deterministic: retrying reproduces the identical
/// failure, so the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveFailure {
    /// The dual system could not be resolved from the basis; some row or
    /// column is disconnected from the reference row.
    DisconnectedPotentials,
    /// No alternating closed loop exists through the entering cell.
    LoopNotFound,
}

impl std::fmt::Display for SolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveFailure::DisconnectedPotentials => {
                write!(f, "dual potentials underdetermined (disconnected basis)")
            }
            SolveFailure::LoopNotFound => write!(f, "closed loop not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult<T> {
    /// We have found a plan and proven its optimality.
    Optimal(ShipmentPlan<T>),
    /// We have a feasible plan, but the iteration cap stopped the proof.
    Feasible(ShipmentPlan<T>),
    /// The solve halted on a structural failure; no valid optimum was
    /// produced.
    Failed(SolveFailure),
}

impl<T> std::fmt::Display for SolveResult<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Optimal(plan) => write!(f, "Optimal(cost={})", plan.total_cost()),
            SolveResult::Feasible(plan) => write!(f, "Feasible(cost={})", plan.total_cost()),
            SolveResult::Failed(failure) => write!(f, "Failed({})", failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every reduced cost is non-negative: optimality is proven.
    OptimalityProven,
    /// The configured iteration cap was reached first.
    IterationLimit(usize),
    /// The dual system was underdetermined.
    PotentialsUnderdetermined,
    /// The entering cell had no closed loop back to itself.
    LoopNotFound,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::IterationLimit(limit) => {
                write!(f, "Iteration Limit Reached ({})", limit)
            }
            TerminationReason::PotentialsUnderdetermined => {
                write!(f, "Potentials Underdetermined")
            }
            TerminationReason::LoopNotFound => write!(f, "Closed Loop Not Found"),
        }
    }
}

/// Everything a solve call produces: the typed result, why it stopped,
/// the full event trace, and run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<T> {
    result: SolveResult<T>,
    reason: TerminationReason,
    events: Vec<SolverEvent<T>>,
    statistics: SolverStatistics,
}

impl<T> SolveOutcome<T>
where
    T: SolverNumeric,
{
    /// Constructs an outcome for a proven-optimal plan.
    #[inline]
    pub fn optimal(
        plan: ShipmentPlan<T>,
        events: Vec<SolverEvent<T>>,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result: SolveResult::Optimal(plan),
            reason: TerminationReason::OptimalityProven,
            events,
            statistics,
        }
    }

    /// Constructs an outcome for a feasible plan cut off by the iteration
    /// cap.
    #[inline]
    pub fn feasible(
        plan: ShipmentPlan<T>,
        limit: usize,
        events: Vec<SolverEvent<T>>,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result: SolveResult::Feasible(plan),
            reason: TerminationReason::IterationLimit(limit),
            events,
            statistics,
        }
    }

    /// Constructs an outcome for a structurally failed solve.
    #[inline]
    pub fn failed(
        failure: SolveFailure,
        events: Vec<SolverEvent<T>>,
        statistics: SolverStatistics,
    ) -> Self {
        let reason = match failure {
            SolveFailure::DisconnectedPotentials => TerminationReason::PotentialsUnderdetermined,
            SolveFailure::LoopNotFound => TerminationReason::LoopNotFound,
        };
        Self {
            result: SolveResult::Failed(failure),
            reason,
            events,
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SolveResult<T> {
        &self.result
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn events(&self) -> &[SolverEvent<T>] {
        &self.events
    }

    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolveResult::Optimal(_))
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.result, SolveResult::Failed(_))
    }

    /// Returns the produced plan, if any.
    #[inline]
    pub fn plan(&self) -> Option<&ShipmentPlan<T>> {
        match &self.result {
            SolveResult::Optimal(plan) | SolveResult::Feasible(plan) => Some(plan),
            SolveResult::Failed(_) => None,
        }
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Outcome: {}", self.result)?;
        writeln!(f, "  Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}
