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

//! Structured solver events.
//!
//! The engine appends one record per notable step: initialization, each
//! iteration boundary, the chosen entering cell with its reduced cost,
//! the shifted quantity, and the terminal outcome. Records carry the raw
//! values; a presentation layer can format them from the fields or fall
//! back on the `Display` rendering. The log is append-only, observational,
//! and has no effect on solver behavior.

use crate::{num::SolverNumeric, tableau::TableauCell};

/// Presentation weight of an event, for consumers that render the log.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Normal,
    Header,
    Bold,
    Success,
    Error,
    Highlight,
}

/// One record in the solve trace.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverEvent<T> {
    /// The initial feasible plan was constructed (North-West corner).
    InitialBasis { cost: T },
    /// An optimization iteration began.
    IterationStarted { iteration: usize },
    /// Degeneracy repair added placeholders to restore the basis size.
    DegeneracyRepaired {
        iteration: usize,
        placeholders_added: usize,
    },
    /// An improving cell was selected to enter the basis.
    EnteringCell {
        iteration: usize,
        cell: TableauCell,
        reduced_cost: T,
    },
    /// Flow was shifted along the closed loop.
    FlowShifted { iteration: usize, theta: T },
    /// Every reduced cost is non-negative; the plan is optimal.
    Optimal { iteration: usize, cost: T },
    /// The dual system could not be resolved (disconnected basis). Fatal.
    PotentialsUnderdetermined { iteration: usize },
    /// No closed loop exists through the entering cell. Fatal.
    LoopNotFound { iteration: usize, cell: TableauCell },
    /// The iteration cap was hit before optimality was proven.
    IterationLimitReached { limit: usize, cost: T },
}

impl<T> SolverEvent<T>
where
    T: SolverNumeric,
{
    /// Returns the presentation weight of this event.
    pub fn severity(&self) -> Severity {
        match self {
            SolverEvent::InitialBasis { .. } => Severity::Bold,
            SolverEvent::IterationStarted { .. } => Severity::Header,
            SolverEvent::DegeneracyRepaired { .. } => Severity::Normal,
            SolverEvent::EnteringCell { .. } => Severity::Highlight,
            SolverEvent::FlowShifted { .. } => Severity::Normal,
            SolverEvent::Optimal { .. } => Severity::Success,
            SolverEvent::PotentialsUnderdetermined { .. } => Severity::Error,
            SolverEvent::LoopNotFound { .. } => Severity::Error,
            SolverEvent::IterationLimitReached { .. } => Severity::Error,
        }
    }

    /// Returns the iteration this event belongs to, if any.
    pub fn iteration(&self) -> Option<usize> {
        match self {
            SolverEvent::InitialBasis { .. } | SolverEvent::IterationLimitReached { .. } => None,
            SolverEvent::IterationStarted { iteration }
            | SolverEvent::DegeneracyRepaired { iteration, .. }
            | SolverEvent::EnteringCell { iteration, .. }
            | SolverEvent::FlowShifted { iteration, .. }
            | SolverEvent::Optimal { iteration, .. }
            | SolverEvent::PotentialsUnderdetermined { iteration }
            | SolverEvent::LoopNotFound { iteration, .. } => Some(*iteration),
        }
    }
}

impl<T> std::fmt::Display for SolverEvent<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverEvent::InitialBasis { cost } => {
                write!(f, "Initial feasible plan constructed, cost {}", cost)
            }
            SolverEvent::IterationStarted { iteration } => {
                write!(f, "--- Optimization iteration {} ---", iteration)
            }
            SolverEvent::DegeneracyRepaired {
                placeholders_added, ..
            } => write!(
                f,
                "Added {} placeholder(s) to restore the basis",
                placeholders_added
            ),
            SolverEvent::EnteringCell {
                cell, reduced_cost, ..
            } => write!(
                f,
                "Negative reduced cost ({}) at {}. Improving...",
                reduced_cost, cell
            ),
            SolverEvent::FlowShifted { theta, .. } => {
                write!(f, "Shifting {} units along the loop", theta)
            }
            SolverEvent::Optimal { cost, .. } => {
                write!(f, "All reduced costs >= 0. Plan is optimal, cost {}", cost)
            }
            SolverEvent::PotentialsUnderdetermined { .. } => {
                write!(f, "Dual potentials underdetermined (disconnected basis). Stopping.")
            }
            SolverEvent::LoopNotFound { cell, .. } => {
                write!(f, "Closed loop not found through {}. Stopping.", cell)
            }
            SolverEvent::IterationLimitReached { limit, cost } => write!(
                f,
                "Iteration limit ({}) reached without optimality proof, cost {}",
                limit, cost
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulage_model::index::{DestinationIndex, SourceIndex};

    fn cell(r: usize, c: usize) -> TableauCell {
        TableauCell::new(SourceIndex::new(r), DestinationIndex::new(c))
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            SolverEvent::InitialBasis { cost: 180i64 }.severity(),
            Severity::Bold
        );
        assert_eq!(
            SolverEvent::<i64>::IterationStarted { iteration: 1 }.severity(),
            Severity::Header
        );
        assert_eq!(
            SolverEvent::EnteringCell {
                iteration: 1,
                cell: cell(1, 0),
                reduced_cost: -6i64
            }
            .severity(),
            Severity::Highlight
        );
        assert_eq!(
            SolverEvent::Optimal {
                iteration: 3,
                cost: 2850i64
            }
            .severity(),
            Severity::Success
        );
        assert_eq!(
            SolverEvent::<i64>::PotentialsUnderdetermined { iteration: 2 }.severity(),
            Severity::Error
        );
        assert_eq!(
            SolverEvent::<i64>::LoopNotFound {
                iteration: 2,
                cell: cell(0, 1)
            }
            .severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_iteration_accessor() {
        assert_eq!(SolverEvent::InitialBasis { cost: 1i64 }.iteration(), None);
        assert_eq!(
            SolverEvent::<i64>::IterationStarted { iteration: 4 }.iteration(),
            Some(4)
        );
        assert_eq!(
            SolverEvent::FlowShifted {
                iteration: 2,
                theta: 50i64
            }
            .iteration(),
            Some(2)
        );
    }

    #[test]
    fn test_display_messages() {
        let event = SolverEvent::EnteringCell {
            iteration: 1,
            cell: cell(1, 0),
            reduced_cost: -6i64,
        };
        assert_eq!(
            format!("{}", event),
            "Negative reduced cost (-6) at (1, 0). Improving..."
        );

        let event = SolverEvent::Optimal {
            iteration: 3,
            cost: 2850i64,
        };
        assert_eq!(
            format!("{}", event),
            "All reduced costs >= 0. Plan is optimal, cost 2850"
        );

        let event = SolverEvent::FlowShifted {
            iteration: 1,
            theta: 250i64,
        };
        assert_eq!(format!("{}", event), "Shifting 250 units along the loop");
    }
}
