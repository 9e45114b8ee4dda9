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

//! # Haulage Solver
//!
//! The solver engine for the balanced transportation problem. Starting
//! from a validated `haulage_model::Model`, the engine constructs an
//! initial feasible shipment plan with the North-West Corner Method and
//! improves it to optimality with the MODI (Modified Distribution) method:
//! degeneracy repair, dual-potential computation, entering-variable
//! selection, and flow reallocation along a closed loop.
//!
//! ## Modules
//!
//! - `engine`: `TransportSolver`, the iteration driver that sequences the
//!   phases and produces a `SolveOutcome`.
//! - `tableau`: The mutable allocation grid with tagged cell states
//!   (`Empty | Flow | Placeholder`) and basic-cell queries.
//! - `northwest`: Initial feasible basis construction.
//! - `degeneracy`: Placeholder insertion to restore the basis size.
//! - `potentials`: Dual potential computation by label propagation.
//! - `pivot`: Entering-cell selection, closed-loop search, and flow shift.
//! - `event`: Structured solver event records with severity tags.
//! - `result`: Typed outcome, result, and termination-reason enums.
//! - `stats`: Statistics collected during a solve.
//! - `monitor`: Pluggable observers for solve lifecycle events.
//! - `num`: The `SolverNumeric` trait alias bounding the quantity type.
//!
//! ## Phases, not components
//!
//! The four algorithmic phases share one tableau that the engine owns
//! exclusively for the duration of a solve; each phase is a free function
//! over the tableau (and potentials), never a method mutating hidden
//! state. One repair → potentials → selection → loop → shift cycle is one
//! iteration; iterations repeat until optimality is proven, a fatal
//! structural condition is detected, or the iteration cap is reached.

pub mod degeneracy;
pub mod engine;
pub mod event;
pub mod monitor;
pub mod northwest;
pub mod num;
pub mod pivot;
pub mod potentials;
pub mod result;
pub mod stats;
pub mod tableau;
