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

//! # Solve Monitors
//!
//! Pluggable observers for solve lifecycle events. Monitors can log
//! progress or collect metrics without entangling those concerns in the
//! iteration loop. Unlike the event log, monitors see events as they
//! happen; like the event log, they are purely observational and cannot
//! influence the solve.
//!
//! ## Submodules
//!
//! - `solve_monitor`: Core trait (`SolveMonitor<T>`) defining the
//!   lifecycle hooks.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `no_op`: The do-nothing monitor used by the plain `solve` entry.
//! - `log`: A println table monitor for interactive runs.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod solve_monitor;
