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

//! # Haulage Model
//!
//! **The Core Domain Model for the Haulage Transportation Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **balanced transportation problem**: shipping quantities from supply
//! sources to demand destinations at minimum total cost. It serves as the
//! data interchange layer between the problem definition (user input) and
//! the solving engine (`haulage_solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`SourceIndex`,
//!   `DestinationIndex`) to prevent logical indexing errors.
//! * **`model`**: Contains the `Model` (immutable, optimized for solving)
//!   and `ModelBuilder` (mutable, optimized for configuration and
//!   validation).
//! * **`plan`**: Defines the output format, a `ShipmentPlan` with per-cell
//!   quantities and the total shipping cost.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally
//!     use a `SourceIndex` to address a destination column.
//! 2.  **Memory Layout**: The cost matrix is stored as a flattened
//!     row-major vector rather than nested vectors to maximize cache
//!     locality during the pivoting loops.
//! 3.  **Fail-Fast**: The builder validates inputs eagerly (non-negative
//!     entries, matching dimensions, supply/demand balance) so the solver
//!     never encounters an invalid instance.

pub mod index;
pub mod model;
pub mod plan;
