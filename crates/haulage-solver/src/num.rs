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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the transportation solver. `SolverNumeric`
//! collects the capabilities the phases need — signed arithmetic for
//! reduced costs, ordering for theta selection, casts for presentation
//! rounding, and the `Tolerance`/`Zero` constant traits from
//! `haulage_core` — into a single alias, simplifying generic signatures.
//!
//! ## Motivation
//!
//! Costs and quantities may be integers (exact instances) or `f64`
//! (measured data). The MODI method itself is type-agnostic: it only
//! subtracts, compares, and accumulates. A single trait alias keeps every
//! phase generic without repeating a wall of bounds.
//!
//! ## Highlights
//!
//! - Requires `Signed` (reduced costs are differences and may be negative).
//! - Requires `NumCast` for the presentation rounding of total costs.
//! - Includes the `Tolerance` and `Zero` constant traits.
//! - `Send + Sync` so models and outcomes can cross thread boundaries.
//!
//! Note: `f32` is intentionally excluded; `haulage_core` defines no
//! optimality slack at single precision.

use haulage_core::num::constants::{Tolerance, Zero};
use num_traits::{NumCast, Signed};

/// A trait alias for numeric types that can be used in the solver.
/// These are the signed integer types `i8`, `i16`, `i32`, `i64`, `isize`,
/// and `f64`.
pub trait SolverNumeric:
    Signed
    + Copy
    + PartialOrd
    + NumCast
    + std::fmt::Debug
    + std::fmt::Display
    + Tolerance
    + Zero
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: Signed
        + Copy
        + PartialOrd
        + NumCast
        + std::fmt::Debug
        + std::fmt::Display
        + Tolerance
        + Zero
        + Send
        + Sync
{
}
