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

/// A trait for numeric types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for numeric types that carry an optimality slack.
///
/// A reduced cost `d` counts as non-negative when `d >= -TOLERANCE`.
/// Integer types are exact and use a slack of zero; `f64` uses `1e-9` to
/// absorb the rounding noise accumulated by repeated potential
/// subtractions.
pub trait Tolerance {
    /// The constant representing the optimality slack for the
    /// implementing type.
    const TOLERANCE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_zero_for {
    ($t:ty) => {
        impl_const_for!(Zero, ZERO, 0, $t);
    };
}

macro_rules! impl_exact_tolerance_for {
    ($t:ty) => {
        impl_const_for!(Tolerance, TOLERANCE, 0, $t);
    };
}

impl_zero_for!(i8);
impl_zero_for!(i16);
impl_zero_for!(i32);
impl_zero_for!(i64);
impl_zero_for!(i128);
impl_zero_for!(isize);

impl_exact_tolerance_for!(i8);
impl_exact_tolerance_for!(i16);
impl_exact_tolerance_for!(i32);
impl_exact_tolerance_for!(i64);
impl_exact_tolerance_for!(i128);
impl_exact_tolerance_for!(isize);

impl Zero for f64 {
    const ZERO: Self = 0.0;
}

// f32 is intentionally not implemented: a slack of 1e-9 is below single
// precision resolution for realistic cost magnitudes, and there is no
// principled constant to put in its place.
impl Tolerance for f64 {
    const TOLERANCE: Self = 1e-9;
}

#[cfg(test)]
mod tests {
    use super::{Tolerance, Zero};

    #[test]
    fn test_integer_constants() {
        assert_eq!(<i32 as Zero>::ZERO, 0);
        assert_eq!(<i64 as Zero>::ZERO, 0);
        assert_eq!(<i32 as Tolerance>::TOLERANCE, 0);
        assert_eq!(<i64 as Tolerance>::TOLERANCE, 0);
    }

    #[test]
    fn test_float_constants() {
        assert_eq!(<f64 as Zero>::ZERO, 0.0);
        assert_eq!(<f64 as Tolerance>::TOLERANCE, 1e-9);
    }

    #[test]
    fn test_tolerance_accepts_rounding_noise() {
        // A reduced cost of -1e-12 is numeric noise, not an improving move.
        let d = -1e-12f64;
        assert!(d >= -<f64 as Tolerance>::TOLERANCE);
    }
}
