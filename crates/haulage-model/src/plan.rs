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

use crate::index::{DestinationIndex, SourceIndex};
use num_traits::{Signed, ToPrimitive};

/// The final shipment plan for a balanced transportation instance.
///
/// Quantities are stored as a flattened row-major matrix, indexed by
/// `SourceIndex` and `DestinationIndex`. Basis placeholders used during
/// solving are already resolved to zero here; every quantity in a plan is
/// a real, non-negative shipment.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentPlan<T> {
    /// The total shipping cost of this plan.
    total_cost: T,

    /// The shipped quantity for each (source, destination) cell,
    /// flattened row-major.
    quantities: Vec<T>,

    /// The number of destinations (row stride of `quantities`).
    num_destinations: usize,
}

impl<T> ShipmentPlan<T>
where
    T: Signed + Copy + PartialOrd,
{
    /// Constructs a new `ShipmentPlan`.
    ///
    /// # Panics
    ///
    /// Panics if `num_destinations` is zero or `quantities` is not a whole
    /// number of rows.
    pub fn new(total_cost: T, quantities: Vec<T>, num_destinations: usize) -> Self {
        assert!(
            num_destinations > 0,
            "called ShipmentPlan::new with zero destinations"
        );
        assert!(
            quantities.len() % num_destinations == 0,
            "called ShipmentPlan::new with inconsistent dimensions: quantities.len() = {} is not a multiple of num_destinations = {}",
            quantities.len(),
            num_destinations
        );

        Self {
            total_cost,
            quantities,
            num_destinations,
        }
    }

    /// Returns the number of supply sources in this plan.
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.quantities.len() / self.num_destinations
    }

    /// Returns the number of demand destinations in this plan.
    #[inline]
    pub fn num_destinations(&self) -> usize {
        self.num_destinations
    }

    /// Returns the quantity shipped from `source` to `destination`.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `destination` is out of bounds.
    #[inline]
    pub fn quantity(&self, source: SourceIndex, destination: DestinationIndex) -> T {
        debug_assert!(
            source.get() < self.num_sources(),
            "called `ShipmentPlan::quantity` with source index out of bounds: the len is {} but the index is {}",
            self.num_sources(),
            source.get()
        );
        debug_assert!(
            destination.get() < self.num_destinations(),
            "called `ShipmentPlan::quantity` with destination index out of bounds: the len is {} but the index is {}",
            self.num_destinations(),
            destination.get()
        );

        self.quantities[source.get() * self.num_destinations + destination.get()]
    }

    /// Returns a slice of all shipped quantities, flattened row-major.
    #[inline]
    pub fn quantities(&self) -> &[T] {
        &self.quantities
    }

    /// Returns the exact total shipping cost of this plan.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the total cost rounded to the nearest integer, for
    /// presentation. Exact for integer quantity types.
    ///
    /// # Panics
    ///
    /// Panics if the cost cannot be represented as `f64`.
    pub fn rounded_cost(&self) -> i64
    where
        T: ToPrimitive,
    {
        match self.total_cost.to_f64() {
            Some(cost) => cost.round() as i64,
            None => panic!("called `ShipmentPlan::rounded_cost` on a cost not representable as f64"),
        }
    }
}

impl<T> std::fmt::Display for ShipmentPlan<T>
where
    T: Signed + Copy + PartialOrd + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Shipment Plan")?;
        writeln!(f, "   Total Cost: {}", self.total_cost)?;
        writeln!(f)?;

        if self.quantities.iter().all(|&q| q <= T::zero()) {
            writeln!(f, "   (No shipments)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<10} | {:<12} | {:<10}",
            "Source", "Destination", "Quantity"
        )?;
        writeln!(f, "   {:-<10}-+-{:-<12}-+-{:-<10}", "", "", "")?;
        for r in 0..self.num_sources() {
            for c in 0..self.num_destinations {
                let quantity = self.quantities[r * self.num_destinations + c];
                if quantity > T::zero() {
                    writeln!(f, "   {:<10} | {:<12} | {:<10}", r, c, quantity)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn si(i: usize) -> SourceIndex {
        SourceIndex::new(i)
    }

    fn di(i: usize) -> DestinationIndex {
        DestinationIndex::new(i)
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let plan = ShipmentPlan::new(180i64, vec![20, 0, 5, 25], 2);

        assert_eq!(plan.total_cost(), 180);
        assert_eq!(plan.num_sources(), 2);
        assert_eq!(plan.num_destinations(), 2);
        assert_eq!(plan.quantity(si(0), di(0)), 20);
        assert_eq!(plan.quantity(si(0), di(1)), 0);
        assert_eq!(plan.quantity(si(1), di(0)), 5);
        assert_eq!(plan.quantity(si(1), di(1)), 25);
        assert_eq!(plan.quantities(), &[20, 0, 5, 25]);
    }

    #[test]
    #[should_panic(expected = "called ShipmentPlan::new with inconsistent dimensions")]
    fn test_new_panics_on_ragged_quantities() {
        let _ = ShipmentPlan::new(0i64, vec![1, 2, 3], 2);
    }

    #[test]
    fn test_rounded_cost_is_exact_for_integers() {
        let plan = ShipmentPlan::new(2850i64, vec![0; 4], 2);
        assert_eq!(plan.rounded_cost(), 2850);
    }

    #[test]
    fn test_rounded_cost_rounds_floats_to_nearest() {
        let plan = ShipmentPlan::new(179.6f64, vec![0.0; 4], 2);
        assert_eq!(plan.rounded_cost(), 180);

        let plan = ShipmentPlan::new(179.4f64, vec![0.0; 4], 2);
        assert_eq!(plan.rounded_cost(), 179);
    }

    #[test]
    fn test_display_formatting_example() {
        let plan = ShipmentPlan::new(180i64, vec![20, 0, 5, 25], 2);

        let displayed = format!("{}", plan);

        let mut expected = String::new();
        expected.push_str("Shipment Plan\n");
        expected.push_str("   Total Cost: 180\n");
        expected.push('\n');
        expected.push_str("   Source     | Destination  | Quantity  \n");
        expected.push_str("   -----------+--------------+-----------\n");
        expected.push_str("   0          | 0            | 20        \n");
        expected.push_str("   1          | 0            | 5         \n");
        expected.push_str("   1          | 1            | 25        \n");
        assert_eq!(displayed, expected);
    }

    #[test]
    fn test_display_empty_plan() {
        let plan = ShipmentPlan::new(0i64, vec![0, 0], 2);
        let displayed = format!("{}", plan);
        assert!(displayed.contains("(No shipments)"));
    }
}
