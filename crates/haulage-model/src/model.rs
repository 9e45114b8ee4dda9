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
use num_traits::Signed;

#[inline(always)]
fn flatten_index(
    num_destinations: usize,
    source: SourceIndex,
    destination: DestinationIndex,
) -> usize {
    source.get() * num_destinations + destination.get()
}

/// The error type for model construction.
///
/// Every variant points at the offending entry so callers can surface a
/// precise message without re-scanning their input.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelBuildError<T> {
    /// The problem dimensions are invalid (both must be > 0).
    InvalidDimensions,
    /// A unit shipping cost is negative.
    NegativeCost(SourceIndex, DestinationIndex),
    /// A supply quantity is negative.
    NegativeSupply(SourceIndex),
    /// A demand quantity is negative.
    NegativeDemand(DestinationIndex),
    /// Total supply and total demand differ; the solver only accepts
    /// balanced instances.
    Unbalanced {
        total_supply: T,
        total_demand: T,
    },
}

impl<T> std::fmt::Display for ModelBuildError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions => {
                write!(f, "Problem dimensions must be positive")
            }
            Self::NegativeCost(source, destination) => write!(
                f,
                "Cost from source {} to destination {} is negative",
                source.get(),
                destination.get()
            ),
            Self::NegativeSupply(source) => {
                write!(f, "Supply at source {} is negative", source.get())
            }
            Self::NegativeDemand(destination) => {
                write!(f, "Demand at destination {} is negative", destination.get())
            }
            Self::Unbalanced {
                total_supply,
                total_demand,
            } => write!(
                f,
                "Total supply ({}) must equal total demand ({})",
                total_supply, total_demand
            ),
        }
    }
}

impl<T> std::error::Error for ModelBuildError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// The immutable data model describing a balanced transportation instance.
///
/// This struct holds all pre-validated, queryable data:
/// - `costs[source * num_destinations + destination]`: per-cell unit
///   shipping cost, flattened row-major.
/// - `supplies[source]`: the quantity available at each source.
/// - `demands[destination]`: the quantity required at each destination.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a
///   validated `Model`. A `Model` that exists is non-empty, non-negative
///   everywhere, and balanced (`total_supply() == total_demand()`); the
///   solver relies on this and performs no re-validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Model<T>
where
    T: Signed + Copy + PartialOrd,
{
    costs: Vec<T>,    // len = num_sources * num_destinations
    supplies: Vec<T>, // len = num_sources
    demands: Vec<T>,  // len = num_destinations
}

impl<T> Model<T>
where
    T: Signed + Copy + PartialOrd,
{
    /// Returns the number of supply sources in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use haulage_model::model::ModelBuilder;
    ///
    /// let builder = ModelBuilder::<i64>::new(3, 5);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_sources(), 3);
    /// ```
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.supplies.len()
    }

    /// Returns the number of demand destinations in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use haulage_model::model::ModelBuilder;
    ///
    /// let builder = ModelBuilder::<i64>::new(3, 5);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_destinations(), 5);
    /// ```
    #[inline]
    pub fn num_destinations(&self) -> usize {
        self.demands.len()
    }

    /// Returns a slice of all unit costs, flattened row-major.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns a slice of all supply quantities.
    #[inline]
    pub fn supplies(&self) -> &[T] {
        &self.supplies
    }

    /// Returns a slice of all demand quantities.
    #[inline]
    pub fn demands(&self) -> &[T] {
        &self.demands
    }

    /// Returns the unit shipping cost for the given source/destination pair.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `destination` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use haulage_model::model::ModelBuilder;
    /// # use haulage_model::index::{SourceIndex, DestinationIndex};
    ///
    /// let mut builder = ModelBuilder::<i64>::new(2, 2);
    /// builder.set_cost(SourceIndex::new(0), DestinationIndex::new(1), 7);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.cost(SourceIndex::new(0), DestinationIndex::new(1)), 7);
    /// ```
    #[inline]
    pub fn cost(&self, source: SourceIndex, destination: DestinationIndex) -> T {
        debug_assert!(
            source.get() < self.num_sources(),
            "called `Model::cost` with source index out of bounds: the len is {} but the index is {}",
            self.num_sources(),
            source.get()
        );
        debug_assert!(
            destination.get() < self.num_destinations(),
            "called `Model::cost` with destination index out of bounds: the len is {} but the index is {}",
            self.num_destinations(),
            destination.get()
        );

        self.costs[flatten_index(self.num_destinations(), source, destination)]
    }

    /// Returns the unit shipping cost without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking.
    /// The caller must ensure that `source` is in `0..num_sources()` and
    /// `destination` is in `0..num_destinations()`. Undefined behavior may
    /// occur if this precondition is violated.
    #[inline]
    pub unsafe fn cost_unchecked(&self, source: SourceIndex, destination: DestinationIndex) -> T {
        let index = flatten_index(self.num_destinations(), source, destination);
        debug_assert!(
            index < self.costs.len(),
            "called `Model::cost_unchecked` with flattened index out of bounds: the len is {} but the index is {}",
            self.costs.len(),
            index
        );

        unsafe { *self.costs.get_unchecked(index) }
    }

    /// Returns the supply quantity available at the given source.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    #[inline]
    pub fn supply(&self, source: SourceIndex) -> T {
        debug_assert!(
            source.get() < self.num_sources(),
            "called `Model::supply` with source index out of bounds: the len is {} but the index is {}",
            self.num_sources(),
            source.get()
        );

        self.supplies[source.get()]
    }

    /// Returns the demand quantity required at the given destination.
    ///
    /// # Panics
    ///
    /// Panics if `destination` is out of bounds.
    #[inline]
    pub fn demand(&self, destination: DestinationIndex) -> T {
        debug_assert!(
            destination.get() < self.num_destinations(),
            "called `Model::demand` with destination index out of bounds: the len is {} but the index is {}",
            self.num_destinations(),
            destination.get()
        );

        self.demands[destination.get()]
    }

    /// Returns the total quantity available across all sources.
    #[inline]
    pub fn total_supply(&self) -> T {
        self.supplies
            .iter()
            .fold(T::zero(), |acc, &supply| acc + supply)
    }

    /// Returns the total quantity required across all destinations.
    ///
    /// Equal to `total_supply()` for any `Model` that passed validation.
    #[inline]
    pub fn total_demand(&self) -> T {
        self.demands
            .iter()
            .fold(T::zero(), |acc, &demand| acc + demand)
    }
}

/// A mutable builder for `Model`.
///
/// All cells start at zero; fill in costs, supplies, and demands with the
/// setters, then call `build` to validate and freeze the instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelBuilder<T> {
    num_sources: usize,
    num_destinations: usize,
    costs: Vec<T>,
    supplies: Vec<T>,
    demands: Vec<T>,
}

impl<T> ModelBuilder<T>
where
    T: Signed + Copy + PartialOrd,
{
    /// Creates a new builder for a problem with the given dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use haulage_model::model::ModelBuilder;
    ///
    /// let builder = ModelBuilder::<i64>::new(2, 3);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_sources(), 2);
    /// assert_eq!(model.num_destinations(), 3);
    /// ```
    pub fn new(num_sources: usize, num_destinations: usize) -> Self {
        Self {
            num_sources,
            num_destinations,
            costs: vec![T::zero(); num_sources * num_destinations],
            supplies: vec![T::zero(); num_sources],
            demands: vec![T::zero(); num_destinations],
        }
    }

    /// Sets the unit shipping cost for the given source/destination pair.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `destination` is out of bounds.
    #[inline]
    pub fn set_cost(&mut self, source: SourceIndex, destination: DestinationIndex, cost: T) {
        assert!(
            source.get() < self.num_sources && destination.get() < self.num_destinations,
            "called `ModelBuilder::set_cost` with cell ({}, {}) out of bounds for a {}x{} problem",
            source.get(),
            destination.get(),
            self.num_sources,
            self.num_destinations
        );

        self.costs[flatten_index(self.num_destinations, source, destination)] = cost;
    }

    /// Sets the supply quantity available at the given source.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    #[inline]
    pub fn set_supply(&mut self, source: SourceIndex, supply: T) {
        assert!(
            source.get() < self.num_sources,
            "called `ModelBuilder::set_supply` with source index out of bounds: the len is {} but the index is {}",
            self.num_sources,
            source.get()
        );

        self.supplies[source.get()] = supply;
    }

    /// Sets the demand quantity required at the given destination.
    ///
    /// # Panics
    ///
    /// Panics if `destination` is out of bounds.
    #[inline]
    pub fn set_demand(&mut self, destination: DestinationIndex, demand: T) {
        assert!(
            destination.get() < self.num_destinations,
            "called `ModelBuilder::set_demand` with destination index out of bounds: the len is {} but the index is {}",
            self.num_destinations,
            destination.get()
        );

        self.demands[destination.get()] = demand;
    }

    /// Validates the collected data and builds the immutable `Model`.
    ///
    /// # Errors
    ///
    /// Returns a `ModelBuildError` when a dimension is zero, any entry is
    /// negative, or total supply differs from total demand.
    pub fn build(self) -> Result<Model<T>, ModelBuildError<T>> {
        if self.num_sources == 0 || self.num_destinations == 0 {
            return Err(ModelBuildError::InvalidDimensions);
        }

        for (index, &cost) in self.costs.iter().enumerate() {
            if cost < T::zero() {
                return Err(ModelBuildError::NegativeCost(
                    SourceIndex::new(index / self.num_destinations),
                    DestinationIndex::new(index % self.num_destinations),
                ));
            }
        }
        for (index, &supply) in self.supplies.iter().enumerate() {
            if supply < T::zero() {
                return Err(ModelBuildError::NegativeSupply(SourceIndex::new(index)));
            }
        }
        for (index, &demand) in self.demands.iter().enumerate() {
            if demand < T::zero() {
                return Err(ModelBuildError::NegativeDemand(DestinationIndex::new(index)));
            }
        }

        let total_supply = self
            .supplies
            .iter()
            .fold(T::zero(), |acc, &supply| acc + supply);
        let total_demand = self
            .demands
            .iter()
            .fold(T::zero(), |acc, &demand| acc + demand);
        if total_supply != total_demand {
            return Err(ModelBuildError::Unbalanced {
                total_supply,
                total_demand,
            });
        }

        Ok(Model {
            costs: self.costs,
            supplies: self.supplies,
            demands: self.demands,
        })
    }
}
