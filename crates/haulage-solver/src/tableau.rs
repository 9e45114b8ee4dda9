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

//! # Allocation Tableau
//!
//! The mutable allocation grid shared by the solver phases. Each cell is
//! in one of three tagged states:
//!
//! - `Empty`: not part of the current basis.
//! - `Flow(q)`: a real shipment of `q > 0` units.
//! - `Placeholder`: a basis member carrying no quantity, inserted by
//!   degeneracy repair so the dual system stays determined.
//!
//! The tagged representation replaces the classic trick of storing an
//! "epsilon" quantity like `1e-10` in degenerate cells. A placeholder is a
//! basis member by construction, not by comparing floats against a magic
//! constant, and it can never leak into cost sums or reported quantities.

use crate::num::SolverNumeric;
use haulage_model::{
    index::{DestinationIndex, SourceIndex},
    model::Model,
    plan::ShipmentPlan,
};

#[inline(always)]
fn flatten_index(
    num_destinations: usize,
    source: SourceIndex,
    destination: DestinationIndex,
) -> usize {
    source.get() * num_destinations + destination.get()
}

/// A (source, destination) coordinate in the tableau.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TableauCell {
    source: SourceIndex,
    destination: DestinationIndex,
}

impl TableauCell {
    /// Creates a new cell coordinate.
    #[inline]
    pub const fn new(source: SourceIndex, destination: DestinationIndex) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the source (row) index of this cell.
    #[inline]
    pub const fn source(&self) -> SourceIndex {
        self.source
    }

    /// Returns the destination (column) index of this cell.
    #[inline]
    pub const fn destination(&self) -> DestinationIndex {
        self.destination
    }
}

impl std::fmt::Display for TableauCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source.get(), self.destination.get())
    }
}

/// The state of a single tableau cell.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum CellState<T> {
    /// The cell is not part of the basis.
    #[default]
    Empty,
    /// The cell ships a strictly positive quantity.
    Flow(T),
    /// The cell is a basis member with no quantity (degeneracy marker).
    Placeholder,
}

impl<T> CellState<T>
where
    T: SolverNumeric,
{
    /// Checks whether this cell belongs to the current basis.
    #[inline]
    pub fn is_basic(&self) -> bool {
        matches!(self, CellState::Flow(_) | CellState::Placeholder)
    }

    /// Checks whether this cell is empty (non-basic).
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Checks whether this cell is a degeneracy placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CellState::Placeholder)
    }

    /// Returns the shipped quantity, treating `Empty` and `Placeholder`
    /// as zero.
    #[inline]
    pub fn flow_or_zero(&self) -> T {
        match self {
            CellState::Flow(quantity) => *quantity,
            CellState::Empty | CellState::Placeholder => T::zero(),
        }
    }
}

/// The mutable allocation grid for one solve.
///
/// Owned exclusively by the engine for the duration of a solve call;
/// phases receive it by reference and return typed results instead of
/// mutating hidden shared state.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<T> {
    num_sources: usize,
    num_destinations: usize,
    cells: Vec<CellState<T>>,
}

impl<T> Tableau<T>
where
    T: SolverNumeric,
{
    /// Creates a tableau with every cell `Empty`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(num_sources: usize, num_destinations: usize) -> Self {
        assert!(
            num_sources > 0 && num_destinations > 0,
            "called `Tableau::new` with zero dimension: {}x{}",
            num_sources,
            num_destinations
        );

        Self {
            num_sources,
            num_destinations,
            cells: vec![CellState::Empty; num_sources * num_destinations],
        }
    }

    /// Returns the number of supply sources (rows).
    #[inline]
    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    /// Returns the number of demand destinations (columns).
    #[inline]
    pub fn num_destinations(&self) -> usize {
        self.num_destinations
    }

    /// Returns the basis size a non-degenerate balanced instance requires,
    /// `rows + cols - 1` (the spanning tree size of the transportation
    /// graph).
    #[inline]
    pub fn required_basis_size(&self) -> usize {
        self.num_sources + self.num_destinations - 1
    }

    /// Returns the state of the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn state(&self, cell: TableauCell) -> CellState<T> {
        debug_assert!(
            cell.source().get() < self.num_sources
                && cell.destination().get() < self.num_destinations,
            "called `Tableau::state` with cell {} out of bounds for a {}x{} tableau",
            cell,
            self.num_sources,
            self.num_destinations
        );

        self.cells[flatten_index(self.num_destinations, cell.source(), cell.destination())]
    }

    /// Replaces the state of the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn set_state(&mut self, cell: TableauCell, state: CellState<T>) {
        debug_assert!(
            cell.source().get() < self.num_sources
                && cell.destination().get() < self.num_destinations,
            "called `Tableau::set_state` with cell {} out of bounds for a {}x{} tableau",
            cell,
            self.num_sources,
            self.num_destinations
        );

        let index = flatten_index(self.num_destinations, cell.source(), cell.destination());
        self.cells[index] = state;
    }

    /// Returns the shipped quantity at the given cell (zero for empty
    /// cells and placeholders).
    #[inline]
    pub fn flow(&self, cell: TableauCell) -> T {
        self.state(cell).flow_or_zero()
    }

    /// Checks whether the given cell belongs to the current basis.
    #[inline]
    pub fn is_basic(&self, cell: TableauCell) -> bool {
        self.state(cell).is_basic()
    }

    /// Counts the basis members (flows and placeholders).
    #[inline]
    pub fn basic_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_basic()).count()
    }

    /// Returns the total quantity shipped out of the given source row.
    pub fn row_shipped(&self, source: SourceIndex) -> T {
        let mut total = T::zero();
        for c in 0..self.num_destinations {
            total = total + self.flow(TableauCell::new(source, DestinationIndex::new(c)));
        }
        total
    }

    /// Returns the total quantity shipped into the given destination column.
    pub fn column_shipped(&self, destination: DestinationIndex) -> T {
        let mut total = T::zero();
        for r in 0..self.num_sources {
            total = total + self.flow(TableauCell::new(SourceIndex::new(r), destination));
        }
        total
    }

    /// Returns the total shipping cost of the current allocation.
    /// Placeholders contribute nothing.
    ///
    /// # Panics
    ///
    /// Panics if the model dimensions do not match the tableau.
    pub fn total_cost(&self, model: &Model<T>) -> T {
        debug_assert!(
            model.num_sources() == self.num_sources
                && model.num_destinations() == self.num_destinations,
            "called `Tableau::total_cost` with a {}x{} model on a {}x{} tableau",
            model.num_sources(),
            model.num_destinations(),
            self.num_sources,
            self.num_destinations
        );

        let mut total = T::zero();
        for r in 0..self.num_sources {
            for c in 0..self.num_destinations {
                let cell = TableauCell::new(SourceIndex::new(r), DestinationIndex::new(c));
                if let CellState::Flow(quantity) = self.state(cell) {
                    total = total + quantity * model.cost(cell.source(), cell.destination());
                }
            }
        }
        total
    }

    /// Freezes the current allocation into a `ShipmentPlan`, resolving
    /// placeholders to zero.
    pub fn to_plan(&self, model: &Model<T>) -> ShipmentPlan<T> {
        let quantities = self.cells.iter().map(|state| state.flow_or_zero()).collect();
        ShipmentPlan::new(self.total_cost(model), quantities, self.num_destinations)
    }
}
