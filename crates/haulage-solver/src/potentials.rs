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

//! Dual potential computation for the MODI method.
//!
//! Every basic cell pins the equation `cost[r][c] = u[r] + v[c]`. With the
//! basis forming a spanning tree over rows and columns, fixing `u[0] = 0`
//! determines every other potential by propagation. The computation runs
//! full passes over the basic cells, deriving the unknown side of any cell
//! whose other side is already known, until a pass derives nothing new.
//! A potential left unknown afterwards means the basis does not span a
//! connected bipartite graph; the caller treats that as fatal.

use crate::{
    num::SolverNumeric,
    tableau::{Tableau, TableauCell},
};
use haulage_model::{
    index::{DestinationIndex, SourceIndex},
    model::Model,
};

/// Fully resolved dual potentials: one `u` per source row, one `v` per
/// destination column, with `u[0] = 0` as the reference.
///
/// Recomputed from the current basis every iteration; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Potentials<T> {
    u: Vec<T>,
    v: Vec<T>,
}

impl<T> Potentials<T>
where
    T: SolverNumeric,
{
    /// Returns the potential of the given source row.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    #[inline]
    pub fn source_potential(&self, source: SourceIndex) -> T {
        debug_assert!(
            source.get() < self.u.len(),
            "called `Potentials::source_potential` with source index out of bounds: the len is {} but the index is {}",
            self.u.len(),
            source.get()
        );

        self.u[source.get()]
    }

    /// Returns the potential of the given destination column.
    ///
    /// # Panics
    ///
    /// Panics if `destination` is out of bounds.
    #[inline]
    pub fn destination_potential(&self, destination: DestinationIndex) -> T {
        debug_assert!(
            destination.get() < self.v.len(),
            "called `Potentials::destination_potential` with destination index out of bounds: the len is {} but the index is {}",
            self.v.len(),
            destination.get()
        );

        self.v[destination.get()]
    }
}

/// Computes the dual potentials for the current basis.
///
/// Returns `None` when the basic cells do not connect every row and
/// column to the reference row — the disconnected-graph condition the
/// engine reports as a fatal failure.
pub fn compute_potentials<T>(model: &Model<T>, tableau: &Tableau<T>) -> Option<Potentials<T>>
where
    T: SolverNumeric,
{
    let num_sources = tableau.num_sources();
    let num_destinations = tableau.num_destinations();

    let mut u: Vec<Option<T>> = vec![None; num_sources];
    let mut v: Vec<Option<T>> = vec![None; num_destinations];
    u[0] = Some(T::zero());

    loop {
        let mut changed = false;
        for r in 0..num_sources {
            for c in 0..num_destinations {
                let source = SourceIndex::new(r);
                let destination = DestinationIndex::new(c);
                if !tableau.is_basic(TableauCell::new(source, destination)) {
                    continue;
                }

                match (u[r], v[c]) {
                    (Some(u_r), None) => {
                        v[c] = Some(model.cost(source, destination) - u_r);
                        changed = true;
                    }
                    (None, Some(v_c)) => {
                        u[r] = Some(model.cost(source, destination) - v_c);
                        changed = true;
                    }
                    _ => {}
                }
            }
        }
        if !changed {
            break;
        }
    }

    let u: Option<Vec<T>> = u.into_iter().collect();
    let v: Option<Vec<T>> = v.into_iter().collect();
    match (u, v) {
        (Some(u), Some(v)) => Some(Potentials { u, v }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::{CellState, TableauCell};
    use haulage_model::model::ModelBuilder;

    fn si(i: usize) -> SourceIndex {
        SourceIndex::new(i)
    }

    fn di(i: usize) -> DestinationIndex {
        DestinationIndex::new(i)
    }

    fn cell(r: usize, c: usize) -> TableauCell {
        TableauCell::new(si(r), di(c))
    }

    fn build_model(costs: &[&[i64]], supplies: &[i64], demands: &[i64]) -> Model<i64> {
        let mut builder = ModelBuilder::new(supplies.len(), demands.len());
        for (r, row) in costs.iter().enumerate() {
            for (c, &cost) in row.iter().enumerate() {
                builder.set_cost(si(r), di(c), cost);
            }
        }
        for (r, &supply) in supplies.iter().enumerate() {
            builder.set_supply(si(r), supply);
        }
        for (c, &demand) in demands.iter().enumerate() {
            builder.set_demand(di(c), demand);
        }
        builder.build().expect("test instance must be valid")
    }

    #[test]
    fn test_potentials_on_staircase_basis() {
        let model = build_model(
            &[&[3, 1, 7, 4], &[2, 6, 5, 9], &[8, 3, 3, 2]],
            &[300, 400, 500],
            &[250, 350, 400, 200],
        );

        let mut tableau = Tableau::new(3, 4);
        tableau.set_state(cell(0, 0), CellState::Flow(250));
        tableau.set_state(cell(0, 1), CellState::Flow(50));
        tableau.set_state(cell(1, 1), CellState::Flow(300));
        tableau.set_state(cell(1, 2), CellState::Flow(100));
        tableau.set_state(cell(2, 2), CellState::Flow(300));
        tableau.set_state(cell(2, 3), CellState::Flow(200));

        let potentials = compute_potentials(&model, &tableau).expect("basis spans the graph");

        assert_eq!(potentials.source_potential(si(0)), 0);
        assert_eq!(potentials.source_potential(si(1)), 5);
        assert_eq!(potentials.source_potential(si(2)), 3);
        assert_eq!(potentials.destination_potential(di(0)), 3);
        assert_eq!(potentials.destination_potential(di(1)), 1);
        assert_eq!(potentials.destination_potential(di(2)), 0);
        assert_eq!(potentials.destination_potential(di(3)), -1);
    }

    #[test]
    fn test_every_basic_cell_satisfies_cost_equation() {
        let model = build_model(&[&[4, 6], &[5, 3]], &[20, 30], &[25, 25]);

        let mut tableau = Tableau::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(20));
        tableau.set_state(cell(1, 0), CellState::Flow(5));
        tableau.set_state(cell(1, 1), CellState::Flow(25));

        let potentials = compute_potentials(&model, &tableau).expect("basis spans the graph");

        for r in 0..2 {
            for c in 0..2 {
                if tableau.is_basic(cell(r, c)) {
                    assert_eq!(
                        model.cost(si(r), di(c)),
                        potentials.source_potential(si(r))
                            + potentials.destination_potential(di(c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_placeholders_participate_in_propagation() {
        let model = build_model(&[&[1, 3], &[4, 2]], &[10, 10], &[10, 10]);

        let mut tableau = Tableau::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(0, 1), CellState::Placeholder);
        tableau.set_state(cell(1, 1), CellState::Flow(10));

        let potentials = compute_potentials(&model, &tableau).expect("basis spans the graph");

        assert_eq!(potentials.destination_potential(di(0)), 1);
        // Derived through the placeholder at (0, 1).
        assert_eq!(potentials.destination_potential(di(1)), 3);
        assert_eq!(potentials.source_potential(si(1)), -1);
    }

    #[test]
    fn test_disconnected_basis_yields_none() {
        let model = build_model(
            &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]],
            &[5, 5, 5],
            &[5, 5, 5],
        );

        // Rows 1/2 and column 2 are unreachable from u[0]: three basic
        // cells in a 3x3 grid that do not touch the reference component.
        let mut tableau = Tableau::new(3, 3);
        tableau.set_state(cell(0, 0), CellState::Flow(5));
        tableau.set_state(cell(0, 1), CellState::Placeholder);
        tableau.set_state(cell(2, 2), CellState::Flow(5));

        assert_eq!(compute_potentials(&model, &tableau), None);
    }
}
