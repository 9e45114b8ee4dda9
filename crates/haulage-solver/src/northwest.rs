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

//! North-West Corner Method: initial feasible basis construction.
//!
//! Walks a cursor from the top-left cell, allocating as much as the row's
//! remaining supply and the column's remaining demand allow, then advances
//! to the next row when the supply is exhausted, else to the next column.
//! The result satisfies every row and column sum exactly on a balanced
//! instance, with no optimality guarantee. The cursor-walk basis is
//! singly connected, which the dual-potential phase relies on.

use crate::{
    num::SolverNumeric,
    tableau::{CellState, Tableau, TableauCell},
};
use haulage_model::{
    index::{DestinationIndex, SourceIndex},
    model::Model,
};

/// Constructs the initial feasible allocation for the given model.
///
/// The cursor advances to the next row when the current row's supply is
/// exhausted; on simultaneous exhaustion the row advance wins, which keeps
/// the basis admissible under the standard NWCM tie-break. At most
/// `rows + cols - 1` cells receive a positive quantity.
pub fn northwest_corner<T>(model: &Model<T>) -> Tableau<T>
where
    T: SolverNumeric,
{
    let num_sources = model.num_sources();
    let num_destinations = model.num_destinations();

    let mut tableau = Tableau::new(num_sources, num_destinations);
    let mut remaining_supply: Vec<T> = model.supplies().to_vec();
    let mut remaining_demand: Vec<T> = model.demands().to_vec();

    let mut r = SourceIndex::new(0);
    let mut c = DestinationIndex::new(0);
    while r.get() < num_sources && c.get() < num_destinations {
        let supply = remaining_supply[r.get()];
        let demand = remaining_demand[c.get()];
        let quantity = if supply < demand { supply } else { demand };

        if quantity > T::zero() {
            tableau.set_state(TableauCell::new(r, c), CellState::Flow(quantity));
        }
        remaining_supply[r.get()] = supply - quantity;
        remaining_demand[c.get()] = demand - quantity;

        if remaining_supply[r.get()] == T::zero() {
            r += 1;
        } else if remaining_demand[c.get()] == T::zero() {
            c += 1;
        }
    }

    tableau
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn assert_feasible(tableau: &Tableau<i64>, model: &Model<i64>) {
        for r in 0..model.num_sources() {
            assert_eq!(
                tableau.row_shipped(si(r)),
                model.supply(si(r)),
                "row {} does not ship its full supply",
                r
            );
        }
        for c in 0..model.num_destinations() {
            assert_eq!(
                tableau.column_shipped(di(c)),
                model.demand(di(c)),
                "column {} does not receive its full demand",
                c
            );
        }
    }

    #[test]
    fn test_two_by_two_reference_allocation() {
        let model = build_model(&[&[4, 6], &[5, 3]], &[20, 30], &[25, 25]);
        let tableau = northwest_corner(&model);

        assert_eq!(tableau.flow(cell(0, 0)), 20);
        assert_eq!(tableau.flow(cell(0, 1)), 0);
        assert_eq!(tableau.flow(cell(1, 0)), 5);
        assert_eq!(tableau.flow(cell(1, 1)), 25);
        assert_eq!(tableau.total_cost(&model), 180);
        assert_feasible(&tableau, &model);
    }

    #[test]
    fn test_three_by_four_staircase() {
        let model = build_model(
            &[&[3, 1, 7, 4], &[2, 6, 5, 9], &[8, 3, 3, 2]],
            &[300, 400, 500],
            &[250, 350, 400, 200],
        );
        let tableau = northwest_corner(&model);

        assert_eq!(tableau.flow(cell(0, 0)), 250);
        assert_eq!(tableau.flow(cell(0, 1)), 50);
        assert_eq!(tableau.flow(cell(1, 1)), 300);
        assert_eq!(tableau.flow(cell(1, 2)), 100);
        assert_eq!(tableau.flow(cell(2, 2)), 300);
        assert_eq!(tableau.flow(cell(2, 3)), 200);
        assert_eq!(tableau.basic_count(), 6);
        assert_eq!(tableau.total_cost(&model), 4400);
        assert_feasible(&tableau, &model);
    }

    #[test]
    fn test_single_row_fills_all_columns() {
        let model = build_model(&[&[1, 2]], &[10], &[4, 6]);
        let tableau = northwest_corner(&model);

        assert_eq!(tableau.flow(cell(0, 0)), 4);
        assert_eq!(tableau.flow(cell(0, 1)), 6);
        assert_eq!(tableau.basic_count(), 2);
        assert_feasible(&tableau, &model);
    }

    #[test]
    fn test_simultaneous_exhaustion_advances_row_first() {
        // Supply of row 0 and demand of column 0 run out together; the
        // cursor must step to row 1 and allocate nothing more in column 0.
        let model = build_model(&[&[1, 3], &[4, 2]], &[10, 10], &[10, 10]);
        let tableau = northwest_corner(&model);

        assert_eq!(tableau.flow(cell(0, 0)), 10);
        assert_eq!(tableau.flow(cell(0, 1)), 0);
        assert_eq!(tableau.flow(cell(1, 0)), 0);
        assert_eq!(tableau.flow(cell(1, 1)), 10);
        // Degenerate: only two basic cells for a required basis of three.
        assert_eq!(tableau.basic_count(), 2);
        assert_feasible(&tableau, &model);
    }

    #[test]
    fn test_float_instance() {
        let mut builder = ModelBuilder::<f64>::new(2, 2);
        builder.set_cost(si(0), di(0), 4.0);
        builder.set_cost(si(0), di(1), 6.0);
        builder.set_cost(si(1), di(0), 5.0);
        builder.set_cost(si(1), di(1), 3.0);
        builder.set_supply(si(0), 20.0);
        builder.set_supply(si(1), 30.0);
        builder.set_demand(di(0), 25.0);
        builder.set_demand(di(1), 25.0);
        let model = builder.build().expect("balanced float instance");

        let tableau = northwest_corner(&model);
        assert_eq!(tableau.flow(cell(0, 0)), 20.0);
        assert_eq!(tableau.flow(cell(1, 0)), 5.0);
        assert_eq!(tableau.flow(cell(1, 1)), 25.0);
        assert_eq!(tableau.total_cost(&model), 180.0);
    }
}
