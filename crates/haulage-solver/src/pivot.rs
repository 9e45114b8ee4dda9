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

//! Entering-variable selection and closed-loop reallocation.
//!
//! One MODI pivot has three steps. Selection scans the empty cells for
//! the most negative reduced cost `d = cost - (u + v)`. Loop discovery
//! runs a depth-first search from the entering cell over the basic cells,
//! with moves alternating strictly between same-column and same-row
//! steps, until the path closes back on the entering cell. The shift then
//! moves `theta` units around the loop: even positions receive, odd
//! positions donate, and `theta` is the smallest donating quantity so no
//! allocation goes negative.
//!
//! The first move out of the entering cell is vertical, and the loop may
//! only close on a horizontal move: the closing edge must be
//! perpendicular to the opening edge, or the entering cell's column sums
//! would not be preserved. Alternation makes the path length even at
//! every closing opportunity.

use crate::{
    num::SolverNumeric,
    potentials::Potentials,
    tableau::{CellState, Tableau, TableauCell},
};
use fixedbitset::FixedBitSet;
use haulage_model::{
    index::{DestinationIndex, SourceIndex},
    model::Model,
};
use smallvec::{smallvec, SmallVec};

/// Inline capacity for loop paths; most loops in practice are short
/// rectangles or near-rectangles.
const LOOP_INLINE_CELLS: usize = 8;

/// An alternating closed loop through basic cells, starting at the
/// entering cell.
///
/// Cell positions alternate roles: even indices (the entering cell first)
/// receive flow, odd indices donate it. The length is always even and at
/// least four.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedLoop {
    cells: SmallVec<[TableauCell; LOOP_INLINE_CELLS]>,
}

impl ClosedLoop {
    /// Returns the loop cells in path order, entering cell first.
    #[inline]
    pub fn cells(&self) -> &[TableauCell] {
        &self.cells
    }

    /// Returns the entering cell the loop was grown from.
    #[inline]
    pub fn entering(&self) -> TableauCell {
        self.cells[0]
    }

    /// Returns the number of cells on the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the loop is empty. A discovered loop never is; this
    /// exists for completeness of the container API.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl std::fmt::Display for ClosedLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedLoop[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// The direction of the next move in the loop search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MoveOrientation {
    /// Move within the current column to another row.
    Vertical,
    /// Move within the current row to another column.
    Horizontal,
}

#[inline(always)]
fn flatten_cell(num_destinations: usize, cell: TableauCell) -> usize {
    cell.source().get() * num_destinations + cell.destination().get()
}

/// Selects the entering cell: the empty cell with the most negative
/// reduced cost `cost - (u + v)`, ties broken by row-major scan order.
///
/// Returns `None` when no reduced cost is below the numeric tolerance,
/// i.e. the current allocation is optimal. Placeholders are basis members
/// and are never candidates.
pub fn select_entering<T>(
    model: &Model<T>,
    tableau: &Tableau<T>,
    potentials: &Potentials<T>,
) -> Option<(TableauCell, T)>
where
    T: SolverNumeric,
{
    let mut best: Option<(TableauCell, T)> = None;
    for r in 0..tableau.num_sources() {
        for c in 0..tableau.num_destinations() {
            let cell = TableauCell::new(SourceIndex::new(r), DestinationIndex::new(c));
            if !tableau.state(cell).is_empty() {
                continue;
            }

            let implied = potentials.source_potential(cell.source())
                + potentials.destination_potential(cell.destination());
            let reduced_cost = model.cost(cell.source(), cell.destination()) - implied;
            match best {
                Some((_, incumbent)) if reduced_cost >= incumbent => {}
                _ => best = Some((cell, reduced_cost)),
            }
        }
    }

    match best {
        Some((_, reduced_cost)) if reduced_cost >= -T::TOLERANCE => None,
        other => other,
    }
}

/// Searches for an alternating closed loop from the entering cell through
/// basic cells.
///
/// Returns `None` if no loop exists — structurally impossible for a valid
/// basic feasible solution, but surfaced rather than assumed away.
pub fn find_closed_loop<T>(tableau: &Tableau<T>, entering: TableauCell) -> Option<ClosedLoop>
where
    T: SolverNumeric,
{
    let mut path: SmallVec<[TableauCell; LOOP_INLINE_CELLS]> = smallvec![entering];
    let mut visited = FixedBitSet::with_capacity(tableau.num_sources() * tableau.num_destinations());
    visited.insert(flatten_cell(tableau.num_destinations(), entering));

    if extend_path(tableau, MoveOrientation::Vertical, &mut path, &mut visited) {
        Some(ClosedLoop { cells: path })
    } else {
        None
    }
}

fn extend_path<T>(
    tableau: &Tableau<T>,
    orientation: MoveOrientation,
    path: &mut SmallVec<[TableauCell; LOOP_INLINE_CELLS]>,
    visited: &mut FixedBitSet,
) -> bool
where
    T: SolverNumeric,
{
    let current = path[path.len() - 1];
    match orientation {
        MoveOrientation::Vertical => {
            for r in 0..tableau.num_sources() {
                if r == current.source().get() {
                    continue;
                }
                let candidate = TableauCell::new(SourceIndex::new(r), current.destination());
                if descend(tableau, candidate, MoveOrientation::Horizontal, path, visited) {
                    return true;
                }
            }
        }
        MoveOrientation::Horizontal => {
            for c in 0..tableau.num_destinations() {
                if c == current.destination().get() {
                    continue;
                }
                let candidate = TableauCell::new(current.source(), DestinationIndex::new(c));
                if candidate == path[0] && path.len() >= 3 {
                    return true;
                }
                if descend(tableau, candidate, MoveOrientation::Vertical, path, visited) {
                    return true;
                }
            }
        }
    }
    false
}

fn descend<T>(
    tableau: &Tableau<T>,
    candidate: TableauCell,
    next_orientation: MoveOrientation,
    path: &mut SmallVec<[TableauCell; LOOP_INLINE_CELLS]>,
    visited: &mut FixedBitSet,
) -> bool
where
    T: SolverNumeric,
{
    let index = flatten_cell(tableau.num_destinations(), candidate);
    if !tableau.is_basic(candidate) || visited.contains(index) {
        return false;
    }

    visited.insert(index);
    path.push(candidate);
    if extend_path(tableau, next_orientation, path, visited) {
        return true;
    }
    path.pop();
    visited.set(index, false);
    false
}

/// Shifts flow around the loop by the maximum amount that keeps every
/// allocation non-negative, and returns that amount (`theta`).
///
/// With a placeholder among the donating cells `theta` is zero and the
/// pivot is purely structural: the entering cell joins the basis as a
/// placeholder and the donating placeholders leave, real flows untouched.
/// Otherwise every donor at exactly `theta` drops out of the basis; a
/// following degeneracy repair restores the count if several do at once.
pub fn shift_flow<T>(tableau: &mut Tableau<T>, closed_loop: &ClosedLoop) -> T
where
    T: SolverNumeric,
{
    let cells = closed_loop.cells();
    debug_assert!(
        cells.len() >= 4 && cells.len() % 2 == 0,
        "called `shift_flow` with a malformed loop of {} cells",
        cells.len()
    );

    let mut theta = tableau.state(cells[1]).flow_or_zero();
    for i in (3..cells.len()).step_by(2) {
        let quantity = tableau.state(cells[i]).flow_or_zero();
        if quantity < theta {
            theta = quantity;
        }
    }

    if theta > T::zero() {
        for (i, &cell) in cells.iter().enumerate() {
            if i % 2 == 0 {
                let quantity = tableau.state(cell).flow_or_zero() + theta;
                tableau.set_state(cell, CellState::Flow(quantity));
            } else {
                let remaining = tableau.state(cell).flow_or_zero() - theta;
                if remaining == T::zero() {
                    tableau.set_state(cell, CellState::Empty);
                } else {
                    tableau.set_state(cell, CellState::Flow(remaining));
                }
            }
        }
    } else {
        tableau.set_state(closed_loop.entering(), CellState::Placeholder);
        for i in (1..cells.len()).step_by(2) {
            if tableau.state(cells[i]).is_placeholder() {
                tableau.set_state(cells[i], CellState::Empty);
            }
        }
    }

    theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potentials::compute_potentials;
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

    fn staircase_tableau() -> Tableau<i64> {
        let mut tableau = Tableau::new(3, 4);
        tableau.set_state(cell(0, 0), CellState::Flow(250));
        tableau.set_state(cell(0, 1), CellState::Flow(50));
        tableau.set_state(cell(1, 1), CellState::Flow(300));
        tableau.set_state(cell(1, 2), CellState::Flow(100));
        tableau.set_state(cell(2, 2), CellState::Flow(300));
        tableau.set_state(cell(2, 3), CellState::Flow(200));
        tableau
    }

    fn staircase_model() -> Model<i64> {
        build_model(
            &[&[3, 1, 7, 4], &[2, 6, 5, 9], &[8, 3, 3, 2]],
            &[300, 400, 500],
            &[250, 350, 400, 200],
        )
    }

    #[test]
    fn test_select_entering_picks_most_negative_reduced_cost() {
        let model = staircase_model();
        let tableau = staircase_tableau();
        let potentials = compute_potentials(&model, &tableau).expect("basis spans the graph");

        let (entering, reduced_cost) =
            select_entering(&model, &tableau, &potentials).expect("an improving cell exists");

        // Reduced costs: (1,0) = -6, (2,1) = -1, all others non-negative.
        assert_eq!(entering, cell(1, 0));
        assert_eq!(reduced_cost, -6);
    }

    #[test]
    fn test_select_entering_returns_none_at_optimum() {
        let model = build_model(&[&[4, 6], &[5, 3]], &[20, 30], &[25, 25]);
        let mut tableau = Tableau::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(20));
        tableau.set_state(cell(1, 0), CellState::Flow(5));
        tableau.set_state(cell(1, 1), CellState::Flow(25));
        let potentials = compute_potentials(&model, &tableau).expect("basis spans the graph");

        assert_eq!(select_entering(&model, &tableau, &potentials), None);
    }

    #[test]
    fn test_find_closed_loop_rectangle() {
        let tableau = staircase_tableau();

        let closed_loop = find_closed_loop(&tableau, cell(1, 0)).expect("loop exists");

        assert_eq!(
            closed_loop.cells(),
            &[cell(1, 0), cell(0, 0), cell(0, 1), cell(1, 1)]
        );
        assert_eq!(closed_loop.entering(), cell(1, 0));
        assert_eq!(closed_loop.len(), 4);
    }

    #[test]
    fn test_find_closed_loop_through_placeholder() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(0, 1), CellState::Placeholder);
        tableau.set_state(cell(1, 1), CellState::Flow(10));

        let closed_loop = find_closed_loop(&tableau, cell(1, 0)).expect("loop exists");
        assert_eq!(
            closed_loop.cells(),
            &[cell(1, 0), cell(0, 0), cell(0, 1), cell(1, 1)]
        );
    }

    #[test]
    fn test_find_closed_loop_none_without_cycle() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));

        assert_eq!(find_closed_loop(&tableau, cell(1, 1)), None);
    }

    #[test]
    fn test_shift_flow_moves_theta_and_empties_binding_donor() {
        let model = staircase_model();
        let mut tableau = staircase_tableau();
        let cost_before = tableau.total_cost(&model);

        let closed_loop = find_closed_loop(&tableau, cell(1, 0)).expect("loop exists");
        let theta = shift_flow(&mut tableau, &closed_loop);

        assert_eq!(theta, 250);
        assert_eq!(tableau.flow(cell(1, 0)), 250);
        assert!(tableau.state(cell(0, 0)).is_empty());
        assert_eq!(tableau.flow(cell(0, 1)), 300);
        assert_eq!(tableau.flow(cell(1, 1)), 50);

        // Reduced cost -6 over 250 units: cost drops by 1500.
        assert_eq!(tableau.total_cost(&model), cost_before - 1500);

        // Row and column sums are preserved by the shift.
        for r in 0..3 {
            assert_eq!(tableau.row_shipped(si(r)), model.supply(si(r)));
        }
        for c in 0..4 {
            assert_eq!(tableau.column_shipped(di(c)), model.demand(di(c)));
        }
    }

    #[test]
    fn test_shift_flow_receiving_placeholder_becomes_real_flow() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(0, 1), CellState::Placeholder);
        tableau.set_state(cell(1, 1), CellState::Flow(10));

        // Loop [(1,0), (0,0), (0,1), (1,1)]: the placeholder sits at an
        // even position, so it receives and both donors carry 10 units.
        let closed_loop = find_closed_loop(&tableau, cell(1, 0)).expect("loop exists");
        let theta = shift_flow(&mut tableau, &closed_loop);

        assert_eq!(theta, 10);
        assert_eq!(tableau.flow(cell(1, 0)), 10);
        assert_eq!(tableau.flow(cell(0, 1)), 10);
        assert!(tableau.state(cell(0, 0)).is_empty());
        assert!(tableau.state(cell(1, 1)).is_empty());
        assert_eq!(tableau.basic_count(), 2);
    }

    #[test]
    fn test_shift_flow_degenerate_pivot_swaps_placeholder() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(1, 0), CellState::Flow(10));
        tableau.set_state(cell(1, 1), CellState::Placeholder);

        // Loop [(0,1), (1,1), (1,0), (0,0)]: the placeholder at (1, 1) is
        // a donor, forcing theta to zero.
        let closed_loop = find_closed_loop(&tableau, cell(0, 1)).expect("loop exists");
        assert_eq!(
            closed_loop.cells(),
            &[cell(0, 1), cell(1, 1), cell(1, 0), cell(0, 0)]
        );
        let theta = shift_flow(&mut tableau, &closed_loop);

        assert_eq!(theta, 0);
        assert!(tableau.state(cell(0, 1)).is_placeholder());
        assert!(tableau.state(cell(1, 1)).is_empty());
        // Real flows are untouched by a structural pivot.
        assert_eq!(tableau.flow(cell(0, 0)), 10);
        assert_eq!(tableau.flow(cell(1, 0)), 10);
        assert_eq!(tableau.basic_count(), 3);
    }

    #[test]
    fn test_closed_loop_display() {
        let tableau = staircase_tableau();
        let closed_loop = find_closed_loop(&tableau, cell(1, 0)).expect("loop exists");
        assert_eq!(
            format!("{}", closed_loop),
            "ClosedLoop[(1, 0) -> (0, 0) -> (0, 1) -> (1, 1)]"
        );
    }
}
