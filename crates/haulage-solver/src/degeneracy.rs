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

//! Degeneracy repair: restore the basis to `rows + cols - 1` members.
//!
//! A degenerate basis under-determines the dual potentials. Repair
//! converts just enough empty cells into placeholders, scanning row-major
//! and stopping as soon as the count is met. The scan order makes no
//! attempt to avoid placements that would leave the dual graph
//! disconnected; such a basis is caught by the potential phase and
//! surfaced as a fatal outcome rather than silently repaired differently.

use crate::{
    num::SolverNumeric,
    tableau::{CellState, Tableau, TableauCell},
};
use haulage_model::index::{DestinationIndex, SourceIndex};

/// Inserts placeholders until the basis has `rows + cols - 1` members.
///
/// Returns the number of placeholders added. Idempotent: a tableau whose
/// basis is already full size is left untouched.
pub fn repair_degeneracy<T>(tableau: &mut Tableau<T>) -> usize
where
    T: SolverNumeric,
{
    let required = tableau.required_basis_size();
    let mut count = tableau.basic_count();
    if count >= required {
        return 0;
    }

    let mut added = 0;
    'scan: for r in 0..tableau.num_sources() {
        for c in 0..tableau.num_destinations() {
            let cell = TableauCell::new(SourceIndex::new(r), DestinationIndex::new(c));
            if tableau.state(cell).is_empty() {
                tableau.set_state(cell, CellState::Placeholder);
                count += 1;
                added += 1;
                if count == required {
                    break 'scan;
                }
            }
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(r: usize, c: usize) -> TableauCell {
        TableauCell::new(SourceIndex::new(r), DestinationIndex::new(c))
    }

    #[test]
    fn test_repair_fills_to_required_size_in_row_major_order() {
        // Diagonal flows only: two basic cells, three required.
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(1, 1), CellState::Flow(10));

        let added = repair_degeneracy(&mut tableau);

        assert_eq!(added, 1);
        assert_eq!(tableau.basic_count(), 3);
        // First empty cell in row-major order is (0, 1).
        assert!(tableau.state(cell(0, 1)).is_placeholder());
        assert!(tableau.state(cell(1, 0)).is_empty());
    }

    #[test]
    fn test_repair_is_idempotent() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(10));
        tableau.set_state(cell(1, 1), CellState::Flow(10));

        assert_eq!(repair_degeneracy(&mut tableau), 1);
        let snapshot = tableau.clone();

        assert_eq!(repair_degeneracy(&mut tableau), 0);
        assert_eq!(tableau, snapshot);
    }

    #[test]
    fn test_repair_leaves_full_basis_untouched() {
        let mut tableau = Tableau::<i64>::new(2, 2);
        tableau.set_state(cell(0, 0), CellState::Flow(20));
        tableau.set_state(cell(1, 0), CellState::Flow(5));
        tableau.set_state(cell(1, 1), CellState::Flow(25));

        let snapshot = tableau.clone();
        assert_eq!(repair_degeneracy(&mut tableau), 0);
        assert_eq!(tableau, snapshot);
    }

    #[test]
    fn test_repair_adds_several_placeholders_when_badly_short() {
        // A single basic cell in a 3x3 tableau needs four more members.
        let mut tableau = Tableau::<i64>::new(3, 3);
        tableau.set_state(cell(1, 1), CellState::Flow(9));

        let added = repair_degeneracy(&mut tableau);

        assert_eq!(added, 4);
        assert_eq!(tableau.basic_count(), 5);
        // Row-major first-fit: (0,0), (0,1), (0,2), (1,0).
        assert!(tableau.state(cell(0, 0)).is_placeholder());
        assert!(tableau.state(cell(0, 1)).is_placeholder());
        assert!(tableau.state(cell(0, 2)).is_placeholder());
        assert!(tableau.state(cell(1, 0)).is_placeholder());
        assert!(tableau.state(cell(1, 2)).is_empty());
    }
}
