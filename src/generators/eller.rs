use std::collections::HashSet;

use rand::{Rng, rngs::StdRng};

use crate::{
    generators::{lattice_cols, lattice_rows},
    maze::Grid,
    step::StepEmitter,
};

/// Eller's algorithm: one row at a time, tracking only the current row's sets.
pub fn eller(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let cols = lattice_cols(grid).collect::<Vec<_>>();
    let rows = lattice_rows(grid).collect::<Vec<_>>();
    let Some(&last_row) = rows.last() else {
        return;
    };

    let mut next_set_id = 0;
    // Sets carried down from the row above
    let mut carried: Vec<Option<usize>> = vec![None; cols.len()];

    for &row in &rows {
        let mut sets = carried
            .iter()
            .map(|carried_set| {
                carried_set.unwrap_or_else(|| {
                    next_set_id += 1;
                    next_set_id - 1
                })
            })
            .collect::<Vec<_>>();
        cols.iter().for_each(|&col| grid.carve((row, col)));

        // Join horizontally; the last row must join everything left apart
        let is_last = row == last_row;
        for i in 0..cols.len().saturating_sub(1) {
            if sets[i] != sets[i + 1] && (is_last || rng.random_bool(0.5)) {
                grid.carve((row, cols[i] + 1));
                let (keep, merged) = (sets[i], sets[i + 1]);
                sets.iter_mut()
                    .filter(|s| **s == merged)
                    .for_each(|s| *s = keep);
                steps.emit_animated(grid);
            }
        }

        if is_last {
            break;
        }

        // Every set goes down at least once
        carried = vec![None; cols.len()];
        let mut connected = HashSet::new();
        for (i, &col) in cols.iter().enumerate() {
            if !connected.contains(&sets[i]) || rng.random_bool(0.5) {
                grid.carve((row + 1, col));
                carried[i] = Some(sets[i]);
                connected.insert(sets[i]);
                steps.emit_animated(grid);
            }
        }
    }
}
