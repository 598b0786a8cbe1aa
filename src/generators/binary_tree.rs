use rand::rngs::StdRng;

use crate::{
    generators::{lattice_cells, pick},
    maze::Grid,
    step::StepEmitter,
};

/// Every cell opens toward north or west. The result leans diagonally, with a
/// clear corridor along the top row and the left column.
pub fn binary_tree(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    for (row, col) in lattice_cells(grid) {
        grid.carve((row, col));

        let mut walls = Vec::with_capacity(2);
        if row > 1 {
            walls.push((row - 1, col)); // North
        }
        if col > 1 {
            walls.push((row, col - 1)); // West
        }

        if !walls.is_empty() {
            grid.carve(pick(&walls, rng));
            steps.emit_animated(grid);
        }
    }
}
