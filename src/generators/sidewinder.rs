use rand::{Rng, rngs::StdRng};

use crate::{
    generators::{lattice_cols, lattice_rows, pick},
    maze::Grid,
    step::StepEmitter,
};

pub fn sidewinder(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let cols = lattice_cols(grid).collect::<Vec<_>>();

    for row in lattice_rows(grid) {
        let mut run = Vec::new();

        for (i, &col) in cols.iter().enumerate() {
            grid.carve((row, col));
            run.push(col);

            // The first row has nothing to the north, so it is one long run
            let has_east = i + 1 < cols.len();
            let carve_east = has_east && (row == 1 || rng.random_bool(0.5));

            if carve_east {
                grid.carve((row, col + 1));
            } else {
                let run_col = pick(&run, rng);
                if row > 1 {
                    grid.carve((row - 1, run_col));
                }
                run.clear();
            }
            steps.emit_animated(grid);
        }
    }
}
