use rand::rngs::StdRng;

use crate::{
    generators::{carve_between, get_neighbors, lattice_cells, pick},
    maze::Grid,
    step::StepEmitter,
};

pub fn aldous_broder(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let cells = lattice_cells(grid);
    cells.iter().for_each(|&cell| grid.carve(cell));

    let mut current = pick(&cells, rng);
    grid[current].is_visited = true;
    let mut unvisited = cells.len() - 1;

    while unvisited > 0 {
        let neighbors = get_neighbors(current, grid).collect::<Vec<_>>();
        let next = pick(&neighbors, rng);

        // The walk goes on through visited cells, it just carves nothing there
        if !grid[next].is_visited {
            carve_between(grid, current, next);
            grid[next].is_visited = true;
            unvisited -= 1;
            steps.emit_animated(grid);
        }
        current = next;
    }
}
