use rand::rngs::StdRng;

use crate::{
    generators::{carve_between, get_neighbors, pick},
    maze::Grid,
    step::StepEmitter,
};

pub fn recursive_backtrack(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    // Initialize the starting point
    let start = (1, 1);
    grid.carve(start);
    grid[start].is_visited = true;

    // The stack will keep only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        // Visited flags, not walls, decide: the end cell is carved before we start
        let neighbors = get_neighbors(cell, grid)
            .filter(|&c| !grid[c].is_visited)
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let neighbor = pick(&neighbors, rng);
            carve_between(grid, cell, neighbor);
            grid[neighbor].is_visited = true;
            steps.emit_animated(grid);

            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
}
