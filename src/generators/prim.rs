use rand::{Rng, rngs::StdRng};

use crate::{
    generators::get_neighbors,
    maze::{Coord, Grid},
    step::StepEmitter,
};

/// Frontier wall: the wall cell and the lattice cell behind it.
#[derive(Clone, Copy)]
struct Frontier {
    wall: Coord,
    cell: Coord,
}

pub fn randomized_prim(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let mut in_maze = vec![false; grid.cell_count()];

    // Initialize the starting point
    let start = (1, 1);
    grid.carve(start);
    in_maze[grid.ravel_index(start)] = true;

    let mut frontiers = Vec::new();
    add_frontiers(grid, start, &in_maze, &mut frontiers);

    while !frontiers.is_empty() {
        // Uniform over the current frontier, so order does not matter
        let idx = rng.random_range(0..frontiers.len());
        let Frontier { wall, cell } = frontiers.swap_remove(idx);

        let cell_idx = grid.ravel_index(cell);
        if in_maze[cell_idx] {
            continue;
        }

        grid.carve(wall);
        grid.carve(cell);
        in_maze[cell_idx] = true;
        add_frontiers(grid, cell, &in_maze, &mut frontiers);
        steps.emit_animated(grid);
    }
}

/// Queues the walls between `from` and each lattice neighbor outside the maze.
fn add_frontiers(grid: &Grid, from: Coord, in_maze: &[bool], frontiers: &mut Vec<Frontier>) {
    frontiers.extend(
        get_neighbors(from, grid)
            .filter(|&cell| !in_maze[grid.ravel_index(cell)])
            .map(|cell| Frontier {
                wall: ((from.0 + cell.0) / 2, (from.1 + cell.1) / 2),
                cell,
            }),
    );
}
