use rand::rngs::StdRng;

use crate::{
    generators::{carve_between, get_neighbors, lattice_cells, pick},
    maze::{Coord, Grid},
    step::StepEmitter,
};

pub fn hunt_and_kill(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let cells = lattice_cells(grid);
    cells.iter().for_each(|&cell| grid.carve(cell));

    let mut current = Some(pick(&cells, rng));
    if let Some(start) = current {
        grid[start].is_visited = true;
    }

    while let Some(cell) = current {
        let unvisited = get_neighbors(cell, grid)
            .filter(|&c| !grid[c].is_visited)
            .collect::<Vec<_>>();

        current = if !unvisited.is_empty() {
            // Kill: walk on into a random unvisited neighbor
            let next = pick(&unvisited, rng);
            carve_between(grid, cell, next);
            grid[next].is_visited = true;
            steps.emit_animated(grid);
            Some(next)
        } else {
            hunt(grid, &cells, rng).inspect(|_| steps.emit_animated(grid))
        };
    }
}

/// Scans row-major for the first unvisited cell next to the visited region and
/// links it to a random visited neighbor.
fn hunt(grid: &mut Grid, cells: &[Coord], rng: &mut StdRng) -> Option<Coord> {
    for &cell in cells {
        if grid[cell].is_visited {
            continue;
        }
        let visited = get_neighbors(cell, grid)
            .filter(|&c| grid[c].is_visited)
            .collect::<Vec<_>>();

        if !visited.is_empty() {
            let neighbor = pick(&visited, rng);
            carve_between(grid, neighbor, cell);
            grid[cell].is_visited = true;
            return Some(cell);
        }
    }
    None
}
