use rand::rngs::StdRng;

use crate::{
    generators::{carve_between, get_neighbors, lattice_cells, pick},
    maze::{Coord, Grid},
    step::StepEmitter,
};

/// Wilson's algorithm: loop-erased random walks until every lattice cell joins
/// the maze. Produces a uniformly random spanning tree.
pub fn wilson(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    let cells = lattice_cells(grid);
    cells.iter().for_each(|&cell| grid.carve(cell));

    let mut in_maze = vec![false; grid.cell_count()];
    let first = pick(&cells, rng);
    in_maze[grid.ravel_index(first)] = true;

    let mut outside = cells
        .iter()
        .copied()
        .filter(|&c| !in_maze[grid.ravel_index(c)])
        .collect::<Vec<_>>();

    while !outside.is_empty() {
        let walk = loop_erased_walk(grid, pick(&outside, rng), &in_maze, rng);

        // The last cell of the walk already belongs to the maze
        for pair in walk.windows(2) {
            carve_between(grid, pair[0], pair[1]);
            in_maze[grid.ravel_index(pair[0])] = true;
            steps.emit_animated(grid);
        }

        outside.retain(|&c| !in_maze[grid.ravel_index(c)]);
    }
}

/// Random walk from `from` until it hits the maze. Whenever the walk steps onto a
/// cell it already holds, everything after that first occurrence is erased.
fn loop_erased_walk(grid: &Grid, from: Coord, in_maze: &[bool], rng: &mut StdRng) -> Vec<Coord> {
    let mut path = vec![from];
    let mut current = from;

    while !in_maze[grid.ravel_index(current)] {
        let neighbors = get_neighbors(current, grid).collect::<Vec<_>>();
        let next = pick(&neighbors, rng);

        match path.iter().position(|&c| c == next) {
            Some(loop_idx) => path.truncate(loop_idx + 1),
            None => path.push(next),
        }
        current = next;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_loop_erased_walk_is_simple() {
        let grid = Grid::new(11, 11);
        let mut in_maze = vec![false; grid.cell_count()];
        in_maze[grid.ravel_index((9, 9))] = true;
        let mut rng = get_rng(Some(9));

        for _ in 0..10 {
            let walk = loop_erased_walk(&grid, (1, 1), &in_maze, &mut rng);
            assert_eq!(walk.first(), Some(&(1, 1)));
            assert_eq!(walk.last(), Some(&(9, 9)));
            // No repeated cell and every step is one lattice move
            let mut seen = walk.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), walk.len());
            assert!(
                walk.windows(2)
                    .all(|p| p[0].0.abs_diff(p[1].0) + p[0].1.abs_diff(p[1].1) == 2)
            );
        }
    }
}
