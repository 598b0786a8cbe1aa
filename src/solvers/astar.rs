use std::{cmp::Reverse, collections::BinaryHeap};

use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, heuristic, neighbors4},
    step::StepEmitter,
};

/// Open-set entry ranked by `f = g + h`, then by the order cells first entered
/// the open set.
type OpenEntry = Reverse<(usize, u64, usize)>;

/// A* search with the Manhattan heuristic.
pub fn solve_astar(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    // Presence set and first-insertion order of the open set, by raveled index
    let mut open_seq: Vec<Option<u64>> = vec![None; grid.cell_count()];
    let mut next_seq = 0;

    let start_idx = grid.ravel_index(start);
    grid[start].distance = 0;
    grid[start].heuristic = heuristic(start, end);
    open.push(Reverse((grid[start].heuristic, next_seq, start_idx)));
    open_seq[start_idx] = Some(next_seq);
    next_seq += 1;
    let mut visited = 0;

    while let Some(Reverse((f, _, idx))) = open.pop() {
        let current = grid.unravel_index(idx);
        let cell = grid[current];
        if cell.is_visited || cell.distance + cell.heuristic != f {
            continue;
        }
        open_seq[idx] = None;

        grid[current].is_visited = true;
        grid[current].is_current = true;
        visited += 1;
        let frame = [current];

        if cell.is_end {
            return finish(grid, current, &frame, steps, find_optimal, visited);
        }

        let tentative = cell.distance + 1;
        let neighbors = neighbors4(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors {
            let neighbor_idx = grid.ravel_index(neighbor);
            let h = heuristic(neighbor, end);
            let cell = &mut grid[neighbor];
            if cell.is_visited || tentative >= cell.distance {
                continue;
            }
            cell.parent = Some(current);
            cell.distance = tentative;
            cell.heuristic = h;

            // Already open cells keep their place among equal f values
            let seq = *open_seq[neighbor_idx].get_or_insert_with(|| {
                next_seq += 1;
                next_seq - 1
            });
            open.push(Reverse((tentative + h, seq, neighbor_idx)));
        }

        commit_frame(grid, steps, &frame);
    }

    SolveResult {
        visited,
        path_length: 0,
    }
}
