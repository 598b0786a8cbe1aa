use std::{cmp::Reverse, collections::BinaryHeap};

use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, heuristic, neighbors4},
    step::StepEmitter,
};

/// Greedy best-first search, also used for plain best-first.
///
/// The open set is ranked by the heuristic alone, ties going to the cell that
/// entered first. Accumulated distance is ignored, so the path found is not
/// necessarily the shortest.
pub fn solve_greedy(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let mut open: BinaryHeap<Reverse<(usize, u64, usize)>> = BinaryHeap::new();
    let mut in_open = vec![false; grid.cell_count()];
    let mut next_seq: u64 = 0;

    let start_idx = grid.ravel_index(start);
    grid[start].heuristic = heuristic(start, end);
    open.push(Reverse((grid[start].heuristic, next_seq, start_idx)));
    in_open[start_idx] = true;
    let mut visited = 0;

    while let Some(Reverse((_, _, idx))) = open.pop() {
        in_open[idx] = false;
        let current = grid.unravel_index(idx);
        if grid[current].is_visited {
            continue;
        }

        grid[current].is_visited = true;
        grid[current].is_current = true;
        visited += 1;
        let frame = [current];

        if grid[current].is_end {
            return finish(grid, current, &frame, steps, find_optimal, visited);
        }

        let neighbors = neighbors4(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors {
            let neighbor_idx = grid.ravel_index(neighbor);
            if grid[neighbor].is_visited || in_open[neighbor_idx] {
                continue;
            }
            let h = heuristic(neighbor, end);
            grid[neighbor].parent = Some(current);
            grid[neighbor].heuristic = h;
            next_seq += 1;
            open.push(Reverse((h, next_seq, neighbor_idx)));
            in_open[neighbor_idx] = true;
        }

        commit_frame(grid, steps, &frame);
    }

    SolveResult {
        visited,
        path_length: 0,
    }
}
