use std::{cmp::Reverse, collections::BinaryHeap};

use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, neighbors4},
    step::StepEmitter,
};

/// Dijkstra's algorithm with unit edge costs.
///
/// Always expands the unvisited cell with the smallest distance. Among equal
/// distances the cell that got its distance earliest goes first, and cells
/// reached from the same expansion go in row-major order. Outdated heap entries
/// are skipped when popped.
pub fn solve_dijkstra(
    grid: &mut Grid,
    start: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    // Priority queue for Dijkstra's algorithm
    // Using Reverse to turn the max-heap into a min-heap, keyed by
    // (distance, expansion that set the distance, index)
    let mut pq: BinaryHeap<Reverse<(usize, usize, usize)>> = BinaryHeap::new();
    grid[start].distance = 0;
    pq.push(Reverse((0, 0, grid.ravel_index(start))));
    let mut visited = 0;

    while let Some(Reverse((distance, _, idx))) = pq.pop() {
        let current = grid.unravel_index(idx);
        if grid[current].is_visited || grid[current].distance != distance {
            continue;
        }

        grid[current].is_visited = true;
        grid[current].is_current = true;
        visited += 1;
        let frame = [current];

        if grid[current].is_end {
            return finish(grid, current, &frame, steps, find_optimal, visited);
        }

        let new_distance = distance + 1; // Uniform cost for each step
        let neighbors = neighbors4(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors {
            let neighbor_idx = grid.ravel_index(neighbor);
            let cell = &mut grid[neighbor];
            if !cell.is_visited && new_distance < cell.distance {
                cell.distance = new_distance;
                cell.parent = Some(current);
                pq.push(Reverse((new_distance, visited, neighbor_idx)));
            }
        }

        commit_frame(grid, steps, &frame);
    }

    // Every remaining cell is unreachable
    SolveResult {
        visited,
        path_length: 0,
    }
}
