use std::collections::VecDeque;

use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, neighbors4},
    step::StepEmitter,
};

/// Level-synchronous breadth-first search: a whole level is one frame. Cells are
/// marked visited when enqueued, counted when dequeued.
pub fn solve_bfs(
    grid: &mut Grid,
    start: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let mut queue = VecDeque::from([start]);
    grid[start].is_visited = true;
    let mut visited = 0;

    while !queue.is_empty() {
        let level_size = queue.len();
        let mut frame = Vec::with_capacity(level_size);

        for _ in 0..level_size {
            let Some(current) = queue.pop_front() else {
                break;
            };
            grid[current].is_current = true;
            frame.push(current);
            visited += 1;

            if grid[current].is_end {
                return finish(grid, current, &frame, steps, find_optimal, visited);
            }

            let neighbors = neighbors4(current, grid).collect::<Vec<_>>();
            for neighbor in neighbors {
                let cell = &mut grid[neighbor];
                if !cell.is_visited {
                    cell.is_visited = true;
                    cell.parent = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }

        commit_frame(grid, steps, &frame);
    }

    SolveResult {
        visited,
        path_length: 0,
    }
}
