use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, neighbors4},
    step::StepEmitter,
};

/// Depth-first search. A cell may sit on the stack several times; only its first
/// pop counts.
pub fn solve_dfs(
    grid: &mut Grid,
    start: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let mut stack = vec![start];
    let mut visited = 0;

    while let Some(current) = stack.pop() {
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

        let neighbors = neighbors4(current, grid)
            .filter(|&n| !grid[n].is_visited)
            .collect::<Vec<_>>();
        for neighbor in neighbors {
            grid[neighbor].parent = Some(current);
            stack.push(neighbor);
        }

        commit_frame(grid, steps, &frame);
    }

    SolveResult {
        visited,
        path_length: 0,
    }
}
