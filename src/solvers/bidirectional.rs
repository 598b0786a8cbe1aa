use std::collections::VecDeque;

use super::{SolveResult, commit_frame, finish};
use crate::{
    maze::{Coord, Grid, neighbors4},
    step::StepEmitter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::Start => Side::End,
            Side::End => Side::Start,
        }
    }
}

/// One BFS frontier and its queue.
struct Frontier {
    side: Side,
    queue: VecDeque<Coord>,
}

/// Bidirectional BFS: one dequeue from the start side, then one from the end
/// side, per iteration and per frame. Stops as soon as an expanded cell touches
/// a cell discovered by the other side.
pub fn solve_bidirectional(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let mut owner: Vec<Option<Side>> = vec![None; grid.cell_count()];
    owner[grid.ravel_index(start)] = Some(Side::Start);
    owner[grid.ravel_index(end)] = Some(Side::End);
    grid[start].is_visited = true;
    grid[end].is_visited = true;

    let mut frontiers = [
        Frontier {
            side: Side::Start,
            queue: VecDeque::from([start]),
        },
        Frontier {
            side: Side::End,
            queue: VecDeque::from([end]),
        },
    ];
    let mut visited = 0;

    while frontiers.iter().all(|f| !f.queue.is_empty()) {
        let mut frame = Vec::with_capacity(2);

        for frontier in frontiers.iter_mut() {
            let Some(current) = frontier.queue.pop_front() else {
                continue;
            };
            grid[current].is_current = true;
            frame.push(current);
            visited += 1;

            let neighbors = neighbors4(current, grid).collect::<Vec<_>>();
            for neighbor in neighbors {
                let neighbor_idx = grid.ravel_index(neighbor);
                match owner[neighbor_idx] {
                    Some(side) if side == frontier.side.other() => {
                        // Paths met
                        grid[neighbor].is_current = true;
                        frame.push(neighbor);
                        match frontier.side {
                            Side::Start => splice(grid, current, neighbor),
                            Side::End => splice(grid, neighbor, current),
                        }
                        return finish(grid, end, &frame, steps, find_optimal, visited);
                    }
                    Some(_) => {}
                    None => {
                        owner[neighbor_idx] = Some(frontier.side);
                        grid[neighbor].is_visited = true;
                        grid[neighbor].parent = Some(current);
                        frontier.queue.push_back(neighbor);
                    }
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

/// Joins the two search trees across the edge `start_side -> end_side`.
///
/// End-side parents point toward the end; they are reversed from `end_side` up to
/// the end cell so that the whole path can be walked back from the end.
fn splice(grid: &mut Grid, start_side: Coord, end_side: Coord) {
    let mut prev = start_side;
    let mut node = Some(end_side);

    while let Some(coord) = node {
        let next = grid[coord].parent;
        grid[coord].parent = Some(prev);
        if grid[coord].is_end {
            break;
        }
        prev = coord;
        node = next;
    }
}
