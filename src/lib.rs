//! Maze generation and path search over a 2-D cell grid.
//!
//! Nine generators carve an all-wall [`Grid`] into a maze, seven solvers search it
//! for a route from start to end. Both report their progress frame by frame to a
//! [`StepSink`] so a front end can animate them.

pub mod app;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod step;

#[cfg(test)]
mod test_utils;

use std::time::Duration;

pub use generators::{Generator, generate_maze};
pub use maze::{Cell, Coord, Grid};
pub use solvers::{SolveResult, Solver, solve_maze};
pub use step::{NoSteps, StepEmitter, StepSink};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAlgorithmError {
    #[error("unknown maze generator '{0}'")]
    UnknownGenerator(String),
    #[error("unknown maze solver '{0}'")]
    UnknownSolver(String),
}

/// Carves a maze into `grid` with OS randomness, publishing frames to `sink`.
///
/// With a nonzero `interval` every carving action is emitted and followed by a
/// pause of that length; with a zero interval only the finished maze is emitted.
pub fn generate(grid: &mut Grid, generator: Generator, sink: &mut dyn StepSink, interval: Duration) {
    let mut steps = StepEmitter::new(sink, interval);
    generate_maze(grid, generator, &mut steps, None);
}

/// Searches `grid` from start to end, publishing one frame per processed batch of
/// cells to `sink`, each followed by a pause of `interval`.
pub fn solve(
    grid: &mut Grid,
    solver: Solver,
    sink: &mut dyn StepSink,
    interval: Duration,
    find_optimal: bool,
) -> SolveResult {
    let mut steps = StepEmitter::new(sink, interval);
    solve_maze(grid, solver, &mut steps, find_optimal)
}
