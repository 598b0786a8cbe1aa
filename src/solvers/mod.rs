mod astar;
mod bfs;
mod bidirectional;
mod compare;
mod dfs;
mod dijkstra;
mod greedy;

use astar::solve_astar;
use bfs::solve_bfs;
use bidirectional::solve_bidirectional;
pub use compare::{Comparison, compare_solvers};
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;
use greedy::solve_greedy;

use crate::{
    ParseAlgorithmError,
    maze::{Coord, Grid},
    step::StepEmitter,
};

/// Outcome of a search. A `path_length` of 0 means no path was found; `visited`
/// is reported either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveResult {
    pub visited: usize,
    pub path_length: usize,
}

impl SolveResult {
    pub fn is_found(&self) -> bool {
        self.path_length > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
    Greedy,
    Bidirectional,
    BestFirst,
}

impl Solver {
    pub const ALL: [Solver; 7] = [
        Solver::Dfs,
        Solver::Bfs,
        Solver::Dijkstra,
        Solver::AStar,
        Solver::Greedy,
        Solver::Bidirectional,
        Solver::BestFirst,
    ];

    /// Short name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Solver::Dfs => "dfs",
            Solver::Bfs => "bfs",
            Solver::Dijkstra => "dijkstra",
            Solver::AStar => "astar",
            Solver::Greedy => "greedy",
            Solver::Bidirectional => "bidirectional",
            Solver::BestFirst => "bestfirst",
        }
    }

    /// Whether the reported path is always a shortest one.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            Solver::Bfs | Solver::Dijkstra | Solver::AStar | Solver::Bidirectional
        )
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Greedy => write!(f, "Greedy Best-First Search"),
            Solver::Bidirectional => write!(f, "Bidirectional BFS"),
            Solver::BestFirst => write!(f, "Best-First Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.key() == s)
            .ok_or_else(|| ParseAlgorithmError::UnknownSolver(s.to_string()))
    }
}

/// Searches for a path from the start cell to the end cell.
///
/// The search state is cleared first. Every processed batch of cells is emitted
/// as one frame. With `find_optimal` the found path is marked on the grid one
/// frame per step, otherwise its length is only counted. The flag never changes
/// which cells are explored.
pub fn solve_maze(
    grid: &mut Grid,
    solver: Solver,
    steps: &mut StepEmitter,
    find_optimal: bool,
) -> SolveResult {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        tracing::warn!("[solve] grid has no start or end cell, nothing to search");
        return SolveResult::default();
    };

    grid.reset_search_state(false);

    let result = match solver {
        Solver::Dfs => solve_dfs(grid, start, steps, find_optimal),
        Solver::Bfs => solve_bfs(grid, start, steps, find_optimal),
        Solver::Dijkstra => solve_dijkstra(grid, start, steps, find_optimal),
        Solver::AStar => solve_astar(grid, start, end, steps, find_optimal),
        Solver::Greedy | Solver::BestFirst => solve_greedy(grid, start, end, steps, find_optimal),
        Solver::Bidirectional => solve_bidirectional(grid, start, end, steps, find_optimal),
    };

    tracing::debug!(
        "[solve] {}: visited {}, path length {}",
        solver,
        result.visited,
        result.path_length
    );
    result
}

/// Emits the frame, then clears the current marker on its cells.
fn commit_frame(grid: &mut Grid, steps: &mut StepEmitter, frame: &[Coord]) {
    if frame.is_empty() {
        return;
    }
    steps.emit(grid);
    frame.iter().for_each(|&c| grid[c].is_current = false);
}

/// Closes the search at `found`: emits its frame and measures the path.
fn finish(
    grid: &mut Grid,
    found: Coord,
    frame: &[Coord],
    steps: &mut StepEmitter,
    find_optimal: bool,
    visited: usize,
) -> SolveResult {
    commit_frame(grid, steps, frame);
    let path_length = if find_optimal {
        reconstruct_path(grid, found, steps)
    } else {
        path_length(grid, found)
    };
    SolveResult {
        visited,
        path_length,
    }
}

/// Walks the parent chain from `from` back to the start, marking every cell but
/// the end as path and emitting one frame per step. Returns the number of steps.
fn reconstruct_path(grid: &mut Grid, from: Coord, steps: &mut StepEmitter) -> usize {
    let mut current = Some(from);
    let mut length = 0;

    // A chain never holds more links than the grid has cells
    while let Some(coord) = current.filter(|_| length < grid.cell_count()) {
        let cell = &mut grid[coord];
        if cell.is_start {
            break;
        }
        if !cell.is_end {
            cell.is_path = true;
        }
        cell.is_current = false;
        current = cell.parent;
        steps.emit(grid);
        length += 1;
    }
    length
}

/// Same walk as `reconstruct_path`, without touching the grid.
fn path_length(grid: &Grid, from: Coord) -> usize {
    let mut current = Some(from);
    let mut length = 0;

    while let Some(coord) = current.filter(|_| length < grid.cell_count()) {
        if grid[coord].is_start {
            break;
        }
        current = grid[coord].parent;
        length += 1;
    }
    length
}
