use std::time::{Duration, Instant};

use super::{SolveResult, Solver, solve_maze};
use crate::{
    maze::Grid,
    step::{NoSteps, StepEmitter},
};

/// Statistics of one solver in a side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub solver: Solver,
    pub result: SolveResult,
    pub elapsed: Duration,
    pub total_cells: usize,
}

/// Runs every solver on its own copy of `grid`, each in its own thread.
///
/// The copies share nothing, so the runs cannot observe each other. Results come
/// back in the order of `solvers`.
pub fn compare_solvers(grid: &Grid, solvers: &[Solver], find_optimal: bool) -> Vec<Comparison> {
    std::thread::scope(|scope| {
        let handles = solvers
            .iter()
            .map(|&solver| {
                let mut copy = grid.clone();
                scope.spawn(move || {
                    let started = Instant::now();
                    let mut sink = NoSteps;
                    let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);
                    let result = solve_maze(&mut copy, solver, &mut steps, find_optimal);
                    Comparison {
                        solver,
                        result,
                        elapsed: started.elapsed(),
                        total_cells: copy.cell_count(),
                    }
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Solver thread panicked"))
            .inspect(|c| {
                tracing::info!(
                    "[compare] {}: visited {}, path length {}, {:?}",
                    c.solver,
                    c.result.visited,
                    c.result.path_length,
                    c.elapsed
                )
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};

    #[test]
    fn test_compare_matches_individual_runs() {
        let mut grid = Grid::new(15, 15);
        let mut sink = NoSteps;
        let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);
        generate_maze(&mut grid, Generator::Prim, &mut steps, Some(3));
        let pristine = grid.clone();

        let comparisons = compare_solvers(&grid, &Solver::ALL, true);
        assert_eq!(comparisons.len(), Solver::ALL.len());
        // The caller's grid is never touched
        assert_eq!(grid, pristine);

        for comparison in comparisons {
            let mut copy = grid.clone();
            let mut sink = NoSteps;
            let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);
            let expected = solve_maze(&mut copy, comparison.solver, &mut steps, true);
            assert_eq!(comparison.result, expected);
            assert_eq!(comparison.total_cells, 15 * 15);
        }
    }

    #[test]
    fn test_compare_empty_list() {
        let grid = Grid::new(5, 5);
        assert!(compare_solvers(&grid, &[], false).is_empty());
    }
}
