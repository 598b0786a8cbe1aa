use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod eller;
mod hunt_and_kill;
mod kruskal;
mod prim;
mod recur_backtrack;
mod repair;
mod sidewinder;
mod wilson;

use aldous_broder::aldous_broder;
use binary_tree::binary_tree;
use eller::eller;
use hunt_and_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
pub use repair::ensure_path;
use sidewinder::sidewinder;
use wilson::wilson;

use crate::{
    ParseAlgorithmError,
    maze::{Coord, Grid},
    step::StepEmitter,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    Kruskal,
    Prim,
    Wilson,
    Eller,
    BinaryTree,
    Sidewinder,
    AldousBroder,
    HuntAndKill,
}

impl Generator {
    pub const ALL: [Generator; 9] = [
        Generator::RecurBacktrack,
        Generator::Kruskal,
        Generator::Prim,
        Generator::Wilson,
        Generator::Eller,
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::AldousBroder,
        Generator::HuntAndKill,
    ];

    /// Short name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "recursive",
            Generator::Kruskal => "kruskal",
            Generator::Prim => "prim",
            Generator::Wilson => "wilson",
            Generator::Eller => "eller",
            Generator::BinaryTree => "binarytree",
            Generator::Sidewinder => "sidewinder",
            Generator::AldousBroder => "aldousbroder",
            Generator::HuntAndKill => "huntandkill",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| ParseAlgorithmError::UnknownGenerator(s.to_string()))
    }
}

/// Carves a maze into `grid` in place.
///
/// The grid is first turned back into walls (start and end stay carved), then the
/// chosen algorithm runs, then start and end are forcibly connected if the
/// algorithm left them apart. One final frame with the finished maze is always
/// emitted.
pub fn generate_maze(
    grid: &mut Grid,
    generator: Generator,
    steps: &mut StepEmitter,
    seed: Option<u64>,
) {
    let mut rng = get_rng(seed);
    tracing::debug!(
        "[generate] {} on {}x{} grid (seed {:?})",
        generator,
        grid.rows(),
        grid.cols(),
        seed
    );

    grid.fill_walls();
    steps.emit_animated(grid);

    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, steps, &mut rng),
        Generator::Kruskal => randomized_kruskal(grid, steps, &mut rng),
        Generator::Prim => randomized_prim(grid, steps, &mut rng),
        Generator::Wilson => wilson(grid, steps, &mut rng),
        Generator::Eller => eller(grid, steps, &mut rng),
        Generator::BinaryTree => binary_tree(grid, steps, &mut rng),
        Generator::Sidewinder => sidewinder(grid, steps, &mut rng),
        Generator::AldousBroder => aldous_broder(grid, steps, &mut rng),
        Generator::HuntAndKill => hunt_and_kill(grid, steps, &mut rng),
    }

    // Visited flags are generation-scoped
    grid.reset_search_state(false);

    if ensure_path(grid) {
        tracing::warn!("[generate] {} left start and end apart, corridor carved", generator);
    }
    steps.emit(grid);
}

/// Odd-coordinate interior rows, top to bottom.
fn lattice_rows(grid: &Grid) -> impl Iterator<Item = usize> + use<> {
    (1..grid.rows() - 1).step_by(2)
}

/// Odd-coordinate interior columns, left to right.
fn lattice_cols(grid: &Grid) -> impl Iterator<Item = usize> + use<> {
    (1..grid.cols() - 1).step_by(2)
}

/// All lattice cells in row-major order.
fn lattice_cells(grid: &Grid) -> Vec<Coord> {
    lattice_rows(grid)
        .flat_map(|row| lattice_cols(grid).map(move |col| (row, col)))
        .collect()
}

/// Get lattice neighbors of a cell.
/// A neighbor is a cell two steps away in the cardinal directions (up, down, left,
/// right) that stays strictly inside the border.
fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + use<> {
    let (row, col) = coord;
    let (rows, cols) = (grid.rows(), grid.cols());
    [
        (row.wrapping_sub(2), col),
        (row.saturating_add(2), col),
        (row, col.wrapping_sub(2)),
        (row, col.saturating_add(2)),
    ]
    .into_iter()
    .filter(move |&(r, c)| r >= 1 && r < rows - 1 && c >= 1 && c < cols - 1)
}

/// Carves the wall cell between two lattice neighbors, and `to` itself.
fn carve_between(grid: &mut Grid, from: Coord, to: Coord) {
    let wall = ((from.0 + to.0) / 2, (from.1 + to.1) / 2);
    grid.carve(wall);
    grid.carve(to);
}

/// Picks a uniformly random element of a non-empty slice.
fn pick<T: Copy>(items: &[T], rng: &mut StdRng) -> T {
    items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        step::{NoSteps, StepEmitter},
        test_utils::{assert_perfect, bfs_distance},
    };
    use std::time::Duration;

    fn generate(rows: usize, cols: usize, generator: Generator, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols);
        let mut sink = NoSteps;
        let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);
        generate_maze(&mut grid, generator, &mut steps, Some(seed));
        grid
    }

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(7, 7);
        let neighbors = get_neighbors((3, 3), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 3), (5, 3), (3, 1), (3, 5)]);
        let corner = get_neighbors((1, 1), &grid).collect::<Vec<_>>();
        assert_eq!(corner, vec![(3, 1), (1, 3)]);
    }

    #[test]
    fn test_lattice_cells() {
        let grid = Grid::new(5, 7);
        assert_eq!(
            lattice_cells(&grid),
            vec![(1, 1), (1, 3), (1, 5), (3, 1), (3, 3), (3, 5)]
        );
        // Even dimensions never put a lattice cell next to the border wall
        let grid = Grid::new(6, 6);
        assert_eq!(lattice_cells(&grid), vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
    }

    #[test]
    fn test_parse_generator() {
        assert_eq!("huntandkill".parse::<Generator>(), Ok(Generator::HuntAndKill));
        for generator in Generator::ALL {
            assert_eq!(generator.key().parse::<Generator>(), Ok(generator));
        }
        assert!("maze".parse::<Generator>().is_err());
    }

    #[test]
    fn test_every_generator_connects_start_and_end() {
        for generator in Generator::ALL {
            for seed in 0..20 {
                let grid = generate(15, 21, generator, seed);
                assert!(
                    bfs_distance(&grid).is_some(),
                    "{} with seed {} left start and end apart",
                    generator,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_every_generator_produces_a_perfect_maze() {
        for generator in Generator::ALL {
            for seed in 0..20 {
                let grid = generate(11, 13, generator, seed);
                assert_perfect(&grid, &format!("{} (seed {})", generator, seed));
            }
        }
    }

    #[test]
    fn test_border_stays_wall() {
        for generator in Generator::ALL {
            let grid = generate(9, 9, generator, 7);
            assert!(
                grid.cells()
                    .filter(|c| grid.is_boundary(c.coord()))
                    .all(|c| c.is_wall),
                "{} carved into the border",
                generator
            );
        }
    }

    #[test]
    fn test_generation_clears_search_state() {
        for generator in Generator::ALL {
            let grid = generate(9, 11, generator, 3);
            assert!(grid.cells().all(|c| !c.is_visited && !c.is_current && !c.is_path));
            assert_eq!(grid.start(), Some((1, 1)));
            assert_eq!(grid.end(), Some((7, 9)));
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        for generator in Generator::ALL {
            assert_eq!(
                generate(11, 11, generator, 42),
                generate(11, 11, generator, 42),
                "{} is not deterministic under a fixed seed",
                generator
            );
        }
    }

    #[test]
    fn test_even_dimensions_still_solvable() {
        for generator in Generator::ALL {
            let grid = generate(10, 12, generator, 5);
            assert!(bfs_distance(&grid).is_some());
        }
    }

    #[test]
    fn test_frames_only_when_animated() {
        let count_frames = |interval: Duration| {
            let mut grid = Grid::new(7, 7);
            let mut count = 0;
            {
                let mut sink = |_: &Grid| count += 1;
                let mut steps = StepEmitter::new(&mut sink, interval);
                generate_maze(&mut grid, Generator::Kruskal, &mut steps, Some(1));
            }
            count
        };

        // Only the final frame
        assert_eq!(count_frames(Duration::ZERO), 1);
        // Initial frame, one per carved wall (9 lattice cells -> 8 walls), final frame
        assert_eq!(count_frames(Duration::from_micros(1)), 10);
    }
}
