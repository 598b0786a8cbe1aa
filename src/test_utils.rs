use std::collections::VecDeque;

use crate::maze::{Coord, Grid, heuristic, neighbors4};

/// Shortest start-to-end distance, computed independently of the solvers.
pub fn bfs_distance(grid: &Grid) -> Option<usize> {
    let (start, end) = (grid.start()?, grid.end()?);
    let mut dist = vec![None; grid.cell_count()];
    dist[grid.ravel_index(start)] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let d = dist[grid.ravel_index(current)]?;
        if current == end {
            return Some(d);
        }
        for neighbor in neighbors4(current, grid) {
            let idx = grid.ravel_index(neighbor);
            if dist[idx].is_none() {
                dist[idx] = Some(d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Checks that the parent chain from the end is a wall-free walk of unit steps
/// that reaches the start in exactly `length` steps.
pub fn assert_valid_path(grid: &Grid, length: usize) {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        panic!("grid has no endpoints");
    };
    let mut current: Coord = end;
    for step in 0..length {
        assert!(!grid[current].is_wall, "path crosses a wall at {:?}", current);
        let Some(parent) = grid[current].parent else {
            panic!("path breaks off at {:?} after {} steps", current, step);
        };
        assert_eq!(heuristic(current, parent), 1, "path jumps {:?} -> {:?}", current, parent);
        current = parent;
    }
    assert_eq!(current, start, "path of length {} does not reach the start", length);
}

/// Checks that the carved cells form a spanning tree of the odd lattice: every
/// lattice cell is open and exactly one fewer connector than lattice cells is open.
pub fn assert_perfect(grid: &Grid, label: &str) {
    let interior = |c: Coord| !grid.is_boundary(c);
    let lattice = grid
        .cells()
        .filter(|c| interior(c.coord()) && c.row % 2 == 1 && c.col % 2 == 1)
        .collect::<Vec<_>>();
    let connectors = grid
        .cells()
        .filter(|c| interior(c.coord()) && (c.row % 2 == 1) != (c.col % 2 == 1))
        .filter(|c| !c.is_wall)
        .count();
    let pillars = grid
        .cells()
        .filter(|c| interior(c.coord()) && c.row % 2 == 0 && c.col % 2 == 0)
        .filter(|c| !c.is_wall)
        .count();

    assert!(lattice.iter().all(|c| !c.is_wall), "{}: uncarved lattice cell", label);
    assert_eq!(pillars, 0, "{}: carved a pillar cell", label);
    assert_eq!(connectors, lattice.len() - 1, "{}: not a spanning tree", label);
    assert_eq!(
        reachable_count(grid),
        grid.open_cell_count(),
        "{}: carved cells are not all connected",
        label
    );
}

/// Number of open cells reachable from the start.
pub fn reachable_count(grid: &Grid) -> usize {
    let Some(start) = grid.start() else {
        return 0;
    };
    let mut seen = vec![false; grid.cell_count()];
    seen[grid.ravel_index(start)] = true;
    let mut queue = VecDeque::from([start]);
    let mut count = 0;

    while let Some(current) = queue.pop_front() {
        count += 1;
        for neighbor in neighbors4(current, grid) {
            let idx = grid.ravel_index(neighbor);
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(neighbor);
            }
        }
    }
    count
}
