use std::collections::VecDeque;

use crate::maze::{Coord, Grid, neighbors4};

/// Makes sure the end is reachable from the start.
///
/// Runs a BFS from the start; if the end is not reached, carves a straight
/// corridor, first along the rows toward the end's row, then along the columns.
/// Returns `true` if a corridor had to be carved.
pub fn ensure_path(grid: &mut Grid) -> bool {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        return false;
    };

    if is_reachable(grid, start, end) {
        return false;
    }

    tracing::debug!("[repair] carving corridor {:?} -> {:?}", start, end);
    let (mut row, mut col) = start;
    while (row, col) != end {
        if row < end.0 {
            row += 1;
        } else if row > end.0 {
            row -= 1;
        } else if col < end.1 {
            col += 1;
        } else {
            col -= 1;
        }
        grid.carve((row, col));
    }
    true
}

fn is_reachable(grid: &Grid, start: Coord, end: Coord) -> bool {
    let mut seen = vec![false; grid.cell_count()];
    seen[grid.ravel_index(start)] = true;
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }
        for neighbor in neighbors4(current, grid) {
            let idx = grid.ravel_index(neighbor);
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(neighbor);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::bfs_distance;

    #[test]
    fn test_connected_grid_is_left_alone() {
        let mut grid = Grid::new(5, 5);
        for coord in [(1, 2), (1, 3), (2, 3)] {
            grid.carve(coord);
        }
        let before = grid.clone();
        assert!(!ensure_path(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_corridor_moves_rows_first() {
        let mut grid = Grid::new(7, 9);
        assert!(ensure_path(&mut grid));
        // Down column 1 to row 5, then right along row 5
        for row in 1..=5 {
            assert!(!grid[(row, 1)].is_wall);
        }
        for col in 1..=7 {
            assert!(!grid[(5, col)].is_wall);
        }
        assert_eq!(grid.open_cell_count(), 11);
        assert_eq!(bfs_distance(&grid), Some(10));
    }

    #[test]
    fn test_corridor_toward_relocated_end() {
        let mut grid = Grid::new(7, 7);
        grid.carve((3, 3));
        assert!(grid.move_start((3, 3)));
        assert!(grid.move_end((1, 1)));
        assert!(ensure_path(&mut grid));
        assert_eq!(bfs_distance(&grid), Some(4));
    }
}
