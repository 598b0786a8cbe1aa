pub mod cell;
pub mod grid;

pub use cell::{Cell, Coord};
pub use grid::Grid;

/// Get the traversable neighbors of a cell.
/// A neighbor is a non-wall cell one step away, always yielded in the order
/// up, down, left, right. Searches rely on this order for tie-breaking.
pub fn neighbors4(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    let neighbors: Vec<Coord> = if grid.is_in_bounds(coord) {
        let (row, col) = coord;
        vec![
            // NOTE: wrapping_sub turns -1 into usize::MAX, which the bounds check
            // then filters out. saturating_add cannot reach a valid index either.
            (row.wrapping_sub(1), col),
            (row.saturating_add(1), col),
            (row, col.wrapping_sub(1)),
            (row, col.saturating_add(1)),
        ]
    } else {
        // No neighbors if the coordinate is out of bounds
        vec![]
    };

    neighbors
        .into_iter()
        .filter(move |&c| grid.is_in_bounds(c) && !grid[c].is_wall)
}

/// Manhattan distance, admissible on a 4-connected grid with unit costs.
pub fn heuristic(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 7);
        grid[(2, 3)].is_wall = false;
        assert!(!grid[(2, 3)].is_wall);
        assert_eq!(grid[(2, 3)].coord(), (2, 3));
        assert_eq!(grid.unravel_index(grid.ravel_index((4, 6))), (4, 6));
    }

    #[test]
    fn test_new_grid_endpoints() {
        let grid = Grid::new(7, 9);
        assert_eq!(grid.start(), Some((1, 1)));
        assert_eq!(grid.end(), Some((5, 7)));
        assert!(!grid[(1, 1)].is_wall);
        assert!(!grid[(5, 7)].is_wall);
        assert_eq!(grid.open_cell_count(), 2);
        assert!(grid.cells().all(|c| c.distance == Cell::INFINITY));
    }

    #[test]
    #[should_panic]
    fn test_grid_too_small() {
        Grid::new(2, 5);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5);
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_neighbors4_order_and_walls() {
        let mut grid = Grid::new(5, 5);
        for coord in [(1, 2), (2, 1), (3, 2), (2, 3), (2, 2)] {
            grid.carve(coord);
        }
        let neighbors = neighbors4((2, 2), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 2), (3, 2), (2, 1), (2, 3)]);

        // Corner cell: only in-bounds, non-wall cells
        let corner = neighbors4((0, 0), &grid).collect::<Vec<_>>();
        assert!(corner.is_empty());

        grid[(3, 2)].is_wall = true;
        let neighbors = neighbors4((2, 2), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn test_heuristic() {
        assert_eq!(heuristic((1, 1), (3, 3)), 4);
        assert_eq!(heuristic((5, 2), (1, 7)), 9);
        assert_eq!(heuristic((4, 4), (4, 4)), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut grid = Grid::new(7, 7);
        grid.carve((1, 2));
        grid[(1, 2)].is_visited = true;
        grid[(1, 2)].is_path = true;
        grid[(1, 2)].parent = Some((1, 1));
        grid[(1, 1)].is_visited = true;
        grid[(1, 1)].distance = 0;

        grid.reset_search_state(true);
        let once = grid.clone();
        grid.reset_search_state(true);
        assert_eq!(grid, once);
        assert!(grid[(1, 1)].is_visited);
        assert!(!grid[(1, 2)].is_visited);
        assert_eq!(grid[(1, 1)].distance, Cell::INFINITY);
    }

    #[test]
    fn test_fill_walls_keeps_endpoints() {
        let mut grid = Grid::new(7, 7);
        grid.carve((1, 2));
        grid.carve((3, 3));
        grid.fill_walls();
        assert_eq!(grid.open_cell_count(), 2);
        assert!(!grid[(1, 1)].is_wall && !grid[(5, 5)].is_wall);
    }

    #[test]
    fn test_move_endpoints() {
        let mut grid = Grid::new(7, 7);
        grid.carve((1, 3));
        // Walls, boundaries and the other endpoint are rejected
        assert!(!grid.move_start((2, 2)));
        assert!(!grid.move_start((0, 1)));
        assert!(!grid.move_start((5, 5)));
        assert!(!grid.move_end((1, 1)));

        assert!(grid.move_start((1, 3)));
        assert_eq!(grid.start(), Some((1, 3)));
        assert!(!grid[(1, 1)].is_start);
        assert_eq!(grid.cells().filter(|c| c.is_start).count(), 1);

        assert!(grid.move_end((1, 1)));
        assert_eq!(grid.end(), Some((1, 1)));
    }
}
