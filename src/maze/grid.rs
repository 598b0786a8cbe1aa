use super::cell::{Cell, Coord};

/// Rectangular grid of cells stored row-major in one flat array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates an all-wall grid with the start carved at `(1, 1)` and the end at
    /// `(rows - 2, cols - 2)`.
    ///
    /// Generators work on odd coordinates, so odd `rows` and `cols` put the end on
    /// the carving lattice.
    ///
    /// # Panics
    /// * If `rows < 3` or `cols < 3`
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 3 && cols >= 3,
            "Grid must be at least 3x3 to hold the start and end cells (got {}x{})",
            rows,
            cols
        );
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::wall(row, col)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let mut grid = Grid { data, rows, cols };

        let start = &mut grid[(1, 1)];
        start.is_start = true;
        start.is_wall = false;
        let end = &mut grid[(rows - 2, cols - 2)];
        end.is_end = true;
        end.is_wall = false;
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, walls included.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.rows - 1 || coord.1 == self.cols - 1
    }

    /// Row-major index of a coordinate, also used as a tie-break key by the solvers.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.cols + coord.1
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        (index / self.cols, index % self.cols)
    }

    /// Makes the cell traversable.
    pub fn carve(&mut self, coord: Coord) {
        self[coord].is_wall = false;
    }

    /// Number of traversable cells.
    pub fn open_cell_count(&self) -> usize {
        self.data.iter().filter(|cell| !cell.is_wall).count()
    }

    /// Locates the start cell by scanning the grid.
    pub fn start(&self) -> Option<Coord> {
        self.data.iter().find(|cell| cell.is_start).map(Cell::coord)
    }

    /// Locates the end cell by scanning the grid.
    pub fn end(&self) -> Option<Coord> {
        self.data.iter().find(|cell| cell.is_end).map(Cell::coord)
    }

    /// Clears visited/path/current markers, distances, heuristics and parents on
    /// every cell. Calling it twice is the same as calling it once.
    pub fn reset_search_state(&mut self, preserve_endpoint_visited: bool) {
        self.data
            .iter_mut()
            .for_each(|cell| cell.reset_search(preserve_endpoint_visited));
    }

    /// Turns every cell back into a wall with a cleared search state, keeping the
    /// start and end cells carved.
    pub fn fill_walls(&mut self) {
        self.data.iter_mut().for_each(|cell| {
            cell.reset_search(false);
            cell.is_wall = !(cell.is_start || cell.is_end);
        });
    }

    /// Moves the start flag to `to`. Returns `false` if `to` is out of bounds, a
    /// wall, a boundary cell or the end cell.
    pub fn move_start(&mut self, to: Coord) -> bool {
        self.move_endpoint(to, |cell| &mut cell.is_start, |cell| cell.is_end)
    }

    /// Moves the end flag to `to`. Returns `false` if `to` is out of bounds, a
    /// wall, a boundary cell or the start cell.
    pub fn move_end(&mut self, to: Coord) -> bool {
        self.move_endpoint(to, |cell| &mut cell.is_end, |cell| cell.is_start)
    }

    fn move_endpoint(
        &mut self,
        to: Coord,
        flag: fn(&mut Cell) -> &mut bool,
        is_other: fn(&Cell) -> bool,
    ) -> bool {
        if !self.is_in_bounds(to) || self.is_boundary(to) {
            return false;
        }
        let target = self[to];
        if target.is_wall || is_other(&target) {
            return false;
        }
        self.data.iter_mut().for_each(|cell| *flag(cell) = false);
        *flag(&mut self[to]) = true;
        true
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
