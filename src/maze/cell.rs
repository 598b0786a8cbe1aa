use crossterm::style::{Color, Stylize};

use std::fmt;

/// Grid coordinate as `(row, col)`, origin at the top-left corner.
pub type Coord = (usize, usize);

/// One position of the grid, carrying both its maze state and its search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Carved away by the generators.
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// Generation or search marker, reset between runs.
    pub is_visited: bool,
    /// Part of the reconstructed solution.
    pub is_path: bool,
    /// Being processed in the frame currently emitted.
    pub is_current: bool,
    /// Accumulated cost from the start, `Cell::INFINITY` when unreached.
    pub distance: usize,
    /// Estimated cost to the end.
    pub heuristic: usize,
    /// Predecessor on the current search tree.
    pub parent: Option<Coord>,
}

impl Cell {
    pub const INFINITY: usize = usize::MAX;
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// A wall cell with a cleared search state.
    pub fn wall(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            is_wall: true,
            is_start: false,
            is_end: false,
            is_visited: false,
            is_path: false,
            is_current: false,
            distance: Cell::INFINITY,
            heuristic: 0,
            parent: None,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    /// Clears every search field. The endpoint visited flag survives when asked to.
    pub fn reset_search(&mut self, preserve_endpoint_visited: bool) {
        if !(preserve_endpoint_visited && (self.is_start || self.is_end)) {
            self.is_visited = false;
        }
        self.is_path = false;
        self.is_current = false;
        self.distance = Cell::INFINITY;
        self.heuristic = 0;
        self.parent = None;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Endpoints win over search markers, which win over plain floor
        let styled_symbol = if self.is_start {
            "🟩".with(Color::Green)
        } else if self.is_end {
            "🟥".with(Color::Red)
        } else if self.is_wall {
            "⬜".with(Color::White)
        } else if self.is_current {
            "🟪".with(Color::Magenta)
        } else if self.is_path {
            "🟨".with(Color::Yellow)
        } else if self.is_visited {
            "* ".with(Color::Blue)
        } else {
            "  ".with(Color::Reset)
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_search_keeps_endpoint_visited_on_request() {
        let mut cell = Cell::wall(1, 1);
        cell.is_start = true;
        cell.is_visited = true;
        cell.distance = 3;
        cell.parent = Some((1, 2));

        cell.reset_search(true);
        assert!(cell.is_visited);
        assert_eq!(cell.distance, Cell::INFINITY);
        assert_eq!(cell.parent, None);

        cell.reset_search(false);
        assert!(!cell.is_visited);
    }

    #[test]
    fn test_reset_search_always_clears_plain_cells() {
        let mut cell = Cell::wall(2, 3);
        cell.is_visited = true;
        cell.is_path = true;
        cell.is_current = true;
        cell.reset_search(true);
        assert!(!cell.is_visited && !cell.is_path && !cell.is_current);
    }
}
