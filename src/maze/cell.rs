use crossterm::style::{Color, Stylize};

use std::fmt;

/// One position in the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Open corridor cell.
    Open,
    /// The unique starting cell.
    Start,
    /// The unique goal cell.
    Goal,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the cell can be stepped on (anything that is not a wall).
    pub fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "██".with(Color::White),
            Cell::Open => "  ".with(Color::Reset),
            Cell::Start => "S ".with(Color::Green),
            Cell::Goal => "G ".with(Color::Red),
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
    fn test_is_open() {
        assert!(!Cell::Wall.is_open());
        assert!(Cell::Open.is_open());
        assert!(Cell::Start.is_open());
        assert!(Cell::Goal.is_open());
    }
}
