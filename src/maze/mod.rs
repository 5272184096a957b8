pub mod cell;
mod generate;

use std::fmt;

pub use cell::Cell;

use crate::error::GridError;

/// A (row, col) position in the maze, zero-based.
pub type Coord = (usize, usize);

/// A legal move between two adjacent open cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    /// The (row, col) offset this move applies to a coordinate.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Action::Left => (0, -1),
            Action::Right => (0, 1),
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
        }
    }

    /// All moves in the fixed expansion order used by `Maze::get_next`.
    /// The order determines tie-breaking in stack/queue based searches,
    /// so it must not change.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
        }
    }
}

/// A rectangular maze with a unique start and goal.
///
/// The grid is stored flat in row-major order. After construction the maze is
/// immutable as far as searches are concerned, so any number of searches may
/// run against a shared reference concurrently.
pub struct Maze {
    grid: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Coord,
    goal: Coord,
}

impl Maze {
    /// Generates a random solvable maze with the given dimensions.
    /// Even dimensions are incremented to the next odd value so the carving
    /// lattice has interior wall cells on all boundaries.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_seed(rows, cols, None)
    }

    /// Same as [`Maze::new`] but with an optional seed for reproducibility.
    pub fn with_seed(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let rows = rows | 1;
        let cols = cols | 1;
        let mut maze = Maze {
            grid: vec![Cell::Wall; rows * cols],
            rows,
            cols,
            start: (0, 0),
            goal: (0, 0),
        };
        generate::carve(&mut maze, seed);
        maze
    }

    /// Adopts an externally constructed grid.
    ///
    /// Validates that the grid is rectangular and non-empty and contains
    /// exactly one `Start` and one `Goal` cell. Connectivity is not checked;
    /// searching a disconnected grid fails with `SearchError::NoSolution`.
    pub fn from_grid(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let cols = rows[0].len();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(GridError::Ragged);
        }

        let mut start = None;
        let mut goal = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                match cell {
                    Cell::Start => match start {
                        None => start = Some((r, c)),
                        Some(_) => return Err(GridError::MultipleStarts),
                    },
                    Cell::Goal => match goal {
                        None => goal = Some((r, c)),
                        Some(_) => return Err(GridError::MultipleGoals),
                    },
                    _ => {}
                }
            }
        }

        Ok(Maze {
            rows: rows.len(),
            cols,
            start: start.ok_or(GridError::MissingStart)?,
            goal: goal.ok_or(GridError::MissingGoal)?,
            grid: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows in the maze.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the maze.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the starting coordinate.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Returns the goal coordinate.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Returns the raw grid in row-major order.
    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    /// Checks whether the given coordinate is the goal.
    pub fn is_goal(&self, coord: Coord) -> bool {
        coord == self.goal
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Returns the legal moves out of `coord` as (action, destination) pairs.
    ///
    /// Directions are enumerated in the fixed order left, right, up, down;
    /// a neighbor is included iff it lies in bounds and is not a wall.
    pub fn get_next(&self, coord: Coord) -> Vec<(Action, Coord)> {
        let (r, c) = (coord.0 as isize, coord.1 as isize);
        Action::ALL
            .iter()
            .filter_map(|&action| {
                let (dr, dc) = action.offset();
                let (nr, nc) = (r + dr, c + dc);
                if nr < 0 || nc < 0 {
                    return None;
                }
                let next = (nr as usize, nc as usize);
                (self.is_in_bounds(next) && self[next].is_open()).then_some((action, next))
            })
            .collect()
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.cols + coord.1
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.grid[idx]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self[(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
