//! Scalar statistics of a finished maze, consumed by external reporting and
//! algorithm-selection tooling. Pure functions of the grid.

use crate::maze::{Cell, Coord, Maze};

/// Ratio of wall cells to total cells.
pub fn density(maze: &Maze) -> f64 {
    let walls = maze.grid().iter().filter(|&&c| c == Cell::Wall).count();
    walls as f64 / (maze.rows() * maze.cols()) as f64
}

/// Number of open cells with exactly one open 4-neighbor.
pub fn dead_ends(maze: &Maze) -> usize {
    open_cells(maze)
        .filter(|&coord| open_neighbor_count(maze, coord) == 1)
        .count()
}

/// Mean open-neighbor count over all open cells, 0.0 when there are none.
pub fn branching_factor(maze: &Maze) -> f64 {
    let (total, open) = open_cells(maze).fold((0usize, 0usize), |(total, open), coord| {
        (total + open_neighbor_count(maze, coord), open + 1)
    });
    if open == 0 { 0.0 } else { total as f64 / open as f64 }
}

fn open_cells(maze: &Maze) -> impl Iterator<Item = Coord> + '_ {
    (0..maze.rows())
        .flat_map(move |r| (0..maze.cols()).map(move |c| (r, c)))
        .filter(move |&coord| maze[coord].is_open())
}

fn open_neighbor_count(maze: &Maze, coord: Coord) -> usize {
    maze.get_next(coord).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::corridor;

    #[test]
    fn test_corridor_features() {
        let maze = corridor();
        // 25 cells, 22 walls.
        assert_eq!(density(&maze), 22.0 / 25.0);
        // Both corridor ends are dead ends.
        assert_eq!(dead_ends(&maze), 2);
        // Neighbor counts along the corridor are 1, 2, 1.
        assert!((branching_factor(&maze) - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_generated_maze_features_in_range() {
        let maze = Maze::with_seed(15, 15, Some(11));
        let d = density(&maze);
        assert!(d > 0.0 && d < 1.0);
        assert!(dead_ends(&maze) >= 1);
        let b = branching_factor(&maze);
        assert!(b >= 1.0 && b <= 4.0);
    }
}
