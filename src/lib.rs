//! Random solvable maze generation and multi-strategy pathfinding.
//!
//! A [`Maze`] is carved with randomized depth-first search on an odd/odd
//! lattice, the goal is placed at the open cell farthest from the start, and
//! four interchangeable searches (BFS, DFS, greedy best-first, A*) return
//! both the explored-state trace and the final path.

pub mod error;
pub mod features;
pub mod maze;
pub mod solvers;

pub use error::{GridError, SearchError};
pub use maze::{Action, Cell, Coord, Maze};
pub use solvers::{
    Algorithm, Solution, astar_search, breadth_first_search, depth_first_search,
    greedy_best_first_search, manhattan_distance, solve,
};
