//! Four interchangeable graph searches over a generated maze.
//!
//! Every variant runs the same skeleton ([`run_search`]) and differs only in
//! its frontier discipline and, for the informed searches, the priority
//! function handed to the priority frontier.

use std::collections::HashSet;
use std::rc::Rc;

mod frontier;

pub use frontier::{Frontier, PriorityFn, PriorityFrontier, QueueFrontier, StackFrontier};

use crate::error::SearchError;
use crate::maze::{Action, Coord, Maze};

/// A node in the search tree.
///
/// Parent back-references form a tree: a chain strictly shortens toward the
/// root, so plain `Rc` suffices and no cycle can form. `cost` counts edges
/// from the start (uniform cost 1 per edge) and is consulted only by A*.
#[derive(Debug)]
pub struct Node {
    pub state: Coord,
    pub parent: Option<Rc<Node>>,
    pub action: Option<Action>,
    pub cost: usize,
}

/// The path from start to goal as (action, resulting coordinate) pairs,
/// together with the states expanded before the goal was found, in dequeue
/// order. The start state is excluded from the explored list and the goal is
/// never in it (it is recognized on dequeue, before expansion).
pub type Solution = (Vec<(Action, Coord)>, Vec<Coord>);

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Algorithm::Dfs => write!(f, "Depth-First Search (DFS)"),
            Algorithm::Greedy => write!(f, "Greedy Best-First Search"),
            Algorithm::AStar => write!(f, "A* Search"),
        }
    }
}

/// Runs the selected algorithm from `start` against `maze`.
pub fn solve(algorithm: Algorithm, start: Coord, maze: &Maze) -> Result<Solution, SearchError> {
    match algorithm {
        Algorithm::Bfs => breadth_first_search(start, maze),
        Algorithm::Dfs => depth_first_search(start, maze),
        Algorithm::Greedy => greedy_best_first_search(start, maze),
        Algorithm::AStar => astar_search(start, maze),
    }
}

/// Manhattan distance between two coordinates. Admissible and consistent on
/// a 4-connected uniform-cost grid, which is what makes A* optimal here.
pub fn manhattan_distance(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn manhattan_priority(node: &Node, goal: Coord) -> usize {
    manhattan_distance(node.state, goal)
}

fn cumulative_cost_priority(node: &Node, goal: Coord) -> usize {
    manhattan_distance(node.state, goal) + node.cost
}

/// Breadth-first search. Returns the shortest path on the uniform-cost grid.
pub fn breadth_first_search(start: Coord, maze: &Maze) -> Result<Solution, SearchError> {
    run_search(QueueFrontier::new(), start, maze)
}

/// Depth-first search. Finds a path, not necessarily the shortest one.
pub fn depth_first_search(start: Coord, maze: &Maze) -> Result<Solution, SearchError> {
    run_search(StackFrontier::new(), start, maze)
}

/// Greedy best-first search ordered by Manhattan distance to the goal.
/// Usually expands few nodes; the path is not guaranteed shortest.
pub fn greedy_best_first_search(start: Coord, maze: &Maze) -> Result<Solution, SearchError> {
    run_search(PriorityFrontier::new(manhattan_priority, maze.goal()), start, maze)
}

/// A* search ordered by Manhattan distance plus accumulated path cost.
/// Returns the shortest path.
pub fn astar_search(start: Coord, maze: &Maze) -> Result<Solution, SearchError> {
    run_search(
        PriorityFrontier::new(cumulative_cost_priority, maze.goal()),
        start,
        maze,
    )
}

/// The shared search skeleton.
///
/// Pops one node per the frontier's discipline, stops when the popped state
/// is the goal, and otherwise expands its neighbors, skipping states already
/// explored or already waiting in the frontier. Fails with
/// [`SearchError::NoSolution`] when the frontier empties first.
fn run_search<F: Frontier>(
    mut frontier: F,
    start: Coord,
    maze: &Maze,
) -> Result<Solution, SearchError> {
    frontier.add(Rc::new(Node {
        state: start,
        parent: None,
        action: None,
        cost: 0,
    }));

    let mut explored_states = HashSet::new();
    let mut explored = Vec::new();

    loop {
        if frontier.is_empty() {
            tracing::debug!(?start, explored = explored.len(), "frontier exhausted");
            return Err(SearchError::NoSolution);
        }

        let node = frontier.remove()?;

        if maze.is_goal(node.state) {
            let path = reconstruct_path(&node);
            tracing::debug!(
                ?start,
                goal = ?node.state,
                path_len = path.len(),
                explored = explored.len(),
                "goal reached"
            );
            return Ok((path, explored));
        }

        explored_states.insert(node.state);
        // The start state is not reported in the explored trace.
        if node.parent.is_some() {
            explored.push(node.state);
        }

        for (action, state) in maze.get_next(node.state) {
            if !frontier.contains_state(state) && !explored_states.contains(&state) {
                frontier.add(Rc::new(Node {
                    state,
                    parent: Some(Rc::clone(&node)),
                    action: Some(action),
                    cost: node.cost + 1,
                }));
            }
        }
    }
}

/// Walks parent references from the goal node back to the root, then
/// reverses into start-to-goal order.
fn reconstruct_path(goal: &Rc<Node>) -> Vec<(Action, Coord)> {
    let mut path = Vec::new();
    let mut node = Rc::clone(goal);
    while let (Some(parent), Some(action)) = (node.parent.clone(), node.action) {
        path.push((action, node.state));
        node = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::corridor;
    use crate::maze::Cell;
    use std::collections::VecDeque;

    /// Independent shortest-path length from start to goal, or None when
    /// unreachable. Deliberately separate from the solver code paths.
    fn shortest_distance(maze: &Maze) -> Option<usize> {
        let mut visited = HashSet::from([maze.start()]);
        let mut queue = VecDeque::from([(maze.start(), 0usize)]);
        while let Some((coord, dist)) = queue.pop_front() {
            if maze.is_goal(coord) {
                return Some(dist);
            }
            for (_, next) in maze.get_next(coord) {
                if visited.insert(next) {
                    queue.push_back((next, dist + 1));
                }
            }
        }
        None
    }

    /// Asserts that `path` walks from start to goal one cardinal step at a
    /// time over non-wall cells, with each action matching its coordinate.
    fn assert_valid_path(maze: &Maze, path: &[(Action, Coord)]) {
        let mut current = maze.start();
        for &(action, coord) in path {
            let (dr, dc) = action.offset();
            let stepped = (
                (current.0 as isize + dr) as usize,
                (current.1 as isize + dc) as usize,
            );
            assert_eq!(stepped, coord, "action does not match coordinate delta");
            assert!(maze[coord].is_open(), "path crosses a wall at {coord:?}");
            current = coord;
        }
        assert_eq!(current, maze.goal(), "path does not end at the goal");
    }

    /// A maze whose goal is walled off from the start.
    fn disconnected() -> Maze {
        let mut rows = vec![vec![Cell::Wall; 5]; 5];
        rows[1][1] = Cell::Start;
        rows[1][2] = Cell::Open;
        rows[3][3] = Cell::Goal;
        Maze::from_grid(rows).unwrap()
    }

    #[test]
    fn test_node_is_debug_formattable() {
        // Assertion helpers like `unwrap_err` need `Rc<Node>: Debug`.
        let root = Rc::new(Node {
            state: (1, 1),
            parent: None,
            action: None,
            cost: 0,
        });
        let child = Node {
            state: (1, 2),
            parent: Some(root),
            action: Some(Action::Right),
            cost: 1,
        };
        let rendered = format!("{child:?}");
        assert!(rendered.contains("state"));
        assert!(rendered.contains("cost"));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7);
        assert_eq!(manhattan_distance((3, 4), (0, 0)), 7);
        assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
    }

    #[test]
    fn test_corridor_scenario_all_algorithms() {
        let maze = corridor();
        for algorithm in Algorithm::ALL {
            let (path, explored) = solve(algorithm, maze.start(), &maze)
                .unwrap_or_else(|e| panic!("{algorithm} failed: {e}"));
            assert_eq!(
                path,
                vec![(Action::Right, (1, 2)), (Action::Right, (1, 3))],
                "{algorithm} corridor path"
            );
            // Only the single corridor cell gets expanded on the way.
            assert_eq!(explored, vec![(1, 2)], "{algorithm} corridor trace");
        }
    }

    #[test]
    fn test_bfs_and_astar_find_shortest_paths() {
        for seed in 0..10 {
            let maze = Maze::with_seed(15, 21, Some(seed));
            let expected = shortest_distance(&maze).expect("generated maze is solvable");

            let (bfs_path, _) = breadth_first_search(maze.start(), &maze).unwrap();
            let (astar_path, _) = astar_search(maze.start(), &maze).unwrap();

            assert_valid_path(&maze, &bfs_path);
            assert_valid_path(&maze, &astar_path);
            assert_eq!(bfs_path.len(), expected, "seed {seed}: BFS is shortest");
            assert_eq!(astar_path.len(), expected, "seed {seed}: A* is shortest");
        }
    }

    #[test]
    fn test_dfs_and_greedy_find_valid_paths() {
        for seed in 0..10 {
            let maze = Maze::with_seed(15, 21, Some(seed));

            let (dfs_path, _) = depth_first_search(maze.start(), &maze).unwrap();
            let (greedy_path, _) = greedy_best_first_search(maze.start(), &maze).unwrap();

            assert_valid_path(&maze, &dfs_path);
            assert_valid_path(&maze, &greedy_path);
        }
    }

    #[test]
    fn test_explored_excludes_start_and_goal() {
        let maze = Maze::with_seed(11, 11, Some(3));
        for algorithm in Algorithm::ALL {
            let (_, explored) = solve(algorithm, maze.start(), &maze).unwrap();
            assert!(!explored.contains(&maze.start()), "{algorithm} trace has start");
            assert!(!explored.contains(&maze.goal()), "{algorithm} trace has goal");
        }
    }

    #[test]
    fn test_explored_has_no_duplicates() {
        let maze = Maze::with_seed(15, 15, Some(5));
        for algorithm in Algorithm::ALL {
            let (_, explored) = solve(algorithm, maze.start(), &maze).unwrap();
            let unique: HashSet<_> = explored.iter().collect();
            assert_eq!(unique.len(), explored.len(), "{algorithm} re-expanded a state");
        }
    }

    #[test]
    fn test_disconnected_goal_has_no_solution() {
        let maze = disconnected();
        for algorithm in Algorithm::ALL {
            assert_eq!(
                solve(algorithm, maze.start(), &maze),
                Err(SearchError::NoSolution),
                "{algorithm} on a disconnected maze"
            );
        }
    }

    #[test]
    fn test_start_on_goal_returns_empty_path() {
        // A grid where the search starts on the goal cell itself.
        let mut rows = vec![vec![Cell::Open; 3]; 3];
        rows[0][0] = Cell::Start;
        rows[1][1] = Cell::Goal;
        let maze = Maze::from_grid(rows).unwrap();
        for algorithm in Algorithm::ALL {
            let (path, explored) = solve(algorithm, maze.goal(), &maze).unwrap();
            assert!(path.is_empty());
            assert!(explored.is_empty());
        }
    }
}
