use std::collections::{HashSet, VecDeque};

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, Coord, Maze};

/// Carve offsets in row/col terms: right, down, left, up.
const CARVE_DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a perfect maze into an all-wall grid with randomized depth-first
/// search, then places the goal at the open cell farthest from the start.
///
/// Carving works on the odd/odd lattice: every step jumps two cells and opens
/// the wall in between, so walls always have well-defined interior positions.
/// The explicit stack shrinks to empty, which guarantees termination, and
/// every carved cell is reached from the start, which guarantees a single
/// connected component.
pub(super) fn carve(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let start = (rand_odd_index(&mut rng, maze.rows), rand_odd_index(&mut rng, maze.cols));
    maze[start] = Cell::Open;
    maze.start = start;

    let mut stack = vec![start];
    let mut carved = 1usize;
    while let Some((r, c)) = stack.pop() {
        for (dr, dc) in biased_shuffle(&mut rng) {
            let (nr, nc) = (r as isize + dr * 2, c as isize + dc * 2);
            if nr < 0 || nc < 0 {
                continue;
            }
            let target = (nr as usize, nc as usize);
            if maze.is_in_bounds(target) && maze[target] == Cell::Wall {
                // Open the wall between the two lattice cells, then the
                // target itself.
                let between = ((r as isize + dr) as usize, (c as isize + dc) as usize);
                maze[between] = Cell::Open;
                maze[target] = Cell::Open;
                carved += 2;
                stack.push(target);
            }
        }
    }

    let goal = find_farthest(maze, start);
    maze[goal] = Cell::Goal;
    maze.goal = goal;
    // When the maze degenerates to a single open cell the goal coincides
    // with the start; the start marker wins.
    maze[start] = Cell::Start;

    tracing::debug!(
        rows = maze.rows,
        cols = maze.cols,
        carved,
        ?start,
        ?goal,
        "generated maze"
    );
}

/// Picks a random odd index in `0..n`, or 0 when the dimension is too small
/// to have one (a degenerate 1-wide maze).
fn rand_odd_index(rng: &mut StdRng, n: usize) -> usize {
    if n < 3 { 0 } else { rng.random_range(0..n / 2) * 2 + 1 }
}

/// Returns the carve directions in a stochastic order biased toward
/// branching, so corridors do not run arbitrarily long. The bias term only
/// affects maze shape, not correctness: every direction is always present.
fn biased_shuffle(rng: &mut StdRng) -> [(isize, isize); 4] {
    let mut keyed = CARVE_DIRS
        .map(|dir| (rng.random::<f64>() + 0.2 * f64::from(rng.random_range(0..2u8)), dir));
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.map(|(_, dir)| dir)
}

/// Finds the open cell farthest from `start` by breadth-first distance.
/// Ties keep the earliest dequeued cell, since distances are non-decreasing
/// in dequeue order.
fn find_farthest(maze: &Maze, start: Coord) -> Coord {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([(start, 0usize)]);
    let mut farthest = start;
    let mut max_dist = 0;

    while let Some(((r, c), dist)) = queue.pop_front() {
        if !visited.insert((r, c)) {
            continue;
        }
        if dist > max_dist {
            max_dist = dist;
            farthest = (r, c);
        }
        for (dr, dc) in CARVE_DIRS {
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = (nr as usize, nc as usize);
            if maze.is_in_bounds(next) && maze[next] == Cell::Open {
                queue.push_back((next, dist + 1));
            }
        }
    }

    farthest
}
