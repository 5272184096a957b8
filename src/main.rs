use mazer::{Algorithm, Maze, features, solve};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let dims = args
        .by_ref()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 || dims[0] == 0 || dims[1] == 0 {
        eprintln!("Usage: mazer <rows> <cols> [seed]");
        return;
    }
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let maze = Maze::with_seed(dims[0], dims[1], seed);
    print!("{maze}");

    println!(
        "density {:.3}  dead ends {}  branching factor {:.3}",
        features::density(&maze),
        features::dead_ends(&maze),
        features::branching_factor(&maze),
    );

    for algorithm in Algorithm::ALL {
        match solve(algorithm, maze.start(), &maze) {
            Ok((path, explored)) => println!(
                "{algorithm}: path {} steps, {} states explored",
                path.len(),
                explored.len()
            ),
            Err(e) => eprintln!("{algorithm}: {e}"),
        }
    }
}
