// Anytime A* path planning on a grid map
//
// Loads a map file or generates a random one, then searches from start to
// goal and prints the best path found.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use anytime_astar::path_planning::{AnytimeAStarConfig, AnytimeAStarPlanner, Connectivity, ParentSelection, SearchOutcome};
use anytime_astar::utils::{generate_map, load_map, quick_plot_path, write_rendering, GridMap, MapGenConfig};
use anytime_astar::{GridPos, PlannerError, PlannerResult};

/// Anytime A* search on an occupancy grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file to load (`1` free, `0` obstacle); a random map is generated if omitted
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Side length of a generated square map
    #[arg(short, long, default_value_t = 100)]
    dim: usize,

    /// Width of a generated map, overrides --dim
    #[arg(long)]
    width: Option<usize>,

    /// Height of a generated map, overrides --dim
    #[arg(long)]
    height: Option<usize>,

    /// Obstacle percentage of a generated map
    #[arg(long, default_value_t = 10)]
    obstacles: u32,

    /// Seed of a generated map
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start cell as `row,col` (default: top-right corner)
    #[arg(short, long, value_parser = parse_cell)]
    start: Option<GridPos>,

    /// Goal cell as `row,col` (default: bottom-left corner)
    #[arg(short, long, value_parser = parse_cell)]
    goal: Option<GridPos>,

    /// Neighbor connectivity, 4 or 8
    #[arg(short, long, default_value_t = 8)]
    connectivity: u32,

    /// Worker threads for minimum selection (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Select the frontier minimum on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Rebuild paths through the lowest-g neighbor instead of the recorded parent
    #[arg(long)]
    reselect_parents: bool,

    /// Write an ASCII rendering of the result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save a gnuplot PNG of the result to this file
    #[arg(long)]
    plot: Option<String>,
}

fn parse_cell(s: &str) -> Result<GridPos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{}'", s))?;
    let row = row.trim().parse::<i32>().map_err(|e| format!("bad row '{}': {}", row, e))?;
    let col = col.trim().parse::<i32>().map_err(|e| format!("bad column '{}': {}", col, e))?;
    Ok(GridPos::new(row, col))
}

fn build_map(args: &Args) -> PlannerResult<GridMap> {
    match &args.map {
        Some(path) => {
            println!("Loading map from {}", path.display());
            load_map(path)
        }
        None => {
            let config = MapGenConfig {
                width: args.width.unwrap_or(args.dim),
                height: args.height.unwrap_or(args.dim),
                obstacle_percent: args.obstacles,
                seed: args.seed,
            };
            println!(
                "Generating {}x{} map with {} % obstacles (seed {})",
                config.height, config.width, config.obstacle_percent, config.seed
            );
            generate_map(&config)
        }
    }
}

fn run(args: Args) -> PlannerResult<()> {
    let mut grid = build_map(&args)?;

    let start = args.start.unwrap_or_else(|| GridPos::new(0, grid.width() as i32 - 1));
    let goal = args.goal.unwrap_or_else(|| GridPos::new(grid.height() as i32 - 1, 0));

    // endpoints are always traversable, whatever the map says
    if grid.in_bounds(start) && grid.in_bounds(goal) {
        grid.set_free(start);
        grid.set_free(goal);
    }
    grid.validate_endpoints(start, goal)?;

    let config = AnytimeAStarConfig {
        connectivity: Connectivity::from_degree(args.connectivity)?,
        parent_selection: if args.reselect_parents {
            ParentSelection::LowestG
        } else {
            ParentSelection::Recorded
        },
        parallel_selection: !args.sequential,
        worker_threads: args.threads,
        ..Default::default()
    };
    let planner = AnytimeAStarPlanner::new(grid, config)?;
    println!(
        "Searching {} -> {} with {} worker(s)",
        start,
        goal,
        planner.worker_count()
    );

    let timer = Instant::now();
    let report = planner.search(start, goal)?;
    let elapsed = timer.elapsed();

    match &report.outcome {
        SearchOutcome::PathFound(path) => println!("{}", path.summary()),
        SearchOutcome::Unreachable => println!("Goal not reachable."),
    }
    println!(
        "{} iterations, {} expansions, {} pruned, {} visited, frontier peak {} in {:.3} s",
        report.stats.iterations,
        report.stats.expansions,
        report.stats.pruned,
        report.stats.visited,
        report.stats.max_frontier,
        elapsed.as_secs_f64()
    );

    let path = report.outcome.path();
    if let Some(file) = &args.output {
        write_rendering(file, planner.grid(), start, goal, path)?;
        println!("Rendering written to {}", file.display());
    }
    if let Some(file) = &args.plot {
        quick_plot_path(planner.grid(), path, start, goal, "Anytime A*").save_png(file, 800, 800)?;
        println!("Plot saved to {}", file);
    }

    if path.is_none() {
        return Err(PlannerError::PlanningError("no path between start and goal".to_string()));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
