// Random grid map generator
//
// Writes a map file of `0`/`1` tokens usable by the anytime_a_star binary.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use anytime_astar::utils::{default_map_file_name, generate_map, save_map, MapGenConfig};
use anytime_astar::PlannerResult;

/// Generate a random obstacle map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of a square map
    #[arg(short, long, default_value_t = 1000)]
    dim: usize,

    /// Map width, overrides --dim
    #[arg(long)]
    width: Option<usize>,

    /// Map height, overrides --dim
    #[arg(long)]
    height: Option<usize>,

    /// Percentage of blocked cells
    #[arg(short = 'p', long, default_value_t = 10)]
    obstacles: u32,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Output directory
    #[arg(short, long, default_value = "maps")]
    output: PathBuf,
}

fn run(args: Args) -> PlannerResult<()> {
    let config = MapGenConfig {
        width: args.width.unwrap_or(args.dim),
        height: args.height.unwrap_or(args.dim),
        obstacle_percent: args.obstacles,
        seed: args.seed,
    };

    let grid = generate_map(&config)?;
    let file = args.output.join(default_map_file_name(&config));
    save_map(&file, &grid)?;

    println!(
        "Map {}x{} with {} free cells written to {}",
        grid.height(),
        grid.width(),
        grid.free_count(),
        file.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
