//! Anytime A* Path Planning Example
//!
//! Searches a random 60x60 map corner to corner and plots the result.

use anytime_astar::common::{GridPathPlanner, GridPos};
use anytime_astar::path_planning::{AnytimeAStarConfig, AnytimeAStarPlanner};
use anytime_astar::utils::{generate_map, render_ascii, MapGenConfig, PathStyle, Visualizer};

fn main() {
    env_logger::init();
    println!("Anytime A* path planning start!!");

    let map_config = MapGenConfig {
        width: 60,
        height: 60,
        obstacle_percent: 20,
        seed: 7,
    };
    let mut grid = match generate_map(&map_config) {
        Ok(grid) => grid,
        Err(e) => {
            println!("Map generation failed: {}", e);
            return;
        }
    };

    let start = GridPos::new(0, 59);
    let goal = GridPos::new(59, 0);
    grid.set_free(start);
    grid.set_free(goal);
    println!("Created map with {} obstacles", grid.cell_count() - grid.free_count());

    let planner = match AnytimeAStarPlanner::new(grid, AnytimeAStarConfig::default()) {
        Ok(planner) => planner,
        Err(e) => {
            println!("Planner setup failed: {}", e);
            return;
        }
    };

    match planner.plan(start, goal) {
        Ok(path) => {
            println!("{}", path.summary());
            print!("{}", render_ascii(planner.grid(), start, goal, Some(&path)));

            let mut vis = Visualizer::new();
            vis.set_title("Anytime A* Path Planning");
            vis.fit_grid(planner.grid());
            vis.plot_obstacles(planner.grid());
            vis.plot_start(start);
            vis.plot_goal(goal);
            vis.plot_path(&path, &PathStyle::default());

            let _ = vis.save_png("anytime_a_star_result.png", 800, 800);
            println!("Plot saved to: anytime_a_star_result.png");
            let _ = vis.show();
        }
        Err(e) => {
            println!("Planning failed: {}", e);
        }
    }

    println!("Anytime A* path planning finish!!");
}
