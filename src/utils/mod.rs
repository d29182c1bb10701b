//! Utility modules for anytime_astar

pub mod grid_map;
pub mod map_gen;
pub mod map_io;
pub mod render;
pub mod visualization;

pub use grid_map::*;
pub use map_gen::{generate_map, default_map_file_name, MapGenConfig};
pub use map_io::{load_map, load_map_with_dims, save_map, parse_map, format_map};
pub use render::{render_ascii, write_rendering};
pub use visualization::{Visualizer, PathStyle, PointStyle, colors, quick_plot_path};
