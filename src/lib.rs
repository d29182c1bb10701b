//! AnytimeAStar - anytime A* path planning on occupancy grids
//!
//! This crate provides a grid path planner that keeps searching after the
//! first path is found, prunes candidates that cannot improve it, and can
//! select the best frontier entry on a worker pool. Map generation, map
//! files, ASCII rendering and gnuplot plotting are included.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{GridPos, GridPath};
pub use common::GridPathPlanner;
pub use common::{PlannerError, PlannerResult};
pub use path_planning::{AnytimeAStarConfig, AnytimeAStarPlanner, Connectivity, ParentSelection};
pub use path_planning::{SearchOutcome, SearchReport, SearchStats};
pub use utils::GridMap;
