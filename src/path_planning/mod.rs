// Path Planning algorithms module

pub mod heuristic;
pub mod cell_table;
pub mod visited_set;
pub mod frontier;
pub mod path_reconstruction;
pub mod anytime_a_star;

pub use heuristic::*;
pub use cell_table::{Cell, CellTable};
pub use visited_set::VisitedSet;
pub use frontier::Frontier;
pub use path_reconstruction::*;
pub use anytime_a_star::*;
