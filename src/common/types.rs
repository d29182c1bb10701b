//! Common types used throughout anytime_astar

use std::fmt;

/// Cell coordinates on the occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    pub fn distance(&self, other: &GridPos) -> f64 {
        let d_row = (self.row - other.row) as f64;
        let d_col = (self.col - other.col) as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// True if `other` is one of the 8 surrounding cells
    pub fn is_adjacent(&self, other: &GridPos) -> bool {
        let d_row = (self.row - other.row).abs();
        let d_col = (self.col - other.col).abs();
        d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from(tuple: (i32, i32)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Path represented as a sequence of grid cells, start first
#[derive(Debug, Clone, PartialEq)]
pub struct GridPath {
    pub cells: Vec<GridPos>,
    pub cost: f64,
}

impl GridPath {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            cost: 0.0,
        }
    }

    /// Build a path and accumulate its step cost from start to goal
    pub fn from_cells(cells: Vec<GridPos>) -> Self {
        let cost = cells
            .windows(2)
            .fold(0.0, |acc, w| acc + w[0].distance(&w[1]));
        Self { cells, cost }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<GridPos> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<GridPos> {
        self.cells.last().copied()
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        self.cells.contains(pos)
    }

    /// Number of cells strictly between start and goal
    pub fn intermediate_count(&self) -> usize {
        self.cells.len().saturating_sub(2)
    }

    pub fn straight_line_distance(&self) -> f64 {
        match (self.start(), self.goal()) {
            (Some(s), Some(g)) => s.distance(&g),
            _ => 0.0,
        }
    }

    /// Relative excess of the path cost over the straight line, in percent
    pub fn excess_percent(&self) -> f64 {
        let straight = self.straight_line_distance();
        if straight <= 0.0 {
            return 0.0;
        }
        (self.cost / straight - 1.0) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Goal reached through {} intermediate cells. Path length {:.6} over minimum distance {:.6} (+ {:.2} %).",
            self.intermediate_count(),
            self.cost,
            self.straight_line_distance(),
            self.excess_percent()
        )
    }

    pub fn rows(&self) -> Vec<f64> {
        self.cells.iter().map(|p| p.row as f64).collect()
    }

    pub fn cols(&self) -> Vec<f64> {
        self.cells.iter().map(|p| p.col as f64).collect()
    }
}

impl Default for GridPath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pos_distance() {
        let p1 = GridPos::new(0, 0);
        let p2 = GridPos::new(3, 4);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_grid_pos_adjacency() {
        let p = GridPos::new(2, 2);
        assert!(p.is_adjacent(&GridPos::new(1, 1)));
        assert!(p.is_adjacent(&GridPos::new(2, 3)));
        assert!(!p.is_adjacent(&p));
        assert!(!p.is_adjacent(&GridPos::new(4, 2)));
    }

    #[test]
    fn test_grid_path_cost() {
        let path = GridPath::from_cells(vec![
            GridPos::new(0, 0),
            GridPos::new(0, 1),
            GridPos::new(1, 2),
        ]);
        assert!((path.cost - (1.0 + std::f64::consts::SQRT_2)).abs() < 1e-10);
        assert_eq!(path.intermediate_count(), 1);
        assert_eq!(path.start(), Some(GridPos::new(0, 0)));
        assert_eq!(path.goal(), Some(GridPos::new(1, 2)));
    }

    #[test]
    fn test_grid_path_summary() {
        let path = GridPath::from_cells(vec![GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 2)]);
        assert!(path.excess_percent().abs() < 1e-10);
        assert!(path.summary().starts_with("Goal reached through 1 intermediate cells."));
    }
}
