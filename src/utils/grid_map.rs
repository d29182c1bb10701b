// grid map definition
// author:Salah Eddine Ghamri (s.ghamri)

use std::ops::Deref;
extern crate nalgebra as na;

use crate::common::{GridPos, PlannerError, PlannerResult};

/// Static occupancy grid, `true` marks a free cell.
///
/// Rows index the first matrix dimension, columns the second. Cells are
/// addressed in row-major order by the planner (`row * width + col`).
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    grid: na::DMatrix<bool>,
}

impl GridMap {
    pub fn new(free: na::DMatrix<bool>) -> Result<Self, PlannerError> {
        if free.nrows() == 0 || free.ncols() == 0 {
            return Err(PlannerError::InvalidParameter(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if free.nrows() > i32::MAX as usize || free.ncols() > i32::MAX as usize {
            return Err(PlannerError::InvalidParameter(
                "grid dimensions exceed the addressable range".to_string(),
            ));
        }
        Ok(Self { grid: free })
    }

    /// Grid without obstacles
    pub fn open(height: usize, width: usize) -> Result<Self, PlannerError> {
        Self::new(na::DMatrix::from_element(height, width, true))
    }

    /// Build a grid from a predicate over `(row, col)` returning `true` for free cells
    pub fn from_fn<F>(height: usize, width: usize, free: F) -> Result<Self, PlannerError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self::new(na::DMatrix::from_fn(height, width, free))
    }

    pub fn width(&self) -> usize {
        self.grid.ncols()
    }

    pub fn height(&self) -> usize {
        self.grid.nrows()
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.height()
            && pos.col >= 0
            && (pos.col as usize) < self.width()
    }

    /// Out-of-bounds positions are never free
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.in_bounds(pos) && self.grid[(pos.row as usize, pos.col as usize)]
    }

    pub fn set_free(&mut self, pos: GridPos) {
        if self.in_bounds(pos) {
            self.grid[(pos.row as usize, pos.col as usize)] = true;
        }
    }

    pub fn set_blocked(&mut self, pos: GridPos) {
        if self.in_bounds(pos) {
            self.grid[(pos.row as usize, pos.col as usize)] = false;
        }
    }

    /// Row-major index of an in-bounds position
    pub fn cell_index(&self, pos: GridPos) -> usize {
        pos.row as usize * self.width() + pos.col as usize
    }

    pub fn cell_position(&self, index: usize) -> GridPos {
        GridPos::new((index / self.width()) as i32, (index % self.width()) as i32)
    }

    pub fn free_count(&self) -> usize {
        self.grid.iter().filter(|&&free| free).count()
    }

    /// Positions of all blocked cells in row-major order
    pub fn obstacles(&self) -> Vec<GridPos> {
        (0..self.cell_count())
            .map(|index| self.cell_position(index))
            .filter(|&pos| !self.is_free(pos))
            .collect()
    }

    /// Check start and goal before a search: both inside the map, both
    /// free, and not the same cell. The first failing rule is reported.
    pub fn validate_endpoints(&self, start: GridPos, goal: GridPos) -> PlannerResult<()> {
        if !(self.in_bounds(start) && self.in_bounds(goal)) {
            return Err(PlannerError::InvalidEndpoint(format!(
                "start {} or goal {} is out of the {}x{} map",
                start,
                goal,
                self.height(),
                self.width()
            )));
        }
        if !(self.is_free(start) && self.is_free(goal)) {
            return Err(PlannerError::InvalidEndpoint(format!(
                "start {} or goal {} is not free",
                start, goal
            )));
        }
        if start == goal {
            return Err(PlannerError::InvalidEndpoint(format!(
                "start and goal coincide at {}",
                start
            )));
        }
        Ok(())
    }
}

impl Deref for GridMap {
    type Target = na::DMatrix<bool>;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled_grid() -> GridMap {
        // 3x4 with the middle column of row 1 blocked
        GridMap::from_fn(3, 4, |r, c| !(r == 1 && c == 1)).unwrap()
    }

    #[test]
    fn test_bounds_and_occupancy() {
        let grid = walled_grid();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert!(grid.in_bounds(GridPos::new(2, 3)));
        assert!(!grid.in_bounds(GridPos::new(3, 0)));
        assert!(!grid.in_bounds(GridPos::new(0, -1)));
        assert!(!grid.is_free(GridPos::new(1, 1)));
        assert!(grid.is_free(GridPos::new(1, 2)));
        assert!(!grid.is_free(GridPos::new(-1, 0)));
        assert_eq!(grid.free_count(), 11);
        assert_eq!(grid.obstacles(), vec![GridPos::new(1, 1)]);
    }

    #[test]
    fn test_row_major_index_on_non_square_grid() {
        let grid = walled_grid();
        let pos = GridPos::new(2, 1);
        assert_eq!(grid.cell_index(pos), 9);
        assert_eq!(grid.cell_position(9), pos);
    }

    #[test]
    fn test_set_free() {
        let mut grid = walled_grid();
        grid.set_free(GridPos::new(1, 1));
        assert!(grid.is_free(GridPos::new(1, 1)));
        grid.set_blocked(GridPos::new(0, 0));
        assert!(!grid.is_free(GridPos::new(0, 0)));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(GridMap::open(0, 5).is_err());
    }

    #[test]
    fn test_validate_endpoints() {
        let grid = walled_grid();
        let ok = grid.validate_endpoints(GridPos::new(0, 0), GridPos::new(2, 3));
        assert!(ok.is_ok());

        let out = grid.validate_endpoints(GridPos::new(0, 0), GridPos::new(5, 5));
        assert!(matches!(out, Err(PlannerError::InvalidEndpoint(_))));

        let blocked = grid.validate_endpoints(GridPos::new(1, 1), GridPos::new(2, 3));
        assert!(matches!(blocked, Err(PlannerError::InvalidEndpoint(_))));

        let same = grid.validate_endpoints(GridPos::new(2, 3), GridPos::new(2, 3));
        assert!(matches!(same, Err(PlannerError::InvalidEndpoint(_))));
    }
}
