//! Dense per-cell search state, indexed by row-major position

use std::ops::Index;

use crate::common::{GridPos, PlannerError, PlannerResult};
use crate::utils::GridMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
    /// Cost of the best known path from the start, `INFINITY` while unreached
    pub g: f64,
    /// Estimate to the goal, set the first time the cell is reached
    pub h: Option<f64>,
    pub f: f64,
    /// Predecessor on the best known path; the start cell is its own parent
    pub parent: Option<usize>,
}

impl Cell {
    fn unreached(pos: GridPos) -> Self {
        Cell {
            row: pos.row,
            col: pos.col,
            g: f64::INFINITY,
            h: None,
            f: f64::INFINITY,
            parent: None,
        }
    }

    pub fn position(&self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    pub fn is_reached(&self) -> bool {
        self.g.is_finite()
    }
}

/// Search state for every grid cell.
///
/// Owned by a single search run and dropped with it.
#[derive(Debug, Clone)]
pub struct CellTable {
    cells: Vec<Cell>,
}

impl CellTable {
    /// Allocation failure is reported instead of aborting the process
    pub fn new(grid: &GridMap) -> PlannerResult<Self> {
        let count = grid.cell_count();
        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|e| {
            PlannerError::AllocationError(format!("cell table for {} cells: {}", count, e))
        })?;
        cells.extend((0..count).map(|index| Cell::unreached(grid.cell_position(index))));
        Ok(CellTable { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark `index` as the start: g = 0, self-parented
    pub fn init_start(&mut self, index: usize, h: f64) {
        let cell = &mut self.cells[index];
        cell.g = 0.0;
        cell.h = Some(h);
        cell.f = h;
        cell.parent = Some(index);
    }

    /// Record a new best path to `index` through `parent`; keeps f = g + h
    pub fn update(&mut self, index: usize, g: f64, h: f64, parent: usize) {
        let cell = &mut self.cells[index];
        cell.g = g;
        cell.h = Some(h);
        cell.f = g + h;
        cell.parent = Some(parent);
    }

    pub fn g(&self, index: usize) -> f64 {
        self.cells[index].g
    }

    pub fn f(&self, index: usize) -> f64 {
        self.cells[index].f
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.cells[index].parent
    }

    pub fn is_start(&self, index: usize) -> bool {
        self.cells[index].parent == Some(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl Index<usize> for CellTable {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_unreached() {
        let grid = GridMap::open(3, 4).unwrap();
        let table = CellTable::new(&grid).unwrap();
        assert_eq!(table.len(), 12);
        assert!(table.iter().all(|c| !c.is_reached() && c.parent.is_none() && c.h.is_none()));
        assert_eq!(table[6].position(), GridPos::new(1, 2));
    }

    #[test]
    fn test_start_and_update() {
        let grid = GridMap::open(3, 3).unwrap();
        let mut table = CellTable::new(&grid).unwrap();
        table.init_start(0, 2.5);
        assert!(table.is_start(0));
        assert_eq!(table.g(0), 0.0);
        assert_eq!(table.f(0), 2.5);

        table.update(4, std::f64::consts::SQRT_2, 1.5, 0);
        assert_eq!(table.parent(4), Some(0));
        assert!((table.f(4) - (std::f64::consts::SQRT_2 + 1.5)).abs() < 1e-12);
        assert!(!table.is_start(4));
    }
}
