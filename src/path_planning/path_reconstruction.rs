//! Backward path reconstruction from the goal to the start

use crate::common::{GridPos, PlannerError, PlannerResult};
use crate::path_planning::cell_table::CellTable;
use crate::utils::GridMap;

/// How the predecessor is chosen at each backward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSelection {
    /// Follow the stored parent chain; path cost equals g(goal)
    Recorded,
    /// Re-scan the neighbors and step to the one with the lowest g.
    /// Smooths the path but may not reproduce g(goal).
    LowestG,
}

impl Default for ParentSelection {
    fn default() -> Self {
        ParentSelection::Recorded
    }
}

/// Walk back from `goal` to the self-parented start cell.
///
/// Returns cell indices in goal-to-start order. `passable` decides which
/// neighbor cells may be chosen under [`ParentSelection::LowestG`].
pub fn reconstruct_path<F>(
    grid: &GridMap,
    cells: &CellTable,
    motion: &[(i32, i32, f64)],
    goal: usize,
    selection: ParentSelection,
    passable: F,
) -> PlannerResult<Vec<usize>>
where
    F: Fn(GridPos) -> bool,
{
    let mut path = vec![goal];
    let mut current = goal;

    while !cells.is_start(current) {
        // every step moves to a strictly lower g, so a walk longer than the
        // table means the chain is corrupt
        if path.len() > cells.len() {
            return Err(PlannerError::InternalError(format!(
                "parent chain from {} does not reach the start",
                grid.cell_position(goal)
            )));
        }

        let recorded = cells.parent(current).ok_or_else(|| {
            PlannerError::InternalError(format!(
                "cell {} on the path has no parent",
                grid.cell_position(current)
            ))
        })?;

        let next = match selection {
            ParentSelection::Recorded => recorded,
            ParentSelection::LowestG => lowest_g_neighbor(grid, cells, motion, current, recorded, &passable),
        };

        path.push(next);
        current = next;
    }

    Ok(path)
}

fn lowest_g_neighbor<F>(
    grid: &GridMap,
    cells: &CellTable,
    motion: &[(i32, i32, f64)],
    current: usize,
    recorded: usize,
    passable: &F,
) -> usize
where
    F: Fn(GridPos) -> bool,
{
    let pos = grid.cell_position(current);
    let mut best = recorded;
    for &(d_row, d_col, _) in motion {
        let candidate = pos.offset(d_row, d_col);
        if !passable(candidate) {
            continue;
        }
        let index = grid.cell_index(candidate);
        if cells.g(index) < cells.g(best) {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::heuristic::Connectivity;

    // 1x4 corridor with a hand-built parent chain 3 -> 2 -> 1 -> 0
    fn corridor() -> (GridMap, CellTable) {
        let grid = GridMap::open(1, 4).unwrap();
        let mut cells = CellTable::new(&grid).unwrap();
        cells.init_start(0, 3.0);
        cells.update(1, 1.0, 2.0, 0);
        cells.update(2, 2.0, 1.0, 1);
        cells.update(3, 3.0, 0.0, 2);
        (grid, cells)
    }

    #[test]
    fn test_recorded_chain() {
        let (grid, cells) = corridor();
        let motion = Connectivity::Eight.motion_model();
        let path = reconstruct_path(&grid, &cells, &motion, 3, ParentSelection::Recorded, |p| grid.is_free(p)).unwrap();
        assert_eq!(path, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_lowest_g_shortcut() {
        // 2x3 grid: the recorded chain detours through the bottom row but
        // the top-middle cell has a lower g
        let grid = GridMap::open(2, 3).unwrap();
        let mut cells = CellTable::new(&grid).unwrap();
        cells.init_start(0, 2.0);
        cells.update(1, 1.0, 1.0, 0); // (0,1)
        cells.update(3, 1.0, 2.0, 0); // (1,0)
        cells.update(4, 2.0, 1.0, 3); // (1,1)
        cells.update(2, 3.0, 0.0, 4); // (0,2) goal via (1,1)
        let motion = Connectivity::Eight.motion_model();

        let recorded = reconstruct_path(&grid, &cells, &motion, 2, ParentSelection::Recorded, |p| grid.is_free(p)).unwrap();
        assert_eq!(recorded, vec![2, 4, 3, 0]);

        let smoothed = reconstruct_path(&grid, &cells, &motion, 2, ParentSelection::LowestG, |p| grid.is_free(p)).unwrap();
        assert_eq!(smoothed, vec![2, 1, 0]);
    }

    #[test]
    fn test_missing_parent_is_an_error() {
        let grid = GridMap::open(1, 3).unwrap();
        let mut cells = CellTable::new(&grid).unwrap();
        cells.init_start(0, 2.0);
        cells.update(2, 2.0, 0.0, 1); // cell 1 never reached
        let motion = Connectivity::Four.motion_model();
        let result = reconstruct_path(&grid, &cells, &motion, 2, ParentSelection::Recorded, |p| grid.is_free(p));
        assert!(matches!(result, Err(PlannerError::InternalError(_))));
    }
}
