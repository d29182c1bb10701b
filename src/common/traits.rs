//! Common traits defining interfaces for grid planners

use crate::common::error::PlannerError;
use crate::common::types::*;

/// Trait for grid-based path planning algorithms
pub trait GridPathPlanner {
    /// Plan a path on a grid from start to goal
    fn plan(&self, start: GridPos, goal: GridPos) -> Result<GridPath, PlannerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that traits compile correctly
    struct StraightLinePlanner;

    impl GridPathPlanner for StraightLinePlanner {
        fn plan(&self, start: GridPos, goal: GridPos) -> Result<GridPath, PlannerError> {
            Ok(GridPath::from_cells(vec![start, goal]))
        }
    }

    #[test]
    fn test_grid_path_planner_trait() {
        let planner = StraightLinePlanner;
        let result = planner.plan(GridPos::new(0, 0), GridPos::new(1, 1));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }
}
