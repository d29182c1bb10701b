//! Connectivity, step costs and the distance heuristic

use itertools::iproduct;

use crate::common::{GridPos, PlannerError, PlannerResult};

/// Neighbor directions considered per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Orthogonal moves only
    Four,
    /// Orthogonal and diagonal moves
    Eight,
}

impl Default for Connectivity {
    fn default() -> Self {
        Connectivity::Eight
    }
}

impl Connectivity {
    pub fn from_degree(degree: u32) -> PlannerResult<Self> {
        match degree {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(PlannerError::InvalidParameter(format!(
                "{} is not a valid connectivity",
                other
            ))),
        }
    }

    pub fn degree(self) -> usize {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }

    pub fn allows(self, d_row: i32, d_col: i32) -> bool {
        let unit = d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0);
        match self {
            Connectivity::Four => unit && (d_row == 0 || d_col == 0),
            Connectivity::Eight => unit,
        }
    }

    /// (d_row, d_col, cost) for every allowed move, scanning the 3x3 block
    /// from top-left to bottom-right
    pub fn motion_model(self) -> Vec<(i32, i32, f64)> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(d_row, d_col)| self.allows(d_row, d_col))
            .map(|(d_row, d_col)| (d_row, d_col, step_cost(GridPos::new(0, 0), GridPos::new(d_row, d_col))))
            .collect()
    }
}

pub fn euclidean(a: GridPos, b: GridPos) -> f64 {
    a.distance(&b)
}

pub fn manhattan(a: GridPos, b: GridPos) -> f64 {
    ((a.row - b.row).abs() + (a.col - b.col).abs()) as f64
}

/// Admissible estimate of the remaining cost from `a` to `b`
pub fn estimate(connectivity: Connectivity, a: GridPos, b: GridPos) -> f64 {
    match connectivity {
        Connectivity::Four => manhattan(a, b),
        Connectivity::Eight => euclidean(a, b),
    }
}

/// Cost of a single move between adjacent cells: 1 orthogonal, sqrt(2) diagonal
pub fn step_cost(a: GridPos, b: GridPos) -> f64 {
    if a.row != b.row && a.col != b.col {
        std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_model_sizes() {
        assert_eq!(Connectivity::Four.motion_model().len(), 4);
        assert_eq!(Connectivity::Eight.motion_model().len(), 8);
        assert!(Connectivity::Eight
            .motion_model()
            .iter()
            .all(|&(dr, dc, _)| (dr, dc) != (0, 0)));
    }

    #[test]
    fn test_motion_model_order_and_costs() {
        let motion = Connectivity::Eight.motion_model();
        assert_eq!((motion[0].0, motion[0].1), (-1, -1));
        assert_eq!((motion[7].0, motion[7].1), (1, 1));
        assert!((motion[0].2 - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((motion[1].2 - 1.0).abs() < 1e-12);

        let four: Vec<(i32, i32)> = Connectivity::Four
            .motion_model()
            .iter()
            .map(|&(dr, dc, _)| (dr, dc))
            .collect();
        assert_eq!(four, vec![(-1, 0), (0, -1), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_from_degree() {
        assert_eq!(Connectivity::from_degree(4).unwrap(), Connectivity::Four);
        assert_eq!(Connectivity::from_degree(8).unwrap(), Connectivity::Eight);
        assert!(Connectivity::from_degree(6).is_err());
    }

    #[test]
    fn test_estimates() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert!((estimate(Connectivity::Eight, a, b) - 5.0).abs() < 1e-12);
        assert!((estimate(Connectivity::Four, a, b) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_never_exceeds_octile_cost() {
        // octile distance is the true obstacle-free cost on an 8-connected grid
        for dr in 0..12 {
            for dc in 0..12 {
                let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
                let octile = lo as f64 * std::f64::consts::SQRT_2 + (hi - lo) as f64;
                let h = estimate(Connectivity::Eight, GridPos::new(0, 0), GridPos::new(dr, dc));
                assert!(h <= octile + 1e-12);
            }
        }
    }

    #[test]
    fn test_heuristic_is_consistent_with_step_costs() {
        let goal = GridPos::new(5, 9);
        for conn in [Connectivity::Four, Connectivity::Eight].iter() {
            for &(dr, dc, cost) in &conn.motion_model() {
                let a = GridPos::new(3, 3);
                let b = a.offset(dr, dc);
                assert!(estimate(*conn, a, goal) <= cost + estimate(*conn, b, goal) + 1e-12);
            }
        }
    }
}
