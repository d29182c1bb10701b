//! Random occupancy map generation
//!
//! Produces reproducible benchmark maps: every cell is blocked
//! independently with the configured probability, driven by a seeded RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{PlannerError, PlannerResult};
use crate::utils::grid_map::GridMap;

/// Configuration for map generation
#[derive(Debug, Clone)]
pub struct MapGenConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Percentage of blocked cells, 0..=100
    pub obstacle_percent: u32,
    /// RNG seed, the same seed always yields the same map
    pub seed: u64,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            obstacle_percent: 10,
            seed: 0,
        }
    }
}

impl MapGenConfig {
    /// Square map with the given side length
    pub fn square(dim: usize, obstacle_percent: u32) -> Self {
        Self {
            width: dim,
            height: dim,
            obstacle_percent,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlannerError::InvalidParameter(format!(
                "{}x{} is not a valid map dimension",
                self.height, self.width
            )));
        }
        if self.obstacle_percent > 100 {
            return Err(PlannerError::InvalidParameter(format!(
                "{} is not a valid obstacle percentage",
                self.obstacle_percent
            )));
        }
        Ok(())
    }
}

pub fn generate_map(config: &MapGenConfig) -> PlannerResult<GridMap> {
    config.validate()?;

    if config.obstacle_percent == 0 {
        return GridMap::open(config.height, config.width);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut free = Vec::with_capacity(config.width * config.height);
    for _ in 0..config.width * config.height {
        free.push(rng.gen_range(0..100) >= config.obstacle_percent);
    }

    let width = config.width;
    GridMap::from_fn(config.height, config.width, |r, c| free[r * width + c])
}

/// File name used by the map tools, e.g. `map-dim500x500-obst10`
pub fn default_map_file_name(config: &MapGenConfig) -> String {
    format!(
        "map-dim{}x{}-obst{}",
        config.height, config.width, config.obstacle_percent
    )
}
