//! Anytime A* path planning on an occupancy grid
//!
//! The search does not stop at the first goal hit. Every time the goal is
//! dequeued a path is reconstructed and kept if it is cheaper than the best
//! one so far, then every frontier entry whose `f` cannot beat the best cost
//! is pruned. The run ends when the frontier is empty or no entry can still
//! improve the best path.
//!
//! Minimum selection over the frontier may run on a rayon pool; everything
//! else (expansion, reconstruction, set updates) is sequential.

use log::{debug, info, trace};
use rayon::ThreadPool;

use crate::common::{GridPath, GridPathPlanner, GridPos, PlannerError, PlannerResult};
use crate::path_planning::cell_table::CellTable;
use crate::path_planning::frontier::Frontier;
use crate::path_planning::heuristic::{estimate, Connectivity};
use crate::path_planning::path_reconstruction::{reconstruct_path, ParentSelection};
use crate::path_planning::visited_set::VisitedSet;
use crate::utils::GridMap;

const MAX_WORKER_THREADS: usize = 1024;

/// Configuration for the anytime A* planner
#[derive(Debug, Clone)]
pub struct AnytimeAStarConfig {
    /// Neighbor directions considered per cell
    pub connectivity: Connectivity,
    /// Parent policy used when rebuilding a path
    pub parent_selection: ParentSelection,
    /// Select the frontier minimum on a worker pool
    pub parallel_selection: bool,
    /// Worker pool size, 0 = rayon default (one per core)
    pub worker_threads: usize,
    /// Frontiers shorter than this are scanned sequentially
    pub parallel_threshold: usize,
}

impl Default for AnytimeAStarConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            parent_selection: ParentSelection::Recorded,
            parallel_selection: true,
            worker_threads: 0,
            parallel_threshold: 256,
        }
    }
}

impl AnytimeAStarConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            parallel_selection: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if self.parallel_threshold == 0 {
            return Err(PlannerError::InvalidParameter(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        if self.worker_threads > MAX_WORKER_THREADS {
            return Err(PlannerError::InvalidParameter(format!(
                "{} worker threads exceed the limit of {}",
                self.worker_threads, MAX_WORKER_THREADS
            )));
        }
        Ok(())
    }
}

/// Final result of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Best path found; no frontier entry could improve it
    PathFound(GridPath),
    /// Frontier exhausted without reaching the goal
    Unreachable,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&GridPath> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }
}

/// Counters collected during one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Main loop iterations (selections)
    pub iterations: usize,
    /// Cells moved from the frontier into the visited set by selection
    pub expansions: usize,
    /// Times the goal was dequeued and a path rebuilt
    pub paths_found: usize,
    /// Cost of every path recorded as the new best, in order
    pub best_costs: Vec<f64>,
    /// Frontier entries discarded by pruning
    pub pruned: usize,
    pub max_frontier: usize,
    pub visited: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Termination {
    PathFound,
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    /// Select the next candidate or decide to stop
    Searching,
    /// Expand the frontier entry at this position
    Expanding(usize),
    Terminated(Termination),
}

/// Anytime A* planner over a fixed grid
pub struct AnytimeAStarPlanner {
    grid: GridMap,
    config: AnytimeAStarConfig,
    motion: Vec<(i32, i32, f64)>,
    pool: Option<ThreadPool>,
}

impl AnytimeAStarPlanner {
    pub fn new(grid: GridMap, config: AnytimeAStarConfig) -> PlannerResult<Self> {
        config.validate()?;
        let motion = config.connectivity.motion_model();

        let pool = if config.parallel_selection {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.worker_threads)
                .thread_name(|i| format!("frontier-min-{}", i))
                .build()
                .map_err(|e| PlannerError::ThreadPoolError(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(AnytimeAStarPlanner { grid, config, motion, pool })
    }

    /// Planner with the default configuration
    pub fn from_grid(grid: GridMap) -> PlannerResult<Self> {
        Self::new(grid, AnytimeAStarConfig::default())
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn config(&self) -> &AnytimeAStarConfig {
        &self.config
    }

    /// Number of workers used for minimum selection (1 when sequential)
    pub fn worker_count(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    /// Run a full search from `start` to `goal`
    pub fn search(&self, start: GridPos, goal: GridPos) -> PlannerResult<SearchReport> {
        self.grid.validate_endpoints(start, goal)?;
        info!(
            "searching {} -> {} on a {}x{} grid ({}-connected, {} worker(s))",
            start,
            goal,
            self.grid.height(),
            self.grid.width(),
            self.config.connectivity.degree(),
            self.worker_count()
        );

        let report = SearchRun::new(self, start, goal)?.run()?;

        match &report.outcome {
            SearchOutcome::PathFound(path) => info!(
                "path found: {} cells, cost {:.3}, {} iterations",
                path.len(),
                path.cost,
                report.stats.iterations
            ),
            SearchOutcome::Unreachable => info!(
                "goal not reachable after {} iterations",
                report.stats.iterations
            ),
        }
        Ok(report)
    }
}

impl GridPathPlanner for AnytimeAStarPlanner {
    fn plan(&self, start: GridPos, goal: GridPos) -> Result<GridPath, PlannerError> {
        match self.search(start, goal)?.outcome {
            SearchOutcome::PathFound(path) => Ok(path),
            SearchOutcome::Unreachable => Err(PlannerError::PlanningError(format!(
                "goal {} not reachable from {}",
                goal, start
            ))),
        }
    }
}

/// State of one search; owns the cell table and both sets
struct SearchRun<'a> {
    planner: &'a AnytimeAStarPlanner,
    start: GridPos,
    goal: GridPos,
    goal_index: usize,
    cells: CellTable,
    frontier: Frontier,
    visited: VisitedSet,
    best: Option<GridPath>,
    stats: SearchStats,
    state: SearchState,
}

impl<'a> SearchRun<'a> {
    fn new(planner: &'a AnytimeAStarPlanner, start: GridPos, goal: GridPos) -> PlannerResult<Self> {
        let grid = &planner.grid;
        let mut cells = CellTable::new(grid)?;
        let cell_count = cells.len();

        let start_index = grid.cell_index(start);
        cells.init_start(start_index, estimate(planner.config.connectivity, start, goal));

        let mut frontier = Frontier::new(cell_count);
        frontier.insert(start_index);

        Ok(SearchRun {
            planner,
            start,
            goal,
            goal_index: grid.cell_index(goal),
            cells,
            frontier,
            visited: VisitedSet::new(cell_count),
            best: None,
            stats: SearchStats {
                max_frontier: 1,
                ..Default::default()
            },
            state: SearchState::Searching,
        })
    }

    fn run(mut self) -> PlannerResult<SearchReport> {
        while !self.is_terminated() {
            self.step()?;
        }
        self.into_report()
    }

    fn is_terminated(&self) -> bool {
        matches!(self.state, SearchState::Terminated(_))
    }

    fn step(&mut self) -> PlannerResult<()> {
        self.state = match self.state {
            SearchState::Searching => self.select(),
            SearchState::Expanding(position) => {
                self.expand(position)?;
                SearchState::Searching
            }
            SearchState::Terminated(t) => SearchState::Terminated(t),
        };
        Ok(())
    }

    fn select(&mut self) -> SearchState {
        let found = if self.best.is_some() {
            Termination::PathFound
        } else {
            Termination::Unreachable
        };

        let position = match self.select_minimum() {
            Some(position) => position,
            None => return SearchState::Terminated(found),
        };
        self.stats.iterations += 1;

        if let Some(best) = &self.best {
            let f = self.cells.f(self.frontier.get(position));
            if f >= best.cost {
                debug!("no frontier entry below {:.3}, stopping", best.cost);
                return SearchState::Terminated(found);
            }
        }
        SearchState::Expanding(position)
    }

    fn select_minimum(&self) -> Option<usize> {
        match &self.planner.pool {
            Some(pool) if self.frontier.len() >= self.planner.config.parallel_threshold => {
                self.frontier.select_minimum_parallel(&self.cells, pool)
            }
            _ => self.frontier.select_minimum(&self.cells),
        }
    }

    /// Start and goal are passable even if the map marks them blocked
    fn is_passable(&self, pos: GridPos) -> bool {
        let grid = &self.planner.grid;
        grid.in_bounds(pos) && (grid.is_free(pos) || pos == self.start || pos == self.goal)
    }

    fn expand(&mut self, position: usize) -> PlannerResult<()> {
        let current = self.frontier.remove_at(position);
        self.visited.insert(current);
        self.stats.expansions += 1;

        if current == self.goal_index {
            self.record_goal_path()?;
        }

        let grid = &self.planner.grid;
        let connectivity = self.planner.config.connectivity;
        let pos = grid.cell_position(current);
        let current_g = self.cells.g(current);

        for &(d_row, d_col, step) in &self.planner.motion {
            let next_pos = pos.offset(d_row, d_col);
            if !self.is_passable(next_pos) {
                continue;
            }
            let next = grid.cell_index(next_pos);
            if self.visited.contains(next) {
                continue;
            }

            let tentative_g = current_g + step;
            if !self.frontier.contains(next) {
                let h = estimate(connectivity, next_pos, self.goal);
                self.cells.update(next, tentative_g, h, current);
                self.frontier.insert(next);
                trace!("open {} g={:.3} f={:.3}", next_pos, tentative_g, self.cells.f(next));
            } else if tentative_g < self.cells.g(next) {
                let h = estimate(connectivity, next_pos, self.goal);
                self.cells.update(next, tentative_g, h, current);
                trace!("relax {} g={:.3} f={:.3}", next_pos, tentative_g, self.cells.f(next));
            }
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        Ok(())
    }

    fn record_goal_path(&mut self) -> PlannerResult<()> {
        let backward = reconstruct_path(
            &self.planner.grid,
            &self.cells,
            &self.planner.motion,
            self.goal_index,
            self.planner.config.parent_selection,
            |pos| self.is_passable(pos),
        )?;
        let grid = &self.planner.grid;
        let path = GridPath::from_cells(backward.iter().rev().map(|&i| grid.cell_position(i)).collect());
        self.stats.paths_found += 1;

        let improves = self.best.as_ref().map_or(true, |best| path.cost < best.cost);
        if improves {
            debug!("new best path: {} cells, cost {:.3}", path.len(), path.cost);
            self.stats.best_costs.push(path.cost);
            self.best = Some(path);
        }

        if let Some(best) = &self.best {
            let pruned = self.frontier.prune(best.cost, &self.cells, &mut self.visited);
            self.stats.pruned += pruned;
            debug!("pruned {} frontier entries at f >= {:.3}", pruned, best.cost);
        }
        Ok(())
    }

    fn into_report(self) -> PlannerResult<SearchReport> {
        let outcome = match (self.state, self.best) {
            (SearchState::Terminated(Termination::PathFound), Some(path)) => SearchOutcome::PathFound(path),
            (SearchState::Terminated(Termination::Unreachable), None) => SearchOutcome::Unreachable,
            (state, _) => {
                return Err(PlannerError::InternalError(format!(
                    "search ended in inconsistent state {:?}",
                    state
                )))
            }
        };
        let mut stats = self.stats;
        stats.visited = self.visited.len();
        Ok(SearchReport { outcome, stats })
    }
}
