//! Open set of the anytime search
//!
//! The frontier is an unordered list of cell indices. The best candidate is
//! found by scanning for the lowest `f`, either sequentially or as a rayon
//! map-reduce. Both scans minimise the key `(f, position)`, so equal costs
//! resolve to the leftmost entry and the two variants always agree.

use ordered_float::OrderedFloat;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::path_planning::cell_table::CellTable;
use crate::path_planning::visited_set::VisitedSet;

#[derive(Debug, Clone)]
pub struct Frontier {
    entries: Vec<usize>,
    members: Vec<bool>,
}

impl Frontier {
    /// `cell_count` bounds the cell indices that may be inserted
    pub fn new(cell_count: usize) -> Self {
        Frontier {
            entries: Vec::new(),
            members: vec![false; cell_count],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.members[cell]
    }

    /// Cell index stored at `position`
    pub fn get(&self, position: usize) -> usize {
        self.entries[position]
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Append a cell; returns false (and changes nothing) if already present
    pub fn insert(&mut self, cell: usize) -> bool {
        if self.members[cell] {
            return false;
        }
        self.members[cell] = true;
        self.entries.push(cell);
        true
    }

    /// Position of the lowest-`f` entry, leftmost on ties
    pub fn select_minimum(&self, cells: &CellTable) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, &cell)| (OrderedFloat(cells.f(cell)), position))
            .min()
            .map(|(_, position)| position)
    }

    /// Same result as [`Frontier::select_minimum`], computed on `pool`.
    ///
    /// Each worker reduces its share of the snapshot to a local best key and
    /// the partial results are merged with `min`. Cell data is only read.
    pub fn select_minimum_parallel(&self, cells: &CellTable, pool: &ThreadPool) -> Option<usize> {
        let entries = &self.entries;
        pool.install(|| {
            entries
                .par_iter()
                .enumerate()
                .map(|(position, &cell)| (OrderedFloat(cells.f(cell)), position))
                .min()
                .map(|(_, position)| position)
        })
    }

    /// Remove the entry at `position`, keeping the order of the others
    pub fn remove_at(&mut self, position: usize) -> usize {
        let cell = self.entries.remove(position);
        self.members[cell] = false;
        cell
    }

    /// Move every entry with `f >= threshold` into `visited`.
    ///
    /// Kept entries stay in their relative order. Returns the number moved.
    pub fn prune(&mut self, threshold: f64, cells: &CellTable, visited: &mut VisitedSet) -> usize {
        let members = &mut self.members;
        let mut pruned = 0;
        self.entries.retain(|&cell| {
            if cells.f(cell) >= threshold {
                members[cell] = false;
                visited.insert(cell);
                pruned += 1;
                false
            } else {
                true
            }
        });
        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::GridMap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn table_with_costs(costs: &[f64]) -> CellTable {
        let grid = GridMap::open(1, costs.len()).unwrap();
        let mut table = CellTable::new(&grid).unwrap();
        for (i, &f) in costs.iter().enumerate() {
            table.update(i, f, 0.0, i);
        }
        table
    }

    fn pool(threads: usize) -> ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut frontier = Frontier::new(5);
        assert!(frontier.insert(2));
        assert!(!frontier.insert(2));
        assert_eq!(frontier.len(), 1);
        assert!(frontier.contains(2));
    }

    #[test]
    fn test_select_minimum_leftmost_tie() {
        let table = table_with_costs(&[5.0, 2.0, 3.0, 2.0]);
        let mut frontier = Frontier::new(4);
        for cell in &[0, 3, 1, 2] {
            frontier.insert(*cell);
        }
        // cells 3 and 1 share f = 2, cell 3 comes first
        assert_eq!(frontier.select_minimum(&table), Some(1));
        assert_eq!(frontier.get(1), 3);
        assert_eq!(Frontier::new(4).select_minimum(&table), None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let costs: Vec<f64> = (0..5000).map(|_| rng.gen_range(0..50) as f64 * 0.5).collect();
        let table = table_with_costs(&costs);

        for &threads in &[1, 2, 3, 8] {
            let pool = pool(threads);
            let mut frontier = Frontier::new(costs.len());
            for cell in 0..costs.len() {
                // interleave insertion order so ties are spread across workers
                frontier.insert((cell * 7919) % costs.len());
                if cell % 97 == 0 {
                    assert_eq!(
                        frontier.select_minimum_parallel(&table, &pool),
                        frontier.select_minimum(&table)
                    );
                }
            }
            assert_eq!(
                frontier.select_minimum_parallel(&table, &pool),
                frontier.select_minimum(&table)
            );
        }
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut frontier = Frontier::new(6);
        for cell in &[4, 1, 5, 2] {
            frontier.insert(*cell);
        }
        assert_eq!(frontier.remove_at(1), 1);
        assert_eq!(frontier.entries(), &[4, 5, 2]);
        assert!(!frontier.contains(1));
        assert!(frontier.insert(1));
    }

    #[test]
    fn test_prune_moves_dominated_entries_to_visited() {
        let table = table_with_costs(&[1.0, 6.0, 3.0, 5.0, 4.0]);
        let mut frontier = Frontier::new(5);
        let mut visited = VisitedSet::new(5);
        for cell in 0..5 {
            frontier.insert(cell);
        }

        let pruned = frontier.prune(4.0, &table, &mut visited);

        assert_eq!(pruned, 3);
        assert_eq!(frontier.entries(), &[0, 2]);
        assert!(visited.contains(1) && visited.contains(3) && visited.contains(4));
        assert!(frontier.entries().iter().all(|&c| !visited.contains(c)));
    }
}
