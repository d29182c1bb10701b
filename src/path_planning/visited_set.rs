//! Closed set: cells that were already expanded

/// Expanded cell indices in insertion order, with O(1) membership.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    order: Vec<usize>,
    members: Vec<bool>,
}

impl VisitedSet {
    /// `cell_count` bounds the cell indices that may be inserted
    pub fn new(cell_count: usize) -> Self {
        VisitedSet {
            order: Vec::new(),
            members: vec![false; cell_count],
        }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.members[cell]
    }

    /// Returns false if the cell was already present
    pub fn insert(&mut self, cell: usize) -> bool {
        if self.members[cell] {
            return false;
        }
        self.members[cell] = true;
        self.order.push(cell);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.order.iter()
    }
}
