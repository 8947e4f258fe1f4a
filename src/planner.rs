use rand::Rng;
use rand::seq::SliceRandom;

use crate::index::NodeId;

/// One round's batch schedule: a seeded Fisher-Yates permutation of the node
/// ids, handed out lazily in consecutive `batch_size` chunks. The final batch
/// may be short. Re-planning with the same seed replays the same sequence;
/// there is no mid-stream resume.
#[derive(Clone, Debug)]
pub struct BatchPlan {
    order: Vec<NodeId>,
    batch_size: usize,
    cursor: usize,
}

impl BatchPlan {
    pub fn new<R: Rng>(mut node_ids: Vec<NodeId>, batch_size: usize, rng: &mut R) -> Self {
        assert!(batch_size > 0, "batch_size must be positive");
        node_ids.shuffle(rng);
        Self {
            order: node_ids,
            batch_size,
            cursor: 0,
        }
    }

    pub fn batch_count(&self) -> usize {
        self.order.len().div_ceil(self.batch_size)
    }
}

impl Iterator for BatchPlan {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.order.len() {
            return None;
        }
        let end = (self.cursor + self.batch_size).min(self.order.len());
        let batch = self.order[self.cursor..end].to_vec();
        self.cursor = end;
        Some(batch)
    }
}
