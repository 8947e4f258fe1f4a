use crate::errors::QuerygenError;

pub type NodeId = u32;

/// Immutable out-adjacency index built once from a raw edge list.
///
/// Nodes are contiguous `0..N-1` with `N = 1 + max(endpoint)`; nodes that
/// never appear as a source still exist and report an empty neighbor list.
/// Duplicate edges are kept so that a node's stored degree mirrors its true
/// out-degree in the input, which the sampling weighting relies on.
#[derive(Clone, Debug)]
pub struct GraphIndex {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl GraphIndex {
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Result<Self, QuerygenError> {
        if edges.is_empty() {
            return Err(QuerygenError::invalid_graph("empty edge list"));
        }
        let mut max_id: NodeId = 0;
        for &(src, dst) in edges {
            max_id = max_id.max(src).max(dst);
        }
        let node_count = max_id as usize + 1;

        let mut counts = vec![0usize; node_count];
        for &(src, _) in edges {
            counts[src as usize] += 1;
        }
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut total = 0usize;
        offsets.push(0);
        for count in &counts {
            total += count;
            offsets.push(total);
        }

        // Fill in edge-list order so per-node adjacency keeps the input order.
        let mut cursors = offsets[..node_count].to_vec();
        let mut targets = vec![0 as NodeId; edges.len()];
        for &(src, dst) in edges {
            targets[cursors[src as usize]] = dst;
            cursors[src as usize] += 1;
        }
        Ok(Self { offsets, targets })
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Out-neighbors of `node` in edge-list order, duplicates included.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.offsets[node as usize];
        let end = self.offsets[node as usize + 1];
        &self.targets[start..end]
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.node_count() as NodeId).collect()
    }
}
