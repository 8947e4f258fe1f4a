//! Deterministic synthetic edge-list generators for tests and benchmarks.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::index::NodeId;

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

pub fn generate_edges(shape: GraphShape, node_count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    assert!(node_count > 1, "node_count must exceed 1");
    match shape {
        GraphShape::Line => line_edges(node_count),
        GraphShape::Star => star_edges(node_count),
        GraphShape::RandomErdosRenyi { edges } => random_edges(node_count, edges, seed),
        GraphShape::ScaleFree { m } => scale_free_edges(node_count, m, seed),
    }
}

fn line_edges(count: usize) -> Vec<(NodeId, NodeId)> {
    (0..count - 1)
        .map(|idx| (idx as NodeId, idx as NodeId + 1))
        .collect()
}

fn star_edges(count: usize) -> Vec<(NodeId, NodeId)> {
    (1..count).map(|leaf| (0, leaf as NodeId)).collect()
}

/// Uniform edge sample via geometric skips over the ordered pair space, so
/// the result is exact-count without rejection loops.
fn random_edges(node_count: usize, edge_count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    let total_pairs = pair_count(node_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        idx += sample_geometric(&mut rng, p);
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, node_count as u64);
        edges.push((from as NodeId, to as NodeId));
        idx += 1;
        remaining_edges -= 1;
    }
    edges
}

/// Preferential attachment: each new node receives `m` edges from existing
/// nodes picked proportionally to their degree, so early nodes become
/// high-out-degree hubs.
fn scale_free_edges(node_count: usize, m: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    assert!(m > 0, "m must be positive");
    assert!(node_count > m + 1, "node_count must exceed m + 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut degrees = vec![0usize; node_count];
    let mut edges = Vec::new();
    let core = m + 1;
    for u in 0..core {
        for v in (u + 1)..core {
            edges.push((u as NodeId, v as NodeId));
            degrees[u] += 1;
            degrees[v] += 1;
        }
    }
    let mut total_degree: usize = degrees.iter().sum();
    for new_node in core..node_count {
        let mut targets = Vec::new();
        while targets.len() < m {
            let pick = rng.gen_range(0..total_degree);
            let mut cumulative = 0usize;
            for candidate in 0..new_node {
                cumulative += degrees[candidate];
                if pick < cumulative {
                    if !targets.contains(&candidate) {
                        targets.push(candidate);
                    }
                    break;
                }
            }
        }
        targets.sort_unstable();
        targets.dedup();
        while targets.len() < m {
            targets.push(targets.len() % new_node);
            targets.sort_unstable();
            targets.dedup();
        }
        for target in targets {
            edges.push((target as NodeId, new_node as NodeId));
            degrees[target] += 1;
            degrees[new_node] += 1;
            total_degree += 2;
        }
    }
    edges
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < nodes - 1 {
        let remaining = nodes - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (nodes - 2, nodes - 1)
}
