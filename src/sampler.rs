use ahash::AHashSet;
use rand::Rng;

use crate::index::{GraphIndex, NodeId};

/// One batch's sampling parameters. Not mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRequest {
    pub seeds: Vec<NodeId>,
    pub num_hops: u32,
    pub fan_out: usize,
}

/// Expands the request's seeds through `num_hops` hops of fan-out-limited
/// breadth-first sampling.
///
/// At each hop, every frontier node contributes all of its neighbors when its
/// degree is at most `fan_out`, otherwise `fan_out` neighbors drawn uniformly
/// without replacement from the supplied RNG stream. A node reached by
/// multiple paths appears once, at first discovery, and only first-discovered
/// nodes join the next frontier. The result lists the seeds first, in request
/// order, then each hop's newly discovered nodes in discovery order.
///
/// Identical `(index, request, rng seed)` triples always produce identical
/// results; the workload's reproducibility rests on this.
pub fn sample<R: Rng>(index: &GraphIndex, request: &SampleRequest, rng: &mut R) -> Vec<NodeId> {
    let mut discovered = AHashSet::with_capacity(request.seeds.len());
    let mut ordered = Vec::with_capacity(request.seeds.len());
    for &seed in &request.seeds {
        if discovered.insert(seed) {
            ordered.push(seed);
        }
    }
    let mut frontier = ordered.clone();

    for _ in 0..request.num_hops {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for &node in &frontier {
            let neighbors = index.neighbors(node);
            if neighbors.len() <= request.fan_out {
                for &neighbor in neighbors {
                    if discovered.insert(neighbor) {
                        ordered.push(neighbor);
                        next.push(neighbor);
                    }
                }
            } else {
                for slot in rand::seq::index::sample(rng, neighbors.len(), request.fan_out) {
                    let neighbor = neighbors[slot];
                    if discovered.insert(neighbor) {
                        ordered.push(neighbor);
                        next.push(neighbor);
                    }
                }
            }
        }
        frontier = next;
    }
    ordered
}
