use std::collections::HashSet;

use querygen::{BatchPlan, NodeId};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_batches_partition_the_node_set() {
    let ids: Vec<NodeId> = (0..103).collect();
    let mut rng = StdRng::seed_from_u64(3);
    let batches: Vec<Vec<NodeId>> = BatchPlan::new(ids.clone(), 10, &mut rng).collect();

    assert_eq!(batches.len(), 11);
    assert!(batches[..10].iter().all(|batch| batch.len() == 10));
    assert_eq!(batches[10].len(), 3);

    let union: HashSet<NodeId> = batches.iter().flatten().copied().collect();
    let expected: HashSet<NodeId> = ids.into_iter().collect();
    assert_eq!(union, expected);
    assert_eq!(batches.iter().map(Vec::len).sum::<usize>(), 103);
}

#[test]
fn test_same_seed_replays_the_same_plan() {
    let ids: Vec<NodeId> = (0..256).collect();
    let first: Vec<Vec<NodeId>> =
        BatchPlan::new(ids.clone(), 32, &mut StdRng::seed_from_u64(11)).collect();
    let second: Vec<Vec<NodeId>> =
        BatchPlan::new(ids, 32, &mut StdRng::seed_from_u64(11)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_shuffle_differently() {
    let ids: Vec<NodeId> = (0..256).collect();
    let first: Vec<Vec<NodeId>> =
        BatchPlan::new(ids.clone(), 256, &mut StdRng::seed_from_u64(1)).collect();
    let second: Vec<Vec<NodeId>> =
        BatchPlan::new(ids, 256, &mut StdRng::seed_from_u64(2)).collect();
    assert_ne!(first, second);
}

#[test]
fn test_batch_count_matches_iteration() {
    let ids: Vec<NodeId> = (0..100).collect();
    let mut rng = StdRng::seed_from_u64(5);
    let plan = BatchPlan::new(ids, 7, &mut rng);
    assert_eq!(plan.batch_count(), 15);
    assert_eq!(plan.count(), 15);
}

#[test]
fn test_batch_size_one_yields_singletons() {
    let ids: Vec<NodeId> = (0..5).collect();
    let mut rng = StdRng::seed_from_u64(8);
    let batches: Vec<Vec<NodeId>> = BatchPlan::new(ids, 1, &mut rng).collect();
    assert_eq!(batches.len(), 5);
    assert!(batches.iter().all(|batch| batch.len() == 1));
}
