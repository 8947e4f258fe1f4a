use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::GenerateConfig,
    dataset, edgelist,
    errors::QuerygenError,
    index::GraphIndex,
    planner::BatchPlan,
    run::{self, RunMetadata},
    sampler::{self, SampleRequest},
    writer,
};

/// Runs the whole generation pass: resolve the edge list, build the index
/// once, allocate a run directory under `<edge list dir>/queries`, then emit
/// one output file per round with `seed = base_seed + round`.
pub fn run(config: &GenerateConfig) -> Result<(), QuerygenError> {
    let edgelist_file = resolve_edgelist(config)?;
    let output_root = edgelist_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("queries");
    let allocated = run::allocate_run(&output_root, &RunMetadata::new(config))?;
    println!("Run directory created at '{}'", allocated.dir.display());

    println!("Reading edge list from '{}'", edgelist_file.display());
    let edges = edgelist::read_edgelist(&edgelist_file)?;
    let index = GraphIndex::from_edges(&edges)?;
    println!(
        "Indexed {} nodes and {} edges",
        index.node_count(),
        index.edge_count()
    );

    for round in 0..config.rounds {
        let seed = config.base_seed + round;
        println!("Generating queries (seed={seed})");
        let path = generate_round(
            &index,
            seed,
            config.batch_size,
            config.num_hops,
            config.fan_out,
            &allocated.dir,
        )?;
        println!("Saved queries to '{}'", path.display());
    }
    Ok(())
}

/// One round over a prebuilt index. A fresh RNG seeded from `seed` drives the
/// batch shuffle first and then the per-batch sampling in batch order, so the
/// whole round replays from the seed alone. Batch results stream straight
/// into the writer, one at a time.
pub fn generate_round(
    index: &GraphIndex,
    seed: u64,
    batch_size: usize,
    num_hops: u32,
    fan_out: usize,
    run_dir: &Path,
) -> Result<PathBuf, QuerygenError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plan = BatchPlan::new(index.node_ids(), batch_size, &mut rng);
    let results = plan.map(|batch| {
        let request = SampleRequest {
            seeds: batch,
            num_hops,
            fan_out,
        };
        sampler::sample(index, &request, &mut rng)
    });
    writer::write_round(run_dir, seed, results)
}

fn resolve_edgelist(config: &GenerateConfig) -> Result<PathBuf, QuerygenError> {
    match &config.edgelist_file {
        Some(path) => Ok(path.clone()),
        None => Ok(dataset::download_and_extract(config.dataset, &config.dataset_dir)?.edgelist),
    }
}
