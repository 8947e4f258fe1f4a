use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::{config::GenerateConfig, errors::QuerygenError};

pub const METADATA_FILE: &str = "metadata.json";
const RUN_DIR_PREFIX: &str = "run-";

/// Everything needed to replay a run, plus its UTC creation timestamp.
#[derive(Clone, Debug, Serialize)]
pub struct RunMetadata {
    pub dataset_name: String,
    pub dataset_dir: String,
    pub edgelist_file: Option<String>,
    pub rounds: u64,
    pub base_seed: u64,
    pub batch_size: usize,
    pub num_hops: u32,
    pub fan_out: usize,
    pub created_at: String,
}

impl RunMetadata {
    pub fn new(config: &GenerateConfig) -> Self {
        Self {
            dataset_name: config.dataset.name().to_string(),
            dataset_dir: config.dataset_dir.display().to_string(),
            edgelist_file: config
                .edgelist_file
                .as_ref()
                .map(|path| path.display().to_string()),
            rounds: config.rounds,
            base_seed: config.base_seed,
            batch_size: config.batch_size,
            num_hops: config.num_hops,
            fan_out: config.fan_out,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Run {
    pub id: u32,
    pub dir: PathBuf,
}

/// Allocates the next `run-%04d` directory under `output_root` and writes the
/// metadata record inside it. The id is the count of existing run directories
/// plus one.
///
/// The list-count-create sequence is not atomic: two invocations racing on
/// the same root can compute the same id, in which case the loser fails here
/// instead of reusing the directory.
pub fn allocate_run(output_root: &Path, metadata: &RunMetadata) -> Result<Run, QuerygenError> {
    fs::create_dir_all(output_root).map_err(|e| {
        QuerygenError::run_allocation(format!("{}: {e}", output_root.display()))
    })?;

    let id = count_existing_runs(output_root)? + 1;
    let dir = output_root.join(format!("{RUN_DIR_PREFIX}{id:04}"));
    if dir.exists() {
        return Err(QuerygenError::run_allocation(format!(
            "{} already exists",
            dir.display()
        )));
    }
    fs::create_dir(&dir)
        .map_err(|e| QuerygenError::run_allocation(format!("{}: {e}", dir.display())))?;

    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| QuerygenError::run_allocation(format!("metadata: {e}")))?;
    let metadata_path = dir.join(METADATA_FILE);
    fs::write(&metadata_path, json)
        .map_err(|e| QuerygenError::run_allocation(format!("{}: {e}", metadata_path.display())))?;

    Ok(Run { id, dir })
}

fn count_existing_runs(output_root: &Path) -> Result<u32, QuerygenError> {
    let entries = fs::read_dir(output_root).map_err(|e| {
        QuerygenError::run_allocation(format!("{}: {e}", output_root.display()))
    })?;
    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| {
            QuerygenError::run_allocation(format!("{}: {e}", output_root.display()))
        })?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir && entry.file_name().to_string_lossy().starts_with(RUN_DIR_PREFIX) {
            count += 1;
        }
    }
    Ok(count)
}
