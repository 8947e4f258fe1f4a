use std::path::{Path, PathBuf};

use crate::{errors::QuerygenError, index::NodeId};

/// Streams one round's batch results into `queries-<seed>.csv` inside the run
/// directory.
///
/// One CSV record per batch result, written in the order the iterator yields
/// them; only one batch's node list is held in memory at a time. Rows are
/// appended in order but the file as a whole carries no atomicity guarantee.
pub fn write_round<I>(run_dir: &Path, seed: u64, results: I) -> Result<PathBuf, QuerygenError>
where
    I: IntoIterator<Item = Vec<NodeId>>,
{
    let path = run_dir.join(format!("queries-{seed}.csv"));
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", path.display())))?;
    for result in results {
        let record = result.iter().map(|node| node.to_string());
        writer
            .write_record(record)
            .map_err(|e| QuerygenError::external_io(format!("{}: {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", path.display())))?;
    Ok(path)
}
