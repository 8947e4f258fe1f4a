use std::path::Path;

use crate::{errors::QuerygenError, index::NodeId};

/// Reads a plain-text edge list: one `src,dst` pair per line, no header.
/// The file must exist and contain at least one edge.
pub fn read_edgelist(path: &Path) -> Result<Vec<(NodeId, NodeId)>, QuerygenError> {
    if !path.exists() {
        return Err(QuerygenError::missing_input(format!(
            "edge list '{}' does not exist",
            path.display()
        )));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", path.display())))?;

    let mut edges = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| QuerygenError::invalid_graph(format!("row {row}: {e}")))?;
        if record.len() != 2 {
            return Err(QuerygenError::invalid_graph(format!(
                "row {row}: expected src,dst but got {} fields",
                record.len()
            )));
        }
        let src = parse_node(&record[0], row)?;
        let dst = parse_node(&record[1], row)?;
        edges.push((src, dst));
    }
    if edges.is_empty() {
        return Err(QuerygenError::invalid_graph(format!(
            "{}: empty edge list",
            path.display()
        )));
    }
    Ok(edges)
}

fn parse_node(field: &str, row: usize) -> Result<NodeId, QuerygenError> {
    field
        .trim()
        .parse::<NodeId>()
        .map_err(|_| QuerygenError::invalid_graph(format!("row {row}: invalid node id '{field}'")))
}
