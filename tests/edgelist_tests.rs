use std::fs;
use std::path::PathBuf;

use querygen::QuerygenError;
use querygen::edgelist::read_edgelist;
use tempfile::tempdir;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write edge list");
    path
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = tempdir().expect("tempdir");
    let err = read_edgelist(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, QuerygenError::MissingInput(_)));
}

#[test]
fn test_reads_src_dst_pairs_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(&dir, "edge.csv", "0,1\n0,2\n1,2\n2,3\n");
    let edges = read_edgelist(&path).expect("edges");
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
}

#[test]
fn test_empty_file_is_invalid_graph() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(&dir, "edge.csv", "");
    let err = read_edgelist(&path).unwrap_err();
    assert!(matches!(err, QuerygenError::InvalidGraph(_)));
}

#[test]
fn test_non_numeric_field_is_invalid_graph() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(&dir, "edge.csv", "0,1\nfoo,2\n");
    let err = read_edgelist(&path).unwrap_err();
    assert!(matches!(err, QuerygenError::InvalidGraph(_)));
}

#[test]
fn test_wrong_field_count_is_invalid_graph() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(&dir, "edge.csv", "0,1,2\n");
    let err = read_edgelist(&path).unwrap_err();
    assert!(matches!(err, QuerygenError::InvalidGraph(_)));
}
