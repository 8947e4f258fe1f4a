use std::fs;

use querygen::NodeId;
use querygen::writer::write_round;
use tempfile::tempdir;

#[test]
fn test_file_is_named_from_the_round_seed() {
    let dir = tempdir().expect("tempdir");
    let path = write_round(dir.path(), 7, vec![vec![0]]).expect("write");
    assert_eq!(path, dir.path().join("queries-7.csv"));
    assert!(path.is_file());
}

#[test]
fn test_rows_render_node_ids_in_batch_order() {
    let dir = tempdir().expect("tempdir");
    let results: Vec<Vec<NodeId>> = vec![vec![0, 1, 2], vec![3, 4], vec![5]];
    let path = write_round(dir.path(), 0, results).expect("write");
    let contents = fs::read_to_string(&path).expect("read");
    assert_eq!(contents, "0,1,2\n3,4\n5\n");
}

#[test]
fn test_writer_consumes_results_lazily_in_order() {
    let dir = tempdir().expect("tempdir");
    let mut produced = Vec::new();
    {
        let results = (0..4u32).map(|batch| {
            produced.push(batch);
            vec![batch, batch + 10]
        });
        write_round(dir.path(), 1, results).expect("write");
    }
    assert_eq!(produced, vec![0, 1, 2, 3]);
    let contents = fs::read_to_string(dir.path().join("queries-1.csv")).expect("read");
    assert_eq!(contents, "0,10\n1,11\n2,12\n3,13\n");
}
