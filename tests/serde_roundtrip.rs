#![cfg(feature = "serde")]

use euler_lca::{AdjacencyList, EulerTour, LcaConfig, LcaIndex, SparseTable};

mod common;
use common::SAMPLE_EDGES;

#[test]
fn built_structures_round_trip_through_json() {
    let adjacency = AdjacencyList::from_edges(5, &SAMPLE_EDGES).expect("sample tree parses");
    let index = LcaIndex::build(&adjacency, LcaConfig::default()).expect("sample tree builds");

    let json = serde_json::to_string(&adjacency).unwrap();
    let restored: AdjacencyList = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, adjacency);

    let json = serde_json::to_string(index.euler_tour()).unwrap();
    let restored: EulerTour = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, index.euler_tour());

    let json = serde_json::to_string(index.sparse_table()).unwrap();
    let restored: SparseTable = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, index.sparse_table());
    assert_eq!(restored.argmin(1..6), Some(1));
}
