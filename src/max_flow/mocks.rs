//! mock flow network generation functions
//!
//! the sink is always the last vertex
use super::super::graph::Graph;

/// 0 -> 1 -> 2 -> 3, all capacity 10
pub fn mock_flow_network1() -> Graph<u32> {
    Graph::from_edges(4, true, &[(0, 1, 10), (1, 2, 10), (2, 3, 10)]).expect("valid mock")
}

/// network cited from CLRS (Figure 26.1), max flow 23 from 0 to 5
pub fn mock_clrs_network() -> Graph<u32> {
    Graph::from_edges(
        6,
        true,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )
    .expect("valid mock")
}

/// 0 -> 1 -> 2 -> 3 where 1 -> 2 is the bottleneck of 1
pub fn mock_bottleneck_chain() -> Graph<u32> {
    Graph::from_edges(4, true, &[(0, 1, 100), (1, 2, 1), (2, 3, 100)]).expect("valid mock")
}

/// two parallel edges 0 -> 1 (2 and 3) followed by 1 -> 2 (10)
pub fn mock_parallel_edges() -> Graph<u32> {
    Graph::from_edges(3, true, &[(0, 1, 2), (0, 1, 3), (1, 2, 10)]).expect("valid mock")
}

/// diamond with a cross edge 1 -> 2, max flow 2
pub fn mock_cancellation_network() -> Graph<u32> {
    Graph::from_edges(
        4,
        true,
        &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)],
    )
    .expect("valid mock")
}

/// direct edge 0 -> 3 (4) and a longer path 0 -> 1 -> 2 -> 3 (3)
pub fn mock_layered_network() -> Graph<u32> {
    Graph::from_edges(4, true, &[(0, 3, 4), (0, 1, 3), (1, 2, 3), (2, 3, 3)]).expect("valid mock")
}
