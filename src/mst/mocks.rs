//! mock undirected graphs for spanning tree tests
use super::super::graph::Graph;

/// star around 0 with weights 1..=4, MST weight 10
pub fn mock_star() -> Graph<i32> {
    Graph::from_edges(5, false, &[(0, 1, 1), (0, 2, 2), (0, 3, 3), (0, 4, 4)]).expect("valid mock")
}

/// triangle 0-1 (1), 1-2 (2), 0-2 (3)
pub fn mock_triangle() -> Graph<i32> {
    Graph::from_edges(3, false, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]).expect("valid mock")
}

/// path 0-1-2-3 (1, 2, 3) with chords 0-3 (4) and 0-2 (5). MST 6, second best 7
pub fn mock_path_with_chords() -> Graph<i32> {
    Graph::from_edges(
        4,
        false,
        &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 5)],
    )
    .expect("valid mock")
}

/// 4-cycle with all weights 1, every spanning tree weighs 3
pub fn mock_uniform_square() -> Graph<i32> {
    Graph::from_edges(4, false, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).expect("valid mock")
}

/// the uniform square plus chord 0-2 (5). MST 3, second best 7
pub fn mock_square_with_chord() -> Graph<i32> {
    Graph::from_edges(
        4,
        false,
        &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 5)],
    )
    .expect("valid mock")
}

/// `mock_square_with_chord` plus vertex 4 hanging on 3 by parallel edges 1 and 100.
/// MST 4, second best 8
pub fn mock_square_with_pendant() -> Graph<i32> {
    Graph::from_edges(
        5,
        false,
        &[
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 0, 1),
            (0, 2, 5),
            (3, 4, 1),
            (3, 4, 100),
        ],
    )
    .expect("valid mock")
}

/// two components {0, 1} and {2, 3}
pub fn mock_disconnected() -> Graph<i32> {
    Graph::from_edges(4, false, &[(0, 1, 1), (2, 3, 1)]).expect("valid mock")
}

/// the weighted graph of CLRS Figure 23.1, MST weight 37
pub fn mock_clrs_graph() -> Graph<f64> {
    Graph::from_edges(
        9,
        false,
        &[
            (0, 1, 4.0),
            (0, 7, 8.0),
            (1, 2, 8.0),
            (1, 7, 11.0),
            (2, 3, 7.0),
            (2, 8, 2.0),
            (2, 5, 4.0),
            (3, 4, 9.0),
            (3, 5, 14.0),
            (4, 5, 10.0),
            (5, 6, 2.0),
            (6, 7, 1.0),
            (6, 8, 6.0),
            (7, 8, 7.0),
        ],
    )
    .expect("valid mock")
}
