//!
//! Ford-Fulkerson method with DFS or BFS augmenting path search.
//! BFS search is the Edmonds-Karp algorithm.
//!
use super::super::error::Result;
use super::super::graph::Graph;
use super::super::weight::Weight;
use super::residual::ResidualNetwork;
use super::{check_terminals, MaxFlow};
use petgraph::graph::EdgeIndex;
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// How an augmenting path is searched in the residual network
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// stack-based search. O(E * max_flow) on integer capacities
    #[default]
    DepthFirst,
    /// queue-based search, i.e. shortest augmenting path (Edmonds-Karp). O(V * E^2)
    BreadthFirst,
}

///
/// Maximum flow from `source` to `sink` by Ford-Fulkerson method.
///
/// `graph` must be directed, and its edge weights are the capacities.
/// With integer weights the flow value must fit in `W`: capacities leaving
/// `source` that sum past `W::MAX` overflow.
///
pub fn ford_fulkerson<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    sink: usize,
    search: SearchStrategy,
) -> Result<MaxFlow<W>> {
    run(graph, source, sink, search, "ford_fulkerson")
}

///
/// Maximum flow by Edmonds-Karp algorithm,
/// i.e. Ford-Fulkerson with BFS augmenting path search.
///
/// Same overflow limit on integer weights as `ford_fulkerson`.
///
pub fn edmonds_karp<W: Weight>(graph: &Graph<W>, source: usize, sink: usize) -> Result<MaxFlow<W>> {
    run(graph, source, sink, SearchStrategy::BreadthFirst, "edmonds_karp")
}

#[instrument(level = "debug", skip(graph))]
fn run<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    sink: usize,
    search: SearchStrategy,
    algorithm: &'static str,
) -> Result<MaxFlow<W>> {
    check_terminals(graph, source, sink, algorithm)?;
    let mut network = ResidualNetwork::from_graph(graph);
    let value = augment_until_saturated(&mut network, source, sink, search);
    debug!(%value, "{} finished", algorithm);
    MaxFlow::from_network(graph, &network, value)
}

///
/// Augment along paths found by `search` until `sink` is unreachable.
/// Returns the total amount pushed.
///
pub(crate) fn augment_until_saturated<W: Weight>(
    network: &mut ResidualNetwork<W>,
    source: usize,
    sink: usize,
    search: SearchStrategy,
) -> W {
    let mut total = W::zero();
    let mut n_paths = 0;

    while let Some(path) = find_augmenting_path(network, source, sink, search) {
        let bottleneck = match network.bottleneck(&path) {
            Some(b) => b,
            None => break,
        };
        trace!(len = path.len(), %bottleneck, "augmenting path");
        network.push_path(&path, bottleneck);
        total += bottleneck;
        n_paths += 1;
    }

    debug!(n_paths, "no augmenting path left");
    total
}

///
/// Find a path of arcs with positive residual from `source` to `sink`.
///
/// Each vertex remembers the arc it was discovered by, and the path is
/// restored by walking these arcs back from `sink`.
///
pub(crate) fn find_augmenting_path<W: Weight>(
    network: &ResidualNetwork<W>,
    source: usize,
    sink: usize,
    search: SearchStrategy,
) -> Option<Vec<EdgeIndex>> {
    let n = network.vertex_count();
    let mut parent: Vec<Option<EdgeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = VecDeque::new();
    visited[source] = true;
    frontier.push_back(source);

    'search: loop {
        let next = match search {
            SearchStrategy::DepthFirst => frontier.pop_back(),
            SearchStrategy::BreadthFirst => frontier.pop_front(),
        };
        let Some(v) = next else {
            break;
        };
        for &arc in network.arcs(v) {
            let w = network.head(arc);
            if visited[w] || !network.residual(arc).exceeds_eps() {
                continue;
            }
            visited[w] = true;
            parent[w] = Some(arc);
            if w == sink {
                break 'search;
            }
            frontier.push_back(w);
        }
    }

    if !visited[sink] {
        return None;
    }

    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let arc = parent[v]?;
        path.push(arc);
        v = network.head(ResidualNetwork::<W>::twin(arc));
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::super::flow::is_valid_flow;
    use super::super::mocks::*;
    use super::*;
    use crate::error::{Error, GraphKind};

    #[test]
    fn clrs_network_dfs_and_bfs() {
        let g = mock_clrs_network();
        let dfs = ford_fulkerson(&g, 0, 5, SearchStrategy::DepthFirst).unwrap();
        let bfs = ford_fulkerson(&g, 0, 5, SearchStrategy::BreadthFirst).unwrap();
        let ek = edmonds_karp(&g, 0, 5).unwrap();
        assert_eq!(dfs.max_flow, 23);
        assert_eq!(bfs.max_flow, 23);
        assert_eq!(ek.max_flow, 23);
        assert!(is_valid_flow(&dfs.flow, &g, 0, 5));
        assert!(is_valid_flow(&ek.flow, &g, 0, 5));
        assert_eq!(ek.flow.outflow(0), 23);
        assert_eq!(ek.flow.inflow(5), 23);
    }

    #[test]
    fn bottleneck_chain() {
        let g = mock_bottleneck_chain();
        let r = edmonds_karp(&g, 0, 3).unwrap();
        assert_eq!(r.max_flow, 1);
        assert_eq!(r.flow.get(0, 1), 1);
        assert_eq!(r.flow.get(1, 2), 1);
        assert_eq!(r.flow.get(2, 3), 1);
    }

    #[test]
    fn parallel_edges_add_capacity() {
        let g = mock_parallel_edges();
        let r = ford_fulkerson(&g, 0, 2, SearchStrategy::default()).unwrap();
        assert_eq!(r.max_flow, 5);
        assert_eq!(r.flow.get(0, 1), 5);
        assert!(is_valid_flow(&r.flow, &g, 0, 2));
    }

    #[test]
    fn flow_must_be_cancelled() {
        // DFS takes 0->1->2->3 first, and has to undo 1->2 afterwards
        let g = mock_cancellation_network();
        let r = ford_fulkerson(&g, 0, 3, SearchStrategy::DepthFirst).unwrap();
        assert_eq!(r.max_flow, 2);
        assert!(is_valid_flow(&r.flow, &g, 0, 3));
    }

    #[test]
    fn unreachable_sink() {
        let g = Graph::from_edges(4, true, &[(0, 1, 3u32), (2, 3, 3)]).unwrap();
        let r = edmonds_karp(&g, 0, 3).unwrap();
        assert_eq!(r.max_flow, 0);
        assert_eq!(r.flow.iter().count(), 0);
    }

    #[test]
    fn float_capacities() {
        let g = Graph::from_edges(3, true, &[(0, 1, 1.5), (1, 2, 0.75), (0, 2, 0.25)]).unwrap();
        let r = edmonds_karp(&g, 0, 2).unwrap();
        assert!(r.max_flow.sim_eq(1.0));
    }

    #[test]
    fn rejects_undirected_graph() {
        let g: Graph<u32> = Graph::undirected(2);
        let e = ford_fulkerson(&g, 0, 1, SearchStrategy::DepthFirst).unwrap_err();
        assert_eq!(
            e,
            Error::InvalidGraphKind {
                algorithm: "ford_fulkerson",
                expected: GraphKind::Directed
            }
        );
        assert_eq!(
            edmonds_karp(&g, 0, 1).unwrap_err(),
            Error::InvalidGraphKind {
                algorithm: "edmonds_karp",
                expected: GraphKind::Directed
            }
        );
    }

    #[test]
    fn rejects_bad_terminals() {
        let g = mock_bottleneck_chain();
        assert_eq!(
            edmonds_karp(&g, 0, 4).unwrap_err(),
            Error::OutOfRangeVertex {
                vertex: 4,
                vertex_count: 4
            }
        );
        assert_eq!(edmonds_karp(&g, 2, 2).unwrap_err(), Error::SourceIsSink(2));
    }
}
