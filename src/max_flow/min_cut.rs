//!
//! Minimum s-t cut from the final residual network of a max-flow run.
//!
use super::super::error::Result;
use super::super::graph::{Edge, Graph};
use super::super::weight::Weight;
use super::dinic::Dinic;
use super::ford_fulkerson::{augment_until_saturated, SearchStrategy};
use super::residual::ResidualNetwork;
use super::{check_terminals, Flow, MaxFlowAlgorithm};
use itertools::Itertools;
use tracing::{debug, instrument};

/// Minimum s-t cut
#[derive(Debug, Clone)]
pub struct MinCut<W: Weight> {
    /// total capacity of `cut_edges`, equal to `max_flow`
    pub cut_value: W,
    /// vertices reachable from source in the final residual network (sorted)
    pub source_set: Vec<usize>,
    /// the rest, including sink (sorted)
    pub sink_set: Vec<usize>,
    /// graph edges from `source_set` into `sink_set`, one per parallel edge
    pub cut_edges: Vec<Edge<W>>,
    /// value of the maximum flow found on the way
    pub max_flow: W,
    /// the maximum flow itself
    pub flow: Flow<W>,
}

impl<W: Weight> MinCut<W> {
    /// true if `v` is on the source side
    pub fn separates(&self, v: usize) -> bool {
        self.source_set.binary_search(&v).is_ok()
    }
}

///
/// Minimum cut between `source` and `sink`, using Edmonds-Karp.
///
pub fn min_cut<W: Weight>(graph: &Graph<W>, source: usize, sink: usize) -> Result<MinCut<W>> {
    min_cut_with(graph, source, sink, MaxFlowAlgorithm::EdmondsKarp)
}

///
/// Minimum cut between `source` and `sink`, using the given max-flow algorithm.
///
/// With integer weights the cut value must fit in `W`.
///
#[instrument(level = "debug", skip(graph))]
pub fn min_cut_with<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    sink: usize,
    algorithm: MaxFlowAlgorithm,
) -> Result<MinCut<W>> {
    check_terminals(graph, source, sink, "min_cut")?;
    let mut network = ResidualNetwork::from_graph(graph);
    let max_flow = match algorithm {
        MaxFlowAlgorithm::FordFulkerson => {
            augment_until_saturated(&mut network, source, sink, SearchStrategy::DepthFirst)
        }
        MaxFlowAlgorithm::EdmondsKarp => {
            augment_until_saturated(&mut network, source, sink, SearchStrategy::BreadthFirst)
        }
        MaxFlowAlgorithm::Dinic => Dinic::new(&mut network, source, sink).run(),
    };

    let reachable = network.reachable_from(source);
    let (source_set, sink_set): (Vec<usize>, Vec<usize>) =
        (0..graph.vertex_count()).partition(|&v| reachable[v]);

    let cut_edges = graph
        .edges()
        .iter()
        .filter(|e| reachable[e.from] && !reachable[e.to])
        .copied()
        .collect_vec();
    let cut_value: W = cut_edges.iter().map(|e| e.weight).sum();

    debug!(%cut_value, %max_flow, n_cut_edges = cut_edges.len(), "min cut");
    Ok(MinCut {
        cut_value,
        source_set,
        sink_set,
        cut_edges,
        max_flow,
        flow: Flow::from_edge_flows(graph, network.edge_flows())?,
    })
}

#[cfg(test)]
mod tests {
    use super::super::mocks::*;
    use super::*;

    #[test]
    fn clrs_network() {
        let g = mock_clrs_network();
        let cut = min_cut(&g, 0, 5).unwrap();
        assert_eq!(cut.cut_value, 23);
        assert_eq!(cut.max_flow, 23);
        assert!(cut.separates(0));
        assert!(!cut.separates(5));
        assert_eq!(cut.source_set.len() + cut.sink_set.len(), 6);
        // {0, 1, 2, 4} | {3, 5}: 1->3 (12), 4->3 (7), 4->5 (4)
        assert_eq!(cut.source_set, vec![0, 1, 2, 4]);
        assert_eq!(cut.sink_set, vec![3, 5]);
        assert_eq!(
            cut.cut_edges,
            vec![Edge::new(1, 3, 12), Edge::new(4, 3, 7), Edge::new(4, 5, 4)]
        );
    }

    #[test]
    fn bottleneck_chain_isolates_middle_edge() {
        let g = mock_bottleneck_chain();
        let cut = min_cut(&g, 0, 3).unwrap();
        assert_eq!(cut.cut_value, 1);
        assert_eq!(cut.source_set, vec![0, 1]);
        assert_eq!(cut.sink_set, vec![2, 3]);
        assert_eq!(cut.cut_edges, vec![Edge::new(1, 2, 1)]);
    }

    #[test]
    fn backward_edges_are_not_cut_edges() {
        // 2 -> 1 crosses sink side to source side and is not counted
        let g = Graph::from_edges(3, true, &[(0, 1, 5u32), (1, 2, 2), (2, 1, 9)]).unwrap();
        let cut = min_cut(&g, 0, 2).unwrap();
        assert_eq!(cut.cut_value, 2);
        assert_eq!(cut.cut_edges, vec![Edge::new(1, 2, 2)]);
    }

    #[test]
    fn every_algorithm_gives_same_value() {
        let g = mock_clrs_network();
        for algorithm in [
            MaxFlowAlgorithm::FordFulkerson,
            MaxFlowAlgorithm::EdmondsKarp,
            MaxFlowAlgorithm::Dinic,
        ] {
            let cut = min_cut_with(&g, 0, 5, algorithm).unwrap();
            assert_eq!(cut.cut_value, 23);
            assert_eq!(cut.source_set.len() + cut.sink_set.len(), 6);
        }
    }

    #[test]
    fn disconnected_sink() {
        let g = Graph::from_edges(3, true, &[(0, 1, 5u32)]).unwrap();
        let cut = min_cut(&g, 0, 2).unwrap();
        assert_eq!(cut.cut_value, 0);
        assert!(cut.cut_edges.is_empty());
        assert_eq!(cut.source_set, vec![0, 1]);
        assert_eq!(cut.sink_set, vec![2]);
    }
}
