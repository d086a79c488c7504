pub mod circulation;
pub mod dinic;
pub mod flow;
pub mod ford_fulkerson;
pub mod min_cut;
#[cfg(test)]
pub(crate) mod mocks;
pub mod residual;

use super::error::{Error, GraphKind, Result};
use super::graph::Graph;
use super::weight::Weight;
use dinic::dinic;
pub use flow::Flow;
use ford_fulkerson::{edmonds_karp, ford_fulkerson, SearchStrategy};
use residual::ResidualNetwork;

//
// public types
//

/// Result of max-flow algorithms
#[derive(Debug, Clone)]
pub struct MaxFlow<W: Weight> {
    /// value of the flow, i.e. the net amount leaving source
    pub max_flow: W,
    /// flow on each edge
    pub flow: Flow<W>,
}

impl<W: Weight> MaxFlow<W> {
    pub(crate) fn from_network(
        graph: &Graph<W>,
        network: &ResidualNetwork<W>,
        max_flow: W,
    ) -> Result<Self> {
        Ok(MaxFlow {
            max_flow,
            flow: Flow::from_edge_flows(graph, network.edge_flows())?,
        })
    }
}

/// Max-flow algorithm selector
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MaxFlowAlgorithm {
    /// Ford-Fulkerson with DFS path search
    FordFulkerson,
    /// Ford-Fulkerson with BFS path search
    EdmondsKarp,
    #[default]
    Dinic,
}

//
// public functions
//

///
/// Find maximum flow from `source` to `sink` with the chosen algorithm.
///
/// With integer weights the flow value must fit in `W`.
///
pub fn max_flow<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    sink: usize,
    algorithm: MaxFlowAlgorithm,
) -> Result<MaxFlow<W>> {
    match algorithm {
        MaxFlowAlgorithm::FordFulkerson => {
            ford_fulkerson(graph, source, sink, SearchStrategy::DepthFirst)
        }
        MaxFlowAlgorithm::EdmondsKarp => edmonds_karp(graph, source, sink),
        MaxFlowAlgorithm::Dinic => dinic(graph, source, sink),
    }
}

//
// internal functions
//

///
/// Preconditions shared by every s-t flow algorithm
///
pub(crate) fn check_terminals<W: Weight>(
    graph: &Graph<W>,
    source: usize,
    sink: usize,
    algorithm: &'static str,
) -> Result<()> {
    if !graph.is_directed() {
        return Err(Error::InvalidGraphKind {
            algorithm,
            expected: GraphKind::Directed,
        });
    }
    graph.check_vertex(source)?;
    graph.check_vertex(sink)?;
    if source == sink {
        return Err(Error::SourceIsSink(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;

    #[test]
    fn dispatch_all_algorithms() {
        let g = mock_clrs_network();
        for algorithm in [
            MaxFlowAlgorithm::FordFulkerson,
            MaxFlowAlgorithm::EdmondsKarp,
            MaxFlowAlgorithm::Dinic,
        ] {
            assert_eq!(max_flow(&g, 0, 5, algorithm).unwrap().max_flow, 23);
        }
        assert_eq!(MaxFlowAlgorithm::default(), MaxFlowAlgorithm::Dinic);
    }

    #[test]
    fn reversed_terminals() {
        // no edge enters 0, so nothing can flow from 5 to 0
        let g = mock_clrs_network();
        let r = max_flow(&g, 5, 0, MaxFlowAlgorithm::default()).unwrap();
        assert_eq!(r.max_flow, 0);
    }
}
