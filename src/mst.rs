//!
//! Minimum spanning trees of undirected weighted graphs
//!
pub mod kruskal;
#[cfg(test)]
pub(crate) mod mocks;
pub mod prim;
pub mod second_best;
pub mod spanning_tree;

use super::error::{Error, GraphKind, Result};
use super::graph::{Edge, Graph};
use super::weight::Weight;
use kruskal::kruskal;
use prim::prim;

/// Result of spanning tree algorithms
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W: Weight> {
    /// selected edges, in the order the algorithm picked them
    pub edges: Vec<Edge<W>>,
    /// ids in the graph of the selected edges, parallel to `edges`
    pub edge_ids: Vec<usize>,
    /// sum of the weights of `edges`
    pub total_weight: W,
}

impl<W: Weight> SpanningTree<W> {
    pub(crate) fn empty() -> SpanningTree<W> {
        SpanningTree {
            edges: Vec::new(),
            edge_ids: Vec::new(),
            total_weight: W::zero(),
        }
    }
    pub(crate) fn push(&mut self, id: usize, edge: Edge<W>) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
        self.edge_ids.push(id);
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Spanning tree algorithm selector
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim {
        /// root vertex the tree grows from
        start: usize,
    },
}

///
/// Minimum spanning tree with the chosen algorithm
///
pub fn minimum_spanning_tree<W: Weight>(
    graph: &Graph<W>,
    algorithm: MstAlgorithm,
) -> Result<SpanningTree<W>> {
    match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim { start } => prim(graph, start),
    }
}

///
/// Preconditions shared by the spanning tree algorithms
///
pub(crate) fn check_undirected<W: Weight>(graph: &Graph<W>, algorithm: &'static str) -> Result<()> {
    if graph.is_directed() {
        Err(Error::InvalidGraphKind {
            algorithm,
            expected: GraphKind::Undirected,
        })
    } else {
        Ok(())
    }
}

///
/// Error for a graph whose tree stopped at `selected` edges
///
pub(crate) fn check_spanning<W: Weight>(graph: &Graph<W>, tree: &SpanningTree<W>) -> Result<()> {
    let required = graph.vertex_count().saturating_sub(1);
    if tree.len() < required {
        Err(Error::DisconnectedGraph {
            selected: tree.len(),
            required,
        })
    } else {
        Ok(())
    }
}
