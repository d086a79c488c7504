//! Error types for flownet

use thiserror::Error;

/// Result type alias using flownet's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of graph an algorithm accepts
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "a directed"),
            GraphKind::Undirected => write!(f, "an undirected"),
        }
    }
}

/// Errors that can occur in graph construction and the algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex id outside `[0, n)`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRangeVertex {
        /// The offending vertex id
        vertex: usize,
        /// Number of vertices of the graph
        vertex_count: usize,
    },

    /// Algorithm called on a directed graph when it needs an undirected one, or vice versa
    #[error("{algorithm} requires {expected} graph")]
    InvalidGraphKind {
        /// The algorithm name
        algorithm: &'static str,
        /// The kind it accepts
        expected: GraphKind,
    },

    /// No spanning tree exists
    #[error("graph is disconnected: only {selected} of the {required} spanning tree edges could be selected")]
    DisconnectedGraph {
        /// Number of tree edges found
        selected: usize,
        /// Number of tree edges a spanning tree needs (n - 1)
        required: usize,
    },

    /// Max-flow between a vertex and itself
    #[error("source and sink are the same vertex {0}")]
    SourceIsSink(usize),

    /// Per-vertex or per-edge input vector of the wrong size
    #[error("expected {expected} {what}, got {got}")]
    LengthMismatch {
        /// What the vector holds
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },
}
