//!
//! flownet solves [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem),
//! minimum cut, circulation with demands and [minimum spanning tree](https://en.wikipedia.org/wiki/Minimum_spanning_tree)
//! on a small adjacency graph with integer or float weights.
//!
//! ```
//! use flownet::{dinic, kruskal, Graph};
//!
//! let network = Graph::from_edges(4, true, &[(0, 1, 100), (1, 2, 1), (2, 3, 100)]).unwrap();
//! assert_eq!(dinic(&network, 0, 3).unwrap().max_flow, 1);
//!
//! let star = Graph::from_edges(4, false, &[(0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0)]).unwrap();
//! assert_eq!(kruskal(&star).unwrap().total_weight, 6.0);
//! ```
//!
pub mod error;
pub mod graph;
pub mod max_flow;
pub mod mst;
pub mod weight;

pub use error::{Error, GraphKind, Result};
pub use graph::{Edge, Graph};
pub use max_flow::circulation::{circulation, circulation_with_lower_bounds};
pub use max_flow::dinic::dinic;
pub use max_flow::ford_fulkerson::{edmonds_karp, ford_fulkerson, SearchStrategy};
pub use max_flow::min_cut::{min_cut, min_cut_with, MinCut};
pub use max_flow::{max_flow, Flow, MaxFlow, MaxFlowAlgorithm};
pub use mst::kruskal::kruskal;
pub use mst::prim::{prim, prim_from_zero};
pub use mst::second_best::second_best_mst;
pub use mst::spanning_tree::is_spanning_tree;
pub use mst::{minimum_spanning_tree, MstAlgorithm, SpanningTree};
pub use weight::{SignedWeight, Weight};
