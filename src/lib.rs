//! # biconnectivity
//!
//! Articulation points and biconnected components of undirected graphs,
//! found with a single linear-time depth-first traversal.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use biconnectivity::{analyze, Graph};
//!
//! // two triangles joined by the bridge 2-3
//! let graph = Graph::build(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)]).unwrap();
//! let analysis = analyze(&graph, 0).unwrap();
//!
//! assert_eq!(analysis.articulation_points().collect::<Vec<_>>(), vec![2, 3]);
//! assert_eq!(analysis.component_count(), 3);
//! ```
//!
//! A traversal only covers the connected component of its root.
//! For graphs with several components use [`analyze_all`], or call [`analyze`]
//! once per vertex that previous calls left unvisited.

pub mod block_cut;
pub mod error;
pub mod graph;
pub mod input;
pub mod traversal;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{Error, InvalidRootError, ParseError, ValidationError};
pub use graph::Graph;
pub use traversal::{Analysis, Component, analyze, analyze_all};
pub use types::{Edge, EdgeId, UnGraph};
