//! Traits and implementations for directed and undirected adjacency-list graphs.
//!
//! # Low-level graphs
//!
//! Vertices are lightweight ID's over `0..vertex_size`.
//! They are essentially `usize`.
//! Algorithm authors may feel free to copy and store them,
//! and to index per-vertex state by them.
//!
//! Adjacency lists keep insertion order.
//! Traversal results depend on that order and are repeatable for identical input.
//!
//! # `SymbolGraph`
//!
//! It wraps a graph and a bidirectional map between string labels and vertices.
//!
//! # petgraph
//!
//! Both graph kinds convert from and into `petgraph::Graph`.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency;
pub(crate) use self::adjacency::*;
mod graph_debug;
pub use self::graph_debug::*;
mod symbol_graph;
pub use self::symbol_graph::*;
mod petgraph_interop;

pub mod directed;
pub mod undirected;

#[cfg(test)]
pub use self::tests::*;
