//! Graph algorithms over vertex-indexed adjacency-list graphs.
//!
//! Vertices are lightweight [`VertexId`](graph::VertexId)'s, essentially `usize` in `0..n`.
//! Adjacency lists keep insertion order,
//! so every traversal-dependent result is reproducible for identical input.
//!
//! The [`graph`] module holds directed and undirected adjacency-list graphs,
//! a name-indexed [`SymbolGraph`](graph::SymbolGraph) and petgraph interop.
//! The [`algorithm`] module holds traversals, path finders, connectivity,
//! topological sorting, Kosaraju's strongly connected components and Karger's minimum cut.

pub mod algorithm;
pub mod error;
pub mod graph;

pub use self::error::{GraphError, Result};
