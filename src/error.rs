use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graphs and the algorithms running on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph of {vertex_size} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_size: usize },

    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    /// A graph and the graph supplied as its reversal disagree on size.
    #[error("expected a graph of {expected} vertices, got {actual}")]
    VertexSizeMismatch { expected: usize, actual: usize },

    #[error("graph is cyclic: {cycle:?}")]
    Cyclic { cycle: Vec<VertexId> },

    #[error("expected an undirected graph")]
    DirectedGraph,

    #[error("a cut needs at least 2 vertices, got {vertex_size}")]
    TooFewVertices { vertex_size: usize },

    /// A cut was requested while more than two supervertices survive.
    #[error("contraction is not finished, {remaining} supervertices remain")]
    NotTerminal { remaining: usize },

    /// Internal bookkeeping went inconsistent.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
