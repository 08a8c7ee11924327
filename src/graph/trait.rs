use crate::{error::*, graph::*};

pub trait GrowableGraph {
    /// Creates an empty graph.
    fn new() -> Self;
    /// Creates a graph of `vertex_size` isolated vertices.
    fn with_vertices(vertex_size: usize) -> Self;
    fn add_vertex(&mut self) -> VertexId;
    /// Appends `sink` to the adjacency of `source`,
    /// and `source` to that of `sink` if the graph is undirected.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()>;

    /// Builds a graph of `vertex_size` vertices from `(source, sink)` pairs,
    /// inserted in iteration order.
    fn from_edges<I>(vertex_size: usize, edges: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut res = Self::with_vertices(vertex_size);
        for (source, sink) in edges {
            res.add_edge(VertexId::new(source), VertexId::new(sink))?;
        }
        Ok(res)
    }
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn edge_size(&self) -> usize;

    /// Neighbours of `v` in insertion order.
    ///
    /// Panics if `v` is out of range. See [`QueryableGraph::try_adjacent`].
    fn adjacent(&self, v: &VertexId) -> &[VertexId];

    /// Edges in insertion order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Iterates vertices from `0` up to `n - 1`.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    /// Iterates vertices from `n - 1` down to `0`.
    fn iter_vertices_rev(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).rev().map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn check_vertex(&self, v: &VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.vertex_size(),
            })
        }
    }

    fn try_adjacent(&self, v: &VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(self.adjacent(v))
    }

    fn degree(&self, v: &VertexId) -> Result<usize> {
        self.try_adjacent(v).map(|adj| adj.len())
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
