use crate::{error::*, graph::*};

/// An undirected graph stored as one ordered neighbour list per vertex.
///
/// Every edge `(u, v)` puts `v` into the list of `u` and `u` into the list of `v`.
/// A self loop therefore shows up twice in the list of its vertex.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjacentListGraph(AdjacencyLists);

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl AdjacentListGraph {
    pub(crate) fn from_lists(lists: AdjacencyLists) -> Self {
        Self(lists)
    }
}

impl std::fmt::Debug for AdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacentListGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(AdjacencyLists::default())
    }

    fn with_vertices(vertex_size: usize) -> Self {
        Self(AdjacencyLists::with_vertices(vertex_size))
    }

    fn add_vertex(&mut self) -> VertexId {
        self.0.add_vertex()
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        self.0.check(&source)?;
        self.0.check(&sink)?;
        self.0.record_edge(source, sink);
        self.0.push(source, sink);
        self.0.push(sink, source);
        Ok(())
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.vertex_size()
    }

    fn edge_size(&self) -> usize {
        self.0.edge_size()
    }

    fn adjacent(&self, v: &VertexId) -> &[VertexId] {
        self.0.adjacent(v)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.0.edges().iter().copied())
    }
}
