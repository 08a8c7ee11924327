use crate::{error::*, graph::*};

/// Storage shared by the directed and the undirected adjacency-list graphs.
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct AdjacencyLists {
    lists: Vec<Vec<VertexId>>,
    edges: Vec<Edge>,
}

impl AdjacencyLists {
    pub fn with_vertices(vertex_size: usize) -> Self {
        Self {
            lists: vec![vec![]; vertex_size],
            edges: vec![],
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_size(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId::new(self.lists.len());
        self.lists.push(vec![]);
        vid
    }

    pub fn check(&self, v: &VertexId) -> Result<()> {
        if v.to_raw() < self.lists.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.lists.len(),
            })
        }
    }

    /// Records an edge. Both endpoints must already be checked.
    pub fn record_edge(&mut self, source: VertexId, sink: VertexId) {
        self.edges.push(Edge::new(source, sink));
    }

    /// Appends `sink` to the list of `source`. Both endpoints must already be checked.
    pub fn push(&mut self, source: VertexId, sink: VertexId) {
        self.lists[source.to_raw()].push(sink);
    }

    pub fn adjacent(&self, v: &VertexId) -> &[VertexId] {
        &self.lists[v.to_raw()]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
