use super::traversal::explore_preorder;
use crate::{error::*, graph::*};
use tracing::debug;

/// Connected components of an undirected graph.
///
/// Vertices are scanned in index order.
/// Each one not yet explored starts a depth-first search
/// that labels everything it reaches with a fresh component id.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    count: usize,
}

impl ConnectedComponents {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut explored = vec![false; graph.vertex_size()];
        let mut id = vec![0; graph.vertex_size()];
        let mut count = 0;
        for s in graph.iter_vertices() {
            if explored[s.to_raw()] {
                continue;
            }
            explore_preorder(graph, s, &mut explored, |v, _| id[v.to_raw()] = count);
            count += 1;
        }
        debug!(vertices = graph.vertex_size(), components = count, "connected components");
        Self { id, count }
    }

    /// Number of components, i.e. the number of searches started from the outer scan.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, in `0..count()`.
    pub fn id(&self, v: &VertexId) -> Result<usize> {
        self.id.get(v.to_raw()).copied().ok_or(GraphError::VertexOutOfRange {
            vertex: *v,
            vertex_size: self.id.len(),
        })
    }

    pub fn connected(&self, u: &VertexId, v: &VertexId) -> Result<bool> {
        Ok(self.id(u)? == self.id(v)?)
    }

    /// Members of every component, indexed by component id.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut res = vec![vec![]; self.count];
        for (v, id) in self.id.iter().enumerate() {
            res[*id].push(VertexId::new(v));
        }
        res
    }
}
