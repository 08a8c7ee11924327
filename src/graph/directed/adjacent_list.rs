use crate::{error::*, graph::*};

/// A directed graph stored as one ordered out-neighbour list per vertex.
///
/// | Operation       | Complexity       |
/// | --------------- | ---------------- |
/// | `add_vertex`    | amortized `O(1)` |
/// | `add_edge`      | amortized `O(1)` |
/// | `adjacent`      | `O(1)`           |
/// | `reverse`       | `O(V + E)`       |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjacentListGraph(AdjacencyLists);

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl AdjacentListGraph {
    pub(crate) fn from_lists(lists: AdjacencyLists) -> Self {
        Self(lists)
    }

    /// Returns a graph with every edge `u -> v` turned into `v -> u`.
    ///
    /// Edges are inserted by scanning sources in index order,
    /// so the reversal of a graph is itself deterministic.
    pub fn reverse(&self) -> Self {
        let mut res = AdjacencyLists::with_vertices(self.vertex_size());
        for v in self.iter_vertices() {
            for w in self.adjacent(&v) {
                res.record_edge(*w, v);
                res.push(*w, v);
            }
        }
        Self(res)
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
