use crate::graph::*;
use petgraph::{
    graph::{DiGraph, NodeIndex, UnGraph},
    Directed, EdgeType, Undirected,
};

fn lists_from_petgraph<N, E, Ty: EdgeType>(
    pg: &petgraph::Graph<N, E, Ty>,
    directed: bool,
) -> AdjacencyLists {
    let mut res = AdjacencyLists::with_vertices(pg.node_count());
    for e in pg.raw_edges() {
        let source = VertexId::new(e.source().index());
        let sink = VertexId::new(e.target().index());
        res.record_edge(source, sink);
        res.push(source, sink);
        if !directed {
            res.push(sink, source);
        }
    }
    res
}

fn node(v: VertexId) -> NodeIndex {
    NodeIndex::new(v.to_raw())
}

impl<N, E> From<&petgraph::Graph<N, E, Directed>> for directed::AdjacentListGraph {
    /// Node indices become vertex ids. Edges are taken in petgraph's edge order.
    fn from(pg: &petgraph::Graph<N, E, Directed>) -> Self {
        Self::from_lists(lists_from_petgraph(pg, true))
    }
}

impl<N, E> From<&petgraph::Graph<N, E, Undirected>> for undirected::AdjacentListGraph {
    fn from(pg: &petgraph::Graph<N, E, Undirected>) -> Self {
        Self::from_lists(lists_from_petgraph(pg, false))
    }
}

impl directed::AdjacentListGraph {
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut res = DiGraph::with_capacity(self.vertex_size(), self.edge_size());
        for _ in self.iter_vertices() {
            res.add_node(());
        }
        for e in self.iter_edges() {
            res.add_edge(node(e.source), node(e.sink), ());
        }
        res
    }
}

impl undirected::AdjacentListGraph {
    pub fn to_petgraph(&self) -> UnGraph<(), ()> {
        let mut res = UnGraph::with_capacity(self.vertex_size(), self.edge_size());
        for _ in self.iter_vertices() {
            res.add_node(());
        }
        for e in self.iter_edges() {
            res.add_edge(node(e.source), node(e.sink), ());
        }
        res
    }
}
