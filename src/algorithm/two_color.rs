use crate::{error::*, graph::*};

/// Two-colouring of an undirected graph by depth-first search.
///
/// The root of every search tree gets colour `false`
/// and each newly discovered vertex the opposite colour of its discoverer.
/// Once an edge joins two vertices of the same colour, the graph is known not to be bipartite
/// and the colours stop meaning anything.
#[derive(Debug, Clone)]
pub struct TwoColorability {
    color: Vec<bool>,
    is_bipartite: bool,
}

impl TwoColorability {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut explored = vec![false; graph.vertex_size()];
        let mut res = Self {
            color: vec![false; graph.vertex_size()],
            is_bipartite: true,
        };
        for s in graph.iter_vertices() {
            if !explored[s.to_raw()] {
                res.search(graph, s, &mut explored);
            }
        }
        res
    }

    fn search<G: QueryableGraph>(&mut self, graph: &G, root: VertexId, explored: &mut [bool]) {
        explored[root.to_raw()] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some(top) = stack.last_mut() {
            let v = top.0;
            let w = match graph.adjacent(&v).get(top.1) {
                Some(w) => *w,
                None => {
                    stack.pop();
                    continue;
                }
            };
            top.1 += 1;
            if !explored[w.to_raw()] {
                explored[w.to_raw()] = true;
                self.color[w.to_raw()] = !self.color[v.to_raw()];
                stack.push((w, 0));
            } else if self.color[w.to_raw()] == self.color[v.to_raw()] {
                self.is_bipartite = false;
            }
        }
    }

    pub fn is_bipartite(&self) -> bool {
        self.is_bipartite
    }

    pub fn color(&self, v: &VertexId) -> Result<bool> {
        self.color
            .get(v.to_raw())
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.color.len(),
            })
    }
}
