use crate::graph::*;

/// Whether an undirected graph has a cycle.
///
/// Self loops and parallel edges are cycles.
#[derive(Debug, Clone)]
pub struct CycleDetection {
    has_cycle: bool,
}

struct UndirectedFrame {
    vertex: VertexId,
    parent: Option<VertexId>,
    next: usize,
    // the tree edge back to the parent is seen once from this side
    parent_skipped: bool,
}

impl CycleDetection {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut explored = vec![false; graph.vertex_size()];
        for s in graph.iter_vertices() {
            if !explored[s.to_raw()] && Self::search(graph, s, &mut explored) {
                return Self { has_cycle: true };
            }
        }
        Self { has_cycle: false }
    }

    fn search<G: QueryableGraph>(graph: &G, root: VertexId, explored: &mut [bool]) -> bool {
        explored[root.to_raw()] = true;
        let mut stack = vec![UndirectedFrame {
            vertex: root,
            parent: None,
            next: 0,
            parent_skipped: false,
        }];
        while let Some(top) = stack.last_mut() {
            let v = top.vertex;
            let w = match graph.adjacent(&v).get(top.next) {
                Some(w) => *w,
                None => {
                    stack.pop();
                    continue;
                }
            };
            top.next += 1;
            if !explored[w.to_raw()] {
                explored[w.to_raw()] = true;
                stack.push(UndirectedFrame {
                    vertex: w,
                    parent: Some(v),
                    next: 0,
                    parent_skipped: false,
                });
            } else if top.parent == Some(w) && !top.parent_skipped {
                top.parent_skipped = true;
            } else {
                return true;
            }
        }
        false
    }

    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }
}

/// Finds a directed cycle, if any.
///
/// Only the first cycle met by the search is reported.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<VertexId>>,
}

impl DirectedCycle {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut search = DirectedSearch {
            explored: vec![false; graph.vertex_size()],
            on_stack: vec![false; graph.vertex_size()],
            edge_to: vec![None; graph.vertex_size()],
        };
        for s in graph.iter_vertices() {
            if search.explored[s.to_raw()] {
                continue;
            }
            if let Some(cycle) = search.run(graph, s) {
                return Self { cycle: Some(cycle) };
            }
        }
        Self { cycle: None }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// A closed walk `[v, w, .., v]` along directed edges.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }
}

struct DirectedSearch {
    explored: Vec<bool>,
    on_stack: Vec<bool>,
    edge_to: Vec<Option<VertexId>>,
}

impl DirectedSearch {
    fn run<G: QueryableGraph>(&mut self, graph: &G, root: VertexId) -> Option<Vec<VertexId>> {
        self.explored[root.to_raw()] = true;
        self.on_stack[root.to_raw()] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some(top) = stack.last_mut() {
            let v = top.0;
            let w = match graph.adjacent(&v).get(top.1) {
                Some(w) => *w,
                None => {
                    // also reached at once by vertices without out-edges
                    self.on_stack[v.to_raw()] = false;
                    stack.pop();
                    continue;
                }
            };
            top.1 += 1;
            if !self.explored[w.to_raw()] {
                self.explored[w.to_raw()] = true;
                self.on_stack[w.to_raw()] = true;
                self.edge_to[w.to_raw()] = Some(v);
                stack.push((w, 0));
            } else if self.on_stack[w.to_raw()] {
                return Some(self.trace(v, w));
            }
        }
        None
    }

    /// Closes the cycle formed by the tree path `w ~> v` and the edge `v -> w`.
    fn trace(&self, v: VertexId, w: VertexId) -> Vec<VertexId> {
        let mut back = vec![];
        let mut x = v;
        while x != w {
            back.push(x);
            match self.edge_to[x.to_raw()] {
                Some(prev) => x = prev,
                None => break,
            }
        }
        let mut res = Vec::with_capacity(back.len() + 2);
        res.push(v);
        res.push(w);
        res.extend(back.into_iter().rev());
        res
    }
}
