use crate::{error::*, graph::*};
use std::collections::VecDeque;

/// Exploration orders from a single source vertex.
///
/// Every method fails with [`GraphError::VertexOutOfRange`] on an invalid source
/// and cannot fail otherwise.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Depth-first exploration order using an explicit stack.
    ///
    /// A vertex is marked explored when it is popped, not when it is pushed.
    /// So it may sit on the stack several times but is visited once.
    fn dfs(&self, source: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&source)?;
        let mut explored = vec![false; self.vertex_size()];
        let mut order = vec![];
        explore_preorder(self, source, &mut explored, |v, _| order.push(v));
        Ok(order)
    }

    /// Depth-first exploration order by recursion.
    ///
    /// Recursion depth grows with the longest explored path.
    /// Prefer [`Traversal::dfs`] on deep graphs.
    fn dfs_recursive(&self, source: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&source)?;
        let mut explored = vec![false; self.vertex_size()];
        let mut order = vec![];
        dfs_visit(self, source, &mut explored, &mut order);
        Ok(order)
    }

    /// Breadth-first exploration order.
    fn bfs(&self, source: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&source)?;
        let mut explored = vec![false; self.vertex_size()];
        let mut order = vec![];
        let mut queue = VecDeque::new();
        explored[source.to_raw()] = true;
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for w in self.adjacent(&v) {
                if !explored[w.to_raw()] {
                    explored[w.to_raw()] = true;
                    queue.push_back(*w);
                }
            }
        }
        Ok(order)
    }

    /// All vertices reachable from `source`, including itself, in increasing order.
    fn reachable_from(&self, source: VertexId) -> Result<Vec<VertexId>> {
        let mut res = self.dfs(source)?;
        res.sort();
        Ok(res)
    }
}

impl<G: QueryableGraph> Traversal for G {}

fn dfs_visit<G>(graph: &G, v: VertexId, explored: &mut [bool], order: &mut Vec<VertexId>)
where
    G: QueryableGraph,
{
    explored[v.to_raw()] = true;
    order.push(v);
    for w in graph.adjacent(&v) {
        if !explored[w.to_raw()] {
            dfs_visit(graph, *w, explored, order);
        }
    }
}

/// Explores everything reachable from `root` that is not explored yet.
///
/// Vertices are marked on pop. `on_visit` receives each newly explored vertex
/// together with the vertex it was discovered from.
pub(crate) fn explore_preorder<G, F>(
    graph: &G,
    root: VertexId,
    explored: &mut [bool],
    mut on_visit: F,
) where
    G: QueryableGraph,
    F: FnMut(VertexId, Option<VertexId>),
{
    let mut stack = vec![(root, None)];
    while let Some((v, from)) = stack.pop() {
        if explored[v.to_raw()] {
            continue;
        }
        explored[v.to_raw()] = true;
        on_visit(v, from);
        for w in graph.adjacent(&v) {
            if !explored[w.to_raw()] {
                stack.push((*w, Some(v)));
            }
        }
    }
}

/// Explores everything reachable from `root` that is not explored yet,
/// calling `on_finish` once all out-edges of a vertex are exhausted.
///
/// The visiting order is that of the recursive formulation.
pub(crate) fn explore_postorder<G, F>(
    graph: &G,
    root: VertexId,
    explored: &mut [bool],
    mut on_finish: F,
) where
    G: QueryableGraph,
    F: FnMut(VertexId),
{
    if explored[root.to_raw()] {
        return;
    }
    explored[root.to_raw()] = true;
    let mut stack = vec![(root, 0usize)];
    while let Some(top) = stack.last_mut() {
        let v = top.0;
        if let Some(w) = graph.adjacent(&v).get(top.1) {
            top.1 += 1;
            if !explored[w.to_raw()] {
                explored[w.to_raw()] = true;
                stack.push((*w, 0));
            }
        } else {
            stack.pop();
            on_finish(v);
        }
    }
}
