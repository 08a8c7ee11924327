use super::traversal::{explore_postorder, explore_preorder};
use crate::{error::*, graph::*};
use tracing::debug;

/// Strongly connected components by Kosaraju's two-pass algorithm.
///
/// 1. A depth-first search over the reversed graph, with roots taken from `n - 1` down to `0`,
///    records vertices in the order they finish.
/// 2. A depth-first search over the original graph, with roots taken in decreasing finishing time,
///    discovers exactly one component per root. That root is the leader of every vertex it reaches.
///
/// Two vertices are strongly connected iff they share a leader.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    leader: Vec<VertexId>,
    count: usize,
}

impl StronglyConnectedComponents {
    /// `reversed` must hold every edge of `graph` turned around.
    /// Only the vertex counts are checked; any other mismatch gives meaningless leaders.
    pub fn new<G, R>(graph: &G, reversed: &R) -> Result<Self>
    where
        G: QueryableGraph,
        R: QueryableGraph,
    {
        if graph.vertex_size() != reversed.vertex_size() {
            return Err(GraphError::VertexSizeMismatch {
                expected: graph.vertex_size(),
                actual: reversed.vertex_size(),
            });
        }
        Ok(Self::compute(graph, reversed))
    }

    /// Builds the reversal of `graph` and runs [StronglyConnectedComponents::new] on both.
    pub fn of(graph: &directed::AdjacentListGraph) -> Self {
        Self::compute(graph, &graph.reverse())
    }

    fn compute<G, R>(graph: &G, reversed: &R) -> Self
    where
        G: QueryableGraph,
        R: QueryableGraph,
    {
        let n = graph.vertex_size();
        let mut explored = vec![false; n];
        let mut by_finishing_time = Vec::with_capacity(n);
        for s in reversed.iter_vertices_rev() {
            explore_postorder(reversed, s, &mut explored, |v| by_finishing_time.push(v));
        }

        let mut explored = vec![false; n];
        let mut leader = vec![VertexId::MIN; n];
        let mut count = 0;
        for s in by_finishing_time.into_iter().rev() {
            if explored[s.to_raw()] {
                continue;
            }
            explore_preorder(graph, s, &mut explored, |v, _| leader[v.to_raw()] = s);
            count += 1;
        }
        debug!(vertices = n, components = count, "strongly connected components");
        Self { leader, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn leader(&self, v: &VertexId) -> Result<VertexId> {
        self.leader
            .get(v.to_raw())
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.leader.len(),
            })
    }

    /// Leader of every vertex, indexed by vertex.
    pub fn leaders(&self) -> &[VertexId] {
        &self.leader
    }

    pub fn strongly_connected(&self, u: &VertexId, v: &VertexId) -> Result<bool> {
        Ok(self.leader(u)? == self.leader(v)?)
    }

    /// Members of every component, components ordered by leader.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut slot = vec![usize::MAX; self.leader.len()];
        let mut leaders: Vec<_> = self.leader.clone();
        leaders.sort();
        leaders.dedup();
        for (i, l) in leaders.iter().enumerate() {
            slot[l.to_raw()] = i;
        }
        let mut res = vec![vec![]; leaders.len()];
        for (v, l) in self.leader.iter().enumerate() {
            res[slot[l.to_raw()]].push(VertexId::new(v));
        }
        res
    }
}
