use super::{traversal::explore_postorder, DirectedCycle};
use crate::{error::*, graph::*};

/// Topological sorting by depth-first postorder.
///
/// The graph must be a DAG. On cyclic graphs, [TopologicalSort::toposort] returns some
/// order of all vertices without any guarantee;
/// use [TopologicalSort::checked_toposort] when acyclicity is not known in advance.
pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Starts searches from vertices in index order.
    fn toposort(&self) -> TopologicalOrder {
        TopologicalOrder::compute(self, self.iter_vertices())
    }

    /// Starts searches from `roots` in the given order,
    /// then from any vertex still unvisited, in index order.
    ///
    /// Different root orders may give different, equally valid, orders.
    fn toposort_from<I>(&self, roots: I) -> Result<TopologicalOrder>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let roots: Vec<_> = roots.into_iter().collect();
        for v in roots.iter() {
            self.check_vertex(v)?;
        }
        let roots = roots.into_iter().chain(self.iter_vertices());
        Ok(TopologicalOrder::compute(self, roots))
    }

    /// Fails with [GraphError::Cyclic] carrying a cycle if the graph is not a DAG.
    fn checked_toposort(&self) -> Result<TopologicalOrder> {
        if let Some(cycle) = DirectedCycle::new(self).cycle() {
            return Err(GraphError::Cyclic {
                cycle: cycle.to_vec(),
            });
        }
        Ok(self.toposort())
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

/// A linear order of vertices such that every edge `u -> v` has `position(u) < position(v)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<VertexId>,
    position: Vec<usize>,
}

impl TopologicalOrder {
    fn compute<G, I>(graph: &G, roots: I) -> Self
    where
        G: QueryableGraph,
        I: Iterator<Item = VertexId>,
    {
        let n = graph.vertex_size();
        let mut explored = vec![false; n];
        let mut order = vec![VertexId::MIN; n];
        let mut position = vec![0; n];
        // finished vertices take positions backward from n - 1
        let mut next_label = n;
        for root in roots {
            explore_postorder(graph, root, &mut explored, |v| {
                next_label -= 1;
                order[next_label] = v;
                position[v.to_raw()] = next_label;
            });
        }
        Self { order, position }
    }

    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn position(&self, v: &VertexId) -> Result<usize> {
        self.position
            .get(v.to_raw())
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.position.len(),
            })
    }

    pub fn into_vec(self) -> Vec<VertexId> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    fn respects_edges<G: QueryableGraph>(graph: &G, topo: &TopologicalOrder) -> bool {
        graph
            .iter_edges()
            .all(|e| topo.position(&e.source).unwrap() < topo.position(&e.sink).unwrap())
    }

    fn permutations(xs: Vec<VertexId>) -> Vec<Vec<VertexId>> {
        if xs.is_empty() {
            return vec![vec![]];
        }
        let mut res = vec![];
        for i in 0..xs.len() {
            let mut rest = xs.clone();
            let head = rest.remove(i);
            for mut tail in permutations(rest) {
                tail.insert(0, head);
                res.push(tail);
            }
        }
        res
    }

    #[test]
    fn six_vertex_example_without_back_edge() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)];
        let g = AdjacentListGraph::from_edges(6, edges).unwrap();
        let trial = g.checked_toposort().unwrap().into_vec();
        let oracle: Vec<_> = (0..6).map(VertexId::new).collect();
        assert_eq!(trial, oracle);
    }

    #[test]
    fn cyclic_graph_is_rejected() {
        let edges = vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5)];
        let g = AdjacentListGraph::from_edges(6, edges).unwrap();
        match g.checked_toposort() {
            Err(GraphError::Cyclic { cycle }) => {
                assert_eq!(cycle, [2, 0, 1, 2].map(VertexId::new).to_vec());
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn every_root_order_of_a_small_dag() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 2 -> 1
        let g = AdjacentListGraph::from_edges(4, [(0, 1), (1, 3), (0, 2), (2, 3), (2, 1)])
            .unwrap();
        let all = permutations(g.iter_vertices().collect());
        assert_eq!(all.len(), 24);
        for roots in all {
            let topo = g.toposort_from(roots.clone()).unwrap();
            assert!(respects_edges(&g, &topo), "{:?} -> {:?}", roots, topo);
            let oracle = [0, 2, 1, 3].map(VertexId::new);
            assert_eq!(topo.order(), &oracle[..]);
        }
    }

    #[test]
    fn root_order_changes_unconstrained_ties() {
        let g = AdjacentListGraph::from_edges(3, [(0, 2)]).unwrap();
        let by_index = g.toposort().into_vec();
        let by_roots = g
            .toposort_from([VertexId(1), VertexId(0)])
            .unwrap()
            .into_vec();
        assert_eq!(by_index, [1, 0, 2].map(VertexId::new).to_vec());
        assert_eq!(by_roots, [0, 2, 1].map(VertexId::new).to_vec());
    }

    #[test]
    fn invalid_root() {
        let g = AdjacentListGraph::with_vertices(2);
        assert!(g.toposort_from([VertexId(5)]).is_err());
        assert!(g.toposort().position(&VertexId(5)).is_err());
    }

    #[quickcheck]
    fn toposort(edges: Edges) {
        let g: AdjacentListGraph = edges.acyclic().build();
        let topo = g.toposort();
        assert!(respects_edges(&g, &topo));
        let mut vs = topo.order().to_vec();
        vs.sort();
        assert_eq!(vs, g.iter_vertices().collect::<Vec<_>>());
        for (i, v) in topo.order().iter().enumerate() {
            assert_eq!(topo.position(v), Ok(i));
        }
    }

    #[quickcheck]
    fn toposort_from_reversed_roots(edges: Edges) {
        let g: AdjacentListGraph = edges.acyclic().build();
        let topo = g.toposort_from(g.iter_vertices_rev()).unwrap();
        assert!(respects_edges(&g, &topo));
    }
}
