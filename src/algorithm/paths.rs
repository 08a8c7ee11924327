use super::traversal::explore_preorder;
use crate::{error::*, graph::*};
use std::collections::VecDeque;

/// Paths from a fixed source found by depth-first search.
///
/// A path is returned for every reachable vertex, but not necessarily a shortest one.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: VertexId,
    explored: Vec<bool>,
    edge_to: Vec<Option<VertexId>>,
}

impl DepthFirstPaths {
    pub fn new<G: QueryableGraph>(graph: &G, source: VertexId) -> Result<Self> {
        graph.check_vertex(&source)?;
        let mut explored = vec![false; graph.vertex_size()];
        let mut edge_to = vec![None; graph.vertex_size()];
        explore_preorder(graph, source, &mut explored, |v, from| {
            edge_to[v.to_raw()] = from;
        });
        Ok(Self {
            source,
            explored,
            edge_to,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        check(&self.explored, v)?;
        Ok(self.explored[v.to_raw()])
    }

    /// Vertices from the source to `v`, both inclusive, or `None` if `v` is unreachable.
    pub fn path_to(&self, v: &VertexId) -> Result<Option<Vec<VertexId>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(walk_back(self.source, &self.edge_to, *v)))
    }
}

/// Paths from a fixed source found by breadth-first search.
///
/// Every returned path has the fewest edges among all paths from the source.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: VertexId,
    explored: Vec<bool>,
    edge_to: Vec<Option<VertexId>>,
    dist_to: Vec<usize>,
}

impl BreadthFirstPaths {
    pub fn new<G: QueryableGraph>(graph: &G, source: VertexId) -> Result<Self> {
        graph.check_vertex(&source)?;
        let n = graph.vertex_size();
        let mut res = Self {
            source,
            explored: vec![false; n],
            edge_to: vec![None; n],
            dist_to: vec![usize::MAX; n],
        };
        let mut queue = VecDeque::new();
        res.explored[source.to_raw()] = true;
        res.dist_to[source.to_raw()] = 0;
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            for w in graph.adjacent(&v) {
                let w = *w;
                if !res.explored[w.to_raw()] {
                    res.explored[w.to_raw()] = true;
                    res.edge_to[w.to_raw()] = Some(v);
                    res.dist_to[w.to_raw()] = res.dist_to[v.to_raw()] + 1;
                    queue.push_back(w);
                }
            }
        }
        Ok(res)
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        check(&self.explored, v)?;
        Ok(self.explored[v.to_raw()])
    }

    /// Number of edges on a shortest path to `v`.
    pub fn dist_to(&self, v: &VertexId) -> Result<Option<usize>> {
        if self.has_path_to(v)? {
            Ok(Some(self.dist_to[v.to_raw()]))
        } else {
            Ok(None)
        }
    }

    /// Vertices from the source to `v`, both inclusive, or `None` if `v` is unreachable.
    pub fn path_to(&self, v: &VertexId) -> Result<Option<Vec<VertexId>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(walk_back(self.source, &self.edge_to, *v)))
    }
}

fn check(explored: &[bool], v: &VertexId) -> Result<()> {
    if v.to_raw() < explored.len() {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: *v,
            vertex_size: explored.len(),
        })
    }
}

fn walk_back(source: VertexId, edge_to: &[Option<VertexId>], v: VertexId) -> Vec<VertexId> {
    let mut stack = vec![v];
    let mut x = v;
    while x != source {
        match edge_to[x.to_raw()] {
            Some(prev) => {
                stack.push(prev);
                x = prev;
            }
            None => break,
        }
    }
    stack.reverse();
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed, undirected};
    use petgraph::{algo::dijkstra, graph::NodeIndex};
    use quickcheck_macros::quickcheck;

    fn vids(xs: &[usize]) -> Vec<VertexId> {
        xs.iter().copied().map(VertexId::new).collect()
    }

    fn is_walk<G: QueryableGraph>(graph: &G, path: &[VertexId]) -> bool {
        path.windows(2)
            .all(|pair| graph.adjacent(&pair[0]).contains(&pair[1]))
    }

    #[test]
    fn depth_first_path_is_not_always_shortest() {
        let g = undirected::AdjacentListGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        let dfs = DepthFirstPaths::new(&g, VertexId(0)).unwrap();
        let bfs = BreadthFirstPaths::new(&g, VertexId(0)).unwrap();
        assert_eq!(dfs.path_to(&VertexId(1)).unwrap(), Some(vids(&[0, 2, 1])));
        assert_eq!(bfs.path_to(&VertexId(1)).unwrap(), Some(vids(&[0, 1])));
        assert_eq!(bfs.dist_to(&VertexId(1)).unwrap(), Some(1));
    }

    #[test]
    fn path_to_source_is_trivial() {
        let g = directed::AdjacentListGraph::from_edges(2, [(0, 1)]).unwrap();
        let bfs = BreadthFirstPaths::new(&g, VertexId(1)).unwrap();
        assert_eq!(bfs.path_to(&VertexId(1)).unwrap(), Some(vids(&[1])));
        assert_eq!(bfs.dist_to(&VertexId(1)).unwrap(), Some(0));
        assert_eq!(bfs.path_to(&VertexId(0)).unwrap(), None);
        assert_eq!(bfs.dist_to(&VertexId(0)).unwrap(), None);
    }

    #[test]
    fn unreachable_and_out_of_range() {
        let g = undirected::AdjacentListGraph::from_edges(3, [(0, 1)]).unwrap();
        let dfs = DepthFirstPaths::new(&g, VertexId(0)).unwrap();
        assert_eq!(dfs.source(), VertexId(0));
        assert_eq!(dfs.has_path_to(&VertexId(2)), Ok(false));
        assert_eq!(dfs.path_to(&VertexId(2)), Ok(None));
        assert!(dfs.path_to(&VertexId(3)).is_err());
        assert!(DepthFirstPaths::new(&g, VertexId(3)).is_err());
        assert!(BreadthFirstPaths::new(&g, VertexId(3)).is_err());
    }

    #[quickcheck]
    fn breadth_first_paths_are_shortest(edges: Edges) {
        let g: directed::AdjacentListGraph = edges.build();
        let pg = g.to_petgraph();
        let oracle = dijkstra(&pg, NodeIndex::new(0), None, |_| 1usize);
        let bfs = BreadthFirstPaths::new(&g, VertexId(0)).unwrap();
        for v in g.iter_vertices() {
            let expected = oracle.get(&NodeIndex::new(v.to_raw())).copied();
            assert_eq!(bfs.dist_to(&v).unwrap(), expected);
            if let Some(path) = bfs.path_to(&v).unwrap() {
                assert_eq!(Some(path.len() - 1), expected);
                assert_eq!(path.first(), Some(&VertexId(0)));
                assert_eq!(path.last(), Some(&v));
                assert!(is_walk(&g, &path));
            }
        }
    }

    #[quickcheck]
    fn depth_first_paths_are_walks(edges: Edges) {
        let g: undirected::AdjacentListGraph = edges.build();
        let dfs = DepthFirstPaths::new(&g, VertexId(0)).unwrap();
        let bfs = BreadthFirstPaths::new(&g, VertexId(0)).unwrap();
        for v in g.iter_vertices() {
            assert_eq!(dfs.has_path_to(&v), bfs.has_path_to(&v));
            if let Some(path) = dfs.path_to(&v).unwrap() {
                assert_eq!(path.first(), Some(&VertexId(0)));
                assert_eq!(path.last(), Some(&v));
                assert!(is_walk(&g, &path));
                let shortest = bfs.dist_to(&v).unwrap().unwrap();
                assert!(path.len() - 1 >= shortest);
            }
        }
    }
}
