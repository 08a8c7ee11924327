use crate::{error::*, graph::*};
use ahash::RandomState;
use bimap::BiHashMap;

/// A graph whose vertices carry unique string labels.
///
/// Labels are interned on first sight: the first new label gets vertex `0`,
/// the next one `1`, and so on.
#[derive(Clone)]
pub struct SymbolGraph<G = undirected::AdjacentListGraph> {
    graph: G,
    labels: BiHashMap<VertexId, String, RandomState, RandomState>,
}

impl<G> SymbolGraph<G>
where
    G: GrowableGraph + QueryableGraph,
{
    pub fn new() -> Self {
        Self {
            graph: G::new(),
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Builds a graph from records such as `movie/actor/actor`:
    /// the first label of each record is linked to every following label.
    pub fn from_records<I, R, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut res = Self::new();
        for record in records {
            let mut labels = record.into_iter();
            if let Some(head) = labels.next() {
                let head = res.intern(head.as_ref());
                for label in labels {
                    let v = res.intern(label.as_ref());
                    res.graph.add_edge(head, v)?;
                }
            }
        }
        Ok(res)
    }

    /// Returns the vertex of `label`, adding a new vertex if absent.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(vid) = self.labels.get_by_right(label) {
            *vid
        } else {
            let vid = self.graph.add_vertex();
            self.labels.insert(vid, label.to_string());
            vid
        }
    }

    /// Adds an edge between two labels, interning either if absent.
    pub fn add_edge(&mut self, source: &str, sink: &str) -> Result<()> {
        let source = self.intern(source);
        let sink = self.intern(sink);
        self.graph.add_edge(source, sink)
    }
}

impl<G> Default for SymbolGraph<G>
where
    G: GrowableGraph + QueryableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SymbolGraph<G>
where
    G: QueryableGraph,
{
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_right(label)
    }

    pub fn index_of(&self, label: &str) -> Result<VertexId> {
        self.labels
            .get_by_right(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, v: &VertexId) -> Result<&str> {
        self.labels
            .get_by_left(v)
            .map(|s| s.as_str())
            .ok_or(GraphError::VertexOutOfRange {
                vertex: *v,
                vertex_size: self.graph.vertex_size(),
            })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}
