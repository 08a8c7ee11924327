use crate::{error::*, graph::*};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Karger's randomized minimum cut of an undirected graph.
///
/// This is a Monte Carlo algorithm.
/// A single trial returns *some* cut, which is the minimum one only with probability
/// at least `2 / (n * (n - 1))`.
/// Repeating independent trials and keeping the smallest cut drives the failure probability down;
/// see [KargerMinCut::with_trials].
///
/// Without a seed every trial draws a fresh generator from system entropy.
/// With a seed `s`, trial `i` uses `StdRng::seed_from_u64(s + i)`, so results are reproducible.
#[derive(Debug, Clone)]
pub struct KargerMinCut {
    seed: Option<u64>,
    trials: usize,
}

impl Default for KargerMinCut {
    fn default() -> Self {
        Self {
            seed: None,
            trials: 1,
        }
    }
}

impl KargerMinCut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of independent trials [KargerMinCut::min_cut] runs. At least one.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    fn rng(&self, trial: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs a single trial. Directed graphs are rejected with [GraphError::DirectedGraph].
    pub fn cut<G>(&self, graph: &G) -> Result<Cut>
    where
        G: QueryableGraph + DirectedOrNot,
    {
        Contraction::new(graph, self.rng(0))?.run()
    }

    /// Runs all trials and keeps the cut with the fewest crossing edges.
    /// Ties keep the earliest trial.
    pub fn min_cut<G>(&self, graph: &G) -> Result<Cut>
    where
        G: QueryableGraph + DirectedOrNot,
    {
        let mut best = Contraction::new(graph, self.rng(0))?.run()?;
        for i in 1..self.trials {
            let cut = Contraction::new(graph, self.rng(i))?.run()?;
            if cut.crossing_edges < best.crossing_edges {
                best = cut;
            }
        }
        debug!(
            trials = self.trials,
            crossing_edges = best.crossing_edges,
            "minimum cut"
        );
        Ok(best)
    }
}

/// A 2-partition of the vertices together with the number of edges crossing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    set_a: Vec<VertexId>,
    set_b: Vec<VertexId>,
    crossing_edges: usize,
}

impl Cut {
    /// The side holding the smallest vertex, sorted.
    pub fn set_a(&self) -> &[VertexId] {
        &self.set_a
    }

    /// The other side, sorted.
    pub fn set_b(&self) -> &[VertexId] {
        &self.set_b
    }

    pub fn crossing_edges(&self) -> usize {
        self.crossing_edges
    }
}

#[derive(Debug, Clone)]
struct Supervertex {
    /// One entry per parallel edge. Never contains the owning key.
    adjacent: Vec<VertexId>,
    /// Original vertices merged into this one.
    contracted: Vec<VertexId>,
}

/// The state of one trial: a multigraph of surviving supervertices.
///
/// Supervertices live in an arena indexed by the original id of their surviving key.
/// Each contraction removes one key and leaves the contracted vertex lists of the surviving keys
/// a partition of the original vertices.
#[derive(Debug, Clone)]
pub struct Contraction<R = StdRng> {
    arena: Vec<Option<Supervertex>>,
    live: Vec<VertexId>,
    rng: R,
}

impl<R: Rng> Contraction<R> {
    /// Copies `graph`, whose adjacency lists must be symmetric, dropping self loops.
    ///
    /// Fails with [GraphError::DirectedGraph] on a directed graph
    /// and with [GraphError::TooFewVertices] below two vertices.
    pub fn new<G>(graph: &G, rng: R) -> Result<Self>
    where
        G: QueryableGraph + DirectedOrNot,
    {
        if G::DIRECTED_OR_NOT {
            return Err(GraphError::DirectedGraph);
        }
        if graph.vertex_size() < 2 {
            return Err(GraphError::TooFewVertices {
                vertex_size: graph.vertex_size(),
            });
        }
        let arena = graph
            .iter_vertices()
            .map(|v| {
                let adjacent = graph
                    .adjacent(&v)
                    .iter()
                    .copied()
                    .filter(|w| *w != v)
                    .collect();
                Some(Supervertex {
                    adjacent,
                    contracted: vec![v],
                })
            })
            .collect();
        Ok(Self {
            arena,
            live: graph.iter_vertices().collect(),
            rng,
        })
    }

    /// Number of surviving supervertices.
    pub fn remaining(&self) -> usize {
        self.live.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.live.len() <= 2
    }

    /// Contracts one random edge. Does nothing once two supervertices remain.
    ///
    /// The edge is drawn by picking a uniformly random supervertex with edges left
    /// and then a uniformly random slot of its adjacency.
    /// Once no edge is left, i.e. the graph is disconnected,
    /// two arbitrary supervertices are merged instead.
    pub fn contract_once(&mut self) -> Result<()> {
        if self.is_terminal() {
            return Ok(());
        }
        let has_edges = self
            .live
            .iter()
            .any(|k| matches!(&self.arena[k.to_raw()], Some(sv) if !sv.adjacent.is_empty()));
        if !has_edges {
            let (survivor, absorbed) = (self.live[0], self.live[1]);
            warn!(%survivor, %absorbed, "no edge left, merging disconnected supervertices");
            return self.merge(survivor, absorbed, false);
        }
        let (survivor, degree) = loop {
            let key = self.live[self.rng.gen_range(0..self.live.len())];
            let degree = self.supervertex(key)?.adjacent.len();
            if degree > 0 {
                break (key, degree);
            }
        };
        let slot = self.rng.gen_range(0..degree);
        let absorbed = self.supervertex(survivor)?.adjacent[slot];
        self.merge(survivor, absorbed, true)
    }

    /// Contracts until two supervertices remain.
    pub fn run(mut self) -> Result<Cut> {
        while !self.is_terminal() {
            self.contract_once()?;
        }
        let cut = self.into_cut()?;
        debug!(crossing_edges = cut.crossing_edges, "contraction finished");
        Ok(cut)
    }

    /// Reads off the cut.
    ///
    /// Fails with [GraphError::NotTerminal] unless exactly two supervertices remain.
    pub fn into_cut(self) -> Result<Cut> {
        if self.live.len() != 2 {
            return Err(GraphError::NotTerminal {
                remaining: self.live.len(),
            });
        }
        let (ka, kb) = (self.live[0], self.live[1]);
        let a = self.supervertex(ka)?;
        let b = self.supervertex(kb)?;
        if a.adjacent.len() != b.adjacent.len()
            || a.adjacent.iter().any(|x| *x != kb)
            || b.adjacent.iter().any(|x| *x != ka)
        {
            return Err(GraphError::InvalidState(format!(
                "asymmetric crossing edges: {:?} from {} and {:?} from {}",
                a.adjacent, ka, b.adjacent, kb
            )));
        }
        let mut set_a = a.contracted.clone();
        let mut set_b = b.contracted.clone();
        set_a.sort();
        set_b.sort();
        if set_b.first() < set_a.first() {
            std::mem::swap(&mut set_a, &mut set_b);
        }
        Ok(Cut {
            set_a,
            set_b,
            crossing_edges: a.adjacent.len(),
        })
    }

    fn supervertex(&self, key: VertexId) -> Result<&Supervertex> {
        self.arena
            .get(key.to_raw())
            .and_then(Option::as_ref)
            .ok_or_else(|| not_surviving(key))
    }

    fn supervertex_mut(&mut self, key: VertexId) -> Result<&mut Supervertex> {
        self.arena
            .get_mut(key.to_raw())
            .and_then(Option::as_mut)
            .ok_or_else(|| not_surviving(key))
    }

    /// Merges `absorbed` into `survivor`.
    ///
    /// With `via_edge`, one edge between them is consumed and must be present on both sides.
    fn merge(&mut self, survivor: VertexId, absorbed: VertexId, via_edge: bool) -> Result<()> {
        if survivor == absorbed {
            return Err(GraphError::InvalidState(format!(
                "self loop left on {survivor}"
            )));
        }
        let mut gone = self
            .arena
            .get_mut(absorbed.to_raw())
            .and_then(Option::take)
            .ok_or_else(|| not_surviving(absorbed))?;
        if via_edge {
            let there = remove_one(&mut gone.adjacent, survivor);
            let back = remove_one(&mut self.supervertex_mut(survivor)?.adjacent, absorbed);
            if !there || !back {
                return Err(GraphError::InvalidState(format!(
                    "edge {survivor} - {absorbed} is not symmetric"
                )));
            }
        }
        for x in gone.adjacent.iter() {
            if *x == survivor {
                continue;
            }
            for y in self.supervertex_mut(*x)?.adjacent.iter_mut() {
                if *y == absorbed {
                    *y = survivor;
                }
            }
        }
        let sv = self.supervertex_mut(survivor)?;
        sv.adjacent
            .extend(gone.adjacent.iter().copied().filter(|x| *x != survivor));
        // parallel edges between the pair turned into self loops
        sv.adjacent.retain(|x| *x != absorbed && *x != survivor);
        sv.contracted.extend(gone.contracted);

        let pos = self
            .live
            .iter()
            .position(|k| *k == absorbed)
            .ok_or_else(|| not_surviving(absorbed))?;
        self.live.swap_remove(pos);
        trace!(%survivor, %absorbed, remaining = self.live.len(), "contracted");
        Ok(())
    }
}

fn not_surviving(key: VertexId) -> GraphError {
    GraphError::InvalidState(format!("{key} is not a surviving vertex"))
}

fn remove_one(xs: &mut Vec<VertexId>, x: VertexId) -> bool {
    match xs.iter().position(|y| *y == x) {
        Some(i) => {
            xs.swap_remove(i);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed, undirected::AdjacentListGraph, AdjacencyLists};
    use quickcheck_macros::quickcheck;

    fn vids(xs: &[usize]) -> Vec<VertexId> {
        xs.iter().copied().map(VertexId::new).collect()
    }

    /// Two triangles joined by the bridge `2 - 3`.
    fn barbell() -> AdjacentListGraph {
        AdjacentListGraph::from_edges(
            6,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        )
        .unwrap()
    }

    fn assert_valid_cut<G: QueryableGraph>(graph: &G, cut: &Cut) {
        let mut all: Vec<_> = cut.set_a().iter().chain(cut.set_b()).copied().collect();
        all.sort();
        assert_eq!(all, graph.iter_vertices().collect::<Vec<_>>());
        assert!(!cut.set_a().is_empty());
        assert!(!cut.set_b().is_empty());
        let crossing = graph
            .iter_edges()
            .filter(|e| cut.set_a().contains(&e.source) != cut.set_a().contains(&e.sink))
            .count();
        assert_eq!(cut.crossing_edges(), crossing);
    }

    #[test]
    fn barbell_bridge_is_found() {
        let g = barbell();
        let cut = KargerMinCut::new()
            .with_seed(7)
            .with_trials(200)
            .min_cut(&g)
            .unwrap();
        assert_eq!(cut.crossing_edges(), 1);
        assert_eq!(cut.set_a(), &vids(&[0, 1, 2])[..]);
        assert_eq!(cut.set_b(), &vids(&[3, 4, 5])[..]);
    }

    #[test]
    fn every_trial_is_a_valid_cut() {
        let g = barbell();
        let mut observed = usize::MAX;
        for seed in 0..100 {
            let cut = KargerMinCut::new().with_seed(seed).cut(&g).unwrap();
            assert_valid_cut(&g, &cut);
            observed = observed.min(cut.crossing_edges());
        }
        assert_eq!(observed, 1);
    }

    #[test]
    fn known_minimum_cuts() {
        let ring = AdjacentListGraph::from_edges(6, (0..6).map(|i| (i, (i + 1) % 6))).unwrap();
        let k4 =
            AdjacentListGraph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
                .unwrap();
        let karger = KargerMinCut::new().with_seed(1).with_trials(100);
        assert_eq!(karger.min_cut(&ring).unwrap().crossing_edges(), 2);
        assert_eq!(karger.min_cut(&k4).unwrap().crossing_edges(), 3);
    }

    #[test]
    fn parallel_edges_count() {
        // 0 = 1 - 2, the double edge must never be the cut
        let g = AdjacentListGraph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).unwrap();
        let cut = KargerMinCut::new()
            .with_seed(3)
            .with_trials(50)
            .min_cut(&g)
            .unwrap();
        assert_eq!(cut.crossing_edges(), 1);
        assert_eq!(cut.set_b(), &vids(&[2])[..]);
    }

    #[test]
    fn seeded_trials_repeat() {
        let g = barbell();
        let karger = KargerMinCut::new().with_seed(42);
        assert_eq!(karger.cut(&g).unwrap(), karger.cut(&g).unwrap());
        assert_eq!(karger.seed(), Some(42));
        assert_eq!(karger.trials(), 1);
        assert_eq!(KargerMinCut::new().with_trials(0).trials(), 1);
    }

    #[test]
    fn unseeded_cut_is_valid() {
        let g = barbell();
        let cut = KargerMinCut::new().cut(&g).unwrap();
        assert_valid_cut(&g, &cut);
    }

    #[test]
    fn disconnected_graph_has_an_empty_cut() {
        // 5 is isolated, so the last step merges pieces without an edge
        let g = AdjacentListGraph::from_edges(6, [(0, 1), (2, 3), (3, 4)]).unwrap();
        for seed in 0..20 {
            let cut = KargerMinCut::new().with_seed(seed).cut(&g).unwrap();
            assert_valid_cut(&g, &cut);
        }
        let cut = KargerMinCut::new().with_seed(0).with_trials(20).min_cut(&g).unwrap();
        assert_eq!(cut.crossing_edges(), 0);
    }

    #[test]
    fn self_loops_are_dropped() {
        let g = AdjacentListGraph::from_edges(2, [(0, 0), (0, 1), (1, 1)]).unwrap();
        let cut = KargerMinCut::new().with_seed(0).cut(&g).unwrap();
        assert_eq!(cut.crossing_edges(), 1);
        assert_eq!(cut.set_a(), &vids(&[0])[..]);
    }

    #[test]
    fn too_few_vertices() {
        let g = AdjacentListGraph::with_vertices(1);
        assert_eq!(
            KargerMinCut::new().cut(&g),
            Err(GraphError::TooFewVertices { vertex_size: 1 })
        );
    }

    #[test]
    fn cut_before_termination() {
        let g = barbell();
        let contraction = Contraction::new(&g, StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(
            contraction.into_cut(),
            Err(GraphError::NotTerminal { remaining: 6 })
        );
    }

    #[test]
    fn directed_graph_is_rejected() {
        let g = directed::AdjacentListGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(KargerMinCut::new().cut(&g), Err(GraphError::DirectedGraph));
        assert_eq!(
            KargerMinCut::new().with_trials(3).min_cut(&g),
            Err(GraphError::DirectedGraph)
        );
        match Contraction::new(&g, StdRng::seed_from_u64(0)) {
            Err(GraphError::DirectedGraph) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn asymmetric_input_is_invalid_state() {
        // 0 -> 1 -> 2 without the way back
        let mut lists = AdjacencyLists::with_vertices(3);
        lists.push(VertexId(0), VertexId(1));
        lists.push(VertexId(1), VertexId(2));
        let g = AdjacentListGraph::from_lists(lists);
        let mut contraction = Contraction::new(&g, StdRng::seed_from_u64(0)).unwrap();
        match contraction.contract_once() {
            Err(GraphError::InvalidState(_)) => {}
            other => panic!("{:?}", other),
        }
    }

    #[quickcheck]
    fn contraction_keeps_a_partition(edges: Edges, seed: u64) {
        let g: AdjacentListGraph = edges.build();
        let mut contraction = match Contraction::new(&g, StdRng::seed_from_u64(seed)) {
            Ok(c) => c,
            Err(e) => {
                assert_eq!(e, GraphError::TooFewVertices { vertex_size: 1 });
                return;
            }
        };
        while !contraction.is_terminal() {
            let before = contraction.remaining();
            contraction.contract_once().unwrap();
            assert_eq!(contraction.remaining(), before - 1);

            let mut merged: Vec<_> = contraction
                .live
                .iter()
                .flat_map(|k| contraction.supervertex(*k).unwrap().contracted.clone())
                .collect();
            merged.sort();
            assert_eq!(merged, g.iter_vertices().collect::<Vec<_>>());

            for k in contraction.live.iter() {
                let sv = contraction.supervertex(*k).unwrap();
                assert!(!sv.adjacent.contains(k));
                for x in sv.adjacent.iter() {
                    let there = sv.adjacent.iter().filter(|y| *y == x).count();
                    let back = contraction
                        .supervertex(*x)
                        .unwrap()
                        .adjacent
                        .iter()
                        .filter(|y| *y == k)
                        .count();
                    assert_eq!(there, back);
                }
            }
        }
        let cut = contraction.into_cut().unwrap();
        assert_valid_cut(&g, &cut);
    }
}
