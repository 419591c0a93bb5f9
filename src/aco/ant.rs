//! The tour-construction agent.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::AcoError;
use crate::graph::{Cycle, EdgeId, Graph, VertexId};

/// Margin added to every candidate's pheromone share, so each edge keeps
/// at least a 5% chance of selection regardless of trail strength.
const SELECTION_FLOOR: f64 = 0.05;

/// A single tour-building agent.
///
/// An ant starts on a fixed origin vertex and extends its tour by one edge
/// per [`walk`](Ant::walk) call, never revisiting a vertex. Once every
/// vertex in the graph has been visited the ant is done and further calls
/// are no-ops. Ants live for one generation and are then discarded; only
/// the pheromone they left on the graph persists.
#[derive(Debug, Clone)]
pub struct Ant {
    id: usize,
    start: VertexId,
    position: VertexId,
    cycle: Cycle,
    last_edge: Option<EdgeId>,
    visited: HashSet<VertexId>,
    done: bool,
}

impl Ant {
    /// Creates an ant standing on its start vertex, which counts as
    /// visited.
    pub fn new(id: usize, start: VertexId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            id,
            start,
            position: start,
            cycle: Cycle::new(),
            last_edge: None,
            visited,
            done: false,
        }
    }

    /// The ant's id within its generation.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The vertex the ant started from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// The vertex the ant currently stands on.
    pub fn position(&self) -> VertexId {
        self.position
    }

    /// The edge traversed by the most recent step, if any.
    pub fn last_edge(&self) -> Option<EdgeId> {
        self.last_edge
    }

    /// Number of distinct vertices visited so far (including the start).
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Whether the ant has completed its tour.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The tour built so far.
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Consumes the ant, yielding its tour.
    pub fn into_cycle(self) -> Cycle {
        self.cycle
    }

    /// Advances the tour by one edge.
    ///
    /// Selects an edge to an unvisited vertex, deposits `local_update`
    /// pheromone on it, and moves there. Returns `Ok(true)` once every
    /// vertex has been visited; a done ant stays done and returns
    /// `Ok(true)` without touching the graph.
    ///
    /// # Errors
    ///
    /// [`AcoError::Stranded`] if no incident edge leads to an unvisited
    /// vertex. The graph must be complete for every ant to finish.
    pub fn walk<R: Rng>(
        &mut self,
        graph: &mut Graph,
        local_update: f64,
        rng: &mut R,
    ) -> Result<bool, AcoError> {
        if self.done {
            return Ok(true);
        }

        let candidates = self.candidate_edges(graph);
        if candidates.is_empty() {
            return Err(AcoError::Stranded {
                ant: self.id,
                vertex: graph.vertex(self.position).name().to_string(),
                visited: self.visited.len(),
                total: graph.vertex_count(),
            });
        }

        let edge = pick_edge(graph, candidates, rng);

        graph.edge_mut(edge).deposit(local_update);
        self.last_edge = Some(edge);
        self.position = graph.edge(edge).other_endpoint(self.position);
        self.cycle.push(edge);
        self.visited.insert(self.position);

        if self.visited.len() == graph.vertex_count() {
            self.done = true;
        }
        Ok(self.done)
    }

    /// Incident edges whose far endpoint has not been visited yet.
    fn candidate_edges(&self, graph: &Graph) -> Vec<EdgeId> {
        graph
            .vertex(self.position)
            .edges()
            .iter()
            .copied()
            .filter(|&e| {
                !self
                    .visited
                    .contains(&graph.edge(e).other_endpoint(self.position))
            })
            .collect()
    }
}

/// Stochastic threshold selection over the candidate edges.
///
/// Candidates are shuffled to remove positional bias, then scanned in
/// order: each examined edge gets a fresh uniform draw in [0, 1), and the
/// first edge whose pheromone share plus [`SELECTION_FLOOR`] beats its
/// draw is taken. When every candidate's pheromone is zero the share
/// denominator is 1, leaving the floor as a uniform baseline. If no edge
/// clears its draw, the last examined edge is taken.
fn pick_edge<R: Rng>(graph: &Graph, mut candidates: Vec<EdgeId>, rng: &mut R) -> EdgeId {
    candidates.shuffle(rng);

    let total: f64 = candidates.iter().map(|&e| graph.edge(e).pheromone()).sum();
    let total = if total == 0.0 { 1.0 } else { total };

    let mut selected = None;
    for &e in &candidates {
        selected = Some(e);
        let share = graph.edge(e).pheromone() / total;
        if rng.random_range(0.0..1.0) < share + SELECTION_FLOOR {
            break;
        }
    }
    selected.expect("candidates must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Complete graph over `n` auto-named vertices, all weights 1.0.
    fn complete_graph(n: usize) -> (Graph, Vec<VertexId>) {
        let mut graph = Graph::new();
        let ids: Vec<VertexId> = (0..n).map(|_| graph.add_anonymous_vertex()).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                graph.connect(ids[i], ids[j], 1.0);
            }
        }
        (graph, ids)
    }

    #[test]
    fn test_new_ant_has_visited_its_start() {
        let (_, ids) = complete_graph(3);
        let ant = Ant::new(0, ids[0]);
        assert_eq!(ant.visited_count(), 1);
        assert_eq!(ant.position(), ids[0]);
        assert!(!ant.is_done());
        assert!(ant.cycle().is_empty());
        assert_eq!(ant.last_edge(), None);
    }

    #[test]
    fn test_visited_grows_by_one_per_step_until_done() {
        let (mut graph, ids) = complete_graph(5);
        let mut ant = Ant::new(0, ids[0]);
        let mut rng = StdRng::seed_from_u64(7);

        for expected in 2..=5 {
            let done = ant.walk(&mut graph, 10.0, &mut rng).expect("complete graph");
            assert_eq!(ant.visited_count(), expected);
            assert_eq!(done, expected == 5);
        }
        assert!(ant.is_done());
        assert_eq!(ant.cycle().len(), 4);
    }

    #[test]
    fn test_done_ant_walk_is_a_noop() {
        let (mut graph, ids) = complete_graph(3);
        let mut ant = Ant::new(0, ids[0]);
        let mut rng = StdRng::seed_from_u64(1);

        while !ant.walk(&mut graph, 10.0, &mut rng).expect("complete graph") {}
        let cycle_before = ant.cycle().clone();
        let pheromone_before: Vec<f64> = graph.edges().iter().map(|e| e.pheromone()).collect();

        assert!(ant.walk(&mut graph, 10.0, &mut rng).expect("no-op"));
        assert_eq!(ant.cycle(), &cycle_before);
        let pheromone_after: Vec<f64> = graph.edges().iter().map(|e| e.pheromone()).collect();
        assert_eq!(pheromone_before, pheromone_after);
    }

    #[test]
    fn test_step_deposits_local_pheromone_on_selected_edge() {
        let (mut graph, ids) = complete_graph(3);
        let mut ant = Ant::new(0, ids[0]);
        let mut rng = StdRng::seed_from_u64(3);

        ant.walk(&mut graph, 10.0, &mut rng).expect("complete graph");

        let taken = ant.last_edge().expect("one step taken");
        assert!((graph.edge(taken).pheromone() - 10.0).abs() < 1e-10);
        assert_eq!(ant.cycle().edges(), &[taken]);
    }

    #[test]
    fn test_zero_pheromone_candidates_select_without_division_by_zero() {
        // Single ant, single step, three candidates, all at zero pheromone.
        let mut graph = Graph::new();
        let hub = graph.add_vertex("hub");
        let spokes = [
            graph.add_vertex("a"),
            graph.add_vertex("b"),
            graph.add_vertex("c"),
        ];
        for &s in &spokes {
            graph.connect(hub, s, 1.0);
        }

        let mut ant = Ant::new(0, hub);
        let mut rng = StdRng::seed_from_u64(11);
        ant.walk(&mut graph, 10.0, &mut rng).expect("candidates exist");

        let taken = ant.last_edge().expect("one step taken");
        assert!(spokes.contains(&graph.edge(taken).other_endpoint(hub)));
        assert!(graph.edge(taken).pheromone() > 0.0);
    }

    #[test]
    fn test_never_revisits_a_vertex() {
        let (mut graph, ids) = complete_graph(6);
        let mut ant = Ant::new(0, ids[0]);
        let mut rng = StdRng::seed_from_u64(5);

        let mut seen = vec![ids[0]];
        while !ant.walk(&mut graph, 10.0, &mut rng).expect("complete graph") {
            assert!(!seen.contains(&ant.position()));
            seen.push(ant.position());
        }
        assert!(!seen.contains(&ant.position()));
        seen.push(ant.position());
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_stranded_ant_is_a_fatal_error() {
        // Vertex "d" is unreachable: the ant exhausts a-b-c and has no
        // edge to an unvisited vertex.
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");
        graph.add_vertex("d");
        graph.connect(a, b, 1.0);
        graph.connect(b, c, 1.0);
        graph.connect(a, c, 1.0);

        let mut ant = Ant::new(0, a);
        let mut rng = StdRng::seed_from_u64(2);

        let result = loop {
            match ant.walk(&mut graph, 10.0, &mut rng) {
                Ok(true) => panic!("ant cannot complete a tour of a disconnected graph"),
                Ok(false) => continue,
                Err(e) => break e,
            }
        };
        assert!(matches!(result, AcoError::Stranded { ant: 0, .. }));
    }

    #[test]
    fn test_pick_edge_prefers_strong_trails() {
        // One edge carries overwhelming pheromone; over many draws it must
        // be picked far more often than its two zero-trail rivals.
        let mut graph = Graph::new();
        let hub = graph.add_vertex("hub");
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");
        let strong = graph.connect(hub, a, 1.0);
        graph.connect(hub, b, 1.0);
        graph.connect(hub, c, 1.0);
        graph.edge_mut(strong).deposit(1000.0);

        let mut rng = StdRng::seed_from_u64(9);
        let candidates: Vec<EdgeId> = graph.vertex(hub).edges().to_vec();
        let picks = (0..500)
            .filter(|_| pick_edge(&graph, candidates.clone(), &mut rng) == strong)
            .count();
        assert!(picks > 300, "strong edge picked only {picks} of 500 times");
    }
}
