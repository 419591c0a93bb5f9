//! A completed ant tour.

use super::model::{EdgeId, Graph};

/// An ordered list of edges traversed by one ant.
///
/// Only edge ids are stored; weight and pheromone totals are computed
/// against the owning graph on demand. A finished tour holds
/// `vertex_count - 1` edges: the path visits every vertex once and no
/// closing return-to-start edge is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cycle {
    edges: Vec<EdgeId>,
}

impl Cycle {
    /// Creates an empty cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge to the tour.
    pub fn push(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// The edges of the tour, in traversal order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges in the tour.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tour has no edges yet.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total weight: the sum of the constituent edge weights.
    pub fn weight(&self, graph: &Graph) -> f64 {
        self.edges.iter().map(|&e| graph.edge(e).weight()).sum()
    }

    /// Sum of the pheromone currently on the tour's edges.
    pub fn pheromone(&self, graph: &Graph) -> f64 {
        self.edges.iter().map(|&e| graph.edge(e).pheromone()).sum()
    }

    /// Deposits `amount` of pheromone on every edge of the tour.
    pub fn reinforce(&self, graph: &mut Graph, amount: f64) {
        for &e in &self.edges {
            graph.edge_mut(e).deposit(amount);
        }
    }

    /// One-line summary (edge count + weight) for progress reporting.
    pub fn summary(&self, graph: &Graph) -> String {
        format!(
            "cycle with {} edges and weight {}",
            self.len(),
            self.weight(graph)
        )
    }
}
