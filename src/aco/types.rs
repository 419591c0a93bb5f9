//! Progress reports and fatal errors for the ACO engine.

use thiserror::Error;

use crate::graph::Cycle;

/// Snapshot of a finished generation, handed to progress observers.
///
/// All figures describe the generation's shortest tour after its elitist
/// reinforcement has been applied.
#[derive(Debug, Clone)]
pub struct GenerationReport<'a> {
    /// 1-based index of the generation that just finished.
    pub generation: usize,

    /// Total number of generations the run will execute.
    pub total_generations: usize,

    /// The shortest tour found in this generation.
    pub best_cycle: &'a Cycle,

    /// Weight of that tour.
    pub best_weight: f64,

    /// Sum of the pheromone currently on that tour's edges.
    pub best_pheromone: f64,

    /// Edge-count-and-weight summary of that tour.
    pub summary: String,
}

/// Fatal errors raised by the ant colony simulation.
///
/// Every variant aborts the run; nothing is retried and no partial result
/// is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The graph is too small to contain a tour.
    #[error("graph has {vertices} vertices; a tour needs at least 2")]
    GraphTooSmall {
        /// Number of vertices in the graph.
        vertices: usize,
    },

    /// The start vertex id does not belong to the graph.
    #[error("start vertex {start} is out of range for a graph with {vertices} vertices")]
    InvalidStart {
        /// The offending vertex index.
        start: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },

    /// An ant reached a vertex with no edge to any unvisited vertex.
    ///
    /// The graph must be complete over all participating vertices for
    /// every ant to finish its tour.
    #[error(
        "ant {ant} is stranded at vertex '{vertex}' after visiting {visited} of {total} cities"
    )]
    Stranded {
        /// Id of the stranded ant.
        ant: usize,
        /// Name of the vertex the ant is stuck on.
        vertex: String,
        /// How many vertices the ant had visited.
        visited: usize,
        /// Total vertices in the graph.
        total: usize,
    },

    /// A completed tour had zero total weight, so the reinforcement
    /// amount `global_update / weight` is undefined.
    #[error("ant {ant} produced a zero-weight cycle; reinforcement is undefined")]
    ZeroWeightCycle {
        /// Id of the offending ant.
        ant: usize,
    },
}
