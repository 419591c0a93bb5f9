//! Ant colony optimization for the traveling salesman problem.
//!
//! A population of simulated ants repeatedly builds tours over a weighted
//! city graph. Every traversal deposits pheromone on the edge it used,
//! every edge evaporates a little each sub-step, and completed tours are
//! reinforced in inverse proportion to their length, with the generation's
//! shortest tour reinforced twice. Trail strength accumulates
//! on short edges across generations and biases later ants toward them.
//!
//! # Architecture
//!
//! - [`graph`]: the shared tour graph; vertices, weighted
//!   pheromone-bearing edges in an arena, and completed
//!   [`Cycle`](graph::Cycle)s.
//! - [`aco`]: the simulation engine; per-ant tour construction and the
//!   generation loop with evaporation, global, and elitist reinforcement.
//! - [`matrix`]: distance-matrix parsing for building the graph from a
//!   comma-delimited city table.
//!
//! # Example
//!
//! ```
//! use formic::aco::{AcoConfig, AcoRunner};
//! use formic::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//! graph.connect(a, b, 1.0);
//! graph.connect(b, c, 2.0);
//! graph.connect(a, c, 2.5);
//!
//! let config = AcoConfig::default()
//!     .with_generations(20)
//!     .with_ants(10)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run_with_observer(&mut graph, a, &config, |report| {
//!     println!(
//!         "step {} / {}: shortest cycle {}, pheromone sum {}",
//!         report.generation,
//!         report.total_generations,
//!         report.best_weight,
//!         report.best_pheromone,
//!     );
//! })
//! .expect("complete graph");
//!
//! assert_eq!(result.best_cycle.len(), 2);
//! ```

pub mod aco;
pub mod graph;
pub mod matrix;
