//! Ant Colony Optimization (ACO).
//!
//! A population-based metaheuristic for the traveling salesman problem.
//! Each generation, a colony of ants builds tours over the shared graph;
//! every traversal deposits a small amount of pheromone, every edge in the
//! graph evaporates once per sub-step, completed tours are reinforced in
//! inverse proportion to their length, and the generation's shortest tour
//! is reinforced a second time. Accumulated trail strength biases later
//! ants toward short tours.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"

mod ant;
mod config;
mod runner;
mod types;

pub use ant::Ant;
pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
pub use types::{AcoError, GenerationReport};
