//! The shared tour graph.
//!
//! Vertices and weighted, pheromone-bearing edges over which ants build
//! tours. Edges live in a single arena owned by [`Graph`] and are addressed
//! by [`EdgeId`]; each vertex holds the ids of its incident edges, so an
//! undirected edge is one shared object no matter which endpoint reaches
//! it, and a pheromone deposit made while traversing it in one direction
//! is visible from the other.
//!
//! [`Cycle`] is an ordered list of edge ids recording one ant's completed
//! tour.

mod cycle;
mod model;

pub use cycle::Cycle;
pub use model::{Edge, EdgeId, Graph, Vertex, VertexId};
