//! Vertices, edges, and the graph arena.

/// Index of a vertex in its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of an edge in its [`Graph`]'s edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// A city in the tour graph.
///
/// Carries a display name and the ids of all incident edges, in the order
/// they were connected.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    edges: Vec<EdgeId>,
}

impl Vertex {
    /// The vertex's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of all edges incident to this vertex.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// An undirected weighted edge carrying a pheromone trail.
///
/// The weight is fixed at construction; only the pheromone level changes
/// during a simulation, and it never drops below zero.
#[derive(Debug, Clone)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    weight: f64,
    pheromone: f64,
}

impl Edge {
    /// The two endpoints, in connection order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// The endpoint that is not `v`.
    pub fn other_endpoint(&self, v: VertexId) -> VertexId {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }

    /// The fixed distance of this edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The current pheromone level.
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    /// Deposits `amount` of pheromone on this edge.
    pub fn deposit(&mut self, amount: f64) {
        self.pheromone += amount;
    }

    /// Evaporates `amount` of pheromone, clamped at zero.
    pub fn decay(&mut self, amount: f64) {
        self.pheromone = (self.pheromone - amount).max(0.0);
    }
}

/// The tour graph: arenas of vertices and edges.
///
/// Vertices and edges are created while the graph is built and never
/// removed. All mutable pheromone state lives here; within a generation
/// every ant mutates the same graph through [`Graph::edge_mut`].
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_auto_name: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_auto_name: 1,
        }
    }

    /// Adds a vertex with an explicit name.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            name: name.into(),
            edges: Vec::new(),
        });
        id
    }

    /// Adds a vertex named with the next unused sequential integer.
    ///
    /// The counter is owned by the graph and starts at 1.
    pub fn add_anonymous_vertex(&mut self) -> VertexId {
        let name = self.next_auto_name.to_string();
        self.next_auto_name += 1;
        self.add_vertex(name)
    }

    /// Connects two vertices with an undirected edge of the given weight.
    ///
    /// The edge starts with zero pheromone and is registered in both
    /// endpoints' incident lists. Call at most once per unordered pair;
    /// a second call creates a parallel edge.
    pub fn connect(&mut self, a: VertexId, b: VertexId, weight: f64) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            a,
            b,
            weight,
            pheromone: 0.0,
        });
        self.vertices[a.0].edges.push(id);
        self.vertices[b.0].edges.push(id);
        id
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertex with the given id.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    /// The edge with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Mutable access to the edge with the given id.
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of all vertices, in creation order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Evaporates `amount` of pheromone from every edge in the graph.
    pub fn decay_all(&mut self, amount: f64) {
        for edge in &mut self.edges {
            edge.decay(amount);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
