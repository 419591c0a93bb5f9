//! Generation loop execution.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ant::Ant;
use super::config::AcoConfig;
use super::types::{AcoError, GenerationReport};
use crate::graph::{Cycle, Graph, VertexId};

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The shortest tour found across all generations (first on ties).
    pub best_cycle: Cycle,

    /// Weight of the best tour.
    pub best_weight: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Shortest tour weight of each generation, in order.
    pub weight_history: Vec<f64>,
}

/// Executes the ant colony simulation.
///
/// # Usage
///
/// ```
/// use formic::aco::{AcoConfig, AcoRunner};
/// use formic::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.connect(a, b, 1.0);
/// graph.connect(b, c, 2.0);
/// graph.connect(a, c, 2.5);
///
/// let config = AcoConfig::default()
///     .with_generations(10)
///     .with_ants(5)
///     .with_seed(42);
/// let result = AcoRunner::run(&mut graph, a, &config).expect("valid run");
/// assert_eq!(result.weight_history.len(), 10);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the simulation without progress reporting.
    pub fn run(
        graph: &mut Graph,
        start: VertexId,
        config: &AcoConfig,
    ) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(graph, start, config, |_| {})
    }

    /// Runs the simulation, invoking `observer` after every generation
    /// with that generation's shortest tour.
    ///
    /// Pheromone persists on the graph across generations; only the ants
    /// are discarded. The loop always executes exactly
    /// `config.generations` generations.
    pub fn run_with_observer<F>(
        graph: &mut Graph,
        start: VertexId,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&GenerationReport<'_>),
    {
        config.validate().map_err(AcoError::InvalidConfig)?;
        if graph.vertex_count() < 2 {
            return Err(AcoError::GraphTooSmall {
                vertices: graph.vertex_count(),
            });
        }
        if start.0 >= graph.vertex_count() {
            return Err(AcoError::InvalidStart {
                start: start.0,
                vertices: graph.vertex_count(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best: Option<(Cycle, f64)> = None;
        let mut weight_history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let (gen_best, gen_best_weight) =
                run_generation(graph, start, config, &mut rng)?;

            weight_history.push(gen_best_weight);

            let report = GenerationReport {
                generation: generation + 1,
                total_generations: config.generations,
                best_cycle: &gen_best,
                best_weight: gen_best_weight,
                best_pheromone: gen_best.pheromone(graph),
                summary: gen_best.summary(graph),
            };
            observer(&report);

            if best.as_ref().is_none_or(|(_, w)| gen_best_weight < *w) {
                best = Some((gen_best, gen_best_weight));
            }
        }

        let (best_cycle, best_weight) = best.expect("at least one generation runs");
        Ok(AcoResult {
            best_cycle,
            best_weight,
            generations: config.generations,
            weight_history,
        })
    }
}

/// Runs one generation: tour construction with per-sub-step evaporation,
/// then global and elitist reinforcement. Returns the generation's
/// shortest tour and its weight.
fn run_generation<R: rand::Rng>(
    graph: &mut Graph,
    start: VertexId,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<(Cycle, f64), AcoError> {
    let mut ants: Vec<Ant> = (0..config.ants).map(|i| Ant::new(i, start)).collect();

    // Sub-step loop: every unfinished ant advances by one edge, then the
    // whole graph evaporates exactly once.
    while ants.iter().any(|a| !a.is_done()) {
        for ant in &mut ants {
            ant.walk(graph, config.local_update, rng)?;
        }
        graph.decay_all(config.decay);
    }

    // Global update: every tour is reinforced in inverse proportion to
    // its weight.
    for ant in &ants {
        let weight = ant.cycle().weight(graph);
        if weight <= 0.0 {
            return Err(AcoError::ZeroWeightCycle { ant: ant.id() });
        }
        ant.cycle().reinforce(graph, config.global_update / weight);
    }

    // Shortest tour, first one on ties.
    let mut best_idx = 0;
    let mut best_weight = ants[0].cycle().weight(graph);
    for (i, ant) in ants.iter().enumerate().skip(1) {
        let weight = ant.cycle().weight(graph);
        if weight < best_weight {
            best_idx = i;
            best_weight = weight;
        }
    }

    // Elitist update: the shortest tour is reinforced a second time with
    // the same formula.
    let best = ants.swap_remove(best_idx).into_cycle();
    best.reinforce(graph, config.global_update / best_weight);

    Ok((best, best_weight))
}
