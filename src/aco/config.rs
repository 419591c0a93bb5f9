//! ACO configuration.

/// Configuration parameters for the ant colony simulation.
///
/// The completion threshold for a tour is always derived from the actual
/// graph's vertex count, so there is no city-count parameter here.
///
/// # Examples
///
/// ```
/// use formic::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_generations(200)
///     .with_ants(60)
///     .with_seed(42);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.ants, 60);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Numerator of the end-of-generation reinforcement: each completed
    /// tour receives `global_update / weight` of pheromone per edge, so
    /// shorter tours are reinforced more strongly.
    pub global_update: f64,

    /// Pheromone deposited on an edge each time an ant traverses it.
    pub local_update: f64,

    /// Pheromone evaporated from every edge in the graph once per
    /// sub-step.
    pub decay: f64,

    /// Number of generations to run.
    pub generations: usize,

    /// Number of ants per generation.
    pub ants: usize,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            global_update: 10_000.0,
            local_update: 10.0,
            decay: 5.0,
            generations: 100,
            ants: 40,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the global reinforcement numerator.
    pub fn with_global_update(mut self, amount: f64) -> Self {
        self.global_update = amount;
        self
    }

    /// Sets the per-traversal pheromone deposit.
    pub fn with_local_update(mut self, amount: f64) -> Self {
        self.local_update = amount;
        self
    }

    /// Sets the per-sub-step evaporation amount.
    pub fn with_decay(mut self, amount: f64) -> Self {
        self.decay = amount;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the colony size.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.global_update.is_finite() || self.global_update <= 0.0 {
            return Err(format!(
                "global_update must be positive and finite, got {}",
                self.global_update
            ));
        }
        if !self.local_update.is_finite() || self.local_update < 0.0 {
            return Err(format!(
                "local_update must be non-negative and finite, got {}",
                self.local_update
            ));
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(format!(
                "decay must be non-negative and finite, got {}",
                self.decay
            ));
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.ants == 0 {
            return Err("ants must be at least 1".into());
        }
        Ok(())
    }
}
