use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TEMPERATURE: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Rule for choosing which candidate seeds the next rollout.
///
/// Future policies (e.g. UCB-style confidence bounds) are added as new
/// variants here, not as integer constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Deterministic: the highest-scoring candidate, earliest insertion wins ties.
    Greedy,
    /// Probabilistic: a softmax draw over candidate scores.
    ImportanceSampling,
}

/// Rule for producing the first candidate before any scoring history exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitializeStrategy {
    /// Derive the first candidate from the seed sequence alone.
    ZeroShot,
    /// Start from a fixed placeholder candidate.
    DummyAnswer,
}

/// Immutable parameters of one rollout search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub background_information: String,
    pub max_rollouts: usize,
    pub selection_policy: SelectionPolicy,
    pub initialize_strategy: InitializeStrategy,
    /// Softmax temperature for importance sampling. Ignored by the greedy policy.
    pub temperature: f64,
    /// RNG seed for reproducible importance-sampling runs.
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    background_information: Option<String>,
    max_rollouts: Option<usize>,
    selection_policy: Option<SelectionPolicy>,
    initialize_strategy: Option<InitializeStrategy>,
    temperature: Option<f64>,
    seed: Option<u64>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_information(mut self, text: impl Into<String>) -> Self {
        self.background_information = Some(text.into());
        self
    }
    pub fn max_rollouts(mut self, rollouts: usize) -> Self {
        self.max_rollouts = Some(rollouts);
        self
    }
    pub fn selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = Some(policy);
        self
    }
    pub fn initialize_strategy(mut self, strategy: InitializeStrategy) -> Self {
        self.initialize_strategy = Some(strategy);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let max_rollouts = self
            .max_rollouts
            .ok_or(ConfigError::MissingParameter("max_rollouts"))?;
        if max_rollouts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_rollouts",
                reason: "must be at least 1".to_string(),
            });
        }

        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(temperature > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "temperature",
                reason: format!("must be positive, got {}", temperature),
            });
        }

        Ok(SearchConfig {
            background_information: self.background_information.unwrap_or_default(),
            max_rollouts,
            selection_policy: self
                .selection_policy
                .ok_or(ConfigError::MissingParameter("selection_policy"))?,
            initialize_strategy: self
                .initialize_strategy
                .ok_or(ConfigError::MissingParameter("initialize_strategy"))?,
            temperature,
            seed: self.seed,
        })
    }
}
