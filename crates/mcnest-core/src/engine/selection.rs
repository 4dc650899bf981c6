use rand::{distributions::WeightedIndex, prelude::*};
use thiserror::Error;
use tracing::instrument;

use super::config::SelectionPolicy;
use crate::core::models::candidate::Candidate;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Candidate pool is empty, cannot select")]
    EmptyPool,
    #[error("All softmax weights vanished, resulting in zero total weight for sampling")]
    ZeroTotalWeight,
    #[error("Invalid temperature value: {0}. Temperature must be positive for softmax sampling")]
    InvalidTemperature(f64),
    #[error("Candidate at pool index {0} has no score")]
    UnscoredCandidate(usize),
    #[error("Failed to create weighted distribution: {source}")]
    DistributionError {
        #[from]
        source: rand::distributions::WeightedError,
    },
}

/// Picks the index of the candidate that seeds the next rollout.
pub fn select(
    pool: &[Candidate],
    policy: SelectionPolicy,
    temperature: f64,
    rng: &mut impl Rng,
) -> Result<usize, SelectionError> {
    let scores = collect_scores(pool)?;
    match policy {
        SelectionPolicy::Greedy => select_greedy(&scores),
        SelectionPolicy::ImportanceSampling => softmax_sample(&scores, temperature, rng),
    }
}

fn collect_scores(pool: &[Candidate]) -> Result<Vec<f64>, SelectionError> {
    if pool.is_empty() {
        return Err(SelectionError::EmptyPool);
    }
    pool.iter()
        .enumerate()
        .map(|(i, c)| c.score.ok_or(SelectionError::UnscoredCandidate(i)))
        .collect()
}

/// Deterministic maximum-score selection. Ties break toward the earliest
/// insertion, so repeated runs are stable.
fn select_greedy(scores: &[f64]) -> Result<usize, SelectionError> {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    Ok(best)
}

/// Draws an index with probability proportional to `exp(score / temperature)`,
/// normalized against the pool maximum for numerical stability.
#[instrument(level = "trace", skip_all, fields(temperature))]
pub fn softmax_sample(
    scores: &[f64],
    temperature: f64,
    rng: &mut impl Rng,
) -> Result<usize, SelectionError> {
    if scores.is_empty() {
        return Err(SelectionError::EmptyPool);
    }
    if temperature <= 0.0 {
        return Err(SelectionError::InvalidTemperature(temperature));
    }

    let max_score = *scores
        .iter()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap();

    let weights: Vec<f64> = scores
        .iter()
        .map(|&s| ((s - max_score) / temperature).exp())
        .collect();

    let total_weight: f64 = weights.iter().sum();
    if total_weight <= f64::EPSILON {
        tracing::warn!(
            "Total softmax weight is near zero ({}). This might indicate a very low temperature or large score differences, leading to numerical underflow. Returning the top-scoring index as fallback.",
            total_weight
        );
        if let Some(idx) = scores
            .iter()
            .position(|&s| (s - max_score).abs() < f64::EPSILON)
        {
            return Ok(idx);
        } else {
            return Err(SelectionError::ZeroTotalWeight);
        }
    }

    let dist = WeightedIndex::new(&weights)?;
    Ok(dist.sample(rng))
}
