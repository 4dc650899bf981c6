use thiserror::Error;

use crate::core::models::candidate::Candidate;
use crate::core::models::sequence;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Candidate sequence is empty, nothing to score")]
    EmptySequence,
}

/// Scores a candidate's fitness. Higher is better.
///
/// Implementations must be deterministic for a given candidate (no hidden
/// state), so a run can be reproduced and a test can substitute a stub.
pub trait Evaluator {
    fn score(&self, candidate: &Candidate) -> Result<f64, EvaluationError>;
}

/// Grand average of hydropathy (GRAVY) over the candidate sequence.
///
/// Kyte-Doolittle per-residue values summed and divided by sequence length;
/// residues outside the canonical alphabet contribute zero but still count
/// toward the length. This is a deterministic stand-in fitness measure, not
/// a claim about the biological property a caller may want to optimize.
#[derive(Debug, Default, Clone, Copy)]
pub struct GravyEvaluator;

impl Evaluator for GravyEvaluator {
    fn score(&self, candidate: &Candidate) -> Result<f64, EvaluationError> {
        if candidate.sequence.is_empty() {
            return Err(EvaluationError::EmptySequence);
        }

        let total: f64 = candidate
            .sequence
            .chars()
            .map(|code| sequence::hydropathy(code).unwrap_or(0.0))
            .sum();
        Ok(total / candidate.sequence.chars().count() as f64)
    }
}
