use serde::{Deserialize, Serialize};

/// A proposed sequence variant together with its fitness score.
///
/// Candidates are value types: once scored they are never mutated, only
/// replaced. The rollout engine owns the working set exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub sequence: String,
    pub score: Option<f64>,
    pub generation: usize,
}

impl Candidate {
    /// Creates an unscored candidate for the given rollout generation.
    pub fn new(sequence: impl Into<String>, generation: usize) -> Self {
        Self {
            sequence: sequence.into(),
            score: None,
            generation,
        }
    }

    /// Creates an unscored candidate one generation past `self`.
    pub fn offspring(&self, sequence: impl Into<String>) -> Self {
        Self::new(sequence, self.generation + 1)
    }

    /// Returns a scored copy of this candidate, leaving `self` untouched.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            sequence: self.sequence.clone(),
            score: Some(score),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_candidate_starts_unscored() {
        let candidate = Candidate::new("MART", 1);
        assert_eq!(candidate.sequence, "MART");
        assert_eq!(candidate.generation, 1);
        assert!(candidate.score.is_none());
    }

    #[test]
    fn offspring_advances_generation() {
        let base = Candidate::new("MART", 3);
        let child = base.offspring("MARTG");
        assert_eq!(child.generation, 4);
        assert_eq!(child.sequence, "MARTG");
        assert!(child.score.is_none());
    }

    #[test]
    fn with_score_does_not_mutate_original() {
        let candidate = Candidate::new("MART", 1);
        let scored = candidate.with_score(2.5);
        assert_eq!(scored.score, Some(2.5));
        assert!(candidate.score.is_none());
        assert_eq!(scored.sequence, candidate.sequence);
        assert_eq!(scored.generation, candidate.generation);
    }
}
