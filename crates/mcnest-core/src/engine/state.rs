use super::error::EngineError;
use crate::core::models::candidate::Candidate;

/// Lifecycle of one rollout search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Initialized,
    Rolling,
    Done,
}

/// Working set of a rollout search: the candidate pool, the monotonic best,
/// and the phase machine guarding transitions.
#[derive(Debug)]
pub struct SearchState {
    phase: SearchPhase,
    max_rollouts: usize,
    pool: Vec<Candidate>,
    best: Option<Candidate>,
}

impl SearchState {
    pub fn new(max_rollouts: usize) -> Self {
        Self {
            phase: SearchPhase::Initialized,
            max_rollouts,
            pool: Vec::with_capacity(max_rollouts),
            best: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn begin_rolling(&mut self) -> Result<(), EngineError> {
        if self.phase != SearchPhase::Initialized {
            return Err(EngineError::Internal(format!(
                "cannot start rolling from phase {:?}",
                self.phase
            )));
        }
        self.phase = SearchPhase::Rolling;
        Ok(())
    }

    /// Adds a scored candidate to the pool and updates the best-so-far.
    ///
    /// The best candidate never regresses: it is replaced only by a strictly
    /// higher score, so a tie keeps the earlier discovery.
    pub fn record(&mut self, candidate: Candidate) -> Result<(), EngineError> {
        if self.phase != SearchPhase::Rolling {
            return Err(EngineError::Internal(format!(
                "cannot record a candidate in phase {:?}",
                self.phase
            )));
        }
        let score = candidate.score.ok_or_else(|| {
            EngineError::Internal("unscored candidate submitted to the pool".to_string())
        })?;
        if candidate.generation > self.max_rollouts {
            return Err(EngineError::Internal(format!(
                "candidate generation {} exceeds the rollout budget {}",
                candidate.generation, self.max_rollouts
            )));
        }

        let is_new_best = match &self.best {
            None => true,
            Some(best) => score > best.score.unwrap_or(f64::NEG_INFINITY),
        };
        if is_new_best {
            self.best = Some(candidate.clone());
        }
        self.pool.push(candidate);
        Ok(())
    }

    /// Terminal transition; yields the best candidate seen.
    pub fn finish(mut self) -> Result<Candidate, EngineError> {
        if self.phase != SearchPhase::Rolling {
            return Err(EngineError::Internal(format!(
                "cannot finish a search in phase {:?}",
                self.phase
            )));
        }
        self.phase = SearchPhase::Done;
        self.best
            .take()
            .ok_or_else(|| EngineError::Internal("search finished with an empty pool".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(sequence: &str, generation: usize, score: f64) -> Candidate {
        Candidate::new(sequence, generation).with_score(score)
    }

    #[test]
    fn new_state_starts_initialized_and_empty() {
        let state = SearchState::new(3);
        assert_eq!(state.phase(), SearchPhase::Initialized);
        assert!(state.pool().is_empty());
        assert!(state.best().is_none());
    }

    #[test]
    fn record_requires_rolling_phase() {
        let mut state = SearchState::new(3);
        let err = state.record(scored("MART", 1, 0.5)).unwrap_err();
        assert!(matches!(err, EngineError::Internal(_)));
    }

    #[test]
    fn best_tracking_is_monotonic() {
        let mut state = SearchState::new(4);
        state.begin_rolling().unwrap();

        state.record(scored("A", 1, 0.5)).unwrap();
        assert_eq!(state.best().unwrap().score, Some(0.5));

        state.record(scored("B", 2, 2.0)).unwrap();
        assert_eq!(state.best().unwrap().score, Some(2.0));

        // Lower score must not displace the best.
        state.record(scored("C", 3, 1.0)).unwrap();
        assert_eq!(state.best().unwrap().sequence, "B");

        // Ties keep the earlier discovery.
        state.record(scored("D", 4, 2.0)).unwrap();
        assert_eq!(state.best().unwrap().sequence, "B");
    }

    #[test]
    fn unscored_candidates_are_rejected() {
        let mut state = SearchState::new(2);
        state.begin_rolling().unwrap();
        let err = state.record(Candidate::new("MART", 1)).unwrap_err();
        assert!(matches!(err, EngineError::Internal(_)));
    }

    #[test]
    fn generation_beyond_budget_is_an_invariant_violation() {
        let mut state = SearchState::new(2);
        state.begin_rolling().unwrap();
        let err = state.record(scored("MART", 3, 0.1)).unwrap_err();
        assert!(matches!(err, EngineError::Internal(_)));
    }

    #[test]
    fn finish_yields_best_candidate() {
        let mut state = SearchState::new(2);
        state.begin_rolling().unwrap();
        state.record(scored("A", 1, 0.1)).unwrap();
        state.record(scored("B", 2, 0.9)).unwrap();
        let best = state.finish().unwrap();
        assert_eq!(best.sequence, "B");
    }

    #[test]
    fn finish_without_candidates_is_an_error() {
        let mut state = SearchState::new(2);
        state.begin_rolling().unwrap();
        assert!(matches!(state.finish(), Err(EngineError::Internal(_))));
    }

    #[test]
    fn double_begin_rolling_is_rejected() {
        let mut state = SearchState::new(2);
        state.begin_rolling().unwrap();
        assert!(matches!(
            state.begin_rolling(),
            Err(EngineError::Internal(_))
        ));
    }
}
