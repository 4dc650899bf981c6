use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::models::candidate::Candidate;
use crate::core::models::sequence;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluation::Evaluator;
use crate::engine::generation::CandidateGenerator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection;
use crate::engine::state::SearchState;

/// Outcome of one rollout search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_hypothesis: String,
    pub best_candidate: Candidate,
}

/// Runs the rollout search: exactly `config.max_rollouts` generate → evaluate
/// → select cycles over `seed_sequence`, returning the best candidate seen.
///
/// Budget exhaustion is the only termination condition; there is no early
/// stopping or convergence check. Any component failure aborts the run and
/// discards partial results.
#[instrument(skip_all, name = "search_workflow", fields(max_rollouts = config.max_rollouts))]
pub fn run(
    seed_sequence: &str,
    config: &SearchConfig,
    generator: &dyn CandidateGenerator,
    evaluator: &dyn Evaluator,
    reporter: &ProgressReporter,
) -> Result<SearchResult, EngineError> {
    // === Phase 0: Validation and setup ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    info!("Validating seed sequence and seeding the random source.");
    sequence::validate(seed_sequence)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = SearchState::new(config.max_rollouts);
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Rollouts ===
    reporter.report(Progress::PhaseStart { name: "Rollouts" });
    reporter.report(Progress::SearchStart {
        total_rollouts: config.max_rollouts as u64,
    });
    state.begin_rolling()?;

    let mut parent: Option<Candidate> = None;
    for generation in 1..=config.max_rollouts {
        let candidate = generator.generate(
            parent.as_ref(),
            seed_sequence,
            config.initialize_strategy,
        )?;
        let score = evaluator.score(&candidate)?;
        let scored = candidate.with_score(score);
        let candidate_generation = scored.generation as u64;

        let best_before = state.best().and_then(|b| b.score);
        state.record(scored)?;
        if state.best().and_then(|b| b.score) != best_before {
            reporter.report(Progress::BestImproved {
                generation: candidate_generation,
                score,
            });
        }
        reporter.report(Progress::RolloutComplete {
            generation: generation as u64,
            score,
        });

        let idx = selection::select(
            state.pool(),
            config.selection_policy,
            config.temperature,
            &mut rng,
        )?;
        parent = Some(state.pool()[idx].clone());
    }
    reporter.report(Progress::SearchFinish);
    reporter.report(Progress::Message(format!(
        "Completed {} rollout(s), pool size {}.",
        config.max_rollouts,
        state.pool().len()
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Finalization ===
    let rollouts = config.max_rollouts;
    let best_candidate = state.finish()?;
    let result = finalize_result(best_candidate, rollouts);

    info!(
        best_score = result.best_candidate.score,
        best_generation = result.best_candidate.generation,
        "Search complete."
    );
    Ok(result)
}

fn finalize_result(best_candidate: Candidate, rollouts: usize) -> SearchResult {
    let best_hypothesis = format!(
        "Best candidate found at generation {} of {} rollout(s): {} residues, score {:.4}.",
        best_candidate.generation,
        rollouts,
        best_candidate.sequence.chars().count(),
        best_candidate.score.unwrap_or(f64::NEG_INFINITY),
    );
    SearchResult {
        best_hypothesis,
        best_candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{InitializeStrategy, SearchConfigBuilder, SelectionPolicy};
    use crate::engine::evaluation::EvaluationError;
    use std::cell::Cell;

    /// Appends "_modified" on the first call and "_modified{n}" afterwards,
    /// mirroring the behavior of the prototype this engine replaces.
    struct SuffixProbeGenerator;

    impl CandidateGenerator for SuffixProbeGenerator {
        fn generate(
            &self,
            base: Option<&Candidate>,
            context: &str,
            _strategy: InitializeStrategy,
        ) -> Result<Candidate, EngineError> {
            Ok(match base {
                None => Candidate::new(format!("{}_modified", context), 1),
                Some(base) => base.offspring(format!(
                    "{}_modified{}",
                    base.sequence,
                    base.generation + 1
                )),
            })
        }
    }

    /// Scores strictly increase with generation; counts evaluations.
    struct GenerationEvaluator {
        calls: Cell<usize>,
    }

    impl GenerationEvaluator {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Evaluator for GenerationEvaluator {
        fn score(&self, candidate: &Candidate) -> Result<f64, EvaluationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(candidate.generation as f64)
        }
    }

    fn greedy_config(max_rollouts: usize) -> SearchConfig {
        SearchConfigBuilder::new()
            .background_information("synthetic test peptide")
            .max_rollouts(max_rollouts)
            .selection_policy(SelectionPolicy::Greedy)
            .initialize_strategy(InitializeStrategy::ZeroShot)
            .build()
            .unwrap()
    }

    #[test]
    fn end_to_end_two_rollouts_yield_doubly_modified_sequence() {
        let config = greedy_config(2);
        let evaluator = GenerationEvaluator::new();
        let result = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &evaluator,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(result.best_candidate.sequence, "MART_modified_modified2");
        assert_eq!(result.best_candidate.generation, 2);
        assert_eq!(result.best_candidate.score, Some(2.0));
    }

    #[test]
    fn engine_performs_exactly_max_rollouts_generations() {
        for budget in [1, 3, 7] {
            let config = greedy_config(budget);
            let evaluator = GenerationEvaluator::new();
            let result = run(
                "MART",
                &config,
                &SuffixProbeGenerator,
                &evaluator,
                &ProgressReporter::new(),
            )
            .unwrap();
            assert_eq!(evaluator.calls.get(), budget);
            assert!(result.best_candidate.generation <= budget);
        }
    }

    #[test]
    fn best_score_never_regresses() {
        // Only the first candidate scores well; every later one scores worse.
        // The reported best must remain that early maximum.
        struct DecayingEvaluator;
        impl Evaluator for DecayingEvaluator {
            fn score(&self, candidate: &Candidate) -> Result<f64, EvaluationError> {
                Ok(10.0 - candidate.generation as f64 * 2.0)
            }
        }

        let config = greedy_config(5);
        let result = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &DecayingEvaluator,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(result.best_candidate.score, Some(8.0));
        assert_eq!(result.best_candidate.generation, 1);
        assert_eq!(result.best_candidate.sequence, "MART_modified");
    }

    #[test]
    fn greedy_runs_are_reproducible() {
        let config = greedy_config(4);
        let first = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &ProgressReporter::new(),
        )
        .unwrap();
        let second = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn importance_sampling_with_fixed_seed_is_reproducible() {
        let config = SearchConfigBuilder::new()
            .max_rollouts(6)
            .selection_policy(SelectionPolicy::ImportanceSampling)
            .initialize_strategy(InitializeStrategy::ZeroShot)
            .seed(1234)
            .build()
            .unwrap();

        let first = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &ProgressReporter::new(),
        )
        .unwrap();
        let second = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_seed_sequence_aborts_the_run() {
        let config = greedy_config(2);
        let err = run(
            "MART7",
            &config,
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSequence { .. }));
    }

    #[test]
    fn evaluation_failure_aborts_the_run() {
        struct FailingEvaluator;
        impl Evaluator for FailingEvaluator {
            fn score(&self, _candidate: &Candidate) -> Result<f64, EvaluationError> {
                Err(EvaluationError::EmptySequence)
            }
        }

        let config = greedy_config(3);
        let err = run(
            "MART",
            &config,
            &SuffixProbeGenerator,
            &FailingEvaluator,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Evaluation { .. }));
    }

    #[test]
    fn progress_reports_one_rollout_completion_per_generation() {
        use std::sync::{Arc, Mutex};

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter =
            ProgressReporter::with_callback(Box::new(move |p| sink.lock().unwrap().push(p)));

        run(
            "MART",
            &greedy_config(3),
            &SuffixProbeGenerator,
            &GenerationEvaluator::new(),
            &reporter,
        )
        .unwrap();

        let events = events.lock().unwrap();
        let completions = events
            .iter()
            .filter(|e| matches!(e, Progress::RolloutComplete { .. }))
            .count();
        assert_eq!(completions, 3);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Progress::SearchStart { total_rollouts: 3 }))
        );
        // Generation-proportional scores: every rollout improves the best.
        let improvements: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                Progress::BestImproved { generation, .. } => Some(*generation),
                _ => None,
            })
            .collect();
        assert_eq!(improvements, vec![1, 2, 3]);
        assert!(events.iter().any(|e| matches!(e, Progress::SearchFinish)));
    }

    #[test]
    fn built_in_components_run_end_to_end() {
        use crate::engine::evaluation::GravyEvaluator;
        use crate::engine::generation::LinkerExtensionGenerator;

        let config = greedy_config(3);
        let result = run(
            "MARTKQTARK",
            &config,
            &LinkerExtensionGenerator::default(),
            &GravyEvaluator,
            &ProgressReporter::new(),
        )
        .unwrap();

        // Three rollouts of greedy linker extension on a hydrophilic seed:
        // each added GGGGS unit raises the GRAVY toward the unit's own mean,
        // so the best candidate is the longest one.
        assert_eq!(result.best_candidate.generation, 3);
        assert_eq!(
            result.best_candidate.sequence,
            "MARTKQTARKGGGGSGGGGSGGGGS"
        );
        assert!(result.best_hypothesis.contains("generation 3"));
    }
}
