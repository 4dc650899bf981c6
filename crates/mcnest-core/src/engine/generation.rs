use tracing::debug;

use super::config::InitializeStrategy;
use super::error::EngineError;
use crate::core::models::candidate::Candidate;
use crate::core::models::sequence;

/// Fixed placeholder returned by the dummy-answer strategy: the synthetic
/// SV40-NLS/spacer/glycine-linker peptide the original prototype shipped as
/// its default input.
pub const DUMMY_SEQUENCE: &str = "MARTKQTARKSTGGKAPRKQLASKAARKSAARAAAAGGGGGGG";

/// Produces modified-sequence proposals.
///
/// `context` is the seed sequence the search starts from. The first call of
/// a run passes `base = None` and applies the initialization strategy; every
/// later call perturbs the selected `base` candidate, advancing its
/// generation by one. Implementations must be pure computation.
pub trait CandidateGenerator {
    fn generate(
        &self,
        base: Option<&Candidate>,
        context: &str,
        strategy: InitializeStrategy,
    ) -> Result<Candidate, EngineError>;
}

/// Mutation rule that appends one flexible linker unit per rollout.
///
/// Extending the C-terminal linker is the alphabet-preserving analogue of
/// the prototype's suffix-append behavior. Inputs are checked against the
/// canonical residue alphabet; the unit itself is checked at construction.
#[derive(Debug, Clone)]
pub struct LinkerExtensionGenerator {
    unit: String,
}

impl LinkerExtensionGenerator {
    /// Standard flexible glycine-serine linker unit.
    pub const DEFAULT_UNIT: &'static str = "GGGGS";

    pub fn new(unit: impl Into<String>) -> Result<Self, EngineError> {
        let unit = unit.into();
        sequence::validate(&unit)?;
        if unit.is_empty() {
            return Err(EngineError::Initialization(
                "linker unit must not be empty".to_string(),
            ));
        }
        Ok(Self { unit })
    }
}

impl Default for LinkerExtensionGenerator {
    fn default() -> Self {
        Self {
            unit: Self::DEFAULT_UNIT.to_string(),
        }
    }
}

impl CandidateGenerator for LinkerExtensionGenerator {
    fn generate(
        &self,
        base: Option<&Candidate>,
        context: &str,
        strategy: InitializeStrategy,
    ) -> Result<Candidate, EngineError> {
        sequence::validate(context)?;
        match base {
            None => {
                let candidate = match strategy {
                    InitializeStrategy::ZeroShot => {
                        Candidate::new(format!("{}{}", context, self.unit), 1)
                    }
                    InitializeStrategy::DummyAnswer => Candidate::new(DUMMY_SEQUENCE, 1),
                };
                debug!(
                    strategy = ?strategy,
                    sequence = %candidate.sequence,
                    "Initialized first candidate."
                );
                Ok(candidate)
            }
            Some(base) => {
                sequence::validate(&base.sequence)?;
                Ok(base.offspring(format!("{}{}", base.sequence, self.unit)))
            }
        }
    }
}
