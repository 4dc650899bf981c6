use thiserror::Error;

use super::evaluation::EvaluationError;
use super::selection::SelectionError;
use crate::core::models::sequence::SequenceError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid sequence: {source}")]
    InvalidSequence {
        #[from]
        source: SequenceError,
    },

    #[error("Candidate evaluation failed: {source}")]
    Evaluation {
        #[from]
        source: EvaluationError,
    },

    #[error("Candidate selection failed: {source}")]
    Selection {
        #[from]
        source: SelectionError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
