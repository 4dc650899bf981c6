//! # Engine Module
//!
//! The stateful logic core of the MC-NEST rollout search. It holds the search
//! configuration, the component seams (candidate generation, evaluation,
//! selection), and the phase-tracked working state the workflow drives.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search parameters, selection policy and
//!   initialization strategy enums, and the config builder
//! - **Candidate Generation** ([`generation`]) - The generator seam and the
//!   built-in linker-extension mutation rule
//! - **Evaluation** ([`evaluation`]) - The pluggable scoring seam and the
//!   built-in hydropathy evaluator
//! - **Selection** ([`selection`]) - Greedy and softmax importance-sampling
//!   policies over the candidate pool
//! - **State Tracking** ([`state`]) - The rollout phase machine, candidate pool,
//!   and monotonic best tracking
//! - **Progress Monitoring** ([`progress`]) - Progress reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod progress;
pub mod selection;
pub mod state;
