//! # MC-NEST Core Library
//!
//! A rollout-based Monte Carlo search engine for protein sequence refinement,
//! replacing the MC-NEST prototype's stubbed search class with a real
//! generate → evaluate → select loop.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models: the amino-acid
//!   alphabet with validation, the hydropathy table, and the immutable [`core::models::candidate::Candidate`]
//!   record passed between components.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer holds the search
//!   configuration, the selection policies (greedy and softmax importance sampling),
//!   the generator and evaluator seams, and the phase-tracked search state.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the engine components together into the rollout search procedure and is
//!   the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
