//! # Workflows Module
//!
//! The public, user-facing layer of the library. A workflow wires the engine
//! components together into a complete procedure; [`search::run`] is the
//! rollout search entry point.

pub mod search;
