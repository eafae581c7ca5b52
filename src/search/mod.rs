//! Search space for the heuristic engine
//!
//! Contains:
//! - Candidate generation around existing stones

pub mod candidates;

pub use candidates::{candidates, Candidates, DEFAULT_RADIUS};
