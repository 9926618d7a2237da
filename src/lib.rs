//! Kampus Match - compatibility scoring for the KampusConfess matchmaker
//!
//! This library implements the matchmaker's compatibility engine: a pure,
//! deterministic function scoring two dating profiles into a 0-100 score,
//! a summary tier and a list of reason tags, plus a thin ranking
//! orchestrator and the HTTP surface exposing both.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, RankResult, Ranker};
pub use crate::models::{
    CompatibilityResult, Profile, RankCandidatesRequest, RankResponse, ScoredCandidate,
};
