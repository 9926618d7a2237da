// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CompatibilityResult, Profile, ScoredCandidate};
pub use requests::{RankCandidatesRequest, ScorePairRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
