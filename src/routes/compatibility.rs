use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{calculate_compatibility, Ranker};
use crate::models::{
    CompatibilityResult, ErrorResponse, HealthResponse, RankCandidatesRequest, RankResponse,
    ScorePairRequest,
};
use crate::services::{CacheKey, ScoreCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ScoreCache>,
    pub ranker: Ranker,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.cache.stats();
    tracing::debug!("Health check, {} cached scores", stats.entry_count);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one profile pair
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "id": "...", "interests": ["..."], ... },
///   "profileB": { ... }
/// }
/// ```
///
/// Either profile may be null; the response is then the "Calculating..."
/// sentinel with score 0. Results are memoized on the id pair in request
/// order when both profiles carry an id; the two orderings of a pair are
/// separate entries because duplicate interests can score differently per
/// direction.
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let req = req.into_inner();

    // Memoization only applies to identified profile pairs
    let cache_key = match (&req.profile_a, &req.profile_b) {
        (Some(a), Some(b)) => match (a.id.as_deref(), b.id.as_deref()) {
            (Some(id_a), Some(id_b)) => Some(CacheKey::pair(id_a, id_b)),
            _ => None,
        },
        _ => None,
    };

    if let Some(key) = &cache_key {
        if let Ok(cached) = state.cache.get::<CompatibilityResult>(key).await {
            tracing::debug!("Returning cached score for {}", key);
            return HttpResponse::Ok().json(cached);
        }
    }

    let result = calculate_compatibility(req.profile_a.as_ref(), req.profile_b.as_ref());

    if let Some(key) = &cache_key {
        if let Err(e) = state.cache.set(key, &result).await {
            tracing::warn!("Failed to cache score for {}: {}", key, e);
        }
    }

    tracing::info!(
        "Scored pair: score={}, reasons={}",
        result.score,
        result.reasons.len()
    );

    HttpResponse::Ok().json(result)
}

/// Rank a candidate list against a subject profile
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { ... },
///   "candidates": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;

    tracing::info!(
        "Ranking {} candidates, limit {}",
        req.candidates.len(),
        limit
    );

    let result = state.ranker.rank(&req.profile, req.candidates, limit);

    tracing::debug!(
        "Returning {} of {} candidates",
        result.candidates.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RankResponse {
        candidates: result.candidates,
        total_candidates: result.total_candidates,
    })
}
