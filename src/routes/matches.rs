use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ComputeMatchRequest, ComputeMatchResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::{match_failure, store_failure, validation_failed, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/compute", web::post().to(compute_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return validation_failed(errors);
    }

    let user_id = &req.user_id;
    let limit = state.matching.effective_limit(req.limit);

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    let requester = match state.store.get_user(user_id).await {
        Ok(user) => user,
        Err(e) => return store_failure("Failed to fetch user profile", e),
    };

    let pool = match state.store.list_users().await {
        Ok(users) => users,
        Err(e) => return store_failure("Failed to load candidate pool", e),
    };

    let total_candidates = pool.iter().filter(|u| u.id != requester.id).count();
    tracing::debug!("Loaded {} candidates for {}", total_candidates, user_id);

    let matches = match state.matcher.rank_candidates(&requester, &pool, limit) {
        Ok(matches) => matches,
        Err(e) => return match_failure(e),
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        matches.len(),
        user_id,
        total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        total_candidates,
    })
}

/// Compute match endpoint
///
/// POST /api/v1/matches/compute
///
/// Responds with `{"match": null}` when the users share no skills.
async fn compute_match(
    state: web::Data<AppState>,
    req: web::Json<ComputeMatchRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let requester = match state.store.get_user(&req.user_id).await {
        Ok(user) => user,
        Err(e) => return store_failure("Failed to fetch user profile", e),
    };

    let candidate = match state.store.get_user(&req.candidate_id).await {
        Ok(user) => user,
        Err(e) => return store_failure("Failed to fetch candidate profile", e),
    };

    match state.matcher.compute_match(&requester, &candidate) {
        Ok(result) => HttpResponse::Ok().json(ComputeMatchResponse { result }),
        Err(e) => match_failure(e),
    }
}
