use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::models::{PresenceRequest, SearchUsersQuery, SearchUsersResponse, UpsertUserRequest, UserRecord};
use crate::services::StoreError;
use crate::routes::{error_response, match_failure, store_failure, validation_failed, AppState};

/// Configure user directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users/search", web::get().to(search_users))
        .route("/users/{id}", web::put().to(upsert_user))
        .route("/users/{id}/presence", web::post().to(update_presence));
}

/// Search users endpoint
///
/// GET /api/v1/users/search?userId={userId}&q={query}
///
/// A blank `q` lists every other user.
async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<SearchUsersQuery>,
) -> HttpResponse {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let pool = match state.store.list_users().await {
        Ok(users) => users,
        Err(e) => return store_failure("Failed to load users", e),
    };

    match state.matcher.search_candidates(&pool, &query.q, &query.user_id) {
        Ok(users) => {
            tracing::info!(
                "Search {:?} for {} returned {} users",
                query.q,
                query.user_id,
                users.len()
            );
            HttpResponse::Ok().json(SearchUsersResponse {
                total_results: users.len(),
                users,
            })
        }
        Err(e) => match_failure(e),
    }
}

/// Create or replace a profile
///
/// PUT /api/v1/users/{id}
async fn upsert_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpsertUserRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let user_id = path.into_inner();
    if req.id != user_id {
        return error_response(
            "Validation failed",
            format!("body id {} does not match path id {}", req.id, user_id),
            400,
        );
    }

    // Keep the stored rating; new profiles start unrated
    let rating = match state.store.get_user(&user_id).await {
        Ok(existing) => existing.rating,
        Err(StoreError::NotFound(_)) => 0.0,
        Err(e) => return store_failure("Failed to fetch user profile", e),
    };

    let req = req.into_inner();
    let user = UserRecord {
        id: req.id,
        display_name: req.display_name,
        bio: req.bio,
        taught: req.taught.into(),
        wanted: req.wanted.into(),
        is_online: req.is_online,
        rating,
        last_active: chrono::Utc::now(),
    };

    match state.store.upsert_user(&user).await {
        Ok(()) => {
            tracing::info!("Saved profile for {}", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => store_failure("Failed to save profile", e),
    }
}

/// Update presence
///
/// POST /api/v1/users/{id}/presence
async fn update_presence(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<PresenceRequest>,
) -> HttpResponse {
    let user_id = path.into_inner();

    match state.store.set_online(&user_id, req.is_online).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_failure("Failed to update presence", e),
    }
}
