// Integration tests for Skill-Link Algo

use actix_web::{http::header::ContentType, test, web, App};
use chrono::{Duration, TimeZone, Utc};
use skill_link_algo::config::MatchingSettings;
use skill_link_algo::models::{
    ComputeMatchResponse, ErrorResponse, FindMatchesResponse, MatchKind, SearchUsersResponse,
    UserRecord,
};
use skill_link_algo::routes::{
    configure_routes, handle_json_payload_error, handle_query_payload_error, AppState,
};
use skill_link_algo::services::{InMemoryStore, ProfileStore};
use skill_link_algo::{MatchError, Matcher};
use std::sync::Arc;

fn create_test_user(
    id: &str,
    taught: &[&str],
    wanted: &[&str],
    is_online: bool,
    rating: f64,
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        display_name: format!("User {}", id),
        bio: String::new(),
        taught: taught.iter().collect(),
        wanted: wanted.iter().collect(),
        is_online,
        rating,
        last_active: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
}

#[::core::prelude::v1::test]
fn test_scenario_mutual_match() {
    let matcher = Matcher::default();
    let requester = create_test_user("me", &["English"], &["Guitar"], true, 0.0);
    let candidate = create_test_user("1", &["Guitar", "Piano"], &["English"], true, 0.0);

    let result = matcher
        .compute_match(&requester, &candidate)
        .unwrap()
        .expect("expected a match");

    assert_eq!(result.score, 2);
    assert_eq!(result.requester_can_teach, vec!["english"]);
    assert_eq!(result.candidate_can_teach, vec!["guitar"]);
    assert_eq!(result.kind, MatchKind::Perfect);
}

#[::core::prelude::v1::test]
fn test_scenario_no_overlap() {
    let matcher = Matcher::default();
    let requester = create_test_user("me", &[], &["Spanish"], true, 0.0);
    let candidate = create_test_user("1", &["Guitar"], &["English"], true, 0.0);

    assert!(matcher.compute_match(&requester, &candidate).unwrap().is_none());

    let ranked = matcher
        .rank_candidates(&requester, std::slice::from_ref(&candidate), 10)
        .unwrap();
    assert!(ranked.is_empty());

    let reverse = matcher
        .rank_candidates(&candidate, std::slice::from_ref(&requester), 10)
        .unwrap();
    assert!(reverse.is_empty());
}

#[::core::prelude::v1::test]
fn test_scenario_rank_with_limit() {
    let matcher = Matcher::default();
    let requester = create_test_user("me", &["English", "Writing"], &["Guitar", "Piano"], true, 0.0);

    let pool = vec![
        create_test_user("a", &["Guitar", "Piano"], &["English"], false, 4.0),
        create_test_user("b", &["Guitar"], &["English", "Writing"], true, 3.0),
        create_test_user("c", &["Piano"], &[], false, 4.9),
        create_test_user("d", &["Guitar"], &[], true, 2.0),
        create_test_user("e", &["Chess"], &["Golf"], true, 5.0),
    ];

    let result = matcher.rank_candidates(&requester, &pool, 3).unwrap();

    let ids: Vec<&str> = result.iter().map(|m| m.candidate.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "d"]);
    assert_eq!(result[0].score, 3);
    assert_eq!(result[1].score, 3);
    assert_eq!(result[2].score, 1);
}

#[::core::prelude::v1::test]
fn test_rank_deterministic() {
    let matcher = Matcher::default();
    let requester = create_test_user("me", &["English"], &["Guitar"], true, 0.0);

    let pool: Vec<UserRecord> = (0..30)
        .map(|i| {
            let mut user = create_test_user(&format!("u{:02}", i), &["Guitar"], &[], i % 3 == 0, (i % 5) as f64);
            user.last_active = user.last_active + Duration::minutes((i % 4) as i64);
            user
        })
        .collect();

    let first = matcher.rank_candidates(&requester, &pool, 30).unwrap();

    let mut reversed = pool.clone();
    reversed.reverse();
    let second = matcher.rank_candidates(&requester, &reversed, 30).unwrap();

    assert_eq!(first, second);
}

#[::core::prelude::v1::test]
fn test_limit_bounds() {
    let matcher = Matcher::default();
    let requester = create_test_user("me", &["English"], &["Guitar"], true, 0.0);
    let pool: Vec<UserRecord> = (0..8)
        .map(|i| create_test_user(&i.to_string(), &["Guitar"], &[], true, 1.0))
        .collect();

    for limit in 1..=10 {
        let result = matcher.rank_candidates(&requester, &pool, limit).unwrap();
        assert!(result.len() <= limit);
    }

    assert_eq!(
        matcher.rank_candidates(&requester, &pool, 0).unwrap_err(),
        MatchError::InvalidArgument("limit must be a positive integer".to_string())
    );
}

#[::core::prelude::v1::test]
fn test_scenario_search_all() {
    let matcher = Matcher::default();
    let pool = vec![
        create_test_user("x", &[], &[], true, 5.0),
        create_test_user("a", &[], &[], false, 4.0),
        create_test_user("b", &[], &[], true, 1.0),
        create_test_user("c", &[], &[], true, 3.0),
    ];

    let result = matcher.search_candidates(&pool, "", "x").unwrap();

    let ids: Vec<&str> = result.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[::core::prelude::v1::test]
fn test_scenario_search_substring_without_score() {
    let matcher = Matcher::default();
    let pool = vec![
        create_test_user("maria", &["Guitar"], &[], true, 4.9),
        create_test_user("alex", &["Programming"], &[], true, 4.6),
    ];

    let result = matcher.search_candidates(&pool, "GUI", "me").unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "maria");
}

fn demo_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryStore::with_demo_users()),
        matcher: Matcher::default(),
        matching: MatchingSettings::default(),
    }
}

#[actix_web::test]
async fn test_http_find_matches_for_martin() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(demo_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(serde_json::json!({ "userId": "1" }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    // Maria teaches guitar, piano and music theory and wants english and writing
    assert_eq!(resp.matches[0].candidate.id, "2");
    assert_eq!(resp.matches[0].score, 5);
    assert!(resp.matches.iter().all(|m| m.candidate.id != "1"));
    // Six demo users, Martin himself is not a candidate
    assert_eq!(resp.total_candidates, 5);
}

#[actix_web::test]
async fn test_http_compute_without_overlap() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(demo_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/compute")
        .set_json(serde_json::json!({ "userId": "1", "candidateId": "3" }))
        .to_request();
    let resp: ComputeMatchResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.result.is_none());
}

#[actix_web::test]
async fn test_http_search_and_upsert() {
    let state = demo_state();
    let store = state.store.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/search?userId=1&q=french")
        .to_request();
    let resp: SearchUsersResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.total_results, 1);
    assert_eq!(resp.users[0].display_name, "Sophie");

    let req = test::TestRequest::put()
        .uri("/api/v1/users/7")
        .set_json(serde_json::json!({
            "id": "7",
            "displayName": "Lena",
            "taught": ["French"],
            "wanted": ["Guitar"],
            "rating": 4.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(store.get_user("7").await.unwrap().taught.contains("french"));

    let req = test::TestRequest::get()
        .uri("/api/v1/users/search?userId=1&q=french")
        .to_request();
    let resp: SearchUsersResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.total_results, 2);
}

#[actix_web::test]
async fn test_http_upsert_id_mismatch() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(demo_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/users/7")
        .set_json(serde_json::json!({ "id": "8", "displayName": "Lena" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_http_upsert_keeps_stored_rating() {
    let state = demo_state();
    let store = state.store.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/users/2")
        .set_json(serde_json::json!({
            "id": "2",
            "displayName": "Maria",
            "taught": ["Guitar"],
            "wanted": ["English"],
            "rating": 1.0
        }))
        .to_request();
    let resp: UserRecord = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.rating, 4.9);

    let saved = store.get_user("2").await.unwrap();
    assert_eq!(saved.rating, 4.9);
    assert_eq!(saved.taught.to_vec(), vec!["guitar"]);
}

#[actix_web::test]
async fn test_http_presence_update() {
    let state = demo_state();
    let store = state.store.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/2/presence")
        .set_json(serde_json::json!({ "isOnline": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 204);
    assert!(!store.get_user("2").await.unwrap().is_online);
}

#[actix_web::test]
async fn test_http_malformed_json_body() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(demo_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .insert_header(ContentType::json())
        .set_payload("{")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
    assert_eq!(body.status_code, 400);
}

#[actix_web::test]
async fn test_http_search_missing_user_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(demo_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/search?q=guitar")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_query");
}
