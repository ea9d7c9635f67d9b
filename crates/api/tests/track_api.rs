//! Integration tests for the track catalog and likes.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_track, get, post_as, post_json, post_raw};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_summary(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tracks",
        json!({
            "title": "Static Bloom",
            "mood": "synthwave",
            "file_path": "/music/synthwave/static-bloom.mp3",
            "headline": "Grid operators brace for heatwave",
            "suno_id": "gen-77",
            "duration": 201,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["title"], "Static Bloom");
    assert_eq!(json["mood"], "synthwave");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_lists_every_missing_field(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tracks", json!({ "mood": "lofi" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: file_path, title");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mistyped_field_is_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tracks",
        json!({
            "title": "Neon Harbor",
            "mood": "synthwave",
            "file_path": "/music/neon.mp3",
            "duration": "abc",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("duration"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unreadable_body_is_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_raw(
        app.clone(),
        "/api/v1/tracks",
        "{not json",
        Some("application/json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_raw(app.clone(), "/api/v1/tracks", "title=Neon", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let json = body_json(get(app, "/api/v1/tracks").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_track_appears_in_listing(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    create_track(app.clone(), "Older", "/music/old.mp3").await;
    let newer = create_track(app.clone(), "Newer", "/music/new.mp3").await;

    let json = body_json(get(app, "/api/v1/tracks").await).await;
    let tracks = json.as_array().unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0]["id"], newer);
    assert_eq!(tracks[0]["title"], "Newer");
    assert_eq!(tracks[0]["file_path"], "/music/new.mp3");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_limit_is_clamped(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    for n in 0..3 {
        create_track(app.clone(), &format!("T{n}"), "/music/t.mp3").await;
    }

    let one = body_json(get(app.clone(), "/api/v1/tracks?limit=1").await).await;
    assert_eq!(one.as_array().unwrap().len(), 1);

    let zero = body_json(get(app, "/api/v1/tracks?limit=0").await).await;
    assert_eq!(zero.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_then_duplicate_is_conflict(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let id = create_track(app.clone(), "Neon Harbor", "/music/a.mp3").await;
    let uri = format!("/api/v1/tracks/{id}/like");

    let first = post_as(app.clone(), &uri, "203.0.113.7").await;
    assert_eq!(first.status(), StatusCode::OK);
    let json = body_json(first).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["likes"], 1);

    let second = post_as(app.clone(), &uri, "203.0.113.7").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "ALREADY_LIKED");

    let other = post_as(app.clone(), &uri, "198.51.100.2").await;
    assert_eq!(body_json(other).await["likes"], 2);

    let count = body_json(get(app, &format!("/api/v1/tracks/{id}/likes")).await).await;
    assert_eq!(count["track_id"], id);
    assert_eq!(count["likes"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlike_is_idempotent(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let id = create_track(app.clone(), "Neon Harbor", "/music/a.mp3").await;

    post_as(app.clone(), &format!("/api/v1/tracks/{id}/like"), "203.0.113.7").await;

    for _ in 0..2 {
        let response = post_as(app.clone(), &format!("/api/v1/tracks/{id}/unlike"), "203.0.113.7").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["likes"], 0);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn likes_appear_on_current_track(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let id = create_track(app.clone(), "Neon Harbor", "/music/a.mp3").await;
    post_as(app.clone(), &format!("/api/v1/tracks/{id}/like"), "203.0.113.7").await;

    let current = body_json(get(app, "/api/v1/current").await).await;
    assert_eq!(current["track"]["id"], id);
    assert_eq!(current["track"]["likes"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_endpoints_404_for_unknown_track(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let like = post_as(app.clone(), "/api/v1/tracks/999/like", "203.0.113.7").await;
    assert_eq!(like.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(like).await["code"], "NOT_FOUND");

    let unlike = post_as(app.clone(), "/api/v1/tracks/999/unlike", "203.0.113.7").await;
    assert_eq!(unlike.status(), StatusCode::NOT_FOUND);

    let count = get(app, "/api/v1/tracks/999/likes").await;
    assert_eq!(count.status(), StatusCode::NOT_FOUND);
}
