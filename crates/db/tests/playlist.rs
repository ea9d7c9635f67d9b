//! Integration tests for the playlist pointer and the advance protocol.

use radio_db::models::track::NewTrack;
use radio_db::repositories::{LikeRepo, PlaylistRepo, TrackRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_track(title: &str) -> NewTrack {
    NewTrack {
        title: title.to_string(),
        mood: "synthwave".to_string(),
        headline: None,
        external_id: None,
        file_path: format!("/music/synthwave/{title}.mp3"),
        duration: Some(180),
    }
}

/// Insert `count` tracks and return their ids in insertion order.
async fn seed_tracks(pool: &SqlitePool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 1..=count {
        let track = TrackRepo::create(pool, &new_track(&format!("track-{i}")))
            .await
            .unwrap();
        ids.push(track.id);
    }
    ids
}

async fn set_pointer(pool: &SqlitePool, track_id: Option<i64>) {
    sqlx::query("UPDATE playlist SET current_track_id = ? WHERE id = 1")
        .bind(track_id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Pointer row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn pointer_row_exists_after_migrations(pool: SqlitePool) {
    let pointer = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(pointer.id, 1);
    assert_eq!(pointer.current_track_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_pointer_row_is_rejected(pool: SqlitePool) {
    let result = sqlx::query("INSERT INTO playlist (id, current_track_id) VALUES (2, NULL)")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "CHECK (id = 1) must reject a second row");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pointer_row_cannot_be_deleted(pool: SqlitePool) {
    let result = sqlx::query("DELETE FROM playlist").execute(&pool).await;
    assert!(result.is_err());
    PlaylistRepo::get_pointer(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_moves_to_next_id(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;
    set_pointer(&pool, Some(ids[1])).await;

    let track = PlaylistRepo::advance(&pool).await.unwrap().unwrap();
    assert_eq!(track.track.id, ids[2]);

    let pointer = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(pointer.current_track_id, Some(ids[2]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_wraps_to_first(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;
    set_pointer(&pool, Some(ids[2])).await;

    let track = PlaylistRepo::advance(&pool).await.unwrap().unwrap();
    assert_eq!(track.track.id, ids[0]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_from_deleted_track_falls_back_to_first(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;
    set_pointer(&pool, Some(ids[1])).await;

    sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(ids[1])
        .execute(&pool)
        .await
        .unwrap();

    let track = PlaylistRepo::advance(&pool).await.unwrap().unwrap();
    assert_eq!(track.track.id, ids[0]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_without_pointer_moves_past_reported_track(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;

    let on_air = PlaylistRepo::current_track(&pool).await.unwrap().unwrap();
    assert_eq!(on_air.track.id, ids[0]);

    let track = PlaylistRepo::advance(&pool).await.unwrap().unwrap();
    assert_eq!(track.track.id, ids[1]);
    let pointer = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(pointer.current_track_id, Some(ids[1]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_on_empty_catalog_leaves_pointer_unchanged(pool: SqlitePool) {
    let before = PlaylistRepo::get_pointer(&pool).await.unwrap();

    let result = PlaylistRepo::advance(&pool).await.unwrap();
    assert!(result.is_none());

    let after = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(after.current_track_id, before.current_track_id);
    assert_eq!(after.last_updated, before.last_updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_refreshes_timestamp(pool: SqlitePool) {
    seed_tracks(&pool, 2).await;
    let before = PlaylistRepo::get_pointer(&pool).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    PlaylistRepo::advance(&pool).await.unwrap().unwrap();

    let after = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert!(after.last_updated > before.last_updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn three_advances_cycle_through_catalog(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;
    set_pointer(&pool, Some(ids[0])).await;

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(PlaylistRepo::advance(&pool).await.unwrap().unwrap().track.id);
    }
    assert_eq!(seen, vec![ids[1], ids[2], ids[0]]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_advances_never_repeat_a_selection(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 5).await;
    set_pointer(&pool, Some(ids[0])).await;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { PlaylistRepo::advance(&pool).await })
        })
        .collect();

    let mut selected = Vec::new();
    for handle in handles {
        selected.push(handle.await.unwrap().unwrap().unwrap().track.id);
    }
    selected.sort();
    assert_eq!(selected, ids[1..].to_vec());

    let pointer = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(pointer.current_track_id, Some(ids[4]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_returns_like_count(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 2).await;
    set_pointer(&pool, Some(ids[0])).await;
    LikeRepo::create(&pool, ids[1], "10.0.0.1").await.unwrap();
    LikeRepo::create(&pool, ids[1], "10.0.0.2").await.unwrap();

    let track = PlaylistRepo::advance(&pool).await.unwrap().unwrap();
    assert_eq!(track.track.id, ids[1]);
    assert_eq!(track.likes, 2);
}

// ---------------------------------------------------------------------------
// Current track
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_track_is_none_for_empty_catalog(pool: SqlitePool) {
    assert!(PlaylistRepo::current_track(&pool).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_track_follows_pointer(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 3).await;
    set_pointer(&pool, Some(ids[2])).await;

    let current = PlaylistRepo::current_track(&pool).await.unwrap().unwrap();
    assert_eq!(current.track.id, ids[2]);
    assert_eq!(current.likes, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_track_without_pointer_reports_first_track(pool: SqlitePool) {
    let ids = seed_tracks(&pool, 2).await;

    let current = PlaylistRepo::current_track(&pool).await.unwrap().unwrap();
    assert_eq!(current.track.id, ids[0]);

    // Reading never moves the pointer.
    let pointer = PlaylistRepo::get_pointer(&pool).await.unwrap();
    assert_eq!(pointer.current_track_id, None);
}
