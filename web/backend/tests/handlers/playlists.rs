use crate::fixtures::{MockJamendo, spawn_jamendo, test_state};
use axum::Json;
use axum::extract::{Query, State};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use vibecurate_core::{BrandStatus, TimeDistribution};
use vibecurate_web::error::AppError;
use vibecurate_web::handlers::{create_brand, curate, generate, get_playlists};
use vibecurate_web::models::{
    CreateBrandRequest, CurateRequest, GeneratePlaylistsRequest, PlaylistsQuery,
};
use vibecurate_web::state::AppState;
use vibecurate_web::store::BrandUpdate;

async fn brand(state: &Arc<AppState>, name: &str, track_count: u32, curated: bool) -> i64 {
    let Json(created) = create_brand(
        State(state.clone()),
        Ok(Json(CreateBrandRequest {
            name: name.to_string(),
            track_count: Some(track_count),
            description: None,
            sector: None,
            time_distribution: Some(TimeDistribution::default()),
        })),
    )
    .await
    .unwrap();

    if curated {
        curate(
            State(state.clone()),
            Ok(Json(CurateRequest {
                name: name.to_string(),
                brand_id: Some(created.brand.id),
                sector: None,
                description: None,
            })),
        )
        .await
        .unwrap();
    }

    created.brand.id
}

fn generate_request(brand_id: Option<i64>) -> Json<GeneratePlaylistsRequest> {
    Json(GeneratePlaylistsRequest { brand_id })
}

fn rich_catalog() -> MockJamendo {
    MockJamendo {
        tracks_per_tag: 40,
        similar_per_seed: 20,
        popular: 60,
        fail: false,
    }
}

#[tokio::test]
async fn test_coffee_corner_end_to_end() {
    let server = spawn_jamendo(rich_catalog()).await;
    let state = test_state(Some(server.client())).await;
    let id = brand(&state, "Coffee Corner", 100, true).await;

    let Json(response) = generate(State(state.clone()), Ok(generate_request(Some(id))))
        .await
        .unwrap();

    let periods: Vec<&str> = response.playlists.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, vec!["morning", "afternoon", "evening"]);

    let counts: Vec<usize> = response.playlists.iter().map(|p| p.track_count).collect();
    assert_eq!(counts, vec![33, 34, 33]);

    let morning = &response.playlists[0];
    assert_eq!(morning.bpm_range, "80-110");
    assert_eq!(morning.genres, vec!["Acoustic", "Jazz", "Bossa Nova", "Indie Folk"]);

    // Every returned track is stored, and BPMs respect the period range
    let stored: FxHashSet<i64> = state
        .store
        .list_tracks()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    for playlist in &response.playlists {
        let ids: FxHashSet<i64> = playlist.tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), playlist.tracks.len(), "duplicate track in {}", playlist.period);
        assert!(ids.is_subset(&stored));
    }
    for track in &morning.tracks {
        assert!((80..110).contains(&track.bpm), "bpm {} outside morning range", track.bpm);
        assert_eq!(track.source, "jamendo");
    }

    let brand = state.store.find_brand(id).await.unwrap().unwrap();
    assert_eq!(brand.status, BrandStatus::Completed);

    let Json(stored_playlists) = get_playlists(
        State(state),
        Ok(Query(PlaylistsQuery { brand_id: Some(id) })),
    )
    .await
    .unwrap();
    assert_eq!(stored_playlists.playlists.len(), 3);
    for (generated, stored) in response.playlists.iter().zip(&stored_playlists.playlists) {
        assert_eq!(generated.period, stored.period);
        let generated_ids: Vec<i64> = generated.tracks.iter().map(|t| t.id).collect();
        let stored_ids: Vec<i64> = stored.tracks.iter().map(|t| t.id).collect();
        assert_eq!(generated_ids, stored_ids);
    }
}

#[tokio::test]
async fn test_catalog_requests_bypass_caches() {
    let server = spawn_jamendo(rich_catalog()).await;
    let state = test_state(Some(server.client())).await;
    let id = brand(&state, "Coffee Corner", 9, true).await;

    generate(State(state), Ok(generate_request(Some(id))))
        .await
        .unwrap();

    let requests = server.requests();
    assert!(!requests.is_empty());
    for request in &requests {
        assert_eq!(request.cache_control.as_deref(), Some("no-cache"));
        assert_eq!(request.pragma.as_deref(), Some("no-cache"));
        assert_eq!(request.query.get("client_id").map(String::as_str), Some("test-client"));
        assert_eq!(request.query.get("format").map(String::as_str), Some("json"));
    }
    assert!(requests.iter().any(|r| r.path == "/tracks/similar/"
        && r.query.get("dedup_artist").map(String::as_str) == Some("1")));
}

#[tokio::test]
async fn test_regenerating_reuses_known_tracks() {
    let server = spawn_jamendo(rich_catalog()).await;
    let state = test_state(Some(server.client())).await;
    let id = brand(&state, "Coffee Corner", 30, true).await;
    let morning_only = BrandUpdate {
        time_distribution: Some(TimeDistribution {
            morning: 100,
            afternoon: 0,
            evening: 0,
        }),
        ..Default::default()
    };
    state.store.update_brand(id, &morning_only).await.unwrap();

    let Json(first) = generate(State(state.clone()), Ok(generate_request(Some(id))))
        .await
        .unwrap();
    let after_first = state.store.list_tracks().await.unwrap().len();

    // Same seed, same catalog: the second run asks for the same tracks
    let Json(second) = generate(State(state.clone()), Ok(generate_request(Some(id))))
        .await
        .unwrap();
    let after_second = state.store.list_tracks().await.unwrap().len();

    assert_eq!(after_first, after_second);
    assert_eq!(first.playlists[0].track_count, 30);
    let first_ids: Vec<i64> = first.playlists[0].tracks.iter().map(|t| t.id).collect();
    let second_ids: Vec<i64> = second.playlists[0].tracks.iter().map(|t| t.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_empty_catalog_yields_empty_playlists() {
    let server = spawn_jamendo(MockJamendo::default()).await;
    let state = test_state(Some(server.client())).await;
    let id = brand(&state, "Coffee Corner", 12, true).await;

    let Json(response) = generate(State(state.clone()), Ok(generate_request(Some(id))))
        .await
        .unwrap();

    assert_eq!(response.playlists.len(), 3);
    assert!(response.playlists.iter().all(|p| p.tracks.is_empty()));
    assert_eq!(
        state.store.find_brand(id).await.unwrap().unwrap().status,
        BrandStatus::Completed
    );
}

#[tokio::test]
async fn test_failing_catalog_is_a_bad_gateway() {
    let server = spawn_jamendo(MockJamendo {
        fail: true,
        ..Default::default()
    })
    .await;
    let state = test_state(Some(server.client())).await;
    let id = brand(&state, "Coffee Corner", 12, true).await;

    let result = generate(State(state), Ok(generate_request(Some(id)))).await;

    assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
}

#[tokio::test]
async fn test_generate_validates_request() {
    let server = spawn_jamendo(rich_catalog()).await;
    let state = test_state(Some(server.client())).await;

    let missing_id = generate(State(state.clone()), Ok(generate_request(None))).await;
    assert!(matches!(missing_id, Err(AppError::BadRequest(_))));

    let unknown = generate(State(state.clone()), Ok(generate_request(Some(999)))).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let uncurated = brand(&state, "Fresh Brand", 10, false).await;
    let no_profile = generate(State(state), Ok(generate_request(Some(uncurated)))).await;
    assert!(matches!(no_profile, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_generate_without_catalog_is_a_configuration_error() {
    let state = test_state(None).await;
    let id = brand(&state, "Coffee Corner", 10, true).await;

    let result = generate(State(state), Ok(generate_request(Some(id)))).await;

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_get_playlists_requires_brand_id() {
    let state = test_state(None).await;

    let missing = get_playlists(State(state.clone()), Ok(Query(PlaylistsQuery { brand_id: None }))).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let Json(empty) = get_playlists(State(state), Ok(Query(PlaylistsQuery { brand_id: Some(1) })))
        .await
        .unwrap();
    assert!(empty.playlists.is_empty());
}
