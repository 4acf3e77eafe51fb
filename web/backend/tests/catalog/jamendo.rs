use crate::fixtures::{MockJamendo, serve, spawn_jamendo};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use vibecurate_core::{PopularQuery, SearchOrder, TagQuery, TrackCatalog};
use vibecurate_web::jamendo::{CatalogError, JamendoClient};

fn tag_query(tag: &str, limit: usize) -> TagQuery {
    TagQuery {
        tag: tag.to_string(),
        limit,
        order: SearchOrder::ReleaseDate,
        offset: 120,
    }
}

#[tokio::test]
async fn test_tag_search_sends_query_shape() {
    let server = spawn_jamendo(MockJamendo {
        tracks_per_tag: 10,
        ..Default::default()
    })
    .await;

    let tracks = server
        .client()
        .search_by_tag(&tag_query("Bossa Nova", 5))
        .await
        .unwrap();

    assert_eq!(tracks.len(), 5);
    assert_eq!(tracks[0].external_id, "bossa-nova-0");
    assert_eq!(tracks[0].genre, "bossa-nova");
    assert_eq!(tracks[0].tags, vec!["calm"]);

    let request = &server.requests()[0];
    assert_eq!(request.path, "/tracks/");
    assert_eq!(request.query.get("tags").map(String::as_str), Some("Bossa Nova"));
    assert_eq!(request.query.get("order").map(String::as_str), Some("releasedate"));
    assert_eq!(request.query.get("offset").map(String::as_str), Some("120"));
    assert_eq!(request.query.get("include").map(String::as_str), Some("musicinfo"));
    assert_eq!(request.query.get("audioformat").map(String::as_str), Some("mp32"));
}

#[tokio::test]
async fn test_similar_search_excludes_seed_artist() {
    let server = spawn_jamendo(MockJamendo {
        similar_per_seed: 8,
        ..Default::default()
    })
    .await;

    let tracks = server.client().search_similar("1532771", 50).await.unwrap();

    assert_eq!(tracks.len(), 8);
    assert_eq!(tracks[0].external_id, "1532771-sim-0");
    let request = &server.requests()[0];
    assert_eq!(request.path, "/tracks/similar/");
    assert_eq!(request.query.get("id").map(String::as_str), Some("1532771"));
    assert_eq!(request.query.get("limit").map(String::as_str), Some("50"));
    assert_eq!(request.query.get("dedup_artist").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_popular_search_has_no_tag() {
    let server = spawn_jamendo(MockJamendo {
        popular: 3,
        ..Default::default()
    })
    .await;

    let query = PopularQuery {
        limit: 50,
        order: SearchOrder::PopularityMonth,
        offset: 900,
    };
    let tracks = server.client().search_popular(&query).await.unwrap();

    assert_eq!(tracks.len(), 3);
    let request = &server.requests()[0];
    assert!(request.query.get("tags").is_none());
    assert_eq!(request.query.get("order").map(String::as_str), Some("popularity_month"));
}

#[tokio::test]
async fn test_http_failure_is_an_error() {
    let server = spawn_jamendo(MockJamendo {
        fail: true,
        ..Default::default()
    })
    .await;

    let result = server.client().search_by_tag(&tag_query("jazz", 5)).await;

    assert!(matches!(result, Err(CatalogError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_api_failure_header_is_an_error() {
    let app = Router::new().route(
        "/tracks/",
        get(|| async {
            Json(json!({
                "headers": { "status": "failed", "code": 5, "error_message": "Invalid client_id" },
                "results": []
            }))
        }),
    );
    let base_url = serve(app).await;
    let client = JamendoClient::new("bad", base_url).unwrap();

    let result = client.search_by_tag(&tag_query("jazz", 5)).await;

    match result {
        Err(CatalogError::Api(message)) => assert_eq!(message, "Invalid client_id"),
        other => panic!("expected API error, got {:?}", other.map(|t| t.len())),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let app = Router::new().route("/tracks/", get(|| async { "<html>maintenance</html>" }));
    let base_url = serve(app).await;
    let client = JamendoClient::new("id", base_url).unwrap();

    let result = client.search_by_tag(&tag_query("jazz", 5)).await;

    assert!(matches!(result, Err(CatalogError::Http(_))));
}

#[tokio::test]
async fn test_unreachable_catalog_is_an_error() {
    let client = JamendoClient::new("id", "http://127.0.0.1:9").unwrap();

    let result = client.search_similar("1", 10).await;

    assert!(matches!(result, Err(CatalogError::Http(_))));
}
