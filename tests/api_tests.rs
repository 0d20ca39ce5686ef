use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use showcase::config::Config;
use sea_orm::ConnectionTrait;
use showcase::models::show::NewShow;
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_app_with_config(mut config: Config) -> (Arc<showcase::api::AppState>, Router) {
    let db_path =
        std::env::temp_dir().join(format!("showcase-api-test-{}.db", uuid::Uuid::new_v4()));
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = showcase::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let router = showcase::api::router(state.clone());
    (state, router)
}

async fn spawn_app() -> (Arc<showcase::api::AppState>, Router) {
    spawn_app_with_config(Config::default()).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let (_, app) = spawn_app().await;

    let (status, body) = get(&app, "/shows/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_one_object_per_record() {
    let (state, app) = spawn_app().await;

    let mut twin_peaks = NewShow::new("Twin Peaks", 1990);
    twin_peaks.image = Some("twin-peaks.jpg".to_string());
    twin_peaks.number_of_seasons = Some(3);

    state
        .store()
        .add_shows(&[
            NewShow::new("Friends", 1994),
            NewShow::new("Seinfeld", 1989),
            twin_peaks,
        ])
        .await
        .unwrap();

    let (status, body) = get(&app, "/shows/").await;
    assert_eq!(status, StatusCode::OK);

    let shows = body.as_array().expect("list body must be an array");
    assert_eq!(shows.len(), 3);
    assert_eq!(shows[0]["title"], "Friends");
    assert_eq!(shows[0]["worth_a_watch"], true);
    assert_eq!(shows[1]["year"], 1989);
    assert_eq!(
        shows[2],
        json!({
            "id": 3,
            "title": "Twin Peaks",
            "image": "twin-peaks.jpg",
            "year": 1990,
            "number_of_seasons": 3,
            "worth_a_watch": true
        })
    );
}

#[tokio::test]
async fn test_detail_matches_list_entry() {
    let (state, app) = spawn_app().await;
    let stored = state
        .store()
        .add_show(&NewShow::new("Frasier", 1993))
        .await
        .unwrap();

    let (_, list) = get(&app, "/shows/").await;
    let (status, detail) = get(&app, &format!("/shows/{}/", stored.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail, list[0]);
}

#[tokio::test]
async fn test_detail_missing_id_is_404() {
    let (_, app) = spawn_app().await;

    let (status, body) = get(&app, "/shows/42/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Show 42 not found"}));
}

#[tokio::test]
async fn test_detail_non_numeric_id_is_404() {
    let (_, app) = spawn_app().await;

    let (status, body) = get(&app, "/shows/friends/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Show friends not found");

    let (status, _) = get(&app, "/shows/-1/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_optional() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .add_show(&NewShow::new("ER", 1994))
        .await
        .unwrap();

    let (status, with_slash) = get(&app, "/shows/").await;
    assert_eq!(status, StatusCode::OK);
    let (status, without_slash) = get(&app, "/shows").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_slash, without_slash);

    let (status, detail) = get(&app, "/shows/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "ER");
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .add_show(&NewShow::new("The X-Files", 1993))
        .await
        .unwrap();

    let first = get(&app, "/shows/").await;
    let second = get(&app, "/shows/").await;
    assert_eq!(first, second);

    let first = get(&app, "/shows/1/").await;
    let second = get(&app, "/shows/1/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_write_methods_are_not_routed() {
    let (_, app) = spawn_app().await;

    for (method, uri) in [("POST", "/shows/"), ("PUT", "/shows/1/"), ("DELETE", "/shows/1/")] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"title":"Nope","year":1999}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    let (_, body) = get(&app, "/shows/").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_custom_mount_path() {
    let mut config = Config::default();
    config.server.mount_path = "/api/v1/shows/".to_string();
    let (state, app) = spawn_app_with_config(config).await;
    state
        .store()
        .add_show(&NewShow::new("Friends", 1994))
        .await
        .unwrap();

    let (status, body) = get(&app, "/api/v1/shows/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get(&app, "/api/v1/shows/1/").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/shows/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_mount_path() {
    let mut config = Config::default();
    config.server.mount_path = "/".to_string();
    let (state, app) = spawn_app_with_config(config).await;
    state
        .store()
        .add_show(&NewShow::new("Friends", 1994))
        .await
        .unwrap();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Friends");

    let (status, body) = get(&app, "/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, _) = get(&app, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoints() {
    let (_, app) = spawn_app().await;

    let (status, body) = get(&app, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "alive"}));

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ready": true, "database": true, "shows": 0}));
}

#[tokio::test]
async fn test_readiness_counts_the_catalog() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .add_shows(&[NewShow::new("Friends", 1994), NewShow::new("ER", 1994)])
        .await
        .unwrap();

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shows"], 2);
}

#[tokio::test]
async fn test_readiness_fails_when_pool_is_closed() {
    let (state, app) = spawn_app().await;
    state.store().conn.clone().close().await.unwrap();

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"ready": false, "database": false}));
}

#[tokio::test]
async fn test_readiness_fails_when_table_is_missing() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .conn
        .execute_unprepared("DROP TABLE shows")
        .await
        .unwrap();

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"ready": false, "database": true}));
}

#[tokio::test]
async fn test_storage_failure_is_a_generic_500() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .add_show(&NewShow::new("Friends", 1994))
        .await
        .unwrap();
    state
        .store()
        .conn
        .execute_unprepared("DROP TABLE shows")
        .await
        .unwrap();

    for uri in ["/shows/", "/shows/1/"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({"error": "A database error occurred"}), "{uri}");
    }
}

#[tokio::test]
async fn test_song_rows_carry_their_own_fields() {
    let (state, app) = spawn_app().await;

    let mut song = NewShow::new("Wonderwall", 1995);
    song.worth_a_watch = None;
    song.album_name = Some("(What's the Story) Morning Glory?".to_string());
    song.duration = Some(258);
    song.artist = Some("Oasis".to_string());
    song.created = Some("2024-01-01T12:00:00Z".to_string());
    state.store().add_show(&song).await.unwrap();

    let (status, body) = get(&app, "/shows/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "title": "Wonderwall",
            "year": 1995,
            "album_name": "(What's the Story) Morning Glory?",
            "duration": 258,
            "artist": "Oasis",
            "created": "2024-01-01T12:00:00Z"
        })
    );
}

#[tokio::test]
async fn test_mount_over_builtin_route_is_rejected() {
    for mount_path in ["/metrics", "/health", "/health/live", "/shows/{id}"] {
        let mut config = Config::default();
        config.server.mount_path = mount_path.to_string();
        let db_path =
            std::env::temp_dir().join(format!("showcase-api-test-{}.db", uuid::Uuid::new_v4()));
        config.general.database_path = format!("sqlite:{}", db_path.display());

        let result = showcase::api::create_app_state_from_config(config, None).await;
        assert!(result.is_err(), "{mount_path} should be rejected");
    }
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let (_, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Metrics not enabled or failed to initialize");
}
