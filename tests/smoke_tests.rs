//! Smoke test for the single-record catalog walkthrough.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use showcase::config::Config;
use showcase::models::show::NewShow;
use tower::ServiceExt;

#[tokio::test]
async fn smoke_single_record_list_detail_and_missing() {
    let db_path =
        std::env::temp_dir().join(format!("showcase-smoke-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = showcase::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");

    let mut friends = NewShow::new("Friends", 1994);
    friends.worth_a_watch = None;
    state.store().add_show(&friends).await.unwrap();

    let app = showcase::api::router(state);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/shows/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"[{"id":1,"title":"Friends","year":1994}]"#);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/shows/1/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"id":1,"title":"Friends","year":1994}"#);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/shows/2/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Show 2 not found");
}
