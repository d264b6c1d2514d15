#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use product_service::{AppConfig, AppState, app, store::ProductStore};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config(static_dir: &str) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "DB_URL" => Some("postgres://unused/test".to_string()),
        "STATIC_DIR" => Some(static_dir.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_app<S: ProductStore + 'static>(store: S) -> Router {
    app::router(AppState::new(store), &test_config("./static")).expect("router")
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect_status(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    body_text(response).await
}
