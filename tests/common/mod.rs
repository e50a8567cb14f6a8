//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use gnb_inventario::{api, config::DatabaseConfig, repository::Repository, AppState};

/// Fresh in-memory store with the tables created
pub async fn memory_repository() -> Repository {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // one connection, so every query sees the same in-memory database
        max_connections: 1,
        min_connections: 1,
    };
    Repository::connect(&config)
        .await
        .expect("Failed to open in-memory database")
}

pub async fn test_app() -> (Router, Repository) {
    let repository = memory_repository().await;
    let state = AppState::new(repository.clone());
    (api::create_router(state), repository)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response is not UTF-8")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse { status, headers, body }
}
