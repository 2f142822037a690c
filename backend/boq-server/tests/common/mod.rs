#![allow(dead_code)]

//! Shared setup for boq-server integration tests

use boq_core::{CreateProject, DocumentPatch, Phase, Project};
use boq_server::AppState;
use boq_server::ws::ConnectionConfig;
use boq_store::DocumentHub;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_app_state() -> AppState {
    let hub = Arc::new(DocumentHub::in_memory(16));
    AppState::new(hub, 100, ConnectionConfig::default())
}

/// Project starting 2024-01-15 with two equal phases: one done, one untouched
pub fn tower_project() -> Project {
    let mut project = Project::new(CreateProject {
        name: String::from("Tower A"),
        description: String::from("32 floors"),
        start_date: Some(date(2024, 1, 15)),
    });
    project.timeline = vec![
        Phase::new("Foundation", date(2024, 1, 1), date(2024, 2, 1), 50.0).with_progress(100.0),
        Phase::new("Structure", date(2024, 2, 1), date(2024, 3, 1), 50.0),
    ];
    project
}

pub async fn seed_projects(state: &AppState, projects: Vec<Project>) {
    state
        .hub
        .merge(DocumentPatch::default().with_projects(projects))
        .await
        .unwrap();
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub fn get(uri: impl AsRef<str>) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri.as_ref())
        .body(Body::empty())
        .unwrap()
}
