#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use library_api::api::dto::pagination::PageLimits;
use library_api::api::handlers::health_handler;
use library_api::api::routes;
use library_api::infrastructure::persistence::{PgBookRepository, PgLoanRepository};
use library_api::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::in_memory(PageLimits::default())
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgBookRepository::new(pool.clone())),
        Arc::new(PgLoanRepository::new(pool)),
        PageLimits::default(),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn book_json(title: &str, author: &str, isbn: &str) -> Value {
    json!({ "title": title, "author": author, "isbn": isbn })
}

/// Creates a book through the API and returns its id.
pub async fn create_book(server: &TestServer, title: &str, author: &str, isbn: &str) -> i64 {
    let response = server
        .post("/api/books")
        .json(&book_json(title, author, isbn))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
