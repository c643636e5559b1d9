//! HTTP endpoint handlers

use axum::{extract::Query, response::Json};
use serde::Deserialize;
use tracing::info;

use crate::greeting::create_greeting;

use super::responses::HealthResponse;

/// Query parameters accepted by the greeting endpoint.
#[derive(Debug, Deserialize)]
pub struct GreetParams {
    pub name: Option<String>,
}

/// Handle GET / - Greet the caller by name
///
/// The name comes from the `name` query parameter; absent and empty names
/// both produce the "Guest" greeting. This handler cannot fail.
pub async fn greet_handler(Query(params): Query<GreetParams>) -> String {
    let name = params.name.unwrap_or_default();
    info!("Received request for {}", name);
    create_greeting(&name)
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
