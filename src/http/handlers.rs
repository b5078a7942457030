//! Read-only route table endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::routing::{Navigation, Resolution, RouteTable};

#[derive(Serialize)]
pub struct SystemStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub routes: usize,
}

/// `?path=/monitor/abc123`
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        routes: state.router.table().len(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<RouteTable> {
    Json(state.router.table().clone())
}

pub async fn get_resolve(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<Resolution> {
    Json(state.router.resolve(&query.path).to_resolution())
}

pub async fn get_navigate(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<Navigation>, (StatusCode, Json<serde_json::Value>)> {
    match state.router.navigate(&query.path).await {
        Ok(navigation) => Ok(Json(navigation)),
        Err(e) => {
            tracing::error!(path = %query.path, error = %e, "Navigation failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "path": query.path,
                    "error": e.to_string(),
                })),
            ))
        }
    }
}
