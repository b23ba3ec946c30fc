//! HTTP surface: the dashboard page and the snapshot endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use crate::metrics::collect_snapshot;
use crate::page::render_index;
use crate::state::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/data", get(data))
        .with_state(state)
}

/// Dashboard page with the current snapshot inlined, so the first paint has
/// data before the poll loop starts.
async fn index(State(state): State<AppState>) -> Response {
    match collect_snapshot(&state).await {
        Ok(snapshot) => Html(render_index(&snapshot)).into_response(),
        Err(e) => {
            error!("rendering the dashboard failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while rendering the page",
            )
                .into_response()
        }
    }
}

async fn data(State(state): State<AppState>) -> Response {
    match collect_snapshot(&state).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            error!("snapshot collection failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "An error occurred while fetching data".into(),
                }),
            )
                .into_response()
        }
    }
}
