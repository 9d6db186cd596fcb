//! Project list and vote API routes.

use axum::{Json, extract::State, http::StatusCode};
use web_types::{ApiError, Project, VoteRequest};

use crate::state::AppState;

/// GET /api/projects - List all projects with current vote counts.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.snapshot().await)
}

/// POST /api/vote - Apply an accumulated vote count to one project.
///
/// The body carries the full count a client debounced locally; the response
/// is the refreshed authoritative list so the client can reconcile. There
/// is no server-side daily cap: the per-browser limit is a client-side soft
/// cap only.
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<Vec<Project>>, (StatusCode, Json<ApiError>)> {
    if req.count == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code(
                "Vote count must be at least 1",
                "INVALID_COUNT",
            )),
        ));
    }

    state
        .apply_votes(&req.id, req.count)
        .await
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::with_code(
                    format!("Project not found: {}", req.id),
                    "NOT_FOUND",
                )),
            )
        })
}
