use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::models::SessionSummary,
    extractors::AuthGuard,
    rejections::AppError,
    AppState,
};

#[derive(Deserialize)]
pub(crate) struct StartSessionBody {
    total_questions: i64,
}

#[derive(Serialize)]
pub(crate) struct StartSessionResponse {
    session_id: String,
}

pub(crate) async fn start_session(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Json(body): Json<StartSessionBody>,
) -> Result<Json<StartSessionResponse>, AppError> {
    let session = state
        .db
        .start_session(user.id, body.total_questions)
        .await?;

    Ok(Json(StartSessionResponse {
        session_id: session.session_token,
    }))
}

#[derive(Serialize)]
pub(crate) struct CompleteSessionResponse {
    status: &'static str,
}

pub(crate) async fn complete_session(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<CompleteSessionResponse>, AppError> {
    state.db.complete_session(&token, user.id).await?;

    Ok(Json(CompleteSessionResponse {
        status: "completed",
    }))
}

pub(crate) async fn list_sessions(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    let sessions = state.db.sessions_for_user(user.id).await?;
    Ok(Json(sessions))
}
