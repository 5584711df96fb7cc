use axum::{
    extract::{Path, State},
    Json,
};

use crate::{db::models::ResultsView, extractors::AuthGuard, rejections::AppError, AppState};

pub(crate) async fn session_results(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResultsView>, AppError> {
    let results = state.db.build_results(&token, user.id).await?;
    Ok(Json(results))
}
