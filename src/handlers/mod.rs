mod question;
mod results;
mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/start-session", post(session::start_session))
        .route("/sessions", get(session::list_sessions))
        .route("/session/{token}/question", get(question::next_question))
        .route("/session/{token}/answer", post(question::submit_answer))
        .route("/session/{token}/complete", post(session::complete_session))
        .route("/session/{token}/results", get(results::session_results))
}
