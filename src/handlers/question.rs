use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::models::{NextQuestion, Progress},
    extractors::AuthGuard,
    rejections::AppError,
    AppState,
};

#[derive(Serialize)]
#[serde(untagged)]
pub(crate) enum NextQuestionResponse {
    Question {
        question_id: i64,
        question_text: String,
        options: [String; 4],
        #[serde(rename = "type")]
        question_type: String,
        completed_questions: i64,
        total_questions: i64,
    },
    NoMore {
        no_more_questions: bool,
    },
}

pub(crate) async fn next_question(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let response = match state.db.next_question(&token, user.id).await? {
        NextQuestion::Question {
            question,
            completed_questions,
            total_questions,
        } => NextQuestionResponse::Question {
            question_id: question.id,
            question_text: question.question_text.clone(),
            options: question.options(),
            question_type: question.question_type.clone(),
            completed_questions,
            total_questions,
        },
        NextQuestion::NoMoreQuestions => NextQuestionResponse::NoMore {
            no_more_questions: true,
        },
    };

    Ok(Json(response))
}

#[derive(Deserialize)]
pub(crate) struct SubmitAnswerBody {
    question_id: i64,
    /// Comma-joined option labels, e.g. "A,C". Duplicates collapse.
    selected_options: String,
}

pub(crate) async fn submit_answer(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(body): Json<SubmitAnswerBody>,
) -> Result<Json<Progress>, AppError> {
    let selected: BTreeSet<String> = body
        .selected_options
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    let progress = state
        .db
        .submit_answer(&token, user.id, body.question_id, &selected)
        .await?;

    Ok(Json(progress))
}
