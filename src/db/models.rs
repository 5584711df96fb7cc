// Database model structs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use color_eyre::Result;
use serde::Serialize;

use crate::scoring::Outcome;

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_options: String,
    pub question_type: String,
}

impl QuestionRow {
    pub fn options(&self) -> [String; 4] {
        [
            self.option1.clone(),
            self.option2.clone(),
            self.option3.clone(),
            self.option4.clone(),
        ]
    }

    pub fn correct_set(&self) -> Result<BTreeSet<String>> {
        Ok(serde_json::from_str(&self.correct_options)?)
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct QuizSessionRow {
    pub id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub total_questions: i64,
    pub completed_questions: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
    pub partially_correct_answers: i64,
    pub score: f64,
    pub is_completed: bool,
    pub current_question: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Progress snapshot returned by answer submission.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Progress {
    pub completed_questions: i64,
    pub total_questions: i64,
}

/// Outcome of a next-question request.
#[derive(Debug)]
pub enum NextQuestion {
    Question {
        question: QuestionRow,
        completed_questions: i64,
        total_questions: i64,
    },
    NoMoreQuestions,
}

#[derive(sqlx::FromRow)]
pub struct AnswerReviewRow {
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_options: String,
    pub selected_options: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct AnswerReview {
    pub question_text: String,
    pub options: [String; 4],
    pub correct_options: BTreeSet<String>,
    pub selected_options: BTreeSet<String>,
    pub outcome: Outcome,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub total_score: f64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
    pub partially_correct_answers: i64,
    pub questions: Vec<AnswerReview>,
}

#[derive(sqlx::FromRow, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub total_questions: i64,
    pub completed_questions: i64,
    pub score: f64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}
