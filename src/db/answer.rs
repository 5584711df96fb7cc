use std::collections::BTreeSet;

use chrono::Utc;

use super::models::Progress;
use super::Db;
use crate::rejections::{AppError, ResultExt};
use crate::scoring::{self, Outcome};

impl Db {
    pub async fn is_question_answered(&self, session_id: i64, question_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM session_questions WHERE session_id = ? AND question_id = ?)",
        )
        .bind(session_id)
        .bind(question_id)
        .fetch_one(&self.pool)
        .await
        .reject("could not check if question is answered")?;

        Ok(exists)
    }

    /// Score a submitted answer and record it.
    ///
    /// The session-question insert and the counter update run in one
    /// transaction; the unique index on (session_id, question_id) turns a
    /// concurrent double submit into `AlreadyAnswered` with no counter drift.
    pub async fn submit_answer(
        &self,
        token: &str,
        user_id: i64,
        question_id: i64,
        selected: &BTreeSet<String>,
    ) -> Result<Progress, AppError> {
        let session = self.get_session(token, user_id).await?;
        if session.is_completed {
            return Err(AppError::AlreadyCompleted);
        }
        if selected.is_empty() {
            return Err(AppError::EmptySelection);
        }
        if self.is_question_answered(session.id, question_id).await? {
            return Err(AppError::AlreadyAnswered);
        }

        let question = self.get_question(question_id).await?;
        let correct = question
            .correct_set()
            .reject("could not decode correct options")?;

        let (outcome, score) = scoring::evaluate(selected, &correct);
        let selected_json =
            serde_json::to_string(selected).reject("could not encode selected options")?;

        let (correct_inc, partial_inc, incorrect_inc) = match outcome {
            Outcome::Correct => (1, 0, 0),
            Outcome::Partial => (0, 1, 0),
            Outcome::Incorrect => (0, 0, 1),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .reject("could not begin transaction")?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO session_questions (session_id, question_id, selected_options, score)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(session.id)
        .bind(question_id)
        .bind(&selected_json)
        .bind(score)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            if is_unique_violation(&e) {
                return Err(AppError::AlreadyAnswered);
            }
            return Err(e).reject("could not record answer");
        }

        // Counter arithmetic happens in SQL against the row's current values,
        // and the dropped transaction rolls the insert back if the session was
        // sealed in the meantime.
        let progress = sqlx::query_as::<_, (i64, i64)>(
            r#"
            UPDATE quiz_sessions
            SET completed_questions = completed_questions + 1,
                correct_answers = correct_answers + ?,
                partially_correct_answers = partially_correct_answers + ?,
                incorrect_answers = incorrect_answers + ?,
                score = score + ?,
                current_question = NULL,
                is_completed = CASE
                    WHEN completed_questions + 1 >= total_questions THEN 1
                    ELSE is_completed
                END,
                updated_at = ?
            WHERE id = ? AND is_completed = 0
            RETURNING completed_questions, total_questions
            "#,
        )
        .bind(correct_inc)
        .bind(partial_inc)
        .bind(incorrect_inc)
        .bind(score)
        .bind(Utc::now())
        .bind(session.id)
        .fetch_optional(&mut *tx)
        .await
        .reject("could not update session progress")?
        .ok_or(AppError::AlreadyCompleted)?;

        tx.commit().await.reject("could not commit answer")?;

        tracing::info!(
            "answer recorded for session={}, question={question_id}: outcome={outcome:?}, score={score}",
            session.id
        );

        Ok(Progress {
            completed_questions: progress.0,
            total_questions: progress.1,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.kind() == sqlx::error::ErrorKind::UniqueViolation
    )
}
