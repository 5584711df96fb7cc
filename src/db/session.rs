use chrono::Utc;
use ulid::Ulid;

use super::models::{NextQuestion, QuizSessionRow, SessionSummary};
use super::Db;
use crate::rejections::{AppError, ResultExt};

const SESSION_COLUMNS: &str = r#"
    id, session_token, user_id, total_questions, completed_questions,
    correct_answers, incorrect_answers, partially_correct_answers,
    score, is_completed, current_question, created_at, updated_at
"#;

impl Db {
    /// Create a new session for the user with zeroed counters.
    pub async fn start_session(
        &self,
        user_id: i64,
        total_questions: i64,
    ) -> Result<QuizSessionRow, AppError> {
        if total_questions <= 0 {
            return Err(AppError::Validation(
                "total_questions must be a positive integer",
            ));
        }

        let session_token = Ulid::new().to_string();
        let now = Utc::now();

        let session = sqlx::query_as::<_, QuizSessionRow>(&format!(
            r#"
            INSERT INTO quiz_sessions (session_token, user_id, total_questions, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(&session_token)
        .bind(user_id)
        .bind(total_questions)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .reject("could not create session")?;

        tracing::info!(
            "session created: token={session_token}, user_id={user_id}, total_questions={total_questions}"
        );
        Ok(session)
    }

    /// Look up a session by token for its owner. A missing session and an
    /// ownership mismatch are deliberately indistinguishable.
    pub async fn get_session(&self, token: &str, user_id: i64) -> Result<QuizSessionRow, AppError> {
        let session = sqlx::query_as::<_, QuizSessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM quiz_sessions WHERE session_token = ? AND user_id = ?"
        ))
        .bind(token)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .reject("could not get session")?;

        session.ok_or(AppError::NotFound)
    }

    /// Return the question currently assigned to the session, assigning a new
    /// one if none is pending. Re-fetching without an intervening answer
    /// returns the same question.
    pub async fn next_question(
        &self,
        token: &str,
        user_id: i64,
    ) -> Result<NextQuestion, AppError> {
        let session = self.get_session(token, user_id).await?;
        if session.is_completed {
            return Err(AppError::AlreadyCompleted);
        }

        let question_id = match session.current_question {
            Some(id) => id,
            None => {
                let candidates = self
                    .unanswered_for(session.id)
                    .await
                    .reject("could not get unanswered questions")?;

                let Some(picked) = self.picker.pick(&candidates) else {
                    return Ok(NextQuestion::NoMoreQuestions);
                };

                self.assign_current_question(&session, picked).await?
            }
        };

        let question = self.get_question(question_id).await?;
        Ok(NextQuestion::Question {
            question,
            completed_questions: session.completed_questions,
            total_questions: session.total_questions,
        })
    }

    /// Persist a current-question assignment. The `current_question IS NULL`
    /// guard makes the assignment first-writer-wins: a concurrent request that
    /// loses the race is handed the winner's question instead.
    async fn assign_current_question(
        &self,
        session: &QuizSessionRow,
        question_id: i64,
    ) -> Result<i64, AppError> {
        let updated = sqlx::query(
            r#"
            UPDATE quiz_sessions
            SET current_question = ?, updated_at = ?
            WHERE id = ? AND current_question IS NULL AND is_completed = 0
            "#,
        )
        .bind(question_id)
        .bind(Utc::now())
        .bind(session.id)
        .execute(&self.pool)
        .await
        .reject("could not assign current question")?
        .rows_affected();

        if updated > 0 {
            return Ok(question_id);
        }

        let current = self
            .get_session(&session.session_token, session.user_id)
            .await?;
        if current.is_completed {
            return Err(AppError::AlreadyCompleted);
        }
        current.current_question.ok_or(AppError::Internal(
            "current question assignment lost without a winner",
        ))
    }

    /// Idempotent force-complete: counters are left as-is and any pending
    /// assignment is cleared.
    pub async fn complete_session(&self, token: &str, user_id: i64) -> Result<(), AppError> {
        let session = self.get_session(token, user_id).await?;
        if session.is_completed {
            return Ok(());
        }

        sqlx::query(
            r#"
            UPDATE quiz_sessions
            SET is_completed = 1, current_question = NULL, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(Utc::now())
        .bind(session.id)
        .execute(&self.pool)
        .await
        .reject("could not complete session")?;

        tracing::info!("session force-completed: token={token}, user_id={user_id}");
        Ok(())
    }

    /// The caller's sessions, most recent first.
    pub async fn sessions_for_user(&self, user_id: i64) -> Result<Vec<SessionSummary>, AppError> {
        let sessions = sqlx::query_as::<_, SessionSummary>(
            r#"
            SELECT session_token AS session_id, total_questions, completed_questions,
                   score, is_completed, created_at
            FROM quiz_sessions
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .reject("could not list sessions")?;

        Ok(sessions)
    }
}
