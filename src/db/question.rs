use color_eyre::Result;

use super::models::QuestionRow;
use super::Db;
use crate::models::Questions;
use crate::rejections::{AppError, ResultExt};

impl Db {
    /// Insert a batch of catalog questions atomically in a transaction.
    /// Every entry is validated first; nothing is written on failure.
    pub async fn load_questions(&self, questions: Questions) -> Result<usize, AppError> {
        for question in &questions {
            question.validate().map_err(AppError::Validation)?;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .reject("could not begin transaction")?;

        for question in &questions {
            let correct: std::collections::BTreeSet<&str> =
                question.correct_options.iter().map(String::as_str).collect();
            let correct_json = serde_json::to_string(&correct)
                .reject("could not encode correct options")?;

            sqlx::query(
                r#"
                INSERT INTO questions
                    (question_text, option1, option2, option3, option4, correct_options, question_type)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&question.question_text)
            .bind(&question.options[0])
            .bind(&question.options[1])
            .bind(&question.options[2])
            .bind(&question.options[3])
            .bind(correct_json)
            .bind(question.question_type.as_str())
            .execute(&mut *tx)
            .await
            .reject("could not insert question")?;
        }

        tx.commit().await.reject("could not commit questions")?;

        tracing::info!("loaded {} questions into the bank", questions.len());
        Ok(questions.len())
    }

    pub async fn get_question(&self, question_id: i64) -> Result<QuestionRow, AppError> {
        let question = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question_text, option1, option2, option3, option4,
                   correct_options, question_type
            FROM questions
            WHERE id = ?
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .reject("could not get question")?;

        question.ok_or(AppError::NotFound)
    }

    /// Ids of questions the session has not answered yet. An exhausted bank
    /// yields an empty list, not an error.
    pub async fn unanswered_for(&self, session_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM questions
            WHERE id NOT IN (
                SELECT question_id FROM session_questions WHERE session_id = ?
            )
            ORDER BY id
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
