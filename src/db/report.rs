use super::models::{AnswerReview, AnswerReviewRow, ResultsView};
use super::Db;
use crate::rejections::{AppError, ResultExt};
use crate::scoring;

impl Db {
    /// Assemble the read-only results view for a completed session.
    pub async fn build_results(&self, token: &str, user_id: i64) -> Result<ResultsView, AppError> {
        let session = self.get_session(token, user_id).await?;
        if !session.is_completed {
            return Err(AppError::NotCompleted);
        }

        let rows = sqlx::query_as::<_, AnswerReviewRow>(
            r#"
            SELECT q.question_text, q.option1, q.option2, q.option3, q.option4,
                   q.correct_options, sq.selected_options, sq.score
            FROM session_questions sq
            JOIN questions q ON q.id = sq.question_id
            WHERE sq.session_id = ?
            ORDER BY sq.id
            "#,
        )
        .bind(session.id)
        .fetch_all(&self.pool)
        .await
        .reject("could not get session answers")?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            let correct_options = serde_json::from_str(&row.correct_options)
                .reject("could not decode correct options")?;
            let selected_options = serde_json::from_str(&row.selected_options)
                .reject("could not decode selected options")?;
            let (outcome, _) = scoring::evaluate(&selected_options, &correct_options);

            questions.push(AnswerReview {
                question_text: row.question_text,
                options: [row.option1, row.option2, row.option3, row.option4],
                correct_options,
                selected_options,
                outcome,
                score: row.score,
            });
        }

        Ok(ResultsView {
            total_score: session.score,
            total_questions: session.total_questions,
            correct_answers: session.correct_answers,
            incorrect_answers: session.incorrect_answers,
            partially_correct_answers: session.partially_correct_answers,
            questions,
        })
    }
}
