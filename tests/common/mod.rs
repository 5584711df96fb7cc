use std::collections::BTreeSet;
use std::sync::Arc;

use quizdrill::db::Db;
use quizdrill::models::{Question, QuestionType};
use quizdrill::selection::QuestionPicker;

/// Deterministic stand-in for the random picker: always the lowest id.
pub struct LowestIdPicker;

impl QuestionPicker for LowestIdPicker {
    fn pick(&self, candidates: &[i64]) -> Option<i64> {
        candidates.iter().min().copied()
    }
}

pub async fn create_test_db() -> Db {
    create_test_db_with_picker(Arc::new(LowestIdPicker)).await
}

pub async fn create_test_db_with_picker(picker: Arc<dyn QuestionPicker>) -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizdrill_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::with_picker(&url, picker)
        .await
        .expect("failed to create test database")
}

#[allow(dead_code)]
pub async fn seed_user(db: &Db, email: &str) -> (i64, String) {
    let user_id = db
        .create_user(email, "hunter2", "Test User")
        .await
        .expect("failed to create user");
    let token = db
        .create_user_session(user_id)
        .await
        .expect("failed to create user session");
    (user_id, token)
}

#[allow(dead_code)]
pub fn make_question(text: &str, correct: &[&str], question_type: QuestionType) -> Question {
    Question {
        question_text: text.to_string(),
        options: [
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct_options: correct.iter().map(|s| s.to_string()).collect(),
        question_type,
    }
}

/// Standard three-question bank: ids 1..=3 in insertion order.
#[allow(dead_code)]
pub async fn seed_bank(db: &Db) {
    db.load_questions(vec![
        make_question("First question", &["A", "C"], QuestionType::Multiple),
        make_question("Second question", &["B"], QuestionType::Single),
        make_question("Third question", &["D"], QuestionType::Single),
    ])
    .await
    .expect("failed to seed question bank");
}

#[allow(dead_code)]
pub fn set(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
