// Database module - provides data access and the core session operations

use std::str::FromStr;
use std::sync::Arc;

use color_eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::selection::{QuestionPicker, RandomPicker};

// Re-export models for convenience
pub mod models;
pub use models::*;

// Internal modules
mod answer;
mod question;
mod report;
mod schema;
mod session;
mod user;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: sqlx::SqlitePool,
    picker: Arc<dyn QuestionPicker>,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        Self::with_picker(url, Arc::new(RandomPicker)).await
    }

    /// Build a handle with a custom question selection strategy.
    pub async fn with_picker(url: &str, picker: Arc<dyn QuestionPicker>) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        assert_eq!(one, 1);

        // Initialize schema
        schema::create_schema(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool, picker })
    }
}
