//! Food log repository - append-only meal entries
//!
//! Entries are immutable once created; the timestamp is assigned by the
//! database at insert time, never by the client.

use anyhow::Result;
use calsnap_shared::models::FoodLog;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food log row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct FoodLogRow {
    id: Uuid,
    user_id: Uuid,
    food_name: String,
    calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbohydrates_g: f64,
    image_url: Option<String>,
    logged_at: DateTime<Utc>,
}

impl From<FoodLogRow> for FoodLog {
    fn from(row: FoodLogRow) -> Self {
        FoodLog {
            id: row.id,
            user_id: row.user_id,
            food_name: row.food_name,
            calories: row.calories,
            protein_g: row.protein_g,
            fat_g: row.fat_g,
            carbohydrates_g: row.carbohydrates_g,
            image_url: row.image_url,
            logged_at: row.logged_at,
        }
    }
}

/// Input for appending a food log entry
#[derive(Debug, Clone)]
pub struct CreateFoodLog {
    pub user_id: Uuid,
    pub food_name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrates_g: f64,
    pub image_url: Option<String>,
}

/// Food log repository
pub struct FoodLogRepository;

impl FoodLogRepository {
    /// Append a food log entry with a server-assigned timestamp
    pub async fn create(db: &PgPool, input: CreateFoodLog) -> Result<FoodLog> {
        let row = sqlx::query_as::<_, FoodLogRow>(
            r#"
            INSERT INTO food_logs (user_id, food_name, calories, protein_g, fat_g,
                                   carbohydrates_g, image_url, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id, user_id, food_name, calories, protein_g, fat_g,
                      carbohydrates_g, image_url, logged_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.food_name)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.fat_g)
        .bind(input.carbohydrates_g)
        .bind(&input.image_url)
        .fetch_one(db)
        .await?;

        Ok(row.into())
    }

    /// Entries for one user inside an inclusive time window, newest first
    pub async fn list_between(
        db: &PgPool,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FoodLog>> {
        let rows = sqlx::query_as::<_, FoodLogRow>(
            r#"
            SELECT id, user_id, food_name, calories, protein_g, fat_g,
                   carbohydrates_g, image_url, logged_at
            FROM food_logs
            WHERE user_id = $1 AND logged_at >= $2 AND logged_at <= $3
            ORDER BY logged_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(FoodLog::from).collect())
    }
}
