//! Workout log repository - append-only workout entries

use anyhow::Result;
use calsnap_shared::models::WorkoutLog;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout log row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct WorkoutLogRow {
    id: Uuid,
    user_id: Uuid,
    activity_name: String,
    duration_minutes: i32,
    calories_burned: f64,
    logged_at: DateTime<Utc>,
}

impl From<WorkoutLogRow> for WorkoutLog {
    fn from(row: WorkoutLogRow) -> Self {
        WorkoutLog {
            id: row.id,
            user_id: row.user_id,
            activity_name: row.activity_name,
            duration_minutes: row.duration_minutes,
            calories_burned: row.calories_burned,
            logged_at: row.logged_at,
        }
    }
}

/// Input for appending a workout log entry
#[derive(Debug, Clone)]
pub struct CreateWorkoutLog {
    pub user_id: Uuid,
    pub activity_name: String,
    pub duration_minutes: i32,
    pub calories_burned: f64,
}

/// Workout log repository
pub struct WorkoutLogRepository;

impl WorkoutLogRepository {
    /// Append a workout log entry with a server-assigned timestamp
    pub async fn create(db: &PgPool, input: CreateWorkoutLog) -> Result<WorkoutLog> {
        let row = sqlx::query_as::<_, WorkoutLogRow>(
            r#"
            INSERT INTO workout_logs (user_id, activity_name, duration_minutes,
                                      calories_burned, logged_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, user_id, activity_name, duration_minutes,
                      calories_burned, logged_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.activity_name)
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
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
    ) -> Result<Vec<WorkoutLog>> {
        let rows = sqlx::query_as::<_, WorkoutLogRow>(
            r#"
            SELECT id, user_id, activity_name, duration_minutes,
                   calories_burned, logged_at
            FROM workout_logs
            WHERE user_id = $1 AND logged_at >= $2 AND logged_at <= $3
            ORDER BY logged_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(WorkoutLog::from).collect())
    }
}
