//! Log service - append-only food and workout entries
//!
//! Manual logging validates the payload and appends an entry; the
//! analyze-and-log path first runs the meal photo through the image
//! analyzer, persists the photo, then appends an entry carrying the
//! estimated nutrition and the stored image URL.

use crate::error::ApiError;
use crate::repositories::{CreateFoodLog, CreateWorkoutLog, FoodLogRepository, WorkoutLogRepository};
use crate::state::AppState;
use calsnap_shared::daily_log::day_window;
use calsnap_shared::models::{FoodLog, WorkoutLog};
use calsnap_shared::types::{AnalyzeMealRequest, AnalyzeMealResponse, LogFoodRequest, LogWorkoutRequest};
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Log service for food and workout entries
pub struct LogService;

impl LogService {
    /// Append a manually entered food log
    pub async fn log_food(
        db: &PgPool,
        user_id: Uuid,
        req: LogFoodRequest,
    ) -> Result<FoodLog, ApiError> {
        req.validate()?;

        let log = FoodLogRepository::create(
            db,
            CreateFoodLog {
                user_id,
                food_name: req.food_name,
                calories: req.calories,
                protein_g: req.protein_g,
                fat_g: req.fat_g,
                carbohydrates_g: req.carbohydrates_g,
                image_url: req.image_url,
            },
        )
        .await?;

        info!(user_id = %user_id, log_id = %log.id, "food log created");
        Ok(log)
    }

    /// Analyze a meal photo, store the image, and append a food log
    pub async fn analyze_and_log(
        state: &AppState,
        user_id: Uuid,
        req: AnalyzeMealRequest,
    ) -> Result<AnalyzeMealResponse, ApiError> {
        req.validate()?;

        let analysis = state.analyzer.analyze(&req.photo_data_uri).await?;
        let image_url = state.media.store_data_uri(user_id, &req.photo_data_uri).await?;

        let log = FoodLogRepository::create(
            state.db(),
            CreateFoodLog {
                user_id,
                food_name: req.food_name,
                calories: analysis.calories,
                protein_g: analysis.protein_g,
                fat_g: analysis.fat_g,
                carbohydrates_g: analysis.carbohydrates_g,
                image_url: Some(image_url),
            },
        )
        .await?;

        info!(user_id = %user_id, log_id = %log.id, "analyzed meal logged");
        Ok(AnalyzeMealResponse {
            analysis,
            log: log.into(),
        })
    }

    /// Food entries for one calendar day (UTC), newest first
    pub async fn food_for_day(
        db: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<FoodLog>, ApiError> {
        let (start, end) = day_window(date);
        Ok(FoodLogRepository::list_between(db, user_id, start, end).await?)
    }

    /// Append a workout log
    pub async fn log_workout(
        db: &PgPool,
        user_id: Uuid,
        req: LogWorkoutRequest,
    ) -> Result<WorkoutLog, ApiError> {
        req.validate()?;

        let log = WorkoutLogRepository::create(
            db,
            CreateWorkoutLog {
                user_id,
                activity_name: req.activity_name,
                duration_minutes: req.duration_minutes,
                calories_burned: req.calories_burned,
            },
        )
        .await?;

        info!(user_id = %user_id, log_id = %log.id, "workout log created");
        Ok(log)
    }

    /// Workout entries for one calendar day (UTC), newest first
    pub async fn workouts_for_day(
        db: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutLog>, ApiError> {
        let (start, end) = day_window(date);
        Ok(WorkoutLogRepository::list_between(db, user_id, start, end).await?)
    }
}
