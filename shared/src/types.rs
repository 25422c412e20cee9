//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::daily_log::DailySummary;
use crate::models::{FitnessGoal, FoodLog, Gender, WorkoutLog};

/// Date query parameter; defaults to the current day when absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Partial profile update request
///
/// Absent fields leave the stored values untouched (merge semantics).
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 500.0))]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 30.0, max = 300.0))]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 150))]
    pub age_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
}

/// User profile response, including the derived dashboard numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    pub onboarded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_goal: Option<i32>,
    /// BMI to one decimal place; absent until weight and height are set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Log Types
// ============================================================================

/// Manual food log request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogFoodRequest {
    #[validate(length(min = 1, max = 200))]
    pub food_name: String,
    #[validate(range(min = 0.0))]
    pub calories: f64,
    #[validate(range(min = 0.0))]
    pub protein_g: f64,
    #[validate(range(min = 0.0))]
    pub fat_g: f64,
    #[validate(range(min = 0.0))]
    pub carbohydrates_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Food log entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogResponse {
    pub id: String,
    pub food_name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrates_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl From<FoodLog> for FoodLogResponse {
    fn from(log: FoodLog) -> Self {
        Self {
            id: log.id.to_string(),
            food_name: log.food_name,
            calories: log.calories,
            protein_g: log.protein_g,
            fat_g: log.fat_g,
            carbohydrates_g: log.carbohydrates_g,
            image_url: log.image_url,
            logged_at: log.logged_at,
        }
    }
}

/// Workout log request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogWorkoutRequest {
    #[validate(length(min = 1, max = 200))]
    pub activity_name: String,
    #[validate(range(min = 1))]
    pub duration_minutes: i32,
    #[validate(range(min = 0.0))]
    pub calories_burned: f64,
}

/// Workout log entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogResponse {
    pub id: String,
    pub activity_name: String,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub logged_at: DateTime<Utc>,
}

impl From<WorkoutLog> for WorkoutLogResponse {
    fn from(log: WorkoutLog) -> Self {
        Self {
            id: log.id.to_string(),
            activity_name: log.activity_name,
            duration_minutes: log.duration_minutes,
            calories_burned: log.calories_burned,
            logged_at: log.logged_at,
        }
    }
}

// ============================================================================
// AI Analysis Types
// ============================================================================

/// Estimated nutrition for a photographed meal
///
/// This is the inference model's output taken at face value; the numeric
/// fields are not second-guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrates_g: f64,
}

fn default_analyzed_meal_name() -> String {
    "Analyzed Meal".to_string()
}

/// Analyze-and-log request: a meal photo as a base64 data URI
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeMealRequest {
    /// `data:<mimetype>;base64,<encoded_data>`
    #[validate(length(min = 1))]
    pub photo_data_uri: String,
    /// Placeholder name for the created entry; the model does not infer one
    #[serde(default = "default_analyzed_meal_name")]
    pub food_name: String,
}

/// Analyze-and-log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeMealResponse {
    pub analysis: MealAnalysis,
    pub log: FoodLogResponse,
}

// ============================================================================
// Daily Summary Types
// ============================================================================

/// Daily calorie summary with the day's entries, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub calorie_goal: i32,
    pub consumed: f64,
    pub burned: f64,
    /// goal - consumed + burned; may be negative
    pub remaining: f64,
    /// consumed - burned; may be negative
    pub net: f64,
    pub food_logs: Vec<FoodLogResponse>,
    pub workout_logs: Vec<WorkoutLogResponse>,
}

impl DailySummaryResponse {
    pub fn from_parts(
        summary: DailySummary,
        food_logs: Vec<FoodLog>,
        workout_logs: Vec<WorkoutLog>,
    ) -> Self {
        Self {
            date: summary.date,
            calorie_goal: summary.calorie_goal,
            consumed: summary.consumed,
            burned: summary.burned,
            remaining: summary.remaining,
            net: summary.net,
            food_logs: food_logs.into_iter().map(FoodLogResponse::from).collect(),
            workout_logs: workout_logs
                .into_iter()
                .map(WorkoutLogResponse::from)
                .collect(),
        }
    }
}
