//! Data models for the CalSnap application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ProfileError;

/// Gender as collected during onboarding
///
/// Used for the BMR formula selection only. Unknown values degrade to
/// `Other`, which averages the male and female formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse a stored string, falling back to `Other` for anything
    /// unrecognized rather than failing.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Stated fitness objective driving the calorie goal adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::Lose => "lose",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::Gain => "gain",
        }
    }

    /// Parse a stored string; unrecognized goals fall back to `Maintain`.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose" => FitnessGoal::Lose,
            "gain" => FitnessGoal::Gain,
            _ => FitnessGoal::Maintain,
        }
    }
}

/// Complete biometric input to the nutrition calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    pub gender: Gender,
    pub goal: FitnessGoal,
}

/// Stored user profile document
///
/// Created as a skeleton (id + email) on first authenticated request and
/// filled in through partial-merge updates during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub gender: Option<Gender>,
    pub goal: Option<FitnessGoal>,
    /// True once the biometric profile is complete
    pub onboarded: bool,
    /// Daily calorie goal computed when onboarding completed
    pub calorie_goal: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Extract the complete biometric profile, or report which fields are
    /// still missing or non-positive.
    pub fn biometrics(&self) -> Result<BiometricProfile, ProfileError> {
        let mut missing = Vec::new();

        let weight_kg = match self.weight_kg {
            Some(w) if w > 0.0 => Some(w),
            _ => {
                missing.push("weight_kg");
                None
            }
        };
        let height_cm = match self.height_cm {
            Some(h) if h > 0.0 => Some(h),
            _ => {
                missing.push("height_cm");
                None
            }
        };
        let age_years = match self.age_years {
            Some(a) if a > 0 => Some(a),
            _ => {
                missing.push("age_years");
                None
            }
        };
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }

        if !missing.is_empty() {
            return Err(ProfileError::Incomplete { missing });
        }

        Ok(BiometricProfile {
            weight_kg: weight_kg.unwrap_or_default(),
            height_cm: height_cm.unwrap_or_default(),
            age_years: age_years.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            goal: self.goal.unwrap_or_default(),
        })
    }
}

/// A logged meal
///
/// Immutable once created; the timestamp is assigned by the server at
/// insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrates_g: f64,
    pub image_url: Option<String>,
    pub logged_at: DateTime<Utc>,
}

/// A logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_name: String,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub logged_at: DateTime<Utc>,
}
