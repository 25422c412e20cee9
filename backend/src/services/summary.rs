//! Summary service - the daily dashboard aggregation
//!
//! Fetches the day's food and workout entries concurrently, resolves the
//! calorie goal, and folds everything into one summary. The remaining
//! figure is deliberately unclamped; overshooting the goal shows up as a
//! negative number.

use crate::error::ApiError;
use crate::repositories::{FoodLogRepository, ProfileRepository, WorkoutLogRepository};
use calsnap_shared::daily_log::{day_window, summarize_day};
use calsnap_shared::models::UserProfile;
use calsnap_shared::nutrition::calculate_calorie_goal;
use calsnap_shared::types::DailySummaryResponse;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Summary service for daily aggregation
pub struct SummaryService;

impl SummaryService {
    /// Build the daily summary for one calendar day (UTC)
    pub async fn daily_summary(
        db: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailySummaryResponse, ApiError> {
        let (start, end) = day_window(date);

        let (food, workouts) = tokio::try_join!(
            FoodLogRepository::list_between(db, user_id, start, end),
            WorkoutLogRepository::list_between(db, user_id, start, end),
        )?;

        let profile = ProfileRepository::find_by_id(db, user_id).await?;
        let goal = Self::resolve_goal(profile.as_ref());

        let (summary, food, workouts) = summarize_day(date, goal, food, workouts);
        Ok(DailySummaryResponse::from_parts(summary, food, workouts))
    }

    /// Resolve the calorie goal for the summary
    ///
    /// The stored goal wins. Without one, a complete biometric profile is
    /// enough to derive it on the fly; otherwise the goal reads as zero.
    fn resolve_goal(profile: Option<&UserProfile>) -> i32 {
        let Some(profile) = profile else {
            return 0;
        };
        if let Some(goal) = profile.calorie_goal {
            return goal;
        }
        match profile.biometrics() {
            Ok(b) => calculate_calorie_goal(&b),
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calsnap_shared::models::{BiometricProfile, FitnessGoal, Gender};
    use chrono::Utc;

    fn profile(calorie_goal: Option<i32>, complete: bool) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            display_name: None,
            weight_kg: complete.then_some(70.0),
            height_cm: complete.then_some(175.0),
            age_years: complete.then_some(30),
            gender: complete.then_some(Gender::Male),
            goal: complete.then_some(FitnessGoal::Maintain),
            onboarded: calorie_goal.is_some(),
            calorie_goal,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stored_goal_wins() {
        let p = profile(Some(1800), true);
        assert_eq!(SummaryService::resolve_goal(Some(&p)), 1800);
    }

    #[test]
    fn test_goal_derived_from_complete_biometrics() {
        let p = profile(None, true);
        let expected = calculate_calorie_goal(&BiometricProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            gender: Gender::Male,
            goal: FitnessGoal::Maintain,
        });
        assert_eq!(SummaryService::resolve_goal(Some(&p)), expected);
    }

    #[test]
    fn test_goal_zero_without_profile_or_biometrics() {
        assert_eq!(SummaryService::resolve_goal(None), 0);
        let p = profile(None, false);
        assert_eq!(SummaryService::resolve_goal(Some(&p)), 0);
    }
}
