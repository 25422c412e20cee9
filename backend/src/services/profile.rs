//! Profile service - business logic for user profile management
//!
//! Profiles are bootstrapped lazily on first authenticated access and
//! updated with merge semantics. Whenever an update leaves the biometric
//! profile complete, the daily calorie goal is recomputed and stored and
//! the profile is marked onboarded.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::events::{ProfileEvent, ProfileEvents};
use crate::repositories::{ProfileChanges, ProfileRepository};
use calsnap_shared::models::UserProfile;
use calsnap_shared::nutrition::{calculate_bmi, calculate_calorie_goal, classify_bmi};
use calsnap_shared::types::{UpdateProfileRequest, UserProfileResponse};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Fetch the caller's profile, creating a skeleton on first access
    pub async fn get_or_create(
        db: &PgPool,
        events: &ProfileEvents,
        user: &AuthUser,
    ) -> Result<UserProfile, ApiError> {
        if let Some(profile) = ProfileRepository::find_by_id(db, user.user_id).await? {
            return Ok(profile);
        }

        let email = user.email.as_deref().unwrap_or_default();
        let created =
            ProfileRepository::create_skeleton(db, user.user_id, email, user.name.as_deref())
                .await?;
        if created {
            info!(user_id = %user.user_id, "created skeleton profile");
            events.publish(ProfileEvent::Created {
                user_id: user.user_id,
            });
        }

        // Re-read: under a race the concurrent writer's row is the one we want.
        ProfileRepository::find_by_id(db, user.user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
    }

    /// Merge a partial update into the profile
    ///
    /// When the merged profile has complete biometrics the calorie goal is
    /// recomputed from them and persisted alongside the onboarded flag.
    pub async fn update(
        db: &PgPool,
        events: &ProfileEvents,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        req.validate()?;

        let changes = ProfileChanges {
            display_name: req.display_name,
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            age_years: req.age_years,
            gender: req.gender,
            goal: req.goal,
        };

        let merged = ProfileRepository::merge(db, user_id, changes)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        let profile = match merged.biometrics() {
            Ok(biometrics) => {
                let goal = calculate_calorie_goal(&biometrics);
                ProfileRepository::set_calorie_goal(db, user_id, goal).await?;
                info!(user_id = %user_id, calorie_goal = goal, "calorie goal recomputed");

                UserProfile {
                    calorie_goal: Some(goal),
                    onboarded: true,
                    ..merged
                }
            }
            // Incomplete biometrics leave the stored goal untouched.
            Err(_) => merged,
        };

        events.publish(ProfileEvent::Updated { user_id });
        Ok(profile)
    }

    /// Build the API response, deriving BMI when weight and height are set
    pub fn to_response(profile: UserProfile) -> UserProfileResponse {
        let bmi = match (profile.weight_kg, profile.height_cm) {
            (Some(weight), Some(height)) => Some(calculate_bmi(weight, height)),
            _ => None,
        };
        let bmi_category = bmi.map(|b| classify_bmi(b).description().to_string());

        UserProfileResponse {
            id: profile.id.to_string(),
            email: profile.email,
            display_name: profile.display_name,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age_years: profile.age_years,
            gender: profile.gender,
            goal: profile.goal,
            onboarded: profile.onboarded,
            calorie_goal: profile.calorie_goal,
            bmi,
            bmi_category,
            created_at: profile.created_at,
        }
    }
}
