//! Profile repository - partial-merge storage of user profiles
//!
//! One row per user. Updates merge: fields absent from the change set leave
//! the stored values untouched (COALESCE on update), mirroring the
//! document-store semantics the clients expect.

use anyhow::Result;
use calsnap_shared::models::{FitnessGoal, Gender, UserProfile};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Profile row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    email: String,
    display_name: Option<String>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<i32>,
    gender: Option<String>,
    goal: Option<String>,
    onboarded: bool,
    calorie_goal: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        UserProfile {
            id: row.user_id,
            email: row.email,
            display_name: row.display_name,
            weight_kg: row.weight_kg,
            height_cm: row.height_cm,
            age_years: row.age_years,
            // Stored strings degrade to the neutral variants rather than
            // failing the read
            gender: row.gender.as_deref().map(Gender::parse_lossy),
            goal: row.goal.as_deref().map(FitnessGoal::parse_lossy),
            onboarded: row.onboarded,
            calorie_goal: row.calorie_goal,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PROFILE_COLUMNS: &str = "user_id, email, display_name, weight_kg, height_cm, age_years, \
                               gender, goal, onboarded, calorie_goal, created_at, updated_at";

/// Partial change set for a profile merge
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub gender: Option<Gender>,
    pub goal: Option<FitnessGoal>,
}

/// Profile repository
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find a profile by user ID
    pub async fn find_by_id(db: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(row.map(UserProfile::from))
    }

    /// Create a skeleton profile for a newly seen user
    ///
    /// Safe under races: a concurrent insert wins and this becomes a no-op.
    pub async fn create_skeleton(
        db: &PgPool,
        user_id: Uuid,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (user_id, email, display_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(display_name)
        .execute(db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Merge a partial change set into the stored profile
    ///
    /// Absent fields keep their stored values. Returns the merged profile,
    /// or `None` when no profile row exists.
    pub async fn merge(
        db: &PgPool,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            UPDATE profiles SET
                display_name = COALESCE($2, display_name),
                weight_kg = COALESCE($3, weight_kg),
                height_cm = COALESCE($4, height_cm),
                age_years = COALESCE($5, age_years),
                gender = COALESCE($6, gender),
                goal = COALESCE($7, goal),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(changes.display_name)
        .bind(changes.weight_kg)
        .bind(changes.height_cm)
        .bind(changes.age_years)
        .bind(changes.gender.map(|g| g.as_str()))
        .bind(changes.goal.map(|g| g.as_str()))
        .fetch_optional(db)
        .await?;

        Ok(row.map(UserProfile::from))
    }

    /// Store the derived calorie goal and mark the profile onboarded
    pub async fn set_calorie_goal(db: &PgPool, user_id: Uuid, calorie_goal: i32) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET calorie_goal = $2, onboarded = TRUE, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(calorie_goal)
        .execute(db)
        .await?;

        Ok(())
    }
}
