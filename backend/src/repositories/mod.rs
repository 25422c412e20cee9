//! Database repositories
//!
//! Provides the data access layer for the profile store and the append-only
//! food/workout log stores.

pub mod food_log;
pub mod profile;
pub mod workout_log;

pub use food_log::{CreateFoodLog, FoodLogRepository};
pub use profile::{ProfileChanges, ProfileRepository};
pub use workout_log::{CreateWorkoutLog, WorkoutLogRepository};
