//! CalSnap Shared Library
//!
//! This crate contains the pure domain logic shared across the backend and
//! WASM modules: data models, nutrition formulas, and daily log aggregation.
//! Nothing in here performs I/O.

pub mod daily_log;
pub mod errors;
pub mod models;
pub mod nutrition;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use nutrition::{calculate_bmi, calculate_bmr, calculate_calorie_goal, classify_bmi, BmiCategory};
