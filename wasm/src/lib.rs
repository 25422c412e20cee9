//! CalSnap WASM Module
//!
//! WebAssembly bindings over the shared nutrition formulas so the browser
//! can render BMI and calorie-goal previews without a round trip.

use calsnap_shared::models::{BiometricProfile, FitnessGoal, Gender};
use calsnap_shared::nutrition;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm), one decimal place.
/// Returns 0 for a non-positive height.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    nutrition::calculate_bmi(weight_kg, height_cm)
}

/// Classify a BMI value into its display label
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    nutrition::classify_bmi(bmi).description().to_string()
}

/// Calculate the daily calorie goal for the given biometrics
///
/// Unrecognized gender/goal strings degrade to "other"/"maintain".
#[wasm_bindgen]
pub fn calorie_goal(weight_kg: f64, height_cm: f64, age_years: i32, gender: &str, goal: &str) -> i32 {
    let profile = BiometricProfile {
        weight_kg,
        height_cm,
        age_years,
        gender: Gender::parse_lossy(gender),
        goal: FitnessGoal::parse_lossy(goal),
    };
    nutrition::calculate_calorie_goal(&profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_binding() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_category_binding() {
        assert_eq!(bmi_category(22.9), "Healthy Weight");
        assert_eq!(bmi_category(24.95), "Obese");
    }

    #[test]
    fn test_calorie_goal_binding() {
        assert_eq!(calorie_goal(70.0, 175.0, 30, "male", "lose"), 1509);
        // Lossy parsing falls back to maintain
        assert_eq!(
            calorie_goal(70.0, 175.0, 30, "male", "bulk"),
            calorie_goal(70.0, 175.0, 30, "male", "maintain")
        );
    }
}
