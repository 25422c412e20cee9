//! Daily log aggregation
//!
//! Reduces a user's food and workout entries for one calendar day into
//! consumed/burned/remaining/net calorie totals. Stateless: the reference
//! date comes from the caller, never from a clock.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodLog, WorkoutLog};

/// Anything carrying a server-assigned log timestamp
pub trait LoggedAt {
    fn logged_at(&self) -> DateTime<Utc>;
}

impl LoggedAt for FoodLog {
    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl LoggedAt for WorkoutLog {
    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

/// Inclusive bounds of a calendar day: 00:00:00.000 through 23:59:59.999
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date.and_time(
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid end-of-day time"),
    );
    (Utc.from_utc_datetime(&start), Utc.from_utc_datetime(&end))
}

/// Keep entries inside the inclusive `[start, end]` window and order them
/// newest-first. The sort is stable: entries with equal timestamps keep
/// their relative input order.
pub fn filter_and_sort<T: LoggedAt>(
    mut entries: Vec<T>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<T> {
    entries.retain(|e| {
        let t = e.logged_at();
        start <= t && t <= end
    });
    entries.sort_by(|a, b| b.logged_at().cmp(&a.logged_at()));
    entries
}

/// Sum of calories over the day's food entries; 0 when empty
pub fn total_consumed(food_logs: &[FoodLog]) -> f64 {
    food_logs.iter().map(|log| log.calories).sum()
}

/// Sum of calories burned over the day's workout entries; 0 when empty
pub fn total_burned(workout_logs: &[WorkoutLog]) -> f64 {
    workout_logs.iter().map(|log| log.calories_burned).sum()
}

/// Calories left against the goal. Unclamped: over-eating a small goal
/// yields a negative figure (any zero-floor belongs to the display layer).
pub fn remaining(goal: f64, consumed: f64, burned: f64) -> f64 {
    goal - consumed + burned
}

/// Net intake for the day (may be negative)
pub fn net(consumed: f64, burned: f64) -> f64 {
    consumed - burned
}

/// Derived calorie totals for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calorie_goal: i32,
    pub consumed: f64,
    pub burned: f64,
    pub remaining: f64,
    pub net: f64,
}

/// Filter both log collections to the given day and reduce them into a
/// summary. Accepts unfiltered per-user collections; filtering is a no-op
/// for input already scoped to the day.
pub fn summarize_day(
    date: NaiveDate,
    calorie_goal: i32,
    food_logs: Vec<FoodLog>,
    workout_logs: Vec<WorkoutLog>,
) -> (DailySummary, Vec<FoodLog>, Vec<WorkoutLog>) {
    let (start, end) = day_window(date);
    let food_logs = filter_and_sort(food_logs, start, end);
    let workout_logs = filter_and_sort(workout_logs, start, end);

    let consumed = total_consumed(&food_logs);
    let burned = total_burned(&workout_logs);

    let summary = DailySummary {
        date,
        calorie_goal,
        consumed,
        burned,
        remaining: remaining(f64::from(calorie_goal), consumed, burned),
        net: net(consumed, burned),
    };

    (summary, food_logs, workout_logs)
}
