use crate::badges::Badge;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One habit's completion log: ISO `YYYY-MM-DD` date string to completed
/// flag. Absent dates were never tracked, which is not the same as `false`.
/// ISO keys sort lexicographically in chronological order.
pub type CompletionHistory = BTreeMap<String, bool>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub user: String,
}

impl Habit {
    pub fn new(req: NewHabit, user: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            description: req.description,
            category: req.category,
            icon: req.icon,
            color: req.color,
            created_at: Utc::now(),
            user: user.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionToggle {
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct CompletionRow {
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct CompletionLogResponse {
    pub habit_id: String,
    pub completions: Vec<CompletionRow>,
}

/// A habit plus everything derived from its completion log. Never stored;
/// recomputed on every request.
#[derive(Debug, Serialize)]
pub struct HabitWithStats {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_days: u32,
    pub completion_rate: u32,
    pub completion_history: CompletionHistory,
    pub earned_badges: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Rollup across all of a user's habits for one request.
#[derive(Debug, Default, Serialize)]
pub struct FleetStats {
    pub total_habits: u32,
    pub active_streaks: u32,
    pub today_completed: u32,
    pub today_total: u32,
    pub today_percentage: u32,
    pub weekly_progress: Vec<ProgressPoint>,
    pub monthly_progress: Vec<ProgressPoint>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [Category],
}

#[derive(Debug, Serialize)]
pub struct BadgeCatalogResponse {
    pub badges: BTreeMap<&'static str, &'static Badge>,
}
