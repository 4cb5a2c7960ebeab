use crate::errors::AppError;
use crate::models::{CompletionHistory, Habit, HabitUpdate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Everything the service persists: habit records in insertion order plus
/// one completion log per habit id. The per-habit map keeps at most one
/// record per date; writing an existing date replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub completions: BTreeMap<String, CompletionHistory>,
}

impl AppData {
    pub fn habits_for(&self, user: &str) -> Vec<&Habit> {
        self.habits.iter().filter(|habit| habit.user == user).collect()
    }

    pub fn find_habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == habit_id)
    }

    pub fn insert_habit(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    /// Applies the provided fields, leaving absent ones untouched. Returns
    /// false when no habit matches.
    pub fn apply_update(&mut self, habit_id: &str, update: HabitUpdate) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == habit_id) else {
            return false;
        };
        if let Some(name) = update.name {
            habit.name = name;
        }
        if let Some(description) = update.description {
            habit.description = Some(description);
        }
        if let Some(category) = update.category {
            habit.category = category;
        }
        if let Some(icon) = update.icon {
            habit.icon = icon;
        }
        if let Some(color) = update.color {
            habit.color = color;
        }
        true
    }

    /// Removes the habit and its completion log. Returns false when no habit
    /// matches.
    pub fn remove_habit(&mut self, habit_id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != habit_id);
        if self.habits.len() == before {
            return false;
        }
        self.completions.remove(habit_id);
        true
    }

    /// Completion log for one habit; empty when nothing was ever recorded.
    pub fn completion_history(&self, habit_id: &str) -> CompletionHistory {
        self.completions.get(habit_id).cloned().unwrap_or_default()
    }

    /// Number of habits with a completed record on the given date, scanning
    /// every stored log.
    pub fn completions_on(&self, date: &str) -> usize {
        self.completions
            .values()
            .filter(|history| history.get(date).copied().unwrap_or(false))
            .count()
    }

    pub fn upsert_completion(&mut self, habit_id: &str, date: String, completed: bool) {
        self.completions
            .entry(habit_id.to_string())
            .or_default()
            .insert(date, completed);
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABITS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
