use crate::badges::CATALOG;
use crate::errors::AppError;
use crate::models::{
    BadgeCatalogResponse, CategoriesResponse, Category, CompletionLogResponse, CompletionRow,
    CompletionToggle, FleetStats, Habit, HabitUpdate, HabitWithStats, MessageResponse, NewHabit,
};
use crate::state::AppState;
use crate::stats::{fleet_stats, habit_with_stats};
use crate::storage::persist_data;
use axum::{
    extract::{Path, State},
    Json,
};

/// Single-tenant deployments file everything under this scope. Handlers
/// resolve the scope; the derivation code below them never assumes one.
pub const DEFAULT_USER: &str = "default";

static CATEGORIES: [Category; 8] = [
    Category {
        id: "health",
        name: "Health",
        color: "bg-green-100 text-green-800",
    },
    Category {
        id: "productivity",
        name: "Productivity",
        color: "bg-blue-100 text-blue-800",
    },
    Category {
        id: "learning",
        name: "Learning",
        color: "bg-purple-100 text-purple-800",
    },
    Category {
        id: "fitness",
        name: "Fitness",
        color: "bg-orange-100 text-orange-800",
    },
    Category {
        id: "mindfulness",
        name: "Mindfulness",
        color: "bg-indigo-100 text-indigo-800",
    },
    Category {
        id: "social",
        name: "Social",
        color: "bg-pink-100 text-pink-800",
    },
    Category {
        id: "creative",
        name: "Creative",
        color: "bg-yellow-100 text-yellow-800",
    },
    Category {
        id: "personal",
        name: "Personal",
        color: "bg-gray-100 text-gray-800",
    },
];

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Habit Tracker API",
    })
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<Vec<HabitWithStats>>, AppError> {
    let data = state.data.lock().await;
    let mut habits = Vec::new();
    for habit in data.habits_for(DEFAULT_USER) {
        habits.push(habit_with_stats(&data, &habit.id)?);
    }
    Ok(Json(habits))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<Json<HabitWithStats>, AppError> {
    let habit = Habit::new(payload, DEFAULT_USER);
    let habit_id = habit.id.clone();

    let mut data = state.data.lock().await;
    data.insert_habit(habit);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(habit_with_stats(&data, &habit_id)?))
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> Result<Json<HabitWithStats>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(habit_with_stats(&data, &habit_id)?))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(payload): Json<HabitUpdate>,
) -> Result<Json<HabitWithStats>, AppError> {
    let mut data = state.data.lock().await;
    if !data.apply_update(&habit_id, payload) {
        return Err(AppError::not_found("Habit not found"));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(habit_with_stats(&data, &habit_id)?))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    if !data.remove_habit(&habit_id) {
        return Err(AppError::not_found("Habit not found"));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "Habit deleted successfully",
    }))
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(payload): Json<CompletionToggle>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.find_habit(&habit_id).is_none() {
        return Err(AppError::not_found("Habit not found"));
    }
    data.upsert_completion(&habit_id, payload.date.to_string(), payload.completed);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "Completion updated successfully",
    }))
}

pub async fn list_completions(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> Result<Json<CompletionLogResponse>, AppError> {
    let data = state.data.lock().await;
    if data.find_habit(&habit_id).is_none() {
        return Err(AppError::not_found("Habit not found"));
    }
    let completions = data
        .completion_history(&habit_id)
        .into_iter()
        .map(|(date, completed)| CompletionRow { date, completed })
        .collect();

    Ok(Json(CompletionLogResponse {
        habit_id,
        completions,
    }))
}

pub async fn get_fleet_stats(State(state): State<AppState>) -> Result<Json<FleetStats>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(fleet_stats(&data, DEFAULT_USER)?))
}

pub async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: &CATEGORIES,
    })
}

pub async fn get_badges() -> Json<BadgeCatalogResponse> {
    Json(BadgeCatalogResponse {
        badges: CATALOG.iter().map(|badge| (badge.id, badge)).collect(),
    })
}
