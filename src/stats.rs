use crate::badges::earned_badges;
use crate::errors::AppError;
use crate::models::{CompletionHistory, FleetStats, Habit, HabitWithStats, ProgressPoint};
use crate::storage::AppData;
use crate::streaks::calculate_streaks;
use chrono::{Datelike, Local, NaiveDate};

pub fn habit_with_stats(data: &AppData, habit_id: &str) -> Result<HabitWithStats, AppError> {
    let habit = data
        .find_habit(habit_id)
        .ok_or_else(|| AppError::not_found("Habit not found"))?;
    Ok(compose(habit, data.completion_history(habit_id)))
}

fn compose(habit: &Habit, history: CompletionHistory) -> HabitWithStats {
    let total_days = history.len() as u32;
    let completed_days = history.values().filter(|completed| **completed).count() as u32;
    let completion_rate = percentage(completed_days, total_days);
    let streaks = calculate_streaks(&history);
    let earned = earned_badges(streaks.current, streaks.best, completion_rate);

    HabitWithStats {
        id: habit.id.clone(),
        name: habit.name.clone(),
        description: habit.description.clone(),
        category: habit.category.clone(),
        icon: habit.icon.clone(),
        color: habit.color.clone(),
        created_at: habit.created_at,
        current_streak: streaks.current,
        best_streak: streaks.best,
        total_days,
        completion_rate,
        completion_history: history,
        earned_badges: earned,
    }
}

pub fn fleet_stats(data: &AppData, user: &str) -> Result<FleetStats, AppError> {
    fleet_stats_at(Local::now().date_naive(), data, user)
}

pub fn fleet_stats_at(today: NaiveDate, data: &AppData, user: &str) -> Result<FleetStats, AppError> {
    let habits = data.habits_for(user);
    if habits.is_empty() {
        return Ok(FleetStats::default());
    }

    let today_total = habits.len() as u32;
    let today_completed = data.completions_on(&date_key(today)) as u32;

    let active_streaks = habits
        .iter()
        .filter(|habit| calculate_streaks(&data.completion_history(&habit.id)).current > 0)
        .count() as u32;

    let weekly_progress = trailing_progress(today, data, today_total, 7)?;
    let monthly_progress = trailing_progress(today, data, today_total, 30)?;

    Ok(FleetStats {
        total_habits: today_total,
        active_streaks,
        today_completed,
        today_total,
        today_percentage: percentage(today_completed, today_total),
        weekly_progress,
        monthly_progress,
    })
}

fn trailing_progress(
    today: NaiveDate,
    data: &AppData,
    total: u32,
    days: u32,
) -> Result<Vec<ProgressPoint>, AppError> {
    let mut points = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let date = window_date(today, offset)?;
        let completed = data.completions_on(&date_key(date)) as u32;
        points.push(ProgressPoint {
            date: date.to_string(),
            completed,
            total,
            percentage: percentage(completed, total),
        });
    }
    points.reverse(); // generated newest-first, reported oldest-first
    Ok(points)
}

/// Steps back through the day-of-month only. Offsets reaching past day 1
/// have no date in the current month and are reported as errors, never
/// wrapped into the previous month.
fn window_date(today: NaiveDate, offset: u32) -> Result<NaiveDate, AppError> {
    let day = i64::from(today.day()) - i64::from(offset);
    u32::try_from(day)
        .ok()
        .and_then(|day| today.with_day(day))
        .ok_or_else(|| {
            AppError::computation(format!(
                "progress window underflow: {today} has no day {day} in its month"
            ))
        })
}

fn percentage(completed: u32, total: u32) -> u32 {
    if total > 0 { completed * 100 / total } else { 0 }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
