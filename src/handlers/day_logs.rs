use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::day_log::{DayLog, DayLogQuery, UpsertDayLogRequest};
use crate::AppState;

/// Field-wise upsert for one calendar day: absent request fields leave the
/// stored values untouched, present fields overwrite (last write wins).
pub async fn upsert_day_log(
    State(state): State<AppState>,
    Json(body): Json<UpsertDayLogRequest>,
) -> AppResult<Json<DayLog>> {
    let log_date = body.log_date.unwrap_or_else(|| Local::now().date_naive());

    // Validate ranges
    if let Some(sleep) = body.sleep {
        if !(1..=5).contains(&sleep) {
            return Err(AppError::Validation("Sleep must be between 1 and 5".into()));
        }
    }
    if let Some(water) = body.water {
        if !(1..=4).contains(&water) {
            return Err(AppError::Validation("Water must be between 1 and 4".into()));
        }
    }

    let now = Utc::now();
    let log = sqlx::query_as::<_, DayLog>(
        r#"
        INSERT INTO day_logs (id, log_date, sleep, water, activity, meal, med_taken, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
        ON CONFLICT (log_date) DO UPDATE SET
            sleep = COALESCE(?3, day_logs.sleep),
            water = COALESCE(?4, day_logs.water),
            activity = COALESCE(?5, day_logs.activity),
            meal = COALESCE(?6, day_logs.meal),
            med_taken = COALESCE(?7, day_logs.med_taken),
            updated_at = ?8
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(log_date)
    .bind(body.sleep)
    .bind(body.water)
    .bind(body.activity)
    .bind(body.meal)
    .bind(body.med_taken)
    .bind(now)
    .fetch_one(&state.db)
    .await?;

    if let Some(tx) = state.ws_tx.as_ref() {
        let msg = serde_json::json!({
            "type": "day_log_changed",
            "log_date": log.log_date,
        });
        let _ = tx.send(msg.to_string());
    }

    Ok(Json(log))
}

pub async fn get_day_log(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<DayLog>> {
    let log = sqlx::query_as::<_, DayLog>("SELECT * FROM day_logs WHERE log_date = ?1")
        .bind(date)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("No log recorded for that date".into()))?;

    Ok(Json(log))
}

pub async fn list_day_logs(
    State(state): State<AppState>,
    Query(query): Query<DayLogQuery>,
) -> AppResult<Json<Vec<DayLog>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Local::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Local::now().date_naive());

    let logs = sqlx::query_as::<_, DayLog>(
        r#"
        SELECT * FROM day_logs
        WHERE log_date BETWEEN ?1 AND ?2
        ORDER BY log_date DESC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(logs))
}
