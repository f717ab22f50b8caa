use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::settings::{CompanionSettings, UpdateSettingsRequest};
use crate::AppState;

pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<CompanionSettings>> {
    let settings = sqlx::query_as::<_, CompanionSettings>(
        "SELECT has_medication, med_name, target_sleep_hours, updated_at \
         FROM companion_settings WHERE id = 1",
    )
    .fetch_optional(&state.db)
    .await?
    .unwrap_or_else(CompanionSettings::defaults);

    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsRequest>,
) -> AppResult<Json<CompanionSettings>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let now = Utc::now();
    let settings = sqlx::query_as::<_, CompanionSettings>(
        r#"
        INSERT INTO companion_settings (id, has_medication, med_name, target_sleep_hours, updated_at)
        VALUES (1, COALESCE(?1, 0), COALESCE(?2, ''), COALESCE(?3, 7), ?4)
        ON CONFLICT (id) DO UPDATE SET
            has_medication = COALESCE(?1, companion_settings.has_medication),
            med_name = COALESCE(?2, companion_settings.med_name),
            target_sleep_hours = COALESCE(?3, companion_settings.target_sleep_hours),
            updated_at = ?4
        RETURNING has_medication, med_name, target_sleep_hours, updated_at
        "#,
    )
    .bind(body.has_medication)
    .bind(&body.med_name)
    .bind(body.target_sleep_hours)
    .bind(now)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(settings))
}
