use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::engine::emotion::{self, Emotion};
use crate::engine::lines::{self, LineContext};
use crate::engine::narrative;
use crate::engine::state::{self, State as SlifeState};
use crate::error::AppResult;
use crate::models::day_log::DayLog;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SlifeQuery {
    pub date: Option<NaiveDate>,
}

/// Everything the frontend needs to draw the companion for one day. The
/// engine emits symbolic values; the class names are the only presentation
/// mapping the server owns.
#[derive(Debug, Serialize)]
pub struct SlifeView {
    pub date: NaiveDate,
    pub state: SlifeState,
    pub emotion: Option<Emotion>,
    pub line: Option<String>,
    pub sprite_class: String,
    pub world_class: String,
    pub message: String,
}

pub async fn get_slife(
    State(app): State<AppState>,
    Query(query): Query<SlifeQuery>,
) -> AppResult<Json<SlifeView>> {
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());

    let log = fetch_log(&app.db, date)
        .await?
        .unwrap_or_else(|| DayLog::empty(date));
    let previous = fetch_log(&app.db, date - chrono::Duration::days(1)).await?;

    let state = state::classify(&log);
    let emotion = emotion::classify(&log, state, previous.as_ref());

    let ctx = LineContext {
        meal_today: log.meal,
        meal_yesterday: previous.as_ref().and_then(|p| p.meal),
        water_today: log.water,
        state,
    };
    let line = emotion.and_then(|e| lines::pick_line(&mut rand::thread_rng(), e, &ctx));

    // The sprite wears the emotion when there is one, the state otherwise.
    let face = emotion.map(|e| e.as_str()).unwrap_or_else(|| state.as_str());

    Ok(Json(SlifeView {
        date,
        state,
        emotion,
        line: line.map(str::to_owned),
        sprite_class: format!("slife-{}", face),
        world_class: format!("world-{}", state.as_str()),
        message: narrative::rest_message(state, emotion).to_owned(),
    }))
}

async fn fetch_log(db: &SqlitePool, date: NaiveDate) -> AppResult<Option<DayLog>> {
    let log = sqlx::query_as::<_, DayLog>("SELECT * FROM day_logs WHERE log_date = ?1")
        .bind(date)
        .fetch_optional(db)
        .await?;
    Ok(log)
}
