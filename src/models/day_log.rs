use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One self-report record per calendar day. Every report field is optional;
/// absent means "not answered yet", and same-day edits overwrite field-wise.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DayLog {
    pub id: Uuid,
    pub log_date: NaiveDate,
    pub sleep: Option<i32>,
    pub water: Option<i32>,
    pub activity: Option<Activity>,
    pub meal: Option<Meal>,
    pub med_taken: Option<MedTaken>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DayLog {
    /// The canonical "no data" record for a date with nothing reported.
    pub fn empty(log_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            log_date,
            sleep: None,
            water: None,
            activity: None,
            meal: None,
            med_taken: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Rest,
    Walk,
    Move,
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Good,
    Normal,
    Light,
    Skip,
}

/// `None` on the log means "not applicable / not answered" — deliberately
/// distinct from an explicit `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MedTaken {
    Yes,
    No,
}

#[derive(Debug, Deserialize)]
pub struct UpsertDayLogRequest {
    pub log_date: Option<NaiveDate>,
    pub sleep: Option<i32>,
    pub water: Option<i32>,
    pub activity: Option<Activity>,
    pub meal: Option<Meal>,
    pub med_taken: Option<MedTaken>,
}

#[derive(Debug, Deserialize)]
pub struct DayLogQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
