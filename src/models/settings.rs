use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Companion-wide preferences. Single persisted row; `has_medication`
/// controls whether the frontend asks the medication question at all.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanionSettings {
    pub has_medication: bool,
    pub med_name: String,
    pub target_sleep_hours: i32,
    pub updated_at: DateTime<Utc>,
}

impl CompanionSettings {
    pub fn defaults() -> Self {
        Self {
            has_medication: false,
            med_name: String::new(),
            target_sleep_hours: 7,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    pub has_medication: Option<bool>,
    #[validate(length(max = 100, message = "Medication name too long"))]
    pub med_name: Option<String>,
    #[validate(range(min = 1, max = 24, message = "Target sleep hours must be between 1 and 24"))]
    pub target_sleep_hours: Option<i32>,
}
