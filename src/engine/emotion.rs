use serde::{Deserialize, Serialize};

use crate::engine::score::raw_score;
use crate::engine::state::State;
use crate::models::day_log::{DayLog, Meal, MedTaken};

/// The single dominant emotion shown for a day, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sleepy,
    Thirsty,
    Hungry,
    Cared,
    Fragile,
    Proud,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Sleepy => "sleepy",
            Emotion::Thirsty => "thirsty",
            Emotion::Hungry => "hungry",
            Emotion::Cared => "cared",
            Emotion::Fragile => "fragile",
            Emotion::Proud => "proud",
        }
    }
}

/// Ordered priority cascade — the first matching rule wins and evaluation
/// stops. Order: sleep deficit, dehydration, hunger, medication taken,
/// medication missed, then score improvement over yesterday. A missing
/// previous record skips the comparison rule entirely.
pub fn classify(log: &DayLog, state: State, previous: Option<&DayLog>) -> Option<Emotion> {
    if matches!(log.sleep, Some(1 | 2)) {
        return Some(Emotion::Sleepy);
    }

    if log.water == Some(1) {
        return Some(Emotion::Thirsty);
    }

    if matches!(log.meal, Some(Meal::Skip | Meal::Light)) {
        return Some(Emotion::Hungry);
    }

    match log.med_taken {
        Some(MedTaken::Yes) => return Some(Emotion::Cared),
        Some(MedTaken::No) => return Some(Emotion::Fragile),
        None => {}
    }

    let previous = previous?;
    if raw_score(log) > raw_score(previous) && state != State::None {
        return Some(Emotion::Proud);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state;
    use crate::models::day_log::Activity;
    use chrono::NaiveDate;

    fn empty() -> DayLog {
        DayLog::empty(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
    }

    fn classify_full(log: &DayLog, previous: Option<&DayLog>) -> Option<Emotion> {
        classify(log, state::classify(log), previous)
    }

    #[test]
    fn test_no_data_no_emotion() {
        assert_eq!(classify_full(&empty(), None), None);
    }

    // ── cascade priority ─────────────────────────────────────────────────

    #[test]
    fn test_sleep_deficit_wins_over_dehydration() {
        let mut log = empty();
        log.sleep = Some(1);
        log.water = Some(1);
        assert_eq!(classify_full(&log, None), Some(Emotion::Sleepy));
    }

    #[test]
    fn test_sleepy_triggers_on_one_and_two_only() {
        for (value, expected) in [
            (1, Some(Emotion::Sleepy)),
            (2, Some(Emotion::Sleepy)),
            (3, None),
            (5, None),
        ] {
            let mut log = empty();
            log.sleep = Some(value);
            assert_eq!(classify_full(&log, None), expected, "sleep={}", value);
        }
    }

    #[test]
    fn test_dehydration_wins_over_hunger() {
        let mut log = empty();
        log.water = Some(1);
        log.meal = Some(Meal::Skip);
        assert_eq!(classify_full(&log, None), Some(Emotion::Thirsty));
    }

    #[test]
    fn test_thirsty_only_at_water_one() {
        let mut log = empty();
        log.water = Some(2);
        assert_eq!(classify_full(&log, None), None);
    }

    #[test]
    fn test_hunger_wins_over_medication() {
        let mut log = empty();
        log.meal = Some(Meal::Light);
        log.med_taken = Some(MedTaken::Yes);
        assert_eq!(classify_full(&log, None), Some(Emotion::Hungry));
    }

    #[test]
    fn test_medication_taken_is_cared() {
        let mut log = empty();
        log.sleep = Some(4);
        log.med_taken = Some(MedTaken::Yes);
        assert_eq!(classify_full(&log, None), Some(Emotion::Cared));
    }

    #[test]
    fn test_medication_missed_is_fragile() {
        let mut log = empty();
        log.sleep = Some(4);
        log.med_taken = Some(MedTaken::No);
        assert_eq!(classify_full(&log, None), Some(Emotion::Fragile));
    }

    // ── improvement over yesterday ───────────────────────────────────────

    #[test]
    fn test_improvement_over_yesterday_is_proud() {
        let mut yesterday = empty();
        yesterday.activity = Some(Activity::Rest); // score 0

        let mut today = empty();
        today.water = Some(3); // score 2, state normal, no other triggers

        assert_eq!(
            classify_full(&today, Some(&yesterday)),
            Some(Emotion::Proud)
        );
    }

    #[test]
    fn test_no_previous_record_means_no_emotion() {
        let mut today = empty();
        today.water = Some(3);
        assert_eq!(classify_full(&today, None), None);
    }

    #[test]
    fn test_equal_score_is_not_proud() {
        let mut yesterday = empty();
        yesterday.water = Some(3);
        let mut today = empty();
        today.water = Some(3);
        assert_eq!(classify_full(&today, Some(&yesterday)), None);
    }

    #[test]
    fn test_proud_requires_some_data_today() {
        // Today all-absent scores 0, beating yesterday's -1, but a `none`
        // state must never read as proud.
        let mut yesterday = empty();
        yesterday.sleep = Some(3);
        yesterday.water = Some(1);
        yesterday.meal = Some(Meal::Skip); // 1 - 1 - 1 = -1

        let today = empty();
        assert_eq!(classify_full(&today, Some(&yesterday)), None);
    }

    #[test]
    fn test_medication_blocks_proud() {
        let yesterday = empty(); // score 0

        let mut today = empty();
        today.water = Some(3);
        today.med_taken = Some(MedTaken::Yes);
        assert_eq!(
            classify_full(&today, Some(&yesterday)),
            Some(Emotion::Cared)
        );
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mut log = empty();
        log.sleep = Some(2);
        let s = state::classify(&log);
        assert_eq!(classify(&log, s, None), classify(&log, s, None));
    }

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Emotion::Sleepy).unwrap(), "\"sleepy\"");
        assert_eq!(serde_json::to_string(&Emotion::Proud).unwrap(), "\"proud\"");
    }
}
