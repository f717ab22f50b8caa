use serde::{Deserialize, Serialize};

use crate::engine::score::raw_score;
use crate::models::day_log::DayLog;

/// Coarse wellbeing classification for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    None,
    Good,
    Normal,
    Tired,
    Exhausted,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::None => "none",
            State::Good => "good",
            State::Normal => "normal",
            State::Tired => "tired",
            State::Exhausted => "exhausted",
        }
    }
}

/// A day with none of sleep/water/activity/meal reported is `None` no matter
/// what — a medication answer alone does not count as data.
pub fn classify(log: &DayLog) -> State {
    if log.sleep.is_none() && log.water.is_none() && log.activity.is_none() && log.meal.is_none() {
        return State::None;
    }

    let score = raw_score(log);
    if score >= 4 {
        State::Good
    } else if score >= 1 {
        State::Normal
    } else if score >= -1 {
        State::Tired
    } else {
        State::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_log::{Activity, Meal, MedTaken};
    use chrono::NaiveDate;

    fn empty() -> DayLog {
        DayLog::empty(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
    }

    #[test]
    fn test_all_absent_is_none() {
        assert_eq!(classify(&empty()), State::None);
    }

    #[test]
    fn test_med_taken_alone_is_still_none() {
        let mut log = empty();
        log.med_taken = Some(MedTaken::Yes);
        assert_eq!(classify(&log), State::None);
        log.med_taken = Some(MedTaken::No);
        assert_eq!(classify(&log), State::None);
    }

    #[test]
    fn test_full_good_day() {
        // 2 + 2 + 1 + 2 = 7
        let mut log = empty();
        log.sleep = Some(5);
        log.water = Some(3);
        log.activity = Some(Activity::Walk);
        log.meal = Some(Meal::Good);
        assert_eq!(classify(&log), State::Good);
    }

    #[test]
    fn test_worst_day_is_exhausted() {
        // -1 - 1 + 0 - 1 = -3
        let mut log = empty();
        log.sleep = Some(1);
        log.water = Some(1);
        log.activity = Some(Activity::Rest);
        log.meal = Some(Meal::Skip);
        assert_eq!(classify(&log), State::Exhausted);
    }

    // ── threshold boundaries ─────────────────────────────────────────────

    #[test]
    fn test_score_four_is_good() {
        // 2 + 2 = 4
        let mut log = empty();
        log.sleep = Some(5);
        log.water = Some(3);
        assert_eq!(classify(&log), State::Good);
    }

    #[test]
    fn test_score_three_is_normal() {
        // 2 + 1 = 3
        let mut log = empty();
        log.sleep = Some(5);
        log.water = Some(2);
        assert_eq!(classify(&log), State::Normal);
    }

    #[test]
    fn test_score_one_is_normal() {
        let mut log = empty();
        log.sleep = Some(3);
        assert_eq!(classify(&log), State::Normal);
    }

    #[test]
    fn test_score_zero_is_tired() {
        // 1 - 1 = 0
        let mut log = empty();
        log.sleep = Some(3);
        log.water = Some(1);
        assert_eq!(classify(&log), State::Tired);
    }

    #[test]
    fn test_score_minus_one_is_tired() {
        let mut log = empty();
        log.sleep = Some(1);
        assert_eq!(classify(&log), State::Tired);
    }

    #[test]
    fn test_score_minus_two_is_exhausted() {
        let mut log = empty();
        log.sleep = Some(1);
        log.water = Some(1);
        assert_eq!(classify(&log), State::Exhausted);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mut log = empty();
        log.sleep = Some(4);
        log.meal = Some(Meal::Normal);
        assert_eq!(classify(&log), classify(&log));
    }

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&State::Exhausted).unwrap(), "\"exhausted\"");
        assert_eq!(serde_json::to_string(&State::None).unwrap(), "\"none\"");
    }
}
