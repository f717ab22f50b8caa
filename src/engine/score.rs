use crate::models::day_log::{Activity, DayLog, Meal};

/// Raw wellbeing score: a sum of independent per-field contributions.
/// Absent fields contribute 0, so the score is total over any `DayLog`.
pub fn raw_score(log: &DayLog) -> i32 {
    let mut score = 0;

    if let Some(sleep) = log.sleep {
        if sleep >= 5 {
            score += 2;
        } else if sleep >= 3 {
            score += 1;
        } else {
            score -= 1;
        }
    }

    if let Some(water) = log.water {
        if water >= 3 {
            score += 2;
        } else if water == 2 {
            score += 1;
        } else {
            score -= 1;
        }
    }

    if matches!(log.activity, Some(Activity::Move | Activity::Walk)) {
        score += 1;
    }

    if let Some(meal) = log.meal {
        score += match meal {
            Meal::Good => 2,
            Meal::Normal => 1,
            Meal::Light | Meal::Skip => -1,
        };
    }

    score
}
