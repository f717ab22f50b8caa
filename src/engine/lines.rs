use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::emotion::Emotion;
use crate::engine::state::State;
use crate::models::day_log::Meal;

/// Context needed to refine a line pool: today's meal and hydration, the
/// derived state, and yesterday's meal for streak detection. Yesterday
/// missing simply means "no streak".
#[derive(Debug, Clone, Copy)]
pub struct LineContext {
    pub meal_today: Option<Meal>,
    pub meal_yesterday: Option<Meal>,
    pub water_today: Option<i32>,
    pub state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HungerBucket {
    LightOnce,
    LightStreak,
    SkipOnce,
    SkipStreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThirstLevel {
    Mild,
    Medium,
    Severe,
}

const SLEEPY_LINES: [&str; 6] = [
    "……fwah……",
    "sleepy…",
    "eyes… heavy…",
    "mmh… drowsy…",
    "……nodding off…",
    "just… a little nap…",
];

const HUNGRY_LIGHT_ONCE: [&str; 3] = [
    "……grumble……",
    "a little… hungry…",
    "could eat… just a bite of something…",
];

const HUNGRY_LIGHT_STREAK: [&str; 3] = [
    "another light day, huh…",
    "feeling a bit lighter inside…",
    "the light days keep coming…",
];

const HUNGRY_SKIP_ONCE: [&str; 3] = [
    "……tummy… almost empty……",
    "feels like there's nothing in there…",
    "today I feel… a little see-through…",
];

const HUNGRY_SKIP_STREAK: [&str; 3] = [
    "the days without food keep going…",
    "hollowing out, little by little…",
    "even my heart is getting quiet…",
];

const THIRSTY_MILD: [&str; 3] = [
    "…my throat, just a little…",
    "water came up a bit short today…",
    "a small sip… would be nice…",
];

const THIRSTY_MEDIUM: [&str; 3] = [
    "……throat's all dry……",
    "water… please… even a little…",
    "feeling parched… deep inside…",
];

const THIRSTY_SEVERE: [&str; 3] = [
    "……can't… find my voice……",
    "drying… out…",
    "water…………",
];

impl HungerBucket {
    fn pool(self) -> &'static [&'static str] {
        match self {
            HungerBucket::LightOnce => &HUNGRY_LIGHT_ONCE,
            HungerBucket::LightStreak => &HUNGRY_LIGHT_STREAK,
            HungerBucket::SkipOnce => &HUNGRY_SKIP_ONCE,
            HungerBucket::SkipStreak => &HUNGRY_SKIP_STREAK,
        }
    }
}

impl ThirstLevel {
    fn pool(self) -> &'static [&'static str] {
        match self {
            ThirstLevel::Mild => &THIRSTY_MILD,
            ThirstLevel::Medium => &THIRSTY_MEDIUM,
            ThirstLevel::Severe => &THIRSTY_SEVERE,
        }
    }
}

/// Today's meal picks the light/skip family, yesterday's meal decides
/// once vs. streak. Any other meal value falls back to `LightOnce`; the
/// emotion cascade only reaches hungry via light/skip, so that arm is
/// defensive only.
pub fn hunger_bucket(meal_today: Option<Meal>, meal_yesterday: Option<Meal>) -> HungerBucket {
    let streak = matches!(meal_yesterday, Some(Meal::Light | Meal::Skip));
    match meal_today {
        Some(Meal::Light) => {
            if streak {
                HungerBucket::LightStreak
            } else {
                HungerBucket::LightOnce
            }
        }
        Some(Meal::Skip) => {
            if streak {
                HungerBucket::SkipStreak
            } else {
                HungerBucket::SkipOnce
            }
        }
        _ => HungerBucket::LightOnce,
    }
}

/// Hydration value picks the base level; a bad enough day escalates.
/// Water absent reads as severe only when the day already looks rough.
pub fn thirst_level(water: Option<i32>, state: State) -> ThirstLevel {
    match water {
        None => {
            if matches!(state, State::Tired | State::Exhausted) {
                ThirstLevel::Severe
            } else {
                ThirstLevel::Mild
            }
        }
        Some(2) => ThirstLevel::Mild,
        Some(1) => {
            if state == State::Exhausted {
                ThirstLevel::Severe
            } else {
                ThirstLevel::Medium
            }
        }
        Some(_) => ThirstLevel::Mild,
    }
}

/// Uniform draw from the pool for `emotion`, refined by `ctx`. Cared,
/// fragile and proud are presentation triggers with no pooled text. Each
/// call is an independent draw; repeats are allowed.
pub fn pick_line<R: Rng + ?Sized>(
    rng: &mut R,
    emotion: Emotion,
    ctx: &LineContext,
) -> Option<&'static str> {
    let pool: &[&'static str] = match emotion {
        Emotion::Sleepy => &SLEEPY_LINES,
        Emotion::Hungry => hunger_bucket(ctx.meal_today, ctx.meal_yesterday).pool(),
        Emotion::Thirsty => thirst_level(ctx.water_today, ctx.state).pool(),
        Emotion::Cared | Emotion::Fragile | Emotion::Proud => return None,
    };
    pool.choose(rng).copied()
}
