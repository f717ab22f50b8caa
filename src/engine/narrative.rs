use crate::engine::emotion::Emotion;
use crate::engine::state::State;

/// End-of-day message for the rest screen. Emotion copy takes precedence;
/// thirsty has no dedicated message and falls through to the state copy.
pub fn rest_message(state: State, emotion: Option<Emotion>) -> &'static str {
    match emotion {
        Some(Emotion::Sleepy) => {
            "…Fwaah. Sleep ran shallow today, didn't it? Let's rest up properly."
        }
        Some(Emotion::Hungry) => {
            "…Mm. There wasn't much time to fill your belly today. \
             Even a little tomorrow will be plenty."
        }
        Some(Emotion::Cared) => {
            "You really looked after your body today. \
             That one step alone matters a lot."
        }
        Some(Emotion::Fragile) => {
            "The medicine didn't happen today. Still, you made it all the way here, \
             and that counts. One dose remembered tomorrow is enough."
        }
        Some(Emotion::Proud) => "…Mm. Today, you were something to be proud of.",
        _ => match state {
            State::Good => {
                "You walked well and lived well today. \
                 The forest feels a little brighter for it."
            }
            State::Normal => "The day ended quietly. Not a bad day at all.",
            State::Tired => {
                "Your body looks a little heavy. \
                 Sleep is the best provision for the road."
            }
            State::Exhausted => {
                "Let's rest here tonight. \
                 A night without pushing is still a proper day."
            }
            State::None => {
                "The forest is quietly turning to night. \
                 Come back whenever you remember to."
            }
        },
    }
}
