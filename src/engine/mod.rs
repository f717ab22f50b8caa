//! Derivation core: turns a day's self-reports into the companion's state,
//! dominant emotion, and flavor text. Pure functions over immutable `DayLog`
//! snapshots — no storage access, no clocks; the caller supplies today's log
//! and, where a rule compares against yesterday, the previous day's log.

pub mod emotion;
pub mod lines;
pub mod narrative;
pub mod score;
pub mod state;
