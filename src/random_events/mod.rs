//! Daily flavor events that nudge the player's stats.

pub mod data;
pub mod logic;

pub use data::{get_random_event_def, RandomEventDef, RandomEventId, RANDOM_EVENTS};
pub use logic::{apply_random_event, fire_random_event, maybe_fire_random_event, roll_random_event};
