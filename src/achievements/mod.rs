//! Achievement system.
//!
//! Achievements are an unlock-once ledger of names stored on the game state.
//! Any mutation may unlock one as a side effect; repeats are silent.

pub mod data;
pub mod types;

pub use data::{find_by_name, get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, Achievements};

use crate::core::game_event::GameEvent;
use crate::core::game_state::GameState;

/// Unlock an achievement on the state. Returns the notification if it is new.
pub fn unlock(state: &mut GameState, name: &str) -> Option<GameEvent> {
    if !state.achievements.unlock(name) {
        return None;
    }
    tracing::info!(achievement = name, day = state.day, "achievement unlocked");
    Some(GameEvent::AchievementUnlocked {
        name: name.to_string(),
    })
}

pub fn unlock_id(state: &mut GameState, id: AchievementId) -> Option<GameEvent> {
    unlock(state, id.name())
}
