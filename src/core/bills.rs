//! Recurring rent.
//!
//! Rent is due when `day == rent_due_day`. Paying moves the due day forward
//! by the rent period; failing to pay ends the game. There is no partial
//! payment and no grace period.

use super::config::GameConfig;
use super::game_event::GameEvent;
use super::game_state::GameState;
use crate::achievements::{self, AchievementId};

pub const EVICTION_REASON: &str = "월세를 내지 못했습니다. 주인에게 쫓겨났습니다.";

/// Run the rent check for the current day.
pub fn check_bills(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.game_over || state.day != state.rent_due_day {
        return events;
    }

    let amount = state.rent_amount;
    if state.can_afford(amount) {
        state.pay(amount);
        state.rent_due_day = state.rent_due_day.saturating_add(config.rent_period_days);
        tracing::info!(
            day = state.day,
            amount,
            money = state.money,
            next_due_day = state.rent_due_day,
            "rent paid"
        );
        events.push(GameEvent::RentPaid {
            amount,
            next_due_day: state.rent_due_day,
        });
        events.extend(achievements::unlock_id(state, AchievementId::FaithfulPayer));
    } else {
        events.push(end_game(state, EVICTION_REASON));
    }
    events
}

/// Put the state into its terminal failure state.
pub fn end_game(state: &mut GameState, reason: &str) -> GameEvent {
    state.game_over = true;
    state.game_over_reason = Some(reason.to_string());
    tracing::warn!(day = state.day, money = state.money, reason, "game over");
    GameEvent::Evicted {
        reason: reason.to_string(),
    }
}
