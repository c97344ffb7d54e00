//! Random event selection and application.

use super::data::{RandomEventDef, RANDOM_EVENTS};
use crate::core::effects::apply_effects;
use crate::core::game_event::GameEvent;
use crate::core::game_state::GameState;
use rand::Rng;

/// Pick one event uniformly. Draws are independent across calls.
pub fn roll_random_event<R: Rng>(rng: &mut R) -> &'static RandomEventDef {
    &RANDOM_EVENTS[rng.gen_range(0..RANDOM_EVENTS.len())]
}

/// Apply a specific event to the state.
pub fn apply_random_event(state: &mut GameState, def: &'static RandomEventDef) -> GameEvent {
    apply_effects(state, def.effects);
    tracing::debug!(event = ?def.id, day = state.day, "random event");
    GameEvent::RandomEvent {
        id: def.id,
        text: def.text,
    }
}

/// Fire one random event.
pub fn fire_random_event<R: Rng>(state: &mut GameState, rng: &mut R) -> GameEvent {
    let def = roll_random_event(rng);
    apply_random_event(state, def)
}

/// Fire one random event with the given probability.
pub fn maybe_fire_random_event<R: Rng>(
    state: &mut GameState,
    chance: f64,
    rng: &mut R,
) -> Option<GameEvent> {
    if rng.gen::<f64>() < chance {
        Some(fire_random_event(state, rng))
    } else {
        None
    }
}
