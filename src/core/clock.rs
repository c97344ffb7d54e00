//! In-game clock.
//!
//! Time only moves when an action calls [`advance`]. Each time the hour wraps
//! past midnight the day counter increments and the daily tick runs (mood
//! drift, then a chance of one random event). Rent is checked according to
//! the configured [`BillPolicy`].

use super::bills::check_bills;
use super::config::{BillPolicy, GameConfig};
use super::constants::HOURS_PER_DAY;
use super::game_event::GameEvent;
use super::game_state::GameState;
use crate::random_events::maybe_fire_random_event;
use rand::Rng;

/// Advance the clock by `hours`. A no-op once the game is over or for zero hours.
///
/// With [`BillPolicy::EveryRolledDay`] the rent check runs after each rolled
/// day (or once at the end when no day rolled). With
/// [`BillPolicy::FinalDayOnly`] it runs exactly once against the final day,
/// so a due day jumped over mid-advance is missed. If the player is evicted
/// the remaining days are not simulated; the clock stays on the eviction day.
pub fn advance<R: Rng>(
    state: &mut GameState,
    hours: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.game_over || hours == 0 {
        return events;
    }

    state.hour = state.hour.saturating_add(hours);
    let mut rolled = false;
    while state.hour >= HOURS_PER_DAY {
        state.hour -= HOURS_PER_DAY;
        state.day = state.day.saturating_add(1);
        rolled = true;
        events.extend(daily_tick(state, config, rng));

        if config.bill_policy == BillPolicy::EveryRolledDay {
            events.extend(check_bills(state, config));
            if state.game_over {
                state.hour %= HOURS_PER_DAY;
                return events;
            }
        }
    }

    if config.bill_policy == BillPolicy::FinalDayOnly || !rolled {
        events.extend(check_bills(state, config));
    }
    events
}

/// Start-of-day effects: mood drift, then maybe one random event.
pub fn daily_tick<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let low = config.mood_drift_min.min(config.mood_drift_max);
    let high = config.mood_drift_min.max(config.mood_drift_max);
    let drift = rng.gen_range(low..=high);
    state.change_mood(drift);
    tracing::debug!(day = state.day, mood_delta = drift, mood = state.mood, "daily tick");
    events.push(GameEvent::DayStarted {
        day: state.day,
        mood_delta: drift,
    });
    events.extend(maybe_fire_random_event(
        state,
        config.daily_event_chance,
        rng,
    ));
    events
}
