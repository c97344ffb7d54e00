//! Declarative stat effects.
//!
//! Random events and actions describe what they do as a list of [`Effect`]s;
//! [`apply_effects`] is the only place those descriptions touch the state.

use super::game_state::{GameState, SkillKind};

/// One change to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Energy(i32),
    Mood(i32),
    Earn(u64),
    Pay(u64),
    Skill(SkillKind, u32),
}

pub fn apply_effect(state: &mut GameState, effect: Effect) {
    match effect {
        Effect::Energy(delta) => state.change_energy(delta),
        Effect::Mood(delta) => state.change_mood(delta),
        Effect::Earn(amount) => state.earn(amount),
        Effect::Pay(amount) => state.pay(amount),
        Effect::Skill(kind, amount) => state.gain_skill(kind, amount),
    }
}

pub fn apply_effects(state: &mut GameState, effects: &[Effect]) {
    for &effect in effects {
        apply_effect(state, effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_effects_in_order() {
        let mut state = GameState::default();
        state.money = 15;
        apply_effects(
            &mut state,
            &[
                Effect::Mood(-6),
                Effect::Pay(10),
                Effect::Energy(8),
                Effect::Skill(SkillKind::Code, 3),
                Effect::Earn(2),
            ],
        );
        assert_eq!(state.mood, 64);
        assert_eq!(state.money, 7);
        assert_eq!(state.energy, 78);
        assert_eq!(state.skills.code, 3);
    }

    #[test]
    fn test_effects_respect_bounds() {
        let mut state = GameState::default();
        state.money = 4;
        state.energy = 98;
        apply_effects(&mut state, &[Effect::Pay(10), Effect::Energy(8)]);
        assert_eq!(state.money, 0);
        assert_eq!(state.energy, 100);
    }
}
