//! Bounded stat arithmetic and the economy primitives.
//!
//! Every mutator clamps as it writes, so energy, mood and skills never leave
//! [0, 100] and money never goes below zero.

use super::constants::{SKILL_MAX, STAT_MAX};
use super::game_state::{GameState, SkillKind};

/// Apply a signed delta to a bounded stat, clamping into [0, 100].
pub fn apply_stat_delta(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(0, i64::from(STAT_MAX)) as u32
}

/// Raise a skill, capping at 100.
pub fn capped_skill(current: u32, amount: u32) -> u32 {
    current.saturating_add(amount).min(SKILL_MAX)
}

impl GameState {
    /// Spend money, flooring at zero. Affordability is the caller's check.
    pub fn pay(&mut self, amount: u64) {
        self.money = self.money.saturating_sub(amount);
    }

    pub fn earn(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.money >= amount
    }

    pub fn gain_skill(&mut self, kind: SkillKind, amount: u32) {
        let skill = self.skills.get_mut(kind);
        *skill = capped_skill(*skill, amount);
    }

    pub fn use_energy(&mut self, amount: u32) {
        self.energy = apply_stat_delta(self.energy, -(amount.min(STAT_MAX) as i32));
    }

    pub fn gain_energy(&mut self, amount: u32) {
        self.energy = apply_stat_delta(self.energy, amount.min(STAT_MAX) as i32);
    }

    pub fn change_energy(&mut self, delta: i32) {
        self.energy = apply_stat_delta(self.energy, delta);
    }

    pub fn change_mood(&mut self, delta: i32) {
        self.mood = apply_stat_delta(self.mood, delta);
    }
}
