//! Game configuration.
//!
//! Tunables live in `config.json` under the platform data directory. A
//! missing or unreadable file silently falls back to [`GameConfig::default`].

use super::constants::{
    DAILY_EVENT_CHANCE, INTERVIEW_JITTER, INTERVIEW_JITTER_MAX, LOG_CAPACITY, MOOD_DRIFT_LIMIT,
    MOOD_DRIFT_MAX, MOOD_DRIFT_MIN, RENT_AMOUNT, RENT_PERIOD_DAYS, START_MONEY,
};
use crate::utils::persistence::{load_json_at_or_default, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

/// When the rent check runs during a multi-day clock advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillPolicy {
    /// Check after every rolled-over day, so no due day can be skipped.
    #[default]
    EveryRolledDay,
    /// Check once, against the final day reached.
    FinalDayOnly,
}

/// Tunable simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Money a fresh game starts with
    pub starting_money: u64,
    /// Rent charged on every due day
    pub rent_amount: u64,
    /// Days between rent payments
    pub rent_period_days: u32,
    /// Chance that a day rollover fires one random event
    pub daily_event_chance: f64,
    /// Lower bound of the daily mood drift (inclusive)
    pub mood_drift_min: i32,
    /// Upper bound of the daily mood drift (inclusive)
    pub mood_drift_max: i32,
    pub bill_policy: BillPolicy,
    /// Maximum number of entries kept in the player log
    pub log_capacity: usize,
    /// Interview jitter is drawn from [-interview_jitter, +interview_jitter]
    pub interview_jitter: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: START_MONEY,
            rent_amount: RENT_AMOUNT,
            rent_period_days: RENT_PERIOD_DAYS,
            daily_event_chance: DAILY_EVENT_CHANCE,
            mood_drift_min: MOOD_DRIFT_MIN,
            mood_drift_max: MOOD_DRIFT_MAX,
            bill_policy: BillPolicy::default(),
            log_capacity: LOG_CAPACITY,
            interview_jitter: INTERVIEW_JITTER,
        }
    }
}

impl GameConfig {
    /// Load `config.json` from the data directory, or defaults.
    pub fn load() -> Self {
        let config: Self = load_json_or_default(CONFIG_FILE);
        config.sanitized()
    }

    /// Load a configuration file from an explicit path, or defaults.
    pub fn load_from(path: &Path) -> Self {
        let config: Self = load_json_at_or_default(path);
        config.sanitized()
    }

    /// Write this configuration to `config.json`.
    pub fn save(&self) -> io::Result<()> {
        save_json(CONFIG_FILE, self)
    }

    /// Repair values that would break the simulation's arithmetic.
    pub fn sanitized(mut self) -> Self {
        self.mood_drift_min = self.mood_drift_min.clamp(-MOOD_DRIFT_LIMIT, MOOD_DRIFT_LIMIT);
        self.mood_drift_max = self.mood_drift_max.clamp(-MOOD_DRIFT_LIMIT, MOOD_DRIFT_LIMIT);
        if self.mood_drift_min > self.mood_drift_max {
            std::mem::swap(&mut self.mood_drift_min, &mut self.mood_drift_max);
        }
        if !(0.0..=1.0).contains(&self.daily_event_chance) {
            self.daily_event_chance = DAILY_EVENT_CHANCE;
        }
        self.rent_period_days = self.rent_period_days.max(1);
        self.log_capacity = self.log_capacity.max(1);
        self.interview_jitter = self
            .interview_jitter
            .saturating_abs()
            .min(INTERVIEW_JITTER_MAX);
        self
    }
}
