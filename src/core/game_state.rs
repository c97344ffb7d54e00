//! The root game-state aggregate.

use super::config::GameConfig;
use super::constants::{
    FIRST_RENT_DUE_DAY, HOURS_PER_DAY, SKILL_MAX, START_DAY, START_ENERGY, START_HOUR, START_MOOD,
    STAT_MAX,
};
use super::error::InvalidState;
use crate::achievements::Achievements;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Locations the player can be at. The place decides which actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    #[default]
    Home,
    Library,
    Pc,
    Convenience,
    Cafe,
    Company,
}

impl Place {
    /// All places in display order.
    pub const ALL: [Place; 6] = [
        Place::Home,
        Place::Library,
        Place::Pc,
        Place::Convenience,
        Place::Cafe,
        Place::Company,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Place::Home => "원룸",
            Place::Library => "도서관",
            Place::Pc => "PC방",
            Place::Convenience => "편의점",
            Place::Cafe => "카페",
            Place::Company => "회사",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Place::Home => "🛏️",
            Place::Library => "📚",
            Place::Pc => "🖥️",
            Place::Convenience => "🛒",
            Place::Cafe => "☕",
            Place::Company => "🏢",
        }
    }
}

/// The three trainable skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Code,
    Design,
    Talk,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Code, SkillKind::Design, SkillKind::Talk];

    pub fn name(&self) -> &'static str {
        match self {
            SkillKind::Code => "코딩",
            SkillKind::Design => "디자인",
            SkillKind::Talk => "커뮤니케이션",
        }
    }
}

/// Skill levels, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skills {
    pub code: u32,
    pub design: u32,
    pub talk: u32,
}

impl Skills {
    pub fn get(&self, kind: SkillKind) -> u32 {
        match kind {
            SkillKind::Code => self.code,
            SkillKind::Design => self.design,
            SkillKind::Talk => self.talk,
        }
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> &mut u32 {
        match kind {
            SkillKind::Code => &mut self.code,
            SkillKind::Design => &mut self.design,
            SkillKind::Talk => &mut self.talk,
        }
    }

    pub fn total(&self) -> u32 {
        self.code + self.design + self.talk
    }
}

/// Everything that makes up one play-through.
///
/// Field names serialize in camelCase so JSON blobs from the browser
/// version of the game load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub day: u32,
    pub hour: u32,
    pub energy: u32,
    pub mood: u32,
    pub money: u64,
    pub skills: Skills,
    pub place: Place,
    pub rent_due_day: u32,
    pub rent_amount: u64,
    /// Inventory slot, reserved. Nothing mutates it yet.
    #[serde(default)]
    pub owned: BTreeSet<String>,
    #[serde(default)]
    pub achievements: Achievements,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub game_over_reason: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    /// Fresh state for a new game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            day: START_DAY,
            hour: START_HOUR,
            energy: START_ENERGY,
            mood: START_MOOD,
            money: config.starting_money,
            skills: Skills::default(),
            place: Place::Home,
            rent_due_day: FIRST_RENT_DUE_DAY,
            rent_amount: config.rent_amount,
            owned: BTreeSet::new(),
            achievements: Achievements::default(),
            game_over: false,
            game_over_reason: None,
        }
    }

    /// Check every invariant of the data model.
    ///
    /// The engine assumes states it receives are valid; the persistence layer
    /// calls this before handing a loaded state over.
    pub fn validate(&self) -> Result<(), InvalidState> {
        if self.day == 0 {
            return Err(InvalidState::DayZero);
        }
        if self.hour >= HOURS_PER_DAY {
            return Err(InvalidState::HourOutOfRange(self.hour));
        }
        if self.energy > STAT_MAX {
            return Err(InvalidState::StatOutOfRange {
                stat: "energy",
                value: self.energy,
            });
        }
        if self.mood > STAT_MAX {
            return Err(InvalidState::StatOutOfRange {
                stat: "mood",
                value: self.mood,
            });
        }
        for kind in SkillKind::ALL {
            let value = self.skills.get(kind);
            if value > SKILL_MAX {
                return Err(InvalidState::SkillOutOfRange { skill: kind, value });
            }
        }
        let mut seen = HashSet::new();
        for name in self.achievements.iter() {
            if !seen.insert(name) {
                return Err(InvalidState::DuplicateAchievement(name.to_string()));
            }
        }
        Ok(())
    }

    /// Parse a JSON save blob.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to a JSON save blob.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();
        assert_eq!(state.day, 1);
        assert_eq!(state.hour, 8);
        assert_eq!(state.energy, 70);
        assert_eq!(state.mood, 70);
        assert_eq!(state.money, 120);
        assert_eq!(state.skills, Skills::default());
        assert_eq!(state.place, Place::Home);
        assert_eq!(state.rent_due_day, 7);
        assert_eq!(state.rent_amount, 200);
        assert!(state.owned.is_empty());
        assert!(state.achievements.is_empty());
        assert!(!state.game_over);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_new_uses_config_money_and_rent() {
        let config = GameConfig {
            starting_money: 500,
            rent_amount: 300,
            ..GameConfig::default()
        };
        let state = GameState::new(&config);
        assert_eq!(state.money, 500);
        assert_eq!(state.rent_amount, 300);
    }

    #[test]
    fn test_loads_browser_blob() {
        let json = r#"{
            "day": 3, "hour": 21, "energy": 40, "mood": 55, "money": 87,
            "skills": {"code": 12, "design": 3, "talk": 7},
            "place": "convenience", "rentDueDay": 7, "rentAmount": 200,
            "owned": [], "achievements": ["키보드의 시인"], "gameOver": false
        }"#;
        let state = GameState::from_json(json).unwrap();
        assert_eq!(state.day, 3);
        assert_eq!(state.place, Place::Convenience);
        assert_eq!(state.skills.code, 12);
        assert!(state.achievements.contains("키보드의 시인"));
        assert_eq!(state.game_over_reason, None);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = GameState::default().to_json().unwrap();
        assert!(json.contains("\"rentDueDay\":7"));
        assert!(json.contains("\"gameOver\":false"));
        assert!(json.contains("\"place\":\"home\""));
    }

    #[test]
    fn test_validate_rejects_broken_states() {
        let mut state = GameState::default();
        state.hour = 24;
        assert_eq!(state.validate(), Err(InvalidState::HourOutOfRange(24)));

        let mut state = GameState::default();
        state.mood = 101;
        assert!(matches!(
            state.validate(),
            Err(InvalidState::StatOutOfRange { stat: "mood", .. })
        ));

        let mut state = GameState::default();
        state.skills.design = 140;
        assert!(matches!(
            state.validate(),
            Err(InvalidState::SkillOutOfRange {
                skill: SkillKind::Design,
                value: 140
            })
        ));

        let mut state = GameState::default();
        state.day = 0;
        assert_eq!(state.validate(), Err(InvalidState::DayZero));
    }

    #[test]
    fn test_validate_rejects_duplicate_achievements() {
        let json = r#"{
            "day": 1, "hour": 8, "energy": 70, "mood": 70, "money": 120,
            "skills": {"code": 0, "design": 0, "talk": 0},
            "place": "home", "rentDueDay": 7, "rentAmount": 200,
            "achievements": ["첫 합격", "첫 합격"]
        }"#;
        let state = GameState::from_json(json).unwrap();
        assert_eq!(
            state.validate(),
            Err(InvalidState::DuplicateAchievement("첫 합격".to_string()))
        );
    }

    #[test]
    fn test_skills_accessors() {
        let mut skills = Skills::default();
        *skills.get_mut(SkillKind::Talk) = 9;
        assert_eq!(skills.get(SkillKind::Talk), 9);
        assert_eq!(skills.total(), 9);
    }
}
