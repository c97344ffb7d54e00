//! Achievement types and the unlock ledger.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FaithfulPayer,
    FirstOffer,
    NapMaster,
    HomeCook,
    KeyboardPoet,
}

impl AchievementId {
    pub const ALL: [AchievementId; 5] = [
        AchievementId::FaithfulPayer,
        AchievementId::FirstOffer,
        AchievementId::NapMaster,
        AchievementId::HomeCook,
        AchievementId::KeyboardPoet,
    ];

    /// The name stored in the ledger and shown to the player.
    pub fn name(&self) -> &'static str {
        super::data::get_achievement_def(*self).name
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Append-only list of unlocked achievement names, in unlock order.
///
/// Serializes as a plain JSON array of names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    unlocked: Vec<String>,
}

impl Achievements {
    pub fn contains(&self, name: &str) -> bool {
        self.unlocked.iter().any(|n| n == name)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.contains(id.name())
    }

    /// Unlock by name. Returns true if newly unlocked; repeats are no-ops.
    pub fn unlock(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.unlocked.push(name.to_string());
        true
    }

    pub fn unlock_id(&mut self, id: AchievementId) -> bool {
        self.unlock(id.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.unlocked.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.unlocked.clone()
    }
}
