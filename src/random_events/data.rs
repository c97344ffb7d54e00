//! The flavor-event table.

use crate::core::effects::Effect;
use crate::core::game_state::SkillKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomEventId {
    SharedKimchi,
    LaptopFan,
    CatVideo,
    MissedBus,
    Inspiration,
}

/// A narrative line paired with what it does to the state.
#[derive(Debug, Clone)]
pub struct RandomEventDef {
    pub id: RandomEventId,
    pub text: &'static str,
    pub effects: &'static [Effect],
}

/// Every event is equally likely.
pub const RANDOM_EVENTS: &[RandomEventDef] = &[
    RandomEventDef {
        id: RandomEventId::SharedKimchi,
        text: "이웃이 남는 김치를 나눠줬다. 에너지+8",
        effects: &[Effect::Energy(8)],
    },
    RandomEventDef {
        id: RandomEventId::LaptopFan,
        text: "노트북 팬이 비명을 질렀다. 기분-6, 수리비 ₩10",
        effects: &[Effect::Mood(-6), Effect::Pay(10)],
    },
    RandomEventDef {
        id: RandomEventId::CatVideo,
        text: "귀여운 고양이 영상을 봤다. 기분+6",
        effects: &[Effect::Mood(6)],
    },
    RandomEventDef {
        id: RandomEventId::MissedBus,
        text: "버스 놓침. 기분-3",
        effects: &[Effect::Mood(-3)],
    },
    RandomEventDef {
        id: RandomEventId::Inspiration,
        text: "알 수 없는 영감이 스쳤다. 코딩+3",
        effects: &[Effect::Skill(SkillKind::Code, 3)],
    },
];

pub fn get_random_event_def(id: RandomEventId) -> Option<&'static RandomEventDef> {
    RANDOM_EVENTS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_effects() {
        for def in RANDOM_EVENTS {
            assert!(!def.text.is_empty());
            assert!(!def.effects.is_empty(), "{:?} does nothing", def.id);
        }
    }

    #[test]
    fn test_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for def in RANDOM_EVENTS {
            assert!(ids.insert(def.id), "Duplicate event ID: {:?}", def.id);
        }
    }

    #[test]
    fn test_lookup() {
        let def = get_random_event_def(RandomEventId::LaptopFan).unwrap();
        assert_eq!(def.effects, &[Effect::Mood(-6), Effect::Pay(10)]);
    }
}
