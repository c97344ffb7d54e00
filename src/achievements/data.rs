//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FaithfulPayer,
        name: "성실한 납부자",
        description: "월세를 제때 납부했다",
        icon: "🏠",
    },
    AchievementDef {
        id: AchievementId::FirstOffer,
        name: "첫 합격",
        description: "면접에 처음 합격했다",
        icon: "✅",
    },
    AchievementDef {
        id: AchievementId::NapMaster,
        name: "낮잠의 달인",
        description: "원룸에서 푹 잤다",
        icon: "🛏️",
    },
    AchievementDef {
        id: AchievementId::HomeCook,
        name: "자취요리 1급",
        description: "직접 밥을 해먹었다",
        icon: "🍳",
    },
    AchievementDef {
        id: AchievementId::KeyboardPoet,
        name: "키보드의 시인",
        description: "도서관에서 코딩 공부를 했다",
        icon: "🧑‍💻",
    },
];

/// Look up the definition for an achievement. The table follows `AchievementId` order.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    &ALL_ACHIEVEMENTS[id as usize]
}

/// Look up a definition by its ledger name.
pub fn find_by_name(name: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        for id in AchievementId::ALL {
            assert_eq!(get_achievement_def(id).id, id);
        }
    }

    #[test]
    fn test_names_are_unique() {
        use std::collections::HashSet;
        let mut names = HashSet::new();
        for def in ALL_ACHIEVEMENTS {
            assert!(names.insert(def.name), "Duplicate name: {}", def.name);
        }
    }

    #[test]
    fn test_find_by_name() {
        let def = find_by_name("첫 합격").unwrap();
        assert_eq!(def.id, AchievementId::FirstOffer);
        assert!(find_by_name("없는 업적").is_none());
    }
}
