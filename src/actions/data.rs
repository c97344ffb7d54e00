//! The action catalog.

use super::types::{ActionDef, ActionId};
use crate::core::game_state::Place;

pub const ACTIONS: &[ActionDef] = &[
    ActionDef {
        id: ActionId::Sleep,
        title: "자기(3h)",
        description: "에너지+30, 기분+5",
        place: Some(Place::Home),
        hours: 3,
        cost: 0,
    },
    ActionDef {
        id: ActionId::BrowseSns,
        title: "SNS 둘러보기(1h)",
        description: "기분이 요동친다",
        place: Some(Place::Home),
        hours: 1,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Cook,
        title: "간단요리(1h, ₩8)",
        description: "에너지+15, 기분+3",
        place: Some(Place::Home),
        hours: 1,
        cost: 8,
    },
    ActionDef {
        id: ActionId::StudyCode,
        title: "코딩 공부(2h)",
        description: "코딩 스킬 상승",
        place: Some(Place::Library),
        hours: 2,
        cost: 0,
    },
    ActionDef {
        id: ActionId::StudyDesign,
        title: "디자인 연구(2h)",
        description: "디자인 스킬 상승",
        place: Some(Place::Library),
        hours: 2,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Freelance,
        title: "프리랜서 디버깅(3h, 수입)",
        description: "코딩 실력만큼 번다",
        place: Some(Place::Pc),
        hours: 3,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Gaming,
        title: "게임으로 휴식(1h, ₩5)",
        description: "기분+8",
        place: Some(Place::Pc),
        hours: 1,
        cost: 5,
    },
    ActionDef {
        id: ActionId::PartTime,
        title: "알바(3h, 수입)",
        description: "말솜씨만큼 번다, 가끔 팁",
        place: Some(Place::Convenience),
        hours: 3,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Lunchbox,
        title: "도시락 구매(₩6)",
        description: "에너지+12, 기분+2",
        place: Some(Place::Convenience),
        hours: 0,
        cost: 6,
    },
    ActionDef {
        id: ActionId::CafeStudy,
        title: "카공(2h, ₩6)",
        description: "코딩 또는 디자인 소폭 상승",
        place: Some(Place::Cafe),
        hours: 2,
        cost: 6,
    },
    ActionDef {
        id: ActionId::Networking,
        title: "잡담으로 네트워킹(1h, ₩4)",
        description: "기분+6, 커뮤니케이션 상승",
        place: Some(Place::Cafe),
        hours: 1,
        cost: 4,
    },
    ActionDef {
        id: ActionId::BrowseJobs,
        title: "채용 공고 탐색(1h)",
        description: "면접 기회를 찾는다",
        place: Some(Place::Company),
        hours: 1,
        cost: 0,
    },
    ActionDef {
        id: ActionId::KillTime,
        title: "시간 떼우기(1h)",
        description: "아무것도 안 하기",
        place: None,
        hours: 1,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Stretch,
        title: "스트레칭(0h)",
        description: "기분 소폭 상승",
        place: None,
        hours: 0,
        cost: 0,
    },
    ActionDef {
        id: ActionId::Ramen,
        title: "라면(₩4)",
        description: "에너지 회복",
        place: None,
        hours: 0,
        cost: 4,
    },
    ActionDef {
        id: ActionId::PolishResume,
        title: "이력서 다듬기(1h)",
        description: "커뮤니케이션 향상",
        place: None,
        hours: 1,
        cost: 0,
    },
];

/// `ACTIONS` is laid out in `ActionId` declaration order.
pub fn get_action_def(id: ActionId) -> &'static ActionDef {
    &ACTIONS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_ids() {
        let mut ids = HashSet::new();
        for def in ACTIONS {
            assert!(ids.insert(def.id), "Duplicate action ID: {:?}", def.id);
        }
    }

    #[test]
    fn test_table_order_matches_ids() {
        for (index, def) in ACTIONS.iter().enumerate() {
            assert_eq!(def.id as usize, index, "{:?} is out of order", def.id);
            assert_eq!(get_action_def(def.id).id, def.id);
        }
    }

    #[test]
    fn test_every_place_has_actions() {
        for place in Place::ALL {
            assert!(
                ACTIONS.iter().any(|def| def.place == Some(place)),
                "{:?} has no actions",
                place
            );
        }
    }

    #[test]
    fn test_four_global_actions() {
        assert_eq!(ACTIONS.iter().filter(|def| def.is_global()).count(), 4);
    }
}
