//! Action resolution.
//!
//! Every action is check-then-act: [`check_action`] runs before anything is
//! touched, so a rejected action leaves the state exactly as it was. Once
//! accepted the action spends its hours first; if the clock evicts the player
//! the rest of the action is dropped.

use super::data::{get_action_def, ACTIONS};
use super::types::{ActionDef, ActionId};
use crate::achievements::{self, AchievementId};
use crate::core::clock::advance;
use crate::core::config::GameConfig;
use crate::core::constants::{
    SLEEP_ENERGY_CEILING, TRAVEL_ENERGY, TRAVEL_HOURS, TRAVEL_MOOD_MAX, TRAVEL_MOOD_MIN,
};
use crate::core::effects::{apply_effects, Effect};
use crate::core::error::Rejection;
use crate::core::format::format_money;
use crate::core::game_event::GameEvent;
use crate::core::game_state::{GameState, Place, SkillKind};
use crate::jobs::pick_job;
use crate::random_events::fire_random_event;
use rand::Rng;

const FREELANCE_MIN_PAY: u64 = 18;
const PART_TIME_BASE_PAY: u64 = 20;
const PART_TIME_TIP_CHANCE: f64 = 0.25;

/// Actions offered at the player's current place, globals first.
pub fn available_actions(place: Place) -> Vec<&'static ActionDef> {
    ACTIONS
        .iter()
        .filter(|def| def.is_global())
        .chain(ACTIONS.iter().filter(|def| def.place == Some(place)))
        .collect()
}

/// Preconditions for an action. Never mutates.
pub fn check_action(state: &GameState, def: &ActionDef) -> Result<(), Rejection> {
    if state.game_over {
        return Err(Rejection::GameOver);
    }
    if let Some(required) = def.place {
        if required != state.place {
            return Err(Rejection::WrongPlace { required });
        }
    }
    if def.id == ActionId::Sleep && state.energy >= SLEEP_ENERGY_CEILING {
        return Err(Rejection::FullyRested);
    }
    if !state.can_afford(def.cost) {
        return Err(Rejection::InsufficientFunds { needed: def.cost });
    }
    Ok(())
}

/// Perform an action.
///
/// Browsing jobs yields a [`GameEvent::InterviewOpened`]; opening the
/// interview itself is up to the caller.
pub fn perform_action<R: Rng>(
    state: &mut GameState,
    id: ActionId,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<GameEvent>, Rejection> {
    let def = get_action_def(id);
    if let Err(rejection) = check_action(state, def) {
        tracing::debug!(action = ?id, day = state.day, hour = state.hour, %rejection, "action rejected");
        return Err(rejection);
    }

    // Freelance pay is based on skill before the job's own clock runs.
    let code_before = state.skills.code;

    let mut events = advance(state, def.hours, config, rng);
    if state.game_over {
        return Ok(events);
    }
    state.pay(def.cost);

    let (effects, message) = resolve_effects(state, id, code_before, rng);
    apply_effects(state, &effects);
    events.push(GameEvent::performed(message));
    tracing::debug!(
        action = ?id,
        day = state.day,
        hour = state.hour,
        money = state.money,
        "action performed"
    );

    let achievement = match id {
        ActionId::Sleep => Some(AchievementId::NapMaster),
        ActionId::Cook => Some(AchievementId::HomeCook),
        ActionId::StudyCode => Some(AchievementId::KeyboardPoet),
        _ => None,
    };
    if let Some(achievement) = achievement {
        events.extend(achievements::unlock_id(state, achievement));
    }

    match id {
        ActionId::Sleep | ActionId::Freelance => {
            events.push(fire_random_event(state, rng));
        }
        ActionId::BrowseJobs => {
            events.push(GameEvent::InterviewOpened {
                job: pick_job(&state.skills, rng),
            });
        }
        _ => {}
    }

    Ok(events)
}

/// What an accepted action does, and the line it logs.
fn resolve_effects<R: Rng>(
    state: &GameState,
    id: ActionId,
    code_before: u32,
    rng: &mut R,
) -> (Vec<Effect>, String) {
    match id {
        ActionId::Sleep => (
            vec![Effect::Energy(30), Effect::Mood(5)],
            "🛏️ 푹 잤다. 에너지+30, 기분+5".to_string(),
        ),
        ActionId::BrowseSns => (
            vec![Effect::Mood(rng.gen_range(-3..=3)), Effect::Energy(-2)],
            "📱 SNS를 훑었다. 시간은 사라지고 감정은 요동쳤다.".to_string(),
        ),
        ActionId::Cook => (
            vec![Effect::Energy(15), Effect::Mood(3)],
            "🍳 계란밥을 해먹었다. 에너지+15, 기분+3, ₩8 지출.".to_string(),
        ),
        ActionId::StudyCode => (
            vec![
                Effect::Energy(-18),
                Effect::Mood(-2),
                Effect::Skill(SkillKind::Code, rng.gen_range(3..=6)),
            ],
            "🧑‍💻 코딩 공부를 했다. 코딩 스킬이 올랐다.".to_string(),
        ),
        ActionId::StudyDesign => (
            vec![
                Effect::Energy(-18),
                Effect::Mood(-1),
                Effect::Skill(SkillKind::Design, rng.gen_range(3..=6)),
            ],
            "🎨 디자인 사례를 분석했다. 디자인 스킬이 올랐다.".to_string(),
        ),
        ActionId::Freelance => {
            let pay = freelance_pay(code_before, rng);
            (
                vec![Effect::Energy(-25), Effect::Mood(-2), Effect::Earn(pay)],
                format!("🖥️ 버그 사냥 완료. 수입 {}.", format_money(pay)),
            )
        }
        ActionId::Gaming => (
            vec![Effect::Mood(8), Effect::Energy(-5)],
            "🎮 랭겜으로 스트레스를 풀었다. 기분+8.".to_string(),
        ),
        ActionId::PartTime => {
            let pay = part_time_pay(state.skills.talk, rng);
            (
                vec![Effect::Energy(-28), Effect::Mood(-4), Effect::Earn(pay)],
                format!("🛒 시급을 받았다. 수입 {}.", format_money(pay)),
            )
        }
        ActionId::Lunchbox => (
            vec![Effect::Energy(12), Effect::Mood(2)],
            "🍱 편도시락 섭취. 에너지+12, 기분+2.".to_string(),
        ),
        ActionId::CafeStudy => {
            let focus = if rng.gen_bool(0.5) {
                SkillKind::Code
            } else {
                SkillKind::Design
            };
            (
                vec![
                    Effect::Energy(-12),
                    Effect::Skill(focus, rng.gen_range(2..=5)),
                ],
                "☕ 카페인과 함께 집중했다. 스킬이 약간 올랐다.".to_string(),
            )
        }
        ActionId::Networking => (
            vec![
                Effect::Mood(6),
                Effect::Skill(SkillKind::Talk, rng.gen_range(2..=4)),
            ],
            "🗣️ 사람들과 수다를 떨며 인맥을 넓혔다.".to_string(),
        ),
        ActionId::BrowseJobs => (
            vec![Effect::Energy(-5)],
            "📋 채용 공고를 훑어봤다.".to_string(),
        ),
        ActionId::KillTime => (
            vec![Effect::Mood(-1), Effect::Energy(-1)],
            "⏳ 시간을 보냈다.".to_string(),
        ),
        ActionId::Stretch => (
            vec![Effect::Mood(2)],
            "🧘 가볍게 몸을 풀었다.".to_string(),
        ),
        ActionId::Ramen => (
            vec![Effect::Energy(10), Effect::Mood(1)],
            "🍜 라면으로 버티기.".to_string(),
        ),
        ActionId::PolishResume => (
            vec![
                Effect::Energy(-6),
                Effect::Skill(SkillKind::Talk, rng.gen_range(1..=3)),
            ],
            "📄 이력서를 조금 다듬었다.".to_string(),
        ),
    }
}

/// `max(18, round(code * 0.9) + rand[5, 20])`
fn freelance_pay<R: Rng>(code: u32, rng: &mut R) -> u64 {
    let base = (f64::from(code) * 0.9).round() as u64;
    (base + rng.gen_range(5..=20)).max(FREELANCE_MIN_PAY)
}

/// `20 + floor(talk * 0.6)`, plus a 25% chance of a tip in [5, 15].
fn part_time_pay<R: Rng>(talk: u32, rng: &mut R) -> u64 {
    let base = PART_TIME_BASE_PAY + u64::from(talk) * 6 / 10;
    let tip = if rng.gen::<f64>() < PART_TIME_TIP_CHANCE {
        rng.gen_range(5..=15)
    } else {
        0
    };
    base + tip
}

/// Travel to another place: one hour, some energy, a small mood swing.
pub fn go_to_place<R: Rng>(
    state: &mut GameState,
    place: Place,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<GameEvent>, Rejection> {
    if state.game_over {
        return Err(Rejection::GameOver);
    }
    if state.place == place {
        return Err(Rejection::AlreadyThere);
    }

    let mut events = advance(state, TRAVEL_HOURS, config, rng);
    if state.game_over {
        return Ok(events);
    }
    state.use_energy(TRAVEL_ENERGY);
    state.change_mood(rng.gen_range(TRAVEL_MOOD_MIN..=TRAVEL_MOOD_MAX));
    state.place = place;
    tracing::debug!(place = ?place, day = state.day, hour = state.hour, "moved");
    events.push(GameEvent::Moved { place });
    Ok(events)
}
