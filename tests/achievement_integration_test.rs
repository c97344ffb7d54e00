//! Integration test: Achievement unlocks
//!
//! Each achievement is reached through normal play via the session, and
//! repeat triggers never duplicate a ledger entry.

use baeksu::achievements::{AchievementId, ALL_ACHIEVEMENTS};
use baeksu::core::bills::check_bills;
use baeksu::{ActionId, GameConfig, GameEvent, GameState, Place, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn quiet_config() -> GameConfig {
    GameConfig {
        daily_event_chance: 0.0,
        ..GameConfig::default()
    }
}

fn session_with(state: GameState) -> Session<ChaCha8Rng> {
    Session::with_state(state, quiet_config(), ChaCha8Rng::seed_from_u64(2024))
}

fn unlocked_names(events: &[GameEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::AchievementUnlocked { name } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_sleeping_unlocks_nap_master_once() {
    let mut state = GameState::default();
    state.energy = 10;
    let mut session = session_with(state);

    let events = session.perform(ActionId::Sleep).unwrap();
    assert_eq!(unlocked_names(&events), vec!["낮잠의 달인".to_string()]);

    let events = session.perform(ActionId::Sleep).unwrap();
    assert!(unlocked_names(&events).is_empty());
    assert_eq!(session.state().achievements.len(), 1);
}

#[test]
fn test_cooking_unlocks_home_cook() {
    let mut session = session_with(GameState::default());
    session.perform(ActionId::Cook).unwrap();
    assert!(session
        .state()
        .achievements
        .is_unlocked(AchievementId::HomeCook));
}

#[test]
fn test_studying_code_unlocks_keyboard_poet() {
    let mut session = session_with(GameState::default());
    session.go_to(Place::Library).unwrap();
    session.perform(ActionId::StudyCode).unwrap();
    assert!(session
        .state()
        .achievements
        .is_unlocked(AchievementId::KeyboardPoet));
}

#[test]
fn test_design_study_unlocks_nothing() {
    let mut session = session_with(GameState::default());
    session.go_to(Place::Library).unwrap();
    session.perform(ActionId::StudyDesign).unwrap();
    assert!(session.state().achievements.is_empty());
}

#[test]
fn test_rent_payment_unlocks_faithful_payer_once() {
    let mut state = GameState {
        money: 1_000,
        day: 7,
        hour: 0,
        ..GameState::default()
    };
    let config = GameConfig::default();
    check_bills(&mut state, &config);
    state.day = 14;
    check_bills(&mut state, &config);
    assert_eq!(state.achievements.to_vec(), vec!["성실한 납부자".to_string()]);
}

#[test]
fn test_unlock_order_is_preserved() {
    let mut session = session_with(GameState::default());
    session.perform(ActionId::Cook).unwrap();
    session.go_to(Place::Library).unwrap();
    session.perform(ActionId::StudyCode).unwrap();
    session.go_to(Place::Home).unwrap();
    session.perform(ActionId::Sleep).unwrap();
    assert_eq!(
        session.state().achievements.to_vec(),
        vec![
            "자취요리 1급".to_string(),
            "키보드의 시인".to_string(),
            "낮잠의 달인".to_string(),
        ]
    );
}

#[test]
fn test_unlocks_are_logged() {
    let mut session = session_with(GameState::default());
    session.perform(ActionId::Cook).unwrap();
    let last = session.log().latest().unwrap();
    assert_eq!(last.message, "🏅 업적 달성: <b>자취요리 1급</b>");
}

#[test]
fn test_every_definition_reachable_by_name() {
    for def in ALL_ACHIEVEMENTS {
        let mut state = GameState::default();
        assert!(baeksu::achievements::unlock(&mut state, def.name).is_some());
        assert!(state.achievements.is_unlocked(def.id));
    }
}
