//! Integration test: saving, loading and resetting a session.

use baeksu::core::session::{LOADED_NOTICE, NO_SAVE_NOTICE, RESET_NOTICE, SAVED_NOTICE};
use baeksu::{
    ActionId, GameConfig, GameState, MemoryStore, Place, SaveError, SaveManager, SaveStore,
    Session,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn temp_save_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("baeksu-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn played_session() -> Session<ChaCha8Rng> {
    let mut session = Session::with_rng(GameConfig::default(), ChaCha8Rng::seed_from_u64(11));
    session.go_to(Place::Library).unwrap();
    session.perform(ActionId::StudyCode).unwrap();
    session.go_to(Place::Pc).unwrap();
    session.perform(ActionId::Freelance).unwrap();
    session
}

fn last_message(session: &Session<ChaCha8Rng>) -> String {
    session.log().latest().unwrap().message.clone()
}

#[test]
fn test_file_save_round_trip() {
    let path = temp_save_path("round_trip.dat");
    let mut store = SaveManager::at_path(&path);
    let mut session = played_session();

    session.save_to(&mut store).unwrap();
    assert_eq!(last_message(&session), format!("<b>{}</b>", SAVED_NOTICE));
    let saved = session.state().clone();

    session.perform(ActionId::Gaming).unwrap();
    assert_ne!(session.state(), &saved);

    session.load_from(&store).unwrap();
    assert_eq!(session.state(), &saved);
    assert_eq!(last_message(&session), format!("<b>{}</b>", LOADED_NOTICE));

    store.delete().unwrap();
}

#[test]
fn test_load_without_save_is_a_notice() {
    let path = temp_save_path("missing.dat");
    let store = SaveManager::at_path(&path);
    store.delete().unwrap();

    let mut session = played_session();
    let before = session.state().clone();
    assert!(matches!(session.load_from(&store), Err(SaveError::NotFound)));
    assert_eq!(session.state(), &before);
    assert_eq!(last_message(&session), format!("<b>{}</b>", NO_SAVE_NOTICE));
}

#[test]
fn test_corrupt_save_leaves_state_alone() {
    let path = temp_save_path("corrupt.dat");
    let mut store = SaveManager::at_path(&path);
    store.save(&GameState::default()).unwrap();
    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    fs::write(&path, bytes).unwrap();

    let mut session = played_session();
    let before = session.state().clone();
    assert!(matches!(
        session.load_from(&store),
        Err(SaveError::ChecksumMismatch)
    ));
    assert_eq!(session.state(), &before);

    store.delete().unwrap();
}

#[test]
fn test_load_closes_open_interview() {
    let mut store = MemoryStore::new();
    let mut session = Session::with_rng(GameConfig::default(), ChaCha8Rng::seed_from_u64(12));
    session.save_to(&mut store).unwrap();
    session.go_to(Place::Company).unwrap();
    session.perform(ActionId::BrowseJobs).unwrap();
    assert!(session.interview().is_some());

    session.load_from(&store).unwrap();
    assert!(session.interview().is_none());
    assert_eq!(session.state(), &GameState::default());
}

#[test]
fn test_reset_starts_over() {
    let mut session = played_session();
    session.reset();
    assert_eq!(session.state(), &GameState::default());
    assert_eq!(session.log().len(), 1);
    assert_eq!(last_message(&session), format!("<b>{}</b>", RESET_NOTICE));
}

#[test]
fn test_log_is_bounded() {
    let config = GameConfig {
        log_capacity: 5,
        ..GameConfig::default()
    };
    let mut session = Session::with_rng(config, ChaCha8Rng::seed_from_u64(13));
    for _ in 0..20 {
        session.perform(ActionId::Stretch).unwrap();
    }
    assert_eq!(session.log().len(), 5);
    assert_eq!(session.snapshot().log.len(), 5);
}

#[test]
fn test_snapshot_reflects_state() {
    let session = played_session();
    let snapshot = session.snapshot();
    let state = session.state();
    assert_eq!(snapshot.day, state.day);
    assert_eq!(snapshot.money, state.money);
    assert_eq!(snapshot.place, Place::Pc);
    assert_eq!(snapshot.place_name, "PC방");
    assert_eq!(snapshot.achievements, vec!["키보드의 시인".to_string()]);
    assert!(snapshot
        .actions
        .iter()
        .any(|action| action.id == ActionId::Freelance));
    assert!(!snapshot
        .actions
        .iter()
        .any(|action| action.id == ActionId::Sleep));
}
