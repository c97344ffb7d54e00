//! The game session.
//!
//! A [`Session`] owns one [`GameState`] together with the player log, the
//! random source, the configuration and any open interview. Every mutation
//! goes through it, so there is exactly one writer per game.

use super::config::GameConfig;
use super::error::{Rejection, SaveError};
use super::game_event::GameEvent;
use super::game_state::{GameState, Place};
use super::log::EventLog;
use super::snapshot::Snapshot;
use crate::actions::{self, ActionId};
use crate::interview::{self, Interview};
use crate::save_manager::SaveStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAVED_NOTICE: &str = "💾 저장했습니다.";
pub const NO_SAVE_NOTICE: &str = "저장된 데이터가 없습니다.";
pub const LOADED_NOTICE: &str = "불러왔습니다.";
pub const LOAD_FAILED_NOTICE: &str = "저장 데이터를 읽지 못했습니다.";
pub const RESET_NOTICE: &str = "새 게임 시작.";

pub struct Session<R: Rng = StdRng> {
    state: GameState,
    config: GameConfig,
    log: EventLog,
    rng: R,
    interview: Option<Interview>,
}

impl Session<StdRng> {
    /// A fresh game seeded from the OS.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let config = config.sanitized();
        let state = GameState::new(&config);
        Self::with_state(state, config, rng)
    }

    /// Resume from an existing state. The state is trusted to be valid; the
    /// config is sanitized.
    pub fn with_state(state: GameState, config: GameConfig, rng: R) -> Self {
        let config = config.sanitized();
        Self {
            log: EventLog::new(config.log_capacity),
            state,
            config,
            rng,
            interview: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn interview(&self) -> Option<&Interview> {
        self.interview.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.log, self.interview.as_ref())
    }

    /// Perform an action from the catalog. Refused while an interview is open.
    pub fn perform(&mut self, id: ActionId) -> Result<Vec<GameEvent>, Rejection> {
        let result = self.ensure_no_interview().and_then(|()| {
            actions::perform_action(&mut self.state, id, &self.config, &mut self.rng)
        });
        if let Ok(events) = &result {
            for event in events {
                if let GameEvent::InterviewOpened { job } = event {
                    self.interview = Some(Interview::offer(*job));
                }
            }
        }
        self.finish(result)
    }

    /// Travel to another place. Refused while an interview is open.
    pub fn go_to(&mut self, place: Place) -> Result<Vec<GameEvent>, Rejection> {
        let result = self.ensure_no_interview().and_then(|()| {
            actions::go_to_place(&mut self.state, place, &self.config, &mut self.rng)
        });
        self.finish(result)
    }

    fn ensure_no_interview(&self) -> Result<(), Rejection> {
        if self.state.game_over {
            return Err(Rejection::GameOver);
        }
        match &self.interview {
            Some(interview) if interview.is_open() => Err(Rejection::InterviewInProgress),
            _ => Ok(()),
        }
    }

    /// Answer one interview question. The first answer to a question is final.
    pub fn answer(&mut self, question: usize, option: usize) -> Result<(), Rejection> {
        let result = self.try_answer(question, option);
        self.finish(result.map(|()| Vec::new())).map(|_| ())
    }

    fn try_answer(&mut self, question: usize, option: usize) -> Result<(), Rejection> {
        if self.state.game_over {
            return Err(Rejection::GameOver);
        }
        let interview = self.interview.as_mut().ok_or(Rejection::NoInterview)?;
        interview.begin()?;
        interview.answer(question, option)?;
        Ok(())
    }

    /// Submit the open interview. Unanswered questions score zero.
    pub fn submit_interview(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        let result = self.try_submit();
        self.finish(result)
    }

    fn try_submit(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        if self.state.game_over {
            return Err(Rejection::GameOver);
        }
        let mut open = self.interview.take().ok_or(Rejection::NoInterview)?;
        let result = open
            .begin()
            .map_err(Rejection::from)
            .and_then(|()| {
                interview::submit_interview(&mut self.state, &mut open, &self.config, &mut self.rng)
            });
        if result.is_err() {
            self.interview = Some(open);
        }
        result
    }

    /// Walk away from the open interview without submitting. No state changes.
    pub fn abandon_interview(&mut self) -> bool {
        self.interview.take().is_some()
    }

    /// Start over with a fresh default state.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.interview = None;
        self.log.clear();
        tracing::info!("new game");
        self.notify(RESET_NOTICE);
    }

    pub fn save_to<S: SaveStore>(&mut self, store: &mut S) -> Result<(), SaveError> {
        store.save(&self.state)?;
        self.notify(SAVED_NOTICE);
        Ok(())
    }

    /// Replace the state with a saved one. On failure the state is untouched.
    pub fn load_from<S: SaveStore>(&mut self, store: &S) -> Result<(), SaveError> {
        match store.load() {
            Ok(state) => {
                self.state = state;
                self.interview = None;
                self.notify(LOADED_NOTICE);
                Ok(())
            }
            Err(SaveError::NotFound) => {
                self.notify(NO_SAVE_NOTICE);
                Err(SaveError::NotFound)
            }
            Err(err) => {
                tracing::warn!(%err, "load failed");
                self.notify(LOAD_FAILED_NOTICE);
                Err(err)
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let event = GameEvent::notice(message);
        self.log
            .record(self.state.day, self.state.hour, std::slice::from_ref(&event));
    }

    /// Log the outcome. Rejections become a notice; the state is already untouched.
    fn finish(
        &mut self,
        result: Result<Vec<GameEvent>, Rejection>,
    ) -> Result<Vec<GameEvent>, Rejection> {
        match &result {
            Ok(events) => self.log.record(self.state.day, self.state.hour, events),
            Err(rejection) => self.notify(&rejection.to_string()),
        }
        result
    }
}
