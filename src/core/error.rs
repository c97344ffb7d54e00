//! Error types.
//!
//! None of these are fatal. A [`Rejection`] means an action was refused
//! before touching state; its `Display` text is the notice shown to the player.

use super::game_state::{Place, SkillKind};
use std::io;

/// Why a player action was refused. No state was mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("게임이 끝났습니다. 새로 시작하거나 불러오세요.")]
    GameOver,

    #[error("돈이 부족하다. (필요: {needed})")]
    InsufficientFunds { needed: u64 },

    #[error("이미 그곳에 있음.")]
    AlreadyThere,

    #[error("{}에서만 할 수 있다.", .required.name())]
    WrongPlace { required: Place },

    #[error("더 자도 무의미하다.")]
    FullyRested,

    #[error("진행 중인 면접이 없다.")]
    NoInterview,

    #[error("면접 중이다. 제출하거나 포기해야 한다.")]
    InterviewInProgress,

    #[error(transparent)]
    Interview(#[from] InterviewError),
}

/// Misuse of the interview state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterviewError {
    #[error("면접이 아직 시작되지 않았다.")]
    NotAnswering,

    #[error("Q{}은(는) 이미 답했다.", .question + 1)]
    AlreadyAnswered { question: usize },

    #[error("그런 질문은 없다.")]
    NoSuchQuestion,

    #[error("그런 선택지는 없다.")]
    NoSuchOption,

    #[error("이미 제출한 면접이다.")]
    AlreadySubmitted,
}

/// A loaded state that breaks a data-model invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    #[error("day must start at 1")]
    DayZero,

    #[error("hour {0} is outside 0..24")]
    HourOutOfRange(u32),

    #[error("{stat} {value} is outside 0..=100")]
    StatOutOfRange { stat: &'static str, value: u32 },

    #[error("skill {skill:?} {value} is outside 0..=100")]
    SkillOutOfRange { skill: SkillKind, value: u32 },

    #[error("achievement {0:?} appears more than once")]
    DuplicateAchievement(String),
}

/// Failures at the persistence boundary.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no saved game")]
    NotFound,

    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),

    #[error("save encoding: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("save json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not a save file (magic 0x{found:016X})")]
    BadMagic { found: u64 },

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("saved state is invalid: {0}")]
    Invalid(#[from] InvalidState),
}
