//! Job interview mini-game.
//!
//! Browsing jobs opens an [`Interview`] for one job. The player answers the
//! scripted questions (first answer locks), then submits. Submitting costs
//! time and energy and resolves the interview against the job's requirements.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{max_answer_score, AnswerOption, Question, QUESTIONS};
pub use logic::{roll_jitter, score_interview, submit_interview};
pub use types::{Interview, InterviewPhase, InterviewScore, Verdict};
