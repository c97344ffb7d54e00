//! Interview scoring and resolution.
//!
//! ```text
//! skill_score = (code + design + talk) / 12
//! total       = answer_score + skill_score + jitter
//! threshold   = (req_code + req_design + req_talk) / 15 + 2
//! ```
//! The interview passes when `total >= threshold`.

use super::types::{Interview, InterviewScore, Verdict};
use crate::achievements::{self, AchievementId};
use crate::core::clock::advance;
use crate::core::config::GameConfig;
use crate::core::constants::{
    INTERVIEW_ENERGY, INTERVIEW_FAIL_MOOD, INTERVIEW_HOURS, INTERVIEW_JITTER_MAX,
    INTERVIEW_PASS_MOOD, INTERVIEW_SKILL_DIVISOR, INTERVIEW_THRESHOLD_BONUS, INTERVIEW_THRESHOLD_DIVISOR,
};
use crate::core::error::Rejection;
use crate::core::game_event::GameEvent;
use crate::core::game_state::{GameState, Skills};
use crate::jobs::{roll_payout, JobDef};
use rand::Rng;

/// Score an interview. Pure; the jitter is drawn by the caller.
pub fn score_interview(
    answer_score: u32,
    skills: &Skills,
    job: &JobDef,
    jitter: i32,
) -> InterviewScore {
    let skill_score = skills.total() / INTERVIEW_SKILL_DIVISOR;
    let threshold = job.req_total() / INTERVIEW_THRESHOLD_DIVISOR + INTERVIEW_THRESHOLD_BONUS;
    let total = answer_score as i32 + skill_score as i32 + jitter;
    InterviewScore {
        answer_score,
        skill_score,
        jitter,
        total,
        threshold,
        passed: total >= threshold as i32,
    }
}

/// Uniform jitter in `[-range, range]`, with `range` capped at `INTERVIEW_JITTER_MAX`.
pub fn roll_jitter<R: Rng>(range: i32, rng: &mut R) -> i32 {
    let range = range.saturating_abs().min(INTERVIEW_JITTER_MAX);
    rng.gen_range(-range..=range)
}

/// Submit the interview and resolve it.
///
/// Spends the interview hours (which may roll days and trigger rent) and the
/// energy, then scores. If the player is evicted while the clock runs the
/// interview is cancelled without a score.
pub fn submit_interview<R: Rng>(
    state: &mut GameState,
    interview: &mut Interview,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<GameEvent>, Rejection> {
    if state.game_over {
        return Err(Rejection::GameOver);
    }
    interview.submit()?;

    let job = interview.job;
    let mut events = advance(state, INTERVIEW_HOURS, config, rng);
    if state.game_over {
        interview.resolve(Verdict::Cancelled);
        events.push(GameEvent::InterviewCancelled {
            job_title: job.title,
        });
        return Ok(events);
    }

    state.use_energy(INTERVIEW_ENERGY);
    let jitter = roll_jitter(config.interview_jitter, rng);
    let score = score_interview(interview.answer_score(), &state.skills, job, jitter);
    tracing::info!(
        job = job.id,
        total = score.total,
        threshold = score.threshold,
        passed = score.passed,
        "interview resolved"
    );

    if score.passed {
        let payout = roll_payout(job, rng);
        state.earn(payout);
        state.change_mood(INTERVIEW_PASS_MOOD);
        interview.resolve(Verdict::Passed);
        events.push(GameEvent::InterviewPassed {
            job_title: job.title,
            payout,
            score,
        });
        events.extend(achievements::unlock_id(state, AchievementId::FirstOffer));
    } else {
        state.change_mood(INTERVIEW_FAIL_MOOD);
        interview.resolve(Verdict::Failed);
        events.push(GameEvent::InterviewFailed {
            job_title: job.title,
            score,
        });
    }
    Ok(events)
}
