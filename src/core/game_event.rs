//! Notifications produced by the simulation.
//!
//! Core operations return a list of [`GameEvent`]s describing what happened.
//! The session turns them into log entries; nothing in the core depends on a
//! presentation layer existing.

use super::format::format_money;
use super::game_state::Place;
use crate::interview::InterviewScore;
use crate::jobs::JobDef;
use crate::random_events::RandomEventId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// Generic notice (save/load/reset confirmations, rejections).
    Notice { message: String },

    /// Narrative line for an accepted action.
    ActionPerformed { message: String },

    Moved { place: Place },

    /// Daily mood drift applied at a day rollover.
    DayStarted { day: u32, mood_delta: i32 },

    RandomEvent { id: RandomEventId, text: &'static str },

    RentPaid { amount: u64, next_due_day: u32 },

    Evicted { reason: String },

    AchievementUnlocked { name: String },

    /// Browsing jobs turned up an interview for `job`.
    InterviewOpened { job: &'static JobDef },

    InterviewPassed {
        job_title: &'static str,
        payout: u64,
        score: InterviewScore,
    },

    InterviewFailed {
        job_title: &'static str,
        score: InterviewScore,
    },

    /// The game ended while the interview clock was running.
    InterviewCancelled { job_title: &'static str },
}

impl GameEvent {
    pub fn notice(message: impl Into<String>) -> Self {
        GameEvent::Notice {
            message: message.into(),
        }
    }

    pub fn performed(message: impl Into<String>) -> Self {
        GameEvent::ActionPerformed {
            message: message.into(),
        }
    }

    /// Player-facing log line. `None` for events that are not logged.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::Notice { message } => Some(format!("<b>{}</b>", message)),
            GameEvent::ActionPerformed { message } => Some(message.clone()),
            GameEvent::Moved { place } => Some(format!("🚶 {}(으)로 이동했다.", place.name())),
            GameEvent::DayStarted { .. } => None,
            GameEvent::RandomEvent { text, .. } => Some(format!("🎲 {}", text)),
            GameEvent::RentPaid { amount, .. } => Some(format!(
                "<b>🏠 월세 {} 지불 완료.</b>",
                format_money(*amount)
            )),
            GameEvent::Evicted { reason } => Some(format!("💀 <b>게임 오버</b>: {}", reason)),
            GameEvent::AchievementUnlocked { name } => {
                Some(format!("🏅 업적 달성: <b>{}</b>", name))
            }
            GameEvent::InterviewOpened { job } => {
                Some(format!("<b>{}</b> 면접을 보러 갔다.", job.title))
            }
            GameEvent::InterviewPassed {
                job_title, payout, ..
            } => Some(format!(
                "✅ {} 면접 합격! 축하 보너스 {}.",
                job_title,
                format_money(*payout)
            )),
            GameEvent::InterviewFailed { job_title, .. } => {
                Some(format!("❌ {} 면접 탈락. 더 갈고 닦자.", job_title))
            }
            GameEvent::InterviewCancelled { job_title } => {
                Some(format!("{} 면접은 없던 일이 되었다.", job_title))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_paid_message() {
        let event = GameEvent::RentPaid {
            amount: 200,
            next_due_day: 14,
        };
        assert_eq!(
            event.message().unwrap(),
            "<b>🏠 월세 ₩200 지불 완료.</b>"
        );
    }

    #[test]
    fn test_day_started_is_silent() {
        let event = GameEvent::DayStarted {
            day: 2,
            mood_delta: -3,
        };
        assert!(event.message().is_none());
    }

    #[test]
    fn test_moved_message() {
        let event = GameEvent::Moved { place: Place::Cafe };
        assert_eq!(event.message().unwrap(), "🚶 카페(으)로 이동했다.");
    }
}
