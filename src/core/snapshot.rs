//! Read-only view of a session for rendering.

use super::format::{format_hour, format_money};
use super::game_state::{GameState, Place, Skills};
use super::log::{EventLog, LogEntry};
use crate::achievements::find_by_name;
use crate::actions::{available_actions, check_action, ActionId};
use crate::interview::{max_answer_score, Interview, InterviewPhase, Question, QUESTIONS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub id: ActionId,
    pub title: &'static str,
    pub description: &'static str,
    /// False when the action would currently be rejected.
    pub enabled: bool,
}

/// An unlocked achievement with its display details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementView {
    pub name: String,
    pub description: &'static str,
    pub icon: &'static str,
}

impl AchievementView {
    fn new(name: &str) -> Self {
        // Names without a definition (imported saves) show bare.
        let def = find_by_name(name);
        Self {
            name: name.to_string(),
            description: def.map_or("", |def| def.description),
            icon: def.map_or("🏅", |def| def.icon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewView {
    pub job_title: &'static str,
    pub phase: InterviewPhase,
    pub questions: &'static [Question],
    pub answers: Vec<Option<usize>>,
    pub max_answer_score: u32,
    /// While open, every other action is refused.
    pub open: bool,
}

impl InterviewView {
    fn new(interview: &Interview) -> Self {
        Self {
            job_title: interview.job.title,
            phase: interview.phase(),
            questions: QUESTIONS,
            answers: interview.answers().to_vec(),
            max_answer_score: max_answer_score(),
            open: interview.is_open(),
        }
    }
}

/// Everything a presentation layer needs after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub day: u32,
    pub hour: u32,
    pub time: String,
    pub money: u64,
    pub money_text: String,
    pub energy: u32,
    pub mood: u32,
    pub skills: Skills,
    pub place: Place,
    pub place_name: &'static str,
    pub place_icon: &'static str,
    pub rent_due_day: u32,
    pub rent_amount: u64,
    pub achievements: Vec<String>,
    pub achievement_badges: Vec<AchievementView>,
    pub game_over: bool,
    pub game_over_reason: Option<String>,
    /// Oldest first.
    pub log: Vec<LogEntry>,
    pub actions: Vec<ActionView>,
    pub interview: Option<InterviewView>,
}

impl Snapshot {
    pub fn capture(state: &GameState, log: &EventLog, interview: Option<&Interview>) -> Self {
        let interview_open = interview.is_some_and(Interview::is_open);
        let actions = available_actions(state.place)
            .into_iter()
            .map(|def| ActionView {
                id: def.id,
                title: def.title,
                description: def.description,
                enabled: !interview_open && check_action(state, def).is_ok(),
            })
            .collect();

        Self {
            day: state.day,
            hour: state.hour,
            time: format_hour(state.hour),
            money: state.money,
            money_text: format_money(state.money),
            energy: state.energy,
            mood: state.mood,
            skills: state.skills,
            place: state.place,
            place_name: state.place.name(),
            place_icon: state.place.icon(),
            rent_due_day: state.rent_due_day,
            rent_amount: state.rent_amount,
            achievements: state.achievements.to_vec(),
            achievement_badges: state.achievements.iter().map(AchievementView::new).collect(),
            game_over: state.game_over,
            game_over_reason: state.game_over_reason.clone(),
            log: log.entries().cloned().collect(),
            actions,
            interview: interview.map(InterviewView::new),
        }
    }
}
