//! Interview state machine.

use super::data::QUESTIONS;
use crate::core::error::InterviewError;
use crate::jobs::JobDef;
use serde::Serialize;

/// How a resolved interview ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    Failed,
    /// The game ended before the interview could be scored.
    Cancelled,
}

/// Offered -> Answering -> Submitted -> Resolved. No way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "verdict", rename_all = "snake_case")]
pub enum InterviewPhase {
    Offered,
    Answering,
    Submitted,
    Resolved(Verdict),
}

/// Breakdown of how an interview was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewScore {
    pub answer_score: u32,
    pub skill_score: u32,
    pub jitter: i32,
    pub total: i32,
    pub threshold: u32,
    pub passed: bool,
}

/// One interview for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interview {
    pub job: &'static JobDef,
    answers: Vec<Option<usize>>,
    phase: InterviewPhase,
}

impl Interview {
    pub fn offer(job: &'static JobDef) -> Self {
        Self {
            job,
            answers: vec![None; QUESTIONS.len()],
            phase: InterviewPhase::Offered,
        }
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            InterviewPhase::Offered | InterviewPhase::Answering
        )
    }

    /// Start answering. Calling it again while answering is harmless.
    pub fn begin(&mut self) -> Result<(), InterviewError> {
        match self.phase {
            InterviewPhase::Offered => {
                self.phase = InterviewPhase::Answering;
                Ok(())
            }
            InterviewPhase::Answering => Ok(()),
            InterviewPhase::Submitted | InterviewPhase::Resolved(_) => {
                Err(InterviewError::AlreadySubmitted)
            }
        }
    }

    /// Lock in an answer. The first choice for a question is final.
    pub fn answer(&mut self, question: usize, option: usize) -> Result<(), InterviewError> {
        match self.phase {
            InterviewPhase::Answering => {}
            InterviewPhase::Offered => return Err(InterviewError::NotAnswering),
            InterviewPhase::Submitted | InterviewPhase::Resolved(_) => {
                return Err(InterviewError::AlreadySubmitted)
            }
        }
        let q = QUESTIONS
            .get(question)
            .ok_or(InterviewError::NoSuchQuestion)?;
        if option >= q.options.len() {
            return Err(InterviewError::NoSuchOption);
        }
        let slot = self
            .answers
            .get_mut(question)
            .ok_or(InterviewError::NoSuchQuestion)?;
        if slot.is_some() {
            return Err(InterviewError::AlreadyAnswered { question });
        }
        *slot = Some(option);
        Ok(())
    }

    /// Sum of the chosen options' weights. Unanswered questions count 0.
    pub fn answer_score(&self) -> u32 {
        self.answers
            .iter()
            .zip(QUESTIONS)
            .filter_map(|(answer, q)| answer.and_then(|i| q.options.get(i)))
            .map(|option| option.score)
            .sum()
    }

    /// Freeze the answers.
    pub fn submit(&mut self) -> Result<(), InterviewError> {
        match self.phase {
            InterviewPhase::Answering => {
                self.phase = InterviewPhase::Submitted;
                Ok(())
            }
            InterviewPhase::Offered => Err(InterviewError::NotAnswering),
            InterviewPhase::Submitted | InterviewPhase::Resolved(_) => {
                Err(InterviewError::AlreadySubmitted)
            }
        }
    }

    pub(crate) fn resolve(&mut self, verdict: Verdict) {
        self.phase = InterviewPhase::Resolved(verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::get_job;

    fn answering() -> Interview {
        let mut interview = Interview::offer(get_job("qa").unwrap());
        interview.begin().unwrap();
        interview
    }

    #[test]
    fn test_cannot_answer_before_begin() {
        let mut interview = Interview::offer(get_job("qa").unwrap());
        assert_eq!(interview.answer(0, 0), Err(InterviewError::NotAnswering));
        assert_eq!(interview.submit(), Err(InterviewError::NotAnswering));
    }

    #[test]
    fn test_first_answer_locks() {
        let mut interview = answering();
        interview.answer(0, 1).unwrap();
        assert_eq!(
            interview.answer(0, 0),
            Err(InterviewError::AlreadyAnswered { question: 0 })
        );
        assert_eq!(interview.answers()[0], Some(1));
    }

    #[test]
    fn test_out_of_range_answers() {
        let mut interview = answering();
        assert_eq!(interview.answer(3, 0), Err(InterviewError::NoSuchQuestion));
        assert_eq!(interview.answer(0, 2), Err(InterviewError::NoSuchOption));
    }

    #[test]
    fn test_partial_answers_score() {
        let mut interview = answering();
        interview.answer(0, 0).unwrap();
        interview.answer(2, 1).unwrap();
        assert_eq!(interview.answer_score(), 1);
    }

    #[test]
    fn test_full_marks() {
        let mut interview = answering();
        for q in 0..QUESTIONS.len() {
            interview.answer(q, 0).unwrap();
        }
        assert_eq!(interview.answer_score(), 3);
    }

    #[test]
    fn test_no_changes_after_submit() {
        let mut interview = answering();
        interview.submit().unwrap();
        assert_eq!(interview.phase(), InterviewPhase::Submitted);
        assert!(!interview.is_open());
        assert_eq!(interview.answer(1, 0), Err(InterviewError::AlreadySubmitted));
        assert_eq!(interview.submit(), Err(InterviewError::AlreadySubmitted));
        assert_eq!(interview.begin(), Err(InterviewError::AlreadySubmitted));
    }
}
