//! The interview script.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "마감과 완성도 중 하나만 고르라면?",
        options: &[
            AnswerOption {
                text: "마감",
                score: 1,
            },
            AnswerOption {
                text: "완성도",
                score: 0,
            },
        ],
    },
    Question {
        prompt: "버그를 찾았다. 팀원이 만든 코드다. 어떻게 할까?",
        options: &[
            AnswerOption {
                text: "정중히 PR로 제안",
                score: 1,
            },
            AnswerOption {
                text: "일단 고쳐서 올림",
                score: 0,
            },
        ],
    },
    Question {
        prompt: "의견 충돌이 생겼다.",
        options: &[
            AnswerOption {
                text: "데이터로 설득",
                score: 1,
            },
            AnswerOption {
                text: "감으로 간다",
                score: 0,
            },
        ],
    },
];

/// Best possible answer score.
pub fn max_answer_score() -> u32 {
    QUESTIONS
        .iter()
        .map(|q| q.options.iter().map(|o| o.score).max().unwrap_or(0))
        .sum()
}
