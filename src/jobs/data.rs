//! Static job definitions.

use crate::core::game_state::Skills;
use serde::Serialize;

/// A job that can be interviewed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDef {
    pub id: &'static str,
    pub title: &'static str,
    /// Inclusive payout range for a passed interview.
    pub pay_min: u64,
    pub pay_max: u64,
    /// Skill requirement per dimension.
    pub req: Skills,
}

impl JobDef {
    /// Sum of the three requirements.
    pub fn req_total(&self) -> u32 {
        self.req.total()
    }
}

pub const JOBS: &[JobDef] = &[
    JobDef {
        id: "jnr-dev",
        title: "주니어 프론트엔드",
        pay_min: 120,
        pay_max: 180,
        req: Skills {
            code: 20,
            design: 10,
            talk: 10,
        },
    },
    JobDef {
        id: "ux-assist",
        title: "UX 보조",
        pay_min: 90,
        pay_max: 150,
        req: Skills {
            code: 8,
            design: 20,
            talk: 18,
        },
    },
    JobDef {
        id: "qa",
        title: "QA 테스터",
        pay_min: 80,
        pay_max: 130,
        req: Skills {
            code: 10,
            design: 0,
            talk: 8,
        },
    },
    JobDef {
        id: "support",
        title: "고객지원",
        pay_min: 70,
        pay_max: 120,
        req: Skills {
            code: 0,
            design: 0,
            talk: 25,
        },
    },
    JobDef {
        id: "freelance",
        title: "프리랜서 계약",
        pay_min: 150,
        pay_max: 260,
        req: Skills {
            code: 35,
            design: 20,
            talk: 22,
        },
    },
];

pub fn get_job(id: &str) -> Option<&'static JobDef> {
    JOBS.iter().find(|job| job.id == id)
}
