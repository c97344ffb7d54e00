//! Job catalog and offer matching.

pub mod data;
pub mod logic;

pub use data::{get_job, JobDef, JOBS};
pub use logic::{eligible_jobs, is_eligible, pick_job, roll_payout};
