//! Job matching.
//!
//! A job is within reach when the player has at least 60% of its requirement
//! in any one skill. Being strong in a single dimension is enough.

use super::data::{JobDef, JOBS};
use crate::core::constants::{ELIGIBILITY_DENOMINATOR, ELIGIBILITY_NUMERATOR};
use crate::core::game_state::{SkillKind, Skills};
use rand::Rng;

pub fn is_eligible(skills: &Skills, job: &JobDef) -> bool {
    SkillKind::ALL.iter().any(|&kind| {
        skills.get(kind) * ELIGIBILITY_DENOMINATOR >= job.req.get(kind) * ELIGIBILITY_NUMERATOR
    })
}

/// Jobs the player qualifies for, or the whole catalog when none match.
pub fn eligible_jobs(skills: &Skills) -> Vec<&'static JobDef> {
    let pool: Vec<&'static JobDef> = JOBS.iter().filter(|job| is_eligible(skills, job)).collect();
    if pool.is_empty() {
        JOBS.iter().collect()
    } else {
        pool
    }
}

/// Pick one job uniformly from the eligible pool.
pub fn pick_job<R: Rng>(skills: &Skills, rng: &mut R) -> &'static JobDef {
    let pool = eligible_jobs(skills);
    pool[rng.gen_range(0..pool.len())]
}

/// Roll the signing payout for a passed interview.
pub fn roll_payout<R: Rng>(job: &JobDef, rng: &mut R) -> u64 {
    rng.gen_range(job.pay_min..=job.pay_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::data::get_job;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_requirement_always_eligible() {
        // QA requires no design, so 0 * 10 >= 0 * 6 holds.
        let qa = get_job("qa").unwrap();
        assert!(is_eligible(&Skills::default(), qa));
    }

    #[test]
    fn test_single_strong_skill_qualifies() {
        let support = get_job("support").unwrap();
        let skills = Skills {
            code: 0,
            design: 0,
            talk: 15,
        };
        // 15 * 10 = 150 >= 25 * 6 = 150
        assert!(is_eligible(&skills, support));
        let skills = Skills { talk: 14, ..skills };
        assert!(!is_eligible(&skills, support));
    }

    #[test]
    fn test_or_not_and() {
        let freelance = get_job("freelance").unwrap();
        let skills = Skills {
            code: 21,
            design: 0,
            talk: 0,
        };
        assert!(is_eligible(&skills, freelance));
    }

    #[test]
    fn test_eligible_pool_never_empty() {
        assert!(!eligible_jobs(&Skills::default()).is_empty());
    }

    #[test]
    fn test_pick_job_stays_in_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let skills = Skills {
            code: 0,
            design: 0,
            talk: 0,
        };
        let pool = eligible_jobs(&skills);
        for _ in 0..100 {
            let job = pick_job(&skills, &mut rng);
            assert!(pool.iter().any(|candidate| candidate.id == job.id));
        }
    }

    #[test]
    fn test_payout_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for job in JOBS {
            for _ in 0..50 {
                let pay = roll_payout(job, &mut rng);
                assert!((job.pay_min..=job.pay_max).contains(&pay));
            }
        }
    }
}
