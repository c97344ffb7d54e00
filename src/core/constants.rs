// Stat bounds
pub const STAT_MAX: u32 = 100;
pub const SKILL_MAX: u32 = 100;

// Clock
pub const HOURS_PER_DAY: u32 = 24;

// Default new-game state
pub const START_DAY: u32 = 1;
pub const START_HOUR: u32 = 8;
pub const START_ENERGY: u32 = 70;
pub const START_MOOD: u32 = 70;
pub const START_MONEY: u64 = 120;
pub const FIRST_RENT_DUE_DAY: u32 = 7;
pub const RENT_AMOUNT: u64 = 200;
pub const RENT_PERIOD_DAYS: u32 = 7;

// Daily tick
pub const DAILY_EVENT_CHANCE: f64 = 0.35;
pub const MOOD_DRIFT_MIN: i32 = -4;
pub const MOOD_DRIFT_MAX: i32 = 3;
/// Configured drift bounds are clamped to +/- this
pub const MOOD_DRIFT_LIMIT: i32 = 100;

// Travel between places
pub const TRAVEL_HOURS: u32 = 1;
pub const TRAVEL_ENERGY: u32 = 5;
pub const TRAVEL_MOOD_MIN: i32 = -2;
pub const TRAVEL_MOOD_MAX: i32 = 1;

// Sleeping is refused at or above this energy
pub const SLEEP_ENERGY_CEILING: u32 = 95;

// Job eligibility: skill >= 60% of requirement, as skill * 10 >= req * 6
pub const ELIGIBILITY_NUMERATOR: u32 = 6;
pub const ELIGIBILITY_DENOMINATOR: u32 = 10;

// Interview
pub const INTERVIEW_HOURS: u32 = 2;
pub const INTERVIEW_ENERGY: u32 = 12;
pub const INTERVIEW_JITTER: i32 = 2;
pub const INTERVIEW_JITTER_MAX: i32 = 10;
pub const INTERVIEW_SKILL_DIVISOR: u32 = 12;
pub const INTERVIEW_THRESHOLD_DIVISOR: u32 = 15;
pub const INTERVIEW_THRESHOLD_BONUS: u32 = 2;
pub const INTERVIEW_PASS_MOOD: i32 = 6;
pub const INTERVIEW_FAIL_MOOD: i32 = -6;

// Player-facing log feed
pub const LOG_CAPACITY: usize = 50;

// Save file
pub const SAVE_MAGIC: u64 = 0x4241_454B_5355_0000; // "BAEKSU\0\0"
