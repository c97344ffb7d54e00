//! Core simulation: the state aggregate, the clock, rent, and the session
//! that ties actions, interviews and persistence together.

pub mod bills;
pub mod clock;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod format;
pub mod game_event;
pub mod game_state;
pub mod log;
pub mod session;
pub mod snapshot;
pub mod stats;

pub use bills::check_bills;
pub use clock::advance;
pub use config::{BillPolicy, GameConfig};
pub use error::{InterviewError, InvalidState, Rejection, SaveError};
pub use game_event::GameEvent;
pub use game_state::{GameState, Place, SkillKind, Skills};
pub use log::{EventLog, LogEntry};
pub use session::Session;
pub use snapshot::Snapshot;
