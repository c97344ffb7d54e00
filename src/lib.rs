//! Baeksu - a turn-based survival sim about living on nothing between jobs.
//!
//! This crate is the simulation core: the game state, the in-game clock,
//! rent, random events, the action catalog, job matching, interviews and
//! achievements. A presentation layer drives a [`Session`] and renders its
//! [`Snapshot`].

pub mod achievements;
pub mod actions;
pub mod core;
pub mod interview;
pub mod jobs;
pub mod random_events;
pub mod save_manager;
pub mod utils;

pub use crate::actions::ActionId;
pub use crate::core::{
    BillPolicy, GameConfig, GameEvent, GameState, Place, Rejection, SaveError, Session, Snapshot,
};
pub use crate::save_manager::{MemoryStore, SaveManager, SaveStore};
