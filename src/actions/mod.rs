//! Player actions: the per-place catalog, global actions and travel.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_action_def, ACTIONS};
pub use logic::{available_actions, check_action, go_to_place, perform_action};
pub use types::{ActionDef, ActionId};
