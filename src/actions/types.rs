use crate::core::game_state::Place;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    // home
    Sleep,
    BrowseSns,
    Cook,
    // library
    StudyCode,
    StudyDesign,
    // pc
    Freelance,
    Gaming,
    // convenience
    PartTime,
    Lunchbox,
    // cafe
    CafeStudy,
    Networking,
    // company
    BrowseJobs,
    // anywhere
    KillTime,
    Stretch,
    Ramen,
    PolishResume,
}

/// Static description of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDef {
    pub id: ActionId,
    pub title: &'static str,
    pub description: &'static str,
    /// `None` means the action is available everywhere.
    pub place: Option<Place>,
    pub hours: u32,
    pub cost: u64,
}

impl ActionDef {
    pub fn is_global(&self) -> bool {
        self.place.is_none()
    }

    pub fn available_at(&self, place: Place) -> bool {
        self.place.map_or(true, |required| required == place)
    }
}
