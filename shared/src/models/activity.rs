use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activities keyed by name, in the order the server lists them.
pub type Activities = IndexMap<String, Activity>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size. Not clamped: an over-full roster
    /// yields a negative count.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }
}
