use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Highlighted entry and expanded groups derived from the current path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Empty when nothing is selected
    pub selected_key: String,
    pub open_keys: BTreeSet<String>,
}

impl NavigationState {
    pub fn is_selected(&self, key: &str) -> bool {
        !self.selected_key.is_empty() && self.selected_key == key
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_keys.contains(key)
    }
}
