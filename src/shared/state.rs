//! Serializable snapshot of the coordinator's state slices

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::coordinator::{DrawerState, GroupKind};

/// Point-in-time view of every state slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSnapshot {
    /// Currently active view
    pub active_view: String,
    /// Selected member per selection group
    pub selections: BTreeMap<GroupKind, Option<String>>,
    /// Drawer open/closed
    pub drawer: DrawerState,
    /// Cards whose collapsed flag is set, in registration order
    pub collapsed_cards: Vec<String>,
}

impl UiSnapshot {
    #[cfg(test)]
    pub fn selected(&self, group: GroupKind) -> Option<&str> {
        self.selections.get(&group).and_then(|s| s.as_deref())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
