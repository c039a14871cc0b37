//! Single-selection groups
//!
//! Each group behaves like a set of radio buttons: selecting a member marks it
//! and clears every other member of the same group. Groups are independent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::error::UiError;
use crate::shared::Marker;

/// The selection groups present on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Scene list in the draft view
    Scenes,
    /// Bundle list in the shape view
    Bundles,
    /// Section navigation in the test view
    Sections,
    /// Tabs of the settings view
    SettingsTabs,
    /// Per-story mode tabs
    ModeTabs,
}

impl GroupKind {
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Scenes,
        GroupKind::Bundles,
        GroupKind::Sections,
        GroupKind::SettingsTabs,
        GroupKind::ModeTabs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GroupKind::Scenes => "scenes",
            GroupKind::Bundles => "bundles",
            GroupKind::Sections => "sections",
            GroupKind::SettingsTabs => "settings_tabs",
            GroupKind::ModeTabs => "mode_tabs",
        }
    }

    /// Marker the render layer puts on the selected member.
    /// Bundles are "selected", everything else is "active".
    pub fn marker(&self) -> Marker {
        match self {
            GroupKind::Bundles => Marker::Selected,
            _ => Marker::Active,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One group's members and its current selection
#[derive(Debug, Clone)]
pub struct SelectionGroup {
    kind: GroupKind,
    members: Vec<String>,
    selected: Option<usize>,
}

impl SelectionGroup {
    pub fn new(kind: GroupKind, members: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }

        Self {
            kind,
            members: unique,
            selected: None,
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.members[i].as_str())
    }

    /// Mark `item` as the sole selected member
    pub fn select(&mut self, item: &str) -> Result<(), UiError> {
        let index = self
            .members
            .iter()
            .position(|m| m == item)
            .ok_or_else(|| UiError::UnknownItem {
                group: self.kind,
                item: item.to_string(),
            })?;
        self.selected = Some(index);
        Ok(())
    }
}

/// All selection groups, keyed by kind
#[derive(Debug, Clone, Default)]
pub struct SelectionGroups {
    groups: BTreeMap<GroupKind, SelectionGroup>,
}

impl SelectionGroups {
    pub fn new(groups: impl IntoIterator<Item = (GroupKind, Vec<String>)>) -> Self {
        let mut map = BTreeMap::new();
        for (kind, members) in groups {
            map.insert(kind, SelectionGroup::new(kind, members));
        }
        Self { groups: map }
    }

    pub fn get(&self, kind: GroupKind) -> Option<&SelectionGroup> {
        self.groups.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionGroup> {
        self.groups.values()
    }

    pub fn select(&mut self, kind: GroupKind, item: &str) -> Result<&SelectionGroup, UiError> {
        let group = self
            .groups
            .get_mut(&kind)
            .ok_or_else(|| UiError::UnknownItem {
                group: kind,
                item: item.to_string(),
            })?;
        group.select(item)?;
        Ok(group)
    }
}
