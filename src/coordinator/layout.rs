//! Declared page layout: which views, group members, cards and singleton
//! elements exist for the coordinator to manage

use serde::{Deserialize, Serialize};

use super::selection::GroupKind;
use crate::shared::ElementId;

/// Page layout the coordinator is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Registered views in navigation order
    pub views: Vec<String>,
    /// View active at start-up (first registered view when unset)
    pub start_view: Option<String>,
    /// View on which the search shortcut applies
    pub dashboard_view: String,
    /// View opened by clicking a story row
    pub story_view: String,
    /// Drawer overlay container, if the page has one. An empty id means none.
    pub drawer: Option<ElementId>,
    /// Search field in the dashboard filter bar. An empty id means none.
    pub search_field: Option<ElementId>,
    /// Collapsible question cards
    pub cards: Vec<String>,
    /// Members of each selection group
    pub groups: GroupLayout,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            views: ["dashboard", "seed", "draft", "shape", "test", "settings"]
                .map(String::from)
                .to_vec(),
            start_view: None,
            dashboard_view: "dashboard".to_string(),
            story_view: "seed".to_string(),
            drawer: Some(ElementId::new("evidence-drawer")),
            search_field: Some(ElementId::new("filters-search")),
            cards: ["q1", "q2", "q3", "q4"].map(String::from).to_vec(),
            groups: GroupLayout::default(),
        }
    }
}

impl Layout {
    pub fn drawer(&self) -> Option<&ElementId> {
        self.drawer.as_ref().filter(|id| !id.as_str().is_empty())
    }

    pub fn search_field(&self) -> Option<&ElementId> {
        self.search_field.as_ref().filter(|id| !id.as_str().is_empty())
    }
}

/// Members of every selection group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLayout {
    pub scenes: Vec<String>,
    pub bundles: Vec<String>,
    pub sections: Vec<String>,
    pub settings_tabs: Vec<String>,
    pub mode_tabs: Vec<String>,
}

impl Default for GroupLayout {
    fn default() -> Self {
        Self {
            scenes: ["Scene 1", "Scene 2", "Scene 3", "Scene 4"]
                .map(String::from)
                .to_vec(),
            bundles: ["B1", "B2", "B3"].map(String::from).to_vec(),
            sections: ["Structure", "Voice", "Pacing", "Continuity"]
                .map(String::from)
                .to_vec(),
            settings_tabs: ["General", "Models", "Rubrics", "Export"]
                .map(String::from)
                .to_vec(),
            mode_tabs: ["Seed", "Draft", "Shape", "Test"].map(String::from).to_vec(),
        }
    }
}

impl GroupLayout {
    pub fn members(&self, kind: GroupKind) -> &[String] {
        match kind {
            GroupKind::Scenes => &self.scenes,
            GroupKind::Bundles => &self.bundles,
            GroupKind::Sections => &self.sections,
            GroupKind::SettingsTabs => &self.settings_tabs,
            GroupKind::ModeTabs => &self.mode_tabs,
        }
    }
}
