//! UI State Coordinator
//!
//! Owns every state slice of the page (active view, selection groups, drawer,
//! collapsible cards) and turns input events into render instructions.
//! Each handler runs to completion before the next event is dispatched.
//! Requests naming unknown or absent elements are silent no-ops.

pub mod cards;
pub mod drawer;
pub mod error;
pub mod layout;
pub mod selection;
pub mod view;

pub use cards::CardSet;
pub use drawer::{Drawer, DrawerState};
pub use error::UiError;
pub use layout::Layout;
pub use selection::{GroupKind, SelectionGroup, SelectionGroups};
pub use view::{ViewId, ViewNavigation};

use tracing::{debug, warn};

use crate::shared::{
    ElementId, ElementRef, InputEvent, Marker, RenderInstruction, RenderSink, UiSnapshot,
};
use crate::shortcuts::{Key, ShortcutAction, ShortcutBindings};

/// The single owner of all UI state for the page
#[derive(Debug, Clone)]
pub struct UiCoordinator {
    views: ViewNavigation,
    groups: SelectionGroups,
    drawer: Drawer,
    cards: CardSet,
    dashboard_view: ViewId,
    story_view: ViewId,
    search_field: Option<ElementId>,
    shortcuts: ShortcutBindings,
}

impl UiCoordinator {
    /// Build a coordinator with deterministic defaults: first (or configured
    /// start) view active, drawer closed, nothing selected, no card collapsed.
    pub fn new(layout: &Layout, shortcuts: ShortcutBindings) -> Result<Self, UiError> {
        let mut views = ViewNavigation::new(layout.views.iter().map(|v| ViewId::new(v.as_str())))?;

        if let Some(start) = &layout.start_view {
            if let Err(e) = views.activate(start).map(|_| ()) {
                warn!("Start view ignored, using '{}': {}", views.active(), e);
            }
        }

        let groups = SelectionGroups::new(
            GroupKind::ALL
                .iter()
                .map(|kind| (*kind, layout.groups.members(*kind).to_vec())),
        );

        let mut coordinator = Self {
            views,
            groups,
            drawer: Drawer::new(layout.drawer().cloned()),
            cards: CardSet::new(layout.cards.iter().cloned()),
            dashboard_view: ViewId::new(layout.dashboard_view.as_str()),
            story_view: ViewId::new(layout.story_view.as_str()),
            search_field: layout.search_field().cloned(),
            shortcuts,
        };
        coordinator.sync_mode_tab();

        Ok(coordinator)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn active_view(&self) -> &ViewId {
        self.views.active()
    }

    pub fn views(&self) -> &[ViewId] {
        self.views.views()
    }

    pub fn group(&self, kind: GroupKind) -> Option<&SelectionGroup> {
        self.groups.get(kind)
    }

    #[cfg(test)]
    pub fn selected(&self, kind: GroupKind) -> Option<&str> {
        self.groups.get(kind).and_then(|g| g.selected())
    }

    #[cfg(test)]
    pub fn drawer_state(&self) -> DrawerState {
        self.drawer.state()
    }

    pub fn drawer_element(&self) -> Option<&ElementId> {
        self.drawer.element().ok()
    }

    pub fn search_field(&self) -> Option<&ElementId> {
        self.search_field.as_ref()
    }

    pub fn card_ids(&self) -> &[String] {
        self.cards.ids()
    }

    #[cfg(test)]
    pub fn is_collapsed(&self, card: &str) -> Option<bool> {
        self.cards.is_collapsed(card)
    }

    pub fn dashboard_view(&self) -> &ViewId {
        &self.dashboard_view
    }

    pub fn story_view(&self) -> &ViewId {
        &self.story_view
    }

    pub fn shortcuts(&self) -> &ShortcutBindings {
        &self.shortcuts
    }

    /// Serializable copy of every state slice
    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            active_view: self.active_view().to_string(),
            selections: self
                .groups
                .iter()
                .map(|g| (g.kind(), g.selected().map(str::to_string)))
                .collect(),
            drawer: self.drawer.state(),
            collapsed_cards: self.cards.collapsed_ids(),
        }
    }

    // ---------------------------------------------------------------------
    // Event dispatch
    // ---------------------------------------------------------------------

    /// Route one input event and stream the resulting instructions into `sink`
    pub fn dispatch(&mut self, event: InputEvent, sink: &mut dyn RenderSink) {
        debug!("Dispatching {:?}", event);
        match event {
            InputEvent::NavClicked { view } => self.activate_view(&view, sink),
            InputEvent::ModeTabClicked { label } => {
                self.activate_view(&label.to_lowercase(), sink)
            }
            // Mode tabs only change through navigation so they track the active view
            InputEvent::ItemClicked {
                group: GroupKind::ModeTabs,
                item,
            } => self.activate_view(&item.to_lowercase(), sink),
            InputEvent::ItemClicked { group, item } => self.select(group, &item, sink),
            InputEvent::StoryRowClicked => {
                let story = self.story_view.clone();
                self.activate_view(story.as_str(), sink);
            }
            InputEvent::DrawerToggleClicked => self.toggle_drawer(sink),
            InputEvent::DrawerOverlayClicked { target } => self.overlay_clicked(&target, sink),
            InputEvent::DrawerCloseClicked => self.close_drawer(sink),
            InputEvent::CardClicked { card } => self.toggle_card(&card, sink),
            InputEvent::KeyPressed { key } => self.key_pressed(key, sink),
        }
    }

    /// Dispatch one event and collect its instructions
    pub fn handle(&mut self, event: InputEvent) -> Vec<RenderInstruction> {
        let mut instructions = Vec::new();
        self.dispatch(event, &mut instructions);
        instructions
    }

    /// Emit the complete current state, for render layers syncing at start-up
    pub fn render_all(&self, sink: &mut dyn RenderSink) {
        self.emit_views(sink);
        for group in self.groups.iter() {
            self.emit_group(group, sink);
        }
        self.emit_drawer(sink);
        for card in self.cards.ids() {
            self.emit_card(card, sink);
        }
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    /// Make `id` the only active view and nav control
    pub fn activate_view(&mut self, id: &str, sink: &mut dyn RenderSink) {
        if let Err(e) = self.views.activate(id) {
            debug!("Ignoring navigation: {}", e);
            return;
        }

        debug!("Active view is now '{}'", id);
        self.emit_views(sink);

        if self.sync_mode_tab() {
            if let Some(tabs) = self.groups.get(GroupKind::ModeTabs) {
                self.emit_group(tabs, sink);
            }
        }
    }

    /// Make `item` the sole selected member of `group`
    pub fn select(&mut self, group: GroupKind, item: &str, sink: &mut dyn RenderSink) {
        if let Err(e) = self.groups.select(group, item) {
            debug!("Ignoring selection: {}", e);
            return;
        }

        debug!("Selected '{}' in {}", item, group);
        if let Some(selected) = self.groups.get(group) {
            self.emit_group(selected, sink);
        }
    }

    /// Flip the drawer between open (flex) and closed (hidden)
    pub fn toggle_drawer(&mut self, sink: &mut dyn RenderSink) {
        match self.drawer.toggle() {
            Ok(state) => {
                debug!("Drawer toggled to {:?}", state);
                self.emit_drawer(sink);
            }
            Err(e) => debug!("Ignoring drawer toggle: {}", e),
        }
    }

    /// Force the drawer closed. Safe to call when already closed.
    pub fn close_drawer(&mut self, sink: &mut dyn RenderSink) {
        match self.drawer.close() {
            Ok(_) => self.emit_drawer(sink),
            Err(e) => debug!("Ignoring drawer close: {}", e),
        }
    }

    /// Close the drawer only when the click landed on the overlay background
    pub fn overlay_clicked(&mut self, target: &ElementId, sink: &mut dyn RenderSink) {
        if self.drawer.is_background(target) {
            self.close_drawer(sink);
        } else {
            debug!("Overlay click on '{}' is not the background", target);
        }
    }

    /// Flip one card's collapsed flag
    pub fn toggle_card(&mut self, card: &str, sink: &mut dyn RenderSink) {
        match self.cards.toggle(card) {
            Ok(collapsed) => {
                debug!("Card '{}' collapsed = {}", card, collapsed);
                self.emit_card(card, sink);
            }
            Err(e) => debug!("Ignoring card toggle: {}", e),
        }
    }

    /// Route a global key press to its shortcut actions
    pub fn key_pressed(&mut self, key: Key, sink: &mut dyn RenderSink) {
        for action in self.shortcuts.actions_for(&key) {
            match action {
                ShortcutAction::FocusSearch => self.focus_search(sink),
                ShortcutAction::CloseDrawer => self.close_drawer(sink),
            }
        }
    }

    fn focus_search(&mut self, sink: &mut dyn RenderSink) {
        if !self.views.is_active(self.dashboard_view.as_str()) {
            return;
        }

        sink.apply(RenderInstruction::PreventDefault);
        match &self.search_field {
            Some(field) => sink.apply(RenderInstruction::Focus {
                element: field.clone(),
            }),
            None => debug!("{}", UiError::MissingElement("search field")),
        }
    }

    /// Select the mode tab whose lower-cased label names the active view.
    /// Returns true when a tab matched.
    fn sync_mode_tab(&mut self) -> bool {
        let active = self.views.active().as_str().to_string();
        let tab = self.groups.get(GroupKind::ModeTabs).and_then(|tabs| {
            tabs.members()
                .iter()
                .find(|label| label.to_lowercase() == active)
                .cloned()
        });

        match tab {
            Some(label) => self.groups.select(GroupKind::ModeTabs, &label).is_ok(),
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Instruction emitters
    // ---------------------------------------------------------------------

    fn emit_views(&self, sink: &mut dyn RenderSink) {
        let active = self.views.active();
        for view in self.views.views() {
            let on = view == active;
            sink.apply(RenderInstruction::SetMarker {
                element: ElementRef::NavControl(view.clone()),
                marker: Marker::Active,
                on,
            });
            sink.apply(RenderInstruction::SetMarker {
                element: ElementRef::View(view.clone()),
                marker: Marker::Active,
                on,
            });
        }
    }

    fn emit_group(&self, group: &SelectionGroup, sink: &mut dyn RenderSink) {
        let selected = group.selected();
        for member in group.members() {
            sink.apply(RenderInstruction::SetMarker {
                element: ElementRef::Item(group.kind(), member.clone()),
                marker: group.kind().marker(),
                on: selected == Some(member.as_str()),
            });
        }
    }

    fn emit_drawer(&self, sink: &mut dyn RenderSink) {
        if let Ok(element) = self.drawer.element() {
            sink.apply(RenderInstruction::SetDisplay {
                element: element.clone(),
                mode: self.drawer.state().display_mode(),
            });
        }
    }

    fn emit_card(&self, card: &str, sink: &mut dyn RenderSink) {
        if let Some(collapsed) = self.cards.is_collapsed(card) {
            sink.apply(RenderInstruction::SetMarker {
                element: ElementRef::Card(card.to_string()),
                marker: Marker::Collapsed,
                on: collapsed,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DisplayMode;

    fn coordinator() -> UiCoordinator {
        UiCoordinator::new(&Layout::default(), ShortcutBindings::default()).unwrap()
    }

    fn active_markers(instructions: &[RenderInstruction]) -> Vec<&ElementRef> {
        instructions
            .iter()
            .filter_map(|i| match i {
                RenderInstruction::SetMarker { element, on: true, .. } => Some(element),
                _ => None,
            })
            .collect()
    }

    fn key(c: char) -> InputEvent {
        InputEvent::KeyPressed { key: Key::Char(c) }
    }

    fn escape() -> InputEvent {
        InputEvent::KeyPressed { key: Key::Escape }
    }

    #[test]
    fn test_initial_defaults() {
        let ui = coordinator();
        let snapshot = ui.snapshot();

        assert_eq!(snapshot.active_view, "dashboard");
        assert_eq!(snapshot.drawer, DrawerState::Closed);
        assert!(snapshot.collapsed_cards.is_empty());
        assert!(snapshot.selected(GroupKind::Bundles).is_none());
        assert!(snapshot.selected(GroupKind::ModeTabs).is_none());
    }

    #[test]
    fn test_configured_start_view() {
        let layout = Layout {
            start_view: Some("draft".to_string()),
            ..Layout::default()
        };
        let ui = UiCoordinator::new(&layout, ShortcutBindings::default()).unwrap();
        assert_eq!(ui.active_view().as_str(), "draft");
        assert_eq!(ui.selected(GroupKind::ModeTabs), Some("Draft"));
    }

    #[test]
    fn test_unknown_start_view_falls_back_to_first() {
        let layout = Layout {
            start_view: Some("missing".to_string()),
            ..Layout::default()
        };
        let ui = UiCoordinator::new(&layout, ShortcutBindings::default()).unwrap();
        assert_eq!(ui.active_view().as_str(), "dashboard");
    }

    #[test]
    fn test_layout_without_views_is_rejected() {
        let layout = Layout {
            views: Vec::new(),
            ..Layout::default()
        };
        let result = UiCoordinator::new(&layout, ShortcutBindings::default());
        assert!(matches!(result, Err(UiError::NoViews)));
    }

    #[test]
    fn test_every_view_activates_exactly_one_view_and_control() {
        let mut ui = coordinator();
        let views: Vec<ViewId> = ui.views().to_vec();

        for view in &views {
            let out = ui.handle(InputEvent::NavClicked {
                view: view.to_string(),
            });
            assert_eq!(
                active_markers(&out)
                    .into_iter()
                    .filter(|e| matches!(e, ElementRef::View(_) | ElementRef::NavControl(_)))
                    .cloned()
                    .collect::<Vec<_>>(),
                vec![ElementRef::NavControl(view.clone()), ElementRef::View(view.clone())]
            );
            assert_eq!(ui.active_view(), view);
        }
    }

    #[test]
    fn test_unknown_view_is_a_no_op() {
        let mut ui = coordinator();
        ui.handle(InputEvent::NavClicked {
            view: "shape".to_string(),
        });

        let out = ui.handle(InputEvent::NavClicked {
            view: "nowhere".to_string(),
        });
        assert!(out.is_empty());
        assert_eq!(ui.active_view().as_str(), "shape");
    }

    #[test]
    fn test_mode_tab_activates_lowercased_view() {
        let mut ui = coordinator();
        let out = ui.handle(InputEvent::ModeTabClicked {
            label: "Draft".to_string(),
        });

        assert_eq!(ui.active_view().as_str(), "draft");
        assert_eq!(ui.selected(GroupKind::ModeTabs), Some("Draft"));
        assert!(active_markers(&out)
            .contains(&&ElementRef::Item(GroupKind::ModeTabs, "Draft".to_string())));
    }

    #[test]
    fn test_mode_tab_with_unknown_label_is_a_no_op() {
        let mut ui = coordinator();
        let out = ui.handle(InputEvent::ModeTabClicked {
            label: "Publish".to_string(),
        });
        assert!(out.is_empty());
        assert_eq!(ui.active_view().as_str(), "dashboard");
    }

    #[test]
    fn test_mode_tab_item_click_follows_navigation() {
        let mut ui = coordinator();
        ui.handle(InputEvent::ItemClicked {
            group: GroupKind::ModeTabs,
            item: "Shape".to_string(),
        });
        assert_eq!(ui.active_view().as_str(), "shape");
        assert_eq!(ui.selected(GroupKind::ModeTabs), Some("Shape"));

        let out = ui.handle(InputEvent::ItemClicked {
            group: GroupKind::ModeTabs,
            item: "Publish".to_string(),
        });
        assert!(out.is_empty());
        assert_eq!(ui.active_view().as_str(), "shape");
        assert_eq!(ui.selected(GroupKind::ModeTabs), Some("Shape"));
    }

    #[test]
    fn test_unbound_key_has_no_effect() {
        let mut ui = coordinator();
        ui.handle(InputEvent::DrawerToggleClicked);
        let out = ui.handle(InputEvent::KeyPressed {
            key: Key::Other("ArrowDown".to_string()),
        });
        assert!(out.is_empty());
        assert_eq!(ui.drawer_state(), DrawerState::Open);
    }

    #[test]
    fn test_navigating_away_keeps_last_mode_tab() {
        let mut ui = coordinator();
        ui.handle(InputEvent::NavClicked {
            view: "test".to_string(),
        });
        ui.handle(InputEvent::NavClicked {
            view: "settings".to_string(),
        });
        assert_eq!(ui.selected(GroupKind::ModeTabs), Some("Test"));
    }

    #[test]
    fn test_story_row_opens_seed_view_and_leaves_drawer() {
        let mut ui = coordinator();
        assert_eq!(ui.active_view().as_str(), "dashboard");

        ui.handle(InputEvent::StoryRowClicked);

        assert_eq!(ui.active_view().as_str(), "seed");
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_bundle_selection_replaces_previous() {
        let mut ui = coordinator();
        ui.handle(InputEvent::ItemClicked {
            group: GroupKind::Bundles,
            item: "B1".to_string(),
        });
        let out = ui.handle(InputEvent::ItemClicked {
            group: GroupKind::Bundles,
            item: "B2".to_string(),
        });

        assert_eq!(ui.selected(GroupKind::Bundles), Some("B2"));
        assert!(out.contains(&RenderInstruction::SetMarker {
            element: ElementRef::Item(GroupKind::Bundles, "B1".to_string()),
            marker: Marker::Selected,
            on: false,
        }));
        assert_eq!(
            active_markers(&out),
            vec![&ElementRef::Item(GroupKind::Bundles, "B2".to_string())]
        );
    }

    #[test]
    fn test_every_group_keeps_one_selection_and_others_untouched() {
        let mut ui = coordinator();
        ui.handle(InputEvent::ItemClicked {
            group: GroupKind::Scenes,
            item: "Scene 2".to_string(),
        });

        for kind in [GroupKind::Bundles, GroupKind::Sections, GroupKind::SettingsTabs] {
            let members = ui.group(kind).unwrap().members().to_vec();
            for item in members {
                let out = ui.handle(InputEvent::ItemClicked {
                    group: kind,
                    item: item.clone(),
                });
                assert_eq!(
                    active_markers(&out),
                    vec![&ElementRef::Item(kind, item.clone())]
                );
                assert_eq!(ui.selected(kind), Some(item.as_str()));
            }
        }

        assert_eq!(ui.selected(GroupKind::Scenes), Some("Scene 2"));
    }

    #[test]
    fn test_unknown_item_is_a_no_op() {
        let mut ui = coordinator();
        ui.handle(InputEvent::ItemClicked {
            group: GroupKind::Sections,
            item: "Voice".to_string(),
        });
        let out = ui.handle(InputEvent::ItemClicked {
            group: GroupKind::Sections,
            item: "Epilogue".to_string(),
        });

        assert!(out.is_empty());
        assert_eq!(ui.selected(GroupKind::Sections), Some("Voice"));
    }

    #[test]
    fn test_toggle_drawer_twice_restores_state() {
        let mut ui = coordinator();
        let drawer = ElementId::new("evidence-drawer");

        let out = ui.handle(InputEvent::DrawerToggleClicked);
        assert_eq!(ui.drawer_state(), DrawerState::Open);
        assert_eq!(
            out,
            vec![RenderInstruction::SetDisplay {
                element: drawer.clone(),
                mode: DisplayMode::Flex,
            }]
        );

        let out = ui.handle(InputEvent::DrawerToggleClicked);
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
        assert_eq!(
            out,
            vec![RenderInstruction::SetDisplay {
                element: drawer,
                mode: DisplayMode::None,
            }]
        );
    }

    #[test]
    fn test_close_drawer_is_idempotent() {
        let mut ui = coordinator();
        ui.handle(InputEvent::DrawerCloseClicked);
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
        ui.handle(InputEvent::DrawerCloseClicked);
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_overlay_background_click_closes_drawer() {
        let mut ui = coordinator();
        ui.handle(InputEvent::DrawerToggleClicked);

        ui.handle(InputEvent::DrawerOverlayClicked {
            target: ElementId::new("evidence-drawer-panel"),
        });
        assert_eq!(ui.drawer_state(), DrawerState::Open);

        ui.handle(InputEvent::DrawerOverlayClicked {
            target: ElementId::new("evidence-drawer"),
        });
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_escape_closes_drawer_from_any_view() {
        let mut ui = coordinator();
        ui.handle(InputEvent::NavClicked {
            view: "shape".to_string(),
        });
        ui.handle(InputEvent::DrawerToggleClicked);

        ui.handle(escape());
        assert_eq!(ui.drawer_state(), DrawerState::Closed);

        ui.handle(escape());
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_missing_drawer_degrades_to_no_op() {
        let layout = Layout {
            drawer: None,
            ..Layout::default()
        };
        let mut ui = UiCoordinator::new(&layout, ShortcutBindings::default()).unwrap();

        assert!(ui.handle(InputEvent::DrawerToggleClicked).is_empty());
        assert!(ui.handle(escape()).is_empty());
        assert!(ui
            .handle(InputEvent::DrawerOverlayClicked {
                target: ElementId::new("evidence-drawer"),
            })
            .is_empty());
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_slash_on_dashboard_focuses_search() {
        let mut ui = coordinator();
        let out = ui.handle(key('/'));
        assert_eq!(
            out,
            vec![
                RenderInstruction::PreventDefault,
                RenderInstruction::Focus {
                    element: ElementId::new("filters-search"),
                },
            ]
        );
    }

    #[test]
    fn test_empty_element_ids_mean_absent() {
        let layout = Layout {
            drawer: Some(ElementId::new("")),
            search_field: Some(ElementId::new("")),
            ..Layout::default()
        };
        let mut ui = UiCoordinator::new(&layout, ShortcutBindings::default()).unwrap();
        assert!(ui.drawer_element().is_none());
        assert!(ui.search_field().is_none());
        assert!(ui.handle(InputEvent::DrawerToggleClicked).is_empty());
    }

    #[test]
    fn test_slash_elsewhere_does_nothing() {
        let mut ui = coordinator();
        ui.handle(InputEvent::StoryRowClicked);
        assert!(ui.handle(key('/')).is_empty());
    }

    #[test]
    fn test_slash_without_search_field_still_prevents_default() {
        let layout = Layout {
            search_field: None,
            ..Layout::default()
        };
        let mut ui = UiCoordinator::new(&layout, ShortcutBindings::default()).unwrap();
        assert_eq!(ui.handle(key('/')), vec![RenderInstruction::PreventDefault]);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut ui = coordinator();
        ui.handle(InputEvent::DrawerToggleClicked);
        assert!(ui.handle(key('a')).is_empty());
        assert!(ui.handle(InputEvent::KeyPressed { key: Key::Enter }).is_empty());
        assert_eq!(ui.drawer_state(), DrawerState::Open);
    }

    #[test]
    fn test_rebound_shortcuts() {
        let bindings = ShortcutBindings {
            focus_search: Key::Char('k'),
            close_drawer: Key::Char('q'),
        };
        let mut ui = UiCoordinator::new(&Layout::default(), bindings).unwrap();
        ui.handle(InputEvent::DrawerToggleClicked);

        assert!(ui.handle(key('/')).is_empty());
        ui.handle(escape());
        assert_eq!(ui.drawer_state(), DrawerState::Open);

        assert_eq!(ui.handle(key('k')).len(), 2);
        ui.handle(key('q'));
        assert_eq!(ui.drawer_state(), DrawerState::Closed);
    }

    #[test]
    fn test_question_cards_toggle_independently() {
        let mut ui = coordinator();
        ui.handle(InputEvent::StoryRowClicked);

        ui.handle(InputEvent::CardClicked {
            card: "q1".to_string(),
        });
        let out = ui.handle(InputEvent::CardClicked {
            card: "q2".to_string(),
        });

        assert_eq!(ui.is_collapsed("q1"), Some(true));
        assert_eq!(ui.is_collapsed("q2"), Some(true));
        assert_eq!(ui.is_collapsed("q3"), Some(false));
        assert_eq!(
            out,
            vec![RenderInstruction::SetMarker {
                element: ElementRef::Card("q2".to_string()),
                marker: Marker::Collapsed,
                on: true,
            }]
        );
    }

    #[test]
    fn test_unknown_card_is_a_no_op() {
        let mut ui = coordinator();
        let out = ui.handle(InputEvent::CardClicked {
            card: "q99".to_string(),
        });
        assert!(out.is_empty());
        assert!(ui.snapshot().collapsed_cards.is_empty());
    }

    #[test]
    fn test_render_all_covers_every_element() {
        let ui = coordinator();
        let mut out: Vec<RenderInstruction> = Vec::new();
        ui.render_all(&mut out);

        let views = ui.views().len();
        let members: usize = GroupKind::ALL
            .iter()
            .map(|k| ui.group(*k).unwrap().members().len())
            .sum();
        let cards = ui.card_ids().len();

        assert_eq!(out.len(), views * 2 + members + 1 + cards);
        assert!(out.contains(&RenderInstruction::SetDisplay {
            element: ElementId::new("evidence-drawer"),
            mode: DisplayMode::None,
        }));
    }
}
