//! Message types for communication between the coordinator and the render layer
//!
//! Input events flow in, render instructions flow out. The render layer never
//! writes coordinator state directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinator::{GroupKind, ViewId};
use crate::shortcuts::Key;

/// Identity of a render element, used for click-target comparison and focus
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Events emitted by the render layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// A navigation control was clicked
    NavClicked { view: String },
    /// A per-story mode tab was clicked; carries the tab label
    ModeTabClicked { label: String },
    /// A member of a selection group was clicked
    ItemClicked { group: GroupKind, item: String },
    /// A row that opens a story was clicked
    StoryRowClicked,
    /// The drawer toggle control was clicked
    DrawerToggleClicked,
    /// Something inside the drawer overlay was clicked
    DrawerOverlayClicked { target: ElementId },
    /// The drawer's close control was clicked
    DrawerCloseClicked,
    /// A collapsible card was clicked
    CardClicked { card: String },
    /// A key was pressed anywhere on the page
    KeyPressed { key: Key },
}

/// Visual marker the render layer toggles on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Active,
    Selected,
    Collapsed,
}

/// Layout mode of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Flex,
    #[default]
    None,
}

/// Elements whose markers the coordinator controls
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRef {
    NavControl(ViewId),
    View(ViewId),
    Item(GroupKind, String),
    Card(String),
}

/// Instructions sent from the coordinator to the render layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Set or clear a marker on an element
    SetMarker {
        element: ElementRef,
        marker: Marker,
        on: bool,
    },
    /// Change a container's display mode
    SetDisplay { element: ElementId, mode: DisplayMode },
    /// Move input focus
    Focus { element: ElementId },
    /// Suppress default handling of the event being dispatched
    PreventDefault,
}

/// Receiver of render instructions
pub trait RenderSink {
    fn apply(&mut self, instruction: RenderInstruction);
}

impl RenderSink for Vec<RenderInstruction> {
    fn apply(&mut self, instruction: RenderInstruction) {
        self.push(instruction);
    }
}
