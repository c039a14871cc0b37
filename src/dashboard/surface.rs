//! Render-side mirror of coordinator instructions
//!
//! The egui shell draws from this surface only. It receives instructions and
//! never writes back into the coordinator.

use std::collections::{HashMap, HashSet};

use crate::coordinator::ViewId;
use crate::shared::{DisplayMode, ElementId, ElementRef, Marker, RenderInstruction, RenderSink};

/// Markers, display modes and focus requests as last instructed
#[derive(Debug, Default)]
pub struct RenderSurface {
    markers: HashSet<(ElementRef, Marker)>,
    displays: HashMap<ElementId, DisplayMode>,
    pending_focus: Option<ElementId>,
    default_prevented: bool,
}

impl RenderSurface {
    pub fn has_marker(&self, element: &ElementRef, marker: Marker) -> bool {
        self.markers.contains(&(element.clone(), marker))
    }

    pub fn is_active(&self, element: &ElementRef) -> bool {
        self.has_marker(element, Marker::Active)
    }

    /// Display mode of a container; hidden until told otherwise
    pub fn display(&self, element: &ElementId) -> DisplayMode {
        self.displays.get(element).copied().unwrap_or_default()
    }

    /// The view container currently marked active
    pub fn visible_view(&self) -> Option<&ViewId> {
        self.markers.iter().find_map(|(element, marker)| match (element, marker) {
            (ElementRef::View(view), Marker::Active) => Some(view),
            _ => None,
        })
    }

    /// Consume a pending focus request aimed at `element`
    pub fn take_focus(&mut self, element: &ElementId) -> bool {
        if self.pending_focus.as_ref() == Some(element) {
            self.pending_focus = None;
            true
        } else {
            false
        }
    }

    /// Whether default handling of the last dispatched event was suppressed.
    /// Resets the flag.
    pub fn take_default_prevented(&mut self) -> bool {
        std::mem::take(&mut self.default_prevented)
    }
}

impl RenderSink for RenderSurface {
    fn apply(&mut self, instruction: RenderInstruction) {
        match instruction {
            RenderInstruction::SetMarker { element, marker, on } => {
                if on {
                    self.markers.insert((element, marker));
                } else {
                    self.markers.remove(&(element, marker));
                }
            }
            RenderInstruction::SetDisplay { element, mode } => {
                self.displays.insert(element, mode);
            }
            RenderInstruction::Focus { element } => self.pending_focus = Some(element),
            RenderInstruction::PreventDefault => self.default_prevented = true,
        }
    }
}
