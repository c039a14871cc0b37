//! Evidence drawer overlay state

use serde::{Deserialize, Serialize};

use super::error::UiError;
use crate::shared::{DisplayMode, ElementId};

/// Open/closed state of the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

impl DrawerState {
    pub fn display_mode(&self) -> DisplayMode {
        match self {
            DrawerState::Open => DisplayMode::Flex,
            DrawerState::Closed => DisplayMode::None,
        }
    }
}

/// The drawer, if the layout has one
#[derive(Debug, Clone)]
pub struct Drawer {
    element: Option<ElementId>,
    state: DrawerState,
}

impl Drawer {
    pub fn new(element: Option<ElementId>) -> Self {
        Self {
            element,
            state: DrawerState::Closed,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn element(&self) -> Result<&ElementId, UiError> {
        self.element
            .as_ref()
            .ok_or(UiError::MissingElement("drawer"))
    }

    pub fn toggle(&mut self) -> Result<DrawerState, UiError> {
        self.element()?;
        self.state = match self.state {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        };
        Ok(self.state)
    }

    pub fn close(&mut self) -> Result<DrawerState, UiError> {
        self.element()?;
        self.state = DrawerState::Closed;
        Ok(self.state)
    }

    /// Whether a click on `target` landed on the overlay background itself
    pub fn is_background(&self, target: &ElementId) -> bool {
        self.element.as_ref() == Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawer() -> Drawer {
        Drawer::new(Some(ElementId::new("evidence-drawer")))
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(drawer().state(), DrawerState::Closed);
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let mut d = drawer();
        assert_eq!(d.toggle().unwrap(), DrawerState::Open);
        assert_eq!(d.toggle().unwrap(), DrawerState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut d = drawer();
        d.toggle().unwrap();
        assert_eq!(d.close().unwrap(), DrawerState::Closed);
        assert_eq!(d.close().unwrap(), DrawerState::Closed);
    }

    #[test]
    fn test_missing_drawer_stays_closed() {
        let mut d = Drawer::new(None);
        assert_eq!(d.toggle(), Err(UiError::MissingElement("drawer")));
        assert_eq!(d.state(), DrawerState::Closed);
    }

    #[test]
    fn test_background_check_compares_identity() {
        let d = drawer();
        assert!(d.is_background(&ElementId::new("evidence-drawer")));
        assert!(!d.is_background(&ElementId::new("evidence-drawer-panel")));
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(DrawerState::Open.display_mode(), DisplayMode::Flex);
        assert_eq!(DrawerState::Closed.display_mode(), DisplayMode::None);
    }
}
