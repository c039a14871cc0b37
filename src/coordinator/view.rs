//! View registry and the single active view

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::UiError;

/// Identifier of a top-level view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Registered views plus the one that is currently active
#[derive(Debug, Clone)]
pub struct ViewNavigation {
    views: Vec<ViewId>,
    active: usize,
}

impl ViewNavigation {
    /// Register `views` in order, dropping duplicates. The first view starts active.
    pub fn new(views: impl IntoIterator<Item = ViewId>) -> Result<Self, UiError> {
        let mut registered: Vec<ViewId> = Vec::new();
        for view in views {
            if !registered.contains(&view) {
                registered.push(view);
            }
        }

        if registered.is_empty() {
            return Err(UiError::NoViews);
        }

        Ok(Self {
            views: registered,
            active: 0,
        })
    }

    /// All registered views, in registration order
    pub fn views(&self) -> &[ViewId] {
        &self.views
    }

    pub fn active(&self) -> &ViewId {
        &self.views[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().as_str() == id
    }

    fn position(&self, id: &str) -> Result<usize, UiError> {
        self.views
            .iter()
            .position(|v| v.as_str() == id)
            .ok_or_else(|| UiError::UnknownView(id.to_string()))
    }

    /// Make `id` the active view. Unknown ids leave the active view unchanged.
    pub fn activate(&mut self, id: &str) -> Result<&ViewId, UiError> {
        self.active = self.position(id)?;
        Ok(self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> ViewNavigation {
        ViewNavigation::new(["dashboard", "seed", "draft"].map(ViewId::from)).unwrap()
    }

    #[test]
    fn test_first_view_starts_active() {
        let nav = nav();
        assert_eq!(nav.active().as_str(), "dashboard");
        assert!(nav.is_active("dashboard"));
    }

    #[test]
    fn test_activate_registered_view() {
        let mut nav = nav();
        let active = nav.activate("draft").unwrap();
        assert_eq!(active.as_str(), "draft");
        assert!(!nav.is_active("dashboard"));
    }

    #[test]
    fn test_activate_unknown_view_keeps_previous() {
        let mut nav = nav();
        nav.activate("seed").unwrap();

        let result = nav.activate("nowhere");
        assert_eq!(result, Err(UiError::UnknownView("nowhere".to_string())));
        assert_eq!(nav.active().as_str(), "seed");
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let nav = ViewNavigation::new(["a", "b", "a"].map(ViewId::from)).unwrap();
        assert_eq!(nav.views().len(), 2);
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let result = ViewNavigation::new(Vec::<ViewId>::new());
        assert!(matches!(result, Err(UiError::NoViews)));
    }
}
