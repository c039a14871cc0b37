//! Collapsible question cards

use std::collections::BTreeMap;

use super::error::UiError;

/// Collapsed flags of every registered card
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    collapsed: BTreeMap<String, bool>,
    order: Vec<String>,
}

impl CardSet {
    pub fn new(cards: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::default();
        for card in cards {
            if set.collapsed.insert(card.clone(), false).is_none() {
                set.order.push(card);
            }
        }
        set
    }

    /// Card ids in registration order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn is_collapsed(&self, card: &str) -> Option<bool> {
        self.collapsed.get(card).copied()
    }

    /// Flip one card. Returns its new collapsed flag.
    pub fn toggle(&mut self, card: &str) -> Result<bool, UiError> {
        let flag = self
            .collapsed
            .get_mut(card)
            .ok_or_else(|| UiError::UnknownCard(card.to_string()))?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn collapsed_ids(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.collapsed.get(*id).copied().unwrap_or(false))
            .cloned()
            .collect()
    }
}
