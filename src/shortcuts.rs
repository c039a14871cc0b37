//! Keyboard shortcut keys and bindings

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A key identity as delivered by the render layer.
///
/// Deserializing is lenient: names outside the shortcut grammar become
/// `Key::Other`. Shortcut bindings go through `parse_key` and stay strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    /// A printable character, letters lower-cased
    Char(char),
    /// Function key F1-F12
    Function(u8),
    /// Any other key, by its render-layer name. Never bound to a shortcut.
    Other(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "F{}", n),
            Key::Other(name) => f.write_str(name),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        parse_key(&value).unwrap_or(Key::Other(value))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Parses a key string like "/", "Escape", "Esc", "F5" or "q" into a Key
pub fn parse_key(key_str: &str) -> Result<Key> {
    // A lone space is the space key, not blank input
    if key_str == " " {
        return Ok(Key::Char(' '));
    }

    let trimmed = key_str.trim();

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c.to_ascii_lowercase()));
    }

    let upper = trimmed.to_uppercase();
    let key = match upper.as_str() {
        "" => return Err(anyhow!("Empty key string")),

        "ESCAPE" | "ESC" => Key::Escape,
        "ENTER" | "RETURN" => Key::Enter,
        "TAB" => Key::Tab,
        "BACKSPACE" => Key::Backspace,

        // Named punctuation
        "SLASH" => Key::Char('/'),
        "SPACE" => Key::Char(' '),

        _ => {
            let n = upper
                .strip_prefix('F')
                .and_then(|rest| rest.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
                .ok_or_else(|| anyhow!("Unknown key: {}", trimmed))?;
            Key::Function(n)
        }
    };

    Ok(key)
}

/// Actions a global shortcut can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Focus the dashboard search field
    FocusSearch,
    /// Close the evidence drawer
    CloseDrawer,
}

/// Keys bound to each shortcut action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutBindings {
    /// Key that focuses the search field while the dashboard is active
    #[serde(deserialize_with = "deserialize_binding")]
    pub focus_search: Key,
    /// Key that closes the drawer from anywhere
    #[serde(deserialize_with = "deserialize_binding")]
    pub close_drawer: Key,
}

/// Bindings must name a key `parse_key` knows
fn deserialize_binding<'de, D>(deserializer: D) -> std::result::Result<Key, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    parse_key(&name).map_err(serde::de::Error::custom)
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self {
            focus_search: Key::Char('/'),
            close_drawer: Key::Escape,
        }
    }
}

impl ShortcutBindings {
    /// Actions bound to `key`, search first
    pub fn actions_for(&self, key: &Key) -> Vec<ShortcutAction> {
        let mut actions = Vec::new();
        if *key == self.focus_search {
            actions.push(ShortcutAction::FocusSearch);
        }
        if *key == self.close_drawer {
            actions.push(ShortcutAction::CloseDrawer);
        }
        actions
    }
}
