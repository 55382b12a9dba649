//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Theme persistence over any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Explicit user choice, if any.
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    /// Stored choice, else the system preference.
    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        self.stored().unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn set(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_resolve_prefers_stored_choice() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert_eq!(themes.stored(), None);
        assert_eq!(themes.resolve(false), Theme::Light);
        assert_eq!(themes.resolve(true), Theme::Dark);

        themes.set(Theme::Light);
        assert_eq!(themes.resolve(true), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_system() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        let themes = ThemeStore::new(store);
        assert_eq!(themes.stored(), None);
        assert_eq!(themes.resolve(true), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
