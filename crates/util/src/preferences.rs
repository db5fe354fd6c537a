//! Theme preference persistence.
//!
//! The theme lives under its own session key next to the palette. A missing
//! or unrecognised value falls back to [`ThemeName::default`] (dark).

use std::sync::Arc;

use tracing::warn;
use vyra_types::ThemeName;

use crate::session_storage::{SessionStorage, StorageError};

/// Session key holding the theme name.
pub const THEME_KEY: &str = "vyra-theme";

/// Session-scoped theme store.
pub struct ThemePreference {
    storage: Arc<dyn SessionStorage>,
}

impl ThemePreference {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// The saved theme, or the default when none is usable.
    pub fn current(&self) -> ThemeName {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(key = THEME_KEY, value = %raw, "Unknown theme in session; using default");
                ThemeName::default()
            }),
            Ok(None) => ThemeName::default(),
            Err(error) => {
                warn!(key = THEME_KEY, error = %error, "Failed to read theme; using default");
                ThemeName::default()
            }
        }
    }

    /// Persist an explicit theme.
    pub fn set(&self, theme: ThemeName) -> Result<(), StorageError> {
        self.storage.set_item(THEME_KEY, theme.as_str())
    }

    /// Flip between light and dark and return the new theme.
    ///
    /// The new theme is returned even when persisting it fails; the error is
    /// logged so the caller can still apply it for the current view.
    pub fn toggle(&self) -> ThemeName {
        let next = self.current().toggled();
        if let Err(error) = self.set(next) {
            warn!(key = THEME_KEY, error = %error, "Failed to persist theme");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_storage::InMemorySessionStorage;

    fn preference() -> (Arc<InMemorySessionStorage>, ThemePreference) {
        let storage = Arc::new(InMemorySessionStorage::new());
        (storage.clone(), ThemePreference::new(storage))
    }

    #[test]
    fn defaults_to_dark() {
        let (_, theme) = preference();
        assert_eq!(theme.current(), ThemeName::Dark);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let (storage, theme) = preference();
        assert_eq!(theme.toggle(), ThemeName::Light);
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(theme.toggle(), ThemeName::Dark);
        assert_eq!(theme.current(), ThemeName::Dark);
    }

    #[test]
    fn unknown_value_falls_back_to_default() {
        let (storage, theme) = preference();
        storage.set_item(THEME_KEY, "solarized").unwrap();
        assert_eq!(theme.current(), ThemeName::Dark);
    }

    #[test]
    fn set_persists_explicit_theme() {
        let (_, theme) = preference();
        theme.set(ThemeName::Light).unwrap();
        assert_eq!(theme.current(), ThemeName::Light);
    }
}
