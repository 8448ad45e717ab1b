//! Light/dark theme controller.
//!
//! The controller owns the dark-mode flag and the rules for changing it.
//! Persisting goes through a `PreferenceStore`; turning the flag into colours
//! is a separate `apply` step so the transitions can be tested on their own.

mod system;

pub use system::{PlatformPreference, PreferenceWatcher, SystemPreference};

use crate::storage::{PreferenceStore, THEME_KEY};
use crate::ui::Theme;
use log::*;

/// Specifying the display modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value; anything else is treated as no preference.
    ///
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Owns the current mode and whether the user picked it explicitly.
///
pub struct ThemeController {
    is_dark: bool,
    has_stored_preference: bool,
    error: Option<String>,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Initialise from the stored preference, falling back to the platform
    /// preference when nothing usable is stored. Storage failures are kept
    /// as a non-fatal error.
    ///
    pub fn init(store: Box<dyn PreferenceStore>, platform: &dyn SystemPreference) -> Self {
        let mut error = None;
        let stored = match store.get(THEME_KEY) {
            Ok(Some(value)) => {
                let mode = ThemeMode::parse(&value);
                if mode.is_none() {
                    warn!("Ignoring unknown stored theme '{}'", value);
                }
                mode
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                error = Some(e.to_string());
                None
            }
        };

        let is_dark = match stored {
            Some(mode) => mode == ThemeMode::Dark,
            None => platform.prefers_dark(),
        };
        debug!(
            "Initial theme is {} ({})",
            ThemeMode::from_dark(is_dark).as_str(),
            if stored.is_some() { "stored" } else { "platform" }
        );

        ThemeController {
            is_dark,
            has_stored_preference: stored.is_some(),
            error,
            store,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_stored_preference(&self) -> bool {
        self.has_stored_preference
    }

    /// Flip the mode at the user's request and persist it.
    ///
    pub fn toggle(&mut self) -> ThemeMode {
        self.error = None;
        self.is_dark = !self.is_dark;
        info!("Theme switched to {}", self.mode().as_str());
        self.persist();
        self.mode()
    }

    /// React to a platform preference change. Returns whether the mode
    /// changed; an explicit user choice always wins.
    ///
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.has_stored_preference {
            debug!("Ignoring platform theme change; user preference is stored.");
            return false;
        }
        if self.is_dark == prefers_dark {
            return false;
        }
        self.is_dark = prefers_dark;
        // Not persisted: the platform keeps control until the user toggles.
        info!("Following platform theme: {}", self.mode().as_str());
        true
    }

    /// Return the palette for the current mode.
    ///
    pub fn apply(&self) -> Theme {
        Theme::for_mode(self.mode())
    }

    fn persist(&mut self) {
        match self.store.set(THEME_KEY, self.mode().as_str()) {
            Ok(()) => self.has_stored_preference = true,
            Err(e) => {
                warn!("Failed to save theme preference: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore, StorageError};

    struct FixedPreference(bool);

    impl SystemPreference for FixedPreference {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn store_with(value: &str) -> Box<dyn PreferenceStore> {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, value).unwrap();
        Box::new(store)
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let controller = ThemeController::init(store_with("light"), &FixedPreference(true));
        assert!(!controller.is_dark());
        assert!(controller.has_stored_preference());
    }

    #[test]
    fn test_init_falls_back_to_platform() {
        let controller =
            ThemeController::init(Box::new(MemoryStore::new()), &FixedPreference(true));
        assert!(controller.is_dark());
        assert!(!controller.has_stored_preference());
    }

    #[test]
    fn test_init_ignores_unknown_value() {
        let controller = ThemeController::init(store_with("sepia"), &FixedPreference(false));
        assert!(!controller.is_dark());
        assert!(!controller.has_stored_preference());
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let controller = ThemeController::init(Box::new(BrokenStore), &FixedPreference(true));
        assert!(controller.is_dark());
        assert!(controller.error().unwrap().contains("unavailable"));
    }

    #[test]
    fn test_toggle_clears_error_then_records_write_failure() {
        let mut controller = ThemeController::init(Box::new(BrokenStore), &FixedPreference(true));
        assert_eq!(controller.toggle(), ThemeMode::Light);
        // The read error is cleared; the failed write records a new one.
        assert!(controller.error().is_some());
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let platform = FixedPreference(false);

        let mut controller = ThemeController::init(Box::new(FileStore::new(dir.path())), &platform);
        assert!(!controller.is_dark());
        controller.toggle();
        assert!(controller.is_dark());
        assert_eq!(controller.error(), None);

        let reloaded = ThemeController::init(Box::new(FileStore::new(dir.path())), &platform);
        assert!(reloaded.is_dark());
        assert!(reloaded.has_stored_preference());
    }

    #[test]
    fn test_system_change_followed_without_stored_preference() {
        let mut controller =
            ThemeController::init(Box::new(MemoryStore::new()), &FixedPreference(false));
        assert!(controller.on_system_change(true));
        assert!(controller.is_dark());
        assert!(!controller.has_stored_preference());
        assert!(!controller.on_system_change(true));
        assert!(controller.on_system_change(false));
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_system_change_ignored_with_stored_preference() {
        let mut controller = ThemeController::init(store_with("light"), &FixedPreference(false));
        assert!(!controller.on_system_change(true));
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let mut controller =
            ThemeController::init(Box::new(MemoryStore::new()), &FixedPreference(false));
        controller.toggle();
        assert!(!controller.on_system_change(false));
        assert!(controller.is_dark());
    }

    #[test]
    fn test_apply_matches_mode() {
        let controller = ThemeController::init(store_with("dark"), &FixedPreference(false));
        assert_eq!(controller.apply().name, Theme::dark().name);
    }
}
