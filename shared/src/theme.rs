use crate::{KvStorage, PageSettings, StoreError};

/// Stored value of the theme flag for the dark theme.
pub const THEME_DARK: &str = "1";
/// Stored value of the theme flag for the light theme.
pub const THEME_LIGHT: &str = "0";

/// The light/dark theme switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeController {
    dark: bool,
    dark_background: String,
    light_background: String,
}

impl ThemeController {
    /// Instantiates the light theme with the backgrounds from `settings`.
    pub fn new(settings: &PageSettings) -> ThemeController {
        ThemeController {
            dark: false,
            dark_background: settings.dark_background.clone(),
            light_background: settings.light_background.clone(),
        }
    }

    /// Reads the persisted flag under `key`. Only [`THEME_DARK`] selects the dark theme.
    pub fn restore<S: KvStorage>(&mut self, storage: &S, key: &str) -> bool {
        self.dark = storage.get(key).as_deref() == Some(THEME_DARK);
        self.dark
    }

    /// Whether the dark theme is selected.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Selects a theme and persists the flag under `key`.
    pub fn set<S: KvStorage>(
        &mut self,
        dark: bool,
        storage: &S,
        key: &str,
    ) -> Result<(), StoreError> {
        self.dark = dark;

        storage.set(key, if dark { THEME_DARK } else { THEME_LIGHT })
    }

    /// Flips the theme and persists it, returning the new state.
    pub fn toggle<S: KvStorage>(&mut self, storage: &S, key: &str) -> Result<bool, StoreError> {
        self.set(!self.dark, storage, key)?;

        Ok(self.dark)
    }

    /// Value of the background variable for the current theme.
    pub fn background(&self) -> &str {
        if self.dark {
            &self.dark_background
        } else {
            &self.light_background
        }
    }

    /// Value of the toggle control's `aria-pressed` attribute.
    pub fn pressed(&self) -> &'static str {
        if self.dark {
            "true"
        } else {
            "false"
        }
    }
}
