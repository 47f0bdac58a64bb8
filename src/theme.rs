use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use thiserror::Error;

/// localStorage key holding the literal string "dark" or "light".
pub const THEME_STORAGE_KEY: &str = "theme";

/// The one piece of cross-cutting state on the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeParseError {
    #[error("unknown theme {0:?}, expected \"dark\" or \"light\"")]
    Unknown(String),
}

impl Theme {
    pub fn flip(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError::Unknown(other.to_string())),
        }
    }
}

/// Read handle + setter for the theme flag, provided by the root composer.
///
/// Child components pick between two static class sets with [`ThemeContext::pick`];
/// only the root composer persists the flag.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> Self {
        Self { theme, set_theme }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.flip());
    }

    /// One of two static class sets, depending on the current theme.
    pub fn pick(&self, on_dark: &'static str, on_light: &'static str) -> &'static str {
        if self.dark() {
            on_dark
        } else {
            on_light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_twice_is_identity() {
        assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
        assert_eq!(Theme::Light.flip().flip(), Theme::Light);
    }

    #[test]
    fn test_persisted_string_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            let stored = theme.to_string();
            assert_eq!(stored.parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_absent_preference_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_garbage_preference_is_an_error() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError::Unknown("solarized".to_string()));
        // storage layer falls back to the default on parse failure
        assert_eq!(
            "solarized".parse::<Theme>().unwrap_or_default(),
            Theme::Dark
        );
    }
}
