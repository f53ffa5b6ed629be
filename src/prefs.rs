use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Theme to use at startup: a valid stored value wins, otherwise the
    /// system color-scheme preference.
    pub fn resolve(stored: &str, prefers_dark: bool) -> Self {
        match stored.parse::<Theme>() {
            Ok(theme) => theme,
            Err(_) if prefers_dark => Theme::Dark,
            Err(_) => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PrefsError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }

    /// Stored value, or English when missing or unrecognized.
    pub fn from_stored(stored: &str) -> Self {
        stored.parse().unwrap_or_default()
    }

    /// Name of the language the toggle switches to, written in that language.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::En => "Tiếng Việt",
            Language::Vi => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "vi" => Ok(Language::Vi),
            other => Err(PrefsError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_wins() {
        assert_eq!(Theme::resolve("light", true), Theme::Light);
        assert_eq!(Theme::resolve("dark", false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_without_stored_theme() {
        assert_eq!(Theme::resolve("", true), Theme::Dark);
        assert_eq!(Theme::resolve("", false), Theme::Light);
        assert_eq!(Theme::resolve("solarized", true), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_round_trips_through_storage() {
        let theme = Theme::Light.toggled();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.to_string(), "dark");
        assert_eq!(Theme::resolve(&theme.to_string(), false), Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
    }

    #[test]
    fn test_unknown_theme_error() {
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(PrefsError::UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(Language::from_stored(""), Language::En);
        assert_eq!(Language::from_stored("fr"), Language::En);
        assert_eq!(Language::from_stored("vi"), Language::Vi);
    }

    #[test]
    fn test_language_toggle() {
        assert_eq!(Language::En.toggled(), Language::Vi);
        assert_eq!(Language::Vi.toggled().to_string(), "en");
        assert_eq!(Language::En.switch_label(), "Tiếng Việt");
        assert_eq!(Language::Vi.switch_label(), "English");
    }
}
