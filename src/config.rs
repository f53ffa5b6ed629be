use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

use crate::{
    content::{parse_json, read_embedded, ContentError},
    tracker::SectionResolver,
};

pub const SITE_CONFIG_FILE: &str = "site.json";

/// Loaded once; falls back to the built-in defaults if `site.json` is broken.
pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::load().unwrap_or_else(|e| {
        log::warn!("using default site config: {e}");
        SiteConfig::default()
    })
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Distance from the top of the viewport to the activation line.
    pub activation_offset: f64,
    pub nav_bar_height: f64,
    /// Visible fraction of an element that triggers its reveal.
    pub reveal_threshold: f64,
    pub scrolled_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            activation_offset: 100.0,
            nav_bar_height: 80.0,
            reveal_threshold: 0.1,
            scrolled_threshold: 50.0,
        }
    }
}

impl TrackerConfig {
    pub fn resolver(&self) -> SectionResolver {
        SectionResolver::new(self.activation_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplashConfig {
    pub tick_ms: u32,
    pub step_percent: u32,
    pub hide_after_ms: u32,
    pub fade_ms: u32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            step_percent: 2,
            hide_after_ms: 1700,
            fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub cv_path: String,
    pub tracker: TrackerConfig,
    pub splash: SplashConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            cv_path: "/cv.pdf".to_string(),
            tracker: TrackerConfig::default(),
            splash: SplashConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, ContentError> {
        let raw = read_embedded(SITE_CONFIG_FILE)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let config: Self = parse_json(SITE_CONFIG_FILE, raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let t = &self.tracker;
        if !(t.reveal_threshold > 0.0 && t.reveal_threshold <= 1.0) {
            return Err(ContentError::Invalid(format!(
                "revealThreshold must be within (0, 1], got {}",
                t.reveal_threshold
            )));
        }
        if t.activation_offset < 0.0 || t.nav_bar_height < 0.0 {
            return Err(ContentError::Invalid(
                "tracker offsets must not be negative".to_string(),
            ));
        }
        if self.splash.tick_ms == 0 {
            return Err(ContentError::Invalid("splash tickMs must be positive".to_string()));
        }
        Ok(())
    }
}

/// Year of the build, for the footer copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_loads() {
        let config = SiteConfig::load().expect("site.json should be valid");
        assert_eq!(config.tracker.activation_offset, 100.0);
        assert_eq!(config.tracker.reveal_threshold, 0.1);
        assert!(config.cv_path.ends_with(".pdf"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "tracker": { "navBarHeight": 64 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.tracker.nav_bar_height, 64.0);
        assert_eq!(config.tracker.activation_offset, 100.0);
        assert_eq!(config.splash, SplashConfig::default());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let res = SiteConfig::from_json(r#"{ "tracker": { "revealThreshold": 10 } }"#);
        assert!(matches!(res, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let res = SiteConfig::from_json(r#"{ "tracker": { "revealThreshold": 0 } }"#);
        assert!(matches!(res, Err(ContentError::Invalid(_))));

        let config = SiteConfig::from_json(r#"{ "tracker": { "revealThreshold": 1 } }"#)
            .expect("full visibility is a valid threshold");
        assert_eq!(config.tracker.reveal_threshold, 1.0);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let res = SiteConfig::from_json("{ tracker: ");
        assert!(matches!(res, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_build_year_is_recent() {
        assert!(build_year() >= 2024);
    }
}
