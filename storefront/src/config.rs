use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::theme::ThemeMode;

// site configuration
//
// the handful of things the owner of the store is expected to edit: who they are, how to
// reach them, and a few knobs on the scroll behavior and default theme
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub business: BusinessConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BusinessConfig {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    // free-form lines, e.g. "Mon-Fri 7am-6pm"
    #[serde(default)]
    pub hours: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // delay before restoring an offset on back/forward (raised to MIN_RESTORE_DELAY_MS)
    pub restore_delay_ms: u32,

    // delay before scrolling to the top on push/replace, immediate if unset
    pub top_delay_ms: Option<u32>,

    // offset past which the scroll-to-top button shows up
    pub button_threshold: f64,

    // how long the button waits after the last scroll event before re-checking
    pub button_debounce_ms: u32,

    // namespace for session storage keys
    pub storage_prefix: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            restore_delay_ms: 150,
            top_delay_ms: None,
            button_threshold: 300.0,
            button_debounce_ms: 100,
            storage_prefix: String::from("keystone_scroll"),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
}

// the config lives under a [config] table so that the file can carry other top-level
// tables (comments for the editor, deploy notes) without tripping the parser
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing site config");

        let data: TomlConfigFile = toml::from_str(doc)?;

        Ok(data.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [config.business]
        name = "Keystone Hardware"
        tagline = "Tools, lumber and advice since 1962"
        phone = "(555) 010-4477"
        email = "hello@keystone.example"
        address = "18 Mill Road, Brookfield"
        hours = ["Mon-Fri 7am-6pm", "Sat 8am-4pm"]

        [config.scroll]
        restore_delay_ms = 200
        top_delay_ms = 50
        button_threshold = 500.0
        button_debounce_ms = 80
        storage_prefix = "test_scroll"

        [config.theme]
        default_mode = "dark"
    "#;

    const MINIMAL: &str = r#"
        [config.business]
        name = "Keystone Hardware"
        tagline = "Tools"
        phone = "1"
        email = "a@b.example"
        address = "here"
    "#;

    #[test]
    fn parses_full_document() {
        let config = SiteConfig::from_toml(FULL).unwrap();

        assert_eq!(config.business.name, "Keystone Hardware");
        assert_eq!(config.business.hours.len(), 2);
        assert_eq!(config.scroll.restore_delay_ms, 200);
        assert_eq!(config.scroll.top_delay_ms, Some(50));
        assert_eq!(config.scroll.button_threshold, 500.0);
        assert_eq!(config.scroll.button_debounce_ms, 80);
        assert_eq!(config.scroll.storage_prefix, "test_scroll");
        assert_eq!(config.theme.default_mode, ThemeMode::Dark);
    }

    #[test]
    fn optional_sections_default() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();

        assert!(config.business.hours.is_empty());
        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(config.theme.default_mode, ThemeMode::Light);
    }

    #[test]
    fn partial_scroll_section_keeps_other_defaults() {
        let doc = format!("{MINIMAL}\n[config.scroll]\ntop_delay_ms = 10\n");
        let config = SiteConfig::from_toml(&doc).unwrap();

        assert_eq!(config.scroll.top_delay_ms, Some(10));
        assert_eq!(
            config.scroll.restore_delay_ms,
            ScrollConfig::default().restore_delay_ms
        );
    }

    #[test]
    fn missing_business_is_an_error() {
        assert!(SiteConfig::from_toml("[config]\n").is_err());
        assert!(SiteConfig::from_toml("not toml at all = = =").is_err());
    }

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::from_toml(include_str!("../../webapp/site.toml")).unwrap();
        assert!(!config.business.name.is_empty());
    }
}
