use std::str::FromStr;

use yew::AttrValue;

/// Element the application attaches to.
pub const MOUNT_POINT: &str = "#app";

/// Build-time settings for the application host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Public URL the site is served under; becomes the router basename.
    pub base_url: String,
    /// Whether page views are reported to the analytics sink.
    pub analytics: bool,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_owned(),
            analytics: false,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Reads `BASE_URL` and `LOG_LEVEL` as captured at compile time, and the
    /// `analytics` cargo feature.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BASE_URL"),
            option_env!("LOG_LEVEL"),
            cfg!(feature = "analytics"),
        )
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>, analytics: bool) -> Self {
        let defaults = Self::default();
        let log_level = match log_level.map(log::Level::from_str) {
            Some(Ok(level)) => level,
            _ => defaults.log_level,
        };
        Self {
            base_url: base_url.map_or(defaults.base_url, str::to_owned),
            analytics,
            log_level,
        }
    }

    /// Router basename derived from `base_url`; `None` when served from root.
    pub fn basename(&self) -> Option<AttrValue> {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(AttrValue::from(trimmed.to_owned()))
        }
    }
}
