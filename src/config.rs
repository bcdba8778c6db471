use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "storycast-config";

/// Selectors for the mobile navigation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub hamburger: String,
    pub links: String,
    /// Clicks inside this region never close the menu.
    pub region: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hamburger: ".site-nav__hamburger".into(),
            links: ".site-nav__links".into(),
            region: ".site-nav".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub buttons: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            buttons: ".category-filter__pills button".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    pub toggle: String,
    pub content: String,
    pub player_button: String,
    pub region: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            toggle: "#transcript-toggle".into(),
            content: "#transcript-content".into(),
            player_button: "#btn-transcript".into(),
            region: "#transcript-region".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub audio: String,
    pub play: String,
    pub rewind: String,
    pub forward: String,
    pub progress: String,
    pub volume: String,
    pub time_current: String,
    pub time_duration: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            audio: "#audio-player".into(),
            play: "#btn-play".into(),
            rewind: "#btn-rewind".into(),
            forward: "#btn-forward".into(),
            progress: "#progress-bar".into(),
            volume: "#volume-control".into(),
            time_current: "#time-current".into(),
            time_duration: "#time-duration".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct A11yConfig {
    pub increase_text: String,
    pub decrease_text: String,
    pub high_contrast: String,
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            increase_text: "#btn-increase-text".into(),
            decrease_text: "#btn-decrease-text".into(),
            high_contrast: "#btn-high-contrast".into(),
        }
    }
}

/// Page configuration: log level plus where each controller finds its markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`.
    pub log_level: String,
    pub nav: NavConfig,
    pub filter: FilterConfig,
    pub transcript: TranscriptConfig,
    pub player: PlayerConfig,
    pub a11y: A11yConfig,
    /// Same-page links that get smooth scrolling.
    pub anchors: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            nav: NavConfig::default(),
            filter: FilterConfig::default(),
            transcript: TranscriptConfig::default(),
            player: PlayerConfig::default(),
            a11y: A11yConfig::default(),
            anchors: "a[href^=\"#\"]".into(),
        }
    }
}

impl Config {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Parse the embedded config text, falling back to defaults when it is
    /// absent or invalid.
    pub fn load(embedded: Option<&str>) -> Self {
        match embedded.map(str::trim).filter(|s| !s.is_empty()) {
            Some(data) => Self::from_json(data).unwrap_or_else(|e| {
                log::warn!("Ignoring page config: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
