//! The settings object as the settings page and storage exchange it.
//!
//! Field names follow the stored JSON (camelCase). This is where the
//! engine's `FilterConfig` gets built: names are normalised and keyword lines
//! split here, once, so the engine never has to default or clean anything.

use crate::error::{Result, SettingsError};
use engine::{FilterConfig, KeywordGroup};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Fields a stored settings object must carry
pub const REQUIRED_FIELDS: [&str; 8] = [
    "enabled",
    "messagingEnabled",
    "hideThumbs",
    "removeBanner",
    "blocklistArtists",
    "blocklistKeywords",
    "allowlistArtists",
    "ratings",
];

/// Rating tags a fresh install permits
pub const DEFAULT_RATINGS: [&str; 3] = ["r-general", "r-mature", "r-adult"];

/// User settings as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub enabled: bool,
    /// Show a notification after saves and list edits
    pub messaging_enabled: bool,
    /// Hide the whole thumbnail rather than just the image
    pub hide_thumbs: bool,
    pub remove_banner: bool,
    pub blocklist_artists: Vec<String>,
    /// One keyword group per line
    pub blocklist_keywords: Vec<String>,
    pub allowlist_artists: Vec<String>,
    pub ratings: Vec<String>,
}

/// How a suppressed item is hidden on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionStyle {
    /// The whole thumbnail, caption included
    HideThumbnail,
    /// Only the image; the caption stays
    HideImage,
}

impl SuppressionStyle {
    /// CSS class the page applies to a suppressed element
    pub fn css_class(self) -> &'static str {
        match self {
            SuppressionStyle::HideThumbnail => "hide-thumb",
            SuppressionStyle::HideImage => "hide-img",
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            messaging_enabled: true,
            hide_thumbs: false,
            remove_banner: false,
            blocklist_artists: Vec::new(),
            blocklist_keywords: Vec::new(),
            allowlist_artists: Vec::new(),
            ratings: DEFAULT_RATINGS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Parse a stored settings object.
    ///
    /// Every field in [`REQUIRED_FIELDS`] must be present; nothing is
    /// defaulted.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        if let Value::Object(map) = &value {
            if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !map.contains_key(**f)) {
                return Err(SettingsError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the engine config.
    ///
    /// Artist names are trimmed and lowercased and blank ones dropped.
    /// Keyword lines become keyword groups; blank lines become empty groups,
    /// which never match.
    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            enabled: self.enabled,
            rating_classes: self.ratings.iter().cloned().collect(),
            blocked_artists: normalize_artists(&self.blocklist_artists),
            allowed_artists: normalize_artists(&self.allowlist_artists),
            blocked_keyword_groups: self
                .blocklist_keywords
                .iter()
                .map(|line| KeywordGroup::parse(line))
                .collect(),
        }
    }

    pub fn suppression_style(&self) -> SuppressionStyle {
        if self.hide_thumbs {
            SuppressionStyle::HideThumbnail
        } else {
            SuppressionStyle::HideImage
        }
    }

    /// Add an artist to the block list.
    ///
    /// Returns false if the artist was already blocked.
    pub fn block_artist(&mut self, name: &str) -> bool {
        let artist = name.trim().to_lowercase();
        if artist.is_empty() || self.blocklist_artists.contains(&artist) {
            return false;
        }
        self.blocklist_artists.push(artist);
        true
    }

    /// Remove an artist from the block list.
    ///
    /// Returns false if the artist was not blocked.
    pub fn unblock_artist(&mut self, name: &str) -> bool {
        let artist = name.trim().to_lowercase();
        match self.blocklist_artists.iter().position(|a| *a == artist) {
            Some(index) => {
                self.blocklist_artists.remove(index);
                true
            }
            None => false,
        }
    }
}

fn normalize_artists(names: &[String]) -> HashSet<String> {
    names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
