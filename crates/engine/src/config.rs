//! Filter configuration consumed by the engine.
//!
//! A `FilterConfig` is a plain value: the engine reads it and never writes
//! back. Building one from stored user settings (lowercasing names, splitting
//! keyword lines) happens at the boundary, in the `settings` crate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the user configured that affects visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Global switch. When false the caller shows everything and does not
    /// run the engine at all.
    pub enabled: bool,
    /// Rating tags allowed to display. Empty means no rating restriction.
    pub rating_classes: HashSet<String>,
    /// Lowercase author names to suppress
    pub blocked_artists: HashSet<String>,
    /// Lowercase author names that are always shown
    pub allowed_artists: HashSet<String>,
    /// One group per keyword line, in the order the user entered them
    pub blocked_keyword_groups: Vec<KeywordGroup>,
}

impl FilterConfig {
    /// An enabled config with no restrictions
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn with_rating_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rating_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_blocked_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_artists = artists.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allowed_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_artists = artists.into_iter().map(Into::into).collect();
        self
    }

    /// Parse each line into a keyword group
    pub fn with_keyword_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blocked_keyword_groups = lines
            .into_iter()
            .map(|line| KeywordGroup::parse(line.as_ref()))
            .collect();
        self
    }
}

/// One blocklist line split into terms.
///
/// Every term has to appear in an item's text for the group to match.
///
/// Deserialized from a plain list of terms, normalised the same way as
/// [`KeywordGroup::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordGroup {
    terms: Vec<String>,
}

impl KeywordGroup {
    /// Split a line on whitespace, dropping blank terms
    pub fn parse(line: &str) -> Self {
        Self {
            terms: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// A group without terms never matches
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(Into::into)
                .map(|term: String| term.trim().to_string())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }
}

impl From<Vec<String>> for KeywordGroup {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<KeywordGroup> for Vec<String> {
    fn from(group: KeywordGroup) -> Self {
        group.terms
    }
}
