//! Core domain types for gallery page metadata.
//!
//! These are the records the filter engine reads. They are built once per
//! page load and never mutated afterwards.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a submission on the current page
pub type SubmissionId = u64;

/// Metadata for every submission on a page, keyed by id
pub type MetadataTable = HashMap<SubmissionId, ItemRecord>;

// =============================================================================
// Item Types
// =============================================================================

/// Everything the filter engine knows about one submission.
///
/// `author_name` keeps the case it was extracted with; comparisons lowercase
/// it on the fly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub id: SubmissionId,
    pub author_name: String,
    pub title: String,
    /// Empty when the record was derived from visible markup
    pub description: String,
}

impl ItemRecord {
    pub fn new(
        id: SubmissionId,
        author_name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author_name: author_name.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Author name as used for block/allow list lookups
    pub fn author_key(&self) -> String {
        self.author_name.to_lowercase()
    }
}

/// One rendered gallery entry as the page exposes it.
///
/// `rating` is the content-rating tag on the element (e.g. `r-general`).
/// `author` and `title` are the strings visible in the caption and only feed
/// the fallback extraction path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    pub id: SubmissionId,
    pub rating: Option<String>,
    pub author: String,
    pub title: String,
}

impl PageItem {
    pub fn new(id: SubmissionId, rating: Option<&str>) -> Self {
        Self {
            id,
            rating: rating.map(str::to_string),
            author: String::new(),
            title: String::new(),
        }
    }

    /// Set the visible caption strings (builder pattern)
    pub fn with_caption(mut self, author: impl Into<String>, title: impl Into<String>) -> Self {
        self.author = author.into();
        self.title = title.into();
        self
    }

    /// Minimal record built from the caption alone
    pub fn to_minimal_record(&self) -> ItemRecord {
        ItemRecord::new(self.id, self.author.clone(), self.title.clone(), String::new())
    }
}
