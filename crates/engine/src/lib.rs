//! Decision engine that hides gallery submissions according to user filters.
//!
//! This crate provides:
//! - FilterConfig, the value the engine is driven by
//! - Stage trait and the rating, artist and keyword stages
//! - StagePipeline for composing stages
//! - Classifier, which compiles a config once and classifies whole pages
//!
//! ## Architecture
//! Each rendered item is processed in stages:
//! 1. Rating: items outside the permitted ratings are suppressed
//! 2. Artist: items by blocked artists are suppressed
//! 3. Keyword: items whose title or description hits a keyword group are suppressed
//! 4. Allow list: suppressed items by allowed artists are shown again
//!
//! Items with no metadata record are always shown.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Classifier, FilterConfig};
//!
//! let config = FilterConfig::new()
//!     .with_rating_classes(["r-general"])
//!     .with_blocked_artists(["someartist"])
//!     .with_keyword_lines(["red fox"]);
//!
//! let classifier = Classifier::new(&config);
//! let verdicts = classifier.classify(&page_items, &records);
//! for id in verdicts.suppressed_ids() {
//!     // hide the element for `id`
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod keywords;
pub mod stage_pipeline;
pub mod stages;
pub mod traits;

// Re-export main types
pub use classifier::{Classifier, Verdicts};
pub use config::{FilterConfig, KeywordGroup};
pub use keywords::KeywordMatcher;
pub use stage_pipeline::StagePipeline;
pub use traits::{Candidate, Stage};

use metadata::{MetadataTable, PageItem};

/// Classify a page in one call.
///
/// Compiles `config` and runs it once. Callers that classify many pages
/// against the same config should keep a [`Classifier`] instead.
pub fn classify(items: &[PageItem], records: &MetadataTable, config: &FilterConfig) -> Verdicts {
    Classifier::new(config).classify(items, records)
}
