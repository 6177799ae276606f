//! Keyword groups compiled into matchers.
//!
//! Compilation happens once per configuration. Each term becomes a
//! case-insensitive regex anchored on word boundaries, with the term itself
//! matched literally.

use crate::config::KeywordGroup;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// All terms of one keyword group, compiled.
#[derive(Debug, Clone)]
struct CompiledGroup {
    terms: Vec<Regex>,
}

impl CompiledGroup {
    /// Every term must hit the title or the description
    fn matches(&self, title: &str, description: &str) -> bool {
        self.terms
            .iter()
            .all(|term| term.is_match(title) || term.is_match(description))
    }
}

/// Matches item text against the configured keyword groups.
///
/// An item matches when any group matches. Empty groups are dropped at
/// compile time, so they can never match.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    groups: Vec<CompiledGroup>,
}

impl KeywordMatcher {
    pub fn compile(groups: &[KeywordGroup]) -> Self {
        let groups = groups
            .iter()
            .filter(|group| !group.is_empty())
            .filter_map(|group| {
                let terms: Result<Vec<Regex>, regex::Error> =
                    group.terms().iter().map(|term| compile_term(term)).collect();
                match terms {
                    Ok(terms) => Some(CompiledGroup { terms }),
                    Err(e) => {
                        warn!("Skipping keyword group {:?}: {}", group.terms(), e);
                        None
                    }
                }
            })
            .collect();

        Self { groups }
    }

    /// True when no group can ever match
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn matches(&self, title: &str, description: &str) -> bool {
        self.groups
            .iter()
            .any(|group| group.matches(title, description))
    }
}

fn compile_term(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
}
