//! Allow-list override.
//!
//! Runs over the items the other stages suppressed and takes back any by an
//! allowed artist, regardless of which stage suppressed them (rating
//! included).

use crate::traits::{Candidate, Stage};
use std::collections::HashSet;

/// Keeps only the suppressed candidates whose author is NOT allowed.
///
/// Unlike the other stages, the input here is the suppressed set, so what
/// passes through stays suppressed and what is dropped becomes visible.
pub struct AllowListOverride {
    allowed: HashSet<String>,
}

impl AllowListOverride {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Stage for AllowListOverride {
    fn name(&self) -> &str {
        "AllowListOverride"
    }

    fn apply<'a>(&self, suppressed: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        if self.allowed.is_empty() {
            return suppressed;
        }

        suppressed
            .into_iter()
            .filter(|candidate| !self.allowed.contains(&candidate.record.author_key()))
            .collect()
    }
}
