//! Stage that hides submissions by blocked artists.

use crate::traits::{Candidate, Stage};
use std::collections::HashSet;

/// Removes candidates whose author is on the block list.
///
/// Block list entries are expected in lowercase; the author name is
/// lowercased per comparison.
pub struct ArtistBlockFilter {
    blocked: HashSet<String>,
}

impl ArtistBlockFilter {
    pub fn new<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked: blocked.into_iter().map(Into::into).collect(),
        }
    }
}

impl Stage for ArtistBlockFilter {
    fn name(&self) -> &str {
        "ArtistBlockFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        if self.blocked.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| !self.blocked.contains(&candidate.record.author_key()))
            .collect()
    }
}
