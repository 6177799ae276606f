//! Stage that hides submissions whose title or description hits a keyword
//! group.

use crate::keywords::KeywordMatcher;
use crate::traits::{Candidate, Stage};

/// Removes candidates matched by any keyword group.
///
/// ## Algorithm
/// A group matches when all of its terms appear as whole words in the title
/// or the description. Groups are tried in order and the first full match
/// decides.
pub struct KeywordFilter {
    matcher: KeywordMatcher,
}

impl KeywordFilter {
    pub fn new(matcher: KeywordMatcher) -> Self {
        Self { matcher }
    }
}

impl Stage for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        if self.matcher.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                !self
                    .matcher
                    .matches(&candidate.record.title, &candidate.record.description)
            })
            .collect()
    }
}
