//! Stage that hides submissions outside the permitted content ratings.
//!
//! This runs first: a rating-excluded item is never looked at by the artist
//! or keyword stages.

use crate::traits::{Candidate, Stage};
use std::collections::HashSet;

/// Keeps candidates whose rating tag is one of the permitted tags.
///
/// ## Algorithm
/// 1. If no tags are permitted, the stage is a no-op
/// 2. Otherwise keep a candidate only if it has a tag and the tag is permitted
pub struct RatingFilter {
    permitted: HashSet<String>,
}

impl RatingFilter {
    /// Create a new RatingFilter.
    ///
    /// # Arguments
    /// * `permitted` - Rating tags allowed to display (e.g. `r-general`)
    pub fn new<I, S>(permitted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permitted: permitted.into_iter().map(Into::into).collect(),
        }
    }
}

impl Stage for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        if self.permitted.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .rating
                    .is_some_and(|rating| self.permitted.contains(rating))
            })
            .collect()
    }
}
