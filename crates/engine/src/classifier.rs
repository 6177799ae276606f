//! Per-page classification against a compiled filter configuration.

use crate::config::FilterConfig;
use crate::keywords::KeywordMatcher;
use crate::stage_pipeline::StagePipeline;
use crate::stages::{AllowListOverride, ArtistBlockFilter, KeywordFilter, RatingFilter};
use crate::traits::{Candidate, Stage};
use metadata::{MetadataTable, PageItem, SubmissionId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A filter configuration compiled for repeated use.
///
/// Build one whenever the configuration changes and run it against every
/// page. The `enabled` switch is not consulted here: a caller with a
/// disabled config should show everything without classifying.
pub struct Classifier {
    pipeline: StagePipeline,
    allow_list: AllowListOverride,
}

impl Classifier {
    pub fn new(config: &FilterConfig) -> Self {
        let matcher = KeywordMatcher::compile(&config.blocked_keyword_groups);
        debug!(
            "Compiled {} of {} keyword groups",
            matcher.group_count(),
            config.blocked_keyword_groups.len()
        );

        let pipeline = StagePipeline::new()
            .add_stage(RatingFilter::new(config.rating_classes.iter().cloned()))
            .add_stage(ArtistBlockFilter::new(config.blocked_artists.iter().cloned()))
            .add_stage(KeywordFilter::new(matcher));

        Self {
            pipeline,
            allow_list: AllowListOverride::new(config.allowed_artists.iter().cloned()),
        }
    }

    /// Decide visibility for every rendered item.
    ///
    /// ## Algorithm
    /// 1. Items without a metadata record are left visible
    /// 2. The rest run through rating, artist and keyword stages
    /// 3. Whatever those stages dropped is handed to the allow list
    /// 4. Items the allow list does not release are suppressed
    pub fn classify(&self, items: &[PageItem], records: &MetadataTable) -> Verdicts {
        let mut verdicts = Verdicts::with_capacity(items.len());

        let mut candidates = Vec::with_capacity(items.len());
        for item in items {
            verdicts.insert(item.id, false);
            match records.get(&item.id) {
                Some(record) => candidates.push(Candidate::new(item, record)),
                None => debug!("No metadata for submission {}, leaving it visible", item.id),
            }
        }

        let passed: HashSet<SubmissionId> = self
            .pipeline
            .apply(candidates.clone())
            .iter()
            .map(|candidate| candidate.id)
            .collect();

        let suppressed: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !passed.contains(&candidate.id))
            .collect();
        debug!("{} items suppressed before allow list", suppressed.len());

        for candidate in self.allow_list.apply(suppressed) {
            verdicts.insert(candidate.id, true);
        }

        verdicts
    }
}

/// Suppression verdict per submission, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdicts {
    order: Vec<SubmissionId>,
    suppressed: HashMap<SubmissionId, bool>,
}

impl Verdicts {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            suppressed: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, id: SubmissionId, suppress: bool) {
        if self.suppressed.insert(id, suppress).is_none() {
            self.order.push(id);
        }
    }

    /// Unknown ids are reported as visible
    pub fn is_suppressed(&self, id: SubmissionId) -> bool {
        self.suppressed.get(&id).copied().unwrap_or(false)
    }

    /// Every classified id with its verdict, in page order
    pub fn iter(&self) -> impl Iterator<Item = (SubmissionId, bool)> + '_ {
        self.order.iter().map(|id| (*id, self.is_suppressed(*id)))
    }

    /// Suppressed ids in page order
    pub fn suppressed_ids(&self) -> impl Iterator<Item = SubmissionId> + '_ {
        self.iter().filter(|(_, suppress)| *suppress).map(|(id, _)| id)
    }

    pub fn suppressed_count(&self) -> usize {
        self.suppressed.values().filter(|suppress| **suppress).count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<SubmissionId, bool> {
        &self.suppressed
    }

    pub fn into_map(self) -> HashMap<SubmissionId, bool> {
        self.suppressed
    }
}
