//! The StagePipeline orchestrates multiple stages.
//!
//! This module provides the StagePipeline struct that chains stages
//! together using the builder pattern.

use crate::traits::{Candidate, Stage};
use tracing;

/// Chains multiple stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(RatingFilter::new(config.rating_classes.clone()))
///     .add_stage(ArtistBlockFilter::new(config.blocked_artists.clone()))
///     .add_stage(KeywordFilter::new(KeywordMatcher::compile(&groups)));
///
/// let visible = pipeline.apply(candidates);
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create a new empty StagePipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages in the order they run
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Apply all stages in sequence to the candidates.
    ///
    /// Each stage only sees the survivors of the one before it. The returned
    /// candidates passed every stage.
    pub fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        let mut current = candidates;
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current);
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
