//! Core traits for the classification pipeline.
//!
//! This module defines the Stage trait that allows composable filter steps
//! to narrow down the set of items still eligible to be shown.

use metadata::{ItemRecord, PageItem, SubmissionId};

/// An item flowing through the pipeline.
///
/// Borrows from the page and the metadata table, so it is cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: SubmissionId,
    /// Rating tag on the rendered element, if it has one
    pub rating: Option<&'a str>,
    pub record: &'a ItemRecord,
}

impl<'a> Candidate<'a> {
    pub fn new(item: &'a PageItem, record: &'a ItemRecord) -> Self {
        Self {
            id: item.id,
            rating: item.rating.as_deref(),
            record,
        }
    }
}

/// Core trait for one classification stage.
///
/// All stages must implement this trait to be used in the StagePipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a compiled classifier be shared between threads
/// - Stages take ownership of the candidates and return the ones that pass;
///   anything dropped counts as suppressed by that stage
pub trait Stage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates still in play (takes ownership)
    ///
    /// # Returns
    /// The candidates that pass this stage
    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>>;
}
