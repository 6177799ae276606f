//! Stage implementations for the classification pipeline.
//!
//! The first three stages narrow down the visible set in a fixed order
//! (rating, artist, keyword). The allow list runs afterwards over everything
//! those stages suppressed.

pub mod allow_list;
pub mod artist_block;
pub mod keyword;
pub mod rating;

// Re-export for convenience
pub use allow_list::AllowListOverride;
pub use artist_block::ArtistBlockFilter;
pub use keyword::KeywordFilter;
pub use rating::RatingFilter;
