//! # Metadata Crate
//!
//! This crate builds the per-submission records the filter engine reads.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ItemRecord, PageItem, MetadataTable)
//! - **parser**: Locate and parse the description payload a page embeds
//! - **error**: Error types for payload and id decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use metadata::{extract, locate_payload, PageItem};
//!
//! let items = vec![PageItem::new(1, Some("r-general")).with_caption("Foo", "Bar")];
//! let table = extract(&items, locate_payload(&page_scripts));
//!
//! if table.is_empty() {
//!     // Nothing to filter on this page
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{MetadataError, Result};
pub use parser::{locate_payload, parse_element_id, parse_payload};
pub use types::{ItemRecord, MetadataTable, PageItem, SubmissionId};

use tracing::{debug, warn};

/// Build the metadata table for the submissions rendered on a page.
///
/// The embedded payload is used as-is when it parses. Otherwise every page
/// item contributes a minimal record built from its caption, with an empty
/// description. A page without items yields an empty table.
pub fn extract(page_items: &[PageItem], embedded_payload: Option<&str>) -> MetadataTable {
    if page_items.is_empty() {
        return MetadataTable::new();
    }

    if let Some(payload) = embedded_payload {
        match parse_payload(payload) {
            Ok(table) => {
                debug!("Extracted {} records from embedded payload", table.len());
                return table;
            }
            Err(e) => warn!("Falling back to caption metadata: {}", e),
        }
    }

    page_items
        .iter()
        .map(|item| (item.id, item.to_minimal_record()))
        .collect()
}
