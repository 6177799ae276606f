//! Page documents: a JSON snapshot of what a gallery page renders.
//!
//! ```json
//! {
//!   "items": [{"element_id": "sid-1", "rating": "r-general", "author": "Foo", "title": "Bar"}],
//!   "scripts": ["var descriptions = {...};"]
//! }
//! ```

use anyhow::{Context, Result};
use metadata::{parse_element_id, PageItem};
use serde::Deserialize;
use std::path::Path;

/// One rendered gallery element
#[derive(Debug, Deserialize)]
struct RenderedElement {
    element_id: String,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    items: Vec<RenderedElement>,
    #[serde(default)]
    scripts: Vec<String>,
}

/// A page ready for extraction
#[derive(Debug)]
pub struct PageDocument {
    pub items: Vec<PageItem>,
    /// Text of each inline script, in document order
    pub scripts: Vec<String>,
}

impl PageDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawPage = serde_json::from_str(text).context("Invalid page document")?;

        let items = raw
            .items
            .into_iter()
            .map(|element| -> Result<PageItem> {
                let id = parse_element_id(&element.element_id)?;
                Ok(PageItem {
                    id,
                    rating: element.rating,
                    author: element.author,
                    title: element.title,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            scripts: raw.scripts,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page document {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse page document {}", path.display()))
    }
}
