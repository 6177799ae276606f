//! Parser for the metadata a gallery page embeds.
//!
//! Gallery pages carry an inline script of the form:
//! `var descriptions = {"123": {"title": ..., "username": ..., "description": ...}, ...};`
//!
//! This module handles:
//! - Finding that assignment among the page's script blocks
//! - Parsing the object literal into [`ItemRecord`]s
//! - Decoding rendered element ids (`sid-123`)

use crate::error::{MetadataError, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashMap;

/// Text that introduces the payload inside a script block
const PAYLOAD_MARKER: &str = "var descriptions = ";

/// Prefix of the DOM id on each rendered submission
const ELEMENT_ID_PREFIX: &str = "sid-";

/// One payload value. Extra fields the page ships are ignored.
#[derive(Debug, Deserialize)]
struct PayloadEntry {
    username: String,
    title: String,
    #[serde(default)]
    description: String,
}

/// Find the description payload in the page's script blocks.
///
/// Scripts are scanned in document order and the first one containing the
/// marker wins. The returned slice is the object literal: it runs up to the
/// first `}};`, keeping the closing braces. Without that terminator the rest
/// of the script is used with trailing `;` and whitespace removed.
pub fn locate_payload<'a, S>(scripts: &'a [S]) -> Option<&'a str>
where
    S: AsRef<str>,
{
    let script: &str = scripts
        .iter()
        .map(|script| script.as_ref())
        .find(|text: &&str| text.contains(PAYLOAD_MARKER))?;

    let start = script.find(PAYLOAD_MARKER)? + PAYLOAD_MARKER.len();
    let rest = &script[start..];

    let literal = match rest.find("}};") {
        Some(end) => &rest[..end + 2],
        None => rest.trim_end().trim_end_matches(';').trim_end(),
    };

    if literal.is_empty() { None } else { Some(literal) }
}

/// Parse a description payload into a metadata table.
///
/// Every key must be a decimal submission id; one bad key rejects the whole
/// payload.
pub fn parse_payload(payload: &str) -> Result<MetadataTable> {
    let raw: HashMap<String, PayloadEntry> = serde_json::from_str(payload)?;

    let mut table = MetadataTable::with_capacity(raw.len());
    for (key, entry) in raw {
        let id = parse_submission_id(&key)?;
        table.insert(
            id,
            ItemRecord {
                id,
                author_name: entry.username,
                title: entry.title,
                description: entry.description,
            },
        );
    }

    Ok(table)
}

/// Decode a rendered element id such as `sid-48213`.
pub fn parse_element_id(element_id: &str) -> Result<SubmissionId> {
    let digits = element_id
        .strip_prefix(ELEMENT_ID_PREFIX)
        .ok_or_else(|| MetadataError::InvalidIdentifier {
            raw: element_id.to_string(),
        })?;
    parse_submission_id(digits).map_err(|_| MetadataError::InvalidIdentifier {
        raw: element_id.to_string(),
    })
}

fn parse_submission_id(raw: &str) -> Result<SubmissionId> {
    raw.trim()
        .parse()
        .map_err(|_| MetadataError::InvalidIdentifier {
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
        var user = {};
        var descriptions = {"101": {"title": "Red Fox", "username": "Painter", "description": "a quick sketch", "lower": "painter"}, "102": {"title": "Catalog", "username": "Inker", "description": ""}};
        var other = {};
    "#;

    #[test]
    fn test_locate_payload_picks_marked_script() {
        let scripts = vec!["var a = 1;".to_string(), SCRIPT.to_string()];
        let payload = locate_payload(&scripts).unwrap();

        assert!(payload.starts_with('{'));
        assert!(payload.ends_with("}}"));
        assert!(!payload.contains("var other"));
    }

    #[test]
    fn test_locate_payload_without_terminator() {
        let scripts = ["var descriptions = {\"1\": {\"title\": \"t\", \"username\": \"u\"}} ;\n"];
        let payload = locate_payload(&scripts).unwrap();
        assert_eq!(payload, "{\"1\": {\"title\": \"t\", \"username\": \"u\"}}");
    }

    #[test]
    fn test_locate_payload_absent() {
        let scripts = ["var a = 1;", "console.log(a);"];
        assert!(locate_payload(&scripts).is_none());

        let empty: [&str; 0] = [];
        assert!(locate_payload(&empty).is_none());
    }

    #[test]
    fn test_parse_payload() {
        let scripts = [SCRIPT];
        let table = parse_payload(locate_payload(&scripts).unwrap()).unwrap();

        assert_eq!(table.len(), 2);
        let fox = &table[&101];
        assert_eq!(fox.author_name, "Painter");
        assert_eq!(fox.title, "Red Fox");
        assert_eq!(fox.description, "a quick sketch");
        assert_eq!(table[&102].title, "Catalog");
    }

    #[test]
    fn test_parse_payload_missing_description_defaults_empty() {
        let table = parse_payload(r#"{"5": {"title": "T", "username": "U"}}"#).unwrap();
        assert_eq!(table[&5].description, "");
    }

    #[test]
    fn test_parse_payload_rejects_bad_key() {
        let result = parse_payload(r#"{"abc": {"title": "T", "username": "U"}}"#);
        assert!(matches!(
            result,
            Err(MetadataError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_parse_payload_rejects_bad_json() {
        let result = parse_payload("{\"1\": {\"title\": ");
        assert!(matches!(result, Err(MetadataError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_element_id() {
        assert_eq!(parse_element_id("sid-48213").unwrap(), 48213);
        assert!(parse_element_id("48213").is_err());
        assert!(parse_element_id("sid-").is_err());
        assert!(parse_element_id("sid-12x").is_err());
    }
}
