//! Parsing of the multi-line text boxes on the settings page.

/// Whether list entries are lowercased on the way in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Artist names
    Lower,
    /// Keyword lines
    Preserve,
}

/// Split a text box into one entry per line.
///
/// Lines are trimmed and blank lines dropped, so an empty box gives an empty
/// list.
pub fn parse_list_input(text: &str, case: Case) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match case {
            Case::Lower => line.to_lowercase(),
            Case::Preserve => line.to_string(),
        })
        .collect()
}
