//! String utility functions for line processing

use crate::constants::config::{INLINE_COMMENT_MARKERS, REM_PREFIX};

/// Cut an inline comment off a value
///
/// # Arguments
///
/// * `s` - The text following the key/value separator, or a continuation line
///
/// # Returns
///
/// The text up to the first `;` or `#` that is preceded by a space or tab.
/// Markers without leading whitespace are kept as part of the value.
pub fn strip_comments(s: &str) -> &str {
    let end = INLINE_COMMENT_MARKERS
        .iter()
        .filter_map(|marker| s.find(marker))
        .min()
        .unwrap_or(s.len());
    &s[..end]
}

/// Check if a trimmed line is a full-line comment
///
/// Lines starting with `#`, `;` or `rem` (any case) are comments. The `rem` check
/// looks at the first three bytes only, so `remote = 1` is a comment as well.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
        || line.starts_with(';')
        || line
            .get(..REM_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(REM_PREFIX))
}

/// Extract the name between the brackets of a section header line
///
/// # Returns
///
/// The trimmed name, or `None` if the line is not of the form `[...]`
pub fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}
