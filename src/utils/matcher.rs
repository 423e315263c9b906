use std::ops::Range;

use crate::constants::VAR_REGEX;

/// A `%(name)s` reference found inside a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte range of the whole `%(name)s` text
    pub span: Range<usize>,
    /// Referenced option name, lower-cased
    pub name: String,
}

/// Find the first placeholder in `value`
pub fn find_placeholder(value: &str) -> Option<Placeholder> {
    let captures = VAR_REGEX.captures(value)?;
    let whole = captures.get(0)?;
    let name = captures.get(1)?;
    Some(Placeholder {
        span: whole.range(),
        name: name.as_str().to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_placeholder() {
        let found = find_placeholder("http://%(Host)s/%(path)s").unwrap();
        assert_eq!(found.span, 7..15);
        assert_eq!(found.name, "host");
    }

    #[test]
    fn test_find_placeholder_allowed_characters() {
        let found = find_placeholder("%(db.main-host_2)s").unwrap();
        assert_eq!(found.name, "db.main-host_2");
    }

    #[test]
    fn test_find_placeholder_none() {
        assert_eq!(find_placeholder("100%"), None);
        assert_eq!(find_placeholder("%(host)d"), None);
        assert_eq!(find_placeholder("%(bad name)s"), None);
    }
}
