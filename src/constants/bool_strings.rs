use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Tokens accepted by `ConfigFile::get_bool`, keyed by their lower-case form
    pub static ref BOOL_STRINGS: HashMap<&'static str, bool> = {
        let mut m = HashMap::new();
        m.insert("0", false);
        m.insert("f", false);
        m.insert("false", false);
        m.insert("n", false);
        m.insert("no", false);
        m.insert("off", false);
        m.insert("1", true);
        m.insert("t", true);
        m.insert("true", true);
        m.insert("y", true);
        m.insert("yes", true);
        m.insert("on", true);
        m
    };
}

/// Look up a boolean token, ignoring case
pub fn parse_bool(s: &str) -> Option<bool> {
    BOOL_STRINGS.get(s.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_known_tokens() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("NO"), Some(false));
        assert_eq!(parse_bool("f"), Some(false));
    }

    #[test]
    fn test_parse_bool_unknown_token() {
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }
}
