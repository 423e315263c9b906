use crate::utils::string::{is_comment_line, section_header, strip_comments};

/// Classification of one trimmed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or comment line
    Skip,
    /// `[name]`, with the name trimmed
    Section(&'a str),
    /// `key = value` or `key : value`, both trimmed and the value stripped of inline comments
    Assignment { key: &'a str, value: &'a str },
    /// A line without a usable separator: a continuation candidate, stripped and trimmed
    Bare(&'a str),
}

/// Classify a line that has already been trimmed
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || is_comment_line(line) {
        return Line::Skip;
    }

    if let Some(name) = section_header(line) {
        return Line::Section(name);
    }

    // a separator in the first column leaves no key, so the line can only continue a value
    match line.find(['=', ':']) {
        Some(pos) if pos > 0 => Line::Assignment {
            key: line[..pos].trim(),
            value: strip_comments(&line[pos + 1..]).trim(),
        },
        _ => Line::Bare(strip_comments(line).trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_skip() {
        assert_eq!(classify(""), Line::Skip);
        assert_eq!(classify("# comment"), Line::Skip);
        assert_eq!(classify("; comment"), Line::Skip);
        assert_eq!(classify("Rem comment"), Line::Skip);
        assert_eq!(classify("remote = 1"), Line::Skip);
    }

    #[test]
    fn test_classify_section() {
        assert_eq!(classify("[ Web ]"), Line::Section("Web"));
        assert_eq!(classify("[]"), Line::Section(""));
    }

    #[test]
    fn test_classify_option() {
        assert_eq!(
            classify("host = example.com ; main"),
            Line::Assignment {
                key: "host",
                value: "example.com"
            }
        );
        assert_eq!(
            classify("url: http://x/"),
            Line::Assignment {
                key: "url",
                value: "http://x/"
            }
        );
        assert_eq!(
            classify("a=b=c"),
            Line::Assignment {
                key: "a",
                value: "b=c"
            }
        );
    }

    #[test]
    fn test_classify_first_separator_wins() {
        assert_eq!(
            classify("time: 12=30"),
            Line::Assignment {
                key: "time",
                value: "12=30"
            }
        );
    }

    #[test]
    fn test_classify_bare() {
        assert_eq!(classify("more text ; note"), Line::Bare("more text"));
        assert_eq!(classify("=value"), Line::Bare("=value"));
    }
}
