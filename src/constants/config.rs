// Reader-wide settings shared by the parser and the resolver

/// Name of the section that always exists and backs every other section
pub const DEFAULT_SECTION: &str = "default";

/// Maximum number of placeholder substitutions performed for a single value.
/// Reaching it is reported as a cycle.
pub const DEPTH_VALUES: usize = 200;

/// Prefix of a full-line comment in addition to `#` and `;`, matched case-insensitively
pub const REM_PREFIX: &str = "rem";

/// Inline comment markers. A marker only counts when whitespace precedes it.
pub const INLINE_COMMENT_MARKERS: [&str; 4] = [" ;", "\t;", " #", "\t#"];
