use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A `%(name)s` reference inside a value; group 1 captures the name
    pub static ref VAR_REGEX: Regex = Regex::new(r"%\(([a-zA-Z0-9_.\-]+)\)s").unwrap();
}
