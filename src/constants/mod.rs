pub mod bool_strings;
pub mod config;
pub mod patterns;

pub use bool_strings::{parse_bool, BOOL_STRINGS};
pub use config::{DEFAULT_SECTION, DEPTH_VALUES};
pub use patterns::VAR_REGEX;
