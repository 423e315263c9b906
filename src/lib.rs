//! Reader for INI-style configuration files
//!
//! Sections are introduced by `[name]` headers and hold `key = value` (or `key: value`)
//! options. Options placed before the first header belong to the `default` section,
//! which always exists and is consulted as a fallback when resolving `%(name)s`
//! references.
//!
//! ```rust
//! let config = iniconf::read_config_bytes(
//!     b"host = example.com\n\n[web]\nurl = http://%(host)s/\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.get_string("web", "url").unwrap(), "http://example.com/");
//! ```

pub mod constants;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod utils;

pub use models::{ConfigFile, GetError, GetErrorKind, ReadError, ReadErrorKind};
pub use parser::{read_config_bytes, read_config_file};
