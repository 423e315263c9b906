//! Core data models for the reader
//!
//! This module contains the section/option store and the error types,
//! separated from the parsing and resolution logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use iniconf::models::ConfigFile;
//!
//! let mut config = ConfigFile::new();
//! config.add_option("Server", "Host", "example.com");
//!
//! assert!(config.has_section("server"));
//! assert_eq!(config.get_raw_string("SERVER", "host").unwrap(), "example.com");
//! ```

mod config_file;
pub mod errors;

pub use config_file::ConfigFile;
pub(crate) use config_file::{option_key, section_key};
pub use errors::{GetError, GetErrorKind, ReadError, ReadErrorKind};
