//! Line-oriented INI parser
//!
//! Each trimmed line is classified by [`line::classify`] and applied to the
//! [`ConfigFile`](crate::models::ConfigFile) being built by [`reader`].

pub mod line;
pub mod reader;

pub use reader::{read_config_bytes, read_config_file};
