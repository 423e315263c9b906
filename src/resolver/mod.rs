//! Placeholder substitution over stored values
//!
//! A value may reference other options as `%(name)s`. References are looked up in
//! the requesting section first and in the default section otherwise, and are
//! replaced one at a time until none remain or [`DEPTH_VALUES`] is reached.

pub mod typed;

use log::trace;

use crate::constants::{DEFAULT_SECTION, DEPTH_VALUES};
use crate::models::{option_key, section_key, ConfigFile, GetError};
use crate::utils::matcher::find_placeholder;

impl ConfigFile {
    /// Get the value of an option with all `%(name)s` references substituted.
    ///
    /// Fails with `OptionNotFound` if a reference cannot be resolved (or resolves to an
    /// empty value), and with `MaxDepthReached` if substitution does not settle within
    /// [`DEPTH_VALUES`] steps.
    pub fn get_string(&self, section: &str, option: &str) -> Result<String, GetError> {
        let mut value = self.get_raw_string(section, option)?;
        let section = section_key(section);
        let option = option_key(option);

        for _ in 0..DEPTH_VALUES {
            let Some(placeholder) = find_placeholder(&value) else {
                return Ok(value);
            };

            let replacement = self.reference_value(&section, &placeholder.name);
            if replacement.is_empty() {
                return Err(GetError::OptionNotFound { section, option });
            }

            trace!(
                "[{}] {}: %({})s -> {:?}",
                section,
                option,
                placeholder.name,
                replacement
            );
            value.replace_range(placeholder.span, replacement);
        }

        Err(GetError::MaxDepthReached { section, option })
    }

    /// Raw value a reference resolves to from `section`, or "" if it is defined nowhere
    fn reference_value(&self, section: &str, name: &str) -> &str {
        self.raw_value(section, name)
            .or_else(|| self.raw_value(DEFAULT_SECTION, name))
            .unwrap_or_default()
    }
}
