//! In-memory store of sections and options
//!
//! Section and option names are lower-cased on the way in and on every lookup,
//! so a single map serves all case variants of a name.

use std::collections::HashMap;

use log::trace;

use crate::constants::DEFAULT_SECTION;
use crate::models::errors::GetError;

/// A loaded configuration: section name -> option name -> raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    data: HashMap<String, HashMap<String, String>>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalise a section name. The empty name refers to the default section.
pub(crate) fn section_key(section: &str) -> String {
    if section.is_empty() {
        DEFAULT_SECTION.to_string()
    } else {
        section.to_lowercase()
    }
}

pub(crate) fn option_key(option: &str) -> String {
    option.to_lowercase()
}

impl ConfigFile {
    /// Create an empty configuration holding only the default section
    pub fn new() -> Self {
        let mut data = HashMap::new();
        data.insert(DEFAULT_SECTION.to_string(), HashMap::new());
        ConfigFile { data }
    }

    /// Add a section if it does not exist yet.
    ///
    /// Returns `true` if the section was created.
    pub fn add_section(&mut self, section: &str) -> bool {
        let section = section_key(section);
        if self.data.contains_key(&section) {
            return false;
        }
        self.data.insert(section, HashMap::new());
        true
    }

    /// Set an option, creating its section if needed.
    ///
    /// Returns `true` if the option did not exist before.
    pub fn add_option(&mut self, section: &str, option: &str, value: &str) -> bool {
        let section = section_key(section);
        let option = option_key(option);
        trace!("[{}] {} = {:?}", section, option, value);
        self.data
            .entry(section)
            .or_default()
            .insert(option, value.to_string())
            .is_none()
    }

    /// Number of known sections, including the default section
    pub fn section_count(&self) -> usize {
        self.data.len()
    }

    /// Names of all known sections, including the default section.
    /// The order is unspecified.
    pub fn sections(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    /// Check if a section exists. The default section always does.
    pub fn has_section(&self, section: &str) -> bool {
        self.data.contains_key(&section_key(section))
    }

    /// Names of the options defined directly in `section`.
    /// Options inherited from the default section are not listed.
    pub fn options(&self, section: &str) -> Result<Vec<String>, GetError> {
        let section = section_key(section);
        match self.data.get(&section) {
            Some(options) => Ok(options.keys().cloned().collect()),
            None => Err(GetError::SectionNotFound {
                section,
                option: String::new(),
            }),
        }
    }

    /// Check if an option is visible from `section`, either directly or through the
    /// default section. Always false when the section itself does not exist.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        let section = section_key(section);
        let option = option_key(option);

        let Some(options) = self.data.get(&section) else {
            return false;
        };

        options.contains_key(&option)
            || self
                .data
                .get(DEFAULT_SECTION)
                .is_some_and(|defaults| defaults.contains_key(&option))
    }

    /// Get the stored value of an option without placeholder substitution.
    ///
    /// Only `section` itself is consulted; the default section is not used as a fallback.
    pub fn get_raw_string(&self, section: &str, option: &str) -> Result<String, GetError> {
        let section = section_key(section);
        let option = option_key(option);

        match self.data.get(&section) {
            Some(options) => match options.get(&option) {
                Some(value) => Ok(value.clone()),
                None => Err(GetError::OptionNotFound { section, option }),
            },
            None => Err(GetError::SectionNotFound { section, option }),
        }
    }

    /// Raw value of an already-normalised `(section, option)` pair
    pub(crate) fn raw_value(&self, section: &str, option: &str) -> Option<&str> {
        self.data
            .get(section)
            .and_then(|options| options.get(option))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_default_section() {
        let config = ConfigFile::new();
        assert!(config.has_section("default"));
        assert!(config.has_section("DEFAULT"));
        assert!(config.has_section(""));
        assert_eq!(config.sections(), vec!["default".to_string()]);
    }

    #[test]
    fn test_add_section_is_idempotent() {
        let mut config = ConfigFile::new();
        assert!(config.add_section("Web"));
        assert!(!config.add_section("WEB"));
        assert!(!config.add_section(""));
        assert_eq!(config.sections().len(), 2);
        assert_eq!(config.section_count(), 2);
    }

    #[test]
    fn test_add_option_overwrites() {
        let mut config = ConfigFile::new();
        assert!(config.add_option("web", "Port", "80"));
        assert!(!config.add_option("WEB", "port", "8080"));
        assert_eq!(config.get_raw_string("web", "PORT").unwrap(), "8080");
    }
}
