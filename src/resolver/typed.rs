//! Typed getters layered over `ConfigFile::get_string`

use crate::constants::parse_bool;
use crate::models::{option_key, section_key, ConfigFile, GetError};

fn parse_error(type_tag: &'static str, value: String, section: &str, option: &str) -> GetError {
    GetError::CouldNotParse {
        type_tag,
        value,
        section: section_key(section),
        option: option_key(option),
    }
}

impl ConfigFile {
    /// Get a resolved value as an integer
    pub fn get_int(&self, section: &str, option: &str) -> Result<i64, GetError> {
        let value = self.get_string(section, option)?;
        value
            .parse::<i64>()
            .map_err(|_| parse_error("int", value, section, option))
    }

    /// Get a resolved value as a float
    pub fn get_float64(&self, section: &str, option: &str) -> Result<f64, GetError> {
        let value = self.get_string(section, option)?;
        value
            .parse::<f64>()
            .map_err(|_| parse_error("float64", value, section, option))
    }

    /// Get a resolved value as a boolean.
    /// See [`BOOL_STRINGS`](crate::constants::BOOL_STRINGS) for the accepted tokens.
    pub fn get_bool(&self, section: &str, option: &str) -> Result<bool, GetError> {
        let value = self.get_string(section, option)?;
        match parse_bool(&value) {
            Some(b) => Ok(b),
            None => Err(parse_error("bool", value, section, option)),
        }
    }

    /// Get a resolved value split on `delim`, each element trimmed.
    ///
    /// An empty value yields one empty element. An empty delimiter splits into
    /// single characters.
    pub fn get_list(
        &self,
        section: &str,
        option: &str,
        delim: &str,
    ) -> Result<Vec<String>, GetError> {
        let value = self.get_string(section, option)?;
        let items: Vec<String> = if delim.is_empty() {
            value.chars().map(String::from).collect()
        } else {
            value.split(delim).map(String::from).collect()
        };
        Ok(items.iter().map(|s| s.trim().to_string()).collect())
    }
}
