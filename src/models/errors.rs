//! Error types returned while loading and querying a configuration

use std::io;
use thiserror::Error;

/// Failure raised while building a `ConfigFile` from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Item exists outside of any section: {0}")]
    BlankSection(String),

    #[error("Could not parse line: {0}")]
    CouldNotParse(String),
}

/// Category of a `ReadError`, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadErrorKind {
    Io,
    BlankSection,
    CouldNotParse,
}

impl ReadError {
    pub fn kind(&self) -> ReadErrorKind {
        match self {
            ReadError::Io(_) => ReadErrorKind::Io,
            ReadError::BlankSection(_) => ReadErrorKind::BlankSection,
            ReadError::CouldNotParse(_) => ReadErrorKind::CouldNotParse,
        }
    }

    /// The offending line, or the underlying I/O message
    pub fn detail(&self) -> &str {
        match self {
            ReadError::Io(msg) | ReadError::BlankSection(msg) | ReadError::CouldNotParse(msg) => {
                msg
            }
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        ReadError::Io(error.to_string())
    }
}

/// Failure raised while looking up, resolving or converting a value.
///
/// Section and option names are carried in their normalised (lower-case) form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GetError {
    #[error("Section not found: [{section}] (option `{option}`)")]
    SectionNotFound { section: String, option: String },

    #[error("Option not found: `{option}` in [{section}]")]
    OptionNotFound { section: String, option: String },

    #[error("Maximum substitution depth reached for `{option}` in [{section}]")]
    MaxDepthReached { section: String, option: String },

    #[error("Could not parse `{value}` as {type_tag} for `{option}` in [{section}]")]
    CouldNotParse {
        type_tag: &'static str,
        value: String,
        section: String,
        option: String,
    },
}

/// Category of a `GetError`, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetErrorKind {
    SectionNotFound,
    OptionNotFound,
    MaxDepthReached,
    CouldNotParse,
}

impl GetError {
    pub fn kind(&self) -> GetErrorKind {
        match self {
            GetError::SectionNotFound { .. } => GetErrorKind::SectionNotFound,
            GetError::OptionNotFound { .. } => GetErrorKind::OptionNotFound,
            GetError::MaxDepthReached { .. } => GetErrorKind::MaxDepthReached,
            GetError::CouldNotParse { .. } => GetErrorKind::CouldNotParse,
        }
    }

    pub fn section(&self) -> &str {
        match self {
            GetError::SectionNotFound { section, .. }
            | GetError::OptionNotFound { section, .. }
            | GetError::MaxDepthReached { section, .. }
            | GetError::CouldNotParse { section, .. } => section,
        }
    }

    pub fn option(&self) -> &str {
        match self {
            GetError::SectionNotFound { option, .. }
            | GetError::OptionNotFound { option, .. }
            | GetError::MaxDepthReached { option, .. }
            | GetError::CouldNotParse { option, .. } => option,
        }
    }
}
