//! Loading a `ConfigFile` from files, byte buffers and readers

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::constants::DEFAULT_SECTION;
use crate::models::{ConfigFile, ReadError};
use crate::parser::line::{classify, Line};

/// Parser position: the section being filled and the last option set in it
struct ReadState {
    section: String,
    option: String,
}

impl ReadState {
    fn new() -> Self {
        ReadState {
            section: DEFAULT_SECTION.to_string(),
            option: String::new(),
        }
    }
}

impl ConfigFile {
    /// Parse everything `reader` yields into this configuration.
    ///
    /// Options before the first section header go to the default section.
    /// Parsing stops at the first malformed line or read failure.
    pub fn read<R: Read>(&mut self, reader: R) -> Result<(), ReadError> {
        let mut reader = BufReader::new(reader);
        let mut state = ReadState::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            self.apply_line(&mut state, buf.trim())?;
        }

        debug!("Loaded {} sections", self.section_count());
        Ok(())
    }

    fn apply_line(&mut self, state: &mut ReadState, line: &str) -> Result<(), ReadError> {
        match classify(line) {
            Line::Skip => {}
            Line::Section(name) => {
                debug!("Entering section [{}]", name);
                // a new header ends any multi-line value
                state.option.clear();
                state.section = name.to_string();
                self.add_section(name);
            }
            _ if state.section.is_empty() => {
                return Err(ReadError::BlankSection(line.to_string()));
            }
            Line::Assignment { key, value } => {
                self.add_option(&state.section, key, value);
                state.option = key.to_string();
            }
            Line::Bare(value) if !state.option.is_empty() => {
                let previous = self
                    .get_raw_string(&state.section, &state.option)
                    .unwrap_or_default();
                self.add_option(
                    &state.section,
                    &state.option,
                    &format!("{}\n{}", previous, value),
                );
            }
            Line::Bare(_) => {
                return Err(ReadError::CouldNotParse(line.to_string()));
            }
        }
        Ok(())
    }
}

/// Read a configuration file from disk
pub fn read_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile, ReadError> {
    let path = path.as_ref();
    debug!("Reading configuration file {}", path.display());
    let file = File::open(path)?;

    let mut config = ConfigFile::new();
    config.read(file)?;
    Ok(config)
}

/// Read a configuration from an in-memory buffer
pub fn read_config_bytes(content: &[u8]) -> Result<ConfigFile, ReadError> {
    let mut config = ConfigFile::new();
    config.read(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Yields some valid text, then fails
    struct FailingReader {
        sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.sent = true;
            let text = b"[web]\nport = 80\n";
            buf[..text.len()].copy_from_slice(text);
            Ok(text.len())
        }
    }

    #[test]
    fn test_read_error_aborts() {
        let mut config = ConfigFile::new();
        let err = config.read(FailingReader { sent: false }).unwrap_err();
        assert_eq!(err, ReadError::Io("disk on fire".to_string()));
    }

    #[test]
    fn test_state_resets_on_header() {
        let mut config = ConfigFile::new();
        let err = config.read("[a]\nk = v\n[b]\ndangling\n".as_bytes()).unwrap_err();
        assert_eq!(err, ReadError::CouldNotParse("dangling".to_string()));
        assert_eq!(config.get_raw_string("a", "k").unwrap(), "v");
    }
}
