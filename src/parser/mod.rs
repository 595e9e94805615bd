//! Parser Module
//!
//! Turns raw INI text into store insertions.
//!
//! ## Responsibilities
//! - Reject inputs above the size ceiling before scanning
//! - Tokenize with the `Lexer` (borrowed spans, no in-place mutation)
//! - Copy each span into owned strings and hand the entry to the `Store`
//! - Stop at the first insertion failure, keeping what was already inserted
//!
//! ## Grammar
//! ```text
//! # comment line (applies to next key)
//! [section_name]
//! key=value
//! key2="value with spaces"
//! ```

mod lexer;

pub use lexer::{Lexer, RawEntry};

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_INPUT_SIZE;
use crate::error::{IniError, Result};
use crate::store::{try_to_owned, Entry, Section, Store};

/// Feeds lexed entries into a store
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    max_input_size: u64,
}

impl Parser {
    /// Create a parser with the given input ceiling (in bytes)
    pub fn new(max_input_size: u64) -> Self {
        Self { max_input_size }
    }

    pub fn max_input_size(&self) -> u64 {
        self.max_input_size
    }

    /// Parse `input` and insert every entry into `store`
    ///
    /// Returns the number of inserted entries. On an insertion error the
    /// entries inserted so far stay in the store.
    pub fn parse(&self, input: &[u8], store: &mut Store) -> Result<usize> {
        self.check_size(input.len() as u64)?;

        let mut inserted = 0;
        for raw in Lexer::new(input) {
            let result = to_entry(raw).and_then(|entry| store.insert_entry(entry));
            if let Err(e) = result {
                warn!(inserted, error = %e, "parse stopped on insertion failure");
                return Err(e);
            }
            inserted += 1;
        }

        debug!(bytes = input.len(), inserted, "parsed INI input");
        Ok(inserted)
    }

    /// Parse a string slice
    pub fn parse_str(&self, input: &str, store: &mut Store) -> Result<usize> {
        self.parse(input.as_bytes(), store)
    }

    /// Fail with `TooLarge` when `size` exceeds the ceiling
    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_input_size {
            return Err(IniError::TooLarge {
                size,
                max: self.max_input_size,
            });
        }
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_SIZE)
    }
}

/// Copy a borrowed `RawEntry` into an owned `Entry`
fn to_entry(raw: RawEntry<'_>) -> Result<Entry> {
    let section = match raw.section {
        Some(name) => Section::Named(decode(name)?),
        None => Section::Global,
    };
    let comment = raw.comment.map(decode).transpose()?;

    Entry::from_parts(section, decode(raw.key)?, decode(raw.value)?, comment)
}

/// Invalid UTF-8 sequences become U+FFFD
fn decode(bytes: &[u8]) -> Result<String> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => try_to_owned(text),
        Cow::Owned(text) => Ok(text),
    }
}
