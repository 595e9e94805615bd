//! Entry definition
//!
//! One section/key/value/comment record.

use crate::error::{IniError, Result};
use super::Section;

/// A single configuration record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    section: Section,
    key: String,
    value: String,
    comment: Option<String>,
}

impl Entry {
    /// Build an entry from borrowed parts
    ///
    /// Fails with `InvalidEntry` when the key or the value is empty, and with
    /// `Alloc` when a copy cannot be allocated.
    pub fn new(
        section: Option<&str>,
        key: &str,
        value: &str,
        comment: Option<&str>,
    ) -> Result<Self> {
        validate(key, value)?;

        let section = match section {
            Some(name) => Section::Named(try_to_owned(name)?),
            None => Section::Global,
        };
        let comment = comment.map(try_to_owned).transpose()?;

        Ok(Self {
            section,
            key: try_to_owned(key)?,
            value: try_to_owned(value)?,
            comment,
        })
    }

    /// Build an entry from already-owned parts (no copying)
    pub fn from_parts(
        section: Section,
        key: String,
        value: String,
        comment: Option<String>,
    ) -> Result<Self> {
        validate(&key, &value)?;
        Ok(Self {
            section,
            key,
            value,
            comment,
        })
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn section_name(&self) -> Option<&str> {
        self.section.name()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// True when this entry answers a lookup for `(section, key)`
    pub(crate) fn matches(&self, section: Option<&str>, key: &str) -> bool {
        self.section.matches(section) && self.key.as_bytes() == key.as_bytes()
    }
}

fn validate(key: &str, value: &str) -> Result<()> {
    if key.is_empty() {
        return Err(IniError::InvalidEntry {
            key: String::new(),
            reason: "key is empty",
        });
    }
    if value.is_empty() {
        return Err(IniError::InvalidEntry {
            key: key.to_string(),
            reason: "value is empty",
        });
    }
    Ok(())
}

/// Copy a string, reporting allocation failure instead of aborting
pub(crate) fn try_to_owned(s: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}
