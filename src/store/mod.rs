//! Store Module
//!
//! Ordered, section-grouped collection of configuration entries.
//!
//! ## Responsibilities
//! - Own every entry produced by the parser or inserted by callers
//! - Keep all entries of one section in a single contiguous run
//! - First-match lookup (most recent insert wins)
//! - Scoped deletes by key or by whole section
//!
//! ## Data Structure Choice
//! Using a VecDeque of entries:
//! - Sectionless entries are pushed to the front, which is O(1)
//! - Same-section inserts land in the middle; files are capped at a few
//!   hundred KiB so the shift cost stays small
//! - Iteration order is the storage order the serializer needs

mod entry;
mod table;

pub use entry::Entry;
pub(crate) use entry::try_to_owned;
pub use table::{Iter, Store};

use std::fmt;

/// Section an entry belongs to
///
/// `Global` and `Named` never compare equal; two `Named` sections compare
/// byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// Entries that appear before any `[header]`
    Global,

    /// Entries under a `[name]` header
    Named(String),
}

impl Section {
    /// Section name, `None` for the global section
    pub fn name(&self) -> Option<&str> {
        match self {
            Section::Global => None,
            Section::Named(name) => Some(name),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Section::Global)
    }

    /// Compare against a borrowed section name
    pub fn matches(&self, section: Option<&str>) -> bool {
        match (self, section) {
            (Section::Global, None) => true,
            (Section::Named(name), Some(other)) => name.as_bytes() == other.as_bytes(),
            _ => false,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Global => f.write_str("<global>"),
            Section::Named(name) => write!(f, "[{}]", name),
        }
    }
}
