//! Store implementation
//!
//! VecDeque-backed entry list with section-run placement.

use std::collections::vec_deque;
use std::collections::VecDeque;

use crate::error::Result;
use super::{Entry, Section};

/// Ordered collection of entries
///
/// Invariant: entries sharing a section form one contiguous run. Sectionless
/// entries form the leading run and other sections follow in the order their
/// first entry arrived.
#[derive(Debug, Default, Clone)]
pub struct Store {
    entries: VecDeque<Entry>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert a record built from borrowed parts
    ///
    /// Duplicates are kept; the newest copy shadows older ones on lookup.
    pub fn insert(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        let entry = Entry::new(section, key, value, comment)?;
        self.insert_entry(entry)
    }

    /// Insert an already-built entry, taking ownership of it
    ///
    /// Placement:
    /// 1. Sectionless entries go to the very front
    /// 2. Sectioned entries go right before the first entry of the same section
    /// 3. Otherwise the entry opens a new run at the tail
    pub fn insert_entry(&mut self, entry: Entry) -> Result<()> {
        self.entries.try_reserve(1)?;

        if entry.section().is_global() {
            self.entries.push_front(entry);
            return Ok(());
        }

        match self.position_of_run(entry.section()) {
            Some(index) => self.entries.insert(index, entry),
            None => self.entries.push_back(entry),
        }

        Ok(())
    }

    /// Get the value of the first entry matching `(section, key)`
    pub fn lookup(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.find(section, key).map(Entry::value)
    }

    /// Get the comment of the first entry matching `(section, key)`
    ///
    /// Returns `None` both when nothing matches and when the first match has
    /// no comment.
    pub fn lookup_comment(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.find(section, key).and_then(Entry::comment)
    }

    /// Get the first entry matching `(section, key)`
    pub fn find(&self, section: Option<&str>, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.matches(section, key))
    }

    /// Remove every entry of a named section
    ///
    /// `None` is a no-op: the sectionless run cannot be removed this way.
    /// Returns the number of removed entries.
    pub fn delete_section(&mut self, section: Option<&str>) -> usize {
        let Some(name) = section else {
            return 0;
        };

        self.retain_counting(|entry| {
            !matches!(entry.section(), Section::Named(other) if other.as_bytes() == name.as_bytes())
        })
    }

    /// Remove every entry with `key` inside the given section scope
    ///
    /// `None` scopes the delete to sectionless entries only. Entries in other
    /// sections are untouched even when their key matches.
    pub fn delete_key(&mut self, section: Option<&str>, key: &str) -> usize {
        if key.is_empty() {
            return 0;
        }

        self.retain_counting(|entry| !entry.matches(section, key))
    }

    /// Remove all entries; the store can be reused afterwards
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in storage order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Index of the first entry whose section equals `section`
    fn position_of_run(&self, section: &Section) -> Option<usize> {
        self.entries
            .iter()
            .position(|existing| existing.section() == section)
    }

    fn retain_counting<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Entry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(keep);
        before - self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over Store entries
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
