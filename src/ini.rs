//! Ini Module
//!
//! The session object that ties configuration, parsing, storage and
//! serialization together.
//!
//! ## Responsibilities
//! - Own the `Store` for the lifetime of a session
//! - Apply the configured size ceiling on every load
//! - Render and write the store back to a resource
//!
//! ## Concurrency
//! Single-threaded. Every method runs to completion with exclusive access;
//! callers sharing an `Ini` across threads wrap it in a lock themselves.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::parser::Parser;
use crate::resource::{read_resource, write_resource};
use crate::serializer;
use crate::store::{Entry, Iter, Store};

/// An INI document held in memory
#[derive(Debug, Clone, Default)]
pub struct Ini {
    /// Session configuration
    config: Config,

    /// All entries, in section-run order
    store: Store,
}

impl Ini {
    /// Create an empty document with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            store: Store::new(),
        }
    }

    /// Read a resource into a new document (default config)
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_file_with_config(path, Config::default())
    }

    /// Read a resource into a new document
    pub fn read_file_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let mut ini = Self::with_config(config);
        ini.load_file(path)?;
        Ok(ini)
    }

    /// Parse a resource and merge its entries into this document
    ///
    /// Returns the number of inserted entries. A failure part-way through the
    /// parse leaves the already inserted entries in place.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let bytes = read_resource(path, self.config.max_input_size)?;
        let inserted = self.load_bytes(&bytes)?;

        info!(path = %path.display(), inserted, "loaded INI resource");
        Ok(inserted)
    }

    /// Parse an in-memory buffer and merge its entries into this document
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.parser().parse(bytes, &mut self.store)
    }

    /// Parse a string and merge its entries into this document
    pub fn load_str(&mut self, text: &str) -> Result<usize> {
        self.load_bytes(text.as_bytes())
    }

    /// Render the document and write it to `path`
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = serializer::to_bytes(&self.store)?;

        write_resource(
            path,
            &bytes,
            self.config.write_mode,
            self.config.sync_on_write,
        )?;

        info!(path = %path.display(), entries = self.store.len(), "wrote INI resource");
        Ok(())
    }

    /// Render the document to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        serializer::serialize(&self.store, writer)
    }

    /// Render the document as a String
    pub fn to_ini_string(&self) -> Result<String> {
        serializer::to_string(&self.store)
    }

    // =========================================================================
    // Entry Operations
    // =========================================================================

    /// Insert a value; an older value for the same key stays stored but
    /// shadowed
    pub fn set(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        self.store.insert(section, key, value, comment)?;
        debug!(section = ?section, key, "set entry");
        Ok(())
    }

    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.store.lookup(section, key)
    }

    pub fn get_comment(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.store.lookup_comment(section, key)
    }

    /// Remove a named section; returns the number of removed entries
    pub fn delete_section(&mut self, section: Option<&str>) -> usize {
        let removed = self.store.delete_section(section);
        debug!(section = ?section, removed, "deleted section");
        removed
    }

    /// Remove a key within a section scope; returns the number of removed entries
    pub fn delete_key(&mut self, section: Option<&str>, key: &str) -> usize {
        let removed = self.store.delete_key(section, key);
        debug!(section = ?section, key, removed, "deleted key");
        removed
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate entries in storage order
    pub fn entries(&self) -> Iter<'_> {
        self.store.iter()
    }

    /// First entry matching `(section, key)`
    pub fn entry(&self, section: Option<&str>, key: &str) -> Option<&Entry> {
        self.store.find(section, key)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn parser(&self) -> Parser {
        Parser::new(self.config.max_input_size)
    }
}
