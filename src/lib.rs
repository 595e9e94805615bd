//! # inistore
//!
//! A small INI configuration engine with:
//! - A tolerant single-pass tokenizer (comments, headers, quoted values)
//! - An ordered entry store that keeps every section in one contiguous run
//! - Last-write-wins lookup and scoped deletes
//! - A serializer that renders the store back to INI text
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Ini                                  │
//! │              (session: config + store)                       │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!   ┌─────────────┐      ┌─────────────┐    ┌─────────────┐
//!   │  Resource   │      │   Parser    │    │ Serializer  │
//!   │ (read/write)│      │   (Lexer)   │    │  (INI text) │
//!   └─────────────┘      └──────┬──────┘    └──────▲──────┘
//!                               │                  │
//!                               ▼                  │
//!                        ┌─────────────┐           │
//!                        │    Store    │───────────┘
//!                        │  (entries)  │
//!                        └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use inistore::Ini;
//!
//! let mut ini = Ini::new();
//! ini.load_str("[server]\n#listen port\nport=8080\n").unwrap();
//!
//! assert_eq!(ini.get(Some("server"), "port"), Some("8080"));
//! assert_eq!(ini.get_comment(Some("server"), "port"), Some("listen port"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod parser;
pub mod serializer;
pub mod resource;
pub mod ini;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IniError, Result};
pub use config::{Config, WriteMode};
pub use store::{Entry, Section, Store};
pub use ini::Ini;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of inistore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
