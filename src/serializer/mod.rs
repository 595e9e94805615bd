//! Serializer Module
//!
//! Renders a store back to INI text in storage order.
//!
//! ## Output Format
//! ```text
//! global_key=value
//!
//! [section]
//! #comment
//! key="value with spaces"
//! ```
//!
//! - A header is written once per contiguous run of a named section,
//!   preceded by a blank line
//! - Sectionless entries never get a header
//! - Values containing a space or tab are wrapped in double quotes; embedded
//!   quote characters are written as-is

use std::io::Write;

use crate::error::Result;
use crate::store::{Entry, Section, Store};

/// Write every entry of `store` to `writer`
pub fn serialize<W: Write>(store: &Store, writer: &mut W) -> Result<()> {
    let mut current: Option<&Section> = None;

    for entry in store {
        if let Section::Named(name) = entry.section() {
            if current != Some(entry.section()) {
                writer.write_all(b"\n[")?;
                writer.write_all(name.as_bytes())?;
                writer.write_all(b"]\n")?;
                current = Some(entry.section());
            }
        }

        write_entry(entry, writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render `store` into an owned byte buffer
pub fn to_bytes(store: &Store) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    serialize(store, &mut buffer)?;
    Ok(buffer)
}

/// Render `store` into a String
pub fn to_string(store: &Store) -> Result<String> {
    let bytes = to_bytes(store)?;
    // Every byte written comes from a `&str`.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_entry<W: Write>(entry: &Entry, writer: &mut W) -> Result<()> {
    if let Some(comment) = entry.comment() {
        writer.write_all(b"#")?;
        writer.write_all(comment.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    let quoted = needs_quotes(entry.value());

    writer.write_all(entry.key().as_bytes())?;
    writer.write_all(b"=")?;
    if quoted {
        writer.write_all(b"\"")?;
    }
    writer.write_all(entry.value().as_bytes())?;
    if quoted {
        writer.write_all(b"\"")?;
    }
    writer.write_all(b"\n")?;

    Ok(())
}

fn needs_quotes(value: &str) -> bool {
    value.bytes().any(|byte| byte == b' ' || byte == b'\t')
}
