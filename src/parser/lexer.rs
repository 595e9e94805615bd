//! Lexer
//!
//! Single forward pass over an immutable byte buffer. Every well-formed
//! key/value line comes out as a `RawEntry` of spans borrowed from the input;
//! comments and section headers only update lexer state.
//!
//! ## Line Kinds (after skipping spaces, tabs and newlines)
//! - `#...`     comment, bound to the next emitted entry
//! - `[name]`   section header, sticky until the next header
//! - `key=value` pair; malformed lines are skipped, never reported

use std::iter::FusedIterator;

use tracing::trace;

/// Borrowed spans for one key/value line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Section in effect, `None` before the first header
    pub section: Option<&'a [u8]>,

    pub key: &'a [u8],

    /// Value with surrounding quotes already removed
    pub value: &'a [u8],

    /// Text of the last comment line seen since the previous entry
    pub comment: Option<&'a [u8]>,
}

/// Tokenizer over INI text
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    section: Option<&'a [u8]>,
    comment: Option<&'a [u8]>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            section: None,
            comment: None,
        }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.input.get(self.pos) {
            if !is_whitespace(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Return the current line without its newline and move past both
    fn take_line(&mut self) -> &'a [u8] {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = rest
            .iter()
            .position(|&byte| byte == b'\n')
            .unwrap_or(rest.len());

        self.pos += len;
        if self.pos < input.len() {
            self.pos += 1;
        }

        &rest[..len]
    }

    fn lex_pair(&mut self, line: &'a [u8], offset: usize) -> Option<RawEntry<'a>> {
        let Some(equals) = line.iter().position(|&byte| byte == b'=') else {
            trace!(offset, "skipping line without '='");
            self.comment = None;
            return None;
        };

        // Key stops at the first blank; anything between it and '=' is dropped.
        let key_len = line[..equals]
            .iter()
            .position(|&byte| is_blank(byte))
            .unwrap_or(equals);
        let key = &line[..key_len];

        if key.is_empty() {
            trace!(offset, "skipping line with empty key");
            self.comment = None;
            return None;
        }

        let value = scan_value(&line[equals + 1..]);
        if value.is_empty() {
            trace!(offset, key = %String::from_utf8_lossy(key), "skipping pair with empty value");
            return None;
        }

        Some(RawEntry {
            section: self.section,
            key,
            value,
            comment: self.comment.take(),
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.skip_whitespace();

            // A pending comment at end of input is dropped here.
            let first = *self.input.get(self.pos)?;
            let offset = self.pos;
            let line = self.take_line();

            match first {
                b'#' => self.comment = Some(&line[1..]),
                b'[' => self.section = Some(section_name(&line[1..])),
                _ => {
                    if let Some(entry) = self.lex_pair(line, offset) {
                        return Some(entry);
                    }
                }
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Header text up to the first ']' or, when it is missing, the end of line
fn section_name(header: &[u8]) -> &[u8] {
    let end = header
        .iter()
        .position(|&byte| byte == b']')
        .unwrap_or(header.len());
    &header[..end]
}

/// Extract a value from the text following '='
///
/// Quoted values close on either quote character or at end of line.
/// Unquoted values stop at the first blank. The rest of the line is ignored.
fn scan_value(rest: &[u8]) -> &[u8] {
    let start = rest
        .iter()
        .position(|&byte| !is_blank(byte))
        .unwrap_or(rest.len());
    let rest = &rest[start..];

    match rest.first() {
        Some(&byte) if is_quote(byte) => {
            let body = &rest[1..];
            let end = body
                .iter()
                .position(|&byte| is_quote(byte))
                .unwrap_or(body.len());
            &body[..end]
        }
        _ => {
            let end = rest
                .iter()
                .position(|&byte| is_blank(byte))
                .unwrap_or(rest.len());
            &rest[..end]
        }
    }
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

fn is_whitespace(byte: u8) -> bool {
    is_blank(byte) || byte == b'\n'
}

fn is_quote(byte: u8) -> bool {
    byte == b'"' || byte == b'\''
}
