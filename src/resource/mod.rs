//! Resource Module
//!
//! File access for reading INI input and writing rendered output.
//!
//! ## Read Path
//! 1. stat the resource (`NotFound` / `Stat`)
//! 2. check the reported size against the ceiling (`TooLarge`)
//! 3. read exactly that many bytes (`Read` / `ShortRead`)
//!
//! ## Write Path
//! Open with create + truncate or create + append, then write the whole
//! buffer in one call.

mod reader;
mod writer;

pub use reader::read_resource;
pub use writer::write_resource;
