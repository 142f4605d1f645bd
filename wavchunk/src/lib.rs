//! Streaming insertion and extraction of named chunks in RIFF/WAVE files.
//!
//! Files are processed in a single forward pass: the `RIFF`/`WAVE` header
//! and `fmt ` chunk are checked and copied, then top-level chunks are either
//! passed through, captured, or dropped. Audio data is never interpreted or
//! buffered as a whole.
//!
//! ```no_run
//! use std::io;
//! use wavchunk::{ChunkExtractor, ChunkInserter};
//!
//! # fn main() -> wavchunk::Result<()> {
//! let mut input = io::stdin();
//! let mut output = io::stdout();
//! ChunkInserter::default().insert(&mut input, b"metadata", &mut output)?;
//!
//! let wav = std::fs::read("tagged.wav")?;
//! let _info = ChunkExtractor::default().find(&mut &wav[..])?;
//! # Ok(())
//! # }
//! ```

pub mod chunk;
mod error;
mod extract;
pub mod header;
mod insert;
mod list;
mod types;

#[cfg(test)]
mod test_util;

pub use chunk::{Chunk, ChunkHeader};
pub use error::{Error, Result};
pub use extract::ChunkExtractor;
pub use header::{advance_past_data, consume_header, RiffHeader};
pub use insert::ChunkInserter;
pub use list::list_chunks;
pub use types::*;
