use crate::chunk::*;
use crate::error::*;
use crate::header::consume_header;
use crate::types::*;
use std::io::{self, Read, Write};
use tracing::debug;

/// Finds a chunk by name after the `fmt ` chunk and returns its payload.
///
/// With `keep_chunk` set, scanning stops at the first match and everything
/// after it is copied through untouched. Otherwise every matching chunk is
/// left out of the output and the payload of the last one is returned.
///
/// The RIFF size is copied unchanged, even when a chunk is removed.
#[derive(Debug, Clone)]
pub struct ChunkExtractor {
    pub name: ChunkId,
    pub keep_chunk: bool,
}

impl Default for ChunkExtractor {
    fn default() -> Self {
        ChunkExtractor {
            name: ChunkId::INFO,
            keep_chunk: true,
        }
    }
}

impl ChunkExtractor {
    pub fn new(name: ChunkId) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Returns the payload of the chunk, or `None` if there is no such chunk.
    ///
    /// All other chunks are mirrored to `output` if given; if nothing was
    /// found the output is an exact copy of the input.
    pub fn extract<R: Read, W: Write>(
        &self,
        input: &mut R,
        mut output: Option<&mut W>,
    ) -> Result<Option<Vec<u8>>> {
        consume_header(input, output.as_deref_mut(), 0)?;

        let mut found = None;
        while let Some(header) = ChunkHeader::read(input)? {
            if header.id != self.name {
                mirror_chunk(input, header, output.as_deref_mut())?;
                continue;
            }

            let chunk = Chunk::read_payload(input, header)?;
            debug!(id = %chunk.id, size = header.size, keep = self.keep_chunk, "found chunk");
            if self.keep_chunk {
                if let Some(output) = output.as_deref_mut() {
                    chunk.write(output)?;
                }
                found = Some(chunk.data);
                break;
            }
            found = Some(chunk.data);
        }

        if let Some(output) = output {
            let rest = io::copy(input, output)?;
            debug!(bytes = rest, "copied remainder");
        }

        Ok(found)
    }

    /// Looks for the chunk without producing any output.
    pub fn find<R: Read>(&self, input: &mut R) -> Result<Option<Vec<u8>>> {
        self.extract::<R, io::Sink>(input, None)
    }
}
