use crate::chunk::*;
use crate::error::*;
use crate::header::consume_header;
use std::io::{self, Read};
use tracing::debug;

/// Walks the whole file and returns the header of every chunk after `WAVE`,
/// starting with `fmt `, in file order.
pub fn list_chunks<R: Read>(input: &mut R) -> Result<Vec<ChunkHeader>> {
    let header = consume_header::<R, io::Sink>(input, None, 0)?;
    let mut chunks = vec![header.format.header()?];

    while let Some(chunk) = ChunkHeader::read(input)? {
        debug!(id = %chunk.id, size = chunk.size, "listing chunk");
        copy_payload(input, chunk, &mut io::sink())?;
        chunks.push(chunk);
    }

    Ok(chunks)
}
