//! Walking the fixed RIFF/WAVE prefix and the chunks leading up to `data`.

use crate::chunk::*;
use crate::error::*;
use crate::types::*;
use std::convert::TryFrom;
use std::io::{Read, Write};
use tracing::debug;

/// What was read from the front of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiffHeader {
    /// The size field as stored in the input, before any adjustment.
    pub riff_size: u32,
    /// The `fmt ` chunk. Its payload is never interpreted.
    pub format: Chunk,
}

fn expect_tag<R: Read>(input: &mut R, expected: ChunkId) -> Result<ChunkId> {
    match read_tag(input)? {
        Some(actual) if actual == expected => Ok(actual),
        Some(actual) => Err(Error::UnexpectedTag { expected, actual }),
        None => Err(Error::Truncated { what: "file header" }),
    }
}

/// Reads `RIFF`, the RIFF size, `WAVE` and the whole `fmt ` chunk, leaving
/// `input` at the first chunk after the format.
///
/// Everything read is mirrored to `output` if given, with `size_delta`
/// added to the RIFF size.
pub fn consume_header<R: Read, W: Write>(
    input: &mut R,
    mut output: Option<&mut W>,
    size_delta: i64,
) -> Result<RiffHeader> {
    let riff = expect_tag(input, ChunkId::RIFF)?;
    let riff_size = read_size(input)?;
    if let Some(output) = output.as_deref_mut() {
        let new_size = u32::try_from(i64::from(riff_size) + size_delta)
            .map_err(|_| Error::SizeOverflow)?;
        write_tag(output, riff)?;
        write_size(output, new_size)?;
    }

    let wave = expect_tag(input, ChunkId::WAVE)?;
    if let Some(output) = output.as_deref_mut() {
        write_tag(output, wave)?;
    }

    let fmt = expect_tag(input, ChunkId::FMT)?;
    let fmt_size = read_size(input)?;
    let format = Chunk::read_payload(input, ChunkHeader { id: fmt, size: fmt_size })?;
    if let Some(output) = output {
        format.write(output)?;
    }
    debug!(riff_size, fmt_size, "read RIFF/WAVE header");

    Ok(RiffHeader { riff_size, format })
}

/// Consumes the header and every chunk up to and including the first `data`
/// chunk, mirroring them to `output` if given.
pub fn advance_past_data<R: Read, W: Write>(
    input: &mut R,
    mut output: Option<&mut W>,
    size_delta: i64,
) -> Result<RiffHeader> {
    let header = consume_header(input, output.as_deref_mut(), size_delta)?;

    loop {
        let chunk = ChunkHeader::read(input)?.ok_or(Error::MissingData)?;
        debug!(id = %chunk.id, size = chunk.size, "passing chunk");
        mirror_chunk(input, chunk, output.as_deref_mut())?;

        if chunk.id == ChunkId::DATA {
            break;
        }
    }

    Ok(header)
}
