use crate::error::*;
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::convert::TryFrom;
use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

/// A four byte chunk identifier.
///
/// Identifiers read from a stream are taken as-is; identifiers built from a
/// name are right-padded with spaces and must be ASCII.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct ChunkId([u8; 4]);

impl ChunkId {
    pub const RIFF: ChunkId = ChunkId(*b"RIFF");
    pub const WAVE: ChunkId = ChunkId(*b"WAVE");
    pub const FMT: ChunkId = ChunkId(*b"fmt ");
    pub const DATA: ChunkId = ChunkId(*b"data");
    pub const INFO: ChunkId = ChunkId(*b"INFO");

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        ChunkId::INFO
    }
}

impl<'a> TryFrom<&'a str> for ChunkId {
    type Error = Error;

    fn try_from(name: &'a str) -> Result<Self> {
        if name.len() > 4 || !name.is_ascii() {
            return Err(Error::InvalidName(name.to_owned()));
        }

        let mut bytes = [b' '; 4];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self(bytes))
    }
}

impl FromStr for ChunkId {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        ChunkId::try_from(name)
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId(")?;
        fmt::Display::fmt(&self, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Reads a chunk identifier.
///
/// Returns `None` if the stream ends before the first byte. A stream ending
/// partway through the identifier is a truncation error.
pub fn read_tag<R: Read>(input: &mut R) -> Result<Option<ChunkId>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    match filled {
        0 => Ok(None),
        4 => Ok(Some(ChunkId(buf))),
        _ => Err(Error::Truncated { what: "chunk id" }),
    }
}

pub fn write_tag<W: Write>(output: &mut W, id: ChunkId) -> Result<()> {
    output.write_all(&id.0)?;
    Ok(())
}

/// Pads and validates `name`, then writes it. Nothing is written if the
/// name is rejected.
pub fn write_name<W: Write>(output: &mut W, name: &str) -> Result<()> {
    write_tag(output, ChunkId::try_from(name)?)
}

pub fn read_size<R: Read>(input: &mut R) -> Result<u32> {
    input.read_u32::<LE>().map_err(truncated("chunk size"))
}

pub fn write_size<W: Write>(output: &mut W, size: u32) -> Result<()> {
    output.write_u32::<LE>(size)?;
    Ok(())
}
