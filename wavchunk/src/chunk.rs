//! Reading and mirroring of individual chunks.

use crate::error::*;
use crate::types::*;
use std::convert::TryFrom;
use std::io::{self, Read, Write};
use tracing::trace;

/// The eight bytes in front of every chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: ChunkId,
    pub size: u32,
}

impl ChunkHeader {
    /// Reads an id and size. Returns `None` at a clean end of stream.
    pub fn read<R: Read>(input: &mut R) -> Result<Option<Self>> {
        let id = match read_tag(input)? {
            Some(id) => id,
            None => return Ok(None),
        };
        let size = read_size(input)?;
        trace!(%id, size, "chunk header");

        Ok(Some(ChunkHeader { id, size }))
    }

    pub fn write<W: Write>(&self, output: &mut W) -> Result<()> {
        write_tag(output, self.id)?;
        write_size(output, self.size)
    }
}

/// A chunk whose payload has been buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub id: ChunkId,
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(id: ChunkId, data: Vec<u8>) -> Self {
        Self { id, data }
    }

    pub fn header(&self) -> Result<ChunkHeader> {
        let size = u32::try_from(self.data.len()).map_err(|_| Error::SizeOverflow)?;
        Ok(ChunkHeader { id: self.id, size })
    }

    /// Reads the payload belonging to `header`, which must have just been read.
    pub fn read_payload<R: Read>(input: &mut R, header: ChunkHeader) -> Result<Self> {
        let mut data = Vec::new();
        let read = input
            .by_ref()
            .take(u64::from(header.size))
            .read_to_end(&mut data)?;
        if read < header.size as usize {
            return Err(Error::Truncated { what: "chunk data" });
        }

        Ok(Chunk::new(header.id, data))
    }

    pub fn write<W: Write>(&self, output: &mut W) -> Result<()> {
        self.header()?.write(output)?;
        output.write_all(&self.data)?;
        Ok(())
    }
}

/// Streams exactly `header.size` payload bytes from `input` to `output`.
pub fn copy_payload<R: Read, W: Write + ?Sized>(
    input: &mut R,
    header: ChunkHeader,
    output: &mut W,
) -> Result<()> {
    let copied = io::copy(&mut input.by_ref().take(u64::from(header.size)), output)?;
    if copied < u64::from(header.size) {
        return Err(Error::Truncated { what: "chunk data" });
    }
    Ok(())
}

/// Copies the chunk introduced by `header` to `output`, or skips over it
/// when there is no output.
pub fn mirror_chunk<R: Read, W: Write>(
    input: &mut R,
    header: ChunkHeader,
    output: Option<&mut W>,
) -> Result<()> {
    match output {
        Some(output) => {
            header.write(output)?;
            copy_payload(input, header, output)
        }
        None => copy_payload(input, header, &mut io::sink()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn mirrors_unknown_chunks_verbatim() {
        let bytes = b"zzz?\x03\x00\x00\x00abcrest".to_vec();
        let mut input = Cursor::new(bytes.clone());
        let mut out = Vec::new();

        let header = ChunkHeader::read(&mut input).unwrap().unwrap();
        assert_eq!(header, ChunkHeader { id: ChunkId::new(*b"zzz?"), size: 3 });
        mirror_chunk(&mut input, header, Some(&mut out)).unwrap();

        assert_eq!(out, bytes[..11].to_vec());
        assert_eq!(input.position(), 11);
    }

    #[test]
    fn skipping_consumes_the_payload() {
        let mut input = Cursor::new(b"LIST\x02\x00\x00\x00xyLIST".to_vec());
        let header = ChunkHeader::read(&mut input).unwrap().unwrap();
        mirror_chunk::<_, Vec<u8>>(&mut input, header, None).unwrap();
        assert_eq!(input.position(), 10);
    }

    #[test]
    fn short_payload_is_truncation() {
        let mut input = Cursor::new(b"data\x10\x00\x00\x00abc".to_vec());
        let header = ChunkHeader::read(&mut input).unwrap().unwrap();
        assert!(matches!(
            Chunk::read_payload(&mut input, header),
            Err(Error::Truncated { what: "chunk data" })
        ));

        let mut input = Cursor::new(b"data\x10\x00\x00\x00abc".to_vec());
        let header = ChunkHeader::read(&mut input).unwrap().unwrap();
        assert!(matches!(
            mirror_chunk(&mut input, header, Some(&mut Vec::new())),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn header_read_at_end_of_stream() {
        let mut input = Cursor::new(Vec::<u8>::new());
        assert_eq!(ChunkHeader::read(&mut input).unwrap(), None);

        let mut input = Cursor::new(b"INFO\x01".to_vec());
        assert!(matches!(
            ChunkHeader::read(&mut input),
            Err(Error::Truncated { what: "chunk size" })
        ));
    }

    #[test]
    fn odd_sized_chunks_are_not_padded() {
        let chunk = Chunk::new(ChunkId::INFO, vec![1, 2, 3]);
        let mut out = Vec::new();
        chunk.write(&mut out).unwrap();
        assert_eq!(out, b"INFO\x03\x00\x00\x00\x01\x02\x03".to_vec());

        let mut input = Cursor::new(out);
        let header = ChunkHeader::read(&mut input).unwrap().unwrap();
        assert_eq!(Chunk::read_payload(&mut input, header).unwrap(), chunk);
    }
}
