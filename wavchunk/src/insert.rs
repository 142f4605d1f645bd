use crate::chunk::*;
use crate::error::*;
use crate::header::advance_past_data;
use crate::types::*;
use std::convert::TryFrom;
use std::io::{self, Read, Write};
use tracing::debug;

/// Adds a chunk directly after the `data` chunk.
///
/// The RIFF size of the output grows by the eight header bytes plus the
/// payload length. Chunks that followed `data` in the input are kept after
/// the new one.
#[derive(Debug, Clone, Default)]
pub struct ChunkInserter {
    pub name: ChunkId,
}

impl ChunkInserter {
    pub fn new(name: ChunkId) -> Self {
        Self { name }
    }

    pub fn insert<R: Read, W: Write>(
        &self,
        input: &mut R,
        payload: &[u8],
        output: &mut W,
    ) -> Result<()> {
        let size = u32::try_from(payload.len()).map_err(|_| Error::SizeOverflow)?;
        advance_past_data(input, Some(&mut *output), 8 + i64::from(size))?;

        ChunkHeader { id: self.name, size }.write(output)?;
        output.write_all(payload)?;
        debug!(id = %self.name, size, "inserted chunk");

        let rest = io::copy(input, output)?;
        debug!(bytes = rest, "copied remainder");
        Ok(())
    }

    /// Like [`insert`](Self::insert), returning the result in memory.
    pub fn insert_to_vec<R: Read>(&self, input: &mut R, payload: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.insert(input, payload, &mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn inserts_after_data() {
        let wav = wave().chunk(b"data", &[7; 10]).build();
        let out = ChunkInserter::default()
            .insert_to_vec(&mut Cursor::new(&wav), b"hello")
            .unwrap();

        let expected = wave().chunk(b"data", &[7; 10]).chunk(b"INFO", b"hello").build();
        assert_eq!(out, expected);
        assert_eq!(riff_size(&out), riff_size(&wav) + 8 + 5);
    }

    #[test]
    fn keeps_chunks_around_data() {
        let wav = wave()
            .chunk(b"LIST", b"abcd")
            .chunk(b"data", &[1, 2])
            .chunk(b"cue ", b"c")
            .build();
        let inserter = ChunkInserter::new("ab".parse().unwrap());
        let mut out = Vec::new();
        inserter.insert(&mut Cursor::new(&wav), b"xy", &mut out).unwrap();

        let expected = wave()
            .chunk(b"LIST", b"abcd")
            .chunk(b"data", &[1, 2])
            .chunk(b"ab  ", b"xy")
            .chunk(b"cue ", b"c")
            .build();
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_payload() {
        let wav = wave().chunk(b"data", &[]).build();
        let out = ChunkInserter::default()
            .insert_to_vec(&mut Cursor::new(&wav), &[])
            .unwrap();
        assert_eq!(out, wave().chunk(b"data", &[]).chunk(b"INFO", &[]).build());
    }

    #[test]
    fn fails_without_data_chunk() {
        let wav = wave().chunk(b"LIST", b"abcd").build();
        assert!(matches!(
            ChunkInserter::default().insert_to_vec(&mut Cursor::new(&wav), b"x"),
            Err(Error::MissingData)
        ));
    }

    #[test]
    fn fails_on_truncated_data() {
        let mut wav = wave().chunk(b"data", &[0; 32]).build();
        wav.truncate(wav.len() - 4);
        assert!(matches!(
            ChunkInserter::default().insert_to_vec(&mut Cursor::new(&wav), b"x"),
            Err(Error::Truncated { .. })
        ));
    }
}
