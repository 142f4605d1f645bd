use byteorder::{ByteOrder, LE};

/// 16 kHz, mono, 16-bit PCM.
pub const FMT_PAYLOAD: [u8; 16] = [
    0x01, 0x00, 0x01, 0x00, 0x80, 0x3e, 0x00, 0x00, 0x00, 0x7d, 0x00, 0x00, 0x02, 0x00, 0x10, 0x00,
];

/// Length of `RIFF`, size, `WAVE` and the `fmt ` chunk.
pub const HEADER_LEN: usize = 12 + 8 + FMT_PAYLOAD.len();

/// Builds a WAVE file from the given top-level chunks.
#[derive(Default)]
pub struct WavBuilder {
    chunks: Vec<u8>,
}

pub fn wave() -> WavBuilder {
    WavBuilder::default()
}

impl WavBuilder {
    pub fn chunk(mut self, id: &[u8; 4], data: &[u8]) -> Self {
        self.chunks.extend_from_slice(id);
        self.chunks.extend_from_slice(&(data.len() as u32).to_le_bytes());
        self.chunks.extend_from_slice(data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(FMT_PAYLOAD.len() as u32).to_le_bytes());
        body.extend_from_slice(&FMT_PAYLOAD);
        body.extend_from_slice(&self.chunks);

        let mut wav = Vec::with_capacity(8 + body.len());
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
        wav.extend_from_slice(&body);
        wav
    }
}

pub fn riff_size(wav: &[u8]) -> u32 {
    LE::read_u32(&wav[4..8])
}
