use crate::types::ChunkId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected '{expected}', got '{actual}'")]
    UnexpectedTag { expected: ChunkId, actual: ChunkId },
    #[error("unexpected end of stream while reading {what}")]
    Truncated { what: &'static str },
    #[error("'{0}' must be exactly 4 characters long")]
    InvalidName(String),
    #[error("missing data chunk")]
    MissingData,
    #[error("chunk size does not fit in 32 bits")]
    SizeOverflow,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Maps a short read onto [`Error::Truncated`], passing other I/O errors through.
pub(crate) fn truncated(what: &'static str) -> impl FnOnce(io::Error) -> Error {
    move |err| match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated { what },
        _ => Error::Io(err),
    }
}
