use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to validate a single 512-byte header block.
///
/// Checked in order: magic, version, checksum. `check` surfaces the first
/// of these found anywhere in the archive, verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad magic: expected `ustar\\0`, found {found:?}")]
    BadMagic { found: [u8; 6] },

    #[error("bad version: expected `00`, found {found:?}")]
    BadVersion { found: [u8; 2] },

    #[error("bad checksum: header states {stored:#o}, computed {computed:#o}")]
    BadChecksum { stored: u32, computed: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error reading archive")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// A header block was cut short mid-read. A clean EOF at a block
    /// boundary is treated as end of archive, not truncation.
    #[error("archive truncated: partial header block at offset {offset:#x}")]
    Truncated { offset: u64 },

    #[error("no entry named `{path}` in archive")]
    NotFound { path: String },

    #[error("entry `{path}` is not a regular file")]
    NotAFile { path: String },

    /// Distinct from an I/O failure so callers can tell a bad request
    /// from a bad medium.
    #[error("offset {offset} out of range for `{path}` ({size} bytes)")]
    OffsetOutOfRange { path: String, offset: u64, size: u64 },

    /// The listing found more children than the caller provided slots for.
    /// Never silently truncated.
    #[error("listing exceeds destination capacity of {capacity} entries")]
    Capacity { capacity: usize },
}
