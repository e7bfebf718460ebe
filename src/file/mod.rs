mod reader;

pub use self::reader::{ArchiveReader, TarFileReader};

/// Outcome of listing a directory's immediate children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// Number of entries written to the caller's buffer, in archive order.
    Listed(usize),
    /// The path does not name a directory in the archive, even after one
    /// symlink hop. Not an error.
    NoSuchDirectory,
}

/// Outcome of one [`read_file`](ArchiveReader::read_file) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSlice {
    /// Bytes copied into the destination buffer.
    pub copied: usize,
    /// Bytes of the file still unread beyond what was just copied. Zero
    /// exactly when the copy reached end-of-file.
    pub remaining: u64,
}
