//! Read-only accessor for archives in the USTAR on-disk format.
//!
//! Every operation re-seeks to the start of the archive and scans forward
//! header by header; nothing is cached between calls.

mod de;
mod error;
mod file;
mod header;
mod path;
mod record;
mod scan;

pub use de::decode_header;
pub use error::{Error, FormatError, Result};
pub use file::{ArchiveReader, FileSlice, ListOutcome, TarFileReader};
pub use header::{Block, BLOCK_LEN};
pub use record::{Entry, EntryKind, HeaderRecord};
pub use scan::Entries;
