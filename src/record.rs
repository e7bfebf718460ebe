use crate::header::BLOCK_LEN;

/// Entry discriminant decoded from the header's `typeflag` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `'0'`, or the pre-POSIX NUL typeflag.
    Regular,
    /// `'5'`.
    Directory,
    /// `'2'`. The header's `linkname` field holds the target path.
    Symlink,
    /// Anything this engine does not interpret (hard links, FIFOs, ...).
    Other(u8),
}

impl EntryKind {
    pub(crate) fn from_typeflag(flag: u8) -> EntryKind {
        match flag {
            b'0' | 0 => EntryKind::Regular,
            b'5' => EntryKind::Directory,
            b'2' => EntryKind::Symlink,
            other => EntryKind::Other(other),
        }
    }
}

/// One decoded USTAR header.
///
/// Records are transient: a fresh one is decoded every time a scan visits
/// its offset, and nothing is shared between scan iterations.
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    /// The stored path, exactly as it appears in the archive. Directories
    /// conventionally carry a trailing `/`; none is added or removed here.
    pub name: String,

    /// Unix permission bits.
    pub mode: u32,

    pub uid: u64,
    pub gid: u64,

    /// Content length in bytes. Content occupies `ceil(size / 512)` blocks
    /// immediately after the header.
    pub size: u64,

    /// Modification time, seconds since the Unix epoch.
    pub mtime: u64,

    pub kind: EntryKind,

    /// Target path; meaningful only when `kind` is [`EntryKind::Symlink`].
    pub link_target: String,
}

/// A decoded header plus its position in the byte stream.
#[derive(Debug, Clone)]
pub struct Entry {
    pub(crate) record: HeaderRecord,
    pub(crate) header_offset: u64,
}

impl Entry {
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    #[inline(always)]
    pub fn size(&self) -> u64 {
        self.record.size
    }

    #[inline(always)]
    pub fn kind(&self) -> EntryKind {
        self.record.kind
    }

    #[inline(always)]
    pub fn link_target(&self) -> &str {
        &self.record.link_target
    }

    #[inline(always)]
    pub fn record(&self) -> &HeaderRecord {
        &self.record
    }

    /// Byte position of this entry's header block.
    #[inline(always)]
    pub fn header_offset(&self) -> u64 {
        self.header_offset
    }

    /// Byte position immediately after the header, where the entry's
    /// content begins.
    #[inline(always)]
    pub fn content_offset(&self) -> u64 {
        self.header_offset + BLOCK_LEN as u64
    }

    #[inline(always)]
    pub fn is_file(&self) -> bool {
        self.record.kind == EntryKind::Regular
    }

    #[inline(always)]
    pub fn is_dir(&self) -> bool {
        self.record.kind == EntryKind::Directory
    }

    #[inline(always)]
    pub fn is_symlink(&self) -> bool {
        self.record.kind == EntryKind::Symlink
    }
}
