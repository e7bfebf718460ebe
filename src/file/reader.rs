use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::is_direct_child;
use crate::record::{Entry, EntryKind};
use crate::scan::Entries;

use super::{FileSlice, ListOutcome};

/// Convenience reader over a tar file on disk.
pub type TarFileReader = ArchiveReader<BufReader<File>>;

/// Read-only accessor over a seekable byte stream containing a USTAR
/// archive.
///
/// Every operation repositions the stream to the start of the archive and
/// scans forward, leaving the cursor wherever the scan ends. There is no
/// internal caching and no locking; callers sharing a stream must
/// serialize access themselves.
#[derive(Debug)]
pub struct ArchiveReader<R: Read + Seek> {
    stream: R,
}

impl ArchiveReader<BufReader<File>> {
    /// Open a tar file for reading. The archive is not validated here;
    /// whichever query runs first will surface any format error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TarFileReader> {
        let file = File::open(path.as_ref())?;
        Ok(ArchiveReader::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    pub fn new(stream: R) -> ArchiveReader<R> {
        ArchiveReader { stream }
    }

    pub fn into_inner(self) -> R {
        self.stream
    }

    /// Iterate the archive's content headers from the start.
    pub fn entries(&mut self) -> Result<Entries<'_, R>> {
        Entries::new(&mut self.stream)
    }

    /// Validate every header in the archive.
    ///
    /// Returns the number of content headers scanned before the
    /// terminator. The first invalid header anywhere in the archive is
    /// surfaced verbatim. The stream is never mutated, so repeated calls
    /// return the same count.
    pub fn check(&mut self) -> Result<u64> {
        let mut count = 0u64;
        for entry in self.entries()? {
            entry?;
            count += 1;
        }
        tracing::debug!(count, "archive validated");
        Ok(count)
    }

    /// True if any entry's stored name equals `path` exactly, whatever its
    /// typeflag.
    pub fn exists(&mut self, path: &str) -> Result<bool> {
        Ok(self.find(path)?.is_some())
    }

    /// True if `path` names a regular file (typeflag `'0'` or NUL).
    pub fn is_file(&mut self, path: &str) -> Result<bool> {
        Ok(self.kind_of(path)? == Some(EntryKind::Regular))
    }

    /// True if `path` names a directory.
    pub fn is_dir(&mut self, path: &str) -> Result<bool> {
        Ok(self.kind_of(path)? == Some(EntryKind::Directory))
    }

    /// True if `path` names a symlink.
    pub fn is_symlink(&mut self, path: &str) -> Result<bool> {
        Ok(self.kind_of(path)? == Some(EntryKind::Symlink))
    }

    /// List the immediate children of the directory named by `path` into
    /// `dest`, in archive order.
    ///
    /// A symlink is resolved once; the effective path must then name a
    /// directory or the outcome is [`ListOutcome::NoSuchDirectory`]
    /// (never an error). Children of subdirectories are excluded. A child
    /// beyond `dest.len()` is a [`Error::Capacity`], never a silent
    /// truncation.
    pub fn list(&mut self, path: &str, dest: &mut [String]) -> Result<ListOutcome> {
        let dir = match self.find_resolved(path)? {
            Some(entry) if entry.is_dir() => entry,
            _ => {
                tracing::debug!(path, "no such directory");
                return Ok(ListOutcome::NoSuchDirectory);
            }
        };

        let mut count = 0usize;
        for entry in Entries::new(&mut self.stream)? {
            let entry = entry?;
            if !is_direct_child(dir.name(), entry.name()) {
                continue;
            }
            if count == dest.len() {
                return Err(Error::Capacity {
                    capacity: dest.len(),
                });
            }
            dest[count] = entry.name().to_string();
            count += 1;
        }

        tracing::debug!(path, count, "listed directory");
        Ok(ListOutcome::Listed(count))
    }

    /// Copy up to `dest.len()` bytes of the regular file named by `path`,
    /// starting `offset` bytes into its content.
    ///
    /// A symlink is resolved once; the effective entry must be a regular
    /// file. `offset == size` is valid and copies nothing. Fewer than
    /// `dest.len()` bytes are copied only at end-of-file; padding bytes
    /// are never copied. The returned [`FileSlice`] reports the bytes
    /// copied and the bytes still unread, so callers can loop by
    /// advancing `offset` to drain a large file.
    pub fn read_file(&mut self, path: &str, offset: u64, dest: &mut [u8]) -> Result<FileSlice> {
        let entry = match self.find_resolved(path)? {
            Some(entry) => entry,
            None => {
                return Err(Error::NotFound {
                    path: path.to_string(),
                })
            }
        };
        if !entry.is_file() {
            return Err(Error::NotAFile {
                path: path.to_string(),
            });
        }

        let size = entry.size();
        if offset > size {
            return Err(Error::OffsetOutOfRange {
                path: path.to_string(),
                offset,
                size,
            });
        }

        let wanted = (size - offset).min(dest.len() as u64) as usize;
        if wanted > 0 {
            self.stream
                .seek(SeekFrom::Start(entry.content_offset() + offset))?;
            self.stream.read_exact(&mut dest[..wanted])?;
        }
        let remaining = size - offset - wanted as u64;

        tracing::debug!(
            path,
            offset,
            copied = wanted,
            remaining,
            "read file slice"
        );

        Ok(FileSlice {
            copied: wanted,
            remaining,
        })
    }

    /// First entry whose stored name equals `path`, by exact raw string
    /// comparison.
    fn find(&mut self, path: &str) -> Result<Option<Entry>> {
        for entry in self.entries()? {
            let entry = entry?;
            if entry.name() == path {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    fn kind_of(&mut self, path: &str) -> Result<Option<EntryKind>> {
        Ok(self.find(path)?.map(|entry| entry.kind()))
    }

    /// Find `path`, resolving at most one symlink hop. A target that is
    /// itself a symlink is returned as-is, never chained further.
    fn find_resolved(&mut self, path: &str) -> Result<Option<Entry>> {
        let entry = match self.find(path)? {
            Some(entry) => entry,
            None => return Ok(None),
        };
        if !entry.is_symlink() {
            return Ok(Some(entry));
        }
        let target = entry.link_target().to_string();
        tracing::debug!(link = path, target = %target, "resolving symlink");
        self.find(&target)
    }
}
