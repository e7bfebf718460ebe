//! Sequential archive scanning: the shared primitive every query runs on.

use std::io::{self, Read, Seek, SeekFrom};

use crate::de::decode_header;
use crate::error::{Error, Result};
use crate::header::{self, Block, BLOCK_LEN};
use crate::record::Entry;

/// Iterator over the content headers of an archive.
///
/// Created by [`ArchiveReader::entries`]; the stream is repositioned to
/// the start of the archive first. Each step reads one header block and
/// then skips past the entry's content and padding, so the cursor always
/// sits on a block boundary. The iteration ends at the first all-zero
/// terminator block, or at a clean EOF on a block boundary.
///
/// [`ArchiveReader::entries`]: crate::ArchiveReader::entries
pub struct Entries<'a, R: Read + Seek> {
    stream: &'a mut R,
    offset: u64,
    done: bool,
}

impl<'a, R: Read + Seek> Entries<'a, R> {
    pub(crate) fn new(stream: &'a mut R) -> Result<Entries<'a, R>> {
        stream.seek(SeekFrom::Start(0))?;
        Ok(Entries {
            stream,
            offset: 0,
            done: false,
        })
    }

    fn read_block(&mut self, block: &mut Block) -> Result<Option<()>> {
        let mut filled = 0;
        while filled < BLOCK_LEN {
            match self.stream.read(&mut block[filled..]) {
                // EOF at a block boundary ends the archive; a partial
                // block is a truncation.
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(Error::Truncated { offset: self.offset }),
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(()))
    }
}

impl<'a, R: Read + Seek> Iterator for Entries<'a, R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut block = [0u8; BLOCK_LEN];
        match self.read_block(&mut block) {
            Ok(Some(())) => {}
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        }

        if header::is_terminator(&block) {
            // Nothing after the first terminator is trusted.
            self.done = true;
            return None;
        }

        let record = match decode_header(&block) {
            Ok(record) => record,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        let header_offset = self.offset;
        let content_len = header::padded_len(record.size);
        let next_offset = header_offset + BLOCK_LEN as u64 + content_len;

        // Skip content and padding whether or not the caller wants them.
        if content_len > 0 {
            if let Err(e) = self.stream.seek(SeekFrom::Start(next_offset)) {
                self.done = true;
                return Some(Err(e.into()));
            }
        }
        self.offset = next_offset;

        tracing::debug!(
            start = format_args!("{:#x}", header_offset),
            end = format_args!("{:#x}", next_offset),
            name = %record.name,
            size = record.size,
            "scanned entry"
        );

        Some(Ok(Entry {
            record,
            header_offset,
        }))
    }
}
