//! Header deserialization: decoding and validating one 512-byte block.

use crate::error::FormatError;
use crate::header::{self, Block};
use crate::record::{EntryKind, HeaderRecord};

/// Decode and validate one header block. Pure; performs no I/O.
///
/// A block either validates fully or yields the first failing check:
/// magic, then version, then checksum.
pub fn decode_header(block: &Block) -> Result<HeaderRecord, FormatError> {
    let magic = &block[header::MAGIC];
    if magic != &header::MAGIC_BYTES[..] {
        let mut found = [0u8; 6];
        found.copy_from_slice(magic);
        return Err(FormatError::BadMagic { found });
    }

    let version = &block[header::VERSION];
    if version != &header::VERSION_BYTES[..] {
        let mut found = [0u8; 2];
        found.copy_from_slice(version);
        return Err(FormatError::BadVersion { found });
    }

    let stored = parse_octal(&block[header::CHKSUM]) as u32;
    let computed = compute_checksum(block);
    if stored != computed {
        return Err(FormatError::BadChecksum { stored, computed });
    }

    let record = HeaderRecord {
        name: field_str(&block[header::NAME]),
        mode: parse_octal(&block[header::MODE]) as u32,
        uid: parse_octal(&block[header::UID]),
        gid: parse_octal(&block[header::GID]),
        size: parse_octal(&block[header::SIZE]),
        mtime: parse_octal(&block[header::MTIME]),
        kind: EntryKind::from_typeflag(block[header::TYPEFLAG]),
        link_target: field_str(&block[header::LINKNAME]),
    };

    tracing::trace!(name = %record.name, size = record.size, "decoded header");

    Ok(record)
}

/// Sum of all 512 bytes as unsigned values, with ASCII space substituted
/// for each of the 8 checksum-field bytes. Summing signed bytes would
/// silently corrupt the result on archives containing bytes >= 0x80.
pub(crate) fn compute_checksum(block: &Block) -> u32 {
    let mut sum = 0u32;
    for (i, &b) in block.iter().enumerate() {
        if header::CHKSUM.contains(&i) {
            sum += u32::from(b' ');
        } else {
            sum += u32::from(b);
        }
    }
    sum
}

/// NUL/space padded octal ASCII, as used by every numeric USTAR field.
/// Leading padding is skipped; parsing stops at the first non-digit. An
/// empty digit run parses as 0.
pub(crate) fn parse_octal(field: &[u8]) -> u64 {
    let mut i = 0;
    while i < field.len() && (field[i] == 0 || field[i] == b' ') {
        i += 1;
    }
    let mut value = 0u64;
    while i < field.len() && (b'0'..=b'7').contains(&field[i]) {
        value = value * 8 + u64::from(field[i] - b'0');
        i += 1;
    }
    value
}

/// Bytes of a string field up to its NUL terminator, or the whole field
/// when none is present.
fn field_str(field: &[u8]) -> String {
    let bytes = match field.iter().position(|&b| b == 0) {
        Some(i) => &field[..i],
        None => field,
    };
    String::from_utf8_lossy(bytes).into_owned()
}
