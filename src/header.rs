use std::ops::Range;

/// Size of every on-disk unit: header blocks, content blocks and the
/// all-zero terminator.
pub const BLOCK_LEN: usize = 512;

/// A single 512-byte unit as read from the archive.
pub type Block = [u8; BLOCK_LEN];

// Field layout of a USTAR header block.
pub(crate) const NAME: Range<usize> = 0..100;
pub(crate) const MODE: Range<usize> = 100..108;
pub(crate) const UID: Range<usize> = 108..116;
pub(crate) const GID: Range<usize> = 116..124;
pub(crate) const SIZE: Range<usize> = 124..136;
pub(crate) const MTIME: Range<usize> = 136..148;
pub(crate) const CHKSUM: Range<usize> = 148..156;
pub(crate) const TYPEFLAG: usize = 156;
pub(crate) const LINKNAME: Range<usize> = 157..257;
pub(crate) const MAGIC: Range<usize> = 257..263;
pub(crate) const VERSION: Range<usize> = 263..265;

pub(crate) const MAGIC_BYTES: &[u8; 6] = b"ustar\0";
pub(crate) const VERSION_BYTES: &[u8; 2] = b"00";

/// An all-zero block signals the logical end of the archive.
#[inline(always)]
pub(crate) fn is_terminator(block: &Block) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Bytes an entry's content occupies on disk, zero-padded up to a whole
/// number of blocks. Padding is zero when `size` is already a multiple of
/// the block length; zero-length content occupies no blocks at all.
#[inline(always)]
pub(crate) fn padded_len(size: u64) -> u64 {
    match size % BLOCK_LEN as u64 {
        0 => size,
        rem => size + (BLOCK_LEN as u64 - rem),
    }
}
