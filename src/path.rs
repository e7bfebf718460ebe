//! Raw stored-path matching.
//!
//! Queries compare the stored name byte-for-byte; no normalization of any
//! kind is applied. The only structure understood here is the `/`
//! separator, used to tell immediate children from deeper descendants.

/// True if `name` is an immediate child of the directory named `dir`.
///
/// `dir` is taken exactly as stored in the archive (directories
/// conventionally carry their trailing `/`). A child directory keeps its
/// own trailing separator: listing `dir/` yields `dir/c/` but not
/// `dir/c/d`.
pub(crate) fn is_direct_child(dir: &str, name: &str) -> bool {
    let rest = match name.strip_prefix(dir) {
        Some(rest) if !rest.is_empty() => rest,
        _ => return false,
    };
    match rest.find('/') {
        None => true,
        Some(i) => i == rest.len() - 1,
    }
}
