//! Qualified-name splitting.
//!
//! A qualified name like `A::B::C` decomposes at its *rightmost* `::`
//! into the outer-scope prefix (`A::B`) and the innermost base
//! identifier (`C`). A name with no separator has no prefix and is its
//! own base.

use memchr::memmem;
use thiserror::Error;

/// Ceiling on qualified-name length, in bytes.
///
/// The historical implementation copied names into a fixed 512-byte
/// working buffer and silently overflowed past it. The ceiling is kept
/// but enforced: longer names fail with
/// [`ScopeNameError::LengthExceeded`] instead of truncating.
pub const SCOPENAME_MAX: usize = 512;

/// Error splitting a qualified name.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScopeNameError {
    #[error("qualified name is {len} bytes, exceeding the {SCOPENAME_MAX}-byte ceiling")]
    LengthExceeded { len: usize },
}

fn check_len(name: &str) -> Result<(), ScopeNameError> {
    if name.len() > SCOPENAME_MAX {
        return Err(ScopeNameError::LengthExceeded { len: name.len() });
    }
    Ok(())
}

/// Rightmost occurrence of `::`, if any.
///
/// `::` is pure ASCII, so the returned offset always lies on a UTF-8
/// character boundary.
fn rightmost_separator(name: &str) -> Option<usize> {
    memmem::rfind(name.as_bytes(), b"::")
}

/// Returns the outer-scope prefix of a qualified name: everything
/// before the rightmost `::`.
///
/// `None` means the prefix is absent: either the name contains no
/// separator at all, or the rightmost separator sits at the very start
/// of the name (`::X` has no prefix rather than an empty one).
pub fn split_prefix(name: &str) -> Result<Option<&str>, ScopeNameError> {
    check_len(name)?;
    match rightmost_separator(name) {
        None | Some(0) => Ok(None),
        Some(pos) => Ok(Some(&name[..pos])),
    }
}

/// Returns the innermost base identifier of a qualified name:
/// everything after the rightmost `::`, or the whole name when there
/// is no separator.
pub fn split_base(name: &str) -> Result<&str, ScopeNameError> {
    check_len(name)?;
    match rightmost_separator(name) {
        None => Ok(name),
        Some(pos) => Ok(&name[pos + 2..]),
    }
}
