//! Path length limits and byte-exact path encoding for manifests.

use crate::error::HcompareError;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Longest path the platform accepts (PATH_MAX on Unix)
#[cfg(unix)]
pub const MAX_PATH_LEN: usize = 4096;

/// Longest extended-length path, in UTF-16 units
#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 32767;

#[cfg(not(any(unix, windows)))]
pub const MAX_PATH_LEN: usize = 4096;

/// Length of `path` in the platform's native units
pub fn native_len(path: &Path) -> usize {
    #[cfg(windows)]
    {
        use std::os::windows::ffi::OsStrExt;
        path.as_os_str().encode_wide().count()
    }
    #[cfg(not(windows))]
    {
        path.as_os_str().len()
    }
}

/// Fail with `PathTooLong` when `path` exceeds [`MAX_PATH_LEN`].
pub fn check_path_len(path: &Path) -> Result<(), HcompareError> {
    let len = native_len(path);
    if len > MAX_PATH_LEN {
        return Err(HcompareError::PathTooLong {
            path: path.to_path_buf(),
            len,
            max: MAX_PATH_LEN,
        });
    }
    Ok(())
}

/// Bytes written to the manifest path field.
///
/// Raw `OsStr` bytes on Unix so non-UTF-8 names survive a round trip; other
/// platforms fall back to lossy UTF-8.
pub fn path_to_bytes(path: &Path) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(path.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        match path.to_string_lossy() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        }
    }
}

/// Inverse of [`path_to_bytes`]
pub fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(bytes))
    }
    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// True when `path` can be written as a manifest path field
///
/// A trailing `\r` is refused too: the reader strips it as part of a CRLF
/// terminator, so the path would not read back unchanged.
pub fn is_representable(path: &Path) -> bool {
    let bytes = path_to_bytes(path);
    !bytes.is_empty()
        && bytes.last() != Some(&b'\r')
        && !bytes.iter().any(|b| *b == b'\t' || *b == b'\n')
}
