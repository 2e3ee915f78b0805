use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;

use libc::c_char;
use smallvec::SmallVec;

/// A NUL-terminated copy of a path, built into an inline buffer so that
/// typical paths don't touch the heap on the way into a native call.
/// Interior NUL bytes would truncate the C string, so they are replaced
/// with '?', which then simply fails to open.
pub(crate) struct CFfiString<A: ::smallvec::Array> {
    buffer: SmallVec<A>,
}

impl<A: ::smallvec::Array<Item = u8>> CFfiString<A> {
    pub(crate) fn new(path: &Path) -> Self {
        let mut buffer = SmallVec::<A>::new();
        buffer.extend(
            os_str_bytes(path.as_os_str())
                .iter()
                .map(|&b| if b == 0 { b'?' } else { b }),
        );
        buffer.push(0);
        Self { buffer }
    }

    pub(crate) fn as_ptr(&self) -> *const c_char {
        self.buffer.as_ptr() as *const c_char
    }
}

#[cfg(unix)]
fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
