use crate::compat::{Cow, String};

/// Replace the first backslash with a forward slash.
/// Only the first one is touched, later backslashes are kept verbatim.
pub fn replace_first_backslash(input: &str) -> Cow<'_, str> {
    memchr::memchr(b'\\', input.as_bytes()).map_or(Cow::Borrowed(input), |pos| {
        let mut out = String::with_capacity(input.len());
        out.push_str(&input[..pos]);
        out.push('/');
        out.push_str(&input[pos + 1..]);
        Cow::Owned(out)
    })
}

/// Prefix `path` with `/` unless it already starts with one.
pub fn ensure_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        let mut out = String::with_capacity(path.len() + 1);
        out.push('/');
        out.push_str(path);
        Cow::Owned(out)
    }
}
