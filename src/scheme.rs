use crate::character_sets::{is_scheme_byte, is_scheme_start_byte};
use crate::compat::String;

/// Result of splitting a raw URL string into scheme, slashes flag and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProtocol<'a> {
    /// Lowercased scheme including its trailing `:`, or empty
    pub protocol: String,
    /// Whether `//` immediately followed the (possibly absent) scheme
    pub slashes: bool,
    /// Everything after the scheme and slashes, unmodified
    pub address: &'a str,
}

/// Find the end of a leading `scheme:` token (index one past the colon).
fn scheme_end(bytes: &[u8]) -> Option<usize> {
    if !is_scheme_start_byte(*bytes.first()?) {
        return None;
    }
    let len = bytes[1..]
        .iter()
        .position(|&b| !is_scheme_byte(b))
        .map_or(bytes.len(), |pos| pos + 1);

    (bytes.get(len) == Some(&b':')).then_some(len + 1)
}

/// Split `raw` into its scheme, slashes flag and remaining address.
///
/// Equivalent to matching `^([a-z][a-z0-9.+-]*:)?(//)?(.*)$` case-insensitively.
/// Every input matches: in the worst case the whole string becomes `address`.
///
/// # Examples
///
/// ```
/// use slimurl::extract_protocol;
///
/// let parts = extract_protocol("HTTP://Example.com/a");
/// assert_eq!(parts.protocol, "http:");
/// assert!(parts.slashes);
/// assert_eq!(parts.address, "Example.com/a");
/// ```
pub fn extract_protocol(raw: &str) -> ExtractedProtocol<'_> {
    let (protocol, rest) = match scheme_end(raw.as_bytes()) {
        Some(end) => (raw[..end].to_ascii_lowercase(), &raw[end..]),
        None => (String::new(), raw),
    };

    let (slashes, address) = match rest.strip_prefix("//") {
        Some(address) => (true, address),
        None => (false, rest),
    };

    tracing::trace!(protocol = %protocol, slashes, "extracted protocol");

    ExtractedProtocol {
        protocol,
        slashes,
        address,
    }
}
