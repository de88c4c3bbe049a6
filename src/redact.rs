use core::fmt;

/// Placeholder written in place of any credential in a serialized URL.
pub const REDACTED: &str = "[REDACTED]";

/// Write the redacted form of `auth` followed by `@`.
///
/// The user part becomes [`REDACTED`] when non-empty; a non-empty password
/// (everything after the first `:`) appends `:` and [`REDACTED`]. Nothing is
/// written for an empty `auth`.
pub fn write_redacted_auth<W: fmt::Write>(out: &mut W, auth: &str) -> fmt::Result {
    if auth.is_empty() {
        return Ok(());
    }
    let (user, password) = auth.split_once(':').unwrap_or((auth, ""));
    if !user.is_empty() {
        out.write_str(REDACTED)?;
    }
    if !password.is_empty() {
        out.write_char(':')?;
        out.write_str(REDACTED)?;
    }
    out.write_char('@')
}
