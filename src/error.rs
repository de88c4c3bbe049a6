use crate::compat::String;

/// Errors a [`LocationProvider`](crate::LocationProvider) can report while
/// taking a snapshot of the ambient location.
///
/// These never escape the parser: a failing provider is treated the same as
/// an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The execution context has no notion of a current location
    Unavailable,
    /// The location exists but could not be read (e.g. a cross-origin frame)
    AccessDenied,
    /// Any other provider-specific failure
    Other(String),
}

impl core::fmt::Display for LocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => f.write_str("Location unavailable"),
            Self::AccessDenied => f.write_str("Location access denied"),
            Self::Other(reason) => write!(f, "Location provider failed: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LocationError {}
