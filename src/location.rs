use crate::compat::{String, ToString};
use crate::error::LocationError;
use crate::parsed_url::ParsedUrl;

/// Snapshot of the current execution context's URL ("ambient location").
///
/// Relative inputs inherit their protocol and host from this snapshot.
/// `Location::default()` is the empty snapshot: no defaults available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub protocol: String,
    pub host: String,
    pub path: String,
    pub query: String,
    pub hash: String,
}

impl Location {
    /// Create a snapshot with only protocol and host set
    pub fn new(protocol: &str, host: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            host: host.to_string(),
            ..Self::default()
        }
    }
}

impl From<&ParsedUrl> for Location {
    fn from(url: &ParsedUrl) -> Self {
        Self {
            protocol: url.protocol().to_string(),
            host: url.host().to_string(),
            path: url.path().to_string(),
            query: url.query().to_string(),
            hash: url.hash().to_string(),
        }
    }
}

/// Source of the ambient location.
///
/// `Ok(None)` means the context has no location at all (e.g. headless).
/// An `Err` is logged and then treated exactly like `Ok(None)`.
pub trait LocationProvider {
    fn location(&self) -> Result<Option<Location>, LocationError>;
}

/// Provider for contexts without any ambient location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn location(&self) -> Result<Option<Location>, LocationError> {
        Ok(None)
    }
}

impl LocationProvider for Location {
    fn location(&self) -> Result<Option<Location>, LocationError> {
        Ok(Some(self.clone()))
    }
}

impl<F> LocationProvider for F
where
    F: Fn() -> Result<Option<Location>, LocationError>,
{
    fn location(&self) -> Result<Option<Location>, LocationError> {
        self()
    }
}

/// Take one snapshot from `provider`, swallowing provider failures.
pub(crate) fn capture<P: LocationProvider + ?Sized>(provider: &P) -> Option<Location> {
    match provider.location() {
        Ok(Some(location)) => Some(location),
        Ok(None) => {
            tracing::debug!("no ambient location, relative urls get no defaults");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "ambient location provider failed, ignoring it");
            None
        }
    }
}
