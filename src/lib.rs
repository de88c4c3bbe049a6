#![cfg_attr(not(feature = "std"), no_std)]

//! Lenient URL decomposition for telemetry.
//!
//! Splits any string into protocol, auth, host, path, query and hash without
//! ever failing, fills relative URLs from an injected ambient location, and
//! serializes back with credentials replaced by `[REDACTED]`.
//!
//! ```
//! use slimurl::{Location, parse_url, parse_url_with};
//!
//! let url = parse_url("http://a@b@c/");
//! assert_eq!(url.auth(), "a@b");
//! assert_eq!(url.host(), "c");
//! assert_eq!(url.href(), "http://[REDACTED]@c/");
//!
//! let page = Location::new("https:", "app.example");
//! let url = parse_url_with("api/foo", &page);
//! assert_eq!(url.href(), "https://app.example/api/foo");
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod location;
mod parsed_url;
mod parser;
mod redact;
mod scheme;

// Public API
pub use error::LocationError;
pub use location::{Location, LocationProvider, NoLocation};
pub use parsed_url::ParsedUrl;
pub use redact::REDACTED;
pub use scheme::{ExtractedProtocol, extract_protocol};

/// Parse `raw` without any ambient location.
pub fn parse_url(raw: &str) -> ParsedUrl {
    ParsedUrl::parse(raw, None)
}

/// Parse `raw`, using `provider` as the ambient location for relative URLs.
pub fn parse_url_with<P: LocationProvider + ?Sized>(raw: &str, provider: &P) -> ParsedUrl {
    ParsedUrl::parse_with(raw, provider)
}
