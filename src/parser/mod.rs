mod rule;

use rule::{Field, rules_for};

use crate::compat::{String, ToString};
use crate::helpers::{ensure_leading_slash, replace_first_backslash};
use crate::location::Location;
use crate::parsed_url::ParsedUrl;

/// Values taken out of the address, borrowed until the record is built
#[derive(Debug, Default)]
struct Fields<'a> {
    hash: &'a str,
    query: &'a str,
    path: &'a str,
    auth: &'a str,
    host: &'a str,
}

impl<'a> Fields<'a> {
    fn set(&mut self, field: Field, value: &'a str) {
        let slot = match field {
            Field::Hash => &mut self.hash,
            Field::Query => &mut self.query,
            Field::Path => &mut self.path,
            Field::Auth => &mut self.auth,
            Field::Host => &mut self.host,
        };
        *slot = value;
    }
}

/// Inherited value for `field`, if the location provides one
fn inherited(field: Field, location: Option<&Location>) -> &str {
    match (field, location) {
        (Field::Host, Some(location)) => location.host.as_str(),
        _ => "",
    }
}

/// Tokenize the address left over by [`extract_protocol`](crate::extract_protocol).
///
/// `protocol` is the extracted (lowercased) scheme, possibly empty. `location`
/// is the ambient snapshot, already captured by the caller.
pub fn parse(
    address: &str,
    slashes: bool,
    protocol: String,
    location: Option<&Location>,
) -> ParsedUrl {
    let address = replace_first_backslash(address);
    let relative = protocol.is_empty() && !slashes;

    let mut fields = Fields::default();
    let mut remaining: &str = &address;
    for &rule in rules_for(slashes) {
        let (value, rest) = rule.apply(remaining);
        remaining = rest;

        let field = rule.field();
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ if relative && field.inherits_from_location() => inherited(field, location),
            _ => "",
        };
        fields.set(field, value);
    }

    let path = if relative {
        ensure_leading_slash(fields.path)
    } else {
        fields.path.into()
    };

    let protocol = if protocol.is_empty() {
        location.map_or_else(String::new, |location| location.protocol.clone())
    } else {
        protocol
    };

    let url = ParsedUrl::from_parts(
        protocol,
        fields.auth.to_string(),
        fields.host.to_lowercase(),
        path.into_owned(),
        fields.query.to_string(),
        fields.hash.to_string(),
        relative,
    );

    tracing::trace!(
        protocol = url.protocol(),
        host = url.host(),
        path = url.path(),
        relative,
        has_auth = url.has_credentials(),
        "tokenized address"
    );

    url
}
