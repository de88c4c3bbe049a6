/// Component of a [`ParsedUrl`](crate::ParsedUrl) filled by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hash,
    Query,
    Path,
    Auth,
    Host,
}

impl Field {
    /// Whether an empty value falls back to the ambient location for relative URLs
    pub fn inherits_from_location(self) -> bool {
        self == Self::Host
    }
}

/// One step of the tokenizer. Each rule takes a value out of the remaining
/// address and leaves the rest for the next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Split at the first `delimiter`: the suffix (delimiter included) is the
    /// value, the prefix remains.
    Suffix { delimiter: u8, field: Field },
    /// Split at the last `delimiter`: the prefix is the value, the delimiter is
    /// dropped and the suffix remains.
    Prefix { delimiter: u8, field: Field },
    /// The whole remaining address is the value, nothing remains.
    Remainder { field: Field },
}

/// Rules for inputs where `//` introduces an authority
pub const AUTHORITY_RULES: [Rule; 5] = [
    Rule::Suffix {
        delimiter: b'#',
        field: Field::Hash,
    },
    Rule::Suffix {
        delimiter: b'?',
        field: Field::Query,
    },
    Rule::Suffix {
        delimiter: b'/',
        field: Field::Path,
    },
    Rule::Prefix {
        delimiter: b'@',
        field: Field::Auth,
    },
    Rule::Remainder { field: Field::Host },
];

/// Rules for inputs without `//`: after hash and query, everything is path
pub const PATH_RULES: [Rule; 5] = [
    Rule::Suffix {
        delimiter: b'#',
        field: Field::Hash,
    },
    Rule::Suffix {
        delimiter: b'?',
        field: Field::Query,
    },
    Rule::Remainder { field: Field::Path },
    Rule::Prefix {
        delimiter: b'@',
        field: Field::Auth,
    },
    Rule::Remainder { field: Field::Host },
];

/// Select the rule table once per parse
pub fn rules_for(slashes: bool) -> &'static [Rule; 5] {
    if slashes {
        &AUTHORITY_RULES
    } else {
        &PATH_RULES
    }
}

impl Rule {
    pub fn field(self) -> Field {
        match self {
            Self::Suffix { field, .. } | Self::Prefix { field, .. } | Self::Remainder { field } => {
                field
            }
        }
    }

    /// Apply this rule to `address`.
    /// Returns `(value, remaining)`; `value` is `None` when the delimiter is absent.
    pub fn apply(self, address: &str) -> (Option<&str>, &str) {
        let bytes = address.as_bytes();
        match self {
            Self::Suffix { delimiter, .. } => memchr::memchr(delimiter, bytes)
                .map_or((None, address), |pos| {
                    (Some(&address[pos..]), &address[..pos])
                }),
            Self::Prefix { delimiter, .. } => memchr::memrchr(delimiter, bytes)
                .map_or((None, address), |pos| {
                    (Some(&address[..pos]), &address[pos + 1..])
                }),
            Self::Remainder { .. } => (Some(address), ""),
        }
    }
}
