#![allow(clippy::expect_used)]

/// Fixture loader
///
/// Deserializes `urltestdata.json` and tracks pass/fail counts.
use serde::Deserialize;
use slimurl::Location;

const URL_TEST_DATA: &str = include_str!("urltestdata.json");

/// Ambient location as written in the fixture file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LocationData {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub host: String,
}

impl From<&LocationData> for Location {
    fn from(data: &LocationData) -> Self {
        Location::new(&data.protocol, &data.host)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case; absent fields are not checked
    UrlTest {
        input: String,
        #[serde(default)]
        location: Option<LocationData>,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        auth: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        hash: Option<String>,
        #[serde(default)]
        relative: Option<bool>,
        #[serde(default)]
        origin: Option<String>,
        #[serde(default)]
        href: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load all fixture entries, comments included
pub fn load_tests() -> Vec<TestCase> {
    serde_json::from_str(URL_TEST_DATA).expect("urltestdata.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_tests() {
        let tests = load_tests();
        let cases = tests
            .iter()
            .filter(|t| matches!(t, TestCase::UrlTest { .. }))
            .count();
        assert!(cases >= 30, "only {cases} cases loaded");
        assert!(tests.iter().any(|t| matches!(t, TestCase::Comment(_))));
    }

    #[test]
    fn test_summary() {
        let result = FixtureResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
