#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture runner
///
/// Runs every case from `urltestdata.json` against `slimurl`.
use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_tests};
use slimurl::{Location, ParsedUrl};

fn check(
    result: &mut Vec<FixtureFailure>,
    test_num: usize,
    input: &str,
    field: &str,
    expected: Option<&str>,
    actual: &str,
) {
    if let Some(expected) = expected.filter(|expected| *expected != actual) {
        result.push(FixtureFailure {
            test_num,
            input: input.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
}

/// Run fixture cases and return results
pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            location,
            protocol,
            auth,
            host,
            path,
            query,
            hash,
            relative,
            origin,
            href,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let location = location.as_ref().map(Location::from);
        let url = ParsedUrl::parse(&input, location.as_ref());

        let mut failures = Vec::new();
        check(&mut failures, test_num, &input, "protocol", protocol.as_deref(), url.protocol());
        check(&mut failures, test_num, &input, "auth", auth.as_deref(), url.auth());
        check(&mut failures, test_num, &input, "host", host.as_deref(), url.host());
        check(&mut failures, test_num, &input, "path", path.as_deref(), url.path());
        check(&mut failures, test_num, &input, "query", query.as_deref(), url.query());
        check(&mut failures, test_num, &input, "hash", hash.as_deref(), url.hash());
        check(&mut failures, test_num, &input, "origin", origin.as_deref(), &url.origin());
        check(&mut failures, test_num, &input, "href", href.as_deref(), &url.href());
        if let Some(expected) = relative {
            let actual = if url.is_relative() { "true" } else { "false" };
            let expected = if expected { "true" } else { "false" };
            check(&mut failures, test_num, &input, "relative", Some(expected), actual);
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[test]
fn test_all_fixtures() {
    let result = run_fixtures(load_tests());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?}: {} expected {:?}, got {:?}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed > 0);
}
