//! Tests for [`NoMatch`], [`DispatchError`], and [`BuildError`].

use std::error::Error as _;
use std::fmt;

use insta::assert_snapshot;

use crate::{BuildError, ConfigError, DispatchConfig, DispatchError, NoMatch};

#[derive(Debug, PartialEq, Eq)]
struct Timeout {
    millis: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "timed out after {}ms", self.millis)
    }
}

impl std::error::Error for Timeout {}

#[test]
fn no_match_reports_case_count() {
    let no_match = NoMatch::new(3);
    assert_eq!(no_match.cases(), 3);
    assert_snapshot!(no_match.to_string(), @"no case matched the input (3 cases tried)");
}

#[test]
fn no_match_converts_into_dispatch_error() {
    let error: DispatchError<Timeout> = NoMatch::new(2).into();

    assert!(error.is_no_match());
    assert_eq!(error.no_match(), Some(&NoMatch::new(2)));
    assert!(error.handler_error().is_none());
    assert!(error.into_handler_error().is_none());
}

#[test]
fn no_match_display_is_transparent() {
    let error: DispatchError<Timeout> = NoMatch::new(1).into();
    assert_eq!(error.to_string(), NoMatch::new(1).to_string());
}

#[test]
fn handler_error_is_carried_unmodified() {
    let error = DispatchError::Handler(Timeout { millis: 250 });

    assert!(!error.is_no_match());
    assert!(error.no_match().is_none());
    assert_eq!(error.handler_error(), Some(&Timeout { millis: 250 }));
    assert_eq!(error.to_string(), "timed out after 250ms");
    assert_eq!(error.into_handler_error(), Some(Timeout { millis: 250 }));
}

#[test]
fn dispatch_error_is_a_std_error() {
    let error = DispatchError::Handler(Timeout { millis: 5 });
    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn unreachable_case_error_names_both_positions() {
    let error = BuildError::unreachable_case(3, "u8", 1);

    assert_eq!(
        error,
        BuildError::UnreachableCase {
            index: 3,
            label: String::from("u8"),
            catch_all_index: 1,
        }
    );
    assert_snapshot!(
        error.to_string(),
        @"case 3 (u8) is unreachable after the catch-all case at 1"
    );
}

#[test]
fn config_error_wraps_parse_failures() {
    let error = DispatchConfig::from_json_str("{").expect_err("truncated JSON");

    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().starts_with("invalid dispatch configuration: "));
    assert!(error.source().is_some());
}
