use super::*;

#[test]
fn parse_bearer_extracts_token() {
    assert_eq!(parse_bearer("Bearer abc123"), Some("abc123"));
}

#[test]
fn parse_bearer_requires_scheme() {
    assert_eq!(parse_bearer("abc123"), None);
    assert_eq!(parse_bearer("Basic abc123"), None);
}

#[test]
fn parse_bearer_rejects_empty_token() {
    assert_eq!(parse_bearer("Bearer "), None);
    assert_eq!(parse_bearer("Bearer    "), None);
}

#[test]
fn parse_bearer_is_case_sensitive_on_scheme() {
    assert_eq!(parse_bearer("bearer abc123"), None);
}

#[test]
fn parse_bearer_trims_surrounding_whitespace() {
    assert_eq!(parse_bearer("Bearer   abc123  "), Some("abc123"));
}
