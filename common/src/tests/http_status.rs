use crate::HttpStatusCode;

/// **VALUE**: The control channel's success rule is exactly 200..=299.
///
/// **BUG THIS CATCHES**: An off-by-one here would turn 300 redirects into successes
/// (and then undecodable bodies) or reject 299.
#[test]
fn given_status_boundaries_when_checking_success_then_only_2xx_succeeds() {
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(403).is_success());
    assert!(!HttpStatusCode(500).is_success());
}

#[test]
fn given_error_statuses_when_classified_then_client_and_server_ranges_split() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_401_or_403_when_checking_auth_then_reports_rejected_token() {
    assert!(HttpStatusCode(401).is_auth_rejected());
    assert!(HttpStatusCode(403).is_auth_rejected());
    assert!(!HttpStatusCode(404).is_auth_rejected());
}

#[test]
fn given_status_code_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode::from(418).to_string(), "418");
}
