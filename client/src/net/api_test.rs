use super::*;

#[test]
fn endpoint_joins_configured_base_with_path() {
    let url = endpoint(endpoints::DASHBOARD);
    assert!(url.ends_with("/api/user/dashboard"));
    assert!(!url.contains("//api"));
}

#[test]
fn not_available_is_a_network_error() {
    assert!(matches!(not_available(), ApiError::Network(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_the_browser_fail_without_panicking() {
    let result = futures::executor::block_on(dashboard("tok".to_owned()));
    assert_eq!(result, Err(not_available()));
}
