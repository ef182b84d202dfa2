use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "placepull-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn text(query: &str) -> SearchCriteria {
    SearchCriteria::Text {
        query: query.to_owned(),
    }
}

#[test]
fn text_search_url_carries_key_and_query() {
    let client = test_client("https://maps.example.com/api/place");
    let url = client.search_url(&text("coffee"), None).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/api/place/textsearch/json?key=test-key&query=coffee"
    );
}

#[test]
fn text_search_url_encodes_query() {
    let client = test_client("https://maps.example.com/api/place");
    let url = client
        .search_url(&text("real estate in Dubai"), None)
        .unwrap();
    assert!(
        url.as_str().contains("query=real+estate+in+Dubai")
            || url.as_str().contains("query=real%20estate%20in%20Dubai"),
        "query should be percent-encoded: {url}"
    );
}

#[test]
fn nearby_search_url_includes_location_and_radius() {
    let client = test_client("https://maps.example.com/api/place");
    let criteria = SearchCriteria::Nearby {
        latitude: 25.2,
        longitude: 55.27,
        radius_m: Some(1500),
    };
    let url = client.search_url(&criteria, None).unwrap();
    assert!(url.as_str().starts_with(
        "https://maps.example.com/api/place/nearbysearch/json?key=test-key&location=25.2%2C55.27"
    ));
    assert!(url.as_str().contains("radius=1500"));
}

#[test]
fn nearby_search_url_omits_radius_when_absent() {
    let client = test_client("https://maps.example.com/api/place");
    let criteria = SearchCriteria::Nearby {
        latitude: 25.2,
        longitude: 55.27,
        radius_m: None,
    };
    let url = client.search_url(&criteria, None).unwrap();
    assert!(!url.as_str().contains("radius="));
}

#[test]
fn page_token_is_appended_alongside_criteria() {
    let client = test_client("https://maps.example.com/api/place");
    let url = client.search_url(&text("coffee"), Some("tok-2")).unwrap();
    assert!(url.as_str().contains("query=coffee"));
    assert!(url.as_str().contains("pagetoken=tok-2"));
}

#[test]
fn detail_url_carries_place_id() {
    let client = test_client("https://maps.example.com/api/place");
    let url = client.detail_url("ChIJabc123").unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/api/place/details/json?key=test-key&place_id=ChIJabc123"
    );
}

#[test]
fn base_url_trailing_slash_is_normalised() {
    let client = test_client("https://maps.example.com/api/place/");
    let url = client.search_url(&text("coffee"), None).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/api/place/textsearch/json?key=test-key&query=coffee"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn ok_and_zero_results_statuses_pass() {
    assert!(check_envelope_status("OK", None).is_ok());
    assert!(check_envelope_status("ZERO_RESULTS", None).is_ok());
}

#[test]
fn error_status_surfaces_message() {
    let err = check_envelope_status("REQUEST_DENIED", Some("bad key")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("REQUEST_DENIED"), "got: {msg}");
    assert!(msg.contains("bad key"), "got: {msg}");
}

#[test]
fn redact_key_blanks_only_the_key_param() {
    let url = Url::parse("https://maps.example.com/x?key=secret&query=coffee").unwrap();
    let redacted = redact_key(&url);
    assert!(!redacted.contains("secret"), "got: {redacted}");
    assert!(redacted.contains("query=coffee"), "got: {redacted}");
}
