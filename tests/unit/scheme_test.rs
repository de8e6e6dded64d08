//! Unit tests for internal `wren://` URL resolution.

use rstest::rstest;
use wrenbrowser::scheme::{self, InternalPage};

// ---------------------------------------------------------------------------
// URL to page mapping
// ---------------------------------------------------------------------------

/// Each internal URL resolves to its page; anything unrecognized after the
/// scheme falls back to the home page.
#[rstest]
#[case("wren://home", InternalPage::Home)]
#[case("wren://bookmark", InternalPage::Bookmarks)]
#[case("wren://history", InternalPage::History)]
#[case("wren://setting", InternalPage::Settings)]
#[case("wren://bookmark/", InternalPage::Bookmarks)]
#[case("wren://", InternalPage::Home)]
#[case("wren://start", InternalPage::Home)]
#[case("wren://settings", InternalPage::Home)]
fn test_internal_url_resolution(#[case] url: &str, #[case] expected: InternalPage) {
    assert_eq!(InternalPage::from_url(url), Some(expected), "url={url}");
}

/// URLs outside the internal scheme do not resolve at all.
#[rstest]
#[case("https://example.com")]
#[case("http://127.0.0.1:8747/home")]
#[case("file:///tmp/page.html")]
#[case("wren:home")]
#[case("")]
fn test_external_urls_do_not_resolve(#[case] url: &str) {
    assert_eq!(InternalPage::from_url(url), None, "url={url}");
    assert!(!scheme::is_internal(url), "url={url}");
}

// ---------------------------------------------------------------------------
// Facade translation
// ---------------------------------------------------------------------------

/// Internal URLs translate to loopback facade URLs with the chosen port.
#[rstest]
#[case("wren://home", "http://127.0.0.1:8747/home")]
#[case("wren://bookmark", "http://127.0.0.1:8747/bookmark")]
#[case("wren://history", "http://127.0.0.1:8747/history")]
#[case("wren://setting", "http://127.0.0.1:8747/setting")]
#[case("wren://unknown-page", "http://127.0.0.1:8747/home")]
fn test_to_local_url(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(scheme::to_local_url(url, 8747).as_deref(), Some(expected));
}

#[test]
fn test_to_local_url_uses_given_port() {
    assert_eq!(
        scheme::to_local_url("wren://history", 9090).as_deref(),
        Some("http://127.0.0.1:9090/history")
    );
}

#[test]
fn test_to_local_url_ignores_external_urls() {
    assert_eq!(scheme::to_local_url("https://example.com", 8747), None);
}

#[test]
fn test_home_url_constant_resolves_home() {
    assert!(scheme::is_internal(scheme::HOME_URL));
    assert_eq!(InternalPage::from_url(scheme::HOME_URL), Some(InternalPage::Home));
}
