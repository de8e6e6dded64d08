//! Internal `wren://` URL handling.
//!
//! Internal pages are rendered by the local HTTP facade; a `wren://` URL is
//! translated into the facade path serving the matching page. Unrecognized
//! internal URLs fall back to the home page rather than failing.

/// URL scheme prefix for internal pages.
pub const SCHEME: &str = "wren://";

/// Canonical URL of the home page.
pub const HOME_URL: &str = "wren://home";

/// The set of internal pages served by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalPage {
    Home,
    Bookmarks,
    History,
    Settings,
}

impl InternalPage {
    /// Resolves an internal URL to its page.
    ///
    /// Returns `None` when the URL does not use the internal scheme at all.
    /// A `wren://` URL naming no known page resolves to `Home`.
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix(SCHEME)?;
        Some(match rest.trim_end_matches('/') {
            "bookmark" => InternalPage::Bookmarks,
            "history" => InternalPage::History,
            "setting" => InternalPage::Settings,
            _ => InternalPage::Home,
        })
    }

    /// Facade path serving this page.
    pub fn path(&self) -> &'static str {
        match self {
            InternalPage::Home => "/home",
            InternalPage::Bookmarks => "/bookmark",
            InternalPage::History => "/history",
            InternalPage::Settings => "/setting",
        }
    }
}

/// Returns true when `url` addresses an internal page.
pub fn is_internal(url: &str) -> bool {
    url.starts_with(SCHEME)
}

/// Translates an internal URL into the matching facade URL.
///
/// Returns `None` when the URL is not internal; such URLs load as ordinary
/// web pages.
pub fn to_local_url(url: &str, port: u16) -> Option<String> {
    let page = InternalPage::from_url(url)?;
    Some(format!("http://127.0.0.1:{}{}", port, page.path()))
}
