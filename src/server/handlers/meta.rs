//! Service metadata endpoints.

/// GET /about returns a product blurb with the crate version.
pub async fn about() -> String {
    format!(
        "Wren is a lightweight desktop web browser.\nVersion: {}",
        env!("CARGO_PKG_VERSION")
    )
}
