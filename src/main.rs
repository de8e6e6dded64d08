//! Wren facade service binary.
//!
//! Opens the storage file and serves the local HTTP facade on loopback until
//! terminated. The GUI shell starts this binary in the background and points
//! internal `wren://` pages at it.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use wrenbrowser::app::App;
use wrenbrowser::config::ServiceConfig;
use wrenbrowser::server::{self, ApiState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    let db_path = config.db_path();

    let app = App::open(&db_path)?;
    app.startup()?;
    tracing::info!("storage ready at {}", db_path.display());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("facade listening on http://{}", addr);

    server::serve(listener, ApiState::new(app.database()), config.pages_dir).await?;
    Ok(())
}
