use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use tokio::net::TcpListener;
use toml::map::Map;
use tracing::warn;
use util::load_env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let secrets = match load_env("Secrets.dev.toml") {
        Ok(secrets) => secrets,
        Err(e) => {
            warn!("no secrets loaded, serving fallback content only: {}", e);
            Map::new()
        }
    };

    let gemini_api_key = secrets
        .get("GEMINI_API_KEY")
        .or_else(|| secrets.get("GOOGLE_API_KEY"))
        .and_then(|key| key.as_str())
        .map(str::to_string);

    let router = serve(gemini_api_key, "Config.dev.toml").await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
