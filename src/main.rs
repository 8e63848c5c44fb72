use clap::Parser;
use pointdns_mock::{config::MockConfig, error::Result, http_server::HttpServer, mock::MockServer};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Mock PointDNS zone API
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to listen on (overrides POINTDNS_MOCK_BIND_ADDR)
    #[arg(short, long, value_name = "ADDRESS:PORT")]
    bind: Option<SocketAddr>,

    /// Redirect target for unauthenticated GET /zones
    #[arg(long, value_name = "URL")]
    sign_in_url: Option<String>,

    /// Shared API token accepted as the password of any user
    #[arg(long, value_name = "TOKEN")]
    api_token: Option<String>,

    /// Start with no zones and no users
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = MockConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = args.sign_in_url {
        config.sign_in_url = url;
    }
    if let Some(token) = args.api_token {
        config.api_token = Some(token);
    }
    if args.empty {
        config.seed_demo_data = false;
    }
    config.validate()?;

    let mock = MockServer::new(config.sign_in_url.clone());
    if config.seed_demo_data {
        mock.seed_demo_data()?;
    }
    if let Some(token) = &config.api_token {
        mock.set_api_token(token.clone());
        info!("API token authentication enabled");
    }

    HttpServer::new(mock, config.bind_addr).start().await?;

    Ok(())
}
