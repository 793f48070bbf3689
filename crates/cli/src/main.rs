use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use warden_dns_application::ResolveQuery;
use warden_dns_domain::{CliOverrides, Config};
use warden_dns_infrastructure::dns::forwarding::UpstreamForwarder;
use warden_dns_infrastructure::dns::server::WardenRequestHandler;
use warden_dns_infrastructure::repositories::{
    SqliteQueryLogStore, SqliteRecordStore, SqliteZoneStore,
};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "warden-dns")]
#[command(version)]
#[command(about = "Warden DNS - zone-store-backed DNS server with query auditing")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Warden DNS v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url).await?;

    let zones = Arc::new(SqliteZoneStore::new(pool.clone()));
    let records = Arc::new(SqliteRecordStore::new(pool.clone()));
    let logs = Arc::new(SqliteQueryLogStore::new(pool));

    let forwarder = Arc::new(UpstreamForwarder::new(
        config.forwarding.upstream_addrs()?,
        Duration::from_millis(config.forwarding.timeout_ms),
        logs.clone(),
    ));
    if config.forwarding.enabled {
        info!(
            upstreams = config.forwarding.upstreams.len(),
            timeout_ms = config.forwarding.timeout_ms,
            "Forwarding enabled"
        );
    }

    let engine = Arc::new(ResolveQuery::new(
        zones,
        records,
        logs,
        forwarder,
        config.forwarding.enabled,
    ));
    let handler = WardenRequestHandler::new(engine);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        result = server::run_dns_server(bind_addr, handler) => {
            result?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
